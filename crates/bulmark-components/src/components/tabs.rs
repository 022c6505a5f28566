//! Tabs component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Alignment, Size};
use crate::util::passthrough;

/// One tab in a [`Tabs`] bar.
#[derive(Debug, Clone, Default)]
pub struct TabItem {
	/// Link target.
	pub href: String,
	/// `is-active` on the list item; inactive items carry no class.
	pub active: bool,
	/// Icon font classes for a leading icon.
	pub icon: Option<String>,
	/// Tab label.
	pub label: String,
}

impl TabItem {
	/// Creates a tab.
	pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			label: label.into(),
			..Self::default()
		}
	}

	/// Marks the tab active.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	/// Adds a leading icon.
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	fn render(&self) -> Node {
		let classes = ClassList::bare().with_if(self.active, "is-active");
		let mut link = Element::new("a").attr("href", self.href.clone());
		if let Some(icon) = &self.icon {
			link = link.child(
				Element::new("span")
					.attr("class", "icon is-small")
					.child(Element::new("i").attr("class", icon.clone())),
			);
		}
		link = link.child(Element::new("span").child(self.label.clone()));
		classes
			.apply_if_any(Element::new("li"))
			.child(link)
			.into_node()
	}
}

/// A `<div class="tabs">` bar.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
	/// Alignment modifier.
	pub alignment: Alignment,
	/// Size modifier.
	pub size: Option<Size>,
	/// `is-boxed`
	pub boxed: bool,
	/// `is-toggle`
	pub toggle: bool,
	/// `is-toggle-rounded` (implies `is-toggle`).
	pub toggle_rounded: bool,
	/// `is-fullwidth`
	pub full_width: bool,
	/// The tabs.
	pub items: Vec<TabItem>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Tabs {
	/// Creates a tab bar from tabs.
	pub fn new(items: impl IntoIterator<Item = TabItem>) -> Self {
		Self {
			items: items.into_iter().collect(),
			..Self::default()
		}
	}

	/// Sets the alignment.
	pub fn alignment(mut self, alignment: Alignment) -> Self {
		self.alignment = alignment;
		self
	}

	/// Sets the size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// `is-boxed`
	pub fn boxed(mut self) -> Self {
		self.boxed = true;
		self
	}

	/// `is-toggle`
	pub fn toggle(mut self) -> Self {
		self.toggle = true;
		self
	}
}

impl Component for Tabs {
	fn name(&self) -> &'static str {
		"Tabs"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("tabs")
			.with(self.alignment.class())
			.with_opt(self.size.map(Size::class))
			.with_if(self.boxed, "is-boxed")
			.with_if(self.toggle || self.toggle_rounded, "is-toggle")
			.with_if(self.toggle_rounded, "is-toggle-rounded")
			.with_if(self.full_width, "is-fullwidth")
			.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.child(Element::new("ul").children(self.items.iter().map(TabItem::render)))
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tabs_structure() {
		let tabs = Tabs::new([
			TabItem::new("#pictures", "Pictures").active(),
			TabItem::new("#music", "Music"),
		]);
		assert_eq!(
			tabs.render_to_string(),
			"<div class=\"tabs\"><ul>\
			 <li class=\"is-active\"><a href=\"#pictures\"><span>Pictures</span></a></li>\
			 <li><a href=\"#music\"><span>Music</span></a></li>\
			 </ul></div>"
		);
	}

	#[test]
	fn test_tab_with_icon() {
		let tabs = Tabs::new([TabItem::new("#", "Docs").icon("fas fa-book")]);
		assert!(tabs.render_to_string().contains(
			"<span class=\"icon is-small\"><i class=\"fas fa-book\"></i></span><span>Docs</span>"
		));
	}

	#[test]
	fn test_toggle_rounded_implies_toggle() {
		let tabs = Tabs {
			toggle_rounded: true,
			..Tabs::new([])
		};
		assert!(
			tabs.render_to_string()
				.contains("class=\"tabs is-toggle is-toggle-rounded\"")
		);
	}

	#[test]
	fn test_centered_boxed_tabs() {
		let html = Tabs::new([])
			.alignment(Alignment::Centered)
			.boxed()
			.render_to_string();
		assert!(html.contains("class=\"tabs is-centered is-boxed\""));
	}
}
