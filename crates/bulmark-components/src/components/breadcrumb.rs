//! Breadcrumb component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Alignment, Size};
use crate::util::passthrough;

/// Separator style between breadcrumb items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
	/// `/` (default, no modifier)
	#[default]
	Slash,
	/// `has-arrow-separator`
	Arrow,
	/// `has-bullet-separator`
	Bullet,
	/// `has-dot-separator`
	Dot,
	/// `has-succeeds-separator`
	Succeeds,
}

impl Separator {
	/// Returns the modifier class, or `""` for the default slash.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Slash => "",
			Self::Arrow => "has-arrow-separator",
			Self::Bullet => "has-bullet-separator",
			Self::Dot => "has-dot-separator",
			Self::Succeeds => "has-succeeds-separator",
		}
	}
}

/// One crumb in a [`Breadcrumb`].
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbItem {
	/// Link target.
	pub href: String,
	/// `is-active`: marks the current page. The list item then carries
	/// the state class; inactive items carry no class attribute.
	pub active: bool,
	/// Crumb content.
	pub body: Vec<Node>,
}

impl BreadcrumbItem {
	/// Creates a crumb.
	pub fn new(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			href: href.into(),
			active: false,
			body: vec![body.into_node()],
		}
	}

	/// Marks the crumb as the current page.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	fn render(&self) -> Node {
		let classes = ClassList::bare().with_if(self.active, "is-active");
		let link = Element::new("a")
			.attr("href", self.href.clone())
			.children(self.body.iter().cloned());
		classes
			.apply_if_any(Element::new("li"))
			.child(link)
			.into_node()
	}
}

/// A `<nav class="breadcrumb">` trail.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
	/// Alignment modifier.
	pub alignment: Alignment,
	/// Separator style.
	pub separator: Separator,
	/// Size modifier.
	pub size: Option<Size>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The crumbs.
	pub items: Vec<BreadcrumbItem>,
}

impl Breadcrumb {
	/// Creates a breadcrumb from crumbs.
	pub fn new(items: impl IntoIterator<Item = BreadcrumbItem>) -> Self {
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

	/// Sets the separator style.
	pub fn separator(mut self, separator: Separator) -> Self {
		self.separator = separator;
		self
	}
}

impl Component for Breadcrumb {
	fn name(&self) -> &'static str {
		"Breadcrumb"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("breadcrumb")
			.with(self.alignment.class())
			.with(self.separator.class())
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let el = Element::new("nav").attr("aria-label", "breadcrumbs");
		passthrough(classes.apply(el), &self.attrs)
			.child(Element::new("ul").children(self.items.iter().map(BreadcrumbItem::render)))
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_breadcrumb_trail() {
		let breadcrumb = Breadcrumb::new([
			BreadcrumbItem::new("/", "Home"),
			BreadcrumbItem::new("/docs", "Docs").active(),
		]);
		assert_eq!(
			breadcrumb.render_to_string(),
			"<nav aria-label=\"breadcrumbs\" class=\"breadcrumb\"><ul>\
			 <li><a href=\"/\">Home</a></li>\
			 <li class=\"is-active\"><a href=\"/docs\">Docs</a></li>\
			 </ul></nav>"
		);
	}

	#[test]
	fn test_inactive_items_have_no_class_attribute() {
		let html = Breadcrumb::new([BreadcrumbItem::new("/", "Home")]).render_to_string();
		assert!(html.contains("<li><a"));
		assert!(!html.contains("<li class"));
	}

	#[test]
	fn test_separator_and_alignment() {
		let html = Breadcrumb::new([])
			.alignment(Alignment::Centered)
			.separator(Separator::Arrow)
			.render_to_string();
		assert!(html.contains("class=\"breadcrumb is-centered has-arrow-separator\""));
	}
}
