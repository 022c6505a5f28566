//! Panel component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Color;
use crate::util::passthrough;

/// One filter tab at the top of a [`Panel`].
#[derive(Debug, Clone, Default)]
pub struct PanelTab {
	/// Link target.
	pub href: String,
	/// `is-active` state class.
	pub active: bool,
	/// Tab label.
	pub label: String,
}

impl PanelTab {
	/// Creates a tab.
	pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			active: false,
			label: label.into(),
		}
	}

	/// Marks the tab active.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	fn render(&self) -> Node {
		let classes = ClassList::bare().with_if(self.active, "is-active");
		classes
			.apply_if_any(Element::new("a").attr("href", self.href.clone()))
			.child(self.label.clone())
			.into_node()
	}
}

/// One block in a [`Panel`].
#[derive(Debug, Clone, Default)]
pub struct PanelBlock {
	/// Renders as `<a>` when set, `<div>` otherwise.
	pub href: Option<String>,
	/// `is-active` state class.
	pub active: bool,
	/// Icon font classes for a leading `panel-icon`.
	pub icon: Option<String>,
	/// Block content.
	pub body: Vec<Node>,
}

impl PanelBlock {
	/// Creates a block with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Creates a link block.
	pub fn link(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			href: Some(href.into()),
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Marks the block active.
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
		let classes = ClassList::new("panel-block").with_if(self.active, "is-active");
		let tag = if self.href.is_some() { "a" } else { "div" };
		let mut el =
			classes.apply(Element::new(tag).attr_opt("href", self.href.clone()));
		if let Some(icon) = &self.icon {
			el = el.child(
				Element::new("span")
					.attr("class", "panel-icon")
					.child(Element::new("i").attr("class", icon.clone())),
			);
		}
		el.children(self.body.iter().cloned()).into_node()
	}
}

/// A `<nav class="panel">`.
#[derive(Debug, Clone, Default)]
pub struct Panel {
	/// Color modifier.
	pub color: Option<Color>,
	/// Panel heading.
	pub heading: String,
	/// Filter tabs below the heading.
	pub tabs: Vec<PanelTab>,
	/// The panel's blocks.
	pub blocks: Vec<PanelBlock>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Panel {
	/// Creates a panel with a heading.
	pub fn new(heading: impl Into<String>) -> Self {
		Self {
			heading: heading.into(),
			..Self::default()
		}
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Appends a filter tab.
	pub fn tab(mut self, tab: PanelTab) -> Self {
		self.tabs.push(tab);
		self
	}

	/// Appends a block.
	pub fn block(mut self, block: PanelBlock) -> Self {
		self.blocks.push(block);
		self
	}
}

impl Component for Panel {
	fn name(&self) -> &'static str {
		"Panel"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("panel")
			.with_opt(self.color.map(Color::class))
			.extend(self.classes.iter().cloned());

		let mut el = passthrough(classes.apply(Element::new("nav")), &self.attrs).child(
			Element::new("p")
				.attr("class", "panel-heading")
				.child(self.heading.clone()),
		);
		if !self.tabs.is_empty() {
			el = el.child(
				Element::new("p")
					.attr("class", "panel-tabs")
					.children(self.tabs.iter().map(PanelTab::render)),
			);
		}
		el.children(self.blocks.iter().map(PanelBlock::render))
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_panel_structure() {
		let panel = Panel::new("Repositories")
			.color(Color::Primary)
			.tab(PanelTab::new("#all", "All").active())
			.tab(PanelTab::new("#public", "Public"))
			.block(PanelBlock::link("/r/bulma", "bulma").icon("fas fa-book"));
		assert_eq!(
			panel.render_to_string(),
			"<nav class=\"panel is-primary\">\
			 <p class=\"panel-heading\">Repositories</p>\
			 <p class=\"panel-tabs\">\
			 <a href=\"#all\" class=\"is-active\">All</a>\
			 <a href=\"#public\">Public</a></p>\
			 <a href=\"/r/bulma\" class=\"panel-block\">\
			 <span class=\"panel-icon\"><i class=\"fas fa-book\"></i></span>\
			 bulma</a></nav>"
		);
	}

	#[test]
	fn test_panel_without_tabs() {
		let html = Panel::new("Empty").render_to_string();
		assert!(!html.contains("panel-tabs"));
	}
}
