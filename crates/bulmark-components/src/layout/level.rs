//! Level layout element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// A `<nav class="level">` horizontal bar.
///
/// Items added to `left`/`right` render inside `level-left`/`level-right`
/// groups; `items` render as direct `level-item` children (the centered
/// layout). Every item is wrapped in `<div class="level-item">`.
#[derive(Debug, Clone, Default)]
pub struct Level {
	/// `is-mobile`: keeps the level horizontal on mobile.
	pub mobile: bool,
	/// Items in the left group.
	pub left: Vec<Node>,
	/// Items in the right group.
	pub right: Vec<Node>,
	/// Direct (centered) items.
	pub items: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Level {
	/// Creates an empty level.
	pub fn new() -> Self {
		Self::default()
	}

	/// Keeps the level horizontal on mobile.
	pub fn mobile(mut self) -> Self {
		self.mobile = true;
		self
	}

	/// Appends an item to the left group.
	pub fn left(mut self, item: impl IntoNode) -> Self {
		self.left.push(item.into_node());
		self
	}

	/// Appends an item to the right group.
	pub fn right(mut self, item: impl IntoNode) -> Self {
		self.right.push(item.into_node());
		self
	}

	/// Appends a centered item.
	pub fn item(mut self, item: impl IntoNode) -> Self {
		self.items.push(item.into_node());
		self
	}
}

fn level_item(content: &Node) -> Node {
	Element::new("div")
		.attr("class", "level-item")
		.child(content.clone())
		.into_node()
}

fn side(class: &'static str, items: &[Node]) -> Node {
	if items.is_empty() {
		return Node::empty();
	}
	Element::new("div")
		.attr("class", class)
		.children(items.iter().map(level_item))
		.into_node()
}

impl Component for Level {
	fn name(&self) -> &'static str {
		"Level"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("level")
			.with_if(self.mobile, "is-mobile")
			.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("nav")), &self.attrs)
			.child(side("level-left", &self.left))
			.child(side("level-right", &self.right))
			.children(self.items.iter().map(level_item))
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_level_with_sides() {
		let html = Level::new().left("L").right("R").render_to_string();
		assert_eq!(
			html,
			"<nav class=\"level\">\
			 <div class=\"level-left\"><div class=\"level-item\">L</div></div>\
			 <div class=\"level-right\"><div class=\"level-item\">R</div></div></nav>"
		);
	}

	#[test]
	fn test_centered_level_items() {
		let html = Level::new().mobile().item("A").item("B").render_to_string();
		assert_eq!(
			html,
			"<nav class=\"level is-mobile\">\
			 <div class=\"level-item\">A</div>\
			 <div class=\"level-item\">B</div></nav>"
		);
	}
}
