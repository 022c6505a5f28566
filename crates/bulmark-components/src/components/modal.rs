//! Modal component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Size;
use crate::util::passthrough;

/// A `<div class="modal">` overlay with a plain content area.
#[derive(Debug, Clone, Default)]
pub struct Modal {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// `is-active`: shows the modal.
	pub active: bool,
	/// Renders the large close cross in the top-right corner.
	pub close_button: bool,
	/// Modal content (`modal-content`).
	pub content: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Modal {
	/// Creates a modal with the given content.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: vec![content.into_node()],
			close_button: true,
			..Self::default()
		}
	}

	/// Shows the modal.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}
}

fn close_cross() -> Node {
	let classes = ClassList::new("modal-close").with(Size::Large.class());
	classes
		.apply(Element::new("button").attr("aria-label", "close"))
		.into_node()
}

impl Component for Modal {
	fn name(&self) -> &'static str {
		"Modal"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("modal")
			.with_if(self.active, "is-active")
			.extend(self.classes.iter().cloned());

		let el = Element::new("div").attr_opt("id", self.id.clone());
		let mut el = passthrough(classes.apply(el), &self.attrs)
			.child(Element::new("div").attr("class", "modal-background"))
			.child(
				Element::new("div")
					.attr("class", "modal-content")
					.children(self.content.iter().cloned()),
			);
		if self.close_button {
			el = el.child(close_cross());
		}
		el.into_node()
	}
}

/// A `<div class="modal">` with a card layout: head, body and foot.
#[derive(Debug, Clone, Default)]
pub struct ModalCard {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// `is-active`: shows the modal.
	pub active: bool,
	/// Card title (`modal-card-title`).
	pub title: String,
	/// Card body content.
	pub body: Vec<Node>,
	/// Card foot content (typically buttons).
	pub foot: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl ModalCard {
	/// Creates a modal card.
	pub fn new(title: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			title: title.into(),
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Shows the modal.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	/// Appends foot content.
	pub fn foot(mut self, foot: impl IntoNode) -> Self {
		self.foot.push(foot.into_node());
		self
	}
}

impl Component for ModalCard {
	fn name(&self) -> &'static str {
		"ModalCard"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("modal")
			.with_if(self.active, "is-active")
			.extend(self.classes.iter().cloned());

		let head = Element::new("header")
			.attr("class", "modal-card-head")
			.child(
				Element::new("p")
					.attr("class", "modal-card-title")
					.child(self.title.clone()),
			)
			.child(
				Element::new("button")
					.attr("class", "delete")
					.attr("aria-label", "close"),
			);

		let mut card = Element::new("div")
			.attr("class", "modal-card")
			.child(head)
			.child(
				Element::new("section")
					.attr("class", "modal-card-body")
					.children(self.body.iter().cloned()),
			);
		if !self.foot.is_empty() {
			card = card.child(
				Element::new("footer")
					.attr("class", "modal-card-foot")
					.children(self.foot.iter().cloned()),
			);
		}

		let el = Element::new("div").attr_opt("id", self.id.clone());
		passthrough(classes.apply(el), &self.attrs)
			.child(Element::new("div").attr("class", "modal-background"))
			.child(card)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_inactive_modal() {
		let html = Modal::new("content").render_to_string();
		assert_eq!(
			html,
			"<div class=\"modal\">\
			 <div class=\"modal-background\"></div>\
			 <div class=\"modal-content\">content</div>\
			 <button aria-label=\"close\" class=\"modal-close is-large\"></button></div>"
		);
	}

	#[test]
	fn test_active_modal() {
		let html = Modal::new("x").active().render_to_string();
		assert!(html.starts_with("<div class=\"modal is-active\">"));
	}

	#[test]
	fn test_modal_card() {
		let html = ModalCard::new("Confirm", "Are you sure?")
			.foot(Node::text("buttons"))
			.render_to_string();
		assert_eq!(
			html,
			"<div class=\"modal\">\
			 <div class=\"modal-background\"></div>\
			 <div class=\"modal-card\">\
			 <header class=\"modal-card-head\">\
			 <p class=\"modal-card-title\">Confirm</p>\
			 <button class=\"delete\" aria-label=\"close\"></button></header>\
			 <section class=\"modal-card-body\">Are you sure?</section>\
			 <footer class=\"modal-card-foot\">buttons</footer>\
			 </div></div>"
		);
	}
}
