//! Message component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::elements::Delete;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// An `<article class="message">`.
///
/// The header renders only when header content is present; the delete
/// button renders only in a present header with `dismissible` set.
#[derive(Debug, Clone, Default)]
pub struct Message {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Size modifier.
	pub size: Option<Size>,
	/// Header content (`message-header`).
	pub header: Vec<Node>,
	/// Renders a delete button inside the header.
	pub dismissible: bool,
	/// Body content (`message-body`).
	pub body: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Message {
	/// Creates a message with the given body content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the header content.
	pub fn header(mut self, header: impl IntoNode) -> Self {
		self.header.push(header.into_node());
		self
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Sets the size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Renders a delete button in the header.
	pub fn dismissible(mut self) -> Self {
		self.dismissible = true;
		self
	}
}

impl Component for Message {
	fn name(&self) -> &'static str {
		"Message"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("message")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let el = Element::new("article").attr_opt("id", self.id.clone());
		let mut el = passthrough(classes.apply(el), &self.attrs);

		if !self.header.is_empty() {
			let mut header = Element::new("div")
				.attr("class", "message-header")
				.child(Element::new("p").children(self.header.iter().cloned()));
			if self.dismissible {
				header = header.child(Delete::new().label("delete").render());
			}
			el = el.child(header);
		}

		el.child(
			Element::new("div")
				.attr("class", "message-body")
				.children(self.body.iter().cloned()),
		)
		.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_body_only_message() {
		let html = Message::new("Just the body.").color(Color::Info).render_to_string();
		assert_eq!(
			html,
			"<article class=\"message is-info\">\
			 <div class=\"message-body\">Just the body.</div></article>"
		);
	}

	#[test]
	fn test_message_with_dismissible_header() {
		let html = Message::new("Body")
			.header("Hello")
			.dismissible()
			.color(Color::Danger)
			.render_to_string();
		assert_eq!(
			html,
			"<article class=\"message is-danger\">\
			 <div class=\"message-header\"><p>Hello</p>\
			 <button aria-label=\"delete\" class=\"delete\"></button></div>\
			 <div class=\"message-body\">Body</div></article>"
		);
	}

	#[test]
	fn test_dismissible_without_header_renders_no_delete() {
		let html = Message::new("Body").dismissible().render_to_string();
		assert!(!html.contains("delete"));
	}
}
