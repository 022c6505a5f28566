//! Notification element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::elements::delete::Delete;
use crate::modifiers::Color;
use crate::util::passthrough;

/// A `<div class="notification">` block.
///
/// When `dismissible` is set, a delete button is rendered as the first
/// child; when unset, no delete markup is present at all.
#[derive(Debug, Clone, Default)]
pub struct Notification {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Light variant of the color.
	pub light: bool,
	/// Renders a leading delete button.
	pub dismissible: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Notification content.
	pub body: Vec<Node>,
}

impl Notification {
	/// Creates a notification with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Uses the light variant of the color.
	pub fn light(mut self) -> Self {
		self.light = true;
		self
	}

	/// Renders a leading delete button.
	pub fn dismissible(mut self) -> Self {
		self.dismissible = true;
		self
	}

	/// Appends a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.body.push(child.into_node());
		self
	}
}

impl Component for Notification {
	fn name(&self) -> &'static str {
		"Notification"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("notification")
			.with_opt(self.color.map(Color::class))
			.with_if(self.light, "is-light")
			.extend(self.classes.iter().cloned());

		let mut el = Element::new("div").attr_opt("id", self.id.clone());
		el = classes.apply(el);
		el = passthrough(el, &self.attrs);
		if self.dismissible {
			el = el.child(Delete::new().render());
		}
		el.children(self.body.iter().cloned()).into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_notification() {
		assert_eq!(
			Notification::new("Saved.").render_to_string(),
			"<div class=\"notification\">Saved.</div>"
		);
	}

	#[test]
	fn test_colored_light_notification() {
		let html = Notification::new("Careful.")
			.color(Color::Warning)
			.light()
			.render_to_string();
		assert_eq!(
			html,
			"<div class=\"notification is-warning is-light\">Careful.</div>"
		);
	}

	#[test]
	fn test_dismissible_renders_leading_delete() {
		let html = Notification::new("Bye.").dismissible().render_to_string();
		assert_eq!(
			html,
			"<div class=\"notification\">\
			 <button class=\"delete\"></button>Bye.</div>"
		);
	}

	#[test]
	fn test_non_dismissible_has_no_delete_markup() {
		let html = Notification::new("Stay.").render_to_string();
		assert!(!html.contains("delete"));
	}
}
