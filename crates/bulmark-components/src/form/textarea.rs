//! Textarea control.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// A `<textarea class="textarea">` control. The value renders as the
/// element's (escaped) text content.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// `name` attribute.
	pub name: Option<String>,
	/// `placeholder` attribute.
	pub placeholder: Option<String>,
	/// `rows` attribute.
	pub rows: Option<u8>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Size modifier.
	pub size: Option<Size>,
	/// `has-fixed-size`: disables resizing.
	pub fixed_size: bool,
	/// `disabled` presence attribute.
	pub disabled: bool,
	/// `readonly` presence attribute.
	pub readonly: bool,
	/// `required` presence attribute.
	pub required: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Initial content.
	pub value: Option<String>,
}

impl Textarea {
	/// Creates a textarea.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the `placeholder` attribute.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the `rows` attribute.
	pub fn rows(mut self, rows: u8) -> Self {
		self.rows = Some(rows);
		self
	}

	/// Sets the initial content.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

impl Component for Textarea {
	fn name(&self) -> &'static str {
		"Textarea"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("textarea")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.with_if(self.fixed_size, "has-fixed-size")
			.extend(self.classes.iter().cloned());

		let el = Element::new("textarea")
			.attr_opt("id", self.id.clone())
			.attr_opt("name", self.name.clone())
			.attr_opt("placeholder", self.placeholder.clone())
			.attr_opt("rows", self.rows.map(|r| r.to_string()))
			.flag_if("disabled", self.disabled)
			.flag_if("readonly", self.readonly)
			.flag_if("required", self.required);
		let el = passthrough(classes.apply(el), &self.attrs);
		match &self.value {
			Some(value) => el.child(value.clone()),
			None => el,
		}
		.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_textarea() {
		assert_eq!(
			Textarea::new().render_to_string(),
			"<textarea class=\"textarea\"></textarea>"
		);
	}

	#[test]
	fn test_textarea_with_rows_and_value() {
		let html = Textarea::new()
			.name("bio")
			.rows(5)
			.value("hello\nworld")
			.render_to_string();
		assert_eq!(
			html,
			"<textarea name=\"bio\" rows=\"5\" class=\"textarea\">hello\nworld</textarea>"
		);
	}

	#[test]
	fn test_textarea_value_is_escaped() {
		let html = Textarea::new().value("<b>bold</b>").render_to_string();
		assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
	}
}
