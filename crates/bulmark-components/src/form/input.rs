//! Text input control.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// The `type` attribute of an `<input class="input">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
	/// `type="text"` (default)
	#[default]
	Text,
	/// `type="password"`
	Password,
	/// `type="email"`
	Email,
	/// `type="tel"`
	Tel,
	/// `type="number"`
	Number,
	/// `type="search"`
	Search,
	/// `type="url"`
	Url,
	/// `type="date"`
	Date,
	/// `type="time"`
	Time,
}

impl InputType {
	/// Returns the attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Password => "password",
			Self::Email => "email",
			Self::Tel => "tel",
			Self::Number => "number",
			Self::Search => "search",
			Self::Url => "url",
			Self::Date => "date",
			Self::Time => "time",
		}
	}
}

/// An `<input class="input">` control.
#[derive(Debug, Clone, Default)]
pub struct Input {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// `type` attribute.
	pub input_type: InputType,
	/// `name` attribute.
	pub name: Option<String>,
	/// `value` attribute.
	pub value: Option<String>,
	/// `placeholder` attribute.
	pub placeholder: Option<String>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Size modifier.
	pub size: Option<Size>,
	/// `is-rounded`
	pub rounded: bool,
	/// `is-static`: renders like plain text.
	pub is_static: bool,
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
}

impl Input {
	/// Creates a text input.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `type` attribute.
	pub fn input_type(mut self, input_type: InputType) -> Self {
		self.input_type = input_type;
		self
	}

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the `value` attribute.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the `placeholder` attribute.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
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

	/// Marks the input disabled.
	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}

	/// Marks the input read-only.
	pub fn readonly(mut self) -> Self {
		self.readonly = true;
		self
	}

	/// Marks the input required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl Component for Input {
	fn name(&self) -> &'static str {
		"Input"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("input")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.with_if(self.rounded, "is-rounded")
			.with_if(self.is_static, "is-static")
			.extend(self.classes.iter().cloned());

		let el = Element::new("input")
			.attr_opt("id", self.id.clone())
			.attr("type", self.input_type.as_str())
			.attr_opt("name", self.name.clone())
			.attr_opt("value", self.value.clone())
			.attr_opt("placeholder", self.placeholder.clone())
			.flag_if("disabled", self.disabled)
			.flag_if("readonly", self.readonly)
			.flag_if("required", self.required);
		passthrough(classes.apply(el), &self.attrs).into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_input() {
		assert_eq!(
			Input::new().render_to_string(),
			"<input type=\"text\" class=\"input\" />"
		);
	}

	#[test]
	fn test_full_attribute_order() {
		let html = Input::new()
			.input_type(InputType::Email)
			.name("email")
			.placeholder("you@example.com")
			.required()
			.color(Color::Danger)
			.render_to_string();
		assert_eq!(
			html,
			"<input type=\"email\" name=\"email\" placeholder=\"you@example.com\" \
			 required class=\"input is-danger\" />"
		);
	}

	#[test]
	fn test_presence_flags_absent_when_false() {
		let html = Input::new().render_to_string();
		assert!(!html.contains("disabled"));
		assert!(!html.contains("readonly"));
		assert!(!html.contains("required"));
	}

	#[test]
	fn test_value_is_escaped() {
		let html = Input::new().value("a \"b\" & c").render_to_string();
		assert!(html.contains("value=\"a &quot;b&quot; &amp; c\""));
	}
}
