//! Button element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Alignment, Color, Size};
use crate::util::passthrough;

/// The `type` attribute of a `<button>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
	/// `type="button"`
	Button,
	/// `type="submit"`
	Submit,
	/// `type="reset"`
	Reset,
}

impl ButtonType {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

/// A Bulma button.
///
/// Renders as `<button class="button">` by default, or as an anchor when
/// `href` is set. Class tokens are emitted in field order: color, light,
/// text/ghost variants, size, then the layout and state flags, with the
/// caller's custom classes last.
#[derive(Debug, Clone, Default)]
pub struct Button {
	/// Optional `id` attribute, rendered first.
	pub id: Option<String>,
	/// Renders the button as `<a href="...">` instead of `<button>`.
	pub href: Option<String>,
	/// `type` attribute; only meaningful for the `<button>` form.
	pub button_type: Option<ButtonType>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Light variant of the color.
	pub light: bool,
	/// `is-text` variant (styled like a text link).
	pub text: bool,
	/// `is-ghost` variant.
	pub ghost: bool,
	/// Size modifier.
	pub size: Option<Size>,
	/// `is-fullwidth`
	pub full_width: bool,
	/// `is-outlined`
	pub outlined: bool,
	/// `is-inverted`
	pub inverted: bool,
	/// `is-rounded`
	pub rounded: bool,
	/// `is-loading`
	pub loading: bool,
	/// `is-static`
	pub is_static: bool,
	/// `disabled` presence attribute.
	pub disabled: bool,
	/// Custom classes, appended after every modifier token.
	pub classes: Vec<String>,
	/// Passthrough attributes, rendered after every built-in attribute.
	pub attrs: Vec<(String, String)>,
	/// Button content.
	pub body: Vec<Node>,
}

impl Button {
	/// Creates a button with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Renders as an anchor with the given `href`.
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Sets the `type` attribute.
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = Some(button_type);
		self
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

	/// Sets the size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Marks the button disabled.
	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}

	/// Shows the loading spinner.
	pub fn loading(mut self) -> Self {
		self.loading = true;
		self
	}

	/// Appends a custom class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Appends a passthrough attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.body.push(child.into_node());
		self
	}
}

impl Component for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("button")
			.with_opt(self.color.map(Color::class))
			.with_if(self.light, "is-light")
			.with_if(self.text, "is-text")
			.with_if(self.ghost, "is-ghost")
			.with_opt(self.size.map(Size::class))
			.with_if(self.full_width, "is-fullwidth")
			.with_if(self.outlined, "is-outlined")
			.with_if(self.inverted, "is-inverted")
			.with_if(self.rounded, "is-rounded")
			.with_if(self.loading, "is-loading")
			.with_if(self.is_static, "is-static")
			.extend(self.classes.iter().cloned());

		let tag = if self.href.is_some() { "a" } else { "button" };
		let mut el = Element::new(tag).attr_opt("id", self.id.clone());
		el = match &self.href {
			Some(href) => el.attr("href", href.clone()),
			None => el.attr_opt("type", self.button_type.map(ButtonType::as_str)),
		};
		el = el.flag_if("disabled", self.disabled);
		el = classes.apply(el);
		el = passthrough(el, &self.attrs);
		el.children(self.body.iter().cloned()).into_node()
	}
}

/// A group of buttons (`<div class="buttons">`).
#[derive(Debug, Clone, Default)]
pub struct Buttons {
	/// Group size (`are-small` / `are-medium` / `are-large`).
	pub size: Option<Size>,
	/// `has-addons`: attaches the buttons together.
	pub addons: bool,
	/// Group alignment.
	pub alignment: Alignment,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The buttons themselves.
	pub children: Vec<Node>,
}

impl Buttons {
	/// Creates an empty button group.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches the buttons together.
	pub fn addons(mut self) -> Self {
		self.addons = true;
		self
	}

	/// Sets the group alignment.
	pub fn alignment(mut self, alignment: Alignment) -> Self {
		self.alignment = alignment;
		self
	}

	/// Appends a button.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}
}

impl Component for Buttons {
	fn name(&self) -> &'static str {
		"Buttons"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("buttons")
			.with_opt(self.size.map(Size::group_class))
			.with_if(self.addons, "has-addons")
			.with(self.alignment.class())
			.extend(self.classes.iter().cloned());

		let el = classes.apply(Element::new("div"));
		passthrough(el, &self.attrs)
			.children(self.children.iter().cloned())
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_button() {
		let html = Button::new("Save").render_to_string();
		assert_eq!(html, "<button class=\"button\">Save</button>");
	}

	#[test]
	fn test_modifier_order_is_schema_order() {
		let button = Button {
			color: Some(Color::Primary),
			light: true,
			size: Some(Size::Large),
			rounded: true,
			..Button::new("Go")
		};
		assert_eq!(
			button.render_to_string(),
			"<button class=\"button is-primary is-light is-large is-rounded\">Go</button>"
		);
	}

	#[test]
	fn test_anchor_button() {
		let html = Button::new("Docs").href("/docs").render_to_string();
		assert_eq!(html, "<a href=\"/docs\" class=\"button\">Docs</a>");
	}

	#[test]
	fn test_disabled_renders_bare_attribute() {
		let html = Button::new("Save").disabled().render_to_string();
		assert_eq!(html, "<button disabled class=\"button\">Save</button>");
		assert!(!html.contains("disabled=\""));
	}

	#[test]
	fn test_attribute_order() {
		let html = Button::new("Send")
			.id("send")
			.button_type(ButtonType::Submit)
			.disabled()
			.attr("data-test", "send-button")
			.render_to_string();
		assert_eq!(
			html,
			"<button id=\"send\" type=\"submit\" disabled class=\"button\" \
			 data-test=\"send-button\">Send</button>"
		);
	}

	#[test]
	fn test_custom_classes_trail() {
		let html = Button::new("Go")
			.color(Color::Info)
			.class("foo")
			.class("bar")
			.render_to_string();
		assert_eq!(
			html,
			"<button class=\"button is-info foo bar\">Go</button>"
		);
	}

	#[test]
	fn test_buttons_group() {
		let group = Buttons::new()
			.addons()
			.child(Button::new("Yes").render())
			.child(Button::new("No").render());
		assert_eq!(
			group.render_to_string(),
			"<div class=\"buttons has-addons\">\
			 <button class=\"button\">Yes</button>\
			 <button class=\"button\">No</button></div>"
		);
	}

	#[test]
	fn test_buttons_group_size() {
		let group = Buttons {
			size: Some(Size::Small),
			..Buttons::new()
		};
		assert_eq!(
			group.render_to_string(),
			"<div class=\"buttons are-small\"></div>"
		);
	}
}
