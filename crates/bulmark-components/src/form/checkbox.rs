//! Checkbox and radio controls.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// A `<label class="checkbox">` wrapping its `<input type="checkbox">`.
///
/// A single space separates the box from the label content, matching the
/// markup Bulma documents.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
	/// Optional `id` attribute (on the input).
	pub id: Option<String>,
	/// `name` attribute.
	pub name: Option<String>,
	/// `value` attribute.
	pub value: Option<String>,
	/// `checked` presence attribute.
	pub checked: bool,
	/// `disabled` presence attribute.
	pub disabled: bool,
	/// Custom classes (label).
	pub classes: Vec<String>,
	/// Passthrough attributes (input).
	pub attrs: Vec<(String, String)>,
	/// Label content.
	pub body: Vec<Node>,
}

impl Checkbox {
	/// Creates a checkbox with the given label content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Marks the box checked.
	pub fn checked(mut self) -> Self {
		self.checked = true;
		self
	}

	/// Marks the control disabled.
	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}
}

fn toggle(kind: &'static str, base: &'static str, props: &Checkbox) -> Node {
	let input = Element::new("input")
		.attr_opt("id", props.id.clone())
		.attr("type", kind)
		.attr_opt("name", props.name.clone())
		.attr_opt("value", props.value.clone())
		.flag_if("checked", props.checked)
		.flag_if("disabled", props.disabled);
	let input = passthrough(input, &props.attrs);

	let classes = ClassList::new(base).extend(props.classes.iter().cloned());
	classes
		.apply(Element::new("label"))
		.child(input)
		.child(" ")
		.children(props.body.iter().cloned())
		.into_node()
}

impl Component for Checkbox {
	fn name(&self) -> &'static str {
		"Checkbox"
	}

	fn render(&self) -> Node {
		toggle("checkbox", "checkbox", self)
	}
}

/// A `<label class="radio">` wrapping its `<input type="radio">`.
/// Shares the [`Checkbox`] props shape.
#[derive(Debug, Clone, Default)]
pub struct Radio(pub Checkbox);

impl Radio {
	/// Creates a radio with the given label content.
	pub fn new(body: impl IntoNode) -> Self {
		Self(Checkbox::new(body))
	}

	/// Sets the `name` attribute (radios group by name).
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.0.name = Some(name.into());
		self
	}

	/// Sets the `value` attribute.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.0.value = Some(value.into());
		self
	}

	/// Marks the radio selected.
	pub fn checked(mut self) -> Self {
		self.0.checked = true;
		self
	}
}

impl Component for Radio {
	fn name(&self) -> &'static str {
		"Radio"
	}

	fn render(&self) -> Node {
		toggle("radio", "radio", &self.0)
	}
}
