//! Select control.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// One `<option>` inside a [`Select`].
#[derive(Debug, Clone, Default)]
pub struct SelectOption {
	/// `value` attribute; omitted when `None`.
	pub value: Option<String>,
	/// Visible label.
	pub label: String,
	/// `selected` presence attribute.
	pub selected: bool,
	/// `disabled` presence attribute.
	pub disabled: bool,
}

impl SelectOption {
	/// Creates an option with a label only.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			..Self::default()
		}
	}

	/// Sets the `value` attribute.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Marks the option selected.
	pub fn selected(mut self) -> Self {
		self.selected = true;
		self
	}

	fn render(&self) -> Node {
		Element::new("option")
			.attr_opt("value", self.value.clone())
			.flag_if("selected", self.selected)
			.flag_if("disabled", self.disabled)
			.child(self.label.clone())
			.into_node()
	}
}

/// A `<div class="select">` wrapper with its `<select>`.
///
/// Bulma styles the wrapper; the state of the native control lives on the
/// inner `<select>` (the `multiple`/`disabled`/`required` presence
/// attributes and the `size` attribute).
#[derive(Debug, Clone, Default)]
pub struct Select {
	/// Optional `id` attribute (on the inner `<select>`).
	pub id: Option<String>,
	/// `name` attribute.
	pub name: Option<String>,
	/// `multiple` presence attribute; also adds `is-multiple` on the wrapper.
	pub multiple: bool,
	/// `size` attribute: number of visible options.
	pub displayed: Option<u8>,
	/// Color modifier (wrapper).
	pub color: Option<Color>,
	/// Size modifier (wrapper).
	pub size: Option<Size>,
	/// `is-rounded` (wrapper).
	pub rounded: bool,
	/// `is-loading` (wrapper).
	pub loading: bool,
	/// `disabled` presence attribute.
	pub disabled: bool,
	/// `required` presence attribute.
	pub required: bool,
	/// Custom classes (wrapper).
	pub classes: Vec<String>,
	/// Passthrough attributes (inner `<select>`).
	pub attrs: Vec<(String, String)>,
	/// The options.
	pub options: Vec<SelectOption>,
}

impl Select {
	/// Creates a select from options.
	pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
		Self {
			options: options.into_iter().collect(),
			..Self::default()
		}
	}

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Allows multiple selection.
	pub fn multiple(mut self) -> Self {
		self.multiple = true;
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
}

impl Component for Select {
	fn name(&self) -> &'static str {
		"Select"
	}

	fn render(&self) -> Node {
		let wrapper_classes = ClassList::new("select")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.with_if(self.multiple, "is-multiple")
			.with_if(self.rounded, "is-rounded")
			.with_if(self.loading, "is-loading")
			.extend(self.classes.iter().cloned());

		let select = Element::new("select")
			.attr_opt("id", self.id.clone())
			.attr_opt("name", self.name.clone())
			.attr_opt("size", self.displayed.map(|n| n.to_string()))
			.flag_if("multiple", self.multiple)
			.flag_if("disabled", self.disabled)
			.flag_if("required", self.required);
		let select =
			passthrough(select, &self.attrs).children(self.options.iter().map(SelectOption::render));

		wrapper_classes
			.apply(Element::new("div"))
			.child(select)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_select() {
		let select = Select::new([
			SelectOption::new("Rust").value("rs"),
			SelectOption::new("Go").value("go").selected(),
		])
		.name("lang");
		assert_eq!(
			select.render_to_string(),
			"<div class=\"select\"><select name=\"lang\">\
			 <option value=\"rs\">Rust</option>\
			 <option value=\"go\" selected>Go</option>\
			 </select></div>"
		);
	}

	#[test]
	fn test_multiple_sets_flag_and_wrapper_class() {
		let html = Select::new([SelectOption::new("a")]).multiple().render_to_string();
		assert!(html.contains("class=\"select is-multiple\""));
		assert!(html.contains("<select multiple>"));
		assert!(!html.contains("multiple=\""));
	}

	#[test]
	fn test_colored_rounded_select() {
		let html = Select {
			color: Some(Color::Primary),
			rounded: true,
			..Select::new([])
		}
		.render_to_string();
		assert!(html.starts_with("<div class=\"select is-primary is-rounded\">"));
	}
}
