//! Delete element (the round close cross).

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Size;
use crate::util::passthrough;

/// A `<button class="delete">` close cross.
#[derive(Debug, Clone, Default)]
pub struct Delete {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Accessible label (`aria-label`).
	pub label: Option<String>,
	/// Size modifier.
	pub size: Option<Size>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Delete {
	/// Creates a delete button.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the accessible label.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

impl Component for Delete {
	fn name(&self) -> &'static str {
		"Delete"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("delete")
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let el = Element::new("button")
			.attr_opt("id", self.id.clone())
			.attr_opt("aria-label", self.label.clone());
		passthrough(classes.apply(el), &self.attrs).into_node()
	}
}
