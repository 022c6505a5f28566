//! Section and footer layout elements.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Size;
use crate::util::passthrough;

/// A `<section class="section">` vertical spacer.
#[derive(Debug, Clone, Default)]
pub struct Section {
	/// Size modifier (`is-medium` / `is-large`).
	pub size: Option<Size>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Section {
	/// Creates a section with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}
}

impl Component for Section {
	fn name(&self) -> &'static str {
		"Section"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("section")
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("section")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A `<footer class="footer">`.
#[derive(Debug, Clone, Default)]
pub struct Footer {
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Footer {
	/// Creates a footer with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}
}

impl Component for Footer {
	fn name(&self) -> &'static str {
		"Footer"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("footer").extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("footer")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}
