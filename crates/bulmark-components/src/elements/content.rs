//! Simple container elements: block, box and content.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Size;
use crate::util::passthrough;

/// A `<div class="block">` spacer.
#[derive(Debug, Clone, Default)]
pub struct Block {
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Block {
	/// Creates a block with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}
}

impl Component for Block {
	fn name(&self) -> &'static str {
		"Block"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("block").extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A `<div class="box">` bordered container.
#[derive(Debug, Clone, Default)]
pub struct Box {
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Box {
	/// Creates a box with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}
}

impl Component for Box {
	fn name(&self) -> &'static str {
		"Box"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("box").extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A `<div class="content">` rich-text container.
#[derive(Debug, Clone, Default)]
pub struct Content {
	/// Size modifier.
	pub size: Option<Size>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Content {
	/// Creates a content container with the given content.
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

impl Component for Content {
	fn name(&self) -> &'static str {
		"Content"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("content")
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}
