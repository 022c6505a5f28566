//! Media object layout element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// An `<article class="media">` object: optional left figure, content,
/// optional right side.
#[derive(Debug, Clone, Default)]
pub struct Media {
	/// Content of the `media-left` figure.
	pub left: Vec<Node>,
	/// Main content (`media-content`).
	pub content: Vec<Node>,
	/// Content of the `media-right` side.
	pub right: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Media {
	/// Creates a media object with the given main content.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: vec![content.into_node()],
			..Self::default()
		}
	}

	/// Sets the left figure content.
	pub fn left(mut self, left: impl IntoNode) -> Self {
		self.left.push(left.into_node());
		self
	}

	/// Sets the right side content.
	pub fn right(mut self, right: impl IntoNode) -> Self {
		self.right.push(right.into_node());
		self
	}
}

impl Component for Media {
	fn name(&self) -> &'static str {
		"Media"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("media").extend(self.classes.iter().cloned());
		let mut el = passthrough(classes.apply(Element::new("article")), &self.attrs);

		if !self.left.is_empty() {
			el = el.child(
				Element::new("figure")
					.attr("class", "media-left")
					.children(self.left.iter().cloned()),
			);
		}
		el = el.child(
			Element::new("div")
				.attr("class", "media-content")
				.children(self.content.iter().cloned()),
		);
		if !self.right.is_empty() {
			el = el.child(
				Element::new("div")
					.attr("class", "media-right")
					.children(self.right.iter().cloned()),
			);
		}
		el.into_node()
	}
}
