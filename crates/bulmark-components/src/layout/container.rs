//! Container layout element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// Width behavior of a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerWidth {
	/// Fixed width from the desktop breakpoint up (default, no modifier).
	#[default]
	Default,
	/// `is-widescreen`: full width until the widescreen breakpoint.
	Widescreen,
	/// `is-fullhd`: full width until the fullhd breakpoint.
	FullHd,
	/// `is-max-desktop`: never wider than the desktop width.
	MaxDesktop,
	/// `is-max-widescreen`: never wider than the widescreen width.
	MaxWidescreen,
	/// `is-fluid`: full width with a fixed margin.
	Fluid,
}

impl ContainerWidth {
	/// Returns the modifier class, or `""` for the default behavior.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Default => "",
			Self::Widescreen => "is-widescreen",
			Self::FullHd => "is-fullhd",
			Self::MaxDesktop => "is-max-desktop",
			Self::MaxWidescreen => "is-max-widescreen",
			Self::Fluid => "is-fluid",
		}
	}
}

/// A `<div class="container">`.
#[derive(Debug, Clone, Default)]
pub struct Container {
	/// Width behavior.
	pub width: ContainerWidth,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Content.
	pub body: Vec<Node>,
}

impl Container {
	/// Creates a container with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the width behavior.
	pub fn width(mut self, width: ContainerWidth) -> Self {
		self.width = width;
		self
	}
}

impl Component for Container {
	fn name(&self) -> &'static str {
		"Container"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("container")
			.with(self.width.class())
			.extend(self.classes.iter().cloned());
		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_container() {
		assert_eq!(
			Container::new("c").render_to_string(),
			"<div class=\"container\">c</div>"
		);
	}

	#[test]
	fn test_fluid_container() {
		assert_eq!(
			Container::new("c").width(ContainerWidth::Fluid).render_to_string(),
			"<div class=\"container is-fluid\">c</div>"
		);
	}
}
