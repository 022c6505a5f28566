//! Progress bar element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// A `<progress class="progress">` bar.
///
/// When `value` is unset the bar renders without a `value` attribute,
/// which Bulma styles as indeterminate.
#[derive(Debug, Clone)]
pub struct Progress {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Current value; `None` renders an indeterminate bar.
	pub value: Option<u32>,
	/// `max` attribute.
	pub max: u32,
	/// Color modifier.
	pub color: Option<Color>,
	/// Size modifier.
	pub size: Option<Size>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Fallback content shown by browsers without `<progress>` support.
	pub body: Vec<Node>,
}

impl Default for Progress {
	fn default() -> Self {
		Self {
			id: None,
			value: None,
			max: 100,
			color: None,
			size: None,
			classes: Vec::new(),
			attrs: Vec::new(),
			body: Vec::new(),
		}
	}
}

impl Progress {
	/// Creates an indeterminate progress bar with `max="100"`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the current value.
	pub fn value(mut self, value: u32) -> Self {
		self.value = Some(value);
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

impl Component for Progress {
	fn name(&self) -> &'static str {
		"Progress"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("progress")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let el = Element::new("progress")
			.attr_opt("id", self.id.clone())
			.attr_opt("value", self.value.map(|v| v.to_string()))
			.attr("max", self.max.to_string());
		passthrough(classes.apply(el), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}
