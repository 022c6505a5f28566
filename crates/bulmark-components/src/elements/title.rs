//! Title and subtitle elements.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::responsive::scale_class;
use crate::util::passthrough;

/// A `<h{n} class="title">` heading.
///
/// `heading` picks the HTML heading tag (clamped into 1–6); `size` picks
/// the `is-{1..7}` size class independently and is dropped when out of
/// range.
#[derive(Debug, Clone)]
pub struct Title {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Heading level, 1–6.
	pub heading: u8,
	/// `is-{1..7}` size class; defaults to the heading level.
	pub size: Option<u8>,
	/// `is-spaced`: keeps the normal margin below the title.
	pub spaced: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Heading content.
	pub body: Vec<Node>,
}

impl Default for Title {
	fn default() -> Self {
		Self {
			id: None,
			heading: 1,
			size: None,
			spaced: false,
			classes: Vec::new(),
			attrs: Vec::new(),
			body: Vec::new(),
		}
	}
}

impl Title {
	/// Creates a level-1 title with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the heading level (1–6).
	pub fn heading(mut self, heading: u8) -> Self {
		self.heading = heading;
		self
	}

	/// Sets the size class (1–7).
	pub fn size(mut self, size: u8) -> Self {
		self.size = Some(size);
		self
	}

	/// Keeps the normal margin below the title.
	pub fn spaced(mut self) -> Self {
		self.spaced = true;
		self
	}
}

fn heading_tag(level: u8) -> &'static str {
	match level.clamp(1, 6) {
		1 => "h1",
		2 => "h2",
		3 => "h3",
		4 => "h4",
		5 => "h5",
		_ => "h6",
	}
}

fn render_heading(base: &'static str, title: &Title) -> Node {
	let size = title.size.unwrap_or(title.heading);
	let classes = ClassList::new(base)
		.with_opt(scale_class("is", size, 1..=7, None))
		.with_if(title.spaced, "is-spaced")
		.extend(title.classes.iter().cloned());

	let el = Element::new(heading_tag(title.heading)).attr_opt("id", title.id.clone());
	passthrough(classes.apply(el), &title.attrs)
		.children(title.body.iter().cloned())
		.into_node()
}

impl Component for Title {
	fn name(&self) -> &'static str {
		"Title"
	}

	fn render(&self) -> Node {
		render_heading("title", self)
	}
}

/// A `<h{n} class="subtitle">` heading. Shares the [`Title`] props shape.
#[derive(Debug, Clone, Default)]
pub struct Subtitle(pub Title);

impl Subtitle {
	/// Creates a level-2 subtitle with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self(Title::new(body).heading(2))
	}

	/// Sets the heading level (1–6).
	pub fn heading(mut self, heading: u8) -> Self {
		self.0.heading = heading;
		self
	}

	/// Sets the size class (1–7).
	pub fn size(mut self, size: u8) -> Self {
		self.0.size = Some(size);
		self
	}
}

impl Component for Subtitle {
	fn name(&self) -> &'static str {
		"Subtitle"
	}

	fn render(&self) -> Node {
		render_heading("subtitle", &self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_title_defaults_to_h1_size_1() {
		assert_eq!(
			Title::new("Hello").render_to_string(),
			"<h1 class=\"title is-1\">Hello</h1>"
		);
	}

	#[test]
	fn test_title_heading_and_size_are_independent() {
		let html = Title::new("Section").heading(3).size(5).render_to_string();
		assert_eq!(html, "<h3 class=\"title is-5\">Section</h3>");
	}

	#[test]
	fn test_out_of_range_size_is_dropped() {
		let html = Title::new("Odd").heading(2).size(9).render_to_string();
		assert_eq!(html, "<h2 class=\"title\">Odd</h2>");
	}

	#[test]
	fn test_heading_level_clamps() {
		let html = Title::new("Deep").heading(9).render_to_string();
		assert!(html.starts_with("<h6"));
	}

	#[test]
	fn test_subtitle() {
		assert_eq!(
			Subtitle::new("Tagline").render_to_string(),
			"<h2 class=\"subtitle is-2\">Tagline</h2>"
		);
	}

	#[test]
	fn test_spaced_title() {
		let html = Title::new("Spaced").spaced().render_to_string();
		assert_eq!(html, "<h1 class=\"title is-1 is-spaced\">Spaced</h1>");
	}
}
