//! HTML document shell assembly.
//!
//! A [`Document`] is a flat config struct that assembles the boilerplate
//! around a page: doctype, `<html>`/`<head>`/`<body>`, charset, viewport,
//! color scheme and stylesheet links. Assembly is mechanical; every field
//! has a sensible default and nothing is validated.

use std::io;

use bulmark_html::{Element, IntoNode, Node, RenderError};

use crate::classes::ClassList;
use crate::component::Component;

/// A `<meta name="..." content="...">` pair.
#[derive(Debug, Clone)]
pub struct Meta {
	/// `name` attribute.
	pub name: String,
	/// `content` attribute.
	pub content: String,
}

impl Meta {
	/// Creates a meta pair.
	pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
		}
	}
}

/// A complete HTML document.
///
/// [`Component::render`] returns the `<html>` element;
/// [`Component::render_to_string`] and [`Component::write_to`] prepend
/// the `<!DOCTYPE html>` preamble.
#[derive(Debug, Clone)]
pub struct Document {
	/// `lang` attribute of `<html>`.
	pub lang: String,
	/// Page title.
	pub title: String,
	/// Character set.
	pub charset: String,
	/// Viewport meta content.
	pub viewport: String,
	/// `color-scheme` meta content.
	pub color_scheme: String,
	/// Optional `theme-color` meta.
	pub theme_color: Option<String>,
	/// Optional `description` meta.
	pub description: Option<String>,
	/// Stylesheet URLs, one `<link rel="stylesheet">` each.
	pub stylesheets: Vec<String>,
	/// Additional named metas.
	pub metas: Vec<Meta>,
	/// Arbitrary extra head nodes (scripts, icons, ...).
	pub head_extra: Vec<Node>,
	/// Classes on `<body>`; the attribute is omitted when empty.
	pub body_classes: Vec<String>,
	/// Body content.
	pub body: Vec<Node>,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: String::new(),
			charset: "utf-8".to_string(),
			viewport: "width=device-width, initial-scale=1".to_string(),
			color_scheme: "light dark".to_string(),
			theme_color: None,
			description: None,
			stylesheets: Vec::new(),
			metas: Vec::new(),
			head_extra: Vec::new(),
			body_classes: Vec::new(),
			body: Vec::new(),
		}
	}
}

impl Document {
	/// Creates a document with a title and body content.
	pub fn new(title: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			title: title.into(),
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the `lang` attribute.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Appends a stylesheet link.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.stylesheets.push(href.into());
		self
	}

	/// Sets the `theme-color` meta.
	pub fn theme_color(mut self, color: impl Into<String>) -> Self {
		self.theme_color = Some(color.into());
		self
	}

	/// Sets the `description` meta.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Appends a named meta.
	pub fn meta(mut self, meta: Meta) -> Self {
		self.metas.push(meta);
		self
	}

	/// Appends an extra head node.
	pub fn head_node(mut self, node: impl IntoNode) -> Self {
		self.head_extra.push(node.into_node());
		self
	}

	fn head(&self) -> Element {
		let mut head = Element::new("head")
			.child(Element::new("meta").attr("charset", self.charset.clone()))
			.child(
				Element::new("meta")
					.attr("name", "viewport")
					.attr("content", self.viewport.clone()),
			)
			.child(
				Element::new("meta")
					.attr("name", "color-scheme")
					.attr("content", self.color_scheme.clone()),
			);
		if let Some(theme_color) = &self.theme_color {
			head = head.child(
				Element::new("meta")
					.attr("name", "theme-color")
					.attr("content", theme_color.clone()),
			);
		}
		if let Some(description) = &self.description {
			head = head.child(
				Element::new("meta")
					.attr("name", "description")
					.attr("content", description.clone()),
			);
		}
		for meta in &self.metas {
			head = head.child(
				Element::new("meta")
					.attr("name", meta.name.clone())
					.attr("content", meta.content.clone()),
			);
		}
		head = head.child(Element::new("title").child(self.title.clone()));
		for href in &self.stylesheets {
			head = head.child(
				Element::new("link")
					.attr("rel", "stylesheet")
					.attr("href", href.clone()),
			);
		}
		head.children(self.head_extra.iter().cloned())
	}
}

impl Component for Document {
	fn name(&self) -> &'static str {
		"Document"
	}

	fn render(&self) -> Node {
		let body_classes = ClassList::bare().extend(self.body_classes.iter().cloned());
		let body = body_classes
			.apply_if_any(Element::new("body"))
			.children(self.body.iter().cloned());

		Element::new("html")
			.attr("lang", self.lang.clone())
			.child(self.head())
			.child(body)
			.into_node()
	}

	fn render_to_string(&self) -> String {
		let mut output = String::from("<!DOCTYPE html>");
		output.push_str(&self.render().render_to_string());
		tracing::trace!(bytes = output.len(), "rendered document");
		output
	}

	fn write_to(&self, sink: &mut dyn io::Write) -> Result<(), RenderError> {
		sink.write_all(self.render_to_string().as_bytes())?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_head_entries() {
		let html = Document::new("Hello", "body text").render_to_string();
		assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
		assert!(html.contains("<meta charset=\"utf-8\" />"));
		assert!(html.contains(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />"
		));
		assert!(html.contains("<meta name=\"color-scheme\" content=\"light dark\" />"));
		assert!(html.contains("<title>Hello</title>"));
		assert!(html.ends_with("<body>body text</body></html>"));
	}

	#[test]
	fn test_stylesheets_and_theme_color() {
		let html = Document::new("T", Node::empty())
			.stylesheet("https://cdn.example/bulma.min.css")
			.theme_color("#00d1b2")
			.render_to_string();
		assert!(html.contains("<meta name=\"theme-color\" content=\"#00d1b2\" />"));
		assert!(html.contains(
			"<link rel=\"stylesheet\" href=\"https://cdn.example/bulma.min.css\" />"
		));
	}

	#[test]
	fn test_body_class_omitted_when_empty() {
		let html = Document::new("T", Node::empty()).render_to_string();
		assert!(html.contains("<body>"));
		assert!(!html.contains("<body class"));
	}

	#[test]
	fn test_body_class_present_when_set() {
		let mut doc = Document::new("T", Node::empty());
		doc.body_classes.push("has-navbar-fixed-top".to_string());
		assert!(
			doc.render_to_string()
				.contains("<body class=\"has-navbar-fixed-top\">")
		);
	}

	#[test]
	fn test_title_is_escaped() {
		let html = Document::new("A & B", Node::empty()).render_to_string();
		assert!(html.contains("<title>A &amp; B</title>"));
	}

	#[test]
	fn test_write_to_includes_doctype() {
		let mut sink = Vec::new();
		Document::new("T", Node::empty()).write_to(&mut sink).unwrap();
		assert!(sink.starts_with(b"<!DOCTYPE html>"));
	}
}
