//! File upload control.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Alignment, Color, Size};
use crate::util::passthrough;

/// A `<div class="file">` upload control.
///
/// Renders the full Bulma structure: an outer `file` wrapper, a
/// `file-label` label, the hidden `file-input`, the `file-cta` call to
/// action (optional icon + label), and an optional `file-name` span when
/// a selected file name is displayed.
#[derive(Debug, Clone)]
pub struct File {
	/// Optional `id` attribute (on the input).
	pub id: Option<String>,
	/// `name` attribute of the input.
	pub name: Option<String>,
	/// Call-to-action text.
	pub label: String,
	/// Icon font classes for the cta icon; `None` renders no icon.
	pub icon: Option<String>,
	/// Displayed file name; also adds `has-name` on the wrapper.
	pub file_name: Option<String>,
	/// `is-boxed`
	pub boxed: bool,
	/// `is-fullwidth`
	pub full_width: bool,
	/// Wrapper alignment.
	pub alignment: Alignment,
	/// Color modifier.
	pub color: Option<Color>,
	/// Size modifier.
	pub size: Option<Size>,
	/// Custom classes (wrapper).
	pub classes: Vec<String>,
	/// Passthrough attributes (input).
	pub attrs: Vec<(String, String)>,
}

impl Default for File {
	fn default() -> Self {
		Self {
			id: None,
			name: None,
			label: "Choose a file…".to_string(),
			icon: None,
			file_name: None,
			boxed: false,
			full_width: false,
			alignment: Alignment::Left,
			color: None,
			size: None,
			classes: Vec::new(),
			attrs: Vec::new(),
		}
	}
}

impl File {
	/// Creates a file control with the default label.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `name` attribute.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the call-to-action text.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Adds a cta icon.
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Displays the selected file name.
	pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
		self.file_name = Some(file_name.into());
		self
	}

	/// `is-boxed`
	pub fn boxed(mut self) -> Self {
		self.boxed = true;
		self
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}
}

impl Component for File {
	fn name(&self) -> &'static str {
		"File"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("file")
			.with_if(self.file_name.is_some(), "has-name")
			.with_if(self.boxed, "is-boxed")
			.with_if(self.full_width, "is-fullwidth")
			.with(self.alignment.class())
			.with_opt(self.color.map(Color::class))
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let input = Element::new("input")
			.attr_opt("id", self.id.clone())
			.attr("class", "file-input")
			.attr("type", "file")
			.attr_opt("name", self.name.clone());
		let input = passthrough(input, &self.attrs);

		let mut cta = Element::new("span").attr("class", "file-cta");
		if let Some(icon) = &self.icon {
			cta = cta.child(
				Element::new("span")
					.attr("class", "file-icon")
					.child(Element::new("i").attr("class", icon.clone())),
			);
		}
		cta = cta.child(
			Element::new("span")
				.attr("class", "file-label")
				.child(self.label.clone()),
		);

		let mut label = Element::new("label")
			.attr("class", "file-label")
			.child(input)
			.child(cta);
		if let Some(file_name) = &self.file_name {
			label = label.child(
				Element::new("span")
					.attr("class", "file-name")
					.child(file_name.clone()),
			);
		}

		classes.apply(Element::new("div")).child(label).into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_file() {
		let html = File::new().name("resume").render_to_string();
		assert_eq!(
			html,
			"<div class=\"file\"><label class=\"file-label\">\
			 <input class=\"file-input\" type=\"file\" name=\"resume\" />\
			 <span class=\"file-cta\">\
			 <span class=\"file-label\">Choose a file…</span>\
			 </span></label></div>"
		);
	}

	#[test]
	fn test_file_with_name_and_icon() {
		let html = File::new()
			.icon("fas fa-upload")
			.file_name("cv.pdf")
			.color(Color::Info)
			.render_to_string();
		assert!(html.starts_with("<div class=\"file has-name is-info\">"));
		assert!(html.contains("<span class=\"file-icon\"><i class=\"fas fa-upload\"></i></span>"));
		assert!(html.ends_with("<span class=\"file-name\">cv.pdf</span></label></div>"));
	}

	#[test]
	fn test_boxed_file() {
		let html = File::new().boxed().render_to_string();
		assert!(html.starts_with("<div class=\"file is-boxed\">"));
	}
}
