//! Core component trait.

use std::io;

use bulmark_html::{Node, RenderError};

/// Trait implemented by every component in the catalogue.
///
/// A component is a props value that knows how to render itself to an
/// HTML fragment. Rendering is a single pure pass: identical props values
/// always produce byte-identical output, and nothing is retained after
/// the call.
pub trait Component {
	/// Returns the component's name (for diagnostics).
	fn name(&self) -> &'static str;

	/// Renders the component to an HTML node tree.
	fn render(&self) -> Node;

	/// Renders the component to an HTML string.
	fn render_to_string(&self) -> String {
		let html = self.render().render_to_string();
		tracing::trace!(component = self.name(), bytes = html.len(), "rendered");
		html
	}

	/// Renders the component into the given sink.
	///
	/// Sink failures surface as [`RenderError::Io`] unchanged.
	fn write_to(&self, sink: &mut dyn io::Write) -> Result<(), RenderError> {
		let mut sink = sink;
		self.render().write_to(&mut sink)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bulmark_html::Element;

	struct Badge {
		label: String,
	}

	impl Component for Badge {
		fn name(&self) -> &'static str {
			"Badge"
		}

		fn render(&self) -> Node {
			Element::new("span")
				.attr("class", "badge")
				.child(self.label.clone())
				.into()
		}
	}

	#[test]
	fn test_render_to_string() {
		let badge = Badge {
			label: "new".to_string(),
		};
		assert_eq!(badge.render_to_string(), "<span class=\"badge\">new</span>");
	}

	#[test]
	fn test_write_to_sink() {
		let badge = Badge {
			label: "new".to_string(),
		};
		let mut sink = Vec::new();
		badge.write_to(&mut sink).unwrap();
		assert_eq!(sink, b"<span class=\"badge\">new</span>");
	}
}
