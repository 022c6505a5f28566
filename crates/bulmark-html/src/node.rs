//! HTML node tree and serialization.

use std::borrow::Cow;
use std::io;

use crate::error::RenderError;

/// An attribute value on an element.
///
/// Most attributes carry text; boolean presence attributes (`disabled`,
/// `checked`, `multiple`, ...) render as the bare name and are absent
/// entirely when unset. They never render as `attr="true"`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
	/// A text-valued attribute, rendered as `name="value"`.
	Text(Cow<'static, str>),
	/// A presence attribute, rendered as the bare `name`.
	Bare,
}

/// A renderable HTML fragment.
///
/// `Node` is the unit every component renders to. It can represent a single
/// element, a text node, a flat sequence of siblings, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An HTML element.
	Element(Element),
	/// A text node. Content is escaped on serialization.
	Text(Cow<'static, str>),
	/// A sequence of sibling nodes with no wrapper element.
	Fragment(Vec<Node>),
	/// Renders nothing.
	Empty,
}

/// An HTML element in the node tree.
///
/// Attributes are serialized in insertion order, so callers control the
/// exact attribute layout of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, AttrValue)>,
	children: Vec<Node>,
	void: bool,
}

impl Element {
	/// Creates an element with the given tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			void,
		}
	}

	/// Appends a text-valued attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), AttrValue::Text(value.into())));
		self
	}

	/// Appends a text-valued attribute when `value` is set.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Appends a bare presence attribute (`disabled`, `checked`, ...).
	pub fn flag(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.attrs.push((name.into(), AttrValue::Bare));
		self
	}

	/// Appends a bare presence attribute when `set` is true.
	///
	/// When `set` is false the attribute is absent from the output, not
	/// rendered with a `"false"` value.
	pub fn flag_if(self, name: impl Into<Cow<'static, str>>, set: bool) -> Self {
		if set { self.flag(name) } else { self }
	}

	/// Appends a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Appends multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_node()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this is a void element (no closing tag).
	pub fn is_void(&self) -> bool {
		self.void
	}
}

impl Node {
	/// Creates an element node builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_node()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Serializes the node tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Serializes the node tree into the given sink.
	///
	/// The fragment is rendered in one pass and written with a single
	/// `write_all`; a sink failure is surfaced as [`RenderError::Io`]
	/// unchanged, and the render is aborted.
	pub fn write_to<W: io::Write>(&self, sink: &mut W) -> Result<(), RenderError> {
		sink.write_all(self.render_to_string().as_bytes())?;
		Ok(())
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Node::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in &el.attrs {
					output.push(' ');
					output.push_str(name);
					match value {
						AttrValue::Text(value) => {
							output.push_str("=\"");
							output.push_str(&html_escape::encode_safe(value.as_ref()));
							output.push('"');
						}
						AttrValue::Bare => {}
					}
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in &el.children {
						child.render_into(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Node::Text(text) => {
				output.push_str(&html_escape::encode_text(text.as_ref()));
			}
			Node::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Node::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a [`Node`].
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(node) => node.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Fragment(self.into_iter().map(|n| n.into_node()).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_simple_element() {
		let node = Element::new("div").into_node();
		assert_eq!(node.render_to_string(), "<div></div>");
	}

	#[rstest::rstest]
	#[case("br", true)]
	#[case("img", true)]
	#[case("input", true)]
	#[case("meta", true)]
	#[case("link", true)]
	#[case("div", false)]
	#[case("span", false)]
	#[case("textarea", false)]
	fn test_void_element_detection(#[case] tag: &'static str, #[case] void: bool) {
		assert_eq!(Element::new(tag).is_void(), void);
	}

	#[test]
	fn test_render_void_element() {
		let node = Element::new("br").into_node();
		assert_eq!(node.render_to_string(), "<br />");
	}

	#[test]
	fn test_attrs_render_in_insertion_order() {
		let node = Element::new("div")
			.attr("id", "main")
			.attr("class", "container")
			.attr("data-x", "1")
			.into_node();
		assert_eq!(
			node.render_to_string(),
			"<div id=\"main\" class=\"container\" data-x=\"1\"></div>"
		);
	}

	#[test]
	fn test_attr_opt() {
		let node = Element::new("a")
			.attr_opt("href", Some("/home"))
			.attr_opt("target", None::<String>)
			.into_node();
		assert_eq!(node.render_to_string(), "<a href=\"/home\"></a>");
	}

	#[test]
	fn test_bare_flag_renders_without_value() {
		let node = Element::new("input").flag("disabled").into_node();
		assert_eq!(node.render_to_string(), "<input disabled />");
	}

	#[test]
	fn test_flag_if_false_is_absent() {
		let html = Element::new("input")
			.flag_if("required", false)
			.into_node()
			.render_to_string();
		assert!(!html.contains("required"));
		assert_eq!(html, "<input />");
	}

	#[test]
	fn test_attribute_value_escaping() {
		let node = Element::new("div")
			.attr("title", "a \"quoted\" <value> & more")
			.into_node();
		let html = node.render_to_string();
		assert!(html.contains("&quot;quoted&quot;"));
		assert!(html.contains("&lt;value&gt;"));
		assert!(html.contains("&amp; more"));
		assert!(!html.contains("\"quoted\""));
	}

	#[test]
	fn test_text_escaping() {
		let node = Node::text("<script>alert('xss')</script>");
		let html = node.render_to_string();
		assert!(html.starts_with("&lt;script&gt;"));
		assert!(!html.contains("<script>"));
	}

	#[test]
	fn test_render_element_with_children() {
		let node = Element::new("div")
			.child("Hello, ")
			.child(Element::new("strong").child("World"))
			.into_node();
		assert_eq!(
			node.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[test]
	fn test_render_fragment() {
		let node = Node::fragment(["One", "Two", "Three"]);
		assert_eq!(node.render_to_string(), "OneTwoThree");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(Node::empty().render_to_string(), "");
	}

	#[test]
	fn test_into_node_option() {
		assert_eq!(Some("Hello").into_node().render_to_string(), "Hello");
		assert_eq!(None::<String>.into_node().render_to_string(), "");
	}

	#[test]
	fn test_into_node_vec_and_tuple() {
		assert_eq!(vec!["A", "B", "C"].into_node().render_to_string(), "ABC");
		assert_eq!(("Hello, ", "World!").into_node().render_to_string(), "Hello, World!");
	}

	#[test]
	fn test_write_to_ok() {
		let node = Element::new("p").child("hi").into_node();
		let mut sink = Vec::new();
		node.write_to(&mut sink).unwrap();
		assert_eq!(sink, b"<p>hi</p>");
	}

	#[test]
	fn test_write_to_propagates_sink_error() {
		struct FailingSink;

		impl io::Write for FailingSink {
			fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
				Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
			}

			fn flush(&mut self) -> io::Result<()> {
				Ok(())
			}
		}

		let node = Element::new("p").child("hi").into_node();
		let err = node.write_to(&mut FailingSink).unwrap_err();
		assert!(matches!(err, RenderError::Io(_)));
	}

	#[test]
	fn test_render_is_deterministic() {
		let node = Element::new("div")
			.attr("id", "x")
			.attr("class", "a b c")
			.child(Element::new("span").child("text"))
			.into_node();
		assert_eq!(node.render_to_string(), node.render_to_string());
	}

	mod escaping_properties {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn text_nodes_never_leak_raw_angle_brackets(s in ".*") {
				let html = Node::text(s).render_to_string();
				prop_assert!(!html.contains('<'));
				prop_assert!(!html.contains('>'));
			}

			#[test]
			fn attr_values_never_leak_raw_quotes(s in ".*") {
				let html = Element::new("div").attr("title", s).into_node().render_to_string();
				// the only double quotes are the two delimiting the attribute
				prop_assert_eq!(html.matches('"').count(), 2);
			}
		}
	}
}
