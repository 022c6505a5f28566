//! Tag element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::elements::delete::Delete;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// A Bulma tag (`<span class="tag">`), or an anchor tag when `href` is
/// set.
///
/// Class tokens appear in field order: size, color, light, rounded,
/// delete variant, then custom classes.
#[derive(Debug, Clone, Default)]
pub struct Tag {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Renders the tag as `<a href="...">`.
	pub href: Option<String>,
	/// Size modifier.
	pub size: Option<Size>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Light variant of the color.
	pub light: bool,
	/// `is-rounded`
	pub rounded: bool,
	/// `is-delete`: renders the tag itself as a delete cross.
	pub is_delete: bool,
	/// Appends a nested small delete button after the content.
	pub dismissible: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Tag content.
	pub body: Vec<Node>,
}

impl Tag {
	/// Creates a tag with the given content.
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

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Uses the light variant of the color.
	pub fn light(mut self) -> Self {
		self.light = true;
		self
	}

	/// Rounds the tag.
	pub fn rounded(mut self) -> Self {
		self.rounded = true;
		self
	}

	/// Renders as an anchor with the given `href`.
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Appends a nested delete button.
	pub fn dismissible(mut self) -> Self {
		self.dismissible = true;
		self
	}

	/// Appends a custom class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}
}

impl Component for Tag {
	fn name(&self) -> &'static str {
		"Tag"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("tag")
			.with_opt(self.size.map(Size::class))
			.with_opt(self.color.map(Color::class))
			.with_if(self.light, "is-light")
			.with_if(self.rounded, "is-rounded")
			.with_if(self.is_delete, "is-delete")
			.extend(self.classes.iter().cloned());

		let tag = if self.href.is_some() { "a" } else { "span" };
		let mut el = Element::new(tag)
			.attr_opt("id", self.id.clone())
			.attr_opt("href", self.href.clone());
		el = classes.apply(el);
		el = passthrough(el, &self.attrs);
		el = el.children(self.body.iter().cloned());
		if self.dismissible {
			el = el.child(Delete::new().size(Size::Small).render());
		}
		el.into_node()
	}
}

/// A tag container (`<div class="tags">`).
#[derive(Debug, Clone, Default)]
pub struct Tags {
	/// Group size (`are-*`).
	pub size: Option<Size>,
	/// `has-addons`: attaches the tags together.
	pub addons: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The tags themselves.
	pub children: Vec<Node>,
}

impl Tags {
	/// Creates an empty tag group.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches the tags together.
	pub fn addons(mut self) -> Self {
		self.addons = true;
		self
	}

	/// Appends a tag.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}
}

impl Component for Tags {
	fn name(&self) -> &'static str {
		"Tags"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("tags")
			.with_opt(self.size.map(Size::group_class))
			.with_if(self.addons, "has-addons")
			.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.children.iter().cloned())
			.into_node()
	}
}
