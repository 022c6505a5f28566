//! Icon element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::helpers::text_color;
use crate::modifiers::{Color, Size};
use crate::util::passthrough;

/// An icon container (`<span class="icon">`) wrapping an icon font tag.
///
/// The inner `<i>` carries whatever icon font classes the caller uses
/// (`fas fa-home`, `mdi mdi-bell`, ...). The container takes Bulma's
/// size and text color modifiers.
#[derive(Debug, Clone, Default)]
pub struct Icon {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Icon font classes for the inner `<i>` tag.
	pub icon: String,
	/// Container size modifier.
	pub size: Option<Size>,
	/// Text color helper on the container.
	pub color: Option<Color>,
	/// Custom classes on the container.
	pub classes: Vec<String>,
	/// Passthrough attributes on the container.
	pub attrs: Vec<(String, String)>,
}

impl Icon {
	/// Creates an icon from icon font classes.
	pub fn new(icon: impl Into<String>) -> Self {
		Self {
			icon: icon.into(),
			..Self::default()
		}
	}

	/// Sets the container size modifier.
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the text color helper.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}
}

impl Component for Icon {
	fn name(&self) -> &'static str {
		"Icon"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("icon")
			.with_opt(self.size.map(Size::class))
			.with_opt(self.color.map(text_color))
			.extend(self.classes.iter().cloned());

		let el = Element::new("span").attr_opt("id", self.id.clone());
		passthrough(classes.apply(el), &self.attrs)
			.child(Element::new("i").attr("class", self.icon.clone()))
			.into_node()
	}
}

/// An icon with trailing text (`<span class="icon-text">`).
#[derive(Debug, Clone, Default)]
pub struct IconText {
	/// The icon.
	pub icon: Icon,
	/// Text rendered after the icon.
	pub text: String,
	/// Custom classes.
	pub classes: Vec<String>,
}

impl IconText {
	/// Creates an icon-text pair.
	pub fn new(icon: Icon, text: impl Into<String>) -> Self {
		Self {
			icon,
			text: text.into(),
			classes: Vec::new(),
		}
	}
}

impl Component for IconText {
	fn name(&self) -> &'static str {
		"IconText"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("icon-text").extend(self.classes.iter().cloned());
		classes
			.apply(Element::new("span"))
			.child(self.icon.render())
			.child(Element::new("span").child(self.text.clone()))
			.into_node()
	}
}
