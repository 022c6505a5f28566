//! Card component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::elements::Image;
use crate::util::passthrough;

/// One footer link or item in a [`Card`].
#[derive(Debug, Clone, Default)]
pub struct CardFooterItem {
	/// Renders as `<a href="...">` when set, `<p>` otherwise.
	pub href: Option<String>,
	/// Item content.
	pub body: Vec<Node>,
}

impl CardFooterItem {
	/// Creates a plain footer item.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			href: None,
			body: vec![body.into_node()],
		}
	}

	/// Creates a footer link.
	pub fn link(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			href: Some(href.into()),
			body: vec![body.into_node()],
		}
	}

	fn render(&self) -> Node {
		let tag = if self.href.is_some() { "a" } else { "p" };
		Element::new(tag)
			.attr_opt("href", self.href.clone())
			.attr("class", "card-footer-item")
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A `<div class="card">`.
///
/// Header, image, content and footer render only when supplied.
#[derive(Debug, Clone, Default)]
pub struct Card {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Header title (`card-header-title`).
	pub header: Option<String>,
	/// Centers the header title.
	pub header_centered: bool,
	/// Optional icon button in the header (icon font classes).
	pub header_icon: Option<String>,
	/// Card image (`card-image`).
	pub image: Option<Image>,
	/// Main content (`card-content`).
	pub content: Vec<Node>,
	/// Footer items (`card-footer`).
	pub footer: Vec<CardFooterItem>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Card {
	/// Creates a card with the given content.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: vec![content.into_node()],
			..Self::default()
		}
	}

	/// Sets the header title.
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Sets the card image.
	pub fn image(mut self, image: Image) -> Self {
		self.image = Some(image);
		self
	}

	/// Appends a footer item.
	pub fn footer_item(mut self, item: CardFooterItem) -> Self {
		self.footer.push(item);
		self
	}
}

impl Component for Card {
	fn name(&self) -> &'static str {
		"Card"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("card").extend(self.classes.iter().cloned());
		let el = Element::new("div").attr_opt("id", self.id.clone());
		let mut el = passthrough(classes.apply(el), &self.attrs);

		if let Some(header) = &self.header {
			let title_classes = ClassList::new("card-header-title")
				.with_if(self.header_centered, "is-centered");
			let mut header_el = Element::new("header").attr("class", "card-header").child(
				title_classes
					.apply(Element::new("p"))
					.child(header.clone()),
			);
			if let Some(icon) = &self.header_icon {
				header_el = header_el.child(
					Element::new("button")
						.attr("class", "card-header-icon")
						.child(
							Element::new("span")
								.attr("class", "icon")
								.child(Element::new("i").attr("class", icon.clone())),
						),
				);
			}
			el = el.child(header_el);
		}

		if let Some(image) = &self.image {
			el = el.child(
				Element::new("div")
					.attr("class", "card-image")
					.child(image.render()),
			);
		}

		if !self.content.is_empty() {
			el = el.child(
				Element::new("div")
					.attr("class", "card-content")
					.children(self.content.iter().cloned()),
			);
		}

		if !self.footer.is_empty() {
			el = el.child(
				Element::new("footer")
					.attr("class", "card-footer")
					.children(self.footer.iter().map(CardFooterItem::render)),
			);
		}

		el.into_node()
	}
}
