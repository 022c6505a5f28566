//! Navbar component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Color;
use crate::util::passthrough;

/// Fixed positioning of a [`Navbar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarFixed {
	/// `is-fixed-top`
	Top,
	/// `is-fixed-bottom`
	Bottom,
}

impl NavbarFixed {
	/// Returns the modifier class.
	pub fn class(self) -> &'static str {
		match self {
			Self::Top => "is-fixed-top",
			Self::Bottom => "is-fixed-bottom",
		}
	}
}

/// One entry in a navbar region.
#[derive(Debug, Clone)]
pub enum NavbarItem {
	/// An `<a class="navbar-item">` link.
	Link {
		/// Link target.
		href: String,
		/// `is-active` state class.
		active: bool,
		/// Link content.
		body: Vec<Node>,
	},
	/// A `<div class="navbar-item">` with arbitrary content.
	Content(Vec<Node>),
	/// A `has-dropdown` item with a label and nested entries.
	Dropdown {
		/// Dropdown label (`navbar-link`).
		label: String,
		/// `is-hoverable` on the dropdown item.
		hoverable: bool,
		/// The nested entries (links and dividers).
		items: Vec<NavbarItem>,
	},
	/// An `<hr class="navbar-divider">` (inside dropdowns).
	Divider,
}

impl NavbarItem {
	/// Creates a link item.
	pub fn link(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self::Link {
			href: href.into(),
			active: false,
			body: vec![body.into_node()],
		}
	}

	/// Creates an active link item.
	pub fn active_link(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self::Link {
			href: href.into(),
			active: true,
			body: vec![body.into_node()],
		}
	}

	/// Creates a dropdown item.
	pub fn dropdown(
		label: impl Into<String>,
		hoverable: bool,
		items: impl IntoIterator<Item = NavbarItem>,
	) -> Self {
		Self::Dropdown {
			label: label.into(),
			hoverable,
			items: items.into_iter().collect(),
		}
	}

	fn render(&self) -> Node {
		match self {
			Self::Link { href, active, body } => {
				let classes = ClassList::new("navbar-item").with_if(*active, "is-active");
				classes
					.apply(Element::new("a").attr("href", href.clone()))
					.children(body.iter().cloned())
					.into_node()
			}
			Self::Content(body) => Element::new("div")
				.attr("class", "navbar-item")
				.children(body.iter().cloned())
				.into_node(),
			Self::Dropdown {
				label,
				hoverable,
				items,
			} => {
				let classes = ClassList::new("navbar-item")
					.with("has-dropdown")
					.with_if(*hoverable, "is-hoverable");
				classes
					.apply(Element::new("div"))
					.child(
						Element::new("a")
							.attr("class", "navbar-link")
							.child(label.clone()),
					)
					.child(
						Element::new("div")
							.attr("class", "navbar-dropdown")
							.children(items.iter().map(Self::render)),
					)
					.into_node()
			}
			Self::Divider => Element::new("hr")
				.attr("class", "navbar-divider")
				.into_node(),
		}
	}
}

/// A `<nav class="navbar">`.
///
/// Renders the full Bulma structure: brand (with an optional burger),
/// then a `navbar-menu` holding the start and end regions. The burger
/// and menu are wired together through the menu id.
#[derive(Debug, Clone, Default)]
pub struct Navbar {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Color modifier.
	pub color: Option<Color>,
	/// Fixed positioning.
	pub fixed: Option<NavbarFixed>,
	/// `is-transparent`
	pub transparent: bool,
	/// `is-spaced`
	pub spaced: bool,
	/// Brand region items.
	pub brand: Vec<NavbarItem>,
	/// Renders the burger toggle in the brand region.
	pub burger: bool,
	/// `id` of the menu element (burger target); defaults to `navbar-menu`.
	pub menu_id: Option<String>,
	/// Items on the left side of the menu.
	pub start: Vec<NavbarItem>,
	/// Items on the right side of the menu.
	pub end: Vec<NavbarItem>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Navbar {
	/// Creates an empty navbar.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Appends a brand item.
	pub fn brand(mut self, item: NavbarItem) -> Self {
		self.brand.push(item);
		self
	}

	/// Renders the burger toggle.
	pub fn burger(mut self) -> Self {
		self.burger = true;
		self
	}

	/// Appends an item to the start region.
	pub fn start(mut self, item: NavbarItem) -> Self {
		self.start.push(item);
		self
	}

	/// Appends an item to the end region.
	pub fn end(mut self, item: NavbarItem) -> Self {
		self.end.push(item);
		self
	}
}

fn burger(menu_id: &str) -> Node {
	let mut el = Element::new("a")
		.attr("role", "button")
		.attr("class", "navbar-burger")
		.attr("aria-label", "menu")
		.attr("aria-expanded", "false")
		.attr("data-target", menu_id.to_string());
	for _ in 0..4 {
		el = el.child(Element::new("span").attr("aria-hidden", "true"));
	}
	el.into_node()
}

impl Component for Navbar {
	fn name(&self) -> &'static str {
		"Navbar"
	}

	fn render(&self) -> Node {
		let menu_id = self.menu_id.as_deref().unwrap_or("navbar-menu");

		let classes = ClassList::new("navbar")
			.with_opt(self.color.map(Color::class))
			.with_opt(self.fixed.map(NavbarFixed::class))
			.with_if(self.transparent, "is-transparent")
			.with_if(self.spaced, "is-spaced")
			.extend(self.classes.iter().cloned());

		let el = Element::new("nav")
			.attr_opt("id", self.id.clone())
			.attr("role", "navigation")
			.attr("aria-label", "main navigation");
		let mut el = passthrough(classes.apply(el), &self.attrs);

		if !self.brand.is_empty() || self.burger {
			let mut brand = Element::new("div")
				.attr("class", "navbar-brand")
				.children(self.brand.iter().map(NavbarItem::render));
			if self.burger {
				brand = brand.child(burger(menu_id));
			}
			el = el.child(brand);
		}

		if !self.start.is_empty() || !self.end.is_empty() {
			let menu = Element::new("div")
				.attr("id", menu_id.to_string())
				.attr("class", "navbar-menu")
				.child(
					Element::new("div")
						.attr("class", "navbar-start")
						.children(self.start.iter().map(NavbarItem::render)),
				)
				.child(
					Element::new("div")
						.attr("class", "navbar-end")
						.children(self.end.iter().map(NavbarItem::render)),
				);
			el = el.child(menu);
		}

		el.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_navbar_full_structure() {
		let navbar = Navbar::new()
			.brand(NavbarItem::link("/", "Home"))
			.burger()
			.start(NavbarItem::active_link("/docs", "Docs"))
			.end(NavbarItem::Content(vec![Node::text("v1")]));
		let html = navbar.render_to_string();
		assert!(html.starts_with(
			"<nav role=\"navigation\" aria-label=\"main navigation\" class=\"navbar\">"
		));
		assert!(html.contains("<div class=\"navbar-brand\">"));
		assert!(html.contains("data-target=\"navbar-menu\""));
		assert!(html.contains("<div id=\"navbar-menu\" class=\"navbar-menu\">"));
		assert!(html.contains("<a href=\"/docs\" class=\"navbar-item is-active\">Docs</a>"));
		assert!(html.contains("<div class=\"navbar-end\"><div class=\"navbar-item\">v1</div>"));
	}

	#[test]
	fn test_navbar_dropdown() {
		let navbar = Navbar::new().start(NavbarItem::dropdown(
			"More",
			true,
			[
				NavbarItem::link("/about", "About"),
				NavbarItem::Divider,
				NavbarItem::link("/contact", "Contact"),
			],
		));
		let html = navbar.render_to_string();
		assert!(html.contains("navbar-item has-dropdown is-hoverable"));
		assert!(html.contains("<a class=\"navbar-link\">More</a>"));
		assert!(html.contains("<hr class=\"navbar-divider\" />"));
	}

	#[test]
	fn test_fixed_colored_navbar() {
		let navbar = Navbar {
			color: Some(Color::Dark),
			fixed: Some(NavbarFixed::Top),
			..Navbar::new()
		};
		assert_eq!(
			navbar.render_to_string(),
			"<nav role=\"navigation\" aria-label=\"main navigation\" \
			 class=\"navbar is-dark is-fixed-top\"></nav>"
		);
	}

	#[test]
	fn test_burger_spans() {
		let html = Navbar::new().burger().render_to_string();
		assert_eq!(html.matches("<span aria-hidden=\"true\"></span>").count(), 4);
	}
}
