//! Dropdown component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// One entry in a dropdown menu.
#[derive(Debug, Clone)]
pub enum DropdownItem {
	/// An `<a class="dropdown-item">` link.
	Link {
		/// Link target.
		href: String,
		/// `is-active` state class.
		active: bool,
		/// Link content.
		body: Vec<Node>,
	},
	/// A `<div class="dropdown-item">` with arbitrary content.
	Content(Vec<Node>),
	/// An `<hr class="dropdown-divider">`.
	Divider,
}

impl DropdownItem {
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

	fn render(&self) -> Node {
		match self {
			Self::Link { href, active, body } => {
				let classes = ClassList::new("dropdown-item").with_if(*active, "is-active");
				classes
					.apply(Element::new("a").attr("href", href.clone()))
					.children(body.iter().cloned())
					.into_node()
			}
			Self::Content(body) => Element::new("div")
				.attr("class", "dropdown-item")
				.children(body.iter().cloned())
				.into_node(),
			Self::Divider => Element::new("hr")
				.attr("class", "dropdown-divider")
				.into_node(),
		}
	}
}

/// A `<div class="dropdown">`.
///
/// The trigger is a button wired to the menu through
/// `aria-haspopup`/`aria-controls`; the menu id defaults to
/// `dropdown-menu`.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
	/// `is-active`: shows the menu.
	pub active: bool,
	/// `is-hoverable`: shows the menu on hover.
	pub hoverable: bool,
	/// `is-right`: aligns the menu with the right edge.
	pub right: bool,
	/// `is-up`: opens the menu upward.
	pub up: bool,
	/// Trigger button content.
	pub trigger: Vec<Node>,
	/// `id` of the menu element.
	pub menu_id: Option<String>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The menu entries.
	pub items: Vec<DropdownItem>,
}

impl Dropdown {
	/// Creates a dropdown with a trigger label.
	pub fn new(trigger: impl IntoNode) -> Self {
		Self {
			trigger: vec![trigger.into_node()],
			..Self::default()
		}
	}

	/// Shows the menu.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	/// Shows the menu on hover.
	pub fn hoverable(mut self) -> Self {
		self.hoverable = true;
		self
	}

	/// Appends a menu entry.
	pub fn item(mut self, item: DropdownItem) -> Self {
		self.items.push(item);
		self
	}
}

impl Component for Dropdown {
	fn name(&self) -> &'static str {
		"Dropdown"
	}

	fn render(&self) -> Node {
		let menu_id = self.menu_id.as_deref().unwrap_or("dropdown-menu");

		let classes = ClassList::new("dropdown")
			.with_if(self.active, "is-active")
			.with_if(self.hoverable, "is-hoverable")
			.with_if(self.right, "is-right")
			.with_if(self.up, "is-up")
			.extend(self.classes.iter().cloned());

		let trigger = Element::new("div").attr("class", "dropdown-trigger").child(
			Element::new("button")
				.attr("class", "button")
				.attr("aria-haspopup", "true")
				.attr("aria-controls", menu_id.to_string())
				.children(self.trigger.iter().cloned()),
		);

		let menu = Element::new("div")
			.attr("id", menu_id.to_string())
			.attr("class", "dropdown-menu")
			.attr("role", "menu")
			.child(
				Element::new("div")
					.attr("class", "dropdown-content")
					.children(self.items.iter().map(DropdownItem::render)),
			);

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.child(trigger)
			.child(menu)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_dropdown_structure() {
		let dropdown = Dropdown::new("Open")
			.item(DropdownItem::link("/a", "A"))
			.item(DropdownItem::Divider)
			.item(DropdownItem::active_link("/b", "B"));
		assert_eq!(
			dropdown.render_to_string(),
			"<div class=\"dropdown\">\
			 <div class=\"dropdown-trigger\">\
			 <button class=\"button\" aria-haspopup=\"true\" \
			 aria-controls=\"dropdown-menu\">Open</button></div>\
			 <div id=\"dropdown-menu\" class=\"dropdown-menu\" role=\"menu\">\
			 <div class=\"dropdown-content\">\
			 <a href=\"/a\" class=\"dropdown-item\">A</a>\
			 <hr class=\"dropdown-divider\" />\
			 <a href=\"/b\" class=\"dropdown-item is-active\">B</a>\
			 </div></div></div>"
		);
	}

	#[test]
	fn test_active_hoverable_modifiers() {
		let html = Dropdown::new("Open").active().hoverable().render_to_string();
		assert!(html.starts_with("<div class=\"dropdown is-active is-hoverable\">"));
	}
}
