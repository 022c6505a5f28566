//! Menu component (vertical navigation).

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// One entry in a menu list, with optional nested entries.
#[derive(Debug, Clone, Default)]
pub struct MenuItem {
	/// Link target.
	pub href: String,
	/// `is-active` state class on the link.
	pub active: bool,
	/// Entry content.
	pub body: Vec<Node>,
	/// Nested entries, rendered as a sub-`<ul>`.
	pub children: Vec<MenuItem>,
}

impl MenuItem {
	/// Creates a menu entry.
	pub fn new(href: impl Into<String>, body: impl IntoNode) -> Self {
		Self {
			href: href.into(),
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Marks the entry active.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}

	/// Appends a nested entry.
	pub fn child(mut self, child: MenuItem) -> Self {
		self.children.push(child);
		self
	}

	fn render(&self) -> Node {
		let classes = ClassList::bare().with_if(self.active, "is-active");
		let link = classes
			.apply_if_any(Element::new("a").attr("href", self.href.clone()))
			.children(self.body.iter().cloned());

		let mut li = Element::new("li").child(link);
		if !self.children.is_empty() {
			li = li.child(Element::new("ul").children(self.children.iter().map(Self::render)));
		}
		li.into_node()
	}
}

/// A labelled section of a [`Menu`].
#[derive(Debug, Clone, Default)]
pub struct MenuSection {
	/// Section label (`menu-label`).
	pub label: String,
	/// The section's entries (`menu-list`).
	pub items: Vec<MenuItem>,
}

impl MenuSection {
	/// Creates a section.
	pub fn new(label: impl Into<String>, items: impl IntoIterator<Item = MenuItem>) -> Self {
		Self {
			label: label.into(),
			items: items.into_iter().collect(),
		}
	}
}

/// An `<aside class="menu">`.
#[derive(Debug, Clone, Default)]
pub struct Menu {
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The menu's sections.
	pub sections: Vec<MenuSection>,
}

impl Menu {
	/// Creates a menu from sections.
	pub fn new(sections: impl IntoIterator<Item = MenuSection>) -> Self {
		Self {
			sections: sections.into_iter().collect(),
			..Self::default()
		}
	}
}

impl Component for Menu {
	fn name(&self) -> &'static str {
		"Menu"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("menu").extend(self.classes.iter().cloned());
		let mut el = passthrough(classes.apply(Element::new("aside")), &self.attrs);
		for section in &self.sections {
			el = el
				.child(
					Element::new("p")
						.attr("class", "menu-label")
						.child(section.label.clone()),
				)
				.child(
					Element::new("ul")
						.attr("class", "menu-list")
						.children(section.items.iter().map(MenuItem::render)),
				);
		}
		el.into_node()
	}
}
