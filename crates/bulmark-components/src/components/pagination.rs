//! Pagination component.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::{Alignment, Size};
use crate::util::passthrough;

/// One entry in the pagination list.
#[derive(Debug, Clone)]
pub enum PaginationItem {
	/// A page link.
	Link {
		/// Link target.
		href: String,
		/// Visible label (usually the page number).
		label: String,
		/// `is-current` state class plus `aria-current="page"`.
		current: bool,
		/// `disabled` presence attribute.
		disabled: bool,
	},
	/// A `<span class="pagination-ellipsis">&hellip;</span>`.
	Ellipsis,
}

impl PaginationItem {
	/// Creates a page link.
	pub fn page(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self::Link {
			href: href.into(),
			label: label.into(),
			current: false,
			disabled: false,
		}
	}

	/// Creates the current page link.
	pub fn current(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self::Link {
			href: href.into(),
			label: label.into(),
			current: true,
			disabled: false,
		}
	}

	fn render(&self) -> Node {
		let li = Element::new("li");
		match self {
			Self::Link {
				href,
				label,
				current,
				disabled,
			} => {
				let classes =
					ClassList::new("pagination-link").with_if(*current, "is-current");
				let mut link = Element::new("a")
					.attr("href", href.clone())
					.flag_if("disabled", *disabled);
				link = classes.apply(link);
				if *current {
					link = link.attr("aria-current", "page");
				}
				li.child(link.child(label.clone())).into_node()
			}
			Self::Ellipsis => li
				.child(
					Element::new("span")
						.attr("class", "pagination-ellipsis")
						.child("\u{2026}"),
				)
				.into_node(),
		}
	}
}

/// A `<nav class="pagination">`.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
	/// Alignment modifier.
	pub alignment: Alignment,
	/// `is-rounded`
	pub rounded: bool,
	/// Size modifier.
	pub size: Option<Size>,
	/// Label for the previous-page link; omitted when `None`.
	pub previous: Option<String>,
	/// Label for the next-page link; omitted when `None`.
	pub next: Option<String>,
	/// The page entries.
	pub items: Vec<PaginationItem>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Pagination {
	/// Creates a pagination from entries.
	pub fn new(items: impl IntoIterator<Item = PaginationItem>) -> Self {
		Self {
			items: items.into_iter().collect(),
			..Self::default()
		}
	}

	/// Sets the previous-page label.
	pub fn previous(mut self, label: impl Into<String>) -> Self {
		self.previous = Some(label.into());
		self
	}

	/// Sets the next-page label.
	pub fn next(mut self, label: impl Into<String>) -> Self {
		self.next = Some(label.into());
		self
	}

	/// Sets the alignment.
	pub fn alignment(mut self, alignment: Alignment) -> Self {
		self.alignment = alignment;
		self
	}

	/// Rounds the page links.
	pub fn rounded(mut self) -> Self {
		self.rounded = true;
		self
	}
}

impl Component for Pagination {
	fn name(&self) -> &'static str {
		"Pagination"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("pagination")
			.with(self.alignment.class())
			.with_if(self.rounded, "is-rounded")
			.with_opt(self.size.map(Size::class))
			.extend(self.classes.iter().cloned());

		let el = Element::new("nav")
			.attr("role", "navigation")
			.attr("aria-label", "pagination");
		let mut el = passthrough(classes.apply(el), &self.attrs);

		if let Some(previous) = &self.previous {
			el = el.child(
				Element::new("a")
					.attr("class", "pagination-previous")
					.child(previous.clone()),
			);
		}
		if let Some(next) = &self.next {
			el = el.child(
				Element::new("a")
					.attr("class", "pagination-next")
					.child(next.clone()),
			);
		}

		el.child(
			Element::new("ul")
				.attr("class", "pagination-list")
				.children(self.items.iter().map(PaginationItem::render)),
		)
		.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pagination_structure() {
		let pagination = Pagination::new([
			PaginationItem::page("/?page=1", "1"),
			PaginationItem::Ellipsis,
			PaginationItem::current("/?page=4", "4"),
		])
		.previous("Previous")
		.next("Next");
		assert_eq!(
			pagination.render_to_string(),
			"<nav role=\"navigation\" aria-label=\"pagination\" class=\"pagination\">\
			 <a class=\"pagination-previous\">Previous</a>\
			 <a class=\"pagination-next\">Next</a>\
			 <ul class=\"pagination-list\">\
			 <li><a href=\"/?page=1\" class=\"pagination-link\">1</a></li>\
			 <li><span class=\"pagination-ellipsis\">\u{2026}</span></li>\
			 <li><a href=\"/?page=4\" class=\"pagination-link is-current\" \
			 aria-current=\"page\">4</a></li>\
			 </ul></nav>"
		);
	}

	#[test]
	fn test_rounded_centered_pagination() {
		let html = Pagination::new([])
			.alignment(Alignment::Centered)
			.rounded()
			.render_to_string();
		assert!(html.contains("class=\"pagination is-centered is-rounded\""));
	}

	#[test]
	fn test_disabled_link_renders_bare_attribute() {
		let item = PaginationItem::Link {
			href: "#".to_string(),
			label: "1".to_string(),
			current: false,
			disabled: true,
		};
		let html = Pagination::new([item]).render_to_string();
		assert!(html.contains("<a href=\"#\" disabled class=\"pagination-link\">1</a>"));
	}
}
