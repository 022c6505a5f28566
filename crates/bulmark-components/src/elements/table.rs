//! Table element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// A table cell, data (`<td>`) or header (`<th>`).
#[derive(Debug, Clone, Default)]
pub struct TableCell {
	/// Renders `<th>` instead of `<td>`.
	pub header: bool,
	/// `scope` attribute for header cells (`col`, `row`).
	pub scope: Option<String>,
	/// `colspan` attribute.
	pub colspan: Option<u32>,
	/// Cell content.
	pub body: Vec<Node>,
}

impl TableCell {
	/// Creates a data cell.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Creates a header cell.
	pub fn header(body: impl IntoNode) -> Self {
		Self {
			header: true,
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the `scope` attribute.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());
		self
	}

	fn render(&self) -> Node {
		let tag = if self.header { "th" } else { "td" };
		Element::new(tag)
			.attr_opt("scope", self.scope.clone())
			.attr_opt("colspan", self.colspan.map(|n| n.to_string()))
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A table row. Rows carry no class attribute unless selected.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
	/// `is-selected` state class.
	pub selected: bool,
	/// The row's cells.
	pub cells: Vec<TableCell>,
}

impl TableRow {
	/// Creates a row from cells.
	pub fn new(cells: impl IntoIterator<Item = TableCell>) -> Self {
		Self {
			selected: false,
			cells: cells.into_iter().collect(),
		}
	}

	/// Marks the row selected.
	pub fn selected(mut self) -> Self {
		self.selected = true;
		self
	}

	fn render(&self) -> Node {
		let classes = ClassList::bare().with_if(self.selected, "is-selected");
		classes
			.apply_if_any(Element::new("tr"))
			.children(self.cells.iter().map(TableCell::render))
			.into_node()
	}
}

/// A `<table class="table">`.
///
/// The `thead`/`tbody`/`tfoot` wrappers are emitted only when they have
/// rows, and never carry a class attribute of their own.
#[derive(Debug, Clone, Default)]
pub struct Table {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// `is-bordered`
	pub bordered: bool,
	/// `is-striped`
	pub striped: bool,
	/// `is-narrow`
	pub narrow: bool,
	/// `is-hoverable`
	pub hoverable: bool,
	/// `is-fullwidth`
	pub full_width: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Header rows (`<thead>`).
	pub head: Vec<TableRow>,
	/// Body rows (`<tbody>`).
	pub body: Vec<TableRow>,
	/// Footer rows (`<tfoot>`).
	pub foot: Vec<TableRow>,
}

impl Table {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a header row.
	pub fn head_row(mut self, row: TableRow) -> Self {
		self.head.push(row);
		self
	}

	/// Appends a body row.
	pub fn row(mut self, row: TableRow) -> Self {
		self.body.push(row);
		self
	}

	/// `is-striped`
	pub fn striped(mut self) -> Self {
		self.striped = true;
		self
	}

	/// `is-fullwidth`
	pub fn full_width(mut self) -> Self {
		self.full_width = true;
		self
	}
}

fn section(tag: &'static str, rows: &[TableRow]) -> Node {
	if rows.is_empty() {
		return Node::empty();
	}
	Element::new(tag)
		.children(rows.iter().map(TableRow::render))
		.into_node()
}

impl Component for Table {
	fn name(&self) -> &'static str {
		"Table"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("table")
			.with_if(self.bordered, "is-bordered")
			.with_if(self.striped, "is-striped")
			.with_if(self.narrow, "is-narrow")
			.with_if(self.hoverable, "is-hoverable")
			.with_if(self.full_width, "is-fullwidth")
			.extend(self.classes.iter().cloned());

		let el = Element::new("table").attr_opt("id", self.id.clone());
		passthrough(classes.apply(el), &self.attrs)
			.child(section("thead", &self.head))
			.child(section("tbody", &self.body))
			.child(section("tfoot", &self.foot))
			.into_node()
	}
}

/// A scroll wrapper (`<div class="table-container">`).
#[derive(Debug, Clone, Default)]
pub struct TableContainer {
	/// Custom classes.
	pub classes: Vec<String>,
	/// The wrapped table (or any content).
	pub body: Vec<Node>,
}

impl TableContainer {
	/// Wraps the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			classes: Vec::new(),
			body: vec![body.into_node()],
		}
	}
}

impl Component for TableContainer {
	fn name(&self) -> &'static str {
		"TableContainer"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("table-container").extend(self.classes.iter().cloned());
		classes
			.apply(Element::new("div"))
			.children(self.body.iter().cloned())
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_by_two() -> Table {
		Table::new()
			.head_row(TableRow::new([
				TableCell::header("Name").scope("col"),
				TableCell::header("Stars").scope("col"),
			]))
			.row(TableRow::new([
				TableCell::new("bulma"),
				TableCell::new("47k"),
			]))
	}

	#[test]
	fn test_table_sections() {
		let html = two_by_two().render_to_string();
		assert_eq!(
			html,
			"<table class=\"table\">\
			 <thead><tr><th scope=\"col\">Name</th><th scope=\"col\">Stars</th></tr></thead>\
			 <tbody><tr><td>bulma</td><td>47k</td></tr></tbody></table>"
		);
	}

	#[test]
	fn test_thead_has_no_class_attribute() {
		let html = two_by_two().render_to_string();
		assert!(html.contains("<thead>"));
		assert!(!html.contains("<thead class"));
	}

	#[test]
	fn test_empty_sections_are_omitted() {
		let html = Table::new()
			.row(TableRow::new([TableCell::new("only")]))
			.render_to_string();
		assert!(!html.contains("<thead>"));
		assert!(!html.contains("<tfoot>"));
	}

	#[test]
	fn test_selected_row_gets_state_class() {
		let html = Table::new()
			.row(TableRow::new([TableCell::new("x")]).selected())
			.render_to_string();
		assert!(html.contains("<tr class=\"is-selected\">"));
	}

	#[test]
	fn test_table_modifiers() {
		let html = two_by_two().striped().full_width().render_to_string();
		assert!(html.starts_with("<table class=\"table is-striped is-fullwidth\">"));
	}

	#[test]
	fn test_table_container() {
		let html = TableContainer::new(Table::new().render()).render_to_string();
		assert_eq!(
			html,
			"<div class=\"table-container\"><table class=\"table\"></table></div>"
		);
	}
}
