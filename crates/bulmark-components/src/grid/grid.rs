//! The CSS smart grid and fixed grid.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::responsive::{Responsive, scale_class};
use crate::util::passthrough;

fn push_axis(classes: &mut ClassList, prefix: &str, values: &Responsive<u8>) {
	for (bp, value) in values.entries() {
		if let Some(token) = scale_class(prefix, *value, 1..=12, bp) {
			classes.push(token);
		}
	}
}

fn push_gap(classes: &mut ClassList, prefix: &str, values: &Responsive<u8>) {
	for (bp, value) in values.entries() {
		if let Some(token) = scale_class(prefix, *value, 0..=8, bp) {
			classes.push(token);
		}
	}
}

/// A `<div class="grid">` smart grid container.
#[derive(Debug, Clone, Default)]
pub struct Grid {
	/// `is-gap-{0..8}`, per breakpoint.
	pub gap: Responsive<u8>,
	/// `is-column-gap-{0..8}`, per breakpoint.
	pub column_gap: Responsive<u8>,
	/// `is-row-gap-{0..8}`, per breakpoint.
	pub row_gap: Responsive<u8>,
	/// `is-col-min-{1..32}`: minimum column width step.
	pub min_col: Option<u8>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The grid's cells.
	pub children: Vec<Node>,
}

impl Grid {
	/// Creates an empty grid.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the base gap (0–8).
	pub fn gap(mut self, gap: u8) -> Self {
		self.gap.base = Some(gap);
		self
	}

	/// Sets the minimum column width step (1–32).
	pub fn min_col(mut self, min_col: u8) -> Self {
		self.min_col = Some(min_col);
		self
	}

	/// Appends a cell.
	pub fn cell(mut self, cell: Cell) -> Self {
		self.children.push(cell.render());
		self
	}
}

impl Component for Grid {
	fn name(&self) -> &'static str {
		"Grid"
	}

	fn render(&self) -> Node {
		let mut classes = ClassList::new("grid");
		push_gap(&mut classes, "is-gap", &self.gap);
		push_gap(&mut classes, "is-column-gap", &self.column_gap);
		push_gap(&mut classes, "is-row-gap", &self.row_gap);
		if let Some(min_col) = self.min_col {
			classes = classes.with_opt(scale_class("is-col-min", min_col, 1..=32, None));
		}
		let classes = classes.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.children.iter().cloned())
			.into_node()
	}
}

/// A `<div class="fixed-grid">` wrapper forcing a column count.
#[derive(Debug, Clone, Default)]
pub struct FixedGrid {
	/// `has-{1..12}-cols`, per breakpoint.
	pub cols: Responsive<u8>,
	/// `has-auto-count`: column count follows the viewport.
	pub auto_count: bool,
	/// Custom classes.
	pub classes: Vec<String>,
	/// The inner grid.
	pub grid: Grid,
}

impl FixedGrid {
	/// Wraps the given grid.
	pub fn new(grid: Grid) -> Self {
		Self {
			grid,
			..Self::default()
		}
	}

	/// Sets the base column count (1–12).
	pub fn cols(mut self, cols: u8) -> Self {
		self.cols.base = Some(cols);
		self
	}
}

impl Component for FixedGrid {
	fn name(&self) -> &'static str {
		"FixedGrid"
	}

	fn render(&self) -> Node {
		let mut classes = ClassList::new("fixed-grid");
		for (bp, cols) in self.cols.entries() {
			// count tokens read `has-{n}-cols[-bp]`, so the shared
			// formatter's `{prefix}-{value}[-{suffix}]` shape does not fit
			if !(1..=12).contains(cols) {
				continue;
			}
			classes.push(match bp {
				None => format!("has-{cols}-cols"),
				Some(bp) => format!("has-{cols}-cols-{}", bp.suffix()),
			});
		}
		let classes = classes
			.with_if(self.auto_count, "has-auto-count")
			.extend(self.classes.iter().cloned());

		classes
			.apply(Element::new("div"))
			.child(self.grid.render())
			.into_node()
	}
}

/// A `<div class="cell">` inside a grid.
///
/// Every placement field is validated 1–12 per breakpoint; out-of-range
/// values contribute no class and the cell renders with its base class
/// only.
#[derive(Debug, Clone, Default)]
pub struct Cell {
	/// `is-col-start-{n}`
	pub col_start: Responsive<u8>,
	/// `is-col-end-{n}`
	pub col_end: Responsive<u8>,
	/// `is-col-span-{n}`
	pub col_span: Responsive<u8>,
	/// `is-col-from-end-{n}`
	pub col_from_end: Responsive<u8>,
	/// `is-row-start-{n}`
	pub row_start: Responsive<u8>,
	/// `is-row-end-{n}`
	pub row_end: Responsive<u8>,
	/// `is-row-span-{n}`
	pub row_span: Responsive<u8>,
	/// `is-row-from-end-{n}`
	pub row_from_end: Responsive<u8>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Cell content.
	pub body: Vec<Node>,
}

impl Cell {
	/// Creates a cell with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the base column start (1–12).
	pub fn col_start(mut self, value: u8) -> Self {
		self.col_start.base = Some(value);
		self
	}

	/// Sets the base column span (1–12).
	pub fn col_span(mut self, value: u8) -> Self {
		self.col_span.base = Some(value);
		self
	}

	/// Sets the base row start (1–12).
	pub fn row_start(mut self, value: u8) -> Self {
		self.row_start.base = Some(value);
		self
	}

	/// Sets the base row span (1–12).
	pub fn row_span(mut self, value: u8) -> Self {
		self.row_span.base = Some(value);
		self
	}
}

impl Component for Cell {
	fn name(&self) -> &'static str {
		"Cell"
	}

	fn render(&self) -> Node {
		let mut classes = ClassList::new("cell");
		push_axis(&mut classes, "is-col-start", &self.col_start);
		push_axis(&mut classes, "is-col-end", &self.col_end);
		push_axis(&mut classes, "is-col-span", &self.col_span);
		push_axis(&mut classes, "is-col-from-end", &self.col_from_end);
		push_axis(&mut classes, "is-row-start", &self.row_start);
		push_axis(&mut classes, "is-row-end", &self.row_end);
		push_axis(&mut classes, "is-row-span", &self.row_span);
		push_axis(&mut classes, "is-row-from-end", &self.row_from_end);
		let classes = classes.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_bare_grid_has_no_gap_token() {
		assert_eq!(Grid::new().render_to_string(), "<div class=\"grid\"></div>");
	}

	#[test]
	fn test_grid_gaps_and_min_col() {
		let mut grid = Grid::new().gap(2).min_col(8);
		grid.row_gap.tablet = Some(1);
		assert_eq!(
			grid.render_to_string(),
			"<div class=\"grid is-gap-2 is-row-gap-1-tablet is-col-min-8\"></div>"
		);
	}

	#[test]
	fn test_cell_placement_tokens_in_axis_order() {
		let cell = Cell::new("x").col_start(2).col_span(3).row_span(2);
		assert_eq!(
			cell.render_to_string(),
			"<div class=\"cell is-col-start-2 is-col-span-3 is-row-span-2\">x</div>"
		);
	}

	#[rstest]
	#[case(0)]
	#[case(13)]
	fn test_out_of_range_span_renders_base_class_only(#[case] span: u8) {
		let html = Cell::new("x").col_span(span).render_to_string();
		assert_eq!(html, "<div class=\"cell\">x</div>");
		assert!(!html.contains("is-col-span"));
	}

	#[test]
	fn test_cell_responsive_placement() {
		let mut cell = Cell::new("x");
		cell.col_span.base = Some(4);
		cell.col_span.widescreen = Some(6);
		assert_eq!(
			cell.render_to_string(),
			"<div class=\"cell is-col-span-4 is-col-span-6-widescreen\">x</div>"
		);
	}

	#[test]
	fn test_fixed_grid_cols() {
		let fixed = FixedGrid::new(Grid::new()).cols(4);
		assert_eq!(
			fixed.render_to_string(),
			"<div class=\"fixed-grid has-4-cols\"><div class=\"grid\"></div></div>"
		);
	}

	#[test]
	fn test_fixed_grid_cols_with_breakpoint() {
		let mut fixed = FixedGrid::new(Grid::new());
		fixed.cols.mobile = Some(2);
		assert_eq!(
			fixed.render_to_string(),
			"<div class=\"fixed-grid has-2-cols-mobile\"><div class=\"grid\"></div></div>"
		);
	}

	#[test]
	fn test_grid_cell_composition() {
		let grid = Grid::new().gap(1).cell(Cell::new("a").col_span(2));
		assert_eq!(
			grid.render_to_string(),
			"<div class=\"grid is-gap-1\">\
			 <div class=\"cell is-col-span-2\">a</div></div>"
		);
	}

	#[test]
	fn test_gap_zero_is_distinct_from_unset() {
		let html = Grid::new().gap(0).render_to_string();
		assert_eq!(html, "<div class=\"grid is-gap-0\"></div>");
	}

	#[test]
	fn test_invalid_min_col_is_dropped() {
		let html = Grid::new().min_col(33).render_to_string();
		assert_eq!(html, "<div class=\"grid\"></div>");
	}

	#[test]
	fn test_invalid_fixed_grid_cols_is_dropped() {
		let html = FixedGrid::new(Grid::new()).cols(13).render_to_string();
		assert_eq!(
			html,
			"<div class=\"fixed-grid\"><div class=\"grid\"></div></div>"
		);
	}
}
