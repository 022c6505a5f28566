//! The 12-column flexbox grid.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::responsive::{Breakpoint, Responsive, scale_class};
use crate::util::passthrough;

/// A column width: a twelfth (1–12) or a named fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSize {
	/// `is-{1..12}`
	Number(u8),
	/// `is-three-quarters`
	ThreeQuarters,
	/// `is-two-thirds`
	TwoThirds,
	/// `is-half`
	Half,
	/// `is-one-third`
	OneThird,
	/// `is-one-quarter`
	OneQuarter,
	/// `is-four-fifths`
	FourFifths,
	/// `is-three-fifths`
	ThreeFifths,
	/// `is-two-fifths`
	TwoFifths,
	/// `is-one-fifth`
	OneFifth,
	/// `is-full`
	Full,
}

impl ColumnSize {
	fn fraction_name(&self) -> Option<&'static str> {
		match self {
			Self::Number(_) => None,
			Self::ThreeQuarters => Some("three-quarters"),
			Self::TwoThirds => Some("two-thirds"),
			Self::Half => Some("half"),
			Self::OneThird => Some("one-third"),
			Self::OneQuarter => Some("one-quarter"),
			Self::FourFifths => Some("four-fifths"),
			Self::ThreeFifths => Some("three-fifths"),
			Self::TwoFifths => Some("two-fifths"),
			Self::OneFifth => Some("one-fifth"),
			Self::Full => Some("full"),
		}
	}

	/// Formats the class token under `prefix` (`is` for sizes,
	/// `is-offset` for offsets). Numeric values outside `range` yield
	/// `None` and the modifier is omitted.
	fn token(
		&self,
		prefix: &str,
		range: std::ops::RangeInclusive<u8>,
		breakpoint: Option<Breakpoint>,
	) -> Option<String> {
		match self {
			Self::Number(n) => scale_class(prefix, *n, range, breakpoint),
			fraction => {
				let name = fraction.fraction_name()?;
				Some(match breakpoint {
					None => format!("{prefix}-{name}"),
					Some(bp) => format!("{prefix}-{name}-{}", bp.suffix()),
				})
			}
		}
	}
}

/// A `<div class="column">`.
#[derive(Debug, Clone, Default)]
pub struct Column {
	/// Width, per breakpoint. Numeric widths are validated 1–12.
	pub size: Responsive<ColumnSize>,
	/// Offset, per breakpoint. Numeric offsets are validated 0–12.
	pub offset: Responsive<ColumnSize>,
	/// `is-narrow`, per breakpoint (`true` emits the token).
	pub narrow: Responsive<bool>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// Column content.
	pub body: Vec<Node>,
}

impl Column {
	/// Creates a column with the given content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the base width.
	pub fn size(mut self, size: ColumnSize) -> Self {
		self.size.base = Some(size);
		self
	}

	/// Sets the base offset.
	pub fn offset(mut self, offset: ColumnSize) -> Self {
		self.offset.base = Some(offset);
		self
	}

	/// Makes the column only as wide as its content.
	pub fn narrow(mut self) -> Self {
		self.narrow.base = Some(true);
		self
	}
}

impl Component for Column {
	fn name(&self) -> &'static str {
		"Column"
	}

	fn render(&self) -> Node {
		let mut classes = ClassList::new("column");
		for (bp, size) in self.size.entries() {
			classes = classes.with_opt(size.token("is", 1..=12, bp));
		}
		for (bp, offset) in self.offset.entries() {
			classes = classes.with_opt(offset.token("is-offset", 0..=12, bp));
		}
		for (bp, narrow) in self.narrow.entries() {
			if *narrow {
				classes = classes.with(match bp {
					None => "is-narrow".to_string(),
					Some(bp) => format!("is-narrow-{}", bp.suffix()),
				});
			}
		}
		classes = classes.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned())
			.into_node()
	}
}

/// A `<div class="columns">` container.
#[derive(Debug, Clone, Default)]
pub struct Columns {
	/// `is-mobile`: keeps columns side by side on mobile.
	pub mobile: bool,
	/// `is-desktop`: only activates columns from desktop up.
	pub desktop: bool,
	/// `is-gapless`
	pub gapless: bool,
	/// `is-multiline`
	pub multiline: bool,
	/// `is-centered`
	pub centered: bool,
	/// `is-vcentered`
	pub vcentered: bool,
	/// Variable gap, 0–8 per breakpoint. Any valid slot also emits
	/// `is-variable`.
	pub gap: Responsive<u8>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The columns.
	pub children: Vec<Column>,
}

impl Columns {
	/// Creates an empty columns container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a column.
	pub fn column(mut self, column: Column) -> Self {
		self.children.push(column);
		self
	}

	/// Keeps columns side by side on mobile.
	pub fn mobile(mut self) -> Self {
		self.mobile = true;
		self
	}

	/// `is-multiline`
	pub fn multiline(mut self) -> Self {
		self.multiline = true;
		self
	}

	/// Sets the base gap (0–8).
	pub fn gap(mut self, gap: u8) -> Self {
		self.gap.base = Some(gap);
		self
	}
}

impl Component for Columns {
	fn name(&self) -> &'static str {
		"Columns"
	}

	fn render(&self) -> Node {
		let mut gap_tokens = Vec::new();
		for (bp, gap) in self.gap.entries() {
			if let Some(token) = scale_class("is", *gap, 0..=8, bp) {
				gap_tokens.push(token);
			}
		}

		let classes = ClassList::new("columns")
			.with_if(self.mobile, "is-mobile")
			.with_if(self.desktop, "is-desktop")
			.with_if(self.gapless, "is-gapless")
			.with_if(self.multiline, "is-multiline")
			.with_if(self.centered, "is-centered")
			.with_if(self.vcentered, "is-vcentered")
			.with_if(!gap_tokens.is_empty(), "is-variable")
			.extend(gap_tokens)
			.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.children.iter().map(Column::render))
			.into_node()
	}
}
