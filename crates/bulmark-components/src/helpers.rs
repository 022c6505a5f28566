//! Helper class tables: color, spacing, typography and visibility.
//!
//! Bulma ships hundreds of utility classes in a handful of regular
//! families. Each family is exposed here as one lookup function instead
//! of one constant per class. Scale-valued helpers share the
//! [`scale_class`](crate::scale_class) contract: an out-of-range value
//! returns `None` and the caller omits the class.

use crate::modifiers::Color;
use crate::responsive::{Breakpoint, scale_class};

/// Returns the `has-text-*` text color helper.
pub fn text_color(color: Color) -> String {
	format!("has-text-{}", color.name())
}

/// Returns the `has-background-*` background color helper.
pub fn background_color(color: Color) -> String {
	format!("has-background-{}", color.name())
}

/// Returns the `is-size-{1..7}` typography size helper, optionally scoped
/// to a breakpoint. Sizes outside 1–7 return `None`.
pub fn text_size(level: u8, breakpoint: Option<Breakpoint>) -> Option<String> {
	scale_class("is-size", level, 1..=7, breakpoint)
}

/// Text alignment helper family (`has-text-centered`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
	/// `has-text-centered`
	Centered,
	/// `has-text-justified`
	Justified,
	/// `has-text-left`
	Left,
	/// `has-text-right`
	Right,
}

impl TextAlignment {
	fn name(&self) -> &'static str {
		match self {
			Self::Centered => "centered",
			Self::Justified => "justified",
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}

/// Returns the `has-text-*` alignment helper, optionally scoped to a
/// breakpoint (`has-text-centered-mobile`).
pub fn text_alignment(alignment: TextAlignment, breakpoint: Option<Breakpoint>) -> String {
	match breakpoint {
		None => format!("has-text-{}", alignment.name()),
		Some(bp) => format!("has-text-{}-{}", alignment.name(), bp.suffix()),
	}
}

/// Font weight helper family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWeight {
	/// `has-text-weight-light`
	Light,
	/// `has-text-weight-normal`
	Normal,
	/// `has-text-weight-medium`
	Medium,
	/// `has-text-weight-semibold`
	Semibold,
	/// `has-text-weight-bold`
	Bold,
}

impl TextWeight {
	/// Returns the `has-text-weight-*` helper class.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Light => "has-text-weight-light",
			Self::Normal => "has-text-weight-normal",
			Self::Medium => "has-text-weight-medium",
			Self::Semibold => "has-text-weight-semibold",
			Self::Bold => "has-text-weight-bold",
		}
	}
}

/// Text transformation helper family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransform {
	/// `is-capitalized`
	Capitalized,
	/// `is-lowercase`
	Lowercase,
	/// `is-uppercase`
	Uppercase,
	/// `is-italic`
	Italic,
	/// `is-underlined`
	Underlined,
}

impl TextTransform {
	/// Returns the transformation helper class.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Capitalized => "is-capitalized",
			Self::Lowercase => "is-lowercase",
			Self::Uppercase => "is-uppercase",
			Self::Italic => "is-italic",
			Self::Underlined => "is-underlined",
		}
	}
}

/// Font family helper family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
	/// `is-family-sans-serif`
	SansSerif,
	/// `is-family-monospace`
	Monospace,
	/// `is-family-primary`
	Primary,
	/// `is-family-secondary`
	Secondary,
	/// `is-family-code`
	Code,
}

impl FontFamily {
	/// Returns the font family helper class.
	pub fn class(&self) -> &'static str {
		match self {
			Self::SansSerif => "is-family-sans-serif",
			Self::Monospace => "is-family-monospace",
			Self::Primary => "is-family-primary",
			Self::Secondary => "is-family-secondary",
			Self::Code => "is-family-code",
		}
	}
}

/// Box side selector for the spacing helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// All sides (`m-*` / `p-*`)
	All,
	/// Top (`mt-*`)
	Top,
	/// Right (`mr-*`)
	Right,
	/// Bottom (`mb-*`)
	Bottom,
	/// Left (`ml-*`)
	Left,
	/// Left and right (`mx-*`)
	X,
	/// Top and bottom (`my-*`)
	Y,
}

impl Side {
	fn abbrev(&self) -> &'static str {
		match self {
			Self::All => "",
			Self::Top => "t",
			Self::Right => "r",
			Self::Bottom => "b",
			Self::Left => "l",
			Self::X => "x",
			Self::Y => "y",
		}
	}
}

/// Returns the `m*-{0..6}` margin helper. Scales outside 0–6 return `None`.
pub fn margin(side: Side, scale: u8) -> Option<String> {
	scale_class(&format!("m{}", side.abbrev()), scale, 0..=6, None)
}

/// Returns the `m*-auto` margin helper.
pub fn margin_auto(side: Side) -> String {
	format!("m{}-auto", side.abbrev())
}

/// Returns the `p*-{0..6}` padding helper. Scales outside 0–6 return `None`.
pub fn padding(side: Side, scale: u8) -> Option<String> {
	scale_class(&format!("p{}", side.abbrev()), scale, 0..=6, None)
}

/// Display mode for the visibility helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
	/// `is-block`
	Block,
	/// `is-flex`
	Flex,
	/// `is-inline`
	Inline,
	/// `is-inline-block`
	InlineBlock,
	/// `is-inline-flex`
	InlineFlex,
}

impl Display {
	fn name(&self) -> &'static str {
		match self {
			Self::Block => "block",
			Self::Flex => "flex",
			Self::Inline => "inline",
			Self::InlineBlock => "inline-block",
			Self::InlineFlex => "inline-flex",
		}
	}
}

/// Returns the display helper (`is-flex`), optionally scoped to a
/// breakpoint (`is-flex-tablet-only`).
pub fn display(display: Display, breakpoint: Option<Breakpoint>) -> String {
	match breakpoint {
		None => format!("is-{}", display.name()),
		Some(bp) => format!("is-{}-{}", display.name(), bp.suffix()),
	}
}

/// Returns the `is-hidden` helper, optionally scoped to a breakpoint
/// (`is-hidden-touch`).
pub fn hidden(breakpoint: Option<Breakpoint>) -> String {
	match breakpoint {
		None => "is-hidden".to_string(),
		Some(bp) => format!("is-hidden-{}", bp.suffix()),
	}
}

/// Returns the `is-invisible` helper, optionally scoped to a breakpoint.
pub fn invisible(breakpoint: Option<Breakpoint>) -> String {
	match breakpoint {
		None => "is-invisible".to_string(),
		Some(bp) => format!("is-invisible-{}", bp.suffix()),
	}
}

/// Returns the screen-reader-only helper.
pub fn screen_reader_only() -> &'static str {
	"is-sr-only"
}
