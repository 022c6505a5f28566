//! Shared modifier enums.

/// Color variant shared by buttons, tags, notifications, messages, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
	/// White
	White,
	/// Black
	Black,
	/// Light gray
	Light,
	/// Dark gray
	Dark,
	/// Primary (teal)
	Primary,
	/// Link (blue)
	Link,
	/// Info (cyan)
	Info,
	/// Success (green)
	Success,
	/// Warning (yellow)
	Warning,
	/// Danger (red)
	Danger,
}

impl Color {
	/// Returns the `is-*` modifier class for this color.
	pub fn class(self) -> &'static str {
		match self {
			Self::White => "is-white",
			Self::Black => "is-black",
			Self::Light => "is-light",
			Self::Dark => "is-dark",
			Self::Primary => "is-primary",
			Self::Link => "is-link",
			Self::Info => "is-info",
			Self::Success => "is-success",
			Self::Warning => "is-warning",
			Self::Danger => "is-danger",
		}
	}

	/// Returns the bare color name, used by the `has-text-*` /
	/// `has-background-*` helper tables.
	pub fn name(&self) -> &'static str {
		match self {
			Self::White => "white",
			Self::Black => "black",
			Self::Light => "light",
			Self::Dark => "dark",
			Self::Primary => "primary",
			Self::Link => "link",
			Self::Info => "info",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Danger => "danger",
		}
	}
}

/// Size variant. `Normal` is the default and contributes no class token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
	/// Small
	Small,
	/// Normal (default, no modifier class)
	#[default]
	Normal,
	/// Medium
	Medium,
	/// Large
	Large,
}

impl Size {
	/// Returns the `is-*` modifier class, or `""` for `Normal`.
	pub fn class(self) -> &'static str {
		match self {
			Self::Small => "is-small",
			Self::Normal => "",
			Self::Medium => "is-medium",
			Self::Large => "is-large",
		}
	}

	/// Returns the `are-*` group class used by `Buttons`/`Tags`
	/// containers, or `""` for `Normal`.
	pub fn group_class(self) -> &'static str {
		match self {
			Self::Small => "are-small",
			Self::Normal => "",
			Self::Medium => "are-medium",
			Self::Large => "are-large",
		}
	}
}

/// Horizontal alignment for tabs, breadcrumbs, pagination and the like.
/// `Left` is the default and contributes no class token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
	/// Left (default, no modifier class)
	#[default]
	Left,
	/// Centered
	Centered,
	/// Right
	Right,
}

impl Alignment {
	/// Returns the `is-*` modifier class, or `""` for `Left`.
	pub fn class(self) -> &'static str {
		match self {
			Self::Left => "",
			Self::Centered => "is-centered",
			Self::Right => "is-right",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_class() {
		assert_eq!(Color::Primary.class(), "is-primary");
		assert_eq!(Color::Danger.class(), "is-danger");
		assert_eq!(Color::White.class(), "is-white");
	}

	#[test]
	fn test_color_name() {
		assert_eq!(Color::Primary.name(), "primary");
		assert_eq!(Color::Dark.name(), "dark");
	}

	#[test]
	fn test_size_class() {
		assert_eq!(Size::Small.class(), "is-small");
		assert_eq!(Size::Normal.class(), "");
		assert_eq!(Size::Large.class(), "is-large");
	}

	#[test]
	fn test_size_group_class() {
		assert_eq!(Size::Medium.group_class(), "are-medium");
		assert_eq!(Size::Normal.group_class(), "");
	}

	#[test]
	fn test_alignment_class() {
		assert_eq!(Alignment::Left.class(), "");
		assert_eq!(Alignment::Centered.class(), "is-centered");
		assert_eq!(Alignment::Right.class(), "is-right");
	}
}
