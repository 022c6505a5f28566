//! Responsive breakpoints and validated class-token formatting.

use std::ops::RangeInclusive;

/// Viewport breakpoint qualifier.
///
/// Appended as a class suffix to scope a modifier to a screen-size range,
/// e.g. `is-half-mobile` or `is-hidden-tablet-only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
	/// Up to 768px.
	Mobile,
	/// From 769px.
	Tablet,
	/// Between 769px and 1023px.
	TabletOnly,
	/// Up to 1023px (mobile and tablet).
	Touch,
	/// From 1024px.
	Desktop,
	/// Between 1024px and 1215px.
	DesktopOnly,
	/// From 1216px.
	Widescreen,
	/// Between 1216px and 1407px.
	WidescreenOnly,
	/// From 1408px.
	FullHd,
}

impl Breakpoint {
	/// Returns the class suffix for this breakpoint.
	pub fn suffix(&self) -> &'static str {
		match self {
			Self::Mobile => "mobile",
			Self::Tablet => "tablet",
			Self::TabletOnly => "tablet-only",
			Self::Touch => "touch",
			Self::Desktop => "desktop",
			Self::DesktopOnly => "desktop-only",
			Self::Widescreen => "widescreen",
			Self::WidescreenOnly => "widescreen-only",
			Self::FullHd => "fullhd",
		}
	}
}

/// Formats a validated numeric class token.
///
/// Returns `{prefix}-{value}` (or `{prefix}-{value}-{suffix}` with a
/// breakpoint) when `value` lies within `range`, and `None` otherwise.
/// Callers treat `None` as "omit this modifier": a grid span of 13 or a
/// gap of 9 silently contributes no class rather than failing the render.
///
/// This one routine backs gap classes (`is-gap-{0..8}`), column sizes and
/// offsets (`is-{1..12}`), and every grid-cell axis
/// (`is-col-start-{1..12}`, `is-row-span-{1..12}`, ...).
pub fn scale_class(
	prefix: &str,
	value: u8,
	range: RangeInclusive<u8>,
	breakpoint: Option<Breakpoint>,
) -> Option<String> {
	if !range.contains(&value) {
		return None;
	}
	Some(match breakpoint {
		None => format!("{prefix}-{value}"),
		Some(bp) => format!("{prefix}-{value}-{}", bp.suffix()),
	})
}

/// A value that can vary per breakpoint.
///
/// Each slot is independent; unset slots contribute nothing. Only the
/// five suffix breakpoints Bulma defines for sized modifiers are
/// represented (compound `-only`/`-touch` forms apply to helper classes,
/// not to sized grid modifiers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
	/// Applies at every viewport width.
	pub base: Option<T>,
	/// Applies from the mobile breakpoint.
	pub mobile: Option<T>,
	/// Applies from the tablet breakpoint.
	pub tablet: Option<T>,
	/// Applies from the desktop breakpoint.
	pub desktop: Option<T>,
	/// Applies from the widescreen breakpoint.
	pub widescreen: Option<T>,
	/// Applies from the fullhd breakpoint.
	pub fullhd: Option<T>,
}

impl<T> Default for Responsive<T> {
	fn default() -> Self {
		Self {
			base: None,
			mobile: None,
			tablet: None,
			desktop: None,
			widescreen: None,
			fullhd: None,
		}
	}
}

impl<T> Responsive<T> {
	/// Creates a responsive value with only the base slot set.
	pub fn new(base: T) -> Self {
		Self {
			base: Some(base),
			..Self::default()
		}
	}

	/// Creates a fully unset responsive value.
	pub fn unset() -> Self {
		Self::default()
	}

	/// Sets the mobile slot.
	pub fn mobile(mut self, value: T) -> Self {
		self.mobile = Some(value);
		self
	}

	/// Sets the tablet slot.
	pub fn tablet(mut self, value: T) -> Self {
		self.tablet = Some(value);
		self
	}

	/// Sets the desktop slot.
	pub fn desktop(mut self, value: T) -> Self {
		self.desktop = Some(value);
		self
	}

	/// Sets the widescreen slot.
	pub fn widescreen(mut self, value: T) -> Self {
		self.widescreen = Some(value);
		self
	}

	/// Sets the fullhd slot.
	pub fn fullhd(mut self, value: T) -> Self {
		self.fullhd = Some(value);
		self
	}

	/// Returns true when every slot is unset.
	pub fn is_unset(&self) -> bool {
		self.base.is_none()
			&& self.mobile.is_none()
			&& self.tablet.is_none()
			&& self.desktop.is_none()
			&& self.widescreen.is_none()
			&& self.fullhd.is_none()
	}

	/// Iterates the set slots in declared order: base first, then
	/// mobile, tablet, desktop, widescreen, fullhd.
	pub fn entries(&self) -> impl Iterator<Item = (Option<Breakpoint>, &T)> {
		[
			(None, self.base.as_ref()),
			(Some(Breakpoint::Mobile), self.mobile.as_ref()),
			(Some(Breakpoint::Tablet), self.tablet.as_ref()),
			(Some(Breakpoint::Desktop), self.desktop.as_ref()),
			(Some(Breakpoint::Widescreen), self.widescreen.as_ref()),
			(Some(Breakpoint::FullHd), self.fullhd.as_ref()),
		]
		.into_iter()
		.filter_map(|(bp, value)| value.map(|v| (bp, v)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Breakpoint::Mobile, "mobile")]
	#[case(Breakpoint::Tablet, "tablet")]
	#[case(Breakpoint::TabletOnly, "tablet-only")]
	#[case(Breakpoint::Touch, "touch")]
	#[case(Breakpoint::Desktop, "desktop")]
	#[case(Breakpoint::DesktopOnly, "desktop-only")]
	#[case(Breakpoint::Widescreen, "widescreen")]
	#[case(Breakpoint::WidescreenOnly, "widescreen-only")]
	#[case(Breakpoint::FullHd, "fullhd")]
	fn test_breakpoint_suffix(#[case] bp: Breakpoint, #[case] suffix: &str) {
		assert_eq!(bp.suffix(), suffix);
	}

	#[test]
	fn test_scale_class_without_breakpoint() {
		assert_eq!(
			scale_class("is-col-span", 3, 1..=12, None),
			Some("is-col-span-3".to_string())
		);
	}

	#[test]
	fn test_scale_class_with_breakpoint() {
		assert_eq!(
			scale_class("is-col-start", 2, 1..=12, Some(Breakpoint::Tablet)),
			Some("is-col-start-2-tablet".to_string())
		);
	}

	#[rstest]
	#[case(0)]
	#[case(13)]
	#[case(255)]
	fn test_scale_class_out_of_range(#[case] value: u8) {
		assert_eq!(scale_class("is-col-span", value, 1..=12, None), None);
	}

	#[test]
	fn test_scale_class_zero_valid_when_range_contains_it() {
		assert_eq!(
			scale_class("is-gap", 0, 0..=8, None),
			Some("is-gap-0".to_string())
		);
	}

	#[test]
	fn test_responsive_entries_order() {
		let value = Responsive::new(12u8).tablet(6).desktop(4).fullhd(3);
		let entries: Vec<_> = value.entries().collect();
		assert_eq!(
			entries,
			vec![
				(None, &12),
				(Some(Breakpoint::Tablet), &6),
				(Some(Breakpoint::Desktop), &4),
				(Some(Breakpoint::FullHd), &3),
			]
		);
	}

	#[test]
	fn test_responsive_unset() {
		let value: Responsive<u8> = Responsive::unset();
		assert!(value.is_unset());
		assert_eq!(value.entries().count(), 0);
	}
}
