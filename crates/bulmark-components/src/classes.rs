//! Ordered CSS class-list composition.

use std::borrow::Cow;
use std::fmt;

use bulmark_html::Element;

/// An ordered CSS class list.
///
/// A class list starts from a component's base class, accumulates modifier
/// tokens in the component's schema order, and finishes with the caller's
/// custom classes. Empty tokens contribute nothing, so unset modifiers can
/// be pushed unconditionally without producing stray spaces.
///
/// The final string is a function of push order alone, which makes renders
/// of equal props values byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	tokens: Vec<Cow<'static, str>>,
}

impl ClassList {
	/// Creates a class list seeded with a base class.
	pub fn new(base: impl Into<Cow<'static, str>>) -> Self {
		Self::bare().with(base)
	}

	/// Creates a class list with no base class, for elements whose class
	/// attribute is entirely modifier-driven.
	pub fn bare() -> Self {
		Self { tokens: Vec::new() }
	}

	/// Appends one token. Empty tokens are skipped.
	pub fn push(&mut self, token: impl Into<Cow<'static, str>>) {
		let token = token.into();
		if !token.is_empty() {
			self.tokens.push(token);
		}
	}

	/// Appends one token, builder style.
	pub fn with(mut self, token: impl Into<Cow<'static, str>>) -> Self {
		self.push(token);
		self
	}

	/// Appends a token when it is set.
	pub fn with_opt(mut self, token: Option<impl Into<Cow<'static, str>>>) -> Self {
		if let Some(token) = token {
			self.push(token);
		}
		self
	}

	/// Appends a token when `set` is true.
	pub fn with_if(mut self, set: bool, token: impl Into<Cow<'static, str>>) -> Self {
		if set {
			self.push(token);
		}
		self
	}

	/// Appends every token from `tokens`, in order.
	pub fn extend(
		mut self,
		tokens: impl IntoIterator<Item = impl Into<Cow<'static, str>>>,
	) -> Self {
		for token in tokens {
			self.push(token);
		}
		self
	}

	/// Returns true when no token has been collected.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the space-joined class attribute value.
	pub fn to_attr(&self) -> String {
		self.tokens.join(" ")
	}

	/// Sets the `class` attribute on `el`, even when the list is empty.
	///
	/// Used by components that carry a base class (the attribute is then
	/// never empty in practice).
	pub fn apply(self, el: Element) -> Element {
		el.attr("class", self.to_attr())
	}

	/// Sets the `class` attribute on `el` only when at least one token is
	/// present; otherwise the attribute is omitted entirely.
	///
	/// Used by structural sub-elements (`thead`, list items, wrappers)
	/// whose class is purely state-driven.
	pub fn apply_if_any(self, el: Element) -> Element {
		if self.is_empty() {
			el
		} else {
			self.apply(el)
		}
	}
}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_attr())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bulmark_html::IntoNode;

	#[test]
	fn test_base_only() {
		let list = ClassList::new("button");
		assert_eq!(list.to_attr(), "button");
	}

	#[test]
	fn test_empty_tokens_are_skipped() {
		let list = ClassList::new("button").with("").with("is-large").with("");
		assert_eq!(list.to_attr(), "button is-large");
	}

	#[test]
	fn test_push_order_is_preserved() {
		let list = ClassList::new("tag")
			.with("is-large")
			.with("is-info")
			.with("is-light");
		assert_eq!(list.to_attr(), "tag is-large is-info is-light");
	}

	#[test]
	fn test_custom_classes_trail() {
		let list = ClassList::new("tag")
			.with("is-info")
			.extend(vec!["foo".to_string(), "bar".to_string()]);
		assert_eq!(list.to_attr(), "tag is-info foo bar");
	}

	#[test]
	fn test_with_opt_and_with_if() {
		let list = ClassList::new("button")
			.with_opt(Some("is-primary"))
			.with_opt(None::<&'static str>)
			.with_if(true, "is-rounded")
			.with_if(false, "is-loading");
		assert_eq!(list.to_attr(), "button is-primary is-rounded");
	}

	#[test]
	fn test_apply_always_sets_class() {
		let el = ClassList::new("notification").apply(Element::new("div"));
		assert_eq!(
			el.into_node().render_to_string(),
			"<div class=\"notification\"></div>"
		);
	}

	#[test]
	fn test_apply_if_any_omits_empty_attribute() {
		let el = ClassList::bare().apply_if_any(Element::new("thead"));
		assert_eq!(el.into_node().render_to_string(), "<thead></thead>");

		let el = ClassList::bare()
			.with("is-selected")
			.apply_if_any(Element::new("tr"));
		assert_eq!(
			el.into_node().render_to_string(),
			"<tr class=\"is-selected\"></tr>"
		);
	}

	mod composition_properties {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn joined_attr_never_has_stray_spaces(tokens in proptest::collection::vec("[a-z-]{0,8}", 0..12)) {
				let list = ClassList::bare().extend(tokens);
				let attr = list.to_attr();
				prop_assert!(!attr.starts_with(' '));
				prop_assert!(!attr.ends_with(' '));
				prop_assert!(!attr.contains("  "));
			}

			#[test]
			fn composition_is_deterministic(tokens in proptest::collection::vec("[a-z-]{1,8}", 0..12)) {
				let a = ClassList::new("base").extend(tokens.clone()).to_attr();
				let b = ClassList::new("base").extend(tokens).to_attr();
				prop_assert_eq!(a, b);
			}
		}
	}
}
