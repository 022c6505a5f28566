//! Internal rendering helpers shared by the component modules.

use bulmark_html::Element;

/// Appends caller-supplied passthrough attributes, in caller order,
/// after every built-in attribute. Duplicates are emitted verbatim.
pub(crate) fn passthrough(mut el: Element, attrs: &[(String, String)]) -> Element {
	for (name, value) in attrs {
		el = el.attr(name.clone(), value.clone());
	}
	el
}
