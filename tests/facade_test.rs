//! Smoke tests for the facade crate re-exports.

use bulmark::prelude::*;
use rstest::rstest;

#[rstest]
fn test_prelude_covers_a_page_build() {
	let page = Document::new(
		"Hello",
		Section::new(
			Container::new(
				(
					Title::new("Hello, bulmark").render(),
					Button::new("Start").color(Color::Primary).render(),
				)
					.into_node(),
			)
			.render(),
		)
		.render(),
	);

	let html = page.render_to_string();
	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<h1 class=\"title is-1\">Hello, bulmark</h1>"));
	assert!(html.contains("<button class=\"button is-primary\">Start</button>"));
}

#[rstest]
fn test_html_layer_is_reachable() {
	let node = Element::new("div").attr("class", "plain").into_node();
	assert_eq!(node.render_to_string(), "<div class=\"plain\"></div>");
}

#[rstest]
fn test_scale_class_is_reachable() {
	assert_eq!(
		scale_class("is-col-span", 3, 1..=12, Some(Breakpoint::Tablet)).as_deref(),
		Some("is-col-span-3-tablet")
	);
	assert_eq!(scale_class("is-col-span", 13, 1..=12, None), None);
}
