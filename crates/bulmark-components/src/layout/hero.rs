//! Hero layout element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::modifiers::Color;
use crate::util::passthrough;

/// Vertical size of a [`Hero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroSize {
	/// Default height (no modifier).
	#[default]
	Normal,
	/// `is-small`
	Small,
	/// `is-medium`
	Medium,
	/// `is-large`
	Large,
	/// `is-halfheight`
	HalfHeight,
	/// `is-fullheight`
	FullHeight,
}

impl HeroSize {
	/// Returns the modifier class, or `""` for `Normal`.
	pub fn class(&self) -> &'static str {
		match self {
			Self::Normal => "",
			Self::Small => "is-small",
			Self::Medium => "is-medium",
			Self::Large => "is-large",
			Self::HalfHeight => "is-halfheight",
			Self::FullHeight => "is-fullheight",
		}
	}
}

/// A `<section class="hero">` banner.
///
/// The body always renders inside `<div class="hero-body">`; head and
/// foot wrappers appear only when content is supplied for them.
#[derive(Debug, Clone, Default)]
pub struct Hero {
	/// Color modifier.
	pub color: Option<Color>,
	/// Vertical size.
	pub size: HeroSize,
	/// Content above the body (`hero-head`).
	pub head: Vec<Node>,
	/// Main content (`hero-body`).
	pub body: Vec<Node>,
	/// Content below the body (`hero-foot`).
	pub foot: Vec<Node>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
}

impl Hero {
	/// Creates a hero with the given body content.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the color modifier.
	pub fn color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Sets the vertical size.
	pub fn size(mut self, size: HeroSize) -> Self {
		self.size = size;
		self
	}
}

fn part(class: &'static str, body: &[Node]) -> Node {
	if body.is_empty() {
		return Node::empty();
	}
	Element::new("div")
		.attr("class", class)
		.children(body.iter().cloned())
		.into_node()
}

impl Component for Hero {
	fn name(&self) -> &'static str {
		"Hero"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("hero")
			.with_opt(self.color.map(Color::class))
			.with(self.size.class())
			.extend(self.classes.iter().cloned());

		passthrough(classes.apply(Element::new("section")), &self.attrs)
			.child(part("hero-head", &self.head))
			.child(
				Element::new("div")
					.attr("class", "hero-body")
					.children(self.body.iter().cloned()),
			)
			.child(part("hero-foot", &self.foot))
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_hero() {
		let html = Hero::new("Welcome").color(Color::Primary).render_to_string();
		assert_eq!(
			html,
			"<section class=\"hero is-primary\">\
			 <div class=\"hero-body\">Welcome</div></section>"
		);
	}

	#[test]
	fn test_fullheight_hero_with_foot() {
		let mut hero = Hero::new("body").size(HeroSize::FullHeight);
		hero.foot.push(Node::text("foot"));
		assert_eq!(
			hero.render_to_string(),
			"<section class=\"hero is-fullheight\">\
			 <div class=\"hero-body\">body</div>\
			 <div class=\"hero-foot\">foot</div></section>"
		);
	}

	#[test]
	fn test_head_and_foot_absent_without_content() {
		let html = Hero::new("x").render_to_string();
		assert!(!html.contains("hero-head"));
		assert!(!html.contains("hero-foot"));
	}
}
