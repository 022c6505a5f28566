//! Image element.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::util::passthrough;

/// Fixed square dimension for image containers (`is-64x64`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
	/// 16×16
	D16,
	/// 24×24
	D24,
	/// 32×32
	D32,
	/// 48×48
	D48,
	/// 64×64
	D64,
	/// 96×96
	D96,
	/// 128×128
	D128,
}

impl Dimension {
	/// Returns the `is-{n}x{n}` class.
	pub fn class(self) -> &'static str {
		match self {
			Self::D16 => "is-16x16",
			Self::D24 => "is-24x24",
			Self::D32 => "is-32x32",
			Self::D48 => "is-48x48",
			Self::D64 => "is-64x64",
			Self::D96 => "is-96x96",
			Self::D128 => "is-128x128",
		}
	}
}

/// Responsive aspect ratio for image containers (`is-4by3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
	/// 1 by 1
	Square,
	/// 1 by 1
	R1by1,
	/// 5 by 4
	R5by4,
	/// 4 by 3
	R4by3,
	/// 3 by 2
	R3by2,
	/// 16 by 9
	R16by9,
	/// 2 by 1
	R2by1,
	/// 3 by 4
	R3by4,
	/// 9 by 16
	R9by16,
	/// 1 by 2
	R1by2,
}

impl AspectRatio {
	/// Returns the ratio class.
	pub fn class(self) -> &'static str {
		match self {
			Self::Square => "is-square",
			Self::R1by1 => "is-1by1",
			Self::R5by4 => "is-5by4",
			Self::R4by3 => "is-4by3",
			Self::R3by2 => "is-3by2",
			Self::R16by9 => "is-16by9",
			Self::R2by1 => "is-2by1",
			Self::R3by4 => "is-3by4",
			Self::R9by16 => "is-9by16",
			Self::R1by2 => "is-1by2",
		}
	}
}

/// A `<figure class="image">` container with its inner `<img>`.
#[derive(Debug, Clone, Default)]
pub struct Image {
	/// Optional `id` attribute on the figure.
	pub id: Option<String>,
	/// `src` of the inner `<img>`.
	pub src: String,
	/// `alt` of the inner `<img>`.
	pub alt: Option<String>,
	/// Fixed square dimension class.
	pub dimension: Option<Dimension>,
	/// Responsive ratio class.
	pub ratio: Option<AspectRatio>,
	/// Rounds the inner image (`is-rounded` on the `<img>`).
	pub rounded: bool,
	/// Custom classes on the figure.
	pub classes: Vec<String>,
	/// Passthrough attributes on the figure.
	pub attrs: Vec<(String, String)>,
}

impl Image {
	/// Creates an image from a source URL.
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			..Self::default()
		}
	}

	/// Sets the `alt` text.
	pub fn alt(mut self, alt: impl Into<String>) -> Self {
		self.alt = Some(alt.into());
		self
	}

	/// Sets a fixed square dimension.
	pub fn dimension(mut self, dimension: Dimension) -> Self {
		self.dimension = Some(dimension);
		self
	}

	/// Sets a responsive aspect ratio.
	pub fn ratio(mut self, ratio: AspectRatio) -> Self {
		self.ratio = Some(ratio);
		self
	}

	/// Rounds the inner image.
	pub fn rounded(mut self) -> Self {
		self.rounded = true;
		self
	}
}

impl Component for Image {
	fn name(&self) -> &'static str {
		"Image"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("image")
			.with_opt(self.dimension.map(Dimension::class))
			.with_opt(self.ratio.map(AspectRatio::class))
			.extend(self.classes.iter().cloned());

		let img = Element::new("img")
			.attr("src", self.src.clone())
			.attr_opt("alt", self.alt.clone());
		let img = if self.rounded {
			img.attr("class", "is-rounded")
		} else {
			img
		};

		let el = Element::new("figure").attr_opt("id", self.id.clone());
		passthrough(classes.apply(el), &self.attrs)
			.child(img)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_dimension_image() {
		let html = Image::new("/avatar.png")
			.alt("avatar")
			.dimension(Dimension::D64)
			.render_to_string();
		assert_eq!(
			html,
			"<figure class=\"image is-64x64\">\
			 <img src=\"/avatar.png\" alt=\"avatar\" /></figure>"
		);
	}

	#[test]
	fn test_ratio_image_with_rounded_img() {
		let html = Image::new("/photo.jpg")
			.ratio(AspectRatio::R4by3)
			.rounded()
			.render_to_string();
		assert_eq!(
			html,
			"<figure class=\"image is-4by3\">\
			 <img src=\"/photo.jpg\" class=\"is-rounded\" /></figure>"
		);
	}
}
