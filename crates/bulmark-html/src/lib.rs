//! HTML node tree and serialization for bulmark.
//!
//! This crate is the rendering substrate of the component library. It knows
//! nothing about Bulma: it models HTML fragments as a tree of [`Node`]s and
//! serializes them with correct escaping and a stable attribute order.
//!
//! ## Example
//!
//! ```
//! use bulmark_html::{Element, IntoNode, Node};
//!
//! let fragment = Element::new("div")
//! 	.attr("class", "container")
//! 	.child("Hello, world!")
//! 	.into_node();
//!
//! assert_eq!(
//! 	fragment.render_to_string(),
//! 	"<div class=\"container\">Hello, world!</div>"
//! );
//! ```

mod error;
mod node;

pub use error::{RenderError, Result};
pub use node::{Element, IntoNode, Node};
