//! Bulma component catalogue for bulmark.
//!
//! Every component in this crate is a plain props struct: fill in the
//! fields (or chain the builder methods), call [`Component::render`], and
//! get back an HTML fragment carrying the right Bulma classes. Components
//! hold no state and have no lifecycle; a props value is rendered and
//! discarded.
//!
//! The crate is organized the way the Bulma documentation is:
//!
//! - [`elements`]: button, tag, notification, table, title, ...
//! - [`components`]: card, navbar, modal, tabs, pagination, ...
//! - [`form`]: field, control, input, select, checkbox, file
//! - [`grid`]: the 12-column flex grid and the CSS smart grid
//! - [`layout`]: container, hero, level, media, section, footer
//! - [`document`](mod@document): the HTML document shell
//!
//! The shared machinery lives in three small modules: [`ClassList`]
//! (ordered class composition), [`scale_class`] (validated numeric class
//! tokens with responsive suffixes), and the modifier enums
//! ([`Color`], [`Size`], [`Alignment`]).
//!
//! ## Example
//!
//! ```
//! use bulmark_components::elements::Tag;
//! use bulmark_components::{Color, Component, Size};
//!
//! let tag = Tag::new("v0.1.0")
//! 	.size(Size::Large)
//! 	.color(Color::Info)
//! 	.light();
//!
//! assert_eq!(
//! 	tag.render_to_string(),
//! 	"<span class=\"tag is-large is-info is-light\">v0.1.0</span>"
//! );
//! ```

mod classes;
mod component;
mod modifiers;
mod responsive;
mod util;

pub mod components;
pub mod document;
pub mod elements;
pub mod form;
pub mod grid;
pub mod helpers;
pub mod layout;

pub use classes::ClassList;
pub use component::Component;
pub use modifiers::{Alignment, Color, Size};
pub use responsive::{Breakpoint, Responsive, scale_class};
