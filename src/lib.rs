//! # Bulmark
//!
//! Bulma-flavored HTML components for Rust: typed props in, markup out.
//!
//! Bulmark renders [Bulma](https://bulma.io) markup from plain Rust
//! structs. There is no runtime DOM, no state and no event handling;
//! every component is a pure value that serializes to an HTML fragment
//! with the right Bulma classes, in a stable, deterministic order.
//!
//! The workspace has two layers:
//!
//! - [`html`]: the node tree and serializer (escaping, attribute order,
//!   presence attributes, sink streaming)
//! - [`components`]: the component catalogue (elements, components,
//!   form controls, grids, layout, document shell) plus the shared class
//!   composition machinery
//!
//! ## Quick example
//!
//! ```
//! use bulmark::prelude::*;
//!
//! let button = Button::new("Save")
//! 	.color(Color::Primary)
//! 	.size(Size::Large);
//!
//! assert_eq!(
//! 	button.render_to_string(),
//! 	"<button class=\"button is-primary is-large\">Save</button>"
//! );
//! ```

pub use bulmark_components as components;
pub use bulmark_html as html;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
	pub use bulmark_components::components::{
		Breadcrumb, BreadcrumbItem, Card, Dropdown, DropdownItem, Menu, MenuItem, MenuSection,
		Message, Modal, ModalCard, Navbar, NavbarItem, Pagination, PaginationItem, Panel,
		PanelBlock, Tabs,
	};
	pub use bulmark_components::document::Document;
	pub use bulmark_components::elements::{
		Block, Box, Button, Buttons, Content, Delete, Icon, Image, Notification, Progress,
		Subtitle, Table, TableCell, TableRow, Tag, Tags, Title,
	};
	pub use bulmark_components::form::{
		Checkbox, Control, Field, File, Input, InputType, Radio, Select, SelectOption, Textarea,
	};
	pub use bulmark_components::grid::{Cell, Column, ColumnSize, Columns, FixedGrid, Grid};
	pub use bulmark_components::layout::{Container, Footer, Hero, Level, Media, Section};
	pub use bulmark_components::{
		Alignment, Breakpoint, ClassList, Color, Component, Responsive, Size, scale_class,
	};
	pub use bulmark_html::{Element, IntoNode, Node, RenderError};
}
