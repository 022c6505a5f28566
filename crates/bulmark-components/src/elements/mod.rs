//! Bulma elements: the small single-purpose building blocks.

mod button;
mod content;
mod delete;
mod icon;
mod image;
mod notification;
mod progress;
mod table;
mod tag;
mod title;

pub use button::{Button, ButtonType, Buttons};
pub use content::{Block, Box, Content};
pub use delete::Delete;
pub use icon::{Icon, IconText};
pub use image::{AspectRatio, Dimension, Image};
pub use notification::Notification;
pub use progress::Progress;
pub use table::{Table, TableCell, TableContainer, TableRow};
pub use tag::{Tag, Tags};
pub use title::{Subtitle, Title};
