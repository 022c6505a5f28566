//! Layout elements: container, hero, level, media object, section and
//! footer.

mod container;
mod hero;
mod level;
mod media;
mod section;

pub use container::{Container, ContainerWidth};
pub use hero::{Hero, HeroSize};
pub use level::Level;
pub use media::Media;
pub use section::{Footer, Section};
