//! Form controls: field, control, input, textarea, select, checkbox,
//! radio and file upload.

mod checkbox;
mod field;
mod file;
mod input;
mod select;
mod textarea;

pub use checkbox::{Checkbox, Radio};
pub use field::{Control, Field};
pub use file::File;
pub use input::{Input, InputType};
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
