//! Field and control containers.

use bulmark_html::{Element, IntoNode, Node};

use crate::classes::ClassList;
use crate::component::Component;
use crate::elements::Icon;
use crate::modifiers::{Alignment, Color, Size};
use crate::util::passthrough;

/// A `<div class="field">` grouping a label, controls and help text.
#[derive(Debug, Clone, Default)]
pub struct Field {
	/// Optional `<label class="label">` above the controls.
	pub label: Option<String>,
	/// Size modifier on the label.
	pub label_size: Option<Size>,
	/// Optional `<p class="help">` below the controls.
	pub help: Option<String>,
	/// Color modifier on the help text.
	pub help_color: Option<Color>,
	/// `is-grouped`: lays controls out side by side.
	pub grouped: bool,
	/// Alignment for a grouped field.
	pub grouped_alignment: Alignment,
	/// `is-grouped-multiline`
	pub grouped_multiline: bool,
	/// `has-addons`: attaches controls together.
	pub addons: bool,
	/// Alignment for an addons field.
	pub addons_alignment: Alignment,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The field's controls.
	pub body: Vec<Node>,
}

impl Field {
	/// Creates a field with the given controls.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Sets the label text.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the help text.
	pub fn help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	/// Sets the help text with a color.
	pub fn help_colored(mut self, help: impl Into<String>, color: Color) -> Self {
		self.help = Some(help.into());
		self.help_color = Some(color);
		self
	}

	/// Lays the controls out side by side.
	pub fn grouped(mut self) -> Self {
		self.grouped = true;
		self
	}

	/// Attaches the controls together.
	pub fn addons(mut self) -> Self {
		self.addons = true;
		self
	}

	/// Appends a control.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.body.push(child.into_node());
		self
	}
}

fn grouped_alignment_class(alignment: Alignment) -> &'static str {
	match alignment {
		Alignment::Left => "",
		Alignment::Centered => "is-grouped-centered",
		Alignment::Right => "is-grouped-right",
	}
}

fn addons_alignment_class(alignment: Alignment) -> &'static str {
	match alignment {
		Alignment::Left => "",
		Alignment::Centered => "has-addons-centered",
		Alignment::Right => "has-addons-right",
	}
}

impl Component for Field {
	fn name(&self) -> &'static str {
		"Field"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("field")
			.with_if(self.grouped, "is-grouped")
			.with_if(self.grouped, grouped_alignment_class(self.grouped_alignment))
			.with_if(self.grouped_multiline, "is-grouped-multiline")
			.with_if(self.addons, "has-addons")
			.with_if(self.addons, addons_alignment_class(self.addons_alignment))
			.extend(self.classes.iter().cloned());

		let mut el = passthrough(classes.apply(Element::new("div")), &self.attrs);

		if let Some(label) = &self.label {
			let label_classes =
				ClassList::new("label").with_opt(self.label_size.map(Size::class));
			el = el.child(label_classes.apply(Element::new("label")).child(label.clone()));
		}

		el = el.children(self.body.iter().cloned());

		if let Some(help) = &self.help {
			let help_classes =
				ClassList::new("help").with_opt(self.help_color.map(Color::class));
			el = el.child(help_classes.apply(Element::new("p")).child(help.clone()));
		}

		el.into_node()
	}
}

/// A `<div class="control">` wrapper around a single control.
#[derive(Debug, Clone, Default)]
pub struct Control {
	/// `is-expanded`: takes up the remaining space.
	pub expanded: bool,
	/// `is-loading`: shows a spinner instead of the right icon.
	pub loading: bool,
	/// Icon rendered on the left of the control.
	pub icon_left: Option<Icon>,
	/// Icon rendered on the right of the control.
	pub icon_right: Option<Icon>,
	/// Custom classes.
	pub classes: Vec<String>,
	/// Passthrough attributes.
	pub attrs: Vec<(String, String)>,
	/// The wrapped control.
	pub body: Vec<Node>,
}

impl Control {
	/// Wraps the given control.
	pub fn new(body: impl IntoNode) -> Self {
		Self {
			body: vec![body.into_node()],
			..Self::default()
		}
	}

	/// Takes up the remaining space.
	pub fn expanded(mut self) -> Self {
		self.expanded = true;
		self
	}

	/// Shows the loading spinner.
	pub fn loading(mut self) -> Self {
		self.loading = true;
		self
	}

	/// Adds an icon on the left.
	pub fn icon_left(mut self, icon: Icon) -> Self {
		self.icon_left = Some(icon);
		self
	}

	/// Adds an icon on the right.
	pub fn icon_right(mut self, icon: Icon) -> Self {
		self.icon_right = Some(icon);
		self
	}
}

fn side_icon(icon: &Icon, side: &'static str) -> Node {
	let mut icon = icon.clone();
	icon.classes.push(side.to_string());
	icon.render()
}

impl Component for Control {
	fn name(&self) -> &'static str {
		"Control"
	}

	fn render(&self) -> Node {
		let classes = ClassList::new("control")
			.with_if(self.icon_left.is_some(), "has-icons-left")
			.with_if(self.icon_right.is_some(), "has-icons-right")
			.with_if(self.expanded, "is-expanded")
			.with_if(self.loading, "is-loading")
			.extend(self.classes.iter().cloned());

		let mut el = passthrough(classes.apply(Element::new("div")), &self.attrs)
			.children(self.body.iter().cloned());
		if let Some(icon) = &self.icon_left {
			el = el.child(side_icon(icon, "is-left"));
		}
		if let Some(icon) = &self.icon_right {
			el = el.child(side_icon(icon, "is-right"));
		}
		el.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::Input;
	use crate::modifiers::Size as ModSize;

	#[test]
	fn test_field_with_label_and_help() {
		let field = Field::new(Control::new(Input::new().render()).render())
			.label("Name")
			.help_colored("This field is required", Color::Danger);
		assert_eq!(
			field.render_to_string(),
			"<div class=\"field\">\
			 <label class=\"label\">Name</label>\
			 <div class=\"control\"><input type=\"text\" class=\"input\" /></div>\
			 <p class=\"help is-danger\">This field is required</p></div>"
		);
	}

	#[test]
	fn test_grouped_field_alignment() {
		let field = Field {
			grouped: true,
			grouped_alignment: Alignment::Right,
			..Field::default()
		};
		assert_eq!(
			field.render_to_string(),
			"<div class=\"field is-grouped is-grouped-right\"></div>"
		);
	}

	#[test]
	fn test_addons_field() {
		let html = Field::default().addons().render_to_string();
		assert_eq!(html, "<div class=\"field has-addons\"></div>");
	}

	#[test]
	fn test_control_with_icons() {
		let control = Control::new(Input::new().render())
			.icon_left(Icon::new("fas fa-user").size(ModSize::Small));
		assert_eq!(
			control.render_to_string(),
			"<div class=\"control has-icons-left\">\
			 <input type=\"text\" class=\"input\" />\
			 <span class=\"icon is-small is-left\"><i class=\"fas fa-user\"></i></span></div>"
		);
	}

	#[test]
	fn test_expanded_loading_control() {
		let html = Control::default().expanded().loading().render_to_string();
		assert_eq!(
			html,
			"<div class=\"control is-expanded is-loading\"></div>"
		);
	}
}
