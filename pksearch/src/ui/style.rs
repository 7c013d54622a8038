//! Colors and styles shared by every part of the UI.

use pkinfo::model::TypeName;

use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;

#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
  pub focused: Style,
  pub unfocused: Style,
  pub selected: Style,
  pub placeholder: Style,
  pub label: Style,
  pub alert: Style,
}

impl Default for StyleSheet {
  fn default() -> Self {
    StyleSheet {
      focused: Style::default().fg(Color::White),
      unfocused: Style::default().fg(Color::Gray),
      selected: Style::default().add_modifier(Modifier::BOLD),
      placeholder: Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC),
      label: Style::default().add_modifier(Modifier::BOLD),
      alert: Style::default().fg(Color::LightRed),
    }
  }
}

/// Returns the color a type's name is drawn in. Types missing from the table
/// are drawn in the default color.
pub fn type_color(api_name: &str) -> Color {
  // Colors pulled from Bulbapedia.
  match TypeName::from_api_name(api_name) {
    Some(TypeName::Normal) => Color::Rgb(0xa8, 0xa8, 0x78),
    Some(TypeName::Fighting) => Color::Rgb(0xc0, 0x30, 0x28),
    Some(TypeName::Flying) => Color::Rgb(0xa9, 0x90, 0xf0),
    Some(TypeName::Poison) => Color::Rgb(0xa0, 0x40, 0xa0),
    Some(TypeName::Ground) => Color::Rgb(0xe0, 0xc0, 0x68),
    Some(TypeName::Rock) => Color::Rgb(0xb8, 0xa0, 0x38),
    Some(TypeName::Bug) => Color::Rgb(0xa8, 0xb8, 0x20),
    Some(TypeName::Ghost) => Color::Rgb(0x70, 0x58, 0x98),
    Some(TypeName::Steel) => Color::Rgb(0xb8, 0xb8, 0xd0),
    Some(TypeName::Fire) => Color::Rgb(0xf0, 0x80, 0x30),
    Some(TypeName::Water) => Color::Rgb(0x68, 0x90, 0xf0),
    Some(TypeName::Grass) => Color::Rgb(0x78, 0xc8, 0x50),
    Some(TypeName::Electric) => Color::Rgb(0xf8, 0xd0, 0x30),
    Some(TypeName::Psychic) => Color::Rgb(0xf8, 0x58, 0x88),
    Some(TypeName::Ice) => Color::Rgb(0x98, 0xd8, 0xd8),
    Some(TypeName::Dragon) => Color::Rgb(0x70, 0x38, 0xf8),
    Some(TypeName::Dark) => Color::Rgb(0x70, 0x58, 0x48),
    Some(TypeName::Fairy) => Color::Rgb(0xee, 0x99, 0xac),
    None => Color::Reset,
  }
}

/// Returns the color a base stat's bar is drawn in.
pub fn stat_color(stat: &str) -> Color {
  match stat {
    "hp" => Color::Rgb(0xff, 0x59, 0x59),
    "attack" => Color::Rgb(0xf5, 0xac, 0x78),
    "defense" => Color::Rgb(0xfa, 0xe0, 0x78),
    "special-attack" => Color::Rgb(0x9d, 0xb7, 0xf5),
    "special-defense" => Color::Rgb(0xa7, 0xdb, 0x8d),
    "speed" => Color::Rgb(0xfa, 0x92, 0xb2),
    _ => Color::Gray,
  }
}
