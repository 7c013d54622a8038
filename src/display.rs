//! What a [`SearchView`] shows, independent of how it is drawn.
//!
//! Front-ends render these structures instead of poking at the model
//! directly, so that every front-end formats ids, names, units and types the
//! same way.

use std::fmt::Write as _;

use crate::api::Blob;
use crate::model::Evolution;
use crate::model::Pokemon;
use crate::view::SearchView;

/// Heading above the search box.
pub const TITLE: &str = "Buscar Pokémon";
/// Hint shown in an empty search box.
pub const PLACEHOLDER: &str = "Ej: charizard";
/// Label for the type list.
pub const TYPE_LABEL: &str = "Tipo";
/// Label for the height.
pub const HEIGHT_LABEL: &str = "Altura";
/// Label for the weight.
pub const WEIGHT_LABEL: &str = "Peso";
/// Label for the description.
pub const DESCRIPTION_LABEL: &str = "Descripción";
/// Heading above the stats chart.
pub const STATS_HEADING: &str = "Estadísticas base";
/// Heading above the evolutionary line.
pub const EVOLUTION_HEADING: &str = "Línea evolutiva";

/// The card describing the Pokémon on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsCard {
  /// `#{id} - {NAME}`.
  pub title: String,
  /// The Pokémon's API name, for alt text.
  pub name: String,
  /// The Pokémon's picture.
  pub sprite: Blob,
  /// Translated type names, comma separated.
  pub types: String,
  /// Height in metres, e.g. `1.7 m`.
  pub height: String,
  /// Weight in kilograms, e.g. `90.5 kg`.
  pub weight: String,
  /// Flavor text, verbatim.
  pub description: String,
}

impl DetailsCard {
  /// Lays out the card for `pokemon`.
  pub fn new(pokemon: &Pokemon) -> Self {
    Self {
      title: format!("#{} - {}", pokemon.id, pokemon.name.to_uppercase()),
      name: pokemon.name.clone(),
      sprite: pokemon.sprite.clone(),
      types: pokemon
        .types
        .iter()
        .map(|slot| slot.display_name())
        .collect::<Vec<_>>()
        .join(", "),
      height: pokemon.height.to_string(),
      weight: pokemon.weight.to_string(),
      description: pokemon.description.clone(),
    }
  }
}

/// One bar of the base stats chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
  /// The stat's name, uppercased.
  pub label: String,
  /// The base stat value. The chart's axis always starts at zero.
  pub value: u64,
}

/// One member of the evolutionary line, as a selectable thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
  /// `#{id} - {Name}`.
  pub label: String,
  /// The API name to search for when this thumbnail is selected.
  pub name: String,
  /// The member's picture.
  pub sprite: Blob,
}

impl Thumbnail {
  /// Lays out the thumbnail for `entry`.
  pub fn new(entry: &Evolution) -> Self {
    Self {
      label: format!("#{} - {}", entry.id, capitalize(&entry.name)),
      name: entry.name.clone(),
      sprite: entry.sprite.clone(),
    }
  }
}

/// The two-pane row holding the stats chart and the evolutionary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsPanel {
  /// One bar per base stat, in backend order.
  pub bars: Vec<Bar>,
  /// One thumbnail per member of the line, in series order.
  pub thumbnails: Vec<Thumbnail>,
}

impl StatsPanel {
  /// Returns the tallest bar's value, or zero for an empty chart.
  pub fn max_value(&self) -> u64 {
    self.bars.iter().map(|b| b.value).max().unwrap_or(0)
  }

  /// Returns how long `bar` is when the tallest bar is `width` long.
  ///
  /// Lengths are proportional to the value itself, not to its distance from
  /// the smallest bar.
  pub fn scale(&self, bar: &Bar, width: usize) -> usize {
    let max = self.max_value().max(1);
    (bar.value as usize * width) / max as usize
  }
}

/// Returns the details card, if there is a Pokémon on display.
pub fn details_card(view: &SearchView) -> Option<DetailsCard> {
  view.pokemon().map(DetailsCard::new)
}

/// Returns the stats/evolution row.
///
/// The row only appears when the Pokémon on display has stats *and* its
/// evolutionary line is known; a failed evolution request hides it.
pub fn stats_panel(view: &SearchView) -> Option<StatsPanel> {
  let pokemon = view.pokemon()?;
  if pokemon.stats.is_empty() || view.evolution().is_empty() {
    return None;
  }

  Some(StatsPanel {
    bars: pokemon
      .stats
      .iter()
      .map(|s| Bar {
        label: s.stat.name().to_uppercase(),
        value: s.base_stat as u64,
      })
      .collect(),
    thumbnails: view.evolution().iter().map(Thumbnail::new).collect(),
  })
}

/// Uppercases the first character of `s`, leaving the rest alone.
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Renders the view as plain text, for non-interactive output.
///
/// `bar_width` is the length of the longest stat bar, in characters.
pub fn to_text(view: &SearchView, bar_width: usize) -> String {
  let mut out = String::new();

  let card = match details_card(view) {
    Some(card) => card,
    None => return out,
  };

  let _ = writeln!(out, "{}", card.title);
  let _ = writeln!(out, "{}: {}", TYPE_LABEL, card.types);
  let _ = writeln!(out, "{}: {}", HEIGHT_LABEL, card.height);
  let _ = writeln!(out, "{}: {}", WEIGHT_LABEL, card.weight);
  let _ = writeln!(out, "{}: {}", DESCRIPTION_LABEL, card.description);

  let panel = match stats_panel(view) {
    Some(panel) => panel,
    None => return out,
  };

  let _ = writeln!(out);
  let _ = writeln!(out, "{}", STATS_HEADING);
  let label_width = panel
    .bars
    .iter()
    .map(|b| b.label.chars().count())
    .max()
    .unwrap_or(0);
  for bar in &panel.bars {
    let len = panel.scale(bar, bar_width);
    let _ = writeln!(
      out,
      "{:>width$} {:>3} {}",
      bar.label,
      bar.value,
      "█".repeat(len),
      width = label_width,
    );
  }

  let _ = writeln!(out);
  let _ = writeln!(out, "{}", EVOLUTION_HEADING);
  for thumbnail in &panel.thumbnails {
    let _ = writeln!(out, "{}", thumbnail.label);
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::view::tests::charmander_line;
  use crate::view::tests::pokemon;
  use crate::view::Session;

  #[test]
  fn card_title_uses_id_and_uppercased_name() {
    let card = DetailsCard::new(&pokemon(6, "charizard", &["fire"]));
    assert_eq!(card.title, "#6 - CHARIZARD");
  }

  #[test]
  fn card_translates_and_joins_types() {
    let card = DetailsCard::new(&pokemon(6, "charizard", &["fire", "shadow"]));
    assert_eq!(card.types, "Fuego, shadow");

    let card = DetailsCard::new(&pokemon(132, "ditto", &[]));
    assert_eq!(card.types, "");
  }

  #[test]
  fn card_converts_units() {
    let mut p = pokemon(6, "charizard", &["fire"]);
    p.height = crate::model::Decimetres::new(17);
    p.weight = crate::model::Hectograms::new(905);

    let card = DetailsCard::new(&p);
    assert_eq!(card.height, "1.7 m");
    assert_eq!(card.weight, "90.5 kg");
  }

  #[test]
  fn nothing_to_show_before_a_search() {
    let view = SearchView::new();
    assert!(details_card(&view).is_none());
    assert!(stats_panel(&view).is_none());
    assert_eq!(to_text(&view, 20), "");
  }

  #[test]
  fn panel_lists_stats_and_line() {
    let mut session = Session::new(charmander_line());
    session.search("charmander");

    let panel = stats_panel(session.view()).unwrap();
    assert_eq!(
      panel.bars,
      [
        Bar {
          label: "HP".into(),
          value: 43
        },
        Bar {
          label: "ATTACK".into(),
          value: 56
        },
      ]
    );
    let labels = panel
      .thumbnails
      .iter()
      .map(|t| t.label.as_str())
      .collect::<Vec<_>>();
    assert_eq!(
      labels,
      ["#4 - Charmander", "#5 - Charmeleon", "#6 - Charizard"]
    );
    assert_eq!(panel.max_value(), 56);
    assert_eq!(panel.scale(&panel.bars[1], 20), 20);
    assert_eq!(panel.scale(&panel.bars[0], 20), 15);
  }

  #[test]
  fn failed_line_hides_panel_but_not_card() {
    let mut backend = charmander_line();
    backend.evolution.clear();

    let mut session = Session::new(backend);
    session.search("charmander");

    assert!(details_card(session.view()).is_some());
    assert!(stats_panel(session.view()).is_none());
  }

  #[test]
  fn failed_search_shows_nothing() {
    let mut session = Session::new(charmander_line());
    session.search("charmander");
    session.search("agumon");

    assert!(details_card(session.view()).is_none());
    assert!(stats_panel(session.view()).is_none());
  }

  #[test]
  fn statless_pokemon_has_no_panel() {
    let mut backend = charmander_line();
    backend
      .pokemon
      .get_mut("charmander")
      .unwrap()
      .stats
      .clear();

    let mut session = Session::new(backend);
    session.search("charmander");
    assert!(stats_panel(session.view()).is_none());
  }

  #[test]
  fn capitalize_only_touches_first_char() {
    assert_eq!(capitalize("charmander"), "Charmander");
    assert_eq!(capitalize("mr-mime"), "Mr-mime");
    assert_eq!(capitalize("élan"), "Élan");
    assert_eq!(capitalize(""), "");
  }

  #[test]
  fn text_output_scales_bars_from_zero() {
    let mut session = Session::new(charmander_line());
    session.search("charizard");

    let text = to_text(session.view(), 10);
    let expected = "\
#6 - CHARIZARD
Tipo: Fuego, Volador
Altura: 1.2 m
Peso: 68.5 kg
Descripción: charizard description

Estadísticas base
    HP  45 ███████
ATTACK  58 ██████████

Línea evolutiva
#4 - Charmander
#5 - Charmeleon
#6 - Charizard
";
    assert_eq!(text, expected);
  }
}
