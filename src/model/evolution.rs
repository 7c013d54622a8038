//! Evolution, the series of forms a Pokémon passes through.

use std::ops::Deref;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Blob;
use crate::api::Endpoint;

/// A single member of an evolutionary line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
  /// This Pokémon's National Dex number.
  pub id: u32,
  /// This Pokémon's API name.
  pub name: String,
  /// A small picture of this Pokémon.
  #[serde(default)]
  pub sprite: Blob,
}

/// An evolutionary line, in series order (e.g. Charmander, Charmeleon,
/// Charizard).
///
/// On the wire this is a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvolutionLine(Vec<Evolution>);

impl EvolutionLine {
  /// Creates a line out of its members, in series order.
  pub fn new(members: Vec<Evolution>) -> Self {
    Self(members)
  }

  /// Consumes the line, returning its members.
  pub fn into_inner(self) -> Vec<Evolution> {
    self.0
  }
}

impl Deref for EvolutionLine {
  type Target = [Evolution];
  fn deref(&self) -> &[Evolution] {
    &self.0
  }
}

impl From<Vec<Evolution>> for EvolutionLine {
  fn from(members: Vec<Evolution>) -> Self {
    Self(members)
  }
}

impl Endpoint for EvolutionLine {
  const NAME: &'static str = "evolution";
}
