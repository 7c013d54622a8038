//! The full record the backend returns for a single Pokémon.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Blob;
use crate::api::Endpoint;
use crate::model::data::Decimetres;
use crate::model::data::Hectograms;
use crate::model::resource::NamedRef;
use crate::model::ty;

/// A Pokémon, as served by the `pokemon-info` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
  /// This Pokémon's National Dex number.
  pub id: u32,
  /// This Pokémon's API name.
  pub name: String,
  /// A small picture of this Pokémon.
  #[serde(default)]
  pub sprite: Blob,

  /// This Pokémon's types, in slot order.
  #[serde(default)]
  pub types: Vec<TypeSlot>,
  /// This Pokémon's base stats, in the order the backend lists them.
  #[serde(default)]
  pub stats: Vec<BaseStat>,

  /// How tall this Pokémon is.
  pub height: Decimetres,
  /// How heavy this Pokémon is.
  pub weight: Hectograms,

  /// Flavor text describing this Pokémon.
  #[serde(default)]
  pub description: String,
}

/// One of a Pokémon's types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
  /// The type occupying this slot.
  #[serde(rename = "type")]
  pub ty: NamedRef,
}

impl TypeSlot {
  /// Returns this type's name as it should be shown to users.
  pub fn display_name(&self) -> &str {
    ty::translate(self.ty.name())
  }
}

/// A base stat value for a Pokémon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
  /// The stat this value is for, e.g. `"attack"`.
  pub stat: NamedRef,
  /// The stat's base value.
  pub base_stat: u32,
}

impl Endpoint for Pokemon {
  const NAME: &'static str = "pokemon-info";
}
