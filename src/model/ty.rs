//! Pokémon types, and the table used to translate their API names for
//! display.

use std::fmt;

macro_rules! type_names {
  ($(
    $(#[$meta:meta])*
    $variant:ident => $api:literal, $display:literal,
  )*) => {
    /// A well-known Pokémon type.
    ///
    /// The backend reports types by API name (e.g. `"fire"`); each variant
    /// knows that name and the Spanish name shown to users.
    #[allow(missing_docs)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum TypeName {
      $($(#[$meta])* $variant,)*
    }

    impl TypeName {
      /// Every known type, in type-chart order.
      pub const ALL: &'static [TypeName] = &[$(TypeName::$variant,)*];

      /// Looks up a type by its exact API name.
      pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
          $($api => Some(Self::$variant),)*
          _ => None,
        }
      }

      /// Returns this type's API name.
      pub fn api_name(self) -> &'static str {
        match self {
          $(Self::$variant => $api,)*
        }
      }

      /// Returns the name shown to users for this type.
      pub fn display_name(self) -> &'static str {
        match self {
          $(Self::$variant => $display,)*
        }
      }
    }
  };
}

type_names! {
  Normal => "normal", "Normal",
  Fire => "fire", "Fuego",
  Water => "water", "Agua",
  Grass => "grass", "Planta",
  Electric => "electric", "Eléctrico",
  Ice => "ice", "Hielo",
  Fighting => "fighting", "Lucha",
  Poison => "poison", "Veneno",
  Ground => "ground", "Tierra",
  Flying => "flying", "Volador",
  Psychic => "psychic", "Psíquico",
  Bug => "bug", "Bicho",
  Rock => "rock", "Roca",
  Ghost => "ghost", "Fantasma",
  Dark => "dark", "Siniestro",
  Dragon => "dragon", "Dragón",
  Steel => "steel", "Acero",
  Fairy => "fairy", "Hada",
}

impl fmt::Display for TypeName {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.display_name())
  }
}

/// Translates a type's API name for display.
///
/// Names missing from the table (such as `"shadow"`, or anything the backend
/// invents later) are returned verbatim.
pub fn translate(api_name: &str) -> &str {
  match TypeName::from_api_name(api_name) {
    Some(ty) => ty.display_name(),
    None => api_name,
  }
}
