//! References between backend objects.
//!
//! The backend nests the name of a related object inside a one-field object,
//! e.g. `{"type": {"name": "fire"}}`.

use serde::Deserialize;
use serde::Serialize;

/// A reference to another backend object, by its API name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
  /// The referenced object's API name, e.g. `"special-attack"`.
  pub name: String,
}

impl NamedRef {
  /// Creates a reference to the object called `name`.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  /// Returns the referenced object's name.
  pub fn name(&self) -> &str {
    &self.name
  }
}
