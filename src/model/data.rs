//! Units of measure the backend reports in.
//!
//! The backend (like the games) stores heights and weights as integers in
//! tenths of the display unit. These newtypes keep the raw value for the wire
//! and know how to present themselves to a user.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A length in decimetres.
///
/// Displays as metres with exactly one decimal place, e.g. `17` is `1.7 m`.
#[derive(
  Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
  Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Decimetres(u32);

impl Decimetres {
  /// Creates a new [`Decimetres`] with the given raw value.
  pub fn new(decimetres: u32) -> Self {
    Self(decimetres)
  }

  /// Returns the raw value, in decimetres.
  pub fn into_inner(self) -> u32 {
    self.0
  }

  /// Converts this length into metres.
  pub fn as_metres(self) -> f64 {
    self.0 as f64 / 10.0
  }
}

impl fmt::Display for Decimetres {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} m", Tenths(self.0))
  }
}

/// A mass in hectograms.
///
/// Displays as kilograms with exactly one decimal place, e.g. `905` is
/// `90.5 kg`.
#[derive(
  Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
  Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Hectograms(u32);

impl Hectograms {
  /// Creates a new [`Hectograms`] with the given raw value.
  pub fn new(hectograms: u32) -> Self {
    Self(hectograms)
  }

  /// Returns the raw value, in hectograms.
  pub fn into_inner(self) -> u32 {
    self.0
  }

  /// Converts this mass into kilograms.
  pub fn as_kilograms(self) -> f64 {
    self.0 as f64 / 10.0
  }
}

impl fmt::Display for Hectograms {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} kg", Tenths(self.0))
  }
}

/// Prints an integer count of tenths as a decimal with one fractional digit.
///
/// Integer arithmetic avoids float rounding surprises.
struct Tenths(u32);

impl fmt::Display for Tenths {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}.{}", self.0 / 10, self.0 % 10)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn height_divides_by_ten() {
    assert_eq!(Decimetres::new(17).to_string(), "1.7 m");
    assert_eq!(Decimetres::new(7).to_string(), "0.7 m");
    assert_eq!(Decimetres::new(20).to_string(), "2.0 m");
    assert_eq!(Decimetres::new(0).to_string(), "0.0 m");
  }

  #[test]
  fn weight_divides_by_ten() {
    assert_eq!(Hectograms::new(905).to_string(), "90.5 kg");
    assert_eq!(Hectograms::new(69).to_string(), "6.9 kg");
    assert_eq!(Hectograms::new(9999).to_string(), "999.9 kg");
  }

  #[test]
  fn raw_values_come_straight_off_the_wire() {
    let h: Decimetres = serde_json::from_str("14").unwrap();
    assert_eq!(h.into_inner(), 14);
    assert!((h.as_metres() - 1.4).abs() < f64::EPSILON);
  }
}
