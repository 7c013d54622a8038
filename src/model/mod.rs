//! Structs describing the backend's data model.

pub mod data;
pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod ty;

pub use data::Decimetres;
pub use data::Hectograms;
pub use evolution::Evolution;
pub use evolution::EvolutionLine;
pub use pokemon::BaseStat;
pub use pokemon::Pokemon;
pub use pokemon::TypeSlot;
pub use resource::NamedRef;
pub use ty::TypeName;
