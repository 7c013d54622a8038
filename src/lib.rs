//! `pkinfo` is a client library for the Pokémon info backend, plus the
//! state machine behind a search-and-display Pokédex view.
//!
//! The backend exposes two JSON endpoints, one resolving a Pokémon by name and
//! one resolving that Pokémon's evolutionary line. [`Api`] talks to them;
//! [`view::SearchView`] decides when to call them and what to show.

#![deny(missing_docs, unused)]

pub mod api;
pub mod config;
pub mod display;
pub mod model;
pub mod view;

pub use api::Api;
pub use api::Backend;
pub use config::Config;
pub use view::SearchView;
