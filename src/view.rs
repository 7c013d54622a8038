//! The search-and-display view.
//!
//! [`SearchView`] owns everything the user sees: the search text, the
//! Pokémon that was found, and its evolutionary line. It never talks to the
//! network itself. Instead, operations that need data return a [`Command`];
//! whoever drives the view runs the command against a [`Backend`] (on this
//! thread or another) and feeds the resulting [`Outcome`] back through
//! [`SearchView::apply()`].
//!
//! The evolution request for a search is only ever produced by applying a
//! successful Pokémon outcome, so it can never overtake the primary request.
//!
//! Every search is stamped with a fresh [`Ticket`]. Outcomes carrying an older
//! ticket are dropped on arrival, so when the user searches again before a
//! previous search finishes, the newest search always wins regardless of the
//! order responses come back in.

use std::fmt;

use crate::api;
use crate::api::Backend;
use crate::model::Evolution;
use crate::model::EvolutionLine;
use crate::model::Pokemon;

/// The message shown to the user when a search comes up empty.
///
/// Not-found and network failures are deliberately indistinguishable.
pub const NOT_FOUND_MESSAGE: &str = "Pokémon no encontrado";

/// The message logged when an evolutionary line cannot be fetched.
pub const EVOLUTION_ERROR_MESSAGE: &str = "Error al obtener evolución";

/// Identifies the search a [`Command`] or [`Outcome`] belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Where a [`SearchView`] is in its search flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
  /// Nothing has been searched for yet.
  Idle,
  /// A Pokémon request is in flight.
  Searching,
  /// The last Pokémon request failed.
  NotFound,
  /// The Pokémon was found and its evolutionary line is being requested.
  EvolutionLoading,
  /// The Pokémon and its evolutionary line were both found.
  EvolutionFound,
  /// The Pokémon was found, but its evolutionary line could not be fetched.
  EvolutionFailed,
}

impl Phase {
  /// Returns whether a request is in flight.
  pub fn is_busy(self) -> bool {
    matches!(self, Self::Searching | Self::EvolutionLoading)
  }

  /// Returns whether the last search found its Pokémon.
  pub fn is_found(self) -> bool {
    matches!(
      self,
      Self::EvolutionLoading | Self::EvolutionFound | Self::EvolutionFailed
    )
  }
}

/// A user-facing notification that must be acknowledged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
  message: &'static str,
}

impl Alert {
  /// Returns the text to show the user.
  pub fn message(&self) -> &str {
    self.message
  }
}

impl fmt::Display for Alert {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.message)
  }
}

/// A request the view needs answered.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
  /// Resolve `name` into a Pokémon record.
  FetchPokemon { ticket: Ticket, name: String },
  /// Resolve the evolutionary line of `name`.
  FetchEvolution { ticket: Ticket, name: String },
}

impl Command {
  /// Returns the search this command belongs to.
  pub fn ticket(&self) -> Ticket {
    match self {
      Self::FetchPokemon { ticket, .. }
      | Self::FetchEvolution { ticket, .. } => *ticket,
    }
  }

  /// Returns the Pokémon name this command asks about.
  pub fn name(&self) -> &str {
    match self {
      Self::FetchPokemon { name, .. } | Self::FetchEvolution { name, .. } => {
        name
      }
    }
  }

  /// Performs this command, blocking until `backend` answers.
  pub fn run(self, backend: &dyn Backend) -> Outcome {
    match self {
      Self::FetchPokemon { ticket, name } => {
        let result = backend.pokemon(&name);
        Outcome::Pokemon {
          ticket,
          name,
          result,
        }
      }
      Self::FetchEvolution { ticket, name } => Outcome::Evolution {
        ticket,
        result: backend.evolution(&name),
      },
    }
  }
}

/// The answer to a [`Command`].
#[allow(missing_docs)]
#[derive(Debug)]
pub enum Outcome {
  /// The answer to [`Command::FetchPokemon`].
  Pokemon {
    ticket: Ticket,
    name: String,
    result: Result<Pokemon, api::Error>,
  },
  /// The answer to [`Command::FetchEvolution`].
  Evolution {
    ticket: Ticket,
    result: Result<EvolutionLine, api::Error>,
  },
}

impl Outcome {
  /// Returns the search this outcome belongs to.
  pub fn ticket(&self) -> Ticket {
    match self {
      Self::Pokemon { ticket, .. } | Self::Evolution { ticket, .. } => *ticket,
    }
  }
}

/// State for the search-and-display view.
#[derive(Clone, Debug)]
pub struct SearchView {
  query: String,
  pokemon: Option<Pokemon>,
  evolution: EvolutionLine,
  phase: Phase,

  alert: Option<Alert>,
  alerts_raised: u64,

  ticket: Ticket,
}

impl SearchView {
  /// Creates an empty view.
  pub fn new() -> Self {
    Self {
      query: String::new(),
      pokemon: None,
      evolution: EvolutionLine::default(),
      phase: Phase::Idle,
      alert: None,
      alerts_raised: 0,
      ticket: Ticket::default(),
    }
  }

  /// Returns the search text, exactly as typed.
  pub fn query(&self) -> &str {
    &self.query
  }

  /// Replaces the search text.
  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
  }

  /// Appends a character to the search text.
  pub fn push_char(&mut self, c: char) {
    self.query.push(c);
  }

  /// Removes the last character of the search text, if any.
  pub fn pop_char(&mut self) {
    self.query.pop();
  }

  /// Empties the search text.
  pub fn clear_query(&mut self) {
    self.query.clear();
  }

  /// Returns the Pokémon currently on display.
  pub fn pokemon(&self) -> Option<&Pokemon> {
    self.pokemon.as_ref()
  }

  /// Returns the evolutionary line currently on display; may be empty.
  pub fn evolution(&self) -> &EvolutionLine {
    &self.evolution
  }

  /// Returns where the view is in its search flow.
  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// Returns the alert awaiting acknowledgement, if any.
  pub fn alert(&self) -> Option<&Alert> {
    self.alert.as_ref()
  }

  /// Returns how many alerts this view has ever raised.
  pub fn alert_count(&self) -> u64 {
    self.alerts_raised
  }

  /// Acknowledges the pending alert.
  pub fn dismiss_alert(&mut self) -> Option<Alert> {
    self.alert.take()
  }

  /// Searches for whatever is in the search box.
  ///
  /// Surrounding whitespace is ignored; if nothing is left, this does
  /// nothing.
  pub fn submit_search(&mut self) -> Option<Command> {
    let name = self.query.trim();
    if name.is_empty() {
      return None;
    }

    let name = name.to_string();
    Some(self.fetch_pokemon_by_name(&name))
  }

  /// Starts a new search for `name`, superseding any search in flight.
  ///
  /// The record on display is kept until the new search resolves.
  pub fn fetch_pokemon_by_name(&mut self, name: &str) -> Command {
    self.ticket = Ticket(self.ticket.0 + 1);
    self.phase = Phase::Searching;
    tracing::info!(name, ticket = self.ticket.0, "searching");

    Command::FetchPokemon {
      ticket: self.ticket,
      name: name.to_string(),
    }
  }

  /// Navigates to a member of the evolutionary line.
  ///
  /// This is exactly a new search for `entry`'s name, with the search box
  /// updated to match.
  pub fn select_evolution(&mut self, entry: &Evolution) -> Command {
    self.query = entry.name.clone();
    self.fetch_pokemon_by_name(&entry.name)
  }

  /// Navigates to the `index`th member of the current evolutionary line.
  pub fn select_evolution_at(&mut self, index: usize) -> Option<Command> {
    let entry = self.evolution.get(index)?.clone();
    Some(self.select_evolution(&entry))
  }

  /// Folds the answer to a previously issued [`Command`] into the view,
  /// returning the follow-up command, if there is one.
  pub fn apply(&mut self, outcome: Outcome) -> Option<Command> {
    if outcome.ticket() != self.ticket {
      tracing::debug!(
        stale = outcome.ticket().0,
        current = self.ticket.0,
        "dropping outcome of superseded search"
      );
      return None;
    }

    match outcome {
      Outcome::Pokemon {
        ticket,
        name,
        result: Ok(pokemon),
      } => {
        tracing::debug!(name = %name, id = pokemon.id, "found");
        self.pokemon = Some(pokemon);
        self.evolution = EvolutionLine::default();
        self.phase = Phase::EvolutionLoading;
        Some(Command::FetchEvolution { ticket, name })
      }
      Outcome::Pokemon {
        name,
        result: Err(e),
        ..
      } => {
        tracing::info!(name = %name, error = %e, "search failed");
        self.alert = Some(Alert {
          message: NOT_FOUND_MESSAGE,
        });
        self.alerts_raised += 1;
        self.pokemon = None;
        self.evolution = EvolutionLine::default();
        self.phase = Phase::NotFound;
        None
      }
      Outcome::Evolution { result: Ok(line), .. } => {
        self.evolution = line;
        self.phase = Phase::EvolutionFound;
        None
      }
      Outcome::Evolution { result: Err(e), .. } => {
        tracing::warn!(error = %e, "{}", EVOLUTION_ERROR_MESSAGE);
        self.evolution = EvolutionLine::default();
        self.phase = Phase::EvolutionFailed;
        None
      }
    }
  }
}

impl Default for SearchView {
  fn default() -> Self {
    Self::new()
  }
}

/// Drives a [`SearchView`] synchronously, running every command it issues to
/// completion before returning.
pub struct Session<B> {
  view: SearchView,
  backend: B,
}

impl<B: Backend> Session<B> {
  /// Creates a session with an empty view.
  pub fn new(backend: B) -> Self {
    Self {
      view: SearchView::new(),
      backend,
    }
  }

  /// Returns the view being driven.
  pub fn view(&self) -> &SearchView {
    &self.view
  }

  /// Returns the view being driven, mutably.
  pub fn view_mut(&mut self) -> &mut SearchView {
    &mut self.view
  }

  /// Consumes the session, returning its view.
  pub fn into_view(self) -> SearchView {
    self.view
  }

  /// Runs `command` and every follow-up it leads to.
  pub fn run(&mut self, command: Option<Command>) {
    let mut next = command;
    while let Some(command) = next {
      let outcome = command.run(&self.backend);
      next = self.view.apply(outcome);
    }
  }

  /// Types `query` into the search box and submits it.
  pub fn search(&mut self, query: &str) {
    self.view.set_query(query);
    let command = self.view.submit_search();
    self.run(command);
  }

  /// Selects the `index`th member of the current evolutionary line.
  pub fn select_evolution_at(&mut self, index: usize) {
    let command = self.view.select_evolution_at(index);
    self.run(command);
  }
}
