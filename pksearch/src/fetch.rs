//! Background loading of backend data.
//!
//! The UI thread never touches the network. [`Fetcher`] runs each view
//! [`Command`] on its own thread and hands the [`Outcome`] back over a
//! channel; [`Sprites`] decodes pictures in the background and caches them by
//! URL.

use std::sync::Arc;
use std::thread;

use crossbeam::channel;
use crossbeam::channel::Receiver;
use crossbeam::channel::Sender;

use dashmap::DashMap;

use image::RgbaImage;

use pkinfo::api::Blob;
use pkinfo::view::Command;
use pkinfo::view::Outcome;
use pkinfo::Backend;

/// Runs view commands off the UI thread.
pub struct Fetcher {
  backend: Arc<dyn Backend>,
  sink: Sender<Outcome>,
  outcomes: Receiver<Outcome>,
}

impl Fetcher {
  pub fn new(backend: Arc<dyn Backend>) -> Self {
    let (sink, outcomes) = channel::unbounded();
    Self {
      backend,
      sink,
      outcomes,
    }
  }

  /// Starts running `command`. Its outcome will show up in
  /// [`Fetcher::try_recv()`] once the backend answers.
  pub fn dispatch(&self, command: Command) {
    tracing::debug!(?command, "dispatching");
    let backend = Arc::clone(&self.backend);
    let sink = self.sink.clone();
    thread::spawn(move || {
      let outcome = command.run(&*backend);
      // The receiver only goes away when the UI is shutting down.
      let _ = sink.send(outcome);
    });
  }

  /// Returns the next finished outcome, without blocking.
  pub fn try_recv(&self) -> Option<Outcome> {
    self.outcomes.try_recv().ok()
  }

  /// Exposes the outcome channel, for callers that want to block on it.
  #[cfg(test)]
  pub fn outcomes(&self) -> &Receiver<Outcome> {
    &self.outcomes
  }
}

/// A cache of decoded sprites, keyed by URL.
///
/// A `None` entry means the sprite is still loading, or failed to load; either
/// way it is never requested twice.
pub struct Sprites {
  backend: Arc<dyn Backend>,
  table: Arc<DashMap<String, Option<Arc<RgbaImage>>>>,
}

impl Sprites {
  pub fn new(backend: Arc<dyn Backend>) -> Self {
    Self {
      backend,
      table: Default::default(),
    }
  }

  /// Returns the decoded sprite behind `blob`, kicking off a download if this
  /// is the first time it was asked for.
  pub fn get(&self, blob: &Blob) -> Option<Arc<RgbaImage>> {
    if blob.is_empty() {
      return None;
    }

    // If an entry exists, that means we already spawned the task.
    if let Some(val) = self.table.get(blob.url()) {
      return val.value().clone();
    }

    let url = blob.url().to_string();
    self.table.insert(url.clone(), None);

    let backend = Arc::clone(&self.backend);
    let table = Arc::clone(&self.table);
    let blob = blob.clone();
    thread::spawn(move || {
      let bytes = match blob.load(&*backend) {
        Ok(bytes) => bytes,
        Err(e) => {
          tracing::warn!(url = %url, error = %e, "could not download sprite");
          return;
        }
      };

      match image::load_from_memory(&bytes) {
        Ok(image) => {
          table.insert(url, Some(Arc::new(image.into_rgba8())));
        }
        Err(e) => {
          tracing::warn!(url = %url, error = %e, "could not decode sprite");
        }
      }
    });

    None
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use pkinfo::api;
  use pkinfo::model::EvolutionLine;
  use pkinfo::model::Pokemon;
  use pkinfo::SearchView;

  use super::*;

  /// A backend that knows nothing and fails every request.
  struct Empty;

  impl Backend for Empty {
    fn pokemon(&self, name: &str) -> Result<Pokemon, api::Error> {
      Err(api::Error::Status {
        url: name.to_string(),
        status: 404,
      })
    }

    fn evolution(&self, name: &str) -> Result<EvolutionLine, api::Error> {
      Err(api::Error::Status {
        url: name.to_string(),
        status: 404,
      })
    }

    fn blob(&self, blob: &Blob) -> Result<Box<[u8]>, api::Error> {
      Ok(blob.url().as_bytes().to_vec().into_boxed_slice())
    }
  }

  #[test]
  fn outcomes_come_back_over_the_channel() {
    let fetcher = Fetcher::new(Arc::new(Empty));
    let mut view = SearchView::new();
    view.set_query("missingno");
    fetcher.dispatch(view.submit_search().unwrap());

    let outcome = fetcher
      .outcomes()
      .recv_timeout(Duration::from_secs(5))
      .unwrap();
    assert!(view.apply(outcome).is_none());
    assert_eq!(view.alert_count(), 1);
    assert!(fetcher.try_recv().is_none());
  }

  #[test]
  fn empty_sprites_are_never_requested() {
    let sprites = Sprites::new(Arc::new(Empty));
    assert!(sprites.get(&Blob::default()).is_none());
    assert!(sprites.table.is_empty());
  }

  #[test]
  fn undecodable_sprites_stay_blank() {
    let sprites = Sprites::new(Arc::new(Empty));
    let blob = Blob::new("not a png");
    assert!(sprites.get(&blob).is_none());
    assert!(sprites.table.contains_key("not a png"));

    // A second lookup must not spawn another download.
    assert!(sprites.get(&blob).is_none());
    assert_eq!(sprites.table.len(), 1);
  }
}
