//! A client for the Pokémon info backend.

use std::io;
use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::model::EvolutionLine;
use crate::model::Pokemon;

/// The origin the backend is served from, unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi-backend-jdom.onrender.com";

/// An API client.
///
/// This type is the entrypoint for downloading information from the backend.
/// Every call performs a fresh request; nothing is memoized.
pub struct Api {
  base_url: String,
  client: Client,
}

/// Options for constructing an [`Api`].
#[derive(Clone, Debug)]
pub struct Options {
  /// The base URL to point the client at.
  pub base_url: String,
  /// How long to wait for a whole request before giving up.
  pub timeout: Option<Duration>,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout: None,
    }
  }
}

/// An [`Api`] client error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("request to {url} failed with status {status}")]
  Status { url: String, status: u16 },

  #[error("cannot build a request URL from {url}: {reason}")]
  BadUrl { url: String, reason: String },
}

impl Api {
  /// Creates a new [`Api`] pointed at [`DEFAULT_BASE_URL`].
  pub fn new() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      client: Client::new(),
    }
  }

  /// Creates a new [`Api`] with the given options.
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = opts.timeout {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      base_url: opts.base_url.trim_end_matches('/').to_string(),
      client: builder.build()?,
    })
  }

  /// Returns the base URL this client sends requests to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Builds `{base}/api/{endpoint}/{name}`, percent-encoding `name`.
  fn endpoint_url(&self, endpoint: &str, name: &str) -> Result<Url, Error> {
    let bad_url = |reason: String| Error::BadUrl {
      url: self.base_url.clone(),
      reason,
    };

    let mut url =
      Url::parse(&self.base_url).map_err(|e| bad_url(e.to_string()))?;
    url
      .path_segments_mut()
      .map_err(|_| bad_url("URL cannot be a base".to_string()))?
      .pop_if_empty()
      .extend(&["api", endpoint, name]);
    Ok(url)
  }

  /// Base request-generating function.
  fn request_blob(&self, url: &str) -> Result<Vec<u8>, Error> {
    tracing::debug!(url, "GET");
    let mut response = self.client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Status {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }

    let mut buf = Vec::new();
    response.read_to_end(&mut buf)?;
    Ok(buf)
  }

  /// Base request-generating function, decoding the body as JSON.
  fn request_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
    let buf = self.request_blob(url)?;
    Ok(serde_json::from_reader(&mut &buf[..])?)
  }

  /// Try to get the specific resource of type `T` with the given name.
  pub fn by_name<T: Endpoint>(&self, name: &str) -> Result<T, Error> {
    let url = self.endpoint_url(T::NAME, name)?;
    self.request_json(url.as_str())
  }
}

impl Default for Api {
  fn default() -> Self {
    Self::new()
  }
}

/// An endpoint type, representing a type that can be requested directly from
/// an [`Api`] by name.
pub trait Endpoint: DeserializeOwned + 'static {
  /// The name of the endpoint, used to construct the request.
  const NAME: &'static str;
}

/// The calls a [`SearchView`][crate::view::SearchView] driver needs from a
/// backend.
///
/// [`Api`] is the networked implementation; tests substitute in-memory ones.
pub trait Backend: Send + Sync {
  /// Resolves `name` into a full Pokémon record.
  fn pokemon(&self, name: &str) -> Result<Pokemon, Error>;

  /// Resolves the evolutionary line `name` belongs to.
  fn evolution(&self, name: &str) -> Result<EvolutionLine, Error>;

  /// Downloads the raw bytes behind `blob`.
  fn blob(&self, blob: &Blob) -> Result<Box<[u8]>, Error>;
}

impl Backend for Api {
  fn pokemon(&self, name: &str) -> Result<Pokemon, Error> {
    self.by_name(name)
  }

  fn evolution(&self, name: &str) -> Result<EvolutionLine, Error> {
    self.by_name(name)
  }

  fn blob(&self, blob: &Blob) -> Result<Box<[u8]>, Error> {
    self.request_blob(blob.url()).map(Vec::into_boxed_slice)
  }
}

/// A lazily-loaded blob, such as a sprite.
///
/// Evaluating this blob requires performing a network request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Blob {
  url: String,
}

impl Blob {
  /// Creates a new lazily-loaded blob located at `url`.
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }

  /// Returns the `url` that points to the blob.
  pub fn url(&self) -> &str {
    &self.url
  }

  /// Returns whether this blob points nowhere.
  pub fn is_empty(&self) -> bool {
    self.url.is_empty()
  }

  /// Performs a network request to evaluate this blob.
  pub fn load(&self, backend: &dyn Backend) -> Result<Box<[u8]>, Error> {
    backend.blob(self)
  }
}

impl<'de> Deserialize<'de> for Blob {
  fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
    // Pictures the backend doesn't have come through as `null`.
    let url = Option::<String>::deserialize(de)?;
    Ok(Self::new(url.unwrap_or_default()))
  }
}
