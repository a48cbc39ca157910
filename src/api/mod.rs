//! A PokéAPI client.

use std::io;
use std::io::Read;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::Resource;

mod source;
pub use source::Source;

/// The public PokéAPI instance.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// How many listing entries to request per page.
const PER_PAGE: usize = 200;

/// An API client.
///
/// This type is the entrypoint for downloading information from PokéAPI.
/// Every call performs a fresh, blocking request; persistence of the results
/// is the caller's job.
pub struct Api {
  base_url: String,
  client: Client,
}

/// Options for constructing an [`Api`].
pub struct Options {
  /// The base URL to point the client at.
  pub base_url: String,
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

  #[error("no such resource: {0}")]
  Missing(String),
}

impl Api {
  /// Creates a new [`Api`] pointed at the public PokéAPI.
  pub fn new() -> Self {
    Self::with_options(Options {
      base_url: DEFAULT_BASE_URL.to_string(),
    })
  }

  /// Creates a new [`Api`] with the given options.
  pub fn with_options(opts: Options) -> Self {
    Self {
      base_url: opts.base_url.trim_end_matches('/').to_string(),
      client: Client::new(),
    }
  }

  /// Returns the base URL requests are made against.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Base request-generating function.
  fn request_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
    log::debug!("GET {}", url);
    let response = self.client.get(url).send()?;
    if response.status() == StatusCode::NOT_FOUND {
      return Err(Error::Missing(url.to_string()));
    }

    let mut buf = Vec::new();
    response.error_for_status()?.read_to_end(&mut buf)?;
    Ok(serde_json::from_reader(&mut &buf[..])?)
  }
}

impl Default for Api {
  fn default() -> Self {
    Self::new()
  }
}

impl Source for Api {
  fn count<T: Endpoint>(&mut self) -> Result<usize, Error> {
    let url = format!("{}/{}?limit=1", self.base_url, T::NAME);
    let page = self.request_json::<Page<T>>(&url)?;
    Ok(page.count as usize)
  }

  /// Walks the listing of `T` one page at a time, following `next` links
  /// until the server stops handing them out.
  fn names<T: Endpoint>(&mut self) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    let mut next =
      Some(format!("{}/{}?limit={}", self.base_url, T::NAME, PER_PAGE));
    while let Some(url) = next {
      let page = self.request_json::<Page<T>>(&url)?;
      names.extend(page.results.iter().map(|r| r.key().to_string()));
      next = page.next;
    }
    Ok(names)
  }

  fn fetch<T: Endpoint>(&mut self, name: &str) -> Result<T, Error> {
    self.request_json(&format!("{}/{}/{}", self.base_url, T::NAME, name))
  }
}

/// An endpoint type, representing a type that can be requested directly from
/// an [`Api`].
pub trait Endpoint: DeserializeOwned + 'static {
  /// The name of the endpoint, used to construct the request.
  const NAME: &'static str;
}

/// One page of a resource listing.
#[derive(Deserialize)]
struct Page<T> {
  count: u64,
  next: Option<String>,
  #[serde(default = "Vec::new")]
  results: Vec<Resource<T>>,
}
