//! Resources are lazily-loaded objects that may have a name attached to them.
//!
//! PokéAPI uses [`Resource`]s as hyperlinks between the objects it returns.

use std::marker::PhantomData;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::api::Error;
use crate::api::Source;

/// A (possibly-named) PokéAPI resource.
///
/// Call [`Resource::load()`] to convert this into a `T`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource<T> {
  #[serde(default)]
  name: Option<String>,
  url: String,

  #[serde(skip)]
  _ph: PhantomData<fn() -> T>,
}

impl<T> Resource<T> {
  /// Creates a new named resource pointing at `url`.
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      url: url.into(),
      _ph: PhantomData,
    }
  }

  /// Returns a key that can be used to fetch this resource: its name if it
  /// has one, otherwise the last path segment of its URL (usually the ID).
  pub fn key(&self) -> &str {
    match &self.name {
      Some(name) => name.as_str(),
      None => self
        .url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(""),
    }
  }
}

impl<T: Endpoint> Resource<T> {
  /// Performs a request to obtain the `T` represented by this [`Resource`].
  pub fn load<S: Source>(&self, source: &mut S) -> Result<T, Error> {
    source.fetch(self.key())
  }
}
