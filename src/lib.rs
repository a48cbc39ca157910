//! `pokenat` keeps a local JSON cache of PokéAPI species, Pokedex, version
//! and location data, and answers two questions from it: which storage box a
//! Pokemon belongs in, and which Pokemon a half-remembered name refers to.

#![deny(missing_docs)]

pub mod api;
pub mod cli;
pub mod model;
pub mod progress;
pub mod query;
pub mod record;
pub mod refresh;
pub mod storage;
pub mod store;

use std::io;

pub use api::Api;

/// Any error this crate can produce.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Api(#[from] api::Error),

  #[error(transparent)]
  Store(#[from] store::Error),

  #[error(transparent)]
  Query(#[from] query::Error),

  #[error(transparent)]
  Io(#[from] io::Error),
}
