//! The seam between the fetcher and wherever the data actually comes from.

use crate::api::Endpoint;
use crate::api::Error;

/// A remote catalog of PokéAPI resources.
///
/// [`Api`](crate::Api) is the production implementation; anything that can
/// hand out listings and full records by name can stand in for it.
pub trait Source {
  /// Returns the number of resources of type `T` in the catalog.
  fn count<T: Endpoint>(&mut self) -> Result<usize, Error>;

  /// Returns the names of every resource of type `T`, in catalog order.
  fn names<T: Endpoint>(&mut self) -> Result<Vec<String>, Error>;

  /// Fetches the full record for the resource of type `T` named `name`.
  ///
  /// `name` may also be a numeric ID.
  fn fetch<T: Endpoint>(&mut self, name: &str) -> Result<T, Error>;
}
