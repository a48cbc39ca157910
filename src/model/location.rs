//! Locations within Pokemon games.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::resource::Resource;
use crate::model::species::Pokemon;
use crate::model::text::Localized;
use crate::model::version::Version;

/// A region, such as Kanto or Sinnoh; only ever referred to by name here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {}

/// A location within a region, such as Kanto Route 1 or Canalave City.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
  /// This location's numeric ID.
  pub id: u32,
  /// This location's API name.
  pub name: String,
  /// The name of this location in various languages.
  #[serde(rename = "names", default)]
  pub localized_names: Localized,

  /// The region that this location is within.
  pub region: Option<Resource<Region>>,
}

impl Endpoint for Location {
  const NAME: &'static str = "location";
}

/// An area within a [`Location`], which contains encounter information.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Area {
  /// This area's numeric ID.
  pub id: u32,
  /// This area's API name.
  pub name: String,
  /// The name of this area in various languages.
  #[serde(rename = "names", default)]
  pub localized_names: Localized,

  /// The location this area is in.
  pub location: Resource<Location>,

  /// Pokemon that can be encountered in this area.
  #[serde(rename = "pokemon_encounters", default)]
  pub pokemon: Vec<Encounterable>,
}

impl Endpoint for Area {
  const NAME: &'static str = "location-area";
}

/// A [`Pokemon`] that can be encounted in an area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Encounterable {
  /// The Pokemon being encountered.
  pub pokemon: Resource<Pokemon>,
  /// The versions in which this Pokemon can be encountered here.
  #[serde(rename = "version_details", default)]
  pub versions: Vec<VersionedEncounters>,
}

/// Encounters with a particular [`Pokemon`] in a certain [`Version`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VersionedEncounters {
  /// The version this encounter is relevant for.
  pub version: Resource<Version>,
}
