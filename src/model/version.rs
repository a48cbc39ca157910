//! Game versions.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::location::Region;
use crate::model::pokedex::Pokedex;
use crate::model::resource::Resource;
use crate::model::text::Localized;

/// A generation of Pokemon games; only ever referred to by name here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Generation {}

/// A group of versions that share most of their data, such as Red and Blue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VersionGroup {
  /// This version group's numeric ID.
  pub id: u32,
  /// This version group's API name.
  pub name: String,
  /// Sort order; roughly release order.
  #[serde(default)]
  pub order: u32,

  /// The generation this version group belongs to.
  pub generation: Option<Resource<Generation>>,
  /// The versions in this group.
  #[serde(default)]
  pub versions: Vec<Resource<Version>>,
  /// Pokedexes used by this version group.
  #[serde(default)]
  pub pokedexes: Vec<Resource<Pokedex>>,
  /// Regions that can be visited in this version group.
  #[serde(default)]
  pub regions: Vec<Resource<Region>>,
}

impl Endpoint for VersionGroup {
  const NAME: &'static str = "version-group";
}

/// A single game version, such as Pokemon Red.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Version {
  /// This version's numeric ID.
  pub id: u32,
  /// This version's API name.
  pub name: String,
  /// The name of this version in various languages.
  #[serde(rename = "names", default)]
  pub localized_names: Localized,
}

impl Endpoint for Version {
  const NAME: &'static str = "version";
}
