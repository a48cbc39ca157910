//! Regional Pokedexes.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::location::Region;
use crate::model::resource::Resource;
use crate::model::text::Localized;
use crate::model::version::VersionGroup;

/// A particular regional Pokedex.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokedex {
  /// This Pokedex's numeric ID.
  pub id: u32,
  /// This Pokedex's API name.
  pub name: String,
  /// The name of this Pokedex in various languages.
  #[serde(rename = "names", default)]
  pub localized_names: Localized,
  /// Descriptions of this Pokedex in various languages.
  #[serde(default)]
  pub descriptions: Localized,

  /// Whether this Pokedex is actually used in main-series games.
  #[serde(default)]
  pub is_main_series: bool,
  /// The region this Pokedex indexes Pokemon for.
  ///
  /// The National Pokedex has no region.
  pub region: Option<Resource<Region>>,
  /// Version groups associated with this Pokedex.
  #[serde(default)]
  pub version_groups: Vec<Resource<VersionGroup>>,
}

impl Endpoint for Pokedex {
  const NAME: &'static str = "pokedex";
}
