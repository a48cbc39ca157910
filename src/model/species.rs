//! Pokemon species, the root structures for Pokemon information.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::pokedex::Pokedex;
use crate::model::resource::Resource;
use crate::model::text::Localized;

/// A Pokemon species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Species {
  /// This species' National Pokedex number.
  pub id: u32,
  /// This species' API name.
  pub name: String,
  /// The name of this species in various languages.
  #[serde(rename = "names", default)]
  pub localized_names: Localized,

  /// This species Pokedex numbers in various Pokedexes.
  #[serde(default)]
  pub pokedex_numbers: Vec<DexEntry>,
  /// Varieties which exist whithin this species.
  #[serde(default)]
  pub varieties: Vec<Variety>,
}

impl Species {
  /// Returns the Pokemon representing the default variety of this species.
  pub fn default_pokemon(&self) -> Option<&Resource<Pokemon>> {
    self
      .varieties
      .iter()
      .find(|v| v.is_default)
      .or_else(|| self.varieties.first())
      .map(|v| &v.pokemon)
  }
}

impl Endpoint for Species {
  const NAME: &'static str = "pokemon-species";
}

/// An entry in a Pokedex for a particular species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DexEntry {
  /// The number of this entry in the Pokedex (e.g., #001 for Bulbasaur).
  #[serde(rename = "entry_number")]
  pub number: u32,
  /// The pokedex this entry refers to.
  pub pokedex: Resource<Pokedex>,
}

/// A Pokemon variety.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variety {
  /// Whether this is the default variety for the species.
  pub is_default: bool,
  /// The Pokemon representing this variety.
  pub pokemon: Resource<Pokemon>,
}

/// A concrete Pokemon, i.e. one variety of a [`Species`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
  /// This Pokemon's numeric ID.
  pub id: u32,
  /// This Pokemon's API name.
  pub name: String,
  /// Images of this Pokemon.
  #[serde(default)]
  pub sprites: Sprites,
}

impl Endpoint for Pokemon {
  const NAME: &'static str = "pokemon";
}

/// Sprite URLs for a [`Pokemon`].
///
/// The sprite may be missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
  /// The default front-facing sprite.
  pub front_default: Option<String>,
}
