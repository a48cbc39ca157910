//! The records this tool caches, one shape per kind of resource.
//!
//! Records are flattened, language-filtered views of PokéAPI resources. They
//! are what ends up in the cache files, and what lookups read back.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::api::Error;
use crate::api::Source;
use crate::model::Area;
use crate::model::Languages;
use crate::model::Pokedex;
use crate::model::Resource;
use crate::model::Species;
use crate::model::Version;
use crate::model::VersionGroup;

/// Localized names, keyed by language code.
pub type Names = BTreeMap<String, String>;

/// A kind of resource that can be refreshed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
  /// Pokemon species, plus the name search index.
  Species,
  /// Regional Pokedexes.
  Pokedex,
  /// Version groups, such as Red/Blue.
  VersionGroup,
  /// Location areas and their encounters.
  LocationArea,
}

impl Kind {
  /// Every kind, in the order a full refresh processes them.
  pub const ALL: [Kind; 4] = [
    Kind::Species,
    Kind::Pokedex,
    Kind::VersionGroup,
    Kind::LocationArea,
  ];

  /// The PokéAPI endpoint that lists resources of this kind.
  pub fn endpoint(self) -> &'static str {
    match self {
      Kind::Species => Species::NAME,
      Kind::Pokedex => Pokedex::NAME,
      Kind::VersionGroup => VersionGroup::NAME,
      Kind::LocationArea => Area::NAME,
    }
  }

  /// Returns the size of the remote catalog for this kind.
  pub fn count<S: Source>(self, source: &mut S) -> Result<usize, Error> {
    match self {
      Kind::Species => source.count::<Species>(),
      Kind::Pokedex => source.count::<Pokedex>(),
      Kind::VersionGroup => source.count::<VersionGroup>(),
      Kind::LocationArea => source.count::<Area>(),
    }
  }

  /// Returns the names of every resource of this kind.
  pub fn names<S: Source>(self, source: &mut S) -> Result<Vec<String>, Error> {
    match self {
      Kind::Species => source.names::<Species>(),
      Kind::Pokedex => source.names::<Pokedex>(),
      Kind::VersionGroup => source.names::<VersionGroup>(),
      Kind::LocationArea => source.names::<Area>(),
    }
  }

  /// Fetches the resource `name` and flattens it into a [`Record`].
  ///
  /// Only failure to fetch the resource itself is an error; anything fetched
  /// on the side (sprites, versions, parent locations) that fails to load is
  /// logged and left empty.
  pub fn build<S: Source>(
    self,
    source: &mut S,
    name: &str,
    langs: &Languages,
  ) -> Result<Record, Error> {
    Ok(match self {
      Kind::Species => Record::Species(SpeciesRecord::build(
        source.fetch(name)?,
        source,
        langs,
      )),
      Kind::Pokedex => {
        Record::Pokedex(PokedexRecord::build(source.fetch(name)?, langs))
      }
      Kind::VersionGroup => Record::VersionGroup(VersionGroupRecord::build(
        source.fetch(name)?,
        source,
        langs,
      )),
      Kind::LocationArea => Record::LocationArea(LocationRecord::build(
        source.fetch(name)?,
        source,
        langs,
      )),
    })
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Kind::Species => "species",
      Kind::Pokedex => "pokedexes",
      Kind::VersionGroup => "version groups",
      Kind::LocationArea => "locations",
    })
  }
}

/// A cached record of any kind.
///
/// Serializes as the bare inner record, so that a cache file is a plain map
/// of objects.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
  #[allow(missing_docs)]
  Species(SpeciesRecord),
  #[allow(missing_docs)]
  Pokedex(PokedexRecord),
  #[allow(missing_docs)]
  VersionGroup(VersionGroupRecord),
  #[allow(missing_docs)]
  LocationArea(LocationRecord),
}

impl Record {
  /// The key this record is stored under: the National Dex number for
  /// species, the API name for everything else.
  pub fn key(&self) -> String {
    match self {
      Record::Species(r) => r.id.to_string(),
      Record::Pokedex(r) => r.name.clone(),
      Record::VersionGroup(r) => r.name.clone(),
      Record::LocationArea(r) => r.name.clone(),
    }
  }
}

/// A cached Pokemon species.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
  /// National Dex number.
  pub id: u32,
  /// API name.
  pub name: String,
  /// Localized names, in the wanted languages only.
  #[serde(default)]
  pub names: Names,
  /// Entry numbers, keyed by Pokedex name.
  #[serde(rename = "pokedex", default)]
  pub dex_numbers: BTreeMap<String, u32>,
  /// URL of the default sprite; empty if there is none.
  #[serde(default)]
  pub sprite: String,
}

impl SpeciesRecord {
  fn build<S: Source>(
    species: Species,
    source: &mut S,
    langs: &Languages,
  ) -> Self {
    let sprite = match species.default_pokemon() {
      Some(pokemon) => match pokemon.load(source) {
        Ok(pokemon) => pokemon.sprites.front_default.unwrap_or_default(),
        Err(e) => {
          log::warn!("no sprite for {}: {}", species.name, e);
          String::new()
        }
      },
      None => String::new(),
    };

    Self {
      id: species.id,
      names: species.localized_names.select(langs),
      dex_numbers: species
        .pokedex_numbers
        .iter()
        .map(|entry| (entry.pokedex.key().to_string(), entry.number))
        .collect(),
      sprite,
      name: species.name,
    }
  }
}

/// A cached regional Pokedex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexRecord {
  /// Numeric ID.
  pub id: u32,
  /// API name.
  pub name: String,
  /// Localized names.
  #[serde(default)]
  pub names: Names,
  /// Localized descriptions.
  #[serde(default)]
  pub descriptions: Names,
  /// Whether this Pokedex is used in main-series games.
  #[serde(default)]
  pub is_main_series: bool,
  /// The region this Pokedex covers; empty for the National Dex.
  #[serde(default)]
  pub region: String,
  /// Names of the version groups that use this Pokedex.
  #[serde(default)]
  pub version_groups: Vec<String>,
}

impl PokedexRecord {
  fn build(dex: Pokedex, langs: &Languages) -> Self {
    Self {
      id: dex.id,
      names: dex.localized_names.select(langs),
      descriptions: dex.descriptions.select(langs),
      is_main_series: dex.is_main_series,
      region: dex
        .region
        .as_ref()
        .map(|r| r.key().to_string())
        .unwrap_or_default(),
      version_groups: keys(&dex.version_groups),
      name: dex.name,
    }
  }
}

/// A cached version group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupRecord {
  /// Numeric ID.
  pub id: u32,
  /// API name.
  pub name: String,
  /// Release order.
  #[serde(default)]
  pub order: u32,
  /// The generation this group belongs to.
  #[serde(default)]
  pub generation: String,
  /// The localized names of the group's versions, joined with `" / "`.
  #[serde(default)]
  pub names: Names,
  /// Localized names of each version in the group.
  #[serde(default)]
  pub versions: BTreeMap<String, Names>,
  /// Names of the Pokedexes used by this group.
  #[serde(default)]
  pub pokedexes: Vec<String>,
  /// Names of the regions visited in this group.
  #[serde(default)]
  pub regions: Vec<String>,
}

impl VersionGroupRecord {
  fn build<S: Source>(
    group: VersionGroup,
    source: &mut S,
    langs: &Languages,
  ) -> Self {
    let mut names = Names::new();
    let mut versions = BTreeMap::new();
    for version in &group.versions {
      let localized = match version.load(source) {
        Ok(Version {
          localized_names, ..
        }) => localized_names.select(langs),
        Err(e) => {
          log::warn!("no names for version {}: {}", version.key(), e);
          Names::new()
        }
      };

      for (lang, name) in &localized {
        names
          .entry(lang.clone())
          .and_modify(|joined: &mut String| {
            joined.push_str(" / ");
            joined.push_str(name);
          })
          .or_insert_with(|| name.clone());
      }
      versions.insert(version.key().to_string(), localized);
    }

    Self {
      id: group.id,
      order: group.order,
      generation: group
        .generation
        .as_ref()
        .map(|g| g.key().to_string())
        .unwrap_or_default(),
      names,
      versions,
      pokedexes: keys(&group.pokedexes),
      regions: keys(&group.regions),
      name: group.name,
    }
  }
}

/// A cached location area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
  /// Numeric ID.
  pub id: u32,
  /// API name.
  pub name: String,
  /// Localized names of the area, falling back to those of its location.
  #[serde(default)]
  pub names: Names,
  /// The location this area belongs to.
  #[serde(default)]
  pub location: String,
  /// The region of the location; empty if the location could not be loaded.
  #[serde(default)]
  pub region: String,
  /// The versions in which each Pokemon can be encountered here.
  #[serde(default)]
  pub encounters: BTreeMap<String, Vec<String>>,
}

impl LocationRecord {
  fn build<S: Source>(area: Area, source: &mut S, langs: &Languages) -> Self {
    let mut names = area.localized_names.select(langs);
    names.retain(|_, name| !name.is_empty());
    let mut region = String::new();
    match area.location.load(source) {
      Ok(location) => {
        for (lang, name) in location.localized_names.select(langs) {
          names.entry(lang).or_insert(name);
        }
        if let Some(r) = &location.region {
          region = r.key().to_string();
        }
      }
      Err(e) => {
        log::warn!("could not load location {}: {}", area.location.key(), e)
      }
    }

    let encounters: BTreeMap<String, Vec<String>> = area
      .pokemon
      .iter()
      .map(|e| {
        let versions = e.versions.iter().map(|v| v.version.key().to_string());
        (e.pokemon.key().to_string(), versions.collect::<Vec<_>>())
      })
      .collect();

    Self {
      id: area.id,
      names,
      location: area.location.key().to_string(),
      region,
      encounters,
      name: area.name,
    }
  }
}

/// The name search index: lowercased localized name to National Dex number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex(BTreeMap<String, String>);

impl SearchIndex {
  /// Creates an empty index.
  pub fn new() -> Self {
    Self::default()
  }

  /// Indexes every localized name of `species`.
  pub fn add(&mut self, species: &SpeciesRecord) {
    for name in species.names.values() {
      self.insert(name, species.id.to_string());
    }
  }

  /// Maps `name` (lowercased) to `id`, replacing any previous mapping.
  pub fn insert(&mut self, name: &str, id: impl Into<String>) {
    self.0.insert(name.to_lowercase(), id.into());
  }

  /// Iterates over `(name, id)` pairs in name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SearchIndex {
  fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
    let mut index = Self::new();
    for (name, id) in iter {
      index.insert(name, id);
    }
    index
  }
}

fn keys<T>(resources: &[Resource<T>]) -> Vec<String> {
  resources.iter().map(|r| r.key().to_string()).collect()
}
