//! An in-memory stand-in for PokéAPI.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::json;
use serde_json::Value;

use pokenat::api::Endpoint;
use pokenat::api::Error;
use pokenat::api::Source;

const BASE: &str = "https://pokeapi.test/api/v2";

/// Serves canned JSON documents, keyed by endpoint and name.
#[derive(Default)]
pub struct FakeSource {
  listings: BTreeMap<&'static str, Vec<String>>,
  details: BTreeMap<(String, String), Value>,
  /// Number of `fetch` calls served so far, successful or not.
  pub fetches: usize,
}

impl FakeSource {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `name` to the listing of `endpoint` without any detail behind it,
  /// so that fetching it fails.
  pub fn list(&mut self, endpoint: &'static str, name: &str) -> &mut Self {
    self
      .listings
      .entry(endpoint)
      .or_default()
      .push(name.to_string());
    self
  }

  /// Serves `doc` for `endpoint/name`, without listing it.
  pub fn serve(&mut self, endpoint: &str, name: &str, doc: Value) -> &mut Self {
    if let Some(id) = doc.get("id").and_then(Value::as_u64) {
      self
        .details
        .insert((endpoint.to_string(), id.to_string()), doc.clone());
    }
    self
      .details
      .insert((endpoint.to_string(), name.to_string()), doc);
    self
  }

  /// Lists and serves `doc` under `endpoint/name`.
  pub fn add(
    &mut self,
    endpoint: &'static str,
    name: &str,
    doc: Value,
  ) -> &mut Self {
    self.list(endpoint, name).serve(endpoint, name, doc)
  }
}

impl Source for FakeSource {
  fn count<T: Endpoint>(&mut self) -> Result<usize, Error> {
    Ok(self.listings.get(T::NAME).map_or(0, Vec::len))
  }

  fn names<T: Endpoint>(&mut self) -> Result<Vec<String>, Error> {
    Ok(self.listings.get(T::NAME).cloned().unwrap_or_default())
  }

  fn fetch<T: Endpoint>(&mut self, name: &str) -> Result<T, Error> {
    self.fetches += 1;
    let key = (T::NAME.to_string(), name.to_string());
    match self.details.get(&key) {
      Some(doc) => Ok(serde_json::from_value(doc.clone())?),
      None => Err(Error::Missing(url(T::NAME, name))),
    }
  }
}

pub fn url(endpoint: &str, name: &str) -> String {
  format!("{}/{}/{}/", BASE, endpoint, name)
}

pub fn resource(endpoint: &str, name: &str) -> Value {
  json!({"name": name, "url": url(endpoint, name)})
}

pub fn names(pairs: &[(&str, &str)]) -> Value {
  pairs
    .iter()
    .map(|(lang, name)| {
      json!({"name": name, "language": resource("language", lang)})
    })
    .collect()
}

pub fn species(
  id: u32,
  name: &str,
  localized: &[(&str, &str)],
  dexes: &[(&str, u32)],
) -> Value {
  let dex_numbers: Vec<_> = dexes
    .iter()
    .map(|(dex, n)| {
      json!({"entry_number": n, "pokedex": resource("pokedex", dex)})
    })
    .collect();
  json!({
    "id": id,
    "name": name,
    "names": names(localized),
    "pokedex_numbers": dex_numbers,
    "varieties": [{"is_default": true, "pokemon": resource("pokemon", name)}],
  })
}

pub fn pokemon(id: u32, name: &str) -> Value {
  json!({
    "id": id,
    "name": name,
    "sprites": {
      "front_default": format!("https://sprites.test/{}.png", id),
      "front_shiny": null,
    },
  })
}

/// A small national dex: Pikachu, Raichu and Pichu, with sprites for all but
/// Pichu.
pub fn pikachu_line() -> FakeSource {
  let mut source = FakeSource::new();
  source
    .add(
      "pokemon-species",
      "pikachu",
      species(
        25,
        "pikachu",
        &[("en", "Pikachu"), ("fr", "Pikachu"), ("ja", "ピカチュウ")],
        &[("national", 25), ("kanto", 25)],
      ),
    )
    .serve("pokemon", "pikachu", pokemon(25, "pikachu"))
    .add(
      "pokemon-species",
      "raichu",
      species(
        26,
        "raichu",
        &[("en", "Raichu"), ("fr", "Raichu")],
        &[("national", 26), ("kanto", 26)],
      ),
    )
    .serve("pokemon", "raichu", pokemon(26, "raichu"))
    .add(
      "pokemon-species",
      "pichu",
      species(
        172,
        "pichu",
        &[("en", "Pichu"), ("fr", "Pichu")],
        &[("national", 172)],
      ),
    );
  source
}
