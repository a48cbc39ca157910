// Drives full refreshes against an in-memory catalog and checks what lands in
// the cache files.
mod support;

use std::collections::BTreeMap;
use std::fs;
use std::io;

use serde_json::json;
use serde_json::Value;

use pokenat::model::Languages;
use pokenat::progress::Progress;
use pokenat::record::Kind;
use pokenat::record::LocationRecord;
use pokenat::record::PokedexRecord;
use pokenat::record::SpeciesRecord;
use pokenat::record::VersionGroupRecord;
use pokenat::refresh::refresh;
use pokenat::refresh::Outcome;
use pokenat::refresh::Refresh;
use pokenat::store;
use pokenat::store::Files;
use pokenat::Error;

use support::names;
use support::pikachu_line;
use support::resource;
use support::FakeSource;

fn run(
  source: &mut FakeSource,
  kind: Kind,
  files: &Files,
  langs: &Languages,
  force: bool,
) -> Outcome {
  let opts = Refresh {
    langs,
    files,
    force,
  };
  refresh(source, kind, &opts, &mut Progress::new(io::sink())).unwrap()
}

#[test]
fn species_refresh_writes_data_index_and_langs() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();

  let langs = Languages::default();
  let outcome = run(&mut source, Kind::Species, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 3, skipped: 0 });

  let data: BTreeMap<String, SpeciesRecord> = store::load(&files.data);
  let keys: Vec<_> = data.keys().map(String::as_str).collect();
  assert_eq!(keys, ["172", "25", "26"]);

  let pikachu = &data["25"];
  assert_eq!(pikachu.name, "pikachu");
  assert_eq!(pikachu.names.len(), 2, "ja is not a wanted language");
  assert_eq!(pikachu.names["fr"], "Pikachu");
  assert_eq!(pikachu.dex_numbers["kanto"], 25);
  assert_eq!(pikachu.sprite, "https://sprites.test/25.png");

  // Pichu has no pokemon document behind it; that only costs the sprite.
  assert_eq!(data["172"].sprite, "");
  assert_eq!(data["172"].names["en"], "Pichu");

  let index: BTreeMap<String, String> = store::load(&files.index);
  let expected: BTreeMap<String, String> = vec![
    ("pichu".to_string(), "172".to_string()),
    ("pikachu".to_string(), "25".to_string()),
    ("raichu".to_string(), "26".to_string()),
  ]
  .into_iter()
  .collect();
  assert_eq!(index, expected);

  let langs: Languages = store::load(&files.langs);
  assert_eq!(langs, Languages::default());
}

#[test]
fn unchanged_catalog_is_a_no_op() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();
  let langs = Languages::default();

  run(&mut source, Kind::Species, &files, &langs, false);
  let data = fs::read(&files.data).unwrap();
  let index = fs::read(&files.index).unwrap();
  let fetches = source.fetches;

  let outcome = run(&mut source, Kind::Species, &files, &langs, false);
  assert_eq!(outcome, Outcome::UpToDate { records: 3 });
  assert_eq!(source.fetches, fetches, "nothing should be fetched");
  assert_eq!(fs::read(&files.data).unwrap(), data);
  assert_eq!(fs::read(&files.index).unwrap(), index);
}

#[test]
fn force_refetches_and_replaces() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();

  run(&mut source, Kind::Species, &files, &Languages::default(), false);
  let ja = Languages::new(["ja"]);
  let outcome = run(&mut source, Kind::Species, &files, &ja, true);
  assert_eq!(outcome, Outcome::Refreshed { records: 3, skipped: 0 });

  // The Japanese-only rebuild replaces the old cache wholesale.
  let index: BTreeMap<String, String> = store::load(&files.index);
  assert_eq!(index.len(), 1);
  assert_eq!(index["ピカチュウ"], "25");
  let data: BTreeMap<String, SpeciesRecord> = store::load(&files.data);
  assert!(data["26"].names.is_empty());
}

#[test]
fn grown_catalog_triggers_refresh() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();
  let langs = Languages::default();
  run(&mut source, Kind::Species, &files, &langs, false);

  source
    .add(
      "pokemon-species",
      "bulbasaur",
      support::species(
        1,
        "bulbasaur",
        &[("en", "Bulbasaur"), ("fr", "Bulbizarre")],
        &[],
      ),
    )
    .serve("pokemon", "bulbasaur", support::pokemon(1, "bulbasaur"));

  let outcome = run(&mut source, Kind::Species, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 4, skipped: 0 });
  let index: BTreeMap<String, String> = store::load(&files.index);
  assert_eq!(index["bulbizarre"], "1");
}

#[test]
fn failed_items_are_skipped() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();
  source.list("pokemon-species", "missingno");

  let langs = Languages::default();
  let outcome = run(&mut source, Kind::Species, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 3, skipped: 1 });
  assert_eq!(store::count(&files.data), 3);
}

#[test]
fn pokedex_refresh() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = FakeSource::new();
  source
    .add(
      "pokedex",
      "national",
      json!({
        "id": 1,
        "name": "national",
        "names": names(&[("en", "National"), ("fr", "National")]),
        "descriptions": [
          {
            "description": "Entire National dex",
            "language": resource("language", "en"),
          },
        ],
        "is_main_series": true,
        "region": null,
        "version_groups": [],
      }),
    )
    .add(
      "pokedex",
      "kanto",
      json!({
        "id": 2,
        "name": "kanto",
        "names": names(&[("en", "Kanto"), ("de", "Kanto")]),
        "is_main_series": true,
        "region": resource("region", "kanto"),
        "version_groups": [
          resource("version-group", "red-blue"),
          resource("version-group", "yellow"),
        ],
      }),
    );

  let langs = Languages::default();
  let outcome = run(&mut source, Kind::Pokedex, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 2, skipped: 0 });

  let dexes: BTreeMap<String, PokedexRecord> = store::load(&files.pokedexes);
  assert_eq!(dexes["national"].region, "");
  assert_eq!(dexes["national"].descriptions["en"], "Entire National dex");
  assert_eq!(dexes["kanto"].region, "kanto");
  assert_eq!(dexes["kanto"].version_groups, ["red-blue", "yellow"]);
  assert_eq!(dexes["kanto"].names.len(), 1);

  // Only the species refresh touches the index.
  assert!(!files.index.exists());
}

#[test]
fn version_group_refresh_joins_version_names() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = FakeSource::new();
  source
    .add(
      "version-group",
      "red-blue",
      json!({
        "id": 1,
        "name": "red-blue",
        "order": 1,
        "generation": resource("generation", "generation-i"),
        "versions": [
          resource("version", "red"),
          resource("version", "blue"),
          resource("version", "green"),
        ],
        "pokedexes": [resource("pokedex", "kanto")],
        "regions": [resource("region", "kanto")],
      }),
    )
    .serve(
      "version",
      "red",
      json!({
        "id": 1,
        "name": "red",
        "names": names(&[("en", "Red"), ("fr", "Rouge")]),
      }),
    )
    .serve(
      "version",
      "blue",
      json!({
        "id": 2,
        "name": "blue",
        "names": names(&[("en", "Blue"), ("fr", "Bleue")]),
      }),
    );

  let langs = Languages::default();
  let outcome = run(&mut source, Kind::VersionGroup, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 1, skipped: 0 });

  let groups: BTreeMap<String, VersionGroupRecord> =
    store::load(&files.version_groups);
  let group = &groups["red-blue"];
  assert_eq!(group.generation, "generation-i");
  assert_eq!(group.names["en"], "Red / Blue");
  assert_eq!(group.names["fr"], "Rouge / Bleue");
  assert_eq!(group.versions.len(), 3);
  assert!(group.versions["green"].is_empty(), "green failed to load");
  assert_eq!(group.pokedexes, ["kanto"]);
}

#[test]
fn location_refresh_survives_missing_location() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = FakeSource::new();
  let encounters = json!([
    {
      "pokemon": resource("pokemon", "tentacool"),
      "version_details": [
        {"version": resource("version", "diamond"), "max_chance": 60},
        {"version": resource("version", "pearl"), "max_chance": 60},
      ],
    },
  ]);
  source
    .add(
      "location-area",
      "canalave-city-area",
      json!({
        "id": 1,
        "name": "canalave-city-area",
        "names": names(&[("en", "")]),
        "location": resource("location", "canalave-city"),
        "pokemon_encounters": encounters,
      }),
    )
    .serve(
      "location",
      "canalave-city",
      json!({
        "id": 1,
        "name": "canalave-city",
        "names": names(&[("en", "Canalave City"), ("fr", "Joliberges")]),
        "region": resource("region", "sinnoh"),
      }),
    )
    .add(
      "location-area",
      "lost-area",
      json!({
        "id": 2,
        "name": "lost-area",
        "names": names(&[("fr", "Zone perdue")]),
        "location": resource("location", "nowhere"),
      }),
    );

  let langs = Languages::default();
  let outcome = run(&mut source, Kind::LocationArea, &files, &langs, false);
  assert_eq!(outcome, Outcome::Refreshed { records: 2, skipped: 0 });

  let areas: BTreeMap<String, LocationRecord> = store::load(&files.locations);
  let canalave = &areas["canalave-city-area"];
  assert_eq!(canalave.region, "sinnoh");
  assert_eq!(canalave.location, "canalave-city");
  assert_eq!(canalave.names["en"], "Canalave City");
  assert_eq!(canalave.names["fr"], "Joliberges");
  assert_eq!(canalave.encounters["tentacool"], ["diamond", "pearl"]);

  let lost = &areas["lost-area"];
  assert_eq!(lost.region, "");
  assert_eq!(lost.names["fr"], "Zone perdue");
  assert!(lost.encounters.is_empty());
}

#[test]
fn cache_files_are_plain_json_maps() {
  let dir = tempfile::tempdir().unwrap();
  let files = Files::in_dir(dir.path());
  let mut source = pikachu_line();
  run(&mut source, Kind::Species, &files, &Languages::new(["en"]), false);

  let raw: Value =
    serde_json::from_slice(&fs::read(&files.data).unwrap()).unwrap();
  assert_eq!(
    raw["26"],
    json!({
      "id": 26,
      "name": "raichu",
      "names": {"en": "Raichu"},
      "pokedex": {"kanto": 26, "national": 26},
      "sprite": "https://sprites.test/26.png",
    })
  );
  let langs: Value =
    serde_json::from_slice(&fs::read(&files.langs).unwrap()).unwrap();
  assert_eq!(langs, json!(["en"]));
}

#[test]
fn unwritable_cache_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  let blocker = dir.path().join("blocker");
  fs::write(&blocker, "not a directory").unwrap();
  let mut files = Files::in_dir(dir.path());
  files.data = blocker.join("data.json");

  let mut source = pikachu_line();
  let langs = Languages::default();
  let opts = Refresh {
    langs: &langs,
    files: &files,
    force: false,
  };
  let result = refresh(
    &mut source,
    Kind::Species,
    &opts,
    &mut Progress::new(io::sink()),
  );
  assert!(matches!(result, Err(Error::Store(_))), "{:?}", result);
  assert!(!files.index.exists());
  assert!(!files.langs.exists());
}
