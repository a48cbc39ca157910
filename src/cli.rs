//! Command-line interface.

use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;

use crate::api;
use crate::api::Source;
use crate::model::Languages;
use crate::progress::Progress;
use crate::query;
use crate::query::Dex;
use crate::query::Prompt;
use crate::query::TerminalPrompt;
use crate::record::Kind;
use crate::refresh;
use crate::refresh::Outcome;
use crate::refresh::Refresh;
use crate::storage;
use crate::storage::Geometry;
use crate::store::Files;
use crate::Api;
use crate::Error;

/// Find where a Pokemon goes in box storage, backed by a local PokéAPI cache.
#[derive(Parser, Debug)]
#[command(name = "pokenat", version)]
pub struct Cli {
  #[command(flatten)]
  action: Action,

  /// Refetch even if the cache looks up to date.
  #[arg(short, long)]
  force: bool,

  /// Languages to keep names in, comma-separated.
  #[arg(
    short = 'L',
    long = "lang",
    value_delimiter = ',',
    default_values = ["en", "fr"]
  )]
  langs: Vec<String>,

  /// Rows per storage box.
  #[arg(
    short = 'l',
    long = "line",
    default_value_t = storage::DEFAULT_ROWS,
    allow_negative_numbers = true
  )]
  rows: i64,

  /// Columns per storage box.
  #[arg(
    short = 'c',
    long = "col",
    default_value_t = storage::DEFAULT_COLS,
    allow_negative_numbers = true
  )]
  cols: i64,

  /// Directory holding the cache files (default: <local data dir>/pokenat).
  #[arg(long)]
  data_dir: Option<PathBuf>,

  /// Species cache file.
  #[arg(long)]
  data_file: Option<PathBuf>,

  /// Name search index file.
  #[arg(long)]
  index_file: Option<PathBuf>,

  /// File recording the languages the species cache was built with.
  #[arg(long)]
  langs_file: Option<PathBuf>,

  /// Pokedex cache file.
  #[arg(long)]
  pokedex_file: Option<PathBuf>,

  /// Version group cache file.
  #[arg(long)]
  version_groups_file: Option<PathBuf>,

  /// Location cache file.
  #[arg(long)]
  locations_file: Option<PathBuf>,

  /// PokéAPI base URL.
  #[arg(long, env = "POKENAT_API_URL", default_value = api::DEFAULT_BASE_URL)]
  api_url: String,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Action {
  /// Refresh every cache: species, pokedexes, version groups, locations.
  #[arg(long)]
  load: bool,

  /// Refresh only the pokedex cache.
  #[arg(long)]
  load_pokedex: bool,

  /// Refresh only the version group cache.
  #[arg(long)]
  load_version_groups: bool,

  /// Refresh only the location cache.
  #[arg(long)]
  load_locations: bool,

  /// Look a Pokemon up by National Dex number.
  #[arg(short, long, allow_negative_numbers = true)]
  id: Option<i64>,

  /// Look a Pokemon up by (part of) its name in any cached language.
  #[arg(short, long)]
  name: Option<String>,
}

/// The one thing an invocation does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
  /// Refresh the caches of these kinds, in order.
  Refresh(Vec<Kind>),
  /// Look up a National Dex number.
  LookupId(i64),
  /// Search the name index.
  LookupName(String),
}

impl Cli {
  /// Returns the action selected on the command line.
  pub fn action(&self) -> Command {
    let a = &self.action;
    if let Some(id) = a.id {
      Command::LookupId(id)
    } else if let Some(name) = &a.name {
      Command::LookupName(name.clone())
    } else if a.load_pokedex {
      Command::Refresh(vec![Kind::Pokedex])
    } else if a.load_version_groups {
      Command::Refresh(vec![Kind::VersionGroup])
    } else if a.load_locations {
      Command::Refresh(vec![Kind::LocationArea])
    } else {
      Command::Refresh(Kind::ALL.to_vec())
    }
  }

  /// Returns where the cache files live, after applying overrides.
  pub fn files(&self) -> Files {
    let mut files = match &self.data_dir {
      Some(dir) => Files::in_dir(dir),
      None => Files::default(),
    };
    let overrides = [
      (&self.data_file, &mut files.data),
      (&self.index_file, &mut files.index),
      (&self.langs_file, &mut files.langs),
      (&self.pokedex_file, &mut files.pokedexes),
      (&self.version_groups_file, &mut files.version_groups),
      (&self.locations_file, &mut files.locations),
    ];
    for (given, path) in overrides {
      if let Some(given) = given {
        *path = given.clone();
      }
    }
    files
  }

  /// Returns the wanted languages.
  pub fn langs(&self) -> Languages {
    Languages::new(self.langs.iter().map(|l| l.trim()))
  }
}

/// Runs the invocation described by `cli` against the public API, prompting
/// on the terminal if a name search is ambiguous.
pub fn run(cli: Cli) -> Result<(), Error> {
  let mut api = Api::with_options(api::Options {
    base_url: cli.api_url.clone(),
  });
  let mut prompt = TerminalPrompt::stdio();
  execute(&cli, &mut api, &mut prompt, &mut io::stdout())
}

/// Runs the invocation described by `cli`.
///
/// Lookups that find nothing are reported on `out` and are not errors; an
/// invalid id or box shape is.
pub fn execute<S: Source, P: Prompt, W: Write>(
  cli: &Cli,
  source: &mut S,
  prompt: &mut P,
  out: &mut W,
) -> Result<(), Error> {
  let files = cli.files();
  let langs = cli.langs();
  match cli.action() {
    Command::Refresh(kinds) => {
      let opts = Refresh {
        langs: &langs,
        files: &files,
        force: cli.force,
      };
      let mut progress = Progress::stderr();
      for kind in kinds {
        match refresh::refresh(source, kind, &opts, &mut progress)? {
          Outcome::UpToDate { records } => report(
            out,
            format_args!("{}: already up to date ({} records)", kind, records),
          )?,
          Outcome::Refreshed { records, skipped } => report(
            out,
            format_args!("{}: {} records ({} skipped)", kind, records, skipped),
          )?,
        }
      }
    }
    Command::LookupId(id) => {
      let geometry = geometry(cli)?;
      let dex = load_dex(&files, &langs);
      print_lookup(&dex, id, &geometry, out)?;
    }
    Command::LookupName(text) => {
      let geometry = geometry(cli)?;
      let dex = load_dex(&files, &langs);
      match dex.resolve(&text, prompt)? {
        Some(id) => print_lookup(&dex, id, &geometry, out)?,
        None => report(out, format_args!("No Pokemon matches \"{}\"", text))?,
      }
    }
  }
  Ok(())
}

fn geometry(cli: &Cli) -> Result<Geometry, Error> {
  Ok(Geometry::new(cli.rows, cli.cols).map_err(query::Error::from)?)
}

fn load_dex(files: &Files, langs: &Languages) -> Dex {
  let dex = Dex::load(files);
  if dex.is_empty() {
    log::warn!(
      "species cache {} is empty; run with --load first",
      files.data.display()
    );
  }
  if let Some(cached) = dex.langs() {
    if !cached.same_codes(langs) {
      log::warn!(
        "cache was built for languages {} but {} were requested; \
         refresh with --load --force to rebuild it",
        cached,
        langs
      );
    }
  }
  dex
}

fn print_lookup<W: Write>(
  dex: &Dex,
  id: i64,
  geometry: &Geometry,
  out: &mut W,
) -> Result<(), Error> {
  match dex.lookup(id, geometry) {
    Ok(lookup) => report(out, format_args!("{}", lookup)),
    Err(query::Error::NotFound(id)) => {
      report(out, format_args!("Pokemon #{} not found in the cache", id))
    }
    Err(e) => Err(e.into()),
  }
}

fn report<W: Write>(
  out: &mut W,
  line: std::fmt::Arguments,
) -> Result<(), Error> {
  writeln!(out, "{}", line)?;
  Ok(())
}
