//! Lookups against the cached species data.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::io::BufRead;
use std::io::Write;

use crate::model::Languages;
use crate::record::SearchIndex;
use crate::record::SpeciesRecord;
use crate::storage;
use crate::storage::Geometry;
use crate::storage::Slot;
use crate::store;
use crate::store::Files;

/// A lookup error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Invalid(#[from] storage::Error),

  #[error("no Pokemon with id {0} in the cache")]
  NotFound(String),

  #[error("could not read a choice: {0}")]
  Prompt(#[from] io::Error),
}

/// A name that matched a search.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
  /// National Dex number, as stored in the index.
  pub id: String,
  /// The lowercased name that matched.
  pub name: String,
}

impl Match {
  fn number(&self) -> i64 {
    self.id.parse().unwrap_or(i64::MAX)
  }
}

impl fmt::Display for Match {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:>3} {}", self.id, self.name)
  }
}

/// Something that can ask the operator to pick one of several matches.
pub trait Prompt {
  /// Presents `candidates` and returns the id the operator typed, or `None`
  /// if the answer was not a number.
  fn prompt_for_choice(
    &mut self,
    candidates: &[Match],
  ) -> io::Result<Option<i64>>;
}

/// A [`Prompt`] that lists candidates on one stream and reads answers, one
/// per line, from another.
pub struct TerminalPrompt<R, W> {
  input: R,
  output: W,
  listed: Vec<Match>,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
  /// Creates a prompt on standard input and output.
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
  /// Creates a prompt reading from `input` and writing to `output`.
  pub fn new(input: R, output: W) -> Self {
    Self {
      input,
      output,
      listed: Vec::new(),
    }
  }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
  fn prompt_for_choice(
    &mut self,
    candidates: &[Match],
  ) -> io::Result<Option<i64>> {
    // Repeated questions about the same candidates only repeat the prompt.
    if self.listed != candidates {
      for candidate in candidates {
        writeln!(self.output, "{}", candidate)?;
      }
      self.listed = candidates.to_vec();
    }
    write!(self.output, "Which one? ")?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "no selection made",
      ));
    }
    Ok(line.trim().parse().ok())
  }
}

/// The result of looking a Pokemon up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookup {
  /// The cached species.
  pub species: SpeciesRecord,
  /// Where the species is stored.
  pub slot: Slot,
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "Pokedex National ID #{}", self.species.id)?;
    writeln!(f, "Name: {}", self.species.name)?;
    for (lang, name) in &self.species.names {
      writeln!(f, "  {}: {}", lang, name)?;
    }
    if !self.species.dex_numbers.is_empty() {
      writeln!(f, "Pokedex numbers:")?;
      for (dex, number) in &self.species.dex_numbers {
        writeln!(f, "  {}: {}", dex, number)?;
      }
    }
    if !self.species.sprite.is_empty() {
      writeln!(f, "Sprite: {}", self.species.sprite)?;
    }
    write!(f, "{}", self.slot)
  }
}

/// The cached species data, loaded for querying.
#[derive(Clone, Debug, Default)]
pub struct Dex {
  species: BTreeMap<String, SpeciesRecord>,
  index: SearchIndex,
  langs: Option<Languages>,
}

impl Dex {
  /// Loads the cache. Missing or unreadable files leave the matching part of
  /// the [`Dex`] empty.
  pub fn load(files: &Files) -> Self {
    Self {
      species: store::load(&files.data),
      index: store::load(&files.index),
      langs: store::load(&files.langs),
    }
  }

  /// Builds a [`Dex`] out of already-loaded parts.
  pub fn new(
    species: BTreeMap<String, SpeciesRecord>,
    index: SearchIndex,
  ) -> Self {
    Self {
      species,
      index,
      langs: None,
    }
  }

  /// Returns whether the cache holds no species.
  pub fn is_empty(&self) -> bool {
    self.species.is_empty()
  }

  /// Returns the languages the cache was built with, if known.
  pub fn langs(&self) -> Option<&Languages> {
    self.langs.as_ref()
  }

  /// Looks up the species with National Dex number `id`, and computes where
  /// it is stored.
  ///
  /// `id` is validated before anything else, so an invalid id is always an
  /// [`Error::Invalid`], cached or not.
  pub fn lookup(&self, id: i64, geometry: &Geometry) -> Result<Lookup, Error> {
    let slot = geometry.locate(id)?;
    let key = id.to_string();
    match self.species.get(&key) {
      Some(species) => Ok(Lookup {
        species: species.clone(),
        slot,
      }),
      None => Err(Error::NotFound(key)),
    }
  }

  /// Returns every indexed name containing `text`, sorted by id.
  ///
  /// Index keys are lowercase, and `text` is matched as given.
  pub fn search(&self, text: &str) -> Vec<Match> {
    let mut matches: Vec<_> = self
      .index
      .iter()
      .filter(|(name, _)| name.contains(text))
      .map(|(name, id)| Match {
        id: id.to_string(),
        name: name.to_string(),
      })
      .collect();
    matches.sort_by(|a, b| {
      a.number()
        .cmp(&b.number())
        .then_with(|| a.name.cmp(&b.name))
    });
    matches
  }

  /// Resolves `text` to a single National Dex number.
  ///
  /// Returns `None` if nothing matches. If the matches point at more than
  /// one species, `prompt` is asked until it answers with the id of one of
  /// them. Any listed id is accepted, with no upper bound from the number of
  /// cached records.
  pub fn resolve<P: Prompt>(
    &self,
    text: &str,
    prompt: &mut P,
  ) -> Result<Option<i64>, Error> {
    let matches = self.search(text);
    let first = match matches.first() {
      Some(m) => m.number(),
      None => return Ok(None),
    };
    if matches.iter().all(|m| m.number() == first) {
      return Ok(Some(first));
    }

    loop {
      match prompt.prompt_for_choice(&matches)? {
        Some(id) if id >= 1 && matches.iter().any(|m| m.number() == id) => {
          return Ok(Some(id))
        }
        choice => log::debug!("rejected choice {:?}", choice),
      }
    }
  }
}
