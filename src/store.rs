//! On-disk JSON cache files.
//!
//! Every collection lives in its own JSON document and is always rewritten
//! whole. Reads are forgiving: a file that is missing or cannot be parsed is
//! treated as empty, as on a first run.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::record::Kind;

/// A cache write error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error("could not write {}: {source}", .path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("could not encode {}: {source}", .path.display())]
  Json {
    path: PathBuf,
    source: serde_json::Error,
  },
}

/// Where each cache file lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Files {
  /// Species records, keyed by National Dex number.
  pub data: PathBuf,
  /// The name search index.
  pub index: PathBuf,
  /// The languages the species cache was built with.
  pub langs: PathBuf,
  /// Pokedex records.
  pub pokedexes: PathBuf,
  /// Version group records.
  pub version_groups: PathBuf,
  /// Location area records.
  pub locations: PathBuf,
}

impl Files {
  /// Lays out the default file names under `dir`.
  pub fn in_dir(dir: impl AsRef<Path>) -> Self {
    let dir = dir.as_ref();
    Self {
      data: dir.join("data.json"),
      index: dir.join("index.json"),
      langs: dir.join("langs.json"),
      pokedexes: dir.join("pokedex.json"),
      version_groups: dir.join("version_groups.json"),
      locations: dir.join("locations.json"),
    }
  }

  /// The default cache directory: `pokenat` under the platform's local data
  /// directory, or the working directory if there is none.
  pub fn default_dir() -> PathBuf {
    match dirs::data_local_dir() {
      Some(dir) => dir.join("pokenat"),
      None => PathBuf::from("."),
    }
  }

  /// The file holding the records of `kind`.
  pub fn records(&self, kind: Kind) -> &Path {
    match kind {
      Kind::Species => &self.data,
      Kind::Pokedex => &self.pokedexes,
      Kind::VersionGroup => &self.version_groups,
      Kind::LocationArea => &self.locations,
    }
  }
}

impl Default for Files {
  fn default() -> Self {
    Self::in_dir(Self::default_dir())
  }
}

/// Reads a cached collection, or `T::default()` if there is nothing usable
/// at `path`.
pub fn load<T: DeserializeOwned + Default>(path: &Path) -> T {
  let buf = match fs::read(path) {
    Ok(buf) => buf,
    Err(e) => {
      log::debug!("no cache at {}: {}", path.display(), e);
      return T::default();
    }
  };

  match serde_json::from_slice(&buf) {
    Ok(val) => val,
    Err(e) => {
      log::warn!("ignoring unreadable cache {}: {}", path.display(), e);
      T::default()
    }
  }
}

/// Writes `val` to `path` as pretty-printed JSON, replacing whatever was
/// there. Parent directories are created as needed.
pub fn save<T: Serialize + ?Sized>(path: &Path, val: &T) -> Result<(), Error> {
  let io_err = |source| Error::Io {
    path: path.to_path_buf(),
    source,
  };

  let mut buf = serde_json::to_vec_pretty(val).map_err(|source| Error::Json {
    path: path.to_path_buf(),
    source,
  })?;
  buf.push(b'\n');

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent).map_err(io_err)?;
    }
  }
  fs::write(path, buf).map_err(io_err)?;
  log::debug!("wrote {}", path.display());
  Ok(())
}

/// Returns the number of records in the collection at `path`; zero if there
/// is no usable cache.
pub fn count(path: &Path) -> usize {
  load::<BTreeMap<String, serde_json::Value>>(path).len()
}
