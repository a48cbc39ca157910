//! Refreshing the cache from a remote [`Source`].

use std::collections::BTreeMap;
use std::io::Write;

use crate::api::Source;
use crate::model::Languages;
use crate::progress::Progress;
use crate::record::Kind;
use crate::record::Record;
use crate::record::SearchIndex;
use crate::store;
use crate::store::Files;
use crate::Error;

/// What a call to [`refresh()`] ended up doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
  /// The cache already held as many records as the remote catalog; nothing
  /// was fetched or written.
  UpToDate {
    /// Records in the cache.
    records: usize,
  },
  /// The cache was rebuilt.
  Refreshed {
    /// Records written.
    records: usize,
    /// Items that could not be fetched and were left out.
    skipped: usize,
  },
}

/// Options shared by every refresh in one invocation.
pub struct Refresh<'a> {
  /// The languages to keep.
  pub langs: &'a Languages,
  /// Where the cache lives.
  pub files: &'a Files,
  /// Whether to refetch even if the cache looks complete.
  pub force: bool,
}

/// Rebuilds the cache for `kind` from `source`.
///
/// Unless forced, nothing happens when the remote catalog has exactly as many
/// entries as the cache. Otherwise every entry is fetched in turn; entries
/// that fail are logged and skipped. The cache files are only written once
/// the whole catalog has been walked, and always replaced wholesale.
pub fn refresh<S: Source, W: Write>(
  source: &mut S,
  kind: Kind,
  opts: &Refresh,
  progress: &mut Progress<W>,
) -> Result<Outcome, Error> {
  let path = opts.files.records(kind);
  let cached = store::count(path);
  let remote = kind.count(source)?;
  if !opts.force && remote == cached {
    log::info!("{} already up to date ({} records)", kind, cached);
    return Ok(Outcome::UpToDate { records: cached });
  }

  let names = kind.names(source)?;
  log::info!("fetching {} {} (cached: {})", names.len(), kind, cached);
  progress.start(kind.to_string(), names.len());

  let mut records = BTreeMap::new();
  let mut index = SearchIndex::new();
  let mut skipped = 0;
  for name in &names {
    match kind.build(source, name, opts.langs) {
      Ok(record) => {
        if let Record::Species(species) = &record {
          index.add(species);
        }
        records.insert(record.key(), record);
      }
      Err(e) => {
        log::warn!("skipping {} {}: {}", kind, name, e);
        skipped += 1;
      }
    }
    progress.inc_completed(name);
  }
  progress.finish();

  store::save(path, &records)?;
  if kind == Kind::Species {
    store::save(&opts.files.index, &index)?;
    store::save(&opts.files.langs, opts.langs)?;
  }

  Ok(Outcome::Refreshed {
    records: records.len(),
    skipped,
  })
}
