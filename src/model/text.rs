//! Localization structures.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::model::resource::Resource;

/// A language that text can be localized for.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language {
  /// This language's numeric ID.
  pub id: u32,
  /// This language's API name, such as `en` or `ja-Hrkt`.
  pub name: String,
}

/// Localized text.
///
/// PokéAPI names the text field differently depending on what is being
/// localized (`name`, `description`, `genus`...); this struct accepts all of
/// them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Text {
  /// The localized text.
  #[serde(alias = "name")]
  #[serde(alias = "description")]
  #[serde(alias = "genus")]
  pub text: String,

  /// The language this localization is for.
  pub language: Resource<Language>,
}

/// A collection of localized text for some resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized {
  texts: Vec<Text>,
}

impl Localized {
  /// Returns an iterator over all localizations.
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = &Text> + '_ {
    self.texts.iter()
  }

  /// Keeps only the localizations in `langs`, keyed by language code.
  ///
  /// Languages with no localization are simply absent from the result.
  pub fn select(&self, langs: &Languages) -> BTreeMap<String, String> {
    self
      .iter()
      .filter(|text| langs.contains(text.language.key()))
      .map(|text| (text.language.key().to_string(), text.text.clone()))
      .collect()
  }
}

impl From<Vec<Text>> for Localized {
  fn from(texts: Vec<Text>) -> Self {
    Self { texts }
  }
}

/// The set of language codes a refresh keeps.
///
/// This is decided once, on the command line, and passed down to everything
/// that filters localized text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Languages(Vec<String>);

impl Languages {
  /// Creates a language set from a list of codes, dropping duplicates.
  pub fn new<I, S>(codes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut langs = Vec::new();
    for code in codes {
      let code = code.into();
      if !code.is_empty() && !langs.contains(&code) {
        langs.push(code);
      }
    }
    Self(langs)
  }

  /// Returns whether `code` is one of the wanted languages.
  pub fn contains(&self, code: &str) -> bool {
    self.0.iter().any(|c| c == code)
  }

  /// Returns the codes in the order they were given.
  pub fn codes(&self) -> &[String] {
    &self.0
  }

  /// Returns whether both sets hold the same codes, in any order.
  pub fn same_codes(&self, other: &Languages) -> bool {
    self.0.len() == other.0.len() && self.0.iter().all(|c| other.contains(c))
  }
}

impl Default for Languages {
  fn default() -> Self {
    Self::new(["en", "fr"])
  }
}

impl fmt::Display for Languages {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0.join(","))
  }
}
