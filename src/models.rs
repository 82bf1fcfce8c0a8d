use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name block of a REST Countries v3.1 object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// Flag image URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// Raw country object as returned by the `name/{prefix}` endpoint when
/// requesting the `name,capital,population,flags,languages` field subset.
///
/// The API encodes `capital` as an **array** of strings (empty or absent for
/// some territories) and omits `languages` entirely for a handful of entries.
/// Accept both and normalize in [`Country`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    pub flags: Flags,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

/// Tidy country record used by this crate (one value = one country).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub common_name: String,
    /// First listed capital; `None` for territories without one.
    pub capital: Option<String>,
    pub population: u64,
    pub flag_url: String,
    /// Language code → display name. BTreeMap keeps the joined display
    /// order deterministic.
    pub languages: BTreeMap<String, String>,
}

impl Country {
    /// Comma-joined language names, e.g. `"French, German"`.
    pub fn language_names(&self) -> String {
        self.languages
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let flag_url = raw.flags.svg.or(raw.flags.png).unwrap_or_default();
        Self {
            common_name: raw.name.common,
            capital: raw.capital.into_iter().next(),
            population: raw.population,
            flag_url,
            languages: raw.languages,
        }
    }
}

/// A trimmed search query, created once per input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Empty queries short-circuit upstream; no request is ever built from one.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
