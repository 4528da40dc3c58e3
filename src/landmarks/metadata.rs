//! Specimen metadata encoded in landmark filenames
//!
//! Grammar of a filename stem, tokens separated by single spaces:
//!
//! ```text
//! <Info> <Culture> [<Time>[units]] [ignored...]
//! ```
//!
//! * `Info` is the embryonic stage, e.g. `E12.5`
//! * `Culture` is the protocol code; `Fix` marks a fixed specimen, `CulIk`
//!   the Ikemoto protocol and `Cul` the roller culture protocol
//! * `Time` is the culture time; letters are stripped and the rest must be a
//!   number. It may be omitted for fixed specimens, whose age is taken from a
//!   [`StageTable`] instead

use crate::io::configuration::{
    CULTURE_MARKER, DEFAULT_STAGE_HOURS, FIXED_MARKER, IKEMOTO_MARKER, IN_VIVO_GROUP,
};
use crate::io::error::{LandmarkError, Result, malformed_filename};
use std::collections::BTreeMap;
use std::fmt;

/// Experimental protocol derived from the culture token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CultureProtocol {
    /// Embryo fixed in vivo at the stage given by `Info`
    Fixed,
    /// Explant cultured with the Ikemoto protocol
    Ikemoto,
    /// Explant cultured with the default roller protocol
    Roller,
    /// Culture code not recognised
    Other,
}

impl CultureProtocol {
    /// Classify a culture token by its marker substrings
    pub fn classify(culture: &str) -> Self {
        if culture.contains(FIXED_MARKER) {
            Self::Fixed
        } else if culture.contains(IKEMOTO_MARKER) {
            Self::Ikemoto
        } else if culture.contains(CULTURE_MARKER) {
            Self::Roller
        } else {
            Self::Other
        }
    }

    /// Whether the specimen was fixed rather than cultured
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed)
    }

    /// Human readable protocol name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Ikemoto => "Ikemoto culture",
            Self::Roller => "roller culture",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CultureProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical age in hours for each stage label, used for fixed specimens
#[derive(Debug, Clone, PartialEq)]
pub struct StageTable {
    hours: BTreeMap<String, f64>,
}

impl Default for StageTable {
    fn default() -> Self {
        Self::from_entries(DEFAULT_STAGE_HOURS)
    }
}

impl StageTable {
    /// Create an empty stage table
    pub const fn empty() -> Self {
        Self {
            hours: BTreeMap::new(),
        }
    }

    /// Build a table from `(stage, hours)` entries; later entries win
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            hours: entries
                .into_iter()
                .map(|(stage, hours)| (stage.into(), hours))
                .collect(),
        }
    }

    /// Add or replace the age of a stage, returning the previous age
    pub fn insert(&mut self, stage: impl Into<String>, hours: f64) -> Option<f64> {
        self.hours.insert(stage.into(), hours)
    }

    /// Age in hours of `stage`, if the table knows it
    pub fn hours(&self, stage: &str) -> Option<f64> {
        self.hours.get(stage).copied()
    }

    /// Number of stages in the table
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether the table has no stages
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Iterate stages in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.hours.iter().map(|(stage, hours)| (stage.as_str(), *hours))
    }
}

/// Metadata parsed from a landmark filename stem
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    info: String,
    culture_condition: String,
    time_raw: Option<String>,
    time_hours: Option<f64>,
}

impl FileMetadata {
    /// Stage token, e.g. `E13.5`
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Culture token, e.g. `Cul`, `CulIk` or `Fix`
    pub fn culture_condition(&self) -> &str {
        &self.culture_condition
    }

    /// Time token as written in the filename
    pub fn time_raw(&self) -> Option<&str> {
        self.time_raw.as_deref()
    }

    /// Elapsed culture time, or developmental age for fixed specimens
    ///
    /// `None` only for fixed specimens whose stage is not in the stage table.
    pub const fn time_hours(&self) -> Option<f64> {
        self.time_hours
    }

    /// Protocol encoded by the culture token
    pub fn protocol(&self) -> CultureProtocol {
        CultureProtocol::classify(&self.culture_condition)
    }

    /// Whether the specimen was fixed in vivo
    pub fn is_fixed(&self) -> bool {
        self.protocol().is_fixed()
    }

    /// Time in hours, failing for fixed specimens of unknown stage
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::MissingLookup`] when no time could be derived
    pub fn require_time_hours(&self, file_id: &str) -> Result<f64> {
        self.time_hours.ok_or_else(|| LandmarkError::MissingLookup {
            file_id: file_id.to_string(),
            stage: self.info.clone(),
        })
    }

    /// Grouping label: `In vivo` for fixed specimens, else the stage prefix
    pub fn stage_group(&self) -> String {
        if self.is_fixed() {
            IN_VIVO_GROUP.to_string()
        } else {
            stage_prefix(&self.info).unwrap_or(&self.info).to_string()
        }
    }
}

/// Parse a filename stem using the built-in stage table
///
/// # Errors
///
/// Returns [`LandmarkError::MalformedFilename`] when the stem does not follow
/// the filename grammar
pub fn parse(file_id: &str) -> Result<FileMetadata> {
    parse_with(file_id, &StageTable::default())
}

/// Parse a filename stem, resolving fixed specimen ages through `stages`
///
/// # Errors
///
/// Returns [`LandmarkError::MalformedFilename`] when fewer than two tokens are
/// present, a cultured specimen has no time token, or the time token is not
/// numeric once letters are removed
pub fn parse_with(file_id: &str, stages: &StageTable) -> Result<FileMetadata> {
    let mut tokens = file_id.split(' ');

    let info = tokens
        .next()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| malformed_filename(file_id, &"missing stage token"))?;
    let culture = tokens
        .next()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            malformed_filename(file_id, &"expected '<Info> <Culture> <Time>' tokens")
        })?;
    let time_raw = tokens.next();

    let protocol = CultureProtocol::classify(culture);
    let parsed_time = match time_raw {
        Some(raw) => Some(parse_time_token(file_id, raw)?),
        None if protocol.is_fixed() => None,
        None => {
            return Err(malformed_filename(
                file_id,
                &"missing time token for cultured specimen",
            ));
        }
    };

    let time_hours = if protocol.is_fixed() {
        stages.hours(info)
    } else {
        parsed_time
    };

    Ok(FileMetadata {
        info: info.to_string(),
        culture_condition: culture.to_string(),
        time_raw: time_raw.map(str::to_string),
        time_hours,
    })
}

/// Strip unit letters from a time token and parse the remaining number
fn parse_time_token(file_id: &str, raw: &str) -> Result<f64> {
    let digits: String = raw.chars().filter(|c| !c.is_ascii_alphabetic()).collect();
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed_filename(
            file_id,
            &format!("time token '{raw}' is not numeric"),
        )),
    }
}

/// Leading `E<digits>[.<digits>]` stage label of an info token
pub fn stage_prefix(info: &str) -> Option<&str> {
    let rest = info.strip_prefix('E')?;
    let length = rest
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(rest.len(), |(index, _)| index);
    if length == 0 {
        return None;
    }
    info.get(..=length)
}
