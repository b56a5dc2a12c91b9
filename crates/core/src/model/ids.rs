use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a Phase
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseId(u32);

impl PhaseId {
    /// Creates a new `PhaseId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Unique identifier for a Day within a phase
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(u32);

impl DayId {
    /// Creates a new `DayId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

impl fmt::Debug for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayId({})", self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured identity of a single trackable activity.
///
/// The key addresses one activity as `(phase, day, index)` where `index` is
/// the position of the activity within its day. The canonical string form is
/// `p<phase>-d<day>-a<index>`, e.g. `p2-d14-a0`.
///
/// Earlier prototypes attributed completions to phases by checking whether a
/// raw id string started with `p<phase>`, which conflates phase 1 with phase
/// 10. Keys are parsed as three delimited segments, so attribution is exact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivityKey {
    pub phase: PhaseId,
    pub day: DayId,
    pub index: u32,
}

impl ActivityKey {
    #[must_use]
    pub fn new(phase: PhaseId, day: DayId, index: u32) -> Self {
        Self { phase, day, index }
    }
}

impl fmt::Debug for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityKey({self})")
    }
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}-d{}-a{}", self.phase, self.day, self.index)
    }
}

/// Error type for parsing an `ActivityKey` from its string form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseKeyError {
    #[error("activity key must have the form p<phase>-d<day>-a<index>")]
    Malformed,
    #[error("activity key segment {segment} is not a number")]
    InvalidNumber { segment: &'static str },
}

fn parse_segment(raw: Option<&str>, prefix: &str, name: &'static str) -> Result<u32, ParseKeyError> {
    let raw = raw.ok_or(ParseKeyError::Malformed)?;
    let digits = raw.strip_prefix(prefix).ok_or(ParseKeyError::Malformed)?;
    if digits.is_empty() {
        return Err(ParseKeyError::Malformed);
    }
    digits
        .parse::<u32>()
        .map_err(|_| ParseKeyError::InvalidNumber { segment: name })
}

impl FromStr for ActivityKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('-');
        let phase = parse_segment(segments.next(), "p", "phase")?;
        let day = parse_segment(segments.next(), "d", "day")?;
        let index = parse_segment(segments.next(), "a", "index")?;
        if segments.next().is_some() {
            return Err(ParseKeyError::Malformed);
        }
        Ok(Self::new(PhaseId::new(phase), DayId::new(day), index))
    }
}
