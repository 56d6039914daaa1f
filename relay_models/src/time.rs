use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SUFFIX: &str = " UTC";

/// A point in time rendered with second precision and a trailing ` UTC`
/// marker, e.g. `2024-07-01T13:37:42 UTC`.
///
/// Sub-second fractions are truncated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTimestamp(DateTime<Utc>);

impl UtcTimestamp {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self(time.trunc_subsecs(0))
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for UtcTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SUFFIX}", self.0.format(FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid UTC timestamp: {0:?}")]
pub struct ParseUtcTimestampError(String);

impl FromStr for UtcTimestamp {
    type Err = ParseUtcTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix(SUFFIX)
            .and_then(|s| NaiveDateTime::parse_from_str(s, FORMAT).ok())
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ParseUtcTimestampError(s.into()))
    }
}

impl Serialize for UtcTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UtcTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
