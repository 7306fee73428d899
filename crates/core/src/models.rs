pub mod appointment;
pub mod availability;

/// Serde adapter for the `HH:MM` wire format used for times of day.
///
/// Stored values may carry seconds (`HH:MM:SS`), so deserialization accepts
/// both forms; serialization always emits `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    /// Parses a time-of-day string in `HH:MM` or `HH:MM:SS` form.
    pub fn parse(s: &str) -> chrono::ParseResult<NaiveTime> {
        NaiveTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
    }
}
