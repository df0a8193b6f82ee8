pub mod vendor;
pub mod product;
pub mod service;

use chrono::NaiveDateTime;
use serde::Serializer;

/// The text form SQLite's `CURRENT_TIMESTAMP` stores, e.g. `2024-05-01 09:30:00`.
pub const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Serializes stored timestamps in the same form SQLite keeps them.
pub fn sqlite_timestamp<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.collect_str(&ts.format(SQLITE_TIMESTAMP)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Stamped {
        #[serde(serialize_with = "sqlite_timestamp")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn timestamps_use_sqlite_text_form() {
        let at = NaiveDateTime::parse_from_str("2024-05-01 09:30:00", SQLITE_TIMESTAMP).unwrap();
        let json = serde_json::to_value(Stamped { at: Some(at) }).unwrap();
        assert_eq!(json["at"], "2024-05-01 09:30:00");

        let json = serde_json::to_value(Stamped { at: None }).unwrap();
        assert!(json["at"].is_null());
    }
}
