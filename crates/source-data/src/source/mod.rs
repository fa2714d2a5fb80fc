//! Dataset sources.
//!
//! This module contains:
//! - The `DataSource` trait every step of the fallback chain implements
//! - `RemoteSource`, reading from the repository's raw content host
//! - `LocalFileSource`, reading from the local data directory

mod local;
mod remote;
mod traits;

pub use local::LocalFileSource;
pub use remote::RemoteSource;
pub use traits::DataSource;

use crate::errors::SourceError;
use crate::models::RawRecord;

/// Decodes a dataset body. Anything other than a JSON array of objects is a
/// parse failure.
pub(crate) fn decode_records(resource: &str, body: &[u8]) -> Result<Vec<RawRecord>, SourceError> {
    serde_json::from_slice::<Vec<RawRecord>>(body)
        .map_err(|e| SourceError::parse(resource, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array_of_objects() {
        let records = decode_records(
            "hotels.json",
            br#"[{"name":"Al Waddan","city":"Tripoli","rating":5},{"name":"Uzu"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["city"], "Tripoli");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_records("hotels.json", br#"{"hotels":[]}"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_decode_rejects_scalar_items() {
        let err = decode_records("beaches.json", br#"[{"name":"A"}, 3]"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
