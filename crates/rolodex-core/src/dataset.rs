use std::path::Path;

use serde::Deserialize;

use crate::{DatasetError, Record};

/// JSON directory compiled into the binary; the default dataset provider.
static BUNDLED_JSON: &str = include_str!("../../../assets/data.json");

// ---------------------------------------------------------------------------
// Deserialization structs — raw on-disk record shape.
// All fields are Option so a malformed entry is flagged with a reason
// instead of failing the whole parse.
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Location")]
    location: Option<String>,
    #[serde(rename = "Address")]
    address: Option<String>,
}

/// Why a record failed schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIssue {
    MissingName,
    MissingLocation,
    MissingAddress,
}

impl RecordIssue {
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingName => "missing name",
            Self::MissingLocation => "missing location",
            Self::MissingAddress => "missing address",
        }
    }
}

/// An entry excluded at the load boundary, with its position in the source
/// file so it can be found and fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 0-based position in the source array.
    pub index: usize,
    pub issue: RecordIssue,
}

/// A loaded directory: the records that passed schema validation, plus the
/// entries that were flagged and excluded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedRecord>,
}

impl Dataset {
    /// Parse the compiled-in directory.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::parse(BUNDLED_JSON)
    }

    /// Parse a user-supplied directory file with the same schema.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read dataset file");
        Self::parse(&content)
    }

    fn parse(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();
        for (index, entry) in raw.into_iter().enumerate() {
            match validate(entry) {
                Ok(record) => records.push(record),
                Err(issue) => {
                    tracing::warn!(index, issue = issue.label(), "rejected record");
                    rejected.push(RejectedRecord { index, issue });
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            rejected = rejected.len(),
            "dataset parsed"
        );
        Ok(Self { records, rejected })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Apply the strict schema: every field present and non-blank after trim.
fn validate(raw: RawRecord) -> Result<Record, RecordIssue> {
    let name = required(raw.name).ok_or(RecordIssue::MissingName)?;
    let location = required(raw.location).ok_or(RecordIssue::MissingLocation)?;
    let address = required(raw.address).ok_or(RecordIssue::MissingAddress)?;
    Ok(Record {
        name,
        location,
        address,
    })
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_cleanly() {
        let dataset = Dataset::bundled().unwrap();
        assert!(!dataset.is_empty());
        assert!(dataset.rejected.is_empty());
    }

    #[test]
    fn valid_records_pass_validation() {
        let dataset = Dataset::parse(
            r#"[{"Name": "Noisebridge", "Location": "San Francisco, CA", "Address": "https://www.noisebridge.net"}]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].name, "Noisebridge");
        assert_eq!(dataset.records[0].location, "San Francisco, CA");
        assert_eq!(dataset.records[0].address, "https://www.noisebridge.net");
    }

    #[test]
    fn missing_field_is_flagged_not_dropped_silently() {
        let dataset = Dataset::parse(
            r#"[
                {"Name": "A", "Location": "B", "Address": "https://a.example"},
                {"Location": "Nowhere", "Address": "https://b.example"}
            ]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(
            dataset.rejected,
            vec![RejectedRecord {
                index: 1,
                issue: RecordIssue::MissingName
            }]
        );
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let dataset =
            Dataset::parse(r#"[{"Name": "A", "Location": "  ", "Address": "https://a.example"}]"#)
                .unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.rejected[0].issue, RecordIssue::MissingLocation);
    }

    #[test]
    fn name_is_checked_before_location_and_address() {
        let dataset = Dataset::parse(r#"[{}]"#).unwrap();
        assert_eq!(dataset.rejected[0].issue, RecordIssue::MissingName);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Dataset::parse("not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Dataset::from_path(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
