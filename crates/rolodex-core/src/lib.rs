use serde::Deserialize;
use thiserror::Error;

pub mod dataset;
pub mod opener;
pub mod pager;

// Re-export for convenience
pub use dataset::{Dataset, RecordIssue, RejectedRecord};
pub use opener::{AddressOpener, RecordingOpener, SystemOpener};
pub use pager::{
    PAGE_SIZE, has_next, has_prev, next_page, page_label, page_rows, page_slice, prev_page,
    total_pages,
};

/// One directory entry: an organization name, where it is, and the address
/// (URL) the platform handler opens when the entry is activated.
///
/// Names are not guaranteed unique; row identity anywhere a list is rendered
/// is the record's global index paired with its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Address")]
    pub address: String,
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to hand an address to the platform opener. Local to the
/// triggering activation; never affects pagination state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not open {address:?}: {message}")]
pub struct OpenError {
    pub address: String,
    pub message: String,
}
