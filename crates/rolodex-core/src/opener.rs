//! The seam between the directory and the platform's URL handler.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::OpenError;

/// Hands an address string to the platform's address-resolution mechanism.
///
/// Injected into anything that activates records so tests can substitute a
/// recording double for the real handler.
pub trait AddressOpener {
    /// Attempt to open `address`, unmodified. Completion of the spawned
    /// handler is not awaited; only the handoff itself can fail.
    fn open(&self, address: &str) -> Result<(), OpenError>;
}

impl<O: AddressOpener + ?Sized> AddressOpener for std::sync::Arc<O> {
    fn open(&self, address: &str) -> Result<(), OpenError> {
        (**self).open(address)
    }
}

/// Production opener backed by the `webbrowser` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl AddressOpener for SystemOpener {
    fn open(&self, address: &str) -> Result<(), OpenError> {
        if address.trim().is_empty() {
            return Err(OpenError {
                address: address.to_string(),
                message: "address is empty".to_string(),
            });
        }
        webbrowser::open(address).map_err(|e| {
            tracing::warn!(address, error = %e, "platform opener rejected address");
            OpenError {
                address: address.to_string(),
                message: e.to_string(),
            }
        })?;
        tracing::debug!(address, "handed address to platform opener");
        Ok(())
    }
}

/// A hand-rolled opener for tests: records every address it is asked to
/// open and can be configured to fail.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
    fail_with: Option<String>,
    call_count: AtomicUsize,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Addresses successfully "opened" so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Total calls, successful or not.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl AddressOpener for RecordingOpener {
    fn open(&self, address: &str) -> Result<(), OpenError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(OpenError {
                address: address.to_string(),
                message: message.clone(),
            });
        }
        self.opened.lock().unwrap().push(address.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_opener_rejects_empty_address() {
        let err = SystemOpener.open("").unwrap_err();
        assert_eq!(err.address, "");
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn recording_opener_captures_exact_address() {
        let opener = RecordingOpener::new();
        opener.open("https://example.com").unwrap();
        assert_eq!(opener.opened(), vec!["https://example.com"]);
        assert_eq!(opener.call_count(), 1);
    }

    #[test]
    fn failing_opener_reports_error_and_counts_the_call() {
        let opener = RecordingOpener::failing("no handler");
        let err = opener.open("https://example.com").unwrap_err();
        assert_eq!(err.message, "no handler");
        assert_eq!(opener.call_count(), 1);
        assert!(opener.opened().is_empty());
    }
}
