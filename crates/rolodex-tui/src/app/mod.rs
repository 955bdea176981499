mod update;

use rolodex_core::{AddressOpener, Dataset, DatasetError, Record, pager};

use crate::model::load::LoadState;
use crate::model::notice::Notice;
use crate::theme::Theme;

/// Main application state.
pub struct App {
    /// The directory, assigned once by `apply_load` and immutable after.
    pub records: Vec<Record>,
    /// Entries the loader flagged and excluded (shown in the footer).
    pub rejected: usize,
    pub load: LoadState,
    /// Current page index, 0-based.
    pub page: usize,
    /// Selected row within the visible page.
    pub cursor: usize,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    pub notice: Option<Notice>,
    opener: Box<dyn AddressOpener>,
}

impl App {
    pub fn new(theme: Theme, opener: Box<dyn AddressOpener>) -> Self {
        Self {
            records: Vec::new(),
            rejected: 0,
            load: LoadState::Loading,
            page: 0,
            cursor: 0,
            tick: 0,
            theme,
            should_quit: false,
            show_help: false,
            notice: None,
            opener,
        }
    }

    /// The one-shot dataset assignment: `Loading → Ready | Failed`.
    pub fn apply_load(&mut self, result: Result<Dataset, DatasetError>) {
        match result {
            Ok(dataset) => {
                tracing::debug!(
                    records = dataset.records.len(),
                    rejected = dataset.rejected.len(),
                    "dataset ready"
                );
                self.rejected = dataset.rejected.len();
                self.records = dataset.records;
                self.load = LoadState::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "dataset load failed");
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Rows on the current page (at most `PAGE_SIZE`, fewer on the last).
    pub fn visible_len(&self) -> usize {
        pager::page_slice(&self.records, self.page, pager::PAGE_SIZE).len()
    }

    /// The record under the cursor, with its global index.
    pub fn selected(&self) -> Option<(usize, &Record)> {
        pager::page_rows(&self.records, self.page, pager::PAGE_SIZE).nth(self.cursor)
    }

    pub fn page_label(&self) -> String {
        pager::page_label(self.page, self.records.len(), pager::PAGE_SIZE)
    }

    pub fn has_next(&self) -> bool {
        pager::has_next(self.page, self.records.len(), pager::PAGE_SIZE)
    }

    pub fn has_prev(&self) -> bool {
        pager::has_prev(self.page)
    }

    // update() is in update.rs

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();
        // Clone load to avoid borrow conflict with &mut self
        let load = self.load.clone();
        match load {
            LoadState::Loading => {
                crate::view::loading::render(f, &self.theme, self.tick);
                return;
            }
            LoadState::Failed(message) => {
                crate::view::error::render(f, &self.theme, &message);
            }
            LoadState::Ready => {
                crate::view::directory::render_in(f, self, area);
            }
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}
