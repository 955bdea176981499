use rolodex_core::pager;

use super::App;
use crate::action::Action;
use crate::model::notice::Notice;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay intercepts everything except quit and ticks
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => self.on_tick(),
            Action::ToggleHelp => self.show_help = true,
            Action::Resize(_, _) | Action::NavigateBack | Action::None => {}
            // Everything below acts on the directory; inert until Ready
            _ if !self.load.is_ready() => {}
            Action::MoveDown => {
                let last_row = self.visible_len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last_row);
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::NextPage => {
                self.go_to_page(pager::next_page(
                    self.page,
                    self.records.len(),
                    pager::PAGE_SIZE,
                ));
            }
            Action::PrevPage => {
                self.go_to_page(pager::prev_page(self.page));
            }
            Action::GoTop => self.go_to_page(0),
            Action::GoBottom => {
                let last = pager::total_pages(self.records.len(), pager::PAGE_SIZE).max(1) - 1;
                self.go_to_page(last);
            }
            Action::Activate => self.activate_selected(),
        }
        false
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.notice.as_ref().is_some_and(|n| n.is_expired(self.tick)) {
            self.notice = None;
        }
    }

    /// Change page and reset the row cursor; no-op when already there.
    fn go_to_page(&mut self, page: usize) {
        if page != self.page {
            tracing::debug!(from = self.page, to = page, "page change");
            self.page = page;
            self.cursor = 0;
        }
    }

    fn activate_selected(&mut self) {
        let Some((index, record)) = self.selected() else {
            return;
        };
        let name = record.name.clone();
        let address = record.address.clone();
        tracing::debug!(index, name = %name, address = %address, "activating record");

        match self.opener.open(&address) {
            Ok(()) => {
                self.notice = Some(Notice::info(format!("Opened {name}"), self.tick));
            }
            Err(err) => {
                self.notice = Some(Notice::error(
                    format!("Failed to open {name}: {}", err.message),
                    self.tick,
                ));
            }
        }
    }
}
