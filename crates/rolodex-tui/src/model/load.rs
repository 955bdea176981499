/// Loading lifecycle of the directory.
///
/// `Loading` is the initial state; the one-shot dataset assignment moves it
/// to `Ready` or `Failed` and it never changes class again. Page changes are
/// ordinary state updates inside `Ready`, not transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading...",
            Self::Ready => "Ready",
            Self::Failed(_) => "Failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
