/// User intents produced by `input::map_event` and consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    NextPage,
    PrevPage,
    GoTop,
    GoBottom,
    /// Open the selected record's address through the platform opener.
    Activate,
    ToggleHelp,
    /// Close the topmost overlay (help), otherwise a no-op.
    NavigateBack,
    Resize(u16, u16),
    Tick,
    None,
}
