use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Escape,
    OutsidePointer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    Open,
    Dismiss(DismissReason),
    /// Pointer-down or touch-start. Dismisses only when outside the overlay.
    PointerDown { inside: bool },
    Insert(char),
    Backspace,
    /// Apply the typed text to the results, if nothing was typed since.
    Commit { revision: u64 },
    SelectNext { result_count: usize },
    SelectPrevious { result_count: usize },
}

impl Intent for SearchIntent {}
