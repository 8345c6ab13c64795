//! Keyboard rules for the dialog focus trap.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

/// What a keydown inside the dialog means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Tab(TabDirection),
    Close,
    Ignore,
}

#[must_use]
pub fn key_action(key: &str, shift: bool) -> KeyAction {
    match key {
        "Tab" if shift => KeyAction::Tab(TabDirection::Backward),
        "Tab" => KeyAction::Tab(TabDirection::Forward),
        "Escape" => KeyAction::Close,
        _ => KeyAction::Ignore,
    }
}

/// Index focus must jump to when tabbing out of either end of the dialog.
///
/// `None` means the browser's default tab order applies and the event must
/// not be cancelled.
#[must_use]
pub fn wrap_target(len: usize, active: Option<usize>, direction: TabDirection) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (direction, active?) {
        (TabDirection::Forward, idx) if idx == last => Some(0),
        (TabDirection::Backward, 0) => Some(last),
        _ => None,
    }
}
