use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Tab};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextTab,
    PrevTab,
    GoToTab(Tab),
    Select,
    ToggleAddon,
    MoreDays,
    FewerDays,
    CycleCoupon,
    StartSearch,
    ClearFilter,
    // Search input
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_input_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
            Action::ScrollHalfPageDown
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
            Action::ScrollHalfPageUp
        }

        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), _) => Action::JumpToBottom,

        (KeyCode::Tab, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::BackTab, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevTab,
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            Action::GoToTab(Tab::ALL[index])
        }

        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Char(' '), _) if app.tab == Tab::Trips => Action::ToggleAddon,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) if app.tab == Tab::Trips => {
            Action::MoreDays
        }
        (KeyCode::Char('-'), _) if app.tab == Tab::Trips => Action::FewerDays,
        (KeyCode::Char('c'), KeyModifiers::NONE) if app.tab == Tab::Trips => Action::CycleCoupon,

        (KeyCode::Char('/'), _) => Action::StartSearch,
        (KeyCode::Esc, _) => Action::ClearFilter,

        _ => Action::None,
    }
}

/// Handle keys while typing a search query
fn handle_input_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

/// Apply an action to the application state
pub fn apply_action(app: &mut App, action: Action, viewport_height: u16) {
    let half_page = (viewport_height / 2).max(1) as usize;

    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.quit(),
        Action::MoveDown => app.move_down(1),
        Action::MoveUp => app.move_up(1),
        Action::ScrollHalfPageDown => app.move_down(half_page),
        Action::ScrollHalfPageUp => app.move_up(half_page),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextTab => app.next_tab(),
        Action::PrevTab => app.prev_tab(),
        Action::GoToTab(tab) => app.switch_tab(tab),
        Action::Select => app.select(),
        Action::ToggleAddon => app.toggle_addon(),
        Action::MoreDays => app.change_days(1),
        Action::FewerDays => app.change_days(-1),
        Action::CycleCoupon => app.cycle_coupon(),
        Action::StartSearch => app.start_search(),
        Action::ClearFilter => app.clear_filter(),
        Action::Confirm => app.confirm_search(),
        Action::Cancel => app.cancel_search(),
        Action::InputChar(c) => app.search_input(c),
        Action::Backspace => app.search_backspace(),
        Action::None => {}
    }
}
