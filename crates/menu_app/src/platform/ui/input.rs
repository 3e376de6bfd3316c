use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu_core::{BrowseViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    MoveCursor(isize),
    Quit,
    Ignore,
}

/// Maps a key press to what the app should do, given what is on screen.
pub fn map_key(key: KeyEvent, view: &BrowseViewModel, cursor: usize) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if view.details.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::Dispatch(Msg::DetailsClosed),
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = view.search_query.clone();
            text.push(c);
            Action::Dispatch(Msg::SearchEdited(text))
        }
        KeyCode::Backspace => {
            let mut text = view.search_query.clone();
            if text.pop().is_none() {
                return Action::Ignore;
            }
            Action::Dispatch(Msg::SearchEdited(text))
        }
        KeyCode::Left => step_category(view, -1),
        KeyCode::Right => step_category(view, 1),
        KeyCode::Up => Action::MoveCursor(-1),
        KeyCode::Down => Action::MoveCursor(1),
        KeyCode::Enter => match view.cards.get(cursor) {
            Some(card) => Action::Dispatch(Msg::MealSelected {
                meal_id: card.id.clone(),
            }),
            None => Action::Ignore,
        },
        _ => Action::Ignore,
    }
}

fn step_category(view: &BrowseViewModel, step: isize) -> Action {
    let buttons = &view.category_buttons;
    if buttons.len() < 2 {
        return Action::Ignore;
    }
    let current = buttons.iter().position(|b| b.selected).unwrap_or(0);
    let next = (current as isize + step).rem_euclid(buttons.len() as isize) as usize;
    Action::Dispatch(Msg::CategorySelected(buttons[next].category.clone()))
}

/// Moves `cursor` by `delta`, staying inside `len` cards.
pub fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
