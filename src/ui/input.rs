use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key event to the active screen.
///
/// Global bindings (quit, screen switching) win over screen-local ones;
/// text screens keep printable characters for themselves, so the number
/// shortcuts only work where nothing accepts text.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_screen();
            return;
        }
        KeyCode::BackTab => {
            app.prev_screen();
            return;
        }
        KeyCode::Esc => {
            app.goto(Screen::Home);
            return;
        }
        _ => {}
    }

    match app.screen() {
        Screen::Home => digit_nav(app, key),
        Screen::Catalog => match key.code {
            KeyCode::Up => app.catalog_move_up(),
            KeyCode::Down => app.catalog_move_down(),
            KeyCode::Enter | KeyCode::Char('a') => app.add_selected_to_cart(),
            KeyCode::Char('r') => app.retry_catalog(),
            _ => digit_nav(app, key),
        },
        Screen::NewProduct => match key.code {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Backspace => app.form_backspace(),
            KeyCode::Up => app.form_focus_prev(),
            KeyCode::Down => app.form_focus_next(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.form_edit(ch)
            }
            _ => {}
        },
        Screen::Removals => match key.code {
            KeyCode::Enter | KeyCode::Char('d') => app.begin_removal(),
            _ => digit_nav(app, key),
        },
        Screen::Search => match key.code {
            KeyCode::Backspace => app.search_pop(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_push(ch)
            }
            _ => {}
        },
        Screen::Showcase => match key.code {
            KeyCode::Char('n') | KeyCode::Right => app.advance_showcase(),
            KeyCode::Char('r') => app.reload_showcase(),
            _ => digit_nav(app, key),
        },
    }
}

/// Number keys jump straight to a screen on non-text screens.
fn digit_nav(app: &mut App, key: KeyEvent) {
    let KeyCode::Char(ch) = key.code else {
        return;
    };
    let Some(digit) = ch.to_digit(10) else {
        return;
    };
    let idx = digit as usize;
    if (1..=Screen::ALL.len()).contains(&idx) {
        app.goto(Screen::ALL[idx - 1]);
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn digits_switch_screens_on_home() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.screen(), Screen::Removals);
    }

    #[test]
    fn digits_are_text_on_the_search_screen() {
        let mut app = make_app();
        app.goto(Screen::Search);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.screen(), Screen::Search);
        assert_eq!(app.search().query, "2");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = ctrl('q');
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
