// synth-chat — Terminal chat panels for a synthesizer patch assistant
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::input::InputState;
use super::input_submit::submit_input;
use super::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub(super) fn dispatch_key(app: &mut App, key: KeyEvent) {
    if handle_always_allowed_shortcuts(app, key) {
        return;
    }
    if handle_global_shortcuts(app, key) {
        return;
    }
    match app.focus {
        Focus::ChatInput => handle_chat_input_key(app, key),
        Focus::SidePrompt => handle_side_prompt_key(app, key),
    }
}

fn handle_always_allowed_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'q') || is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return true;
    }
    false
}

/// Shortcuts that work regardless of which input has focus.
fn handle_global_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'l') {
        app.force_redraw = true;
        return true;
    }

    let page = app.scroll.visible_height().max(1);
    match (key.code, key.modifiers) {
        (KeyCode::Tab | KeyCode::BackTab, _) => app.cycle_focus(),
        (KeyCode::PageUp, _) => app.scroll.scroll_up(page),
        (KeyCode::PageDown, _) => app.scroll.scroll_down(page),
        (KeyCode::Up, m) if is_ctrl_shortcut(m) => app.scroll.scroll_up(1),
        (KeyCode::Down, m) if is_ctrl_shortcut(m) => app.scroll.scroll_down(1),
        (KeyCode::Home, m) if is_ctrl_shortcut(m) => app.scroll.scroll_to_top(),
        (KeyCode::End, m) if is_ctrl_shortcut(m) => app.scroll.scroll_to_bottom(),
        _ => return false,
    }
    true
}

fn handle_chat_input_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, m) if m.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            app.input.insert_newline();
        }
        (KeyCode::Enter, _) => submit_input(app),
        // A single-line input has nowhere to move vertically, so arrows scroll the list.
        (KeyCode::Up, KeyModifiers::NONE) if app.input.line_count() == 1 => {
            app.scroll.scroll_up(1);
        }
        (KeyCode::Down, KeyModifiers::NONE) if app.input.line_count() == 1 => {
            app.scroll.scroll_down(1);
        }
        _ => {
            handle_edit_key(&mut app.input, key);
        }
    }
}

fn handle_side_prompt_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 's') {
        app.side_panel.button_clicked();
        return;
    }
    match key.code {
        KeyCode::Enter => app.side_panel.prompt.insert_newline(),
        _ => {
            handle_edit_key(&mut app.side_panel.prompt, key);
        }
    }
}

/// Plain text editing shared by both inputs. Returns whether the key was consumed.
fn handle_edit_key(input: &mut InputState, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert_char(c);
        }
        (KeyCode::Backspace, _) => input.delete_char_before(),
        (KeyCode::Delete, _) => input.delete_char_after(),
        (KeyCode::Left, _) => input.move_left(),
        (KeyCode::Right, _) => input.move_right(),
        (KeyCode::Up, _) => input.move_up(),
        (KeyCode::Down, _) => input.move_down(),
        (KeyCode::Home, _) => input.move_home(),
        (KeyCode::End, _) => input.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::drain_panel_events;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        dispatch_key(app, KeyEvent::new(code, modifiers));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn enter_submits_chat_input() {
        let mut app = App::test_default();
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        drain_panel_events(&mut app);
        assert_eq!(app.messages.len(), 2);
        assert!(app.input.is_empty());
    }

    #[test]
    fn shift_enter_inserts_newline_in_chat() {
        let mut app = App::test_default();
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
        type_str(&mut app, "b");
        assert_eq!(app.input.text(), "a\nb");
        assert!(app.messages.is_empty());
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(app.input.is_empty());
    }

    #[test]
    fn enter_in_side_prompt_starts_new_line() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::SidePrompt);
        type_str(&mut app, "warm");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut app, "pad");
        assert_eq!(app.side_panel.prompt.text(), "warm\npad");
        assert!(app.input.is_empty());
    }

    #[test]
    fn ctrl_s_sends_side_prompt() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_str(&mut app, "wobbly bass");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        drain_panel_events(&mut app);
        assert_eq!(app.messages.get(0).map(|m| m.text.as_str()), Some("wobbly bass"));
        assert!(app.side_panel.prompt.is_empty());
    }

    #[test]
    fn arrows_scroll_when_input_is_single_line() {
        let mut app = App::test_default();
        app.sync_message_area(Rect::new(0, 0, 40, 5));
        for i in 0..4 {
            app.messages.push_user(format!("m{i}"));
        }
        app.update_message_display();
        let bottom = app.scroll.position();
        press(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.scroll.position(), bottom - 1);
        press(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.scroll.position(), bottom);
    }

    #[test]
    fn arrows_move_cursor_in_multiline_input() {
        let mut app = App::test_default();
        app.input.set_text("one\ntwo");
        press(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.input.cursor_row, 0);
    }

    #[test]
    fn page_and_ctrl_home_end_scroll() {
        let mut app = App::test_default();
        app.sync_message_area(Rect::new(0, 0, 40, 4));
        for i in 0..10 {
            app.messages.push_system(format!("line {i}"));
        }
        app.update_message_display();
        let max = app.scroll.max_position();

        press(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(app.scroll.position(), max - 4);
        press(&mut app, KeyCode::Home, KeyModifiers::CONTROL);
        assert_eq!(app.scroll.position(), 0);
        press(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.scroll.position(), 4);
        press(&mut app, KeyCode::End, KeyModifiers::CONTROL);
        assert_eq!(app.scroll.position(), max);
    }

    #[test]
    fn ctrl_l_requests_redraw() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(app.force_redraw);
    }
}
