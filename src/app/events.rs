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

use super::input_submit::submit_input;
use super::keys::dispatch_key;
use super::{App, Focus};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => dispatch_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => app.focused_input_mut().insert_str(&text),
        // Resize is picked up by the next render through `sync_message_area`.
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    let lines = isize::try_from(app.scroll_lines).unwrap_or(isize::MAX);
    match mouse.kind {
        MouseEventKind::ScrollUp if in_message_area(app, pos) => app.scroll.scroll_by(-lines),
        MouseEventKind::ScrollDown if in_message_area(app, pos) => app.scroll.scroll_by(lines),
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(app, pos),
        MouseEventKind::Drag(MouseButton::Left) if app.scrollbar_dragging => {
            jump_to_scrollbar_row(app, pos);
        }
        MouseEventKind::Up(MouseButton::Left) => app.scrollbar_dragging = false,
        _ => {}
    }
}

fn in_message_area(app: &App, pos: Position) -> bool {
    app.rendered.chat.is_some_and(|chat| chat.messages.contains(pos))
}

fn handle_left_click(app: &mut App, pos: Position) {
    if let Some(chat) = app.rendered.chat {
        if chat.send_button.contains(pos) {
            app.focus = Focus::ChatInput;
            submit_input(app);
            return;
        }
        if chat.scrollbar.contains(pos) {
            app.scrollbar_dragging = true;
            jump_to_scrollbar_row(app, pos);
            return;
        }
        if chat.input.contains(pos) {
            app.focus = Focus::ChatInput;
            return;
        }
    }
    if let Some(side) = app.rendered.side {
        if side.send_button.contains(pos) {
            app.focus = Focus::SidePrompt;
            app.side_panel.button_clicked();
            return;
        }
        if side.prompt.contains(pos) {
            app.focus = Focus::SidePrompt;
        }
    }
}

fn jump_to_scrollbar_row(app: &mut App, pos: Position) {
    let Some(chat) = app.rendered.chat else {
        return;
    };
    let track = chat.scrollbar;
    let row = pos.y.saturating_sub(track.y);
    let target = app.scroll.position_for_track_row(row, track.height);
    app.scroll.set_position(target);
}
