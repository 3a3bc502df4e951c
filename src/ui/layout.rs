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

use crate::app::PanelMode;
use ratatui::layout::{Constraint, Layout, Rect};

/// Border plus one column of breathing room on each side of a panel.
const PANEL_PAD_X: u16 = 2;
const PANEL_PAD_Y: u16 = 1;
const TITLE_HEIGHT: u16 = 1;
const GAP: u16 = 1;
pub const SCROLLBAR_WIDTH: u16 = 1;
pub const SEND_BUTTON_WIDTH: u16 = 8;
pub const BUTTON_HEIGHT: u16 = 3;
pub const MIN_INPUT_HEIGHT: u16 = 3;
pub const MAX_INPUT_HEIGHT: u16 = 8;
pub const SIDE_PROMPT_HEIGHT: u16 = 6;
/// Below this height the key-hint footer is dropped.
const FOOTER_MIN_SCREEN_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub side: Option<Rect>,
    pub chat: Option<Rect>,
    pub footer: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatPanelLayout {
    pub frame: Rect,
    pub title: Rect,
    /// Where bubbles are drawn; its width drives the message layout.
    pub messages: Rect,
    pub scrollbar: Rect,
    pub input: Rect,
    pub send_button: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidePanelLayout {
    pub frame: Rect,
    pub title: Rect,
    pub prompt: Rect,
    pub send_button: Rect,
}

/// Split the terminal between the docked side panel and the chat panel.
pub fn screen(area: Rect, mode: PanelMode, side_width: u16) -> ScreenLayout {
    let (body, footer) = if area.height >= FOOTER_MIN_SCREEN_HEIGHT {
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        (body, Some(footer))
    } else {
        (area, None)
    };

    match mode {
        PanelMode::Chat => ScreenLayout { side: None, chat: Some(body), footer },
        PanelMode::Side => {
            let [side, _] = Layout::horizontal([Constraint::Length(side_width), Constraint::Min(0)])
                .areas(body);
            ScreenLayout { side: Some(side), chat: None, footer }
        }
        PanelMode::Both => {
            // Never let the dock take more than half of the screen.
            let width = side_width.min(body.width / 2);
            let [side, chat] =
                Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(body);
            ScreenLayout { side: Some(side), chat: Some(chat), footer }
        }
    }
}

/// Chat panel: title on top, the message list with a scrollbar on its right,
/// and the input box with the Send button at the bottom.
pub fn chat_panel(area: Rect, input_height: u16) -> ChatPanelLayout {
    let inner = panel_inner(area);
    let input_height = input_height.clamp(MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT);

    let [title, _, body, _, input_row] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(GAP),
        Constraint::Min(0),
        Constraint::Length(GAP),
        Constraint::Length(input_height),
    ])
    .areas(inner);

    let [messages, scrollbar] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SCROLLBAR_WIDTH)]).areas(body);

    let [input, _, send_column] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GAP),
        Constraint::Length(SEND_BUTTON_WIDTH),
    ])
    .areas(input_row);

    ChatPanelLayout {
        frame: area,
        title,
        messages,
        scrollbar,
        input,
        send_button: center_vertically(send_column, BUTTON_HEIGHT),
    }
}

/// Width of the chat input box for a chat panel occupying `area`.
pub fn chat_input_width(area: Rect) -> u16 {
    chat_panel(area, MIN_INPUT_HEIGHT).input.width
}

/// Side panel: title on top, the prompt editor directly above a full-width SEND button.
pub fn side_panel(area: Rect) -> SidePanelLayout {
    let inner = panel_inner(area);
    let [title, _, prompt, _, send_button] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(SIDE_PROMPT_HEIGHT),
        Constraint::Length(GAP),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(inner);

    SidePanelLayout { frame: area, title, prompt, send_button }
}

fn panel_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(PANEL_PAD_X).min(area.right()),
        y: area.y.saturating_add(PANEL_PAD_Y).min(area.bottom()),
        width: area.width.saturating_sub(PANEL_PAD_X * 2),
        height: area.height.saturating_sub(PANEL_PAD_Y * 2),
    }
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect { y: area.y + (area.height - height) / 2, height, ..area }
}
