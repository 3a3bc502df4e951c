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

mod button;
mod chat;
mod header;
mod input;
pub mod layout;
mod message;
mod side_panel;
pub mod theme;

use crate::app::{App, Focus, PanelMode, RenderedAreas};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, app: &mut App) {
    let screen = layout::screen(frame.area(), app.panel_mode, app.side_width);
    // Mouse routing must never see a panel that is not on screen this frame.
    app.rendered = RenderedAreas::default();

    if let Some(area) = screen.side {
        side_panel::render(frame, area, app);
    }
    if let Some(area) = screen.chat {
        chat::render(frame, area, app);
    }
    if let Some(area) = screen.footer {
        render_footer(frame, area, app);
    }
}

/// Outer frame shared by both panels.
fn panel_block(focused: bool) -> Block<'static> {
    let color = if focused { theme::ACCENT } else { theme::DIM };
    Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(color))
}

const FOOTER_PAD: u16 = 2;

fn footer_hint(app: &App) -> &'static str {
    match (app.panel_mode, app.focus) {
        (PanelMode::Chat, _) => "Enter send | Shift+Enter newline | PgUp/PgDn scroll | Ctrl+Q quit",
        (PanelMode::Side, _) => "Enter newline | Ctrl+S send | Ctrl+Q quit",
        (PanelMode::Both, Focus::ChatInput) => {
            "Enter send | Shift+Enter newline | Tab prompt | PgUp/PgDn scroll | Ctrl+Q quit"
        }
        (PanelMode::Both, Focus::SidePrompt) => {
            "Enter newline | Ctrl+S send | Tab chat | PgUp/PgDn scroll | Ctrl+Q quit"
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD.min(area.width),
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        ..area
    };
    let Some(text) = fit_to_width(footer_hint(app), usize::from(padded.width)) else {
        return;
    };
    let line = Line::from(Span::styled(text, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), padded);
}

/// Truncate `text` to `max_width` display columns, ending in `...` when cut.
fn fit_to_width(text: &str, max_width: usize) -> Option<String> {
    if max_width == 0 || text.trim().is_empty() {
        return None;
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return Some(text.to_owned());
    }
    if max_width <= 3 {
        return Some(".".repeat(max_width));
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 3 > max_width {
            break;
        }
        fitted.push(ch);
        width += ch_width;
    }
    fitted.push_str("...");
    Some(fitted)
}

#[cfg(test)]
fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf.cell((x, y)).map_or(" ", ratatui::buffer::Cell::symbol))
                .collect()
        })
        .collect()
}
