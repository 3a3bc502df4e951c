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

use crate::app::InputState;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

/// Border plus one column of padding on each side.
pub const INPUT_CHROME_X: u16 = 4;
pub const INPUT_CHROME_Y: u16 = 2;

pub const CHAT_INPUT_PLACEHOLDER: &str = "Type a message...";

/// Input text broken into display rows, plus where the cursor lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedInput {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

/// Hard-wrap every logical line at `width` display columns.
///
/// A cursor sitting at the end of a full row moves to a fresh row below it,
/// so it is always drawn inside the box.
pub fn wrap(input: &InputState, width: u16) -> WrappedInput {
    let width = usize::from(width.max(1));
    let mut rows = Vec::with_capacity(input.lines.len());
    let mut cursor = (0, 0);

    for (line_idx, line) in input.lines.iter().enumerate() {
        let on_cursor_line = line_idx == input.cursor_row;
        let mut row = String::new();
        let mut row_width = 0;
        for (char_idx, ch) in line.chars().enumerate() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if row_width > 0 && row_width + ch_width > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if on_cursor_line && char_idx == input.cursor_col {
                cursor = (rows.len(), row_width);
            }
            row.push(ch);
            row_width += ch_width;
        }
        if on_cursor_line && input.cursor_col >= line.chars().count() {
            if row_width >= width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            cursor = (rows.len(), row_width);
        }
        rows.push(row);
    }

    WrappedInput { rows, cursor_row: cursor.0, cursor_col: cursor.1 }
}

/// Height of an input box `box_width` columns wide that shows all of `input`.
pub fn box_height(input: &InputState, box_width: u16) -> u16 {
    let rows = wrap(input, box_width.saturating_sub(INPUT_CHROME_X)).rows.len();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(INPUT_CHROME_Y)
}

/// Draw a bordered text box. When the text is taller than the box, the rows
/// around the cursor are shown. The terminal cursor is placed only when focused.
pub fn render(frame: &mut Frame, area: Rect, input: &InputState, placeholder: &str, focused: bool) {
    if area.is_empty() {
        return;
    }
    let border = if focused { theme::ACCENT } else { theme::DIM };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme::INPUT_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    if input.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(theme::DIM)),
            inner,
        );
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let wrapped = wrap(input, inner.width);
    let visible = usize::from(inner.height);
    let first = wrapped.cursor_row.saturating_sub(visible - 1);
    let lines: Vec<Line> =
        wrapped.rows.iter().skip(first).take(visible).map(|r| Line::raw(r.as_str())).collect();
    frame.render_widget(Paragraph::new(lines).style(Style::default().fg(theme::INPUT_TEXT)), inner);

    if focused {
        let col = u16::try_from(wrapped.cursor_col).unwrap_or(u16::MAX);
        let row = u16::try_from(wrapped.cursor_row - first).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(col);
        let y = inner.y.saturating_add(row);
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}
