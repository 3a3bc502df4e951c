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

use crate::app::{ChatMessage, MessageRole};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

/// Paragraph for one bubble: rounded border, one column of padding, text
/// wrapped the same way the list layout measured it.
pub fn bubble(msg: &ChatMessage) -> Paragraph<'_> {
    let (bg, border) = match msg.role {
        MessageRole::User => (theme::USER_BUBBLE_BG, theme::USER_BUBBLE_BORDER),
        MessageRole::System => (theme::SYSTEM_BUBBLE_BG, theme::SYSTEM_BUBBLE_BORDER),
    };
    let mut text_style = Style::default().fg(theme::BUBBLE_TEXT).bg(bg);
    if msg.transient {
        text_style = text_style.fg(theme::PLACEHOLDER_BUBBLE_TEXT).add_modifier(Modifier::ITALIC);
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border).bg(bg))
        .padding(Padding::horizontal(1));

    Paragraph::new(msg.text.as_str()).block(block).style(text_style).wrap(Wrap { trim: false })
}

/// Column where a bubble starts: user messages hug the right edge, responses the left.
pub fn bubble_x(msg: &ChatMessage, list: Rect) -> u16 {
    match msg.role {
        MessageRole::User => list.right().saturating_sub(msg.bubble_width).max(list.x),
        MessageRole::System => list.x,
    }
}

/// Paint `msg` into `buf` as seen through a viewport whose first row is
/// content row `top`. Rows of the bubble outside `list` are clipped.
pub fn paint_clipped(msg: &ChatMessage, list: Rect, top: usize, buf: &mut Buffer) {
    let Ok(height) = u16::try_from(msg.height) else {
        return;
    };
    let width = msg.bubble_width.min(list.width);
    if width == 0 || height == 0 {
        return;
    }

    // Draw the whole bubble off-screen, then copy the rows that are in view.
    let full = Rect::new(0, 0, width, height);
    let mut scratch = Buffer::empty(full);
    bubble(msg).render(full, &mut scratch);

    let x = bubble_x(msg, list);
    let hidden_above = top.saturating_sub(msg.y_offset);
    let first_dest = msg.y_offset.saturating_sub(top);
    for (src_row, dest_row) in (hidden_above..msg.height).zip(first_dest..) {
        if dest_row >= usize::from(list.height) {
            break;
        }
        let (Ok(src_y), Ok(dest_y)) = (u16::try_from(src_row), u16::try_from(dest_row)) else {
            break;
        };
        let y = list.y.saturating_add(dest_y);
        for col in 0..width {
            if let (Some(src), Some(dest)) =
                (scratch.cell((col, src_y)), buf.cell_mut((x.saturating_add(col), y)))
            {
                *dest = src.clone();
            }
        }
    }
}
