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

//! Vertical stacking of chat bubbles.
//!
//! Heights come from the same word wrapper the renderer uses
//! (`Paragraph::line_count`), so a bubble is always drawn exactly as tall as
//! it was measured.

use super::messages::ChatMessage;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Blank rows between two consecutive bubbles (and after the last one).
pub const MESSAGE_SPACING: usize = 1;
/// Columns taken by the left/right border plus one column of inner padding on each side.
pub const BUBBLE_CHROME_X: u16 = 4;
/// Rows taken by the top and bottom border.
pub const BUBBLE_CHROME_Y: usize = 2;
/// Bubbles never grow wider than this share of the list width.
pub const MAX_BUBBLE_PERCENT: u32 = 85;
pub const MIN_BUBBLE_WIDTH: u16 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSlot {
    pub y_offset: usize,
    pub height: usize,
    pub width: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListLayout {
    pub slots: Vec<BubbleSlot>,
    pub total_height: usize,
}

#[must_use]
pub fn max_bubble_width(list_width: u16) -> u16 {
    let scaled = u32::from(list_width) * MAX_BUBBLE_PERCENT / 100;
    u16::try_from(scaled).unwrap_or(list_width)
}

/// Wrap width for bubble text in a list `list_width` columns wide.
#[must_use]
pub fn text_width(list_width: u16) -> u16 {
    max_bubble_width(list_width).saturating_sub(BUBBLE_CHROME_X)
}

/// Number of rows `text` occupies when word-wrapped at `width` columns.
/// Empty text still takes one row.
#[must_use]
pub fn measure_text_height(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    let paragraph = Paragraph::new(Text::raw(text)).wrap(Wrap { trim: false });
    paragraph.line_count(width).max(1)
}

/// Shrink-to-fit bubble width: the longest line plus chrome, kept within
/// `[MIN_BUBBLE_WIDTH, max_width]`.
#[must_use]
pub fn bubble_width(text: &str, max_width: u16) -> u16 {
    let longest = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let wanted = u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(BUBBLE_CHROME_X);
    wanted.max(MIN_BUBBLE_WIDTH).min(max_width)
}

/// Lay out `messages` top to bottom in a list `list_width` columns wide.
///
/// Each slot starts where the previous one ended plus [`MESSAGE_SPACING`];
/// `total_height` includes the spacing after the last bubble. A width too
/// narrow to hold any text produces all-zero slots and a zero total.
#[must_use]
pub fn compute(messages: &[ChatMessage], list_width: u16) -> MessageListLayout {
    let wrap_width = text_width(list_width);
    if wrap_width == 0 {
        return MessageListLayout {
            slots: vec![BubbleSlot::default(); messages.len()],
            total_height: 0,
        };
    }

    let max_width = max_bubble_width(list_width);
    let mut slots = Vec::with_capacity(messages.len());
    let mut y = 0;
    for msg in messages {
        let height = measure_text_height(&msg.text, wrap_width) + BUBBLE_CHROME_Y;
        slots.push(BubbleSlot { y_offset: y, height, width: bubble_width(&msg.text, max_width) });
        y += height + MESSAGE_SPACING;
    }

    MessageListLayout { slots, total_height: y }
}
