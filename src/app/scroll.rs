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

/// Scroll position of the message list, kept inside
/// `[0, max(total_height - visible_height, 0)]` by every mutator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    position: usize,
    visible_height: usize,
    total_height: usize,
}

impl ScrollState {
    #[must_use]
    pub const fn new() -> Self {
        Self { position: 0, visible_height: 0, total_height: 0 }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    #[must_use]
    pub const fn total_height(&self) -> usize {
        self.total_height
    }

    #[must_use]
    pub const fn max_position(&self) -> usize {
        self.total_height.saturating_sub(self.visible_height)
    }

    #[must_use]
    pub const fn is_scrollable(&self) -> bool {
        self.total_height > self.visible_height
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_at_bottom(&self) -> bool {
        self.position == self.max_position()
    }

    /// Update content/viewport sizes and pull the position back into range.
    pub fn set_extent(&mut self, total_height: usize, visible_height: usize) {
        self.total_height = total_height;
        self.visible_height = visible_height;
        self.position = self.position.min(self.max_position());
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.max_position());
    }

    /// Move by `delta` rows; negative scrolls towards the top.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.position.saturating_sub(delta.unsigned_abs())
        } else {
            self.position.saturating_add(delta.unsigned_abs())
        };
        self.set_position(target);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.set_position(self.position.saturating_sub(rows));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.set_position(self.position.saturating_add(rows));
    }

    pub fn scroll_to_top(&mut self) {
        self.position = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.position = self.max_position();
    }

    /// Position for a click on row `row` of a scrollbar track `track_height`
    /// rows tall: the first row maps to the top, the last row to the bottom.
    #[must_use]
    pub fn position_for_track_row(&self, row: u16, track_height: u16) -> usize {
        let max = self.max_position();
        if track_height <= 1 || max == 0 {
            return 0;
        }
        let last_row = usize::from(track_height - 1);
        let row = usize::from(row).min(last_row);
        (row * max + last_row / 2) / last_row
    }
}
