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

/// Multi-line text buffer with a character-indexed cursor. Backs both the
/// chat input box and the side-panel prompt editor.
#[derive(Debug, Clone)]
pub struct InputState {
    pub lines: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0 }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replace the whole buffer, leaving the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte();
        self.lines[self.cursor_row].insert(at, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let at = self.cursor_byte();
        let tail = self.lines[self.cursor_row].split_off(at);
        self.lines.insert(self.cursor_row + 1, tail);
        self.place_cursor(self.cursor_row + 1, 0);
    }

    /// Insert pasted text. `\r\n` and lone `\r` both count as one line break.
    pub fn insert_str(&mut self, s: &str) {
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    self.insert_newline();
                }
                '\n' => self.insert_newline(),
                '\t' => {
                    self.insert_char(' ');
                    self.insert_char(' ');
                }
                c if c.is_control() => {}
                c => self.insert_char(c),
            }
        }
    }

    /// Backspace. At the start of a line the line is joined onto the previous one.
    pub fn delete_char_before(&mut self) {
        match (self.cursor_row, self.cursor_col) {
            (0, 0) => {}
            (row, 0) => {
                let joined = self.lines.remove(row);
                self.place_cursor(row - 1, usize::MAX);
                self.lines[self.cursor_row].push_str(&joined);
            }
            (_, col) => {
                self.cursor_col = col - 1;
                self.remove_at_cursor();
            }
        }
    }

    pub fn delete_char_after(&mut self) {
        if self.cursor_col < self.line_chars(self.cursor_row) {
            self.remove_at_cursor();
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        match (self.cursor_row, self.cursor_col) {
            (0, 0) => {}
            (row, 0) => self.place_cursor(row - 1, usize::MAX),
            (row, col) => self.place_cursor(row, col - 1),
        }
    }

    pub fn move_right(&mut self) {
        let (row, col) = (self.cursor_row, self.cursor_col);
        if col < self.line_chars(row) {
            self.place_cursor(row, col + 1);
        } else if row + 1 < self.lines.len() {
            self.place_cursor(row + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        if let Some(row) = self.cursor_row.checked_sub(1) {
            self.place_cursor(row, self.cursor_col);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.place_cursor(self.cursor_row + 1, self.cursor_col);
        }
    }

    pub fn move_home(&mut self) {
        self.place_cursor(self.cursor_row, 0);
    }

    pub fn move_end(&mut self) {
        self.place_cursor(self.cursor_row, usize::MAX);
    }

    #[must_use]
    pub fn line_count(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Put the cursor at `(row, col)`, clamped to the buffer.
    fn place_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len().saturating_sub(1));
        self.cursor_col = col.min(self.line_chars(self.cursor_row));
    }

    fn line_chars(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |line| line.chars().count())
    }

    fn cursor_byte(&self) -> usize {
        let line = &self.lines[self.cursor_row];
        line.char_indices().nth(self.cursor_col).map_or(line.len(), |(at, _)| at)
    }

    fn remove_at_cursor(&mut self) {
        let at = self.cursor_byte();
        self.lines[self.cursor_row].remove(at);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
