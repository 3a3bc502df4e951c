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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(170, 136, 255);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const TITLE: Color = Color::White;
pub const SCROLLBAR_TRACK: &str = "│";
pub const SCROLLBAR_THUMB: &str = "┃";

// Bubbles: user messages sit on the darker grey, responses on the lighter one.
pub const USER_BUBBLE_BG: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const SYSTEM_BUBBLE_BG: Color = Color::Rgb(0x5a, 0x5a, 0x5a);
pub const USER_BUBBLE_BORDER: Color = Color::Rgb(0x55, 0x55, 0x55);
pub const SYSTEM_BUBBLE_BORDER: Color = Color::Rgb(0x78, 0x78, 0x78);
pub const BUBBLE_TEXT: Color = Color::White;
pub const PLACEHOLDER_BUBBLE_TEXT: Color = Color::Gray;

// Text entry
pub const INPUT_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const INPUT_TEXT: Color = Color::White;
