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

use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

/// A boxed, centred label. `armed` buttons are drawn in the accent colour;
/// the rest are dimmed.
pub fn render(frame: &mut Frame, area: Rect, label: &str, armed: bool) {
    if area.is_empty() {
        return;
    }
    let color = if armed { theme::ACCENT } else { theme::DIM };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    // A one-row button has no room for a border.
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    if area.height < 3 {
        frame.render_widget(paragraph, area);
    } else {
        frame.render_widget(paragraph.block(block), area);
    }
}
