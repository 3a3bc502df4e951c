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
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub const PANEL_TITLE: &str = "CHAT";

/// Panel title on the left, with an optional dim status note right-aligned on the same row.
pub fn render(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if area.is_empty() {
        return;
    }
    let title = Line::from(Span::styled(
        PANEL_TITLE,
        Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD),
    ));

    let Some(status) = status else {
        frame.render_widget(Paragraph::new(title), area);
        return;
    };

    let status_width = u16::try_from(UnicodeWidthStr::width(status)).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);
    frame.render_widget(Paragraph::new(title), left);
    frame.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(theme::DIM)))
            .alignment(Alignment::Right),
        right,
    );
}
