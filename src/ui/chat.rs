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

use crate::app::{App, AppStatus, Focus, MessageList, ScrollState};
use crate::ui::input::{self, CHAT_INPUT_PLACEHOLDER};
use crate::ui::{button, header, layout, message, panel_block, theme};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, Widget};

pub const SEND_LABEL: &str = "Send";
pub const WAITING_NOTE: &str = "waiting for response";

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let input_height = input::box_height(&app.input, layout::chat_input_width(area));
    let areas = layout::chat_panel(area, input_height);
    app.rendered.chat = Some(areas);

    let focused = app.focus == Focus::ChatInput;
    frame.render_widget(panel_block(focused), area);
    let status = (app.status == AppStatus::Waiting).then_some(WAITING_NOTE);
    header::render(frame, areas.title, status);

    // The viewport size is only known here; relayout if it moved since the last frame.
    app.sync_message_area(areas.messages);
    frame.render_widget(
        MessageListView { messages: &app.messages, top: app.scroll.position() },
        areas.messages,
    );
    render_scrollbar(frame, areas.scrollbar, &app.scroll);

    input::render(frame, areas.input, &app.input, CHAT_INPUT_PLACEHOLDER, focused);
    let armed = !app.input.text().trim().is_empty();
    button::render(frame, areas.send_button, SEND_LABEL, armed);
}

/// Paints only the bubbles that intersect the viewport starting at content row `top`.
struct MessageListView<'a> {
    messages: &'a MessageList,
    top: usize,
}

impl Widget for MessageListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for msg in self.messages.visible(self.top, usize::from(area.height)) {
            message::paint_clipped(msg, area, self.top, buf);
        }
    }
}

fn render_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollState) {
    if area.is_empty() || !scroll.is_scrollable() {
        return;
    }
    // One state per reachable position, so the thumb touches the track end at the bottom.
    let mut state = ScrollbarState::new(scroll.max_position() + 1)
        .viewport_content_length(scroll.visible_height())
        .position(scroll.position());
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some(theme::SCROLLBAR_TRACK))
        .track_style(Style::default().fg(theme::DIM))
        .thumb_symbol(theme::SCROLLBAR_THUMB)
        .thumb_style(Style::default().fg(theme::ACCENT));
    frame.render_stateful_widget(scrollbar, area, &mut state);
}
