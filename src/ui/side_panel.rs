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

use crate::app::side_panel::PROMPT_PLACEHOLDER;
use crate::app::{App, Focus};
use crate::ui::{button, header, input, layout, panel_block};
use ratatui::Frame;
use ratatui::layout::Rect;

pub const SEND_LABEL: &str = "SEND";

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let areas = layout::side_panel(area);
    app.rendered.side = Some(areas);

    let focused = app.focus == Focus::SidePrompt;
    frame.render_widget(panel_block(focused), area);
    header::render(frame, areas.title, None);
    input::render(frame, areas.prompt, &app.side_panel.prompt, PROMPT_PLACEHOLDER, focused);
    let armed = !app.side_panel.prompt.text().trim().is_empty();
    button::render(frame, areas.send_button, SEND_LABEL, armed);
}
