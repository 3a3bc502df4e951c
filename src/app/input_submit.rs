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

use super::responder::{PanelEvent, ReplyHandle};
use super::{App, AppStatus};

/// Submit the chat input box. The box is only cleared when something was sent.
pub(super) fn submit_input(app: &mut App) {
    let text = app.input.text();
    if submit_text(app, &text) {
        app.input.clear();
    }
}

/// Append `text` as a user message and hand it to the responder.
/// Blank text is ignored and returns `false`.
pub(super) fn submit_text(app: &mut App, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    app.messages.push_user(text);
    // Keep a single placeholder, always after the newest user message.
    app.messages.remove_placeholder();
    app.messages.push_placeholder();
    app.pending_responses += 1;
    app.status = AppStatus::Waiting;
    app.update_message_display();
    tracing::debug!(pending = app.pending_responses, "chat message submitted");

    let reply = ReplyHandle::new(app.event_tx.clone());
    app.responder.message_submitted(text.to_owned(), reply);
    true
}

pub fn handle_panel_event(app: &mut App, event: PanelEvent) {
    match event {
        PanelEvent::Response(text) => {
            tracing::debug!(chars = text.chars().count(), "response received");
            finish_response(app, text);
        }
        PanelEvent::ResponseFailed(reason) => {
            tracing::warn!("response failed: {reason}");
            finish_response(app, format!("Response failed: {reason}"));
        }
        PanelEvent::SidePanelPrompt(prompt) => {
            // Text edited after SEND was pressed stays in the editor.
            if submit_text(app, &prompt) && app.side_panel.prompt.text() == prompt {
                app.side_panel.prompt.clear();
            }
        }
    }
}

fn finish_response(app: &mut App, text: String) {
    app.messages.remove_placeholder();
    app.messages.push_system(text);
    app.pending_responses = app.pending_responses.saturating_sub(1);
    if app.pending_responses == 0 {
        app.status = AppStatus::Ready;
    } else {
        app.messages.push_placeholder();
    }
    app.update_message_display();
}

/// Handle every event already queued on the panel channel without waiting.
pub fn drain_panel_events(app: &mut App) {
    while let Ok(event) = app.event_rx.try_recv() {
        handle_panel_event(app, event);
    }
}
