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

use super::input::InputState;
use super::responder::PanelEvent;
use tokio::sync::mpsc;

pub const PROMPT_PLACEHOLDER: &str = "Describe your synth patch. What do you want to hear?";

/// Notified when the side panel's SEND button is clicked.
pub trait SidePanelListener {
    fn side_panel_button_clicked(&mut self, prompt: &str);
}

/// Docked panel with a multi-line prompt editor and a SEND button.
/// Enter in the editor starts a new line; sending is explicit.
#[derive(Default)]
pub struct SidePanel {
    pub prompt: InputState,
    listeners: Vec<Box<dyn SidePanelListener>>,
}

impl SidePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Box<dyn SidePanelListener>) {
        self.listeners.push(listener);
    }

    #[cfg(test)]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notify every listener, in registration order, with the current prompt.
    pub fn button_clicked(&mut self) {
        let prompt = self.prompt.text();
        tracing::debug!(listeners = self.listeners.len(), "side panel send clicked");
        for listener in &mut self.listeners {
            listener.side_panel_button_clicked(&prompt);
        }
    }
}

impl std::fmt::Debug for SidePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SidePanel")
            .field("prompt", &self.prompt)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Forwards side-panel prompts into the chat panel's event channel.
#[derive(Debug)]
pub struct ForwardToChat {
    tx: mpsc::UnboundedSender<PanelEvent>,
}

impl ForwardToChat {
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<PanelEvent>) -> Self {
        Self { tx }
    }
}

impl SidePanelListener for ForwardToChat {
    fn side_panel_button_clicked(&mut self, prompt: &str) {
        if self.tx.send(PanelEvent::SidePanelPrompt(prompt.to_owned())).is_err() {
            tracing::warn!("chat panel closed; dropping side panel prompt");
        }
    }
}
