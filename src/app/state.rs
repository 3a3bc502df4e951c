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
use super::messages::MessageList;
use super::responder::{CannedResponder, ChatResponder, PanelEvent};
use super::scroll::ScrollState;
use super::side_panel::{ForwardToChat, SidePanel};
use crate::Cli;
use crate::error::AppError;
use crate::ui::layout::{ChatPanelLayout, SidePanelLayout};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;

pub const DEFAULT_SCROLL_LINES: usize = 3;
pub const DEFAULT_SIDE_WIDTH: u16 = 34;
/// Narrower than this and the prompt editor has no room for text.
pub const MIN_SIDE_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PanelMode {
    /// Only the chat panel.
    Chat,
    /// Only the docked side panel.
    Side,
    /// Side panel docked on the left, chat panel filling the rest.
    Both,
}

impl PanelMode {
    #[must_use]
    pub const fn shows_chat(self) -> bool {
        matches!(self, Self::Chat | Self::Both)
    }

    #[must_use]
    pub const fn shows_side(self) -> bool {
        matches!(self, Self::Side | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ChatInput,
    SidePrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Ready,
    /// At least one submitted message has no response yet.
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub panel_mode: PanelMode,
    pub scroll_lines: usize,
    pub side_width: u16,
    pub response_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel_mode: PanelMode::Both,
            scroll_lines: DEFAULT_SCROLL_LINES,
            side_width: DEFAULT_SIDE_WIDTH,
            response_delay: Duration::ZERO,
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        if cli.scroll_lines == 0 {
            return Err(AppError::InvalidConfig("--scroll-lines must be at least 1".to_owned()));
        }
        if cli.side_width < MIN_SIDE_WIDTH {
            return Err(AppError::InvalidConfig(format!(
                "--side-width must be at least {MIN_SIDE_WIDTH} columns"
            )));
        }
        Ok(Self {
            panel_mode: cli.panel,
            scroll_lines: cli.scroll_lines,
            side_width: cli.side_width,
            response_delay: Duration::from_millis(cli.response_delay_ms),
        })
    }
}

/// Geometry from the last rendered frame, used to route mouse events.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedAreas {
    pub chat: Option<ChatPanelLayout>,
    pub side: Option<SidePanelLayout>,
}

pub struct App {
    pub messages: MessageList,
    pub scroll: ScrollState,
    pub input: InputState,
    pub side_panel: SidePanel,
    pub panel_mode: PanelMode,
    pub focus: Focus,
    pub status: AppStatus,
    /// Submissions still waiting for a response.
    pub pending_responses: usize,
    pub should_quit: bool,
    pub scroll_lines: usize,
    pub side_width: u16,
    pub event_tx: mpsc::UnboundedSender<PanelEvent>,
    pub event_rx: mpsc::UnboundedReceiver<PanelEvent>,
    pub responder: Box<dyn ChatResponder>,
    /// Message list viewport from the last frame. Layout is recomputed when it changes.
    pub message_area: Rect,
    pub rendered: RenderedAreas,
    /// Left button went down on the scrollbar and has not been released.
    pub scrollbar_dragging: bool,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig, responder: Box<dyn ChatResponder>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut side_panel = SidePanel::new();
        side_panel.add_listener(Box::new(ForwardToChat::new(event_tx.clone())));
        let focus =
            if config.panel_mode.shows_chat() { Focus::ChatInput } else { Focus::SidePrompt };

        Self {
            messages: MessageList::new(),
            scroll: ScrollState::new(),
            input: InputState::new(),
            side_panel,
            panel_mode: config.panel_mode,
            focus,
            status: AppStatus::Ready,
            pending_responses: 0,
            should_quit: false,
            scroll_lines: config.scroll_lines,
            side_width: config.side_width,
            event_tx,
            event_rx,
            responder,
            message_area: Rect::default(),
            rendered: RenderedAreas::default(),
            scrollbar_dragging: false,
            force_redraw: false,
        }
    }

    /// Default configuration with a responder that answers synchronously.
    #[doc(hidden)]
    #[must_use]
    pub fn test_default() -> Self {
        Self::new(AppConfig::default(), Box::new(CannedResponder::default()))
    }

    /// Adopt the message viewport of the current frame. Relayouts only when
    /// the area actually changed.
    pub fn sync_message_area(&mut self, area: Rect) {
        if area == self.message_area {
            return;
        }
        self.message_area = area;
        self.relayout();
    }

    /// Relayout after an insertion or removal and jump to the newest message.
    pub fn update_message_display(&mut self) {
        self.relayout();
        self.scroll.scroll_to_bottom();
    }

    fn relayout(&mut self) {
        let total = self.messages.relayout(self.message_area.width);
        self.scroll.set_extent(total, usize::from(self.message_area.height));
    }

    pub fn cycle_focus(&mut self) {
        if self.panel_mode != PanelMode::Both {
            return;
        }
        self.focus = match self.focus {
            Focus::ChatInput => Focus::SidePrompt,
            Focus::SidePrompt => Focus::ChatInput,
        };
    }

    /// The input buffer that currently receives typing.
    pub fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            Focus::ChatInput => &mut self.input,
            Focus::SidePrompt => &mut self.side_panel.prompt,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("messages", &self.messages.len())
            .field("scroll", &self.scroll)
            .field("panel_mode", &self.panel_mode)
            .field("focus", &self.focus)
            .field("status", &self.status)
            .field("pending_responses", &self.pending_responses)
            .finish_non_exhaustive()
    }
}
