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

mod events;
mod input;
mod input_submit;
mod keys;
pub mod list_layout;
pub mod messages;
pub mod responder;
pub mod scroll;
pub mod side_panel;
mod state;

// Re-export the types the UI and integration tests reach for.
pub use events::handle_terminal_event;
pub use input::InputState;
pub use input_submit::{drain_panel_events, handle_panel_event};
pub use messages::{ChatMessage, MessageId, MessageList, MessageRole};
pub use responder::{ChatResponder, PanelEvent, ReplyHandle};
pub use scroll::ScrollState;
pub use side_panel::{SidePanel, SidePanelListener};
pub use state::{
    App, AppConfig, AppStatus, DEFAULT_SCROLL_LINES, DEFAULT_SIDE_WIDTH, Focus, MIN_SIDE_WIDTH,
    PanelMode, RenderedAreas,
};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Enable bracketed paste and mouse capture (ignore error on unsupported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
    );

    let result = event_loop(app, &mut terminal).await;

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
    );
    ratatui::restore();

    result
}

async fn event_loop(app: &mut App, terminal: &mut ratatui::DefaultTerminal) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_terminal_event(app, event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = app.event_rx.recv() => {
                handle_panel_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            handle_terminal_event(app, event);
        }
        drain_panel_events(app);

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        if app.force_redraw {
            terminal.clear()?;
            app.force_redraw = false;
        }
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }

    tracing::info!(
        messages = app.messages.len(),
        pending = app.pending_responses,
        "chat panels closed"
    );
    Ok(())
}
