use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::{Arc, Mutex};
use synth_chat::app::{
    App, AppConfig, ChatResponder, PanelMode, ReplyHandle, handle_terminal_event,
};
use synth_chat::ui::layout;

/// Build a minimal `App` for integration testing.
/// Responses are produced synchronously, no terminal involved.
pub fn test_app() -> App {
    App::test_default()
}

/// Responder that records every submission and keeps the reply handles so a
/// test decides when (and in which order) answers arrive.
#[derive(Clone, Default)]
pub struct ManualResponder {
    pub submitted: Arc<Mutex<Vec<String>>>,
    pub pending: Arc<Mutex<Vec<ReplyHandle>>>,
}

impl ManualResponder {
    pub fn answer_oldest(&self, text: &str) {
        let reply = self.pending.lock().unwrap().remove(0);
        reply.respond(text);
    }

    pub fn fail_oldest(&self, reason: &str) {
        let reply = self.pending.lock().unwrap().remove(0);
        reply.fail(reason);
    }
}

impl ChatResponder for ManualResponder {
    fn message_submitted(&mut self, text: String, reply: ReplyHandle) {
        self.submitted.lock().unwrap().push(text);
        self.pending.lock().unwrap().push(reply);
    }
}

pub fn manual_app(panel_mode: PanelMode) -> (App, ManualResponder) {
    let responder = ManualResponder::default();
    let config = AppConfig { panel_mode, ..AppConfig::default() };
    (App::new(config, Box::new(responder.clone())), responder)
}

/// Lay the chat panel out in `area` the way a rendered frame would.
pub fn place_chat_panel(app: &mut App, area: Rect) {
    let chat = layout::chat_panel(area, 3);
    app.rendered.chat = Some(chat);
    app.sync_message_area(chat.messages);
}

pub fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, modifiers)));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

pub fn click(app: &mut App, area: Rect) {
    let (column, row) = (area.x + area.width / 2, area.y + area.height / 2);
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

pub fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    handle_terminal_event(
        app,
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }),
    );
}

pub fn texts(app: &App) -> Vec<String> {
    app.messages.iter().map(|m| m.text.clone()).collect()
}
