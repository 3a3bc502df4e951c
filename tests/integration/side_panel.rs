// =====
// TESTS: 6
// =====
//
// Side panel integration tests.
// Prompts travel from the docked editor to the chat panel through the listener seam.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use std::sync::{Arc, Mutex};
use synth_chat::app::messages::PLACEHOLDER_TEXT;
use synth_chat::app::{Focus, PanelMode, SidePanelListener, drain_panel_events};
use synth_chat::ui::layout;

use crate::helpers::{click, manual_app, press, test_app, texts, type_text};

struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl SidePanelListener for Recorder {
    fn side_panel_button_clicked(&mut self, prompt: &str) {
        self.log.lock().unwrap().push(format!("{}:{prompt}", self.name));
    }
}

#[tokio::test]
async fn send_button_forwards_prompt_to_chat() {
    let (mut app, responder) = manual_app(PanelMode::Both);
    let side = layout::side_panel(Rect::new(0, 0, 34, 24));
    app.rendered.side = Some(side);
    app.side_panel.prompt.set_text("warm analog pad");

    click(&mut app, side.send_button);
    drain_panel_events(&mut app);

    assert_eq!(texts(&app), vec!["warm analog pad", PLACEHOLDER_TEXT]);
    assert_eq!(*responder.submitted.lock().unwrap(), vec!["warm analog pad".to_owned()]);
    assert!(app.side_panel.prompt.is_empty());
    assert_eq!(app.focus, Focus::SidePrompt);
}

#[tokio::test]
async fn enter_in_prompt_is_a_newline_not_a_send() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    type_text(&mut app, "bass");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    type_text(&mut app, "with sub");
    drain_panel_events(&mut app);
    assert!(app.messages.is_empty());
    assert_eq!(app.side_panel.prompt.text(), "bass\nwith sub");

    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec!["bass\nwith sub", "This is a response"]);
}

#[tokio::test]
async fn typing_after_send_survives_the_drain() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    app.side_panel.prompt.set_text("warm pad");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    type_text(&mut app, "x");
    drain_panel_events(&mut app);

    assert_eq!(texts(&app), vec!["warm pad", "This is a response"]);
    assert_eq!(app.side_panel.prompt.text(), "warm padx");
}

#[tokio::test]
async fn blank_prompt_is_kept_and_ignored() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    type_text(&mut app, "  ");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    drain_panel_events(&mut app);
    assert!(app.messages.is_empty());
    assert_eq!(app.side_panel.prompt.text(), "  ");
}

#[tokio::test]
async fn listeners_are_notified_in_registration_order() {
    let mut app = test_app();
    let log = Arc::new(Mutex::new(Vec::new()));
    app.side_panel.add_listener(Box::new(Recorder { name: "first", log: Arc::clone(&log) }));
    app.side_panel.add_listener(Box::new(Recorder { name: "second", log: Arc::clone(&log) }));
    app.side_panel.prompt.set_text("fm bell");

    app.side_panel.button_clicked();

    assert_eq!(*log.lock().unwrap(), vec!["first:fm bell".to_owned(), "second:fm bell".to_owned()]);
    // The built-in forwarder was registered first.
    drain_panel_events(&mut app);
    assert_eq!(app.messages.get(0).map(|m| m.text.as_str()), Some("fm bell"));
}

#[tokio::test]
async fn side_only_mode_still_collects_chat_history() {
    let (mut app, _responder) = manual_app(PanelMode::Side);
    assert_eq!(app.focus, Focus::SidePrompt);
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(app.focus, Focus::SidePrompt);
    type_text(&mut app, "noise sweep");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    drain_panel_events(&mut app);
    assert_eq!(app.messages.len(), 2);
}
