// =====
// TESTS: 10
// =====
//
// Chat submission integration tests.
// Drive the app through key events and responder replies.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use std::time::Duration;
use synth_chat::app::messages::PLACEHOLDER_TEXT;
use synth_chat::app::responder::CannedResponder;
use synth_chat::app::{
    App, AppConfig, AppStatus, MessageRole, PanelMode, drain_panel_events, handle_panel_event,
};

use crate::helpers::{manual_app, press, test_app, texts, type_text};

// --- Submitting ---

#[tokio::test]
async fn enter_sends_message_and_canned_reply() {
    let mut app = test_app();
    type_text(&mut app, "make it brighter");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(texts(&app), vec!["make it brighter", PLACEHOLDER_TEXT]);
    assert_eq!(app.status, AppStatus::Waiting);
    assert!(app.input.is_empty());

    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec!["make it brighter", "This is a response"]);
    assert_eq!(app.messages.get(0).map(|m| m.role), Some(MessageRole::User));
    assert_eq!(app.messages.get(1).map(|m| m.role), Some(MessageRole::System));
    assert_eq!(app.status, AppStatus::Ready);
}

#[tokio::test]
async fn whitespace_only_input_creates_nothing() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert!(app.messages.is_empty());
    assert_eq!(app.status, AppStatus::Ready);
    assert!(responder.submitted.lock().unwrap().is_empty());
    // Nothing was sent, so the draft survives.
    assert_eq!(app.input.text(), "   ");
}

#[tokio::test]
async fn submitted_text_is_trimmed() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, "  pluck  ");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(*responder.submitted.lock().unwrap(), vec!["pluck".to_owned()]);
    assert_eq!(app.messages.get(0).map(|m| m.text.as_str()), Some("pluck"));
}

#[tokio::test]
async fn multiline_message_keeps_its_lines() {
    let mut app = test_app();
    type_text(&mut app, "line one");
    press(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
    type_text(&mut app, "line two");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.messages.get(0).map(|m| m.text.as_str()), Some("line one\nline two"));
}

// --- Placeholder ---

#[tokio::test]
async fn single_placeholder_while_two_replies_pending() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, "first");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    type_text(&mut app, "second");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(texts(&app), vec!["first", "second", PLACEHOLDER_TEXT]);
    assert_eq!(app.pending_responses, 2);

    responder.answer_oldest("reply one");
    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec!["first", "second", "reply one", PLACEHOLDER_TEXT]);
    assert_eq!(app.status, AppStatus::Waiting);

    responder.answer_oldest("reply two");
    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec!["first", "second", "reply one", "reply two"]);
    assert_eq!(app.status, AppStatus::Ready);
    assert!(!app.messages.has_placeholder());
}

#[tokio::test]
async fn placeholder_matched_by_flag_not_text() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, PLACEHOLDER_TEXT);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    responder.answer_oldest("ok");
    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec![PLACEHOLDER_TEXT, "ok"]);
    assert_eq!(app.messages.get(0).map(|m| m.transient), Some(false));
}

#[tokio::test]
async fn failed_reply_replaces_placeholder() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, "grainy texture");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    responder.fail_oldest("engine offline");
    drain_panel_events(&mut app);
    assert_eq!(texts(&app), vec!["grainy texture", "Response failed: engine offline"]);
    assert_eq!(app.status, AppStatus::Ready);
}

#[tokio::test]
async fn dropped_reply_clears_placeholder() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    type_text(&mut app, "never answered");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    responder.pending.lock().unwrap().clear();
    drain_panel_events(&mut app);
    assert!(!app.messages.has_placeholder());
    assert_eq!(app.status, AppStatus::Ready);
    assert_eq!(app.messages.len(), 2);
}

// --- Async delivery ---

#[tokio::test]
async fn delayed_reply_arrives_over_channel() {
    let config = AppConfig { panel_mode: PanelMode::Chat, ..AppConfig::default() };
    let responder = CannedResponder::new("slow answer", Duration::from_millis(20));
    let mut app = App::new(config, Box::new(responder));
    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert!(app.messages.has_placeholder());

    let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
        .await
        .unwrap()
        .unwrap();
    handle_panel_event(&mut app, event);
    assert_eq!(texts(&app), vec!["hello", "slow answer"]);
}

#[tokio::test]
async fn ctrl_q_requests_quit_without_touching_messages() {
    let mut app = test_app();
    type_text(&mut app, "draft");
    press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
    assert!(app.messages.is_empty());
    assert_eq!(app.input.text(), "draft");
}
