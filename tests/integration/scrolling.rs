// =====
// TESTS: 6
// =====
//
// Scrolling integration tests.
// Message list geometry and scroll clamping as seen through input events.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use synth_chat::app::list_layout::MESSAGE_SPACING;
use synth_chat::app::{PanelMode, drain_panel_events};

use crate::helpers::{manual_app, mouse, place_chat_panel, press, test_app, type_text};

fn send(app: &mut synth_chat::app::App, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter, KeyModifiers::NONE);
    drain_panel_events(app);
}

#[tokio::test]
async fn offsets_follow_heights_plus_spacing() {
    let mut app = test_app();
    place_chat_panel(&mut app, Rect::new(0, 0, 60, 20));
    send(&mut app, "short");
    send(&mut app, &"a much longer message that needs to wrap over several rows ".repeat(3));

    let msgs: Vec<_> = app.messages.iter().collect();
    assert_eq!(msgs.len(), 4);
    assert_eq!(msgs[0].y_offset, 0);
    for pair in msgs.windows(2) {
        assert_eq!(pair[1].y_offset, pair[0].y_offset + pair[0].height + MESSAGE_SPACING);
    }
    assert!(msgs[2].height > msgs[0].height);
}

#[tokio::test]
async fn new_messages_keep_view_at_bottom() {
    let mut app = test_app();
    place_chat_panel(&mut app, Rect::new(0, 0, 60, 20));
    for i in 0..8 {
        send(&mut app, &format!("note {i}"));
        let expected = app.messages.total_height().saturating_sub(app.scroll.visible_height());
        assert_eq!(app.scroll.position(), expected);
    }
    assert!(app.scroll.is_scrollable());
}

#[tokio::test]
async fn wheel_scroll_is_clamped() {
    let mut app = test_app();
    place_chat_panel(&mut app, Rect::new(0, 0, 60, 20));
    for i in 0..6 {
        send(&mut app, &format!("note {i}"));
    }
    let area = app.message_area;
    for _ in 0..50 {
        mouse(&mut app, MouseEventKind::ScrollUp, area.x, area.y);
    }
    assert_eq!(app.scroll.position(), 0);
    for _ in 0..50 {
        mouse(&mut app, MouseEventKind::ScrollDown, area.x, area.y);
    }
    assert_eq!(app.scroll.position(), app.scroll.max_position());
}

#[tokio::test]
async fn content_shorter_than_view_never_scrolls() {
    let mut app = test_app();
    place_chat_panel(&mut app, Rect::new(0, 0, 60, 30));
    send(&mut app, "one");
    assert!(!app.scroll.is_scrollable());
    press(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
    press(&mut app, KeyCode::End, KeyModifiers::CONTROL);
    assert_eq!(app.scroll.position(), 0);
}

#[tokio::test]
async fn shrinking_the_panel_reclamps_scroll() {
    let (mut app, responder) = manual_app(PanelMode::Chat);
    place_chat_panel(&mut app, Rect::new(0, 0, 80, 30));
    for i in 0..5 {
        send(&mut app, &format!("patch idea {i}"));
        responder.answer_oldest("noted");
        drain_panel_events(&mut app);
    }
    let wide_total = app.messages.total_height();
    place_chat_panel(&mut app, Rect::new(0, 0, 80, 12));
    assert_eq!(app.messages.total_height(), wide_total);
    assert!(app.scroll.position() <= app.scroll.max_position());

    // Too narrow for any text: everything collapses to zero.
    place_chat_panel(&mut app, Rect::new(0, 0, 6, 12));
    assert_eq!(app.messages.total_height(), 0);
    assert_eq!(app.scroll.position(), 0);
}

#[tokio::test]
async fn dragging_the_scrollbar_moves_the_view() {
    let mut app = test_app();
    place_chat_panel(&mut app, Rect::new(0, 0, 60, 20));
    for i in 0..10 {
        send(&mut app, &format!("note {i}"));
    }
    let bar = app.rendered.chat.map(|c| c.scrollbar).unwrap();
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), bar.x, bar.y);
    assert_eq!(app.scroll.position(), 0);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), bar.x, bar.bottom() - 1);
    assert_eq!(app.scroll.position(), app.scroll.max_position());
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), bar.x, bar.bottom() - 1);
    assert!(!app.scrollbar_dragging);
}
