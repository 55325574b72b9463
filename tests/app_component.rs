use contact_popup::config::Config;
use contact_popup::ui::core::{Action, Component, EventType};
use contact_popup::ui::{AppComponent, PopupOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_app_mounts_popup() {
    let app = AppComponent::new(&Config::default());
    assert!(app.popup().is_mounted());
    assert!(app.popup().materials().is_mounted());
    assert!(app.popup().preferences().is_mounted());
    assert!(!app.should_quit());
    assert!(app.outcome().is_none());
}

#[test]
fn test_escape_dismisses() {
    let mut app = AppComponent::new(&Config::default());
    assert!(app.handle_event(key(KeyCode::Esc)));
    assert!(app.should_quit());
    assert_eq!(app.outcome(), Some(&PopupOutcome::Dismissed));
}

#[test]
fn test_submission_completes() {
    let mut app = AppComponent::new(&Config::default());
    type_text(&mut app, "user@example.com");
    // Contact -> Materials -> Preferences -> Next
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Tab));
    }
    app.handle_event(key(KeyCode::Enter));

    assert!(app.should_quit());
    match app.finish() {
        Some(PopupOutcome::Submitted(submission)) => {
            assert_eq!(submission.contact_info, "user@example.com");
            assert!(submission.selected_materials.is_empty());
            assert!(submission.selected_preferences.is_empty());
        }
        other => panic!("expected submission, got {:?}", other),
    }
}

#[test]
fn test_failed_validation_keeps_running() {
    let mut app = AppComponent::new(&Config::default());
    app.popup_mut().set_focus(contact_popup::ui::components::PopupFocus::Next);
    app.handle_event(key(KeyCode::Enter));

    assert!(!app.should_quit());
    assert!(app.outcome().is_none());
    assert!(app.popup().validation_error().is_some());
}

#[test]
fn test_ctrl_c_quits_without_outcome() {
    let mut app = AppComponent::new(&Config::default());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
    assert!(app.finish().is_none());
}

#[test]
fn test_mouse_ignored_when_disabled() {
    let mut config = Config::default();
    config.ui.mouse_enabled = false;
    let mut app = AppComponent::new(&config);

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(app.handle_mouse_events(click), Action::None);
}

#[test]
fn test_tick_without_pending_close_needs_no_render() {
    let mut app = AppComponent::new(&Config::default());
    assert!(!app.handle_event_at(EventType::Tick, Instant::now()));
    assert!(app.handle_event(EventType::Resize(120, 40)));
    assert!(!app.handle_event(EventType::Other));
}

#[test]
fn test_update_routes_selection_to_popup() {
    let mut app = AppComponent::new(&Config::default());
    let action = app
        .popup()
        .materials()
        .toggle_option(app.popup().selected_materials(), "react");

    assert_eq!(app.update(action), Action::None);
    assert_eq!(app.popup().selected_materials().as_slice(), ["react"]);
}
