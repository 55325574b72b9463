use contact_popup::ui::core::{EventHandler, EventType};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tokio::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::new();
    assert_eq!(handler.tick_rate(), Duration::from_millis(50));
}

#[test]
fn test_key_release_is_ignored() {
    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert!(matches!(EventType::from(Event::Key(press)), EventType::Key(_)));

    let release = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventType::from(Event::Key(release)), EventType::Other));
}

#[test]
fn test_resize_and_focus_events() {
    assert!(matches!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24)));
    assert!(matches!(EventType::from(Event::FocusGained), EventType::Other));
}
