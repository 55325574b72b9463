use super::actions::Action;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

pub trait Component {
    /// Called once when the component becomes part of the tree
    fn mount(&mut self) {}

    /// Called once before the component is dropped; releases subscriptions and timers
    fn unmount(&mut self) {}

    fn handle_events(&mut self, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Mouse(mouse)) => self.handle_mouse_events(mouse),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// Advance time-based state. Returns true if anything visible changed.
    fn on_tick(&mut self, _now: Instant) -> bool {
        false
    }

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
