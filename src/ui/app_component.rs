use crate::config::Config;
use crate::ui::components::{ContactPopup, ContactSubmission};
use crate::ui::core::{event_handler::EventType, Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// How the popup ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOutcome {
    Submitted(ContactSubmission),
    Dismissed,
}

/// Host application: mounts the popup and consumes its outcome
pub struct AppComponent {
    popup: ContactPopup,
    mouse_enabled: bool,
    outcome: Option<PopupOutcome>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        let mut popup = ContactPopup::new(config);
        popup.mount();

        Self {
            popup,
            mouse_enabled: config.ui.mouse_enabled,
            outcome: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn outcome(&self) -> Option<&PopupOutcome> {
        self.outcome.as_ref()
    }

    pub fn popup(&self) -> &ContactPopup {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut ContactPopup {
        &mut self.popup
    }

    /// Dispatch one terminal event. Returns true if the screen needs redrawing.
    pub fn handle_event(&mut self, event: EventType) -> bool {
        self.handle_event_at(event, Instant::now())
    }

    pub fn handle_event_at(&mut self, event: EventType, now: Instant) -> bool {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Resize(_, _) => return true,
            EventType::Tick => return self.on_tick(now),
            EventType::Other => return false,
        };
        self.handle_app_action(action);
        true
    }

    /// Handle the popup's outbound actions: the host side of onNext / onClose
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Next(submission) => {
                log::info!("App: popup completed for '{}'", submission.contact_info);
                self.outcome = Some(PopupOutcome::Submitted(submission));
                self.should_quit = true;
                Action::None
            }
            Action::Close => {
                log::info!("App: popup dismissed");
                self.outcome = Some(PopupOutcome::Dismissed);
                self.should_quit = true;
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            other => other,
        }
    }

    /// Unmount the popup and hand back the outcome
    pub fn finish(mut self) -> Option<PopupOutcome> {
        self.popup.unmount();
        self.outcome
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            _ => self.popup.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.mouse_enabled {
            self.popup.handle_mouse_events(mouse)
        } else {
            Action::None
        }
    }

    fn on_tick(&mut self, now: Instant) -> bool {
        self.popup.on_tick(now)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.popup.update(action);
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.popup.render(f, rect);
    }
}
