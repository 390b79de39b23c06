use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::app_state::{AppController, Field, InputMode, Tab};
use crate::dashboard::Dashboard;
use crate::dispatch::{Dispatcher, Request};
use crate::tui::Action;
use crate::ui;

/// Interactive shell around [`Dashboard`]: turns keys into operations and
/// hands the resulting requests to the dispatcher.
pub struct DashboardApp {
    dashboard: Dashboard,
    dispatcher: Dispatcher,
    should_quit: bool,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard, dispatcher: Dispatcher) -> Self {
        Self {
            dashboard,
            dispatcher,
            should_quit: false,
        }
    }

    /// Kick off the startup tip refresh.
    pub fn start(&mut self) {
        let request = self.dashboard.refresh_tip();
        self.submit(request);
    }

    fn submit(&self, request: Option<Request>) {
        if let Some(request) = request {
            tracing::debug!(?request, "dispatching");
            self.dispatcher.dispatch(request);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.dashboard.in_splash() {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        if let InputMode::Editing(field) = self.dashboard.input_mode {
            self.handle_editing(field, key.code);
            return;
        }

        if self.dashboard.notify.is_some() {
            match key.code {
                KeyCode::Enter => {
                    let request = self.dashboard.confirm_send();
                    self.submit(request);
                }
                KeyCode::Esc => self.dashboard.cancel_notify(),
                _ => {}
            }
            return;
        }

        let d = &mut self.dashboard;
        let request = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                d.tab = d.tab.next();
                None
            }
            KeyCode::BackTab => {
                d.tab = d.tab.previous();
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                // '1' is the first tab.
                let tab = c
                    .to_digit(10)
                    .and_then(|n| usize::try_from(n).ok())
                    .and_then(|n| Tab::from_repr(n - 1));
                if let Some(tab) = tab {
                    d.tab = tab;
                }
                None
            }
            KeyCode::Char('r') => d.refresh_tip(),
            code => match d.tab {
                Tab::Dashboard => match code {
                    KeyCode::Up => {
                        d.select_stop(-1);
                        None
                    }
                    KeyCode::Down => {
                        d.select_stop(1);
                        None
                    }
                    KeyCode::Char('n') | KeyCode::Enter => d.notify_selected(),
                    _ => None,
                },
                Tab::Map => match code {
                    KeyCode::Char('+' | '=') => {
                        d.zoom_in();
                        None
                    }
                    KeyCode::Char('-') => {
                        d.zoom_out();
                        None
                    }
                    KeyCode::Char('/' | 's') => {
                        d.start_editing(Field::NearbyQuery);
                        None
                    }
                    _ => None,
                },
                Tab::Clients => {
                    if matches!(code, KeyCode::Char('/' | 's')) {
                        d.start_editing(Field::ClientSearch);
                    }
                    None
                }
                Tab::Messages => match code {
                    KeyCode::Up => {
                        d.select_message(-1);
                        None
                    }
                    KeyCode::Down => {
                        d.select_message(1);
                        None
                    }
                    KeyCode::Char('m') | KeyCode::Enter => {
                        d.mark_selected_read();
                        None
                    }
                    KeyCode::Char('a') => {
                        d.archive_selected();
                        None
                    }
                    KeyCode::Char('t') => d.triage_selected(),
                    _ => None,
                },
            },
        };
        self.submit(request);
    }

    fn handle_editing(&mut self, field: Field, code: KeyCode) {
        let d = &mut self.dashboard;
        match code {
            KeyCode::Enter => {
                d.stop_editing();
                if field == Field::NearbyQuery {
                    let request = d.search_nearby();
                    self.submit(request);
                }
            }
            KeyCode::Esc => d.stop_editing(),
            KeyCode::Backspace => d.pop_char(),
            KeyCode::Char(c) => d.push_char(c),
            _ => {}
        }
    }
}

impl AppController for DashboardApp {
    fn update(&mut self, action: Action) {
        match action {
            Action::Tick(dt) => self.dashboard.tick(dt),
            Action::Key(key) => self.handle_key(key),
            Action::Service(event) => {
                tracing::debug!(?event, "assistant call settled");
                self.dashboard.apply(event);
            }
            Action::Resize(..) => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        ui::render(f, &self.dashboard);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
