pub mod chrome;
pub mod clients;
pub mod map;
pub mod messages;
pub mod overview;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};
use wf_map::Rgb;
use wf_models::{ClientStatus, Priority, StopStatus, TrafficIntensity};

use crate::app_state::Tab;
use crate::dashboard::Dashboard;

// Brand palette
pub const TEAL: Color = Color::Rgb(0x00, 0x8b, 0x8b);
pub const EMERALD: Color = Color::Rgb(0x34, 0xd3, 0x99);
pub const MUTED: Color = Color::Rgb(0x04, 0x78, 0x57);
pub const ORANGE: Color = Color::Rgb(0xfb, 0x92, 0x3c);

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn intensity_color(intensity: TrafficIntensity) -> Color {
    color(wf_map::intensity_color(Some(intensity)))
}

pub fn stop_color(status: StopStatus) -> Color {
    color(wf_map::stop_fill(status))
}

pub fn client_status_color(status: ClientStatus) -> Color {
    match status {
        ClientStatus::Active => EMERALD,
        ClientStatus::Pending => Color::Yellow,
        ClientStatus::Inactive => Color::DarkGray,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ORANGE,
        Priority::Medium => Color::Yellow,
        Priority::Low => MUTED,
    }
}

/// Draw the whole screen for the current state.
pub fn render(f: &mut Frame, dashboard: &Dashboard) {
    if dashboard.in_splash() {
        chrome::render_splash(f, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    chrome::render_header(f, chunks[0], dashboard);
    match dashboard.tab {
        Tab::Dashboard => overview::render(f, chunks[1], dashboard),
        Tab::Map => map::render(f, chunks[1], dashboard),
        Tab::Clients => clients::render(f, chunks[1], dashboard),
        Tab::Messages => messages::render(f, chunks[1], dashboard),
    }
    chrome::render_footer(f, chunks[2], dashboard);

    if let Some(modal) = &dashboard.notify {
        chrome::render_notify_modal(f, modal, dashboard.drafting, dashboard.sending);
    }
}
