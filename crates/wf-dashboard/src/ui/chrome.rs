//! Splash, header, footer and overlays shared by every tab.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use strum::IntoEnumIterator;
use wf_map::Zoom;

use super::{EMERALD, MUTED, TEAL};
use crate::app_state::{Field, InputMode, Tab};
use crate::dashboard::{Dashboard, NotifyModal};

pub fn render_splash(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "  ▟▙  ",
            Style::default().fg(Color::White).bg(TEAL),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "WF AUTOTRASPORTI",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "L O G I S T I C A   F A R M A C E U T I C A",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("DAL 2004", Style::default().fg(MUTED))),
    ];
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn render_header(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let titles: Vec<Line> = Tab::iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {tab}", i + 1)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(dashboard.tab.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(EMERALD).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " WF AUTOTRASPORTI · Logistica Farmaceutica ",
                    Style::default().fg(TEAL).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(tabs, area);
}

/// `+` and `-` hints, dimmed when the zoom is at that limit.
pub fn zoom_hints(zoom: Zoom) -> Vec<Span<'static>> {
    let key = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(EMERALD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };
    vec![
        key("+", zoom.can_zoom_in()),
        Span::styled("/", Style::default().fg(MUTED)),
        key("-", zoom.can_zoom_out()),
        Span::styled(" zoom · ", Style::default().fg(MUTED)),
    ]
}

pub fn render_footer(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let hints = match (dashboard.input_mode, dashboard.tab) {
        (InputMode::Editing(Field::NearbyQuery), _) => "Enter search · Esc cancel",
        (InputMode::Editing(Field::ClientSearch), _) => "Type to filter · Enter/Esc done",
        (_, _) if dashboard.notify.is_some() => "Enter send · Esc cancel",
        (_, Tab::Dashboard) => "↑↓ stop · n notify · r refresh tip · Tab switch · q quit",
        (_, Tab::Map) => "/ nearby search · r refresh traffic · q quit",
        (_, Tab::Clients) => "/ search · Tab switch · q quit",
        (_, Tab::Messages) => "↑↓ select · m mark read · a archive · t AI triage · q quit",
    };
    let mut spans = Vec::new();
    if dashboard.tab == Tab::Map && dashboard.input_mode == InputMode::Normal && dashboard.notify.is_none() {
        spans.extend(zoom_hints(dashboard.map().zoom()));
    }
    let sent = dashboard.outbox.len();
    spans.extend([
        Span::styled(hints, Style::default().fg(MUTED)),
        Span::raw("  "),
        Span::styled(
            format!("outbox: {sent}"),
            Style::default().fg(if sent > 0 { EMERALD } else { MUTED }),
        ),
    ]);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_notify_modal(f: &mut Frame, modal: &NotifyModal, drafting: bool, sending: bool) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let body = if drafting {
        Span::styled("Drafting notification...", Style::default().fg(MUTED))
    } else {
        Span::styled(modal.draft.as_str(), Style::default().fg(Color::White))
    };
    let status = if sending {
        Span::styled("Sending...", Style::default().fg(Color::Yellow))
    } else if drafting {
        Span::raw("")
    } else {
        Span::styled("[Enter] Send   [Esc] Cancel", Style::default().fg(EMERALD))
    };

    let text = vec![
        Line::from(vec![
            Span::styled("To: ", Style::default().fg(MUTED)),
            Span::raw(format!(
                "{} · {} · ETA {}",
                modal.stop.location, modal.stop.car_model, modal.stop.estimated_time
            )),
        ]),
        Line::from(""),
        Line::from(body),
        Line::from(""),
        Line::from(status),
    ];
    let widget = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Client Notification")
            .style(Style::default().bg(Color::Black)),
    );
    f.render_widget(widget, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
