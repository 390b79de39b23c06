//! Dashboard tab: stats cards, AI tip, route planner and inbox preview.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use wf_models::StopStatus;

use super::{priority_color, stop_color, EMERALD, MUTED, TEAL};
use crate::dashboard::{Dashboard, ACTIVE_FLEET, NETWORK_UPTIME};

const INBOX_PREVIEW: usize = 3;

pub fn render(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    render_stats(f, rows[0], dashboard);
    render_tip(f, rows[1], dashboard);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[2]);
    render_route(f, main[0], dashboard);
    render_inbox(f, main[1], dashboard);
}

fn render_stats(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let cards = [
        ("Active Fleet", ACTIVE_FLEET.to_string(), EMERALD),
        ("Pending Requests", dashboard.pending_requests().to_string(), Color::LightGreen),
        ("Pharma Partners", dashboard.clients.len().to_string(), TEAL),
        ("Network Uptime", NETWORK_UPTIME.to_string(), Color::Green),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    for ((label, value, color), col) in cards.into_iter().zip(cols.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(label.to_uppercase(), Style::default().fg(MUTED))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(card, *col);
    }
}

fn render_tip(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let style = if dashboard.refreshing_tip {
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::ITALIC)
    };
    let tip = Paragraph::new(Line::from(vec![
        Span::styled(
            "AI LOGISTICS TIP: ",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(dashboard.tip_text(), style),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Live Operations · HUB TR-102"),
    );
    f.render_widget(tip, area);
}

fn render_route(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let items: Vec<ListItem> = dashboard
        .route()
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let marker = if stop.status == StopStatus::Completed {
                "✔".to_string()
            } else {
                (i + 1).to_string()
            };
            let mut spans = vec![
                Span::styled(
                    format!(" {marker} "),
                    Style::default().fg(Color::Black).bg(stop_color(stop.status)),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:<10}", stop.location),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<9}", stop.kind.to_string()), Style::default().fg(MUTED)),
                Span::raw(format!("{:<34}", stop.car_model)),
                Span::styled(format!("{:>6}  ", stop.estimated_time), Style::default().fg(EMERALD)),
                Span::styled(stop.status.to_string(), Style::default().fg(stop_color(stop.status))),
            ];
            if stop.can_notify() {
                let label = if dashboard.last_sent_for(&stop.id).is_some() {
                    "  [notified]"
                } else {
                    "  [n] notify"
                };
                spans.push(Span::styled(label, Style::default().fg(TEAL)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Route Planner"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    let mut state = ListState::default().with_selected(Some(dashboard.route_selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_inbox(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mut lines = Vec::new();
    for msg in dashboard.messages.iter().take(INBOX_PREVIEW) {
        let name_style = if msg.is_read {
            Style::default().fg(MUTED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<6}", msg.priority.to_string()),
                Style::default().fg(priority_color(msg.priority)),
            ),
            Span::styled(msg.client_name.as_str(), name_style),
            Span::styled(
                format!("  {}", msg.timestamp.with_timezone(&chrono::Local).format("%H:%M")),
                Style::default().fg(MUTED),
            ),
        ]));
        lines.push(Line::from(Span::raw(format!("  {}", msg.content))));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("Inbox clear", Style::default().fg(MUTED))));
    }
    let inbox = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Inbound Terminal"));
    f.render_widget(inbox, area);
}
