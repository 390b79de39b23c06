use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{client_status_color, EMERALD, MUTED};
use crate::app_state::{Field, InputMode};
use crate::dashboard::Dashboard;

pub fn render(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let editing = dashboard.input_mode == InputMode::Editing(Field::ClientSearch);
    let search = Paragraph::new(dashboard.client_search.as_str())
        .style(if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search partners (name or company)"),
        );
    f.render_widget(search, chunks[0]);

    let clients = dashboard.visible_clients();
    let title = format!("Pharma Partners · Authorized Logistics Portal ({})", clients.len());
    if clients.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No Partner Matches",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Nothing found for \"{}\"", dashboard.client_search),
                Style::default().fg(MUTED),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows = clients.into_iter().map(|c| {
        Row::new(vec![
            Cell::from(Span::styled(
                c.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Cell::from(c.company.as_str()),
            Cell::from(c.email.as_str()),
            Cell::from(c.phone.as_str()),
            Cell::from(Span::styled(
                c.status.to_string(),
                Style::default().fg(client_status_color(c.status)),
            )),
            Cell::from(Span::styled(c.last_transport.as_str(), Style::default().fg(MUTED))),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Min(24),
            Constraint::Length(30),
            Constraint::Length(18),
            Constraint::Length(9),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(["Contact", "Company", "Email", "Phone", "Status", "Last Run"])
            .style(Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, chunks[1]);
}
