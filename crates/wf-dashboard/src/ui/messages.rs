use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{priority_color, EMERALD, MUTED, ORANGE};
use crate::dashboard::Dashboard;

pub fn render(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = dashboard
        .messages
        .iter()
        .map(|m| {
            let unread = if m.is_read { "  " } else { "● " };
            ListItem::new(Line::from(vec![
                Span::styled(unread, Style::default().fg(EMERALD)),
                Span::styled(
                    format!("{:<7}", m.priority.to_string()),
                    Style::default().fg(priority_color(m.priority)),
                ),
                Span::raw(m.client_name.as_str()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Communications ({} unread)", dashboard.pending_requests())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
        .highlight_symbol(">> ");
    let mut state = ListState::default().with_selected(
        (!dashboard.messages.is_empty()).then_some(dashboard.message_selected),
    );
    f.render_stateful_widget(list, chunks[0], &mut state);

    let detail_block = Block::default()
        .borders(Borders::ALL)
        .title("Secure Logistical Messaging");
    let Some(msg) = dashboard.selected_message() else {
        f.render_widget(
            Paragraph::new(Span::styled("No messages", Style::default().fg(MUTED))).block(detail_block),
            chunks[1],
        );
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            msg.client_name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", msg.client_id), Style::default().fg(MUTED)),
    ])];
    if msg.is_high_priority() {
        lines.push(Line::from(Span::styled(
            "CRITICAL PAYLOAD",
            Style::default().fg(Color::White).bg(ORANGE).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        msg.timestamp
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(msg.content.as_str()));
    lines.push(Line::from(""));

    match dashboard.insight_for(&msg.id) {
        Some(insight) => {
            lines.push(Line::from(Span::styled(
                "AI TRIAGE",
                Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("Priority: ", Style::default().fg(MUTED)),
                Span::styled(
                    insight.priority.to_string(),
                    Style::default().fg(priority_color(insight.priority)),
                ),
                Span::styled("   Sentiment: ", Style::default().fg(MUTED)),
                Span::raw(insight.sentiment.to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Suggested action: ", Style::default().fg(MUTED)),
                Span::raw(insight.suggested_action.as_str()),
            ]));
        }
        None if dashboard.analyzing => {
            lines.push(Line::from(Span::styled("Analyzing...", Style::default().fg(MUTED))));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "[t] AI triage   [m] mark read   [a] archive",
                Style::default().fg(MUTED),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(detail_block),
        chunks[1],
    );
}
