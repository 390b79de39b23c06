//! Live map tab.
//!
//! The scene is drawn on a braille canvas spanning the 800×600 viewport.
//! Scene coordinates grow downwards, canvas coordinates upwards, so every
//! point goes through [`to_canvas`] after the zoom transform.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as Segment, Points},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};
use wf_map::scene::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use wf_map::{palette, AnimationFrame, Point, Scene};
use wf_models::{compass_point, TrafficIntensity};

use super::{color, intensity_color, EMERALD, MUTED, TEAL};
use crate::app_state::{Field, InputMode};
use crate::dashboard::Dashboard;

/// Scene point after zoom, in canvas space.
pub fn to_canvas(scene: &Scene, p: Point) -> (f64, f64) {
    let t = scene.transform.apply(p);
    (t.x, VIEWPORT_HEIGHT - t.y)
}

pub fn render(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(cols[0]);
    render_canvas(f, left[0], dashboard);
    render_search(f, left[1], dashboard);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Min(5),
        ])
        .split(cols[1]);
    render_unit(f, right[0], dashboard);
    render_traffic(f, right[1], dashboard);
    render_nearby(f, right[2], dashboard);
}

fn draw_scene(ctx: &mut Context<'_>, scene: &Scene, frame: &AnimationFrame) {
    let scale = scene.transform.scale;

    for road in &scene.roads {
        let c = color(road.color);
        for pair in road.path.points().windows(2) {
            let (x1, y1) = to_canvas(scene, pair[0]);
            let (x2, y2) = to_canvas(scene, pair[1]);
            ctx.draw(&Segment::new(x1, y1, x2, y2, c));
        }
    }
    ctx.layer();

    for stop in &scene.stops {
        let (x, y) = to_canvas(scene, stop.position);
        ctx.draw(&Circle {
            x,
            y,
            radius: 8.0 * scale,
            color: color(stop.fill),
        });
        ctx.print(
            x + 14.0 * scale,
            y - 4.0 * scale,
            Span::styled(stop.name.clone(), Style::default().fg(Color::White)),
        );
    }

    // Fade is approximated by hiding the ring once it is nearly transparent.
    if frame.pulse.opacity > 0.05 {
        let (x, y) = to_canvas(scene, frame.pulse.center);
        ctx.draw(&Circle {
            x,
            y,
            radius: frame.pulse.radius * scale,
            color: color(palette::LIME),
        });
    }
    let (vx, vy) = to_canvas(scene, scene.vehicle);
    ctx.draw(&Circle {
        x: vx,
        y: vy,
        radius: 8.0 * scale,
        color: Color::White,
    });
    ctx.draw(&Points {
        coords: &[(vx, vy)],
        color: color(palette::LIME),
    });
    ctx.layer();

    let dots: Vec<(f64, f64)> = frame
        .dots
        .iter()
        .map(|d| to_canvas(scene, d.position))
        .collect();
    ctx.draw(&Points {
        coords: &dots,
        color: Color::White,
    });
}

fn render_canvas(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let view = dashboard.map();
    let scene = view.scene();
    let frame = view.frame();
    let zoom = view.zoom();

    let title = Line::from(vec![
        Span::styled(
            " Fleet Distribution Map ",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· Magnification: {}% ", zoom.percent()),
            Style::default().fg(MUTED),
        ),
    ]);
    let legend = Line::from(vec![
        Span::styled(" ■ Heavy ", Style::default().fg(intensity_color(TrafficIntensity::Heavy))),
        Span::styled("■ Moderate ", Style::default().fg(intensity_color(TrafficIntensity::Moderate))),
        Span::styled("■ Low ", Style::default().fg(intensity_color(TrafficIntensity::Low))),
    ]);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(legend),
        )
        .background_color(color(palette::NIGHT))
        .marker(Marker::Braille)
        .x_bounds([0.0, VIEWPORT_WIDTH])
        .y_bounds([0.0, VIEWPORT_HEIGHT])
        .paint(|ctx| draw_scene(ctx, scene, &frame));
    f.render_widget(canvas, area);
}

fn render_search(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let editing = dashboard.input_mode == InputMode::Editing(Field::NearbyQuery);
    let (text, style) = if dashboard.nearby_query.is_empty() && !editing {
        (
            "Search for facilities or partners near fleet position",
            Style::default().fg(MUTED),
        )
    } else if editing {
        (dashboard.nearby_query.as_str(), Style::default().fg(Color::Yellow))
    } else {
        (dashboard.nearby_query.as_str(), Style::default())
    };
    let title = if dashboard.searching_nearby {
        "Nearby services · searching..."
    } else {
        "Nearby services [/]"
    };
    f.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_unit(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let t = &dashboard.transport;
    let now = chrono::Local::now();
    let lines = vec![
        Line::from(vec![
            Span::styled("IVECO Daily Pharma ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("#WF-2024", Style::default().fg(TEAL)),
        ]),
        Line::from(vec![
            Span::styled("Velocity ", Style::default().fg(MUTED)),
            Span::styled(format!("{} KM/H", t.speed), Style::default().fg(EMERALD)),
        ]),
        Line::from(vec![
            Span::styled("Bearing  ", Style::default().fg(MUTED)),
            Span::styled(
                format!("{}° {}", t.heading, compass_point(t.heading)),
                Style::default().fg(EMERALD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Position ", Style::default().fg(MUTED)),
            Span::raw(format!(
                "{} ({:.4}, {:.4})",
                t.current_location.name, t.current_location.lat, t.current_location.lng
            )),
        ]),
        Line::from(Span::styled(
            now.format("%H:%M:%S · %d %b %Y").to_string(),
            Style::default().fg(MUTED),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Assigned Unit")),
        area,
    );
}

fn render_traffic(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let segments = &dashboard.transport.traffic_segments;
    let lines: Vec<Line> = if segments.is_empty() {
        vec![Line::from(Span::styled(
            if dashboard.refreshing_tip {
                "Querying live traffic..."
            } else {
                "No traffic data yet [r]"
            },
            Style::default().fg(MUTED),
        ))]
    } else {
        segments
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(intensity_color(s.intensity))),
                    Span::raw(format!("{:<18}", s.label)),
                    Span::styled(s.intensity.to_string(), Style::default().fg(intensity_color(s.intensity))),
                ])
            })
            .collect()
    };
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Traffic Status Feed")),
        area,
    );
}

fn render_nearby(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mut lines = Vec::new();
    match &dashboard.nearby {
        Some(results) => {
            lines.push(Line::from(results.text.as_str()));
            for link in &results.links {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    link.title.as_str(),
                    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(link.uri.as_str(), Style::default().fg(MUTED))));
            }
        }
        None if dashboard.searching_nearby => {
            lines.push(Line::from(Span::styled("Searching...", Style::default().fg(MUTED))));
        }
        None => {}
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Nearby Results")),
        area,
    );
}
