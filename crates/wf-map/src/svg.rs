//! SVG rendering of a scene and one animation frame.

use crate::animation::AnimationFrame;
use crate::palette::{DIM, EMERALD, LIME, NIGHT, WHITE};
use crate::scene::{Scene, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

const GLOW_WIDTH: f64 = 6.0;
const GLOW_OPACITY: f64 = 0.15;
const ROAD_WIDTH: f64 = 3.0;
const ROAD_OPACITY: f64 = 0.6;
const MARKER_RADIUS: f64 = 8.0;
const STOP_STROKE_WIDTH: f64 = 2.0;
const VEHICLE_STROKE_WIDTH: f64 = 3.0;
const DOT_RADIUS: f64 = 2.0;
const DOT_OPACITY: f64 = 0.8;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `scene` with the animation state in `frame` as a standalone SVG
/// document.
pub fn render_svg(scene: &Scene, frame: &AnimationFrame) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {VIEWPORT_WIDTH} {VIEWPORT_HEIGHT}\" \
         width=\"{VIEWPORT_WIDTH}\" height=\"{VIEWPORT_HEIGHT}\">\n"
    );
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{NIGHT}\"/>\n"
    ));
    out.push_str(&format!("  <g transform=\"{}\">\n", scene.transform.to_svg()));

    for road in &scene.roads {
        let d = road.path.to_path_data();
        out.push_str(&format!(
            "    <path class=\"road-glow\" d=\"{d}\" fill=\"none\" stroke=\"{}\" \
             stroke-width=\"{GLOW_WIDTH}\" stroke-opacity=\"{GLOW_OPACITY}\" stroke-linecap=\"round\"/>\n",
            road.color
        ));
        out.push_str(&format!(
            "    <path class=\"road\" d=\"{d}\" fill=\"none\" stroke=\"{}\" \
             stroke-width=\"{ROAD_WIDTH}\" stroke-opacity=\"{ROAD_OPACITY}\" stroke-linecap=\"round\"/>\n",
            road.color
        ));
    }

    for stop in &scene.stops {
        let p = stop.position;
        out.push_str(&format!(
            "    <circle class=\"stop\" cx=\"{}\" cy=\"{}\" r=\"{MARKER_RADIUS}\" fill=\"{}\" \
             stroke=\"{DIM}\" stroke-width=\"{STOP_STROKE_WIDTH}\"/>\n",
            p.x, p.y, stop.fill
        ));
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" fill=\"{EMERALD}\" font-size=\"12\" font-weight=\"900\">{}</text>\n",
            p.x + 14.0,
            p.y + 4.0,
            escape(&stop.name)
        ));
    }

    let pulse = frame.pulse;
    out.push_str(&format!(
        "    <circle class=\"pulse\" cx=\"{}\" cy=\"{}\" r=\"{:.2}\" fill=\"{LIME}\" \
         opacity=\"{:.3}\"/>\n",
        pulse.center.x, pulse.center.y, pulse.radius, pulse.opacity
    ));
    out.push_str(&format!(
        "    <circle class=\"vehicle\" cx=\"{}\" cy=\"{}\" r=\"{MARKER_RADIUS}\" fill=\"{LIME}\" \
         stroke=\"{WHITE}\" stroke-width=\"{VEHICLE_STROKE_WIDTH}\"/>\n",
        scene.vehicle.x, scene.vehicle.y
    ));

    for dot in &frame.dots {
        out.push_str(&format!(
            "    <circle class=\"flow\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{DOT_RADIUS}\" fill=\"{WHITE}\" \
             fill-opacity=\"{DOT_OPACITY}\"/>\n",
            dot.position.x, dot.position.y
        ));
    }

    out.push_str("  </g>\n</svg>\n");
    out
}
