//! # WF Map
//!
//! The live operations map: a fixed road network and stop markers drawn in
//! an 800×600 viewport, colored by traffic intensity, zoomed about the
//! viewport center, with two looping animations.
//!
//! The crate separates the two concerns of the view:
//!
//! * [`build_scene`] turns the current inputs (traffic segments, zoom, ...)
//!   into an immutable [`Scene`]. It is pure and is called again whenever
//!   an input changes.
//! * [`Animator`] owns one clock per animated entity (the vehicle pulse and
//!   one flow dot per congested road) and is advanced by a single
//!   [`Animator::tick`] step. It is built from a scene and dropped with it.
//!
//! ```
//! use std::time::Duration;
//! use wf_map::{build_scene, Animator, SceneInputs, Zoom};
//! use wf_models::{mock, TrafficIntensity, TrafficSegment};
//!
//! let state = mock::transport_state();
//! let segments = vec![TrafficSegment::new("s1", TrafficIntensity::Heavy, "A1 North")];
//! let scene = build_scene(&SceneInputs {
//!     current_location: &state.current_location,
//!     stops: &state.active_route,
//!     segments: &segments,
//!     zoom: Zoom::default(),
//! });
//!
//! let mut animator = Animator::for_scene(&scene);
//! animator.tick(Duration::from_millis(750));
//! let frame = animator.frame(&scene);
//! assert_eq!(frame.dots.len(), 3); // every road maps to the single Heavy segment
//! let svg = wf_map::render_svg(&scene, &frame);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod animation;
pub mod geometry;
pub mod palette;
pub mod scene;
pub mod svg;
pub mod zoom;

pub use animation::{AnimationFrame, Animator, DotSample, FlowDot, LoopClock, PulseRing};
pub use geometry::{Point, Polyline, Transform};
pub use palette::{intensity_color, stop_fill, Rgb};
pub use scene::{build_scene, segment_for_road, FlowSpeed, Road, Scene, SceneInputs, StopMarker};
pub use svg::render_svg;
pub use zoom::Zoom;
