//! Dashboard state and the operations that mutate it.
//!
//! [`Dashboard`] is synchronous and owns every piece of UI state. Operations
//! that need the assistant return a [`Request`] for the dispatcher and set
//! the matching busy flag; the flag is cleared when the [`ServiceEvent`]
//! comes back through [`Dashboard::apply`]. A trigger while its flag is set
//! returns `None`, like a disabled button.

use std::collections::HashMap;
use std::time::Duration;

use wf_map::{build_scene, AnimationFrame, Animator, Scene, SceneInputs, Zoom};
use wf_models::{
    filter_clients, mock, unread_count, Client, Message, MessageId, MessageInsight, NearbyPlaces,
    RouteStop, SentNotification, StopId, TransportState,
};
use wf_sdk::fallback;

use crate::app_state::{Field, InputMode, Tab};
use crate::dispatch::{Request, ServiceEvent};

pub const INITIAL_TIP: &str = "Analyzing current route patterns...";
pub const REFRESHING_TIP: &str = "Querying live satellite traffic...";
/// Shown on the "Active Fleet" card.
pub const ACTIVE_FLEET: &str = "4";
pub const NETWORK_UPTIME: &str = "99.9%";

// ---------------------------------------------------------------------------
// Map view
// ---------------------------------------------------------------------------

/// The scene currently on screen and the clocks animating it.
///
/// Rebuilding replaces both, which restarts every animation.
#[derive(Debug, Clone)]
pub struct MapView {
    zoom: Zoom,
    scene: Scene,
    animator: Animator,
}

impl MapView {
    fn new(transport: &TransportState, zoom: Zoom) -> Self {
        let scene = build_scene(&SceneInputs {
            current_location: &transport.current_location,
            stops: &transport.active_route,
            segments: &transport.traffic_segments,
            zoom,
        });
        let animator = Animator::for_scene(&scene);
        Self {
            zoom,
            scene,
            animator,
        }
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame(&self) -> AnimationFrame {
        self.animator.frame(&self.scene)
    }
}

// ---------------------------------------------------------------------------
// Notification modal
// ---------------------------------------------------------------------------

/// The arrival notification being drafted or confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyModal {
    pub stop: RouteStop,
    /// Empty while drafting.
    pub draft: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub tab: Tab,
    pub input_mode: InputMode,
    splash_remaining: Duration,

    pub tip: String,
    pub refreshing_tip: bool,
    pub transport: TransportState,
    pub route_selected: usize,
    map: MapView,

    pub clients: Vec<Client>,
    pub client_search: String,

    pub messages: Vec<Message>,
    pub message_selected: usize,
    pub insights: HashMap<MessageId, MessageInsight>,
    pub analyzing: bool,

    pub nearby_query: String,
    pub nearby: Option<NearbyPlaces>,
    pub searching_nearby: bool,

    pub notify: Option<NotifyModal>,
    pub drafting: bool,
    pub sending: bool,
    pub outbox: Vec<SentNotification>,
}

impl Dashboard {
    /// Session state from the mock data, with the splash up for `splash`.
    pub fn new(splash: Duration) -> Self {
        let transport = mock::transport_state();
        let map = MapView::new(&transport, Zoom::default());
        Self {
            tab: Tab::default(),
            input_mode: InputMode::Normal,
            splash_remaining: splash,
            tip: INITIAL_TIP.to_string(),
            refreshing_tip: false,
            transport,
            route_selected: 0,
            map,
            clients: mock::clients(),
            client_search: String::new(),
            messages: mock::messages(chrono::Utc::now()),
            message_selected: 0,
            insights: HashMap::new(),
            analyzing: false,
            nearby_query: String::new(),
            nearby: None,
            searching_nearby: false,
            notify: None,
            drafting: false,
            sending: false,
            outbox: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    pub fn in_splash(&self) -> bool {
        !self.splash_remaining.is_zero()
    }

    pub fn tick(&mut self, dt: Duration) {
        self.splash_remaining = self.splash_remaining.saturating_sub(dt);
        self.map.animator.tick(dt);
    }

    // ------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------

    pub fn map(&self) -> &MapView {
        &self.map
    }

    fn rebuild_map(&mut self, zoom: Zoom) {
        self.map = MapView::new(&self.transport, zoom);
    }

    /// No-op at the upper limit, so the animations keep running.
    pub fn zoom_in(&mut self) {
        if self.map.zoom.can_zoom_in() {
            self.rebuild_map(self.map.zoom.zoom_in());
        }
    }

    pub fn zoom_out(&mut self) {
        if self.map.zoom.can_zoom_out() {
            self.rebuild_map(self.map.zoom.zoom_out());
        }
    }

    // ------------------------------------------------------------------
    // AI tip
    // ------------------------------------------------------------------

    /// Text for the tip banner.
    pub fn tip_text(&self) -> &str {
        if self.refreshing_tip {
            REFRESHING_TIP
        } else {
            &self.tip
        }
    }

    pub fn refresh_tip(&mut self) -> Option<Request> {
        if self.refreshing_tip {
            return None;
        }
        self.refreshing_tip = true;
        Some(Request::RefreshTip {
            stops: self.transport.active_route.clone(),
            location: self.transport.current_location.name.clone(),
        })
    }

    // ------------------------------------------------------------------
    // Nearby search
    // ------------------------------------------------------------------

    pub fn search_nearby(&mut self) -> Option<Request> {
        let query = self.nearby_query.trim();
        if query.is_empty() || self.searching_nearby {
            return None;
        }
        let request = Request::SearchNearby {
            query: query.to_string(),
            lat: self.transport.current_location.lat,
            lng: self.transport.current_location.lng,
        };
        self.searching_nearby = true;
        self.nearby = None;
        Some(request)
    }

    // ------------------------------------------------------------------
    // Route and notifications
    // ------------------------------------------------------------------

    pub fn route(&self) -> &[RouteStop] {
        &self.transport.active_route
    }

    pub fn select_stop(&mut self, delta: isize) {
        self.route_selected = step(self.route_selected, self.route().len(), delta);
    }

    pub fn selected_stop(&self) -> Option<&RouteStop> {
        self.route().get(self.route_selected)
    }

    /// Open the modal for the selected stop and start drafting.
    pub fn notify_selected(&mut self) -> Option<Request> {
        if self.notify.is_some() || self.drafting {
            return None;
        }
        let stop = self.selected_stop().filter(|s| s.can_notify())?.clone();
        self.drafting = true;
        self.notify = Some(NotifyModal {
            stop: stop.clone(),
            draft: String::new(),
        });
        Some(Request::DraftNotification { stop })
    }

    pub fn confirm_send(&mut self) -> Option<Request> {
        if self.drafting || self.sending {
            return None;
        }
        let modal = self.notify.as_ref()?;
        self.sending = true;
        Some(Request::SendNotification {
            stop_id: modal.stop.id.clone(),
            text: modal.draft.clone(),
        })
    }

    /// Close the modal. Not possible while sending.
    pub fn cancel_notify(&mut self) {
        if !self.sending {
            self.notify = None;
        }
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    pub fn visible_clients(&self) -> Vec<&Client> {
        filter_clients(&self.clients, &self.client_search)
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    pub fn pending_requests(&self) -> usize {
        unread_count(&self.messages)
    }

    pub fn select_message(&mut self, delta: isize) {
        self.message_selected = step(self.message_selected, self.messages.len(), delta);
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.messages.get(self.message_selected)
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(m) = self.messages.get_mut(self.message_selected) {
            m.is_read = true;
        }
    }

    pub fn archive_selected(&mut self) {
        if self.message_selected >= self.messages.len() {
            return;
        }
        let removed = self.messages.remove(self.message_selected);
        self.insights.remove(&removed.id);
        self.message_selected = self
            .message_selected
            .min(self.messages.len().saturating_sub(1));
    }

    pub fn triage_selected(&mut self) -> Option<Request> {
        if self.analyzing {
            return None;
        }
        let message = self.selected_message()?;
        let request = Request::AnalyzeMessage {
            id: message.id.clone(),
            content: message.content.clone(),
        };
        self.analyzing = true;
        Some(request)
    }

    // ------------------------------------------------------------------
    // Text input
    // ------------------------------------------------------------------

    pub fn start_editing(&mut self, field: Field) {
        self.input_mode = InputMode::Editing(field);
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ClientSearch => &mut self.client_search,
            Field::NearbyQuery => &mut self.nearby_query,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let InputMode::Editing(field) = self.input_mode {
            self.field_mut(field).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let InputMode::Editing(field) = self.input_mode {
            self.field_mut(field).pop();
        }
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    /// Merge a settled call. Busy flags are always cleared.
    pub fn apply(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::TipRefreshed(result) => {
                self.refreshing_tip = false;
                if let Some((advice, report)) = result {
                    self.tip = format!("{advice} Traffic Report: {}", report.tip);
                    self.transport.replace_traffic(report.segments);
                    self.rebuild_map(self.map.zoom);
                }
            }
            ServiceEvent::NearbySettled(result) => {
                self.searching_nearby = false;
                self.nearby = result;
            }
            ServiceEvent::DraftSettled { stop_id, draft } => {
                self.drafting = false;
                if let Some(modal) = self.notify.as_mut().filter(|m| m.stop.id == stop_id) {
                    modal.draft = draft.unwrap_or_else(|| fallback::arrival_notification(&modal.stop));
                }
            }
            ServiceEvent::NotificationSent {
                stop_id,
                text,
                delivered,
            } => {
                self.sending = false;
                self.notify = None;
                if delivered {
                    tracing::info!(stop = %stop_id, "arrival notification sent");
                    self.outbox.push(SentNotification::now(stop_id, text));
                }
            }
            ServiceEvent::TriageSettled { id, insight } => {
                self.analyzing = false;
                if let Some(insight) = insight {
                    if self.messages.iter().any(|m| m.id == id) {
                        self.insights.insert(id, insight);
                    }
                }
            }
        }
    }

    pub fn insight_for(&self, id: &MessageId) -> Option<&MessageInsight> {
        self.insights.get(id)
    }

    pub fn last_sent_for(&self, stop_id: &StopId) -> Option<&SentNotification> {
        self.outbox.iter().rev().find(|n| &n.stop_id == stop_id)
    }
}

/// Move a list cursor by `delta`, wrapping at both ends.
fn step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let shift = delta.unsigned_abs() % len;
    if delta >= 0 {
        (current + shift) % len
    } else {
        (current + len - shift) % len
    }
}
