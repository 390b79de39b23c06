//! Background assistant calls.
//!
//! The dashboard state never awaits anything. It returns a [`Request`]; the
//! [`Dispatcher`] runs it on the tokio runtime and reports back with exactly
//! one [`ServiceEvent`] on the action channel, also when the task panics.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use wf_models::{MessageId, MessageInsight, NearbyPlaces, RouteStop, StopId, TrafficReport};
use wf_sdk::AssistantClient;

use crate::tui::Action;

/// Simulated delivery time of an arrival notification.
pub const SEND_DELAY: Duration = Duration::from_millis(1500);

/// Work the dashboard wants done off the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Route advice, then a traffic report for `location`.
    RefreshTip { stops: Vec<RouteStop>, location: String },
    SearchNearby { query: String, lat: f64, lng: f64 },
    DraftNotification { stop: RouteStop },
    SendNotification { stop_id: StopId, text: String },
    AnalyzeMessage { id: MessageId, content: String },
}

/// Outcome of a [`Request`]. `None` payloads mean the task died.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    TipRefreshed(Option<(String, TrafficReport)>),
    NearbySettled(Option<NearbyPlaces>),
    DraftSettled { stop_id: StopId, draft: Option<String> },
    NotificationSent { stop_id: StopId, text: String, delivered: bool },
    TriageSettled { id: MessageId, insight: Option<MessageInsight> },
}

#[derive(Clone)]
pub struct Dispatcher {
    client: AssistantClient,
    tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(client: AssistantClient, tx: UnboundedSender<Action>) -> Self {
        Self { client, tx }
    }

    pub fn dispatch(&self, request: Request) {
        let client = self.client.clone();
        match request {
            Request::RefreshTip { stops, location } => self.spawn(
                async move {
                    let advice = client.optimize_route(&stops).await;
                    let report = client.traffic_analysis(&location).await;
                    (advice, report)
                },
                ServiceEvent::TipRefreshed,
            ),
            Request::SearchNearby { query, lat, lng } => self.spawn(
                async move { client.nearby_places(&query, lat, lng).await },
                ServiceEvent::NearbySettled,
            ),
            Request::DraftNotification { stop } => {
                let stop_id = stop.id.clone();
                self.spawn(
                    async move { client.arrival_notification(&stop).await },
                    move |draft| ServiceEvent::DraftSettled { stop_id, draft },
                );
            }
            Request::SendNotification { stop_id, text } => {
                tracing::info!(stop = %stop_id, "sending arrival notification");
                self.spawn(tokio::time::sleep(SEND_DELAY), move |done| {
                    ServiceEvent::NotificationSent {
                        stop_id,
                        text,
                        delivered: done.is_some(),
                    }
                });
            }
            Request::AnalyzeMessage { id, content } => {
                let event_id = id.clone();
                self.spawn(
                    async move { client.analyze_message(&content).await },
                    move |insight| ServiceEvent::TriageSettled {
                        id: event_id,
                        insight,
                    },
                );
            }
        }
    }

    fn spawn<T, F, S>(&self, work: F, settle: S)
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        S: FnOnce(Option<T>) -> ServiceEvent + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = tokio::spawn(work);
        tokio::spawn(async move {
            let outcome = match handle.await {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!(error = %e, "assistant task failed");
                    None
                }
            };
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(Action::Service(settle(outcome)));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use wf_models::mock;
    use wf_sdk::{fallback, AssistantConfig};

    fn offline() -> (Dispatcher, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Dispatcher::new(AssistantClient::new(AssistantConfig::default()), tx), rx)
    }

    async fn next_event(rx: &mut mpsc::UnboundedReceiver<Action>) -> ServiceEvent {
        match rx.recv().await {
            Some(Action::Service(event)) => event,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_settles_with_fallbacks() {
        let (dispatcher, mut rx) = offline();
        dispatcher.dispatch(Request::RefreshTip {
            stops: mock::route(),
            location: "Florence".into(),
        });
        assert_eq!(
            next_event(&mut rx).await,
            ServiceEvent::TipRefreshed(Some((fallback::route_advice(), fallback::traffic_report())))
        );
    }

    #[tokio::test]
    async fn draft_carries_its_stop() {
        let (dispatcher, mut rx) = offline();
        let stop = mock::route()[1].clone();
        dispatcher.dispatch(Request::DraftNotification { stop: stop.clone() });
        assert_eq!(
            next_event(&mut rx).await,
            ServiceEvent::DraftSettled {
                stop_id: stop.id.clone(),
                draft: Some(fallback::arrival_notification(&stop)),
            }
        );
    }

    #[tokio::test]
    async fn panicking_task_still_settles() {
        let (dispatcher, mut rx) = offline();
        dispatcher.spawn(async { panic!("boom") }, |v: Option<()>| {
            ServiceEvent::NearbySettled(v.map(|()| NearbyPlaces::default()))
        });
        assert_eq!(next_event(&mut rx).await, ServiceEvent::NearbySettled(None));
    }

    #[tokio::test]
    async fn send_waits_for_the_delay() {
        let (dispatcher, mut rx) = offline();
        let started = tokio::time::Instant::now();
        dispatcher.dispatch(Request::SendNotification {
            stop_id: StopId::new("r2"),
            text: "On our way".into(),
        });
        let event = next_event(&mut rx).await;
        assert!(started.elapsed() >= SEND_DELAY);
        assert_eq!(
            event,
            ServiceEvent::NotificationSent {
                stop_id: StopId::new("r2"),
                text: "On our way".into(),
                delivered: true,
            }
        );
    }
}
