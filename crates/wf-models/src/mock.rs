//! Session mock data.
//!
//! The dashboard starts from these literals; only traffic segments, the AI
//! tip and local message flags change afterwards.

use chrono::{DateTime, TimeDelta, Utc};

use crate::client::{Client, ClientId, ClientStatus};
use crate::message::{Message, MessageId, Priority};
use crate::route::{Location, RouteStop, StopId, StopKind, StopStatus, TransportState};

/// Pharma partners shown in the client directory.
pub fn clients() -> Vec<Client> {
    vec![
        client(
            "c1",
            "Giulia Ferrari",
            "FarmaNord S.p.A.",
            "giulia.ferrari@farmanord.it",
            "+39 02 8845 1120",
            ClientStatus::Active,
            "2024-05-18",
        ),
        client(
            "c2",
            "Marco Bianchi",
            "Bianchi Healthcare Logistics",
            "m.bianchi@bianchihealth.it",
            "+39 051 442 9087",
            ClientStatus::Active,
            "2024-05-16",
        ),
        client(
            "c3",
            "Elena Russo",
            "Ospedale San Raffaele Pharmacy",
            "elena.russo@hsr-pharmacy.it",
            "+39 02 2643 3310",
            ClientStatus::Pending,
            "2024-04-29",
        ),
        client(
            "c4",
            "Luca Romano",
            "Toscana Farma Distribuzione",
            "l.romano@toscanafarma.it",
            "+39 055 731 5524",
            ClientStatus::Inactive,
            "2024-02-11",
        ),
    ]
}

fn client(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    phone: &str,
    status: ClientStatus,
    last_transport: &str,
) -> Client {
    Client {
        id: ClientId::new(id),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        avatar: format!("https://picsum.photos/seed/{id}/200"),
        status,
        last_transport: last_transport.to_string(),
    }
}

/// Inbound messages, timestamped relative to `now`.
pub fn messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: MessageId::new("m1"),
            client_id: ClientId::new("c1"),
            client_name: "Giulia Ferrari".into(),
            content: "The insulin consignment for Bologna must stay between 2 and 8 °C. \
                      Please confirm the reefer unit was checked before departure."
                .into(),
            timestamp: now - TimeDelta::minutes(12),
            is_read: false,
            priority: Priority::High,
        },
        Message {
            id: MessageId::new("m2"),
            client_id: ClientId::new("c3"),
            client_name: "Elena Russo".into(),
            content: "Can we move tomorrow's delivery window to the afternoon? \
                      Our receiving dock is closed until 14:00."
                .into(),
            timestamp: now - TimeDelta::minutes(47),
            is_read: false,
            priority: Priority::Medium,
        },
        Message {
            id: MessageId::new("m3"),
            client_id: ClientId::new("c2"),
            client_name: "Marco Bianchi".into(),
            content: "Documents for the Milan pickup received, thanks. All in order.".into(),
            timestamp: now - TimeDelta::hours(3),
            is_read: true,
            priority: Priority::Low,
        },
    ]
}

/// Today's route, in driving order.
pub fn route() -> Vec<RouteStop> {
    vec![
        stop("r1", "Milan", StopKind::Pickup, "Mercedes Sprinter 316 Cold Chain", StopStatus::Completed, "08:30"),
        stop("r2", "Bologna", StopKind::Delivery, "Iveco Daily Isotermico", StopStatus::InProgress, "11:45"),
        stop("r3", "Florence", StopKind::Pickup, "Fiat Ducato Frigo", StopStatus::Scheduled, "14:20"),
        stop("r4", "Rome", StopKind::Delivery, "Mercedes Sprinter 316 Cold Chain", StopStatus::Scheduled, "18:10"),
    ]
}

fn stop(
    id: &str,
    location: &str,
    kind: StopKind,
    car_model: &str,
    status: StopStatus,
    estimated_time: &str,
) -> RouteStop {
    RouteStop {
        id: StopId::new(id),
        location: location.to_string(),
        kind,
        car_model: car_model.to_string(),
        status,
        estimated_time: estimated_time.to_string(),
    }
}

/// Initial vehicle state: near Florence, no traffic data yet.
pub fn transport_state() -> TransportState {
    TransportState {
        current_location: Location {
            lat: 43.7696,
            lng: 11.2558,
            name: "Florence".into(),
        },
        active_route: route(),
        speed: 105,
        heading: 185,
        traffic_segments: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mock_ids_are_unique() {
        let ids: HashSet<_> = clients().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 4);
        let ids: HashSet<_> = route().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn route_runs_milan_to_rome() {
        let names: Vec<_> = route().into_iter().map(|s| s.location).collect();
        assert_eq!(names, vec!["Milan", "Bologna", "Florence", "Rome"]);
    }

    #[test]
    fn messages_are_newest_first() {
        let now = Utc::now();
        let msgs = messages(now);
        assert!(msgs.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
        assert!(msgs.iter().all(|m| m.timestamp < now));
    }

    #[test]
    fn initial_transport_state() {
        let state = transport_state();
        assert_eq!(state.current_location.name, "Florence");
        assert_eq!(state.speed, 105);
        assert_eq!(state.heading, 185);
        assert!(state.traffic_segments.is_empty());
        assert_eq!(state.active_route, route());
    }
}
