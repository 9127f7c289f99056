use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{Activities, HealthResponse, HealthStatus, RosterInfo, UptimeInfo};
use mergington::log;

use crate::services::ActivityService;

fn uptime_seconds(started_at: chrono::DateTime<chrono::Utc>) -> i64 {
    (chrono::Utc::now() - started_at).num_seconds()
}

fn human_readable_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let seconds = uptime_seconds(started_at);
    UptimeInfo {
        seconds,
        human: human_readable_uptime(seconds),
    }
}

fn roster_info(activities: &Activities) -> RosterInfo {
    RosterInfo {
        activities: activities.len(),
        participants: activities.values().map(|a| a.participants.len()).sum(),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let activities = state.activities.list().await.unwrap_or_default();

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        roster: roster_info(&activities),
    };

    log::info!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use mergington::data::Activity;

    use super::*;

    #[test]
    fn roster_info_counts_every_enrolment() {
        let activities: Activities = [
            (
                "Chess Club".to_string(),
                Activity::new("Chess", "Fridays", 12).with_participants(["a@x.edu", "b@x.edu"]),
            ),
            ("Art Club".to_string(), Activity::new("Art", "Thursdays", 18)),
        ]
        .into_iter()
        .collect();

        let info = roster_info(&activities);
        assert_eq!(info.activities, 2);
        assert_eq!(info.participants, 2);
    }

    #[test]
    fn human_readable_uptime_picks_largest_unit() {
        assert_eq!(human_readable_uptime(42), "42s");
        assert_eq!(human_readable_uptime(125), "2m 5s");
        assert_eq!(human_readable_uptime(3 * 3600 + 61), "3h 1m 1s");
        assert_eq!(human_readable_uptime(2 * 86400 + 3600), "2d 1h 0m 0s");
    }
}
