// HTTP request handlers
use crate::application::browse_service::{BrowsePage, BrowseRequest};
use crate::domain::dataset::ChartDataset;
use crate::domain::error::BrowseError;
use crate::domain::navigation::NavCommands;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters of the browse endpoint. The navigation buttons submit
/// their flags as bare parameters, so presence is what matters, not value.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(rename = "_from")]
    pub from: Option<String>,
    #[serde(rename = "_to")]
    pub to: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub next_hour: Option<String>,
    pub prev_hour: Option<String>,
    pub next_day: Option<String>,
    pub prev_day: Option<String>,
}

impl BrowseQuery {
    fn into_request(self) -> BrowseRequest {
        BrowseRequest {
            from: self.from,
            to: self.to,
            commands: NavCommands {
                next: self.next.is_some(),
                prev: self.prev.is_some(),
                next_hour: self.next_hour.is_some(),
                prev_hour: self.prev_hour.is_some(),
                next_day: self.next_day.is_some(),
                prev_day: self.prev_day.is_some(),
            },
        }
    }
}

/// Payload handed to the rendering layer: resolved bounds for the
/// navigation controls plus the live and static chart datasets.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    #[serde(rename = "_from")]
    pub from: String,
    #[serde(rename = "_to")]
    pub to: String,
    pub source: ChartDataset,
    pub source_static: ChartDataset,
}

impl From<BrowsePage> for BrowseResponse {
    fn from(page: BrowsePage) -> Self {
        Self {
            from: page.from,
            to: page.to,
            source: page.datasets.source,
            source_static: page.datasets.source_static,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Browse the flux archive: resolve the window from the query parameters,
/// run the pipeline, return the chart-ready dataset.
pub async fn browse(
    Query(query): Query<BrowseQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.browse_service.browse(query.into_request()).await {
        Ok(page) => Json(BrowseResponse::from(page)).into_response(),
        Err(e) => {
            tracing::error!("Browse request failed: {}", e);
            let status = match &e {
                BrowseError::MalformedRange { .. } | BrowseError::TimestampParse(_) => {
                    StatusCode::BAD_REQUEST
                }
                BrowseError::DataSource(_) => StatusCode::BAD_GATEWAY,
            };
            (status, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_presence_maps_to_commands() {
        let query = BrowseQuery {
            next: Some(String::new()),
            prev_day: Some(String::new()),
            ..Default::default()
        };
        let request = query.into_request();
        assert!(request.commands.next);
        assert!(request.commands.prev_day);
        assert!(!request.commands.prev);
        assert!(!request.commands.next_hour);
    }

    #[test]
    fn test_query_string_deserializes_bare_flags() {
        let query: BrowseQuery =
            serde_urlencoded::from_str("_from=2011-06-07 00:00&_to=2011-06-07 12:00&next_hour")
                .unwrap();
        assert_eq!(query.from.as_deref(), Some("2011-06-07 00:00"));
        assert!(query.next_hour.is_some());
        assert!(query.next.is_none());
    }
}
