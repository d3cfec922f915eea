use crate::infra::{AppState, SiteState};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use passport_housing::catalog::{ListingFilter, Property};
use passport_housing::wizard::{ApplicationDraft, ApplicationWizard, WizardState, WizardStep};

pub(crate) fn site_router(state: SiteState) -> Router {
    Router::new()
        .route("/api/v1/properties", get(list_properties))
        .route("/api/v1/properties/:property_id", get(property_detail))
        .route("/api/v1/summer-sublets", get(summer_sublets))
        .route("/api/v1/site", get(site_document))
        .route("/api/v1/applications", post(submit_application))
        .with_state(state)
}

pub(crate) fn with_service_routes(state: SiteState) -> Router {
    site_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingQuery {
    pub(crate) neighborhood: Option<String>,
    pub(crate) bedrooms: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListingResponse {
    pub(crate) total: usize,
    pub(crate) matched: usize,
    pub(crate) neighborhoods: Vec<String>,
    pub(crate) bedroom_options: Vec<u32>,
    pub(crate) properties: Vec<Property>,
}

pub(crate) async fn list_properties(
    State(state): State<SiteState>,
    Query(query): Query<ListingQuery>,
) -> Json<ListingResponse> {
    let filter = ListingFilter {
        neighborhood: query.neighborhood,
        bedrooms: query.bedrooms,
    };
    let matched: Vec<Property> = state
        .catalog
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(ListingResponse {
        total: state.catalog.properties().len(),
        matched: matched.len(),
        neighborhoods: state.catalog.neighborhoods(),
        bedroom_options: state.catalog.bedroom_options(),
        properties: matched,
    })
}

pub(crate) async fn property_detail(
    State(state): State<SiteState>,
    Path(property_id): Path<String>,
) -> Response {
    match state.catalog.property_by_id(&property_id) {
        Some(property) => (StatusCode::OK, Json(property.clone())).into_response(),
        None => {
            let payload = json!({
                "error": "property not found",
                "property_id": property_id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SummerSubletResponse {
    pub(crate) total_bedrooms: u32,
    pub(crate) properties: Vec<Property>,
}

pub(crate) async fn summer_sublets(State(state): State<SiteState>) -> Json<SummerSubletResponse> {
    let properties: Vec<Property> = state
        .catalog
        .summer_sublets()
        .into_iter()
        .cloned()
        .collect();

    Json(SummerSubletResponse {
        total_bedrooms: state.catalog.summer_sublet_bedrooms(),
        properties,
    })
}

pub(crate) async fn site_document(State(state): State<SiteState>) -> Response {
    let document = state.site.fetch().await;
    Json(document.as_ref().clone()).into_response()
}

/// Drive a wizard through every step with the posted draft. The first
/// incomplete step is the one named in the 422; a complete draft goes
/// out through the configured port.
pub(crate) async fn submit_application(
    State(state): State<SiteState>,
    Json(draft): Json<ApplicationDraft>,
) -> Response {
    let mut wizard = ApplicationWizard::new(state.catalog.clone());
    if let Some(editable) = wizard.draft_mut() {
        *editable = draft;
    }

    for step in WizardStep::ordered() {
        if !wizard.step_complete(step) {
            let payload = json!({
                "error": "application incomplete",
                "step": step.label(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
        if step != WizardStep::Review {
            wizard.advance();
        }
    }

    match wizard.submit(state.submissions.as_ref()).await {
        WizardState::Submitted => {
            let summary = wizard.submitted().cloned();
            (StatusCode::ACCEPTED, Json(summary)).into_response()
        }
        _ => {
            let reason = wizard
                .last_rejection()
                .unwrap_or("submission failed")
                .to_string();
            let payload = json!({ "error": reason });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
