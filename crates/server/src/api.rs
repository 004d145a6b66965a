//! JSON API surface: recommendation generation plus profile, saved-look and
//! liked-look persistence.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use lookbook_core::config::AppConfig;
use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};
use lookbook_core::{
    ApplicationError, Catalog, InterfaceError, Product, StyleReport, StylistEngine,
    UserPreferences,
};
use lookbook_db::repositories::{
    LikedLookRepository, ProfileRepository, RepositoryError, SavedLookRepository,
    SqlLikedLookRepository, SqlProfileRepository, SqlSavedLookRepository,
};
use lookbook_db::DbPool;

#[derive(Clone)]
pub struct ApiState {
    pub db_pool: DbPool,
    pub config: AppConfig,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/recommendations", post(create_recommendations))
        .route("/api/profiles/{user_id}", get(get_profile).put(put_profile))
        .route(
            "/api/users/{user_id}/saved-looks",
            get(list_saved_looks).post(create_saved_look),
        )
        .route("/api/saved-looks/{id}", delete(delete_saved_look))
        .route("/api/users/{user_id}/liked-looks", get(list_liked_looks))
        .route("/api/users/{user_id}/liked-looks/toggle", post(toggle_liked_look))
        .with_state(state)
}

// ---- error plumbing ---------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    correlation_id: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
    correlation_id: String,
}

impl ApiError {
    fn not_found(what: &str, correlation_id: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{what} not found"),
            correlation_id,
        }
    }

    fn from_interface(error: InterfaceError) -> Self {
        let (status, correlation_id) = match &error {
            InterfaceError::BadRequest { correlation_id, .. } => {
                (StatusCode::BAD_REQUEST, correlation_id.clone())
            }
            InterfaceError::ServiceUnavailable { correlation_id, .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, correlation_id.clone())
            }
            InterfaceError::Internal { correlation_id, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, correlation_id.clone())
            }
        };
        warn!(correlation_id = correlation_id.as_str(), error = %error, "request failed");
        Self { status, message: error.user_message().to_string(), correlation_id }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body =
            Json(ErrorBody { error: self.message, correlation_id: self.correlation_id });
        (self.status, body).into_response()
    }
}

fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn persistence_error(error: RepositoryError, correlation_id: String) -> ApiError {
    ApiError::from_interface(
        ApplicationError::Persistence(error.to_string()).into_interface(correlation_id),
    )
}

// ---- recommendations --------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    /// Accepted for interface compatibility; no image is ever inspected.
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

async fn create_recommendations(
    State(state): State<ApiState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<StyleReport>, ApiError> {
    let correlation_id = new_correlation_id();

    if request.image_ref.is_some() {
        info!(
            correlation_id = correlation_id.as_str(),
            "image reference supplied; analysis is simulated and the image is ignored"
        );
    }

    let style_request = request.preferences.validate().map_err(|err| {
        ApiError::from_interface(ApplicationError::from(err).into_interface(correlation_id.clone()))
    })?;

    let count = request.count.unwrap_or(state.config.stylist.default_count).clamp(1, 20);
    let mut engine = match state.config.stylist.rng_seed {
        Some(seed) => StylistEngine::with_seed(Catalog::builtin(), seed),
        None => StylistEngine::new(Catalog::builtin()),
    };
    let report = engine.recommend(&style_request, count);

    info!(
        correlation_id = correlation_id.as_str(),
        outfits = report.outfits.len(),
        "recommendations generated"
    );
    Ok(Json(report))
}

// ---- profiles ---------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub gender: String,
    pub age_group: String,
    pub skin_tone: String,
    pub body_type: String,
    #[serde(default)]
    pub style_personality: Vec<String>,
}

async fn get_profile(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<StyleProfile>, ApiError> {
    let correlation_id = new_correlation_id();
    let repo = SqlProfileRepository::new(state.db_pool.clone());
    let profile = repo
        .find_by_user(&UserId(user_id))
        .await
        .map_err(|err| persistence_error(err, correlation_id.clone()))?
        .ok_or_else(|| ApiError::not_found("profile", correlation_id))?;
    Ok(Json(profile))
}

async fn put_profile(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<StyleProfile>, ApiError> {
    let correlation_id = new_correlation_id();
    let profile = StyleProfile {
        user_id: UserId(user_id),
        gender: update.gender,
        age_group: update.age_group,
        skin_tone: update.skin_tone,
        body_type: update.body_type,
        style_personality: update.style_personality,
        updated_at: Utc::now(),
    };

    let repo = SqlProfileRepository::new(state.db_pool.clone());
    repo.save(profile.clone())
        .await
        .map_err(|err| persistence_error(err, correlation_id))?;
    Ok(Json(profile))
}

// ---- saved looks ------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SaveLookRequest {
    pub look_name: String,
    pub occasion: String,
    pub items: Vec<Product>,
}

async fn list_saved_looks(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SavedLook>>, ApiError> {
    let correlation_id = new_correlation_id();
    let repo = SqlSavedLookRepository::new(state.db_pool.clone());
    let looks = repo
        .list_for_user(&UserId(user_id))
        .await
        .map_err(|err| persistence_error(err, correlation_id))?;
    Ok(Json(looks))
}

async fn create_saved_look(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Json(request): Json<SaveLookRequest>,
) -> Result<(StatusCode, Json<SavedLook>), ApiError> {
    let correlation_id = new_correlation_id();
    if request.items.is_empty() {
        return Err(ApiError::from_interface(
            ApplicationError::from(lookbook_core::DomainError::InvariantViolation(
                "a saved look needs at least one item".to_string(),
            ))
            .into_interface(correlation_id),
        ));
    }

    let total_price: Decimal = request.items.iter().map(|item| item.price).sum();
    let look = SavedLook {
        id: SavedLookId(Uuid::new_v4().to_string()),
        user_id: UserId(user_id),
        look_name: request.look_name,
        items: request.items,
        total_price,
        occasion: request.occasion,
        created_at: Utc::now(),
    };

    let repo = SqlSavedLookRepository::new(state.db_pool.clone());
    repo.save(look.clone())
        .await
        .map_err(|err| persistence_error(err, correlation_id))?;
    Ok((StatusCode::CREATED, Json(look)))
}

async fn delete_saved_look(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let correlation_id = new_correlation_id();
    let repo = SqlSavedLookRepository::new(state.db_pool.clone());
    let removed = repo
        .delete(&SavedLookId(id))
        .await
        .map_err(|err| persistence_error(err, correlation_id.clone()))?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("saved look", correlation_id))
    }
}

// ---- liked looks ------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LikeToggleRequest {
    pub outfit_id: String,
    pub look_name: String,
}

#[derive(Debug, Serialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
}

async fn list_liked_looks(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<LikedLook>>, ApiError> {
    let correlation_id = new_correlation_id();
    let repo = SqlLikedLookRepository::new(state.db_pool.clone());
    let likes = repo
        .list_for_user(&UserId(user_id))
        .await
        .map_err(|err| persistence_error(err, correlation_id))?;
    Ok(Json(likes))
}

async fn toggle_liked_look(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Json(request): Json<LikeToggleRequest>,
) -> Result<Json<LikeToggleResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let repo = SqlLikedLookRepository::new(state.db_pool.clone());
    let liked = repo
        .toggle(LikedLook {
            user_id: UserId(user_id),
            outfit_id: request.outfit_id,
            look_name: request.look_name,
            created_at: Utc::now(),
        })
        .await
        .map_err(|err| persistence_error(err, correlation_id))?;
    Ok(Json(LikeToggleResponse { liked }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use lookbook_core::config::AppConfig;
    use lookbook_db::{connect_with_settings, migrations};

    use super::{router, ApiState};

    async fn test_router() -> axum::Router {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        migrations::run_pending(&pool).await.expect("migrate");
        let mut config = AppConfig::default();
        config.stylist.rng_seed = Some(42);
        router(ApiState { db_pool: pool, config })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn preferences_body(budget: i64) -> Value {
        json!({
            "gender": "male",
            "age_group": "adult",
            "skin_tone": "medium",
            "body_type": "athletic",
            "occasion": "business professional",
            "season": "fall",
            "budget": budget.to_string(),
        })
    }

    #[tokio::test]
    async fn recommendations_endpoint_returns_ranked_outfits() {
        let app = test_router().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/recommendations",
                preferences_body(700),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let outfits = body["outfits"].as_array().expect("outfits array");
        assert!(!outfits.is_empty());
        assert_eq!(outfits[0]["look_name"], "Power Business");
        assert!(body["analysis"]["estimated_age"].is_number());
    }

    #[tokio::test]
    async fn non_positive_budget_is_a_bad_request() {
        let app = test_router().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/recommendations",
                preferences_body(0),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["correlation_id"].is_string());
    }

    #[tokio::test]
    async fn profile_put_then_get_roundtrips() {
        let app = test_router().await;

        let put = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/profiles/u-api-1",
                json!({
                    "gender": "male",
                    "age_group": "young-adult",
                    "skin_tone": "olive",
                    "body_type": "slim",
                    "style_personality": ["minimal"],
                }),
            ))
            .await
            .expect("put response");
        assert_eq!(put.status(), StatusCode::OK);

        let get = app
            .oneshot(
                Request::builder()
                    .uri("/api/profiles/u-api-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("get response");
        assert_eq!(get.status(), StatusCode::OK);
        let body = body_json(get).await;
        assert_eq!(body["skin_tone"], "olive");
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let app = test_router().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profiles/nobody")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn like_toggle_flips_between_calls() {
        let app = test_router().await;
        let payload = json!({ "outfit_id": "look-a-b-c", "look_name": "Night Out Style" });

        let first = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/users/u-api-2/liked-looks/toggle",
                payload.clone(),
            ))
            .await
            .expect("first toggle");
        assert_eq!(body_json(first).await["liked"], true);

        let second = app
            .oneshot(json_request(
                Method::POST,
                "/api/users/u-api-2/liked-looks/toggle",
                payload,
            ))
            .await
            .expect("second toggle");
        assert_eq!(body_json(second).await["liked"], false);
    }
}
