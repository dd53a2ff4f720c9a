//! HTTP surface, matching the original route table: a service banner, game
//! creation, game retrieval by name, and the click endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::dto::{BannerResponse, ClickRequest, CreateGameRequest, GameResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::GameStore;

pub fn create_router<S: GameStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/minesweeper", get(banner::<S>))
        .route(
            "/minesweeper/games",
            post(create_game::<S>).put(click::<S>),
        )
        .route("/minesweeper/games/{name}", get(load_game::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner<S: GameStore>(State(state): State<AppState<S>>) -> Json<BannerResponse> {
    Json(BannerResponse {
        name: state.service.banner().to_owned(),
    })
}

async fn create_game<S: GameStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let game = state.service.create_game(&req)?;
    Ok((StatusCode::CREATED, Json(GameResponse::from_game(&game))))
}

async fn load_game<S: GameStore>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.service.load_game(&name)?;
    Ok(Json(GameResponse::from_game(&game)))
}

async fn click<S: GameStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<ClickRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.service.click(&req)?;
    Ok(Json(GameResponse::from_game(&game)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::service::Minesweeper;
    use crate::store::MemoryStore;

    fn router() -> Router {
        let service = Minesweeper::new(MemoryStore::new());
        create_router(AppState::new(service))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn banner_endpoint_greets() {
        let response = router()
            .oneshot(Request::get("/minesweeper").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["name"], "Todas las hojas son del viento");
    }

    #[tokio::test]
    async fn create_returns_201_with_a_redacted_board() {
        let request = json_request(
            "POST",
            "/minesweeper/games",
            json!({"name": "g1", "rows": 5, "columns": 5, "mines": 5}),
        );
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["name"], "g1");
        assert_eq!(body["status"], "new");
        assert_eq!(body["revealed_count"], 0);
        assert_eq!(body["board"].as_array().unwrap().len(), 5);
        for row in body["board"].as_array().unwrap() {
            for cell in row.as_array().unwrap() {
                assert_eq!(cell["state"], "hidden");
            }
        }
    }

    #[tokio::test]
    async fn create_with_an_empty_name_is_a_bad_request() {
        let request = json_request("POST", "/minesweeper/games", json!({"rows": 5}));
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "MISSING_NAME");
    }

    #[tokio::test]
    async fn create_twice_with_one_name_conflicts() {
        let app = router();
        let body = json!({"name": "g1", "rows": 5, "columns": 5, "mines": 5});

        let first = app
            .clone()
            .oneshot(json_request("POST", "/minesweeper/games", body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(json_request("POST", "/minesweeper/games", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body = response_json(second).await;
        assert_eq!(body["error"], "DUPLICATE_NAME");
    }

    #[tokio::test]
    async fn load_returns_the_stored_game() {
        let app = router();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/minesweeper/games",
                json!({"name": "g1", "rows": 4, "columns": 6, "mines": 3}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get("/minesweeper/games/g1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["rows"], 4);
        assert_eq!(body["columns"], 6);
        assert_eq!(body["mines"], 3);
    }

    #[tokio::test]
    async fn load_of_an_unknown_game_is_not_found() {
        let response = router()
            .oneshot(
                Request::get("/minesweeper/games/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["error"], "GAME_NOT_FOUND");
    }

    #[tokio::test]
    async fn click_on_an_unknown_game_is_not_found() {
        let request = json_request(
            "PUT",
            "/minesweeper/games",
            json!({"name": "missing", "row": 0, "column": 0}),
        );
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn click_out_of_bounds_is_a_bad_request() {
        let app = router();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/minesweeper/games",
                json!({"name": "g1", "rows": 5, "columns": 5, "mines": 5}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/minesweeper/games",
                json!({"name": "g1", "row": -1, "column": 0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "INVALID_ROW");
    }

    #[tokio::test]
    async fn click_reveals_cells_or_ends_the_game() {
        let app = router();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/minesweeper/games",
                json!({"name": "g1", "rows": 5, "columns": 5, "mines": 5}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/minesweeper/games",
                json!({"name": "g1", "row": 2, "column": 2}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        match body["status"].as_str().unwrap() {
            "game_over" => assert_eq!(body["revealed_count"], 0),
            "new" | "victory" => assert!(body["revealed_count"].as_u64().unwrap() >= 1),
            status => panic!("unexpected status {status}"),
        }
    }
}
