//! Router-level tests exercising the REST API end to end.
//!
//! Each request goes through a fresh `Router` sharing one `GameStore`,
//! driven with `tower::ServiceExt::oneshot` - no sockets involved.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tictactoe_server::{GameStateBody, GameStore, Mark, create_app};
use tower::ServiceExt;

/// Makes a GET request and returns status and body text.
async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Makes a POST request with a JSON body and returns status and body text.
async fn post_json(app: Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Creates a game through the API and returns its state.
async fn create_game(store: &GameStore, json: &str) -> GameStateBody {
    let (status, body) = post_json(create_app(store.clone()), "/games", json).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_app(GameStore::new());

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["message"], "Healthy");
}

#[tokio::test]
async fn test_websocket_usage_doc() {
    let app = create_app(GameStore::new());

    let (status, body) = get(app, "/docs/websocket-usage").await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(response["note"].as_str().unwrap().contains("No WebSocket"));
}

#[tokio::test]
async fn test_create_game_defaults_to_x() {
    let store = GameStore::new();

    let game = create_game(&store, r#"{}"#).await;

    assert_eq!(game.board, vec![None; 9]);
    assert_eq!(game.current_player, Mark::X);
    assert_eq!(game.winner, None);
    assert!(!game.is_draw);
    assert_eq!(game.moves_count, 0);
}

#[tokio::test]
async fn test_create_game_with_o_first() {
    let store = GameStore::new();

    let game = create_game(&store, r#"{"first_player": "O"}"#).await;

    assert_eq!(game.current_player, Mark::O);
}

#[tokio::test]
async fn test_create_game_invalid_mark_rejected() {
    let app = create_app(GameStore::new());

    let (status, _) = post_json(app, "/games", r#"{"first_player": "Z"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_game_malformed_body_rejected() {
    let app = create_app(GameStore::new());

    let (status, body) = post_json(app, "/games", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("detail"));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let store = GameStore::new();

    let first = create_game(&store, r#"{}"#).await;
    let second = create_game(&store, r#"{}"#).await;

    assert_ne!(first.game_id, second.game_id);
}

#[tokio::test]
async fn test_get_game_returns_state() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    let (status, body) = get(
        create_app(store.clone()),
        &format!("/games/{}", game.game_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let fetched: GameStateBody = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched.game_id, game.game_id);
    assert_eq!(fetched.board, vec![None; 9]);
}

#[tokio::test]
async fn test_get_unknown_game_not_found() {
    let app = create_app(GameStore::new());

    let (status, body) = get(app, "/games/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Game not found"));
}

#[tokio::test]
async fn test_move_updates_state() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    let (status, body) = post_json(
        create_app(store.clone()),
        &format!("/games/{}/move", game.game_id),
        r#"{"position": 0, "player": "X"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: GameStateBody = serde_json::from_str(&body).unwrap();
    assert_eq!(updated.board[0], Some(Mark::X));
    assert_eq!(updated.current_player, Mark::O);
    assert_eq!(updated.moves_count, 1);
}

#[tokio::test]
async fn test_move_on_unknown_game_not_found() {
    let app = create_app(GameStore::new());

    let (status, _) = post_json(
        app,
        "/games/nope/move",
        r#"{"position": 0, "player": "X"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_occupied_cell_rejected() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;
    let uri = format!("/games/{}/move", game.game_id);

    let (status, _) = post_json(
        create_app(store.clone()),
        &uri,
        r#"{"position": 0, "player": "X"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        create_app(store.clone()),
        &uri,
        r#"{"position": 0, "player": "O"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Cell already occupied"));
}

#[tokio::test]
async fn test_move_wrong_turn_rejected() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;
    let uri = format!("/games/{}/move", game.game_id);

    post_json(
        create_app(store.clone()),
        &uri,
        r#"{"position": 0, "player": "X"}"#,
    )
    .await;

    let (status, body) = post_json(
        create_app(store.clone()),
        &uri,
        r#"{"position": 1, "player": "X"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("turn"));
}

#[tokio::test]
async fn test_move_out_of_range_rejected() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    let (status, body) = post_json(
        create_app(store.clone()),
        &format!("/games/{}/move", game.game_id),
        r#"{"position": 9, "player": "X"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("out of range"));
}

#[tokio::test]
async fn test_move_rejection_leaves_state_unchanged() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    post_json(
        create_app(store.clone()),
        &format!("/games/{}/move", game.game_id),
        r#"{"position": 1, "player": "O"}"#,
    )
    .await;

    let (_, body) = get(
        create_app(store.clone()),
        &format!("/games/{}", game.game_id),
    )
    .await;
    let fetched: GameStateBody = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched.board, vec![None; 9]);
    assert_eq!(fetched.current_player, Mark::X);
    assert_eq!(fetched.moves_count, 0);
}

/// Plays a full sequence of moves through the API, asserting each succeeds.
async fn play_sequence(store: &GameStore, game_id: &str, moves: &[(usize, &str)]) -> GameStateBody {
    let uri = format!("/games/{game_id}/move");
    let mut last = None;
    for &(position, player) in moves {
        let (status, body) = post_json(
            create_app(store.clone()),
            &uri,
            &format!(r#"{{"position": {position}, "player": "{player}"}}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "move {player}:{position} failed: {body}");
        last = Some(serde_json::from_str(&body).unwrap());
    }
    last.expect("at least one move")
}

#[tokio::test]
async fn test_game_flow_x_wins_top_row() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    let state = play_sequence(
        &store,
        &game.game_id,
        &[(0, "X"), (3, "O"), (1, "X"), (4, "O"), (2, "X")],
    )
    .await;

    assert_eq!(state.winner, Some(Mark::X));
    assert!(!state.is_draw);
    assert_eq!(state.moves_count, 5);
}

#[tokio::test]
async fn test_game_flow_draw() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    let state = play_sequence(
        &store,
        &game.game_id,
        &[
            (0, "X"),
            (1, "O"),
            (2, "X"),
            (3, "O"),
            (4, "X"),
            (5, "O"),
            (7, "X"),
            (6, "O"),
            (8, "X"),
        ],
    )
    .await;

    assert!(state.is_draw);
    assert_eq!(state.winner, None);
    assert_eq!(state.moves_count, 9);
}

#[tokio::test]
async fn test_move_on_finished_game_conflicts() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{}"#).await;

    play_sequence(
        &store,
        &game.game_id,
        &[(0, "X"), (3, "O"), (1, "X"), (4, "O"), (2, "X")],
    )
    .await;

    let (status, body) = post_json(
        create_app(store.clone()),
        &format!("/games/{}/move", game.game_id),
        r#"{"position": 8, "player": "O"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("already finished"));
}

#[tokio::test]
async fn test_reset_returns_fresh_state() {
    let store = GameStore::new();
    let game = create_game(&store, r#"{"first_player": "O"}"#).await;

    play_sequence(
        &store,
        &game.game_id,
        &[(0, "O"), (3, "X"), (1, "O"), (4, "X"), (2, "O")],
    )
    .await;

    let (status, body) = post_json(
        create_app(store.clone()),
        &format!("/games/{}/reset", game.game_id),
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reset: GameStateBody = serde_json::from_str(&body).unwrap();
    assert_eq!(reset.game_id, game.game_id);
    assert_eq!(reset.board, vec![None; 9]);
    assert_eq!(reset.current_player, Mark::X, "reset always restarts with X");
    assert_eq!(reset.winner, None);
    assert!(!reset.is_draw);
    assert_eq!(reset.moves_count, 0);
}

#[tokio::test]
async fn test_reset_unknown_game_not_found() {
    let app = create_app(GameStore::new());

    let (status, _) = post_json(app, "/games/nope/reset", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
