//! Game-related HTTP routes. All pile/cell indices are 0-based at this
//! boundary.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{GameSnapshot, MoveKind};
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::services::games;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    /// Optional deal seed; same seed, same deal. Omit for a random shuffle.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub moved: bool,
    pub won: bool,
    pub snapshot: GameSnapshot,
}

/// POST /api/games
///
/// Deal a fresh game and open a session for it.
async fn create_game(
    app_state: web::Data<AppState>,
    body: Option<web::Json<CreateGameRequest>>,
) -> Result<HttpResponse, AppError> {
    let seed = body.map(|b| b.into_inner()).unwrap_or_default().seed;
    let created = games::create_game(&app_state, seed)?;

    Ok(HttpResponse::Created().json(CreateGameResponse {
        game_id: created.game_id,
        snapshot: created.snapshot,
    }))
}

/// GET /api/games/{game_id}
///
/// Current board for the session, as a public snapshot.
async fn get_snapshot(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snap = games::game_snapshot(&app_state, game_id.0)?;
    Ok(HttpResponse::Ok().json(snap))
}

/// POST /api/games/{game_id}/moves
///
/// Apply one move. An illegal but well-formed move is a 200 with
/// `moved: false` and an unchanged board; malformed indices are a 400.
async fn post_move(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: web::Json<MoveKind>,
) -> Result<HttpResponse, AppError> {
    let outcome = games::apply_move(&app_state, game_id.0, body.into_inner())?;

    Ok(HttpResponse::Ok().json(MoveResponse {
        moved: outcome.moved,
        won: outcome.won,
        snapshot: outcome.snapshot,
    }))
}

/// POST /api/games/{game_id}/restart
///
/// Discard the session's board and deal a fresh one in place.
async fn restart_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: Option<web::Json<CreateGameRequest>>,
) -> Result<HttpResponse, AppError> {
    let seed = body.map(|b| b.into_inner()).unwrap_or_default().seed;
    let snap = games::restart(&app_state, game_id.0, seed)?;
    Ok(HttpResponse::Ok().json(snap))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    games::remove(&app_state, game_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_snapshot))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/moves").route(web::post().to(post_move)));
    cfg.service(web::resource("/{game_id}/restart").route(web::post().to(restart_game)));
}
