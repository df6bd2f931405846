use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game session id extracted from the `{game_id}` route path parameter.
///
/// Validates the format only; whether the session exists is the service
/// layer's question (and a 404 there).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub Uuid);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameId, AppError> {
    let raw = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;

    let id = raw.parse::<Uuid>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;

    Ok(GameId(id))
}
