// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize a payload and return it as a JSON response.
pub fn json_response<T: Serialize>(payload: &T) -> ResultResp {
    let body = serde_json::to_vec(payload).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
