use crate::db::connection::Database;
use crate::db::{find_property, list_properties};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{map_page, property_page};
use astra::{Body, Request, ResponseBuilder};

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let properties = list_properties(db)?;
            html_response(map_page(&properties))
        }

        ("GET", "/api/properties") => {
            let properties = list_properties(db)?;
            json_response(&properties)
        }

        ("GET", path) if path.starts_with("/properties/") => {
            let id = parse_property_id(path)?;
            let detail = find_property(db, id)?;
            html_response(property_page(&detail))
        }

        ("GET", path) if path.starts_with("/static/") => serve_static(path),

        _ => Err(ServerError::NotFound),
    }
}

/// Serves the handful of files under static/. Only plain file names are
/// allowed; anything with a path step in it is a 404.
fn serve_static(path: &str) -> ResultResp {
    let name = path.strip_prefix("/static/").unwrap_or_default();
    if name.is_empty() || name.contains('/') || name.contains("..") {
        return Err(ServerError::NotFound);
    }

    let content_type = match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    let bytes = std::fs::read(format!("static/{name}")).map_err(|_| ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

/// `/properties/{id}` -> id. Anything trailing or non-numeric is a 404,
/// not a 400: those paths simply do not exist.
fn parse_property_id(path: &str) -> Result<i64, ServerError> {
    path.strip_prefix("/properties/")
        .and_then(|rest| rest.parse::<i64>().ok())
        .ok_or(ServerError::NotFound)
}
