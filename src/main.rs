use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod map;
mod responses;
mod router;
mod templates;


fn main() {
    let db = Database::new("estate_map.sqlite3");

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
