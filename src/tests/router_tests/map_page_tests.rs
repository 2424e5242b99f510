use crate::domain::PropertySummary;
use crate::router::handle;
use crate::tests::utils::{init_test_db, seed_property, summary_at, unresolvable_summary};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn map_page_embeds_resolved_pins_with_cards() {
    let db = init_test_db();
    seed_property(&db, &summary_at(1, 19.4326, -99.1332));
    seed_property(&db, &summary_at(2, 20.6597, -103.3496));

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("window.__MAP_PINS__"));
    assert!(body.contains("19.4326"));
    assert!(body.contains("Listing 1"));
    assert!(body.contains("marker-card"));
    assert!(body.contains("window.__MAP_STYLE__"));
    assert!(body.contains("2 listings, 2 on the map"));
}

#[test]
fn unresolvable_listing_is_counted_but_not_pinned() {
    let db = init_test_db();
    seed_property(&db, &summary_at(1, 19.4326, -99.1332));
    seed_property(&db, &unresolvable_summary(2));

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    let body = body_string(resp);

    assert!(body.contains("2 listings, 1 on the map"));
}

#[test]
fn map_page_renders_with_no_listings_at_all() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("0 listings, 0 on the map"));
    assert!(body.contains("window.__MAP_PINS__ = []"));
}

#[test]
fn map_page_embeds_the_exact_host_fragments() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    let body = body_string(resp);

    assert!(body.contains(&crate::map::host::loading_markup().into_string()));
    assert!(body.contains(&crate::map::host::map_canvas_markup().into_string()));
}

#[test]
fn hostile_property_name_cannot_break_out_of_the_data_island() {
    let db = init_test_db();
    seed_property(
        &db,
        &PropertySummary {
            name: "</script><script>alert(1)</script>".to_string(),
            ..summary_at(1, 19.4326, -99.1332)
        },
    );

    let resp = handle(get("/"), &db).expect("Failed to handle request");
    let body = body_string(resp);

    // The name must never reach the page as a literal closing tag.
    assert!(!body.contains("</script><script>alert(1)</script>"));
    // It survives inside the JSON payload, just with `<` escaped so the
    // HTML parser cannot see a tag in it.
    assert!(body.contains("\\u003c/script>\\u003cscript>alert(1)"));
}

#[test]
fn static_assets_are_served_with_their_content_type() {
    let db = init_test_db();

    let resp = handle(get("/static/map.js"), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/javascript; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains("__MAP_PINS__"));
}

#[test]
fn static_route_rejects_path_traversal() {
    let db = init_test_db();

    let err = handle(get("/static/../Cargo.toml"), &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/nope"), &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}
