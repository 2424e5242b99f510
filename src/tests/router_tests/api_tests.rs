use crate::domain::PropertySummary;
use crate::router::handle;
use crate::tests::utils::{init_test_db, seed_property, summary_at};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn api_returns_the_property_list_as_json() {
    let db = init_test_db();
    seed_property(&db, &summary_at(1, 19.4326, -99.1332));
    seed_property(&db, &summary_at(2, 20.6597, -103.3496));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/properties")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json; charset=utf-8"
    );

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    let properties: Vec<PropertySummary> = serde_json::from_str(&body).unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0], summary_at(1, 19.4326, -99.1332));
    assert_eq!(properties[1].latitude, Some(20.6597));
}
