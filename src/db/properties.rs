use crate::db::connection::Database;
use crate::domain::{PropertyDetail, PropertySummary};
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension, Row};

/// Every listing in insertion order. The map page renders pins in exactly
/// this order.
pub fn list_properties(db: &Database) -> Result<Vec<PropertySummary>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT
                    id, name, address, bedrooms, bathrooms, price,
                    feature_image_url, map_link_url, latitude, longitude
                FROM properties
                ORDER BY id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], summary_from_row)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// One listing with the fields the detail page shows, or `NotFound`.
pub fn find_property(db: &Database, id: i64) -> Result<PropertyDetail, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            r#"
            SELECT
                id, name, address, bedrooms, bathrooms, price,
                feature_image_url, map_link_url, latitude, longitude,
                description, listed_at
            FROM properties
            WHERE id = ?1
            "#,
            params![id],
            |row| {
                Ok(PropertyDetail {
                    summary: summary_from_row(row)?,
                    description: row.get(10)?,
                    listed_at: row.get(11)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))?
        .ok_or(ServerError::NotFound)
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<PropertySummary> {
    Ok(PropertySummary {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        bedrooms: row.get(3)?,
        bathrooms: row.get(4)?,
        price: row.get(5)?,
        feature_image_url: row.get(6)?,
        map_link_url: row.get(7)?,
        latitude: row.get(8)?,
        longitude: row.get(9)?,
    })
}
