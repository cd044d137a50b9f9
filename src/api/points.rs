//! Points API Client
//!
//! Item catalog, point listing/detail, and point creation.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{Item, NewPoint, Point};

const API_BASE: &str = "http://localhost:3333";

/// Characters escaped in query-string values.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'?');

/// Fetch the fixed item catalog.
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    let response = Request::get(&format!("{API_BASE}/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

/// Fetch points filtered by city, UF and selected item ids.
pub async fn fetch_points(uf: &str, city: &str, items: &[i64]) -> Result<Vec<Point>, String> {
    let url = format!("{API_BASE}/{}", points_query(uf, city, items));
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("points query failed: status {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Fetch one point by id.
pub async fn fetch_point(id: i64) -> Result<Point, String> {
    let response = Request::get(&format!("{API_BASE}/points/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("point {id} lookup failed: status {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Create a collection point. Any 2xx counts as success.
pub async fn create_point(point: &NewPoint) -> Result<(), String> {
    let response = Request::post(&format!("{API_BASE}/points"))
        .json(point)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("point creation rejected: status {}", response.status()))
    }
}

/// Build the listing path with encoded filter values. The `items` filter is
/// omitted when nothing is selected.
fn points_query(uf: &str, city: &str, items: &[i64]) -> String {
    let mut query = format!("points?city={}&uf={}", encode(city), encode(uf));
    if !items.is_empty() {
        let ids: Vec<String> = items.iter().map(|id| id.to_string()).collect();
        query.push_str("&items=");
        query.push_str(&ids.join(","));
    }
    query
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_omits_the_items_filter() {
        assert_eq!(points_query("SP", "Campinas", &[]), "points?city=Campinas&uf=SP");
    }

    #[test]
    fn single_item_selection_filters_by_that_id() {
        assert_eq!(
            points_query("SP", "Campinas", &[3]),
            "points?city=Campinas&uf=SP&items=3"
        );
    }

    #[test]
    fn multiple_ids_join_with_commas() {
        assert_eq!(
            points_query("RJ", "Niterói", &[2, 5]),
            "points?city=Niter%C3%B3i&uf=RJ&items=2,5"
        );
    }

    #[test]
    fn city_values_are_percent_encoded() {
        assert_eq!(
            points_query("SP", "São Paulo", &[]),
            "points?city=S%C3%A3o%20Paulo&uf=SP"
        );
    }
}
