//! Web-Mercator Projection
//!
//! Pixel math for the tile map surface: (lat, lon) to world pixels at a
//! zoom level, the inverse, and the tile grid covering a fixed viewport.

use std::f64::consts::PI;

/// Standard OSM tile edge, px.
pub const TILE_SIZE: f64 = 256.0;

/// One positioned tile of the viewport grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    /// Offset from the viewport's top-left corner, px.
    pub left: f64,
    pub top: f64,
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * (1u32 << zoom) as f64
}

/// Project (lat, lon) degrees to world pixel coordinates at `zoom`.
pub fn world_px(coord: (f64, f64), zoom: u8) -> (f64, f64) {
    let (lat, lon) = coord;
    let size = world_size(zoom);
    let x = (lon + 180.0) / 360.0 * size;
    let lat_rad = lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse projection: world pixels at `zoom` back to (lat, lon) degrees.
pub fn coord_from_px(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees();
    (lat, lon)
}

fn viewport_origin(center: (f64, f64), zoom: u8, width: f64, height: f64) -> (f64, f64) {
    let (cx, cy) = world_px(center, zoom);
    (cx - width / 2.0, cy - height / 2.0)
}

/// Tiles covering a `width` x `height` viewport centered on `center`.
///
/// X indices wrap around the antimeridian; Y rows outside the world are
/// skipped.
pub fn tile_layout(center: (f64, f64), zoom: u8, width: f64, height: f64) -> Vec<TilePlacement> {
    let (left, top) = viewport_origin(center, zoom, width, height);
    let x0 = (left / TILE_SIZE).floor() as i64;
    let y0 = (top / TILE_SIZE).floor() as i64;
    let x1 = ((left + width) / TILE_SIZE).ceil() as i64;
    let y1 = ((top + height) / TILE_SIZE).ceil() as i64;
    let rows = 1i64 << zoom;

    let mut tiles = Vec::new();
    for ty in y0..y1 {
        if ty < 0 || ty >= rows {
            continue;
        }
        for tx in x0..x1 {
            tiles.push(TilePlacement {
                x: tx.rem_euclid(rows) as u32,
                y: ty as u32,
                z: zoom,
                left: tx as f64 * TILE_SIZE - left,
                top: ty as f64 * TILE_SIZE - top,
            });
        }
    }
    tiles
}

/// Pixel offset of `coord` from the viewport's top-left corner.
pub fn viewport_offset(
    center: (f64, f64),
    zoom: u8,
    width: f64,
    height: f64,
    coord: (f64, f64),
) -> (f64, f64) {
    let (left, top) = viewport_origin(center, zoom, width, height);
    let (px, py) = world_px(coord, zoom);
    (px - left, py - top)
}

/// Geographic coordinate under viewport pixel (`x`, `y`).
pub fn viewport_coord(
    center: (f64, f64),
    zoom: u8,
    width: f64,
    height: f64,
    x: f64,
    y: f64,
) -> (f64, f64) {
    let (left, top) = viewport_origin(center, zoom, width, height);
    coord_from_px(left + x, top + y, zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAO_PAULO: (f64, f64) = (-23.5505, -46.6333);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn origin_projects_to_world_center() {
        let (x, y) = world_px((0.0, 0.0), 0);
        assert!(close(x, 128.0));
        assert!(close(y, 128.0));
    }

    #[test]
    fn projection_round_trips() {
        let (x, y) = world_px(SAO_PAULO, 15);
        let (lat, lon) = coord_from_px(x, y, 15);
        assert!(close(lat, SAO_PAULO.0));
        assert!(close(lon, SAO_PAULO.1));
    }

    #[test]
    fn viewport_center_maps_to_viewport_middle() {
        let (dx, dy) = viewport_offset(SAO_PAULO, 15, 640.0, 400.0, SAO_PAULO);
        assert!(close(dx, 320.0));
        assert!(close(dy, 200.0));
    }

    #[test]
    fn picking_is_inverse_of_offset() {
        let picked = viewport_coord(SAO_PAULO, 15, 640.0, 400.0, 100.0, 250.0);
        let (dx, dy) = viewport_offset(SAO_PAULO, 15, 640.0, 400.0, picked);
        assert!(close(dx, 100.0));
        assert!(close(dy, 250.0));
    }

    #[test]
    fn layout_covers_the_viewport() {
        let tiles = tile_layout(SAO_PAULO, 15, 640.0, 400.0);
        assert!(!tiles.is_empty());
        let min_left = tiles.iter().map(|t| t.left).fold(f64::INFINITY, f64::min);
        let max_right = tiles
            .iter()
            .map(|t| t.left + TILE_SIZE)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_top = tiles.iter().map(|t| t.top).fold(f64::INFINITY, f64::min);
        let max_bottom = tiles
            .iter()
            .map(|t| t.top + TILE_SIZE)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(min_left <= 0.0 && max_right >= 640.0);
        assert!(min_top <= 0.0 && max_bottom >= 400.0);
    }

    #[test]
    fn layout_wraps_across_the_antimeridian() {
        let tiles = tile_layout((0.0, 180.0), 1, 512.0, 512.0);
        let rows = 2u32;
        assert!(tiles.iter().all(|t| t.x < rows && t.y < rows));
        assert!(tiles.iter().any(|t| t.x == 0));
        assert!(tiles.iter().any(|t| t.x == 1));
    }
}
