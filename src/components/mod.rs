//! UI Components
//!
//! Screens and reusable widgets.

mod completed;
mod create_point;
mod header;
mod home;
mod items_grid;
mod map_view;
mod point_detail;
mod points;
mod uf_city_select;

pub use completed::CompletedScreen;
pub use create_point::CreatePointScreen;
pub use header::Header;
pub use home::HomeScreen;
pub use items_grid::ItemsGrid;
pub use map_view::MapView;
pub use point_detail::PointDetailScreen;
pub use points::PointsScreen;
pub use uf_city_select::{UfCitySelect, CITY_NONE, UF_NONE};
