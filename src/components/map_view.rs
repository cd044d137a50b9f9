//! Map Interaction Surface
//!
//! Fixed OSM tile viewport centered once on the given coordinate. Renders
//! one marker per point; optionally a single pickable submission marker
//! (web form) or clickable point markers (browse screen).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::mercator;
use crate::models::Point;

const MAP_WIDTH: f64 = 640.0;
const MAP_HEIGHT: f64 = 400.0;
const MAP_ZOOM: u8 = 15;
const TILE_URL: &str = "https://tile.openstreetmap.org";

#[component]
pub fn MapView(
    /// Initial center; plain value so a centered map never moves afterwards.
    center: (f64, f64),
    #[prop(optional, into)] points: Option<ReadSignal<Vec<Point>>>,
    #[prop(optional, into)] marker: Option<ReadSignal<Option<(f64, f64)>>>,
    #[prop(optional, into)] on_pick: Option<Callback<(f64, f64)>>,
    #[prop(optional, into)] on_marker_click: Option<Callback<i64>>,
) -> impl IntoView {
    let tiles = mercator::tile_layout(center, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT);

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(on_pick) = on_pick else { return };
        let Some(surface) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = surface.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        on_pick.run(mercator::viewport_coord(center, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT, x, y));
    };

    view! {
        <div
            class=if on_pick.is_some() { "map-view pickable" } else { "map-view" }
            style=format!(
                "position:relative;overflow:hidden;width:{MAP_WIDTH}px;height:{MAP_HEIGHT}px"
            )
            on:click=on_click
        >
            {tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <img
                            class="map-tile"
                            src=format!("{TILE_URL}/{}/{}/{}.png", tile.z, tile.x, tile.y)
                            style=format!("position:absolute;left:{}px;top:{}px", tile.left, tile.top)
                        />
                    }
                })
                .collect_view()}

            {points
                .map(|points| {
                    view! {
                        <For
                            each=move || points.get()
                            key=|point| point.id
                            children=move |point| {
                                let id = point.id;
                                let (left, top) = mercator::viewport_offset(
                                    center,
                                    MAP_ZOOM,
                                    MAP_WIDTH,
                                    MAP_HEIGHT,
                                    (point.latitude, point.longitude),
                                );
                                view! {
                                    <button
                                        class="map-marker point"
                                        style=format!(
                                            "position:absolute;left:{left}px;top:{top}px;transform:translate(-50%,-100%)"
                                        )
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            if let Some(cb) = on_marker_click {
                                                cb.run(id);
                                            }
                                        }
                                    >
                                        <img src=point.image.clone() alt=point.name.clone()/>
                                        <span>{point.name.clone()}</span>
                                    </button>
                                }
                            }
                        />
                    }
                })}

            {marker
                .map(|marker| {
                    move || {
                        marker
                            .get()
                            .map(|coord| {
                                let (left, top) = mercator::viewport_offset(
                                    center, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT, coord,
                                );
                                view! {
                                    <div
                                        class="map-marker picked"
                                        style=format!(
                                            "position:absolute;left:{left}px;top:{top}px;transform:translate(-50%,-100%)"
                                        )
                                    ></div>
                                }
                            })
                    }
                })}
        </div>
    }
}
