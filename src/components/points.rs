//! Points Browse Screen
//!
//! Shows registered points around the user for the UF/city received as
//! navigation parameters, filtered live by the selected item categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ItemsGrid, MapView};
use crate::context::{AppContext, Route};
use crate::location::{self, GeoError};
use crate::models::{Item, Point};
use crate::selection;
use crate::seq::RequestSeq;

#[component]
pub fn PointsScreen(uf: String, city: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let (points, set_points) = signal(Vec::<Point>::new());
    let (selected_items, set_selected_items) = signal(Vec::<i64>::new());
    let (initial_position, set_initial_position) = signal::<Option<(f64, f64)>>(None);
    let (location_message, set_location_message) = signal::<Option<String>>(None);
    let query_seq = RequestSeq::default();

    let place = format!("{city} - {uf}");

    // Catalog, once per mount.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => web_sys::console::error_1(
                    &format!("[CATALOG] failed to load items: {e}").into(),
                ),
            }
        });
    });

    // Re-query on every change of the selected item set, including the
    // initial empty one. The response replaces the whole list.
    Effect::new(move |_| {
        let ids = selected_items.get();
        let token = query_seq.issue();
        let seq = query_seq.clone();
        let uf = uf.clone();
        let city = city.clone();
        spawn_local(async move {
            match api::fetch_points(&uf, &city, &ids).await {
                Ok(loaded) => {
                    // Stale responses lose to a newer filter selection.
                    if seq.is_current(token) {
                        set_points.set(loaded);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[POINTS] query failed: {e}").into())
                }
            }
        });
    });

    // One-shot geolocation; a denial keeps the map uncentered and tells the
    // user why.
    Effect::new(move |_| {
        location::current_position(
            move |lat, lon| set_initial_position.set(Some((lat, lon))),
            move |err| match err {
                GeoError::PermissionDenied => set_location_message.set(Some(
                    "Precisamos da sua localização para mostrar os pontos no mapa.".to_string(),
                )),
                GeoError::Unavailable(_) => {
                    web_sys::console::log_1(&format!("[LOCATION] {err}").into());
                }
            },
        );
    });

    view! {
        <div class="page-points">
            <button class="back-button" on:click=move |_| ctx.navigate(Route::Home)>
                "Voltar"
            </button>

            <h1>"Bem vindo"</h1>
            <p class="description">"Encontre no mapa um ponto de coleta em " {place} "."</p>

            <div class="map-container">
                {move || match initial_position.get() {
                    Some(center) => view! {
                        <MapView
                            center=center
                            points=points
                            on_marker_click=Callback::new(move |id| {
                                ctx.navigate(Route::Detail { id })
                            })
                        />
                    }
                        .into_any(),
                    None => view! {
                        <p class="map-placeholder">
                            {move || {
                                location_message.get().unwrap_or_else(|| "Localizando...".to_string())
                            }}
                        </p>
                    }
                        .into_any(),
                }}
            </div>

            <ItemsGrid
                items=items
                selected=selected_items
                on_toggle=Callback::new(move |id| {
                    set_selected_items.update(|ids| selection::toggle(ids, id))
                })
                horizontal=true
            />
        </div>
    }
}
