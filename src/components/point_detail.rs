//! Point Detail Screen
//!
//! Read-only view of a single point, reached from a marker tap.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::models::Point;

#[component]
pub fn PointDetailScreen(id: i64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (point, set_point) = signal::<Option<Point>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_point(id).await {
                Ok(loaded) => set_point.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[POINTS] detail failed: {e}").into())
                }
            }
        });
    });

    view! {
        <div class="page-point-detail">
            <button class="back-button" on:click=move |_| ctx.navigate(Route::Home)>
                "Voltar"
            </button>

            {move || match point.get() {
                Some(point) => view! {
                    <div class="point-card">
                        <img src=point.image.clone() alt=point.name.clone()/>
                        <h1>{point.name.clone()}</h1>
                        <p class="coordinates">
                            {format!("{:.5}, {:.5}", point.latitude, point.longitude)}
                        </p>
                    </div>
                }
                    .into_any(),
                None => view! { <p class="loading">"Carregando..."</p> }.into_any(),
            }}
        </div>
    }
}
