//! Coleta Frontend App
//!
//! Top-level component: owns the route signal and dispatches screens.

use leptos::prelude::*;

use crate::components::{
    CompletedScreen, CreatePointScreen, HomeScreen, PointDetailScreen, PointsScreen,
};
use crate::context::{AppContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Home);
    let ctx = AppContext::new(route, set_route);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Home => view! { <HomeScreen/> }.into_any(),
                Route::CreatePoint => view! { <CreatePointScreen/> }.into_any(),
                Route::Completed => view! { <CompletedScreen/> }.into_any(),
                Route::Points { uf, city } => view! { <PointsScreen uf=uf city=city/> }.into_any(),
                Route::Detail { id } => view! { <PointDetailScreen id=id/> }.into_any(),
            }}
        </div>
    }
}
