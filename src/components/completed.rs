//! Completion Screen
//!
//! Confirmation shown after a point is registered.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

#[component]
pub fn CompletedScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="page-completed">
            <span class="check">"✔"</span>
            <h1>"Ponto de coleta cadastrado!"</h1>
            <button on:click=move |_| ctx.navigate(Route::Home)>"Voltar para home"</button>
        </div>
    }
}
