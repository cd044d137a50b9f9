//! Page Header
//!
//! Title bar with a link back to the home screen.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

#[component]
pub fn Header(link_text: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="page-header">
            <span class="logo">"Coleta"</span>
            <button class="home-link" on:click=move |_| ctx.navigate(Route::Home)>
                {link_text}
            </button>
        </header>
    }
}
