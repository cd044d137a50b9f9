//! Home Screen
//!
//! Entry point: pick a UF/city to browse points, or jump to registration.

use leptos::prelude::*;

use crate::components::{UfCitySelect, CITY_NONE, UF_NONE};
use crate::context::{AppContext, Route};

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let selected_uf = RwSignal::new(UF_NONE.to_string());
    let selected_city = RwSignal::new(CITY_NONE.to_string());

    let search = move |_| {
        let uf = selected_uf.get();
        let city = selected_city.get();
        if uf == UF_NONE || city == CITY_NONE {
            return;
        }
        ctx.navigate(Route::Points { uf, city });
    };

    view! {
        <div class="page-home">
            <h1>"Seu marketplace de coleta de resíduos"</h1>
            <p class="description">
                "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."
            </p>

            <UfCitySelect selected_uf=selected_uf selected_city=selected_city/>

            <button
                class="primary"
                disabled=move || selected_uf.get() == UF_NONE || selected_city.get() == CITY_NONE
                on:click=search
            >
                "Buscar pontos de coleta"
            </button>

            <button class="secondary" on:click=move |_| ctx.navigate(Route::CreatePoint)>
                "Cadastrar um ponto de coleta"
            </button>
        </div>
    }
}
