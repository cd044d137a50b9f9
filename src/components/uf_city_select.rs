//! UF / City Cascading Selector
//!
//! Loads the state list once and re-fetches the city list whenever the
//! selected state changes. A state change invalidates the previous city.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::seq::RequestSeq;

/// Sentinel for "no state selected".
pub const UF_NONE: &str = "0";
/// Sentinel for "no city selected".
pub const CITY_NONE: &str = "0";

#[component]
pub fn UfCitySelect(
    selected_uf: RwSignal<String>,
    selected_city: RwSignal<String>,
) -> impl IntoView {
    let (ufs, set_ufs) = signal(Vec::<String>::new());
    let (cities, set_cities) = signal(Vec::<String>::new());
    let city_seq = RequestSeq::default();

    // Load states once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_ufs().await {
                Ok(list) => set_ufs.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[GEO] failed to load states: {e}").into())
                }
            }
        });
    });

    // Reload cities on every state change; the previous city is no longer
    // valid once the state moves.
    Effect::new(move |_| {
        let uf = selected_uf.get();
        selected_city.set(CITY_NONE.to_string());
        set_cities.set(Vec::new());
        if uf == UF_NONE {
            return;
        }
        let token = city_seq.issue();
        let seq = city_seq.clone();
        spawn_local(async move {
            match api::fetch_cities(&uf).await {
                // A response that lost the race against a newer selection
                // is dropped instead of overwriting fresher data.
                Ok(list) if seq.is_current(token) => set_cities.set(list),
                Ok(_) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("[GEO] failed to load cities: {e}").into())
                }
            }
        });
    });

    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    id="uf"
                    name="uf"
                    prop:value=move || selected_uf.get()
                    on:change=move |ev| selected_uf.set(event_target_value(&ev))
                >
                    <option value=UF_NONE>"Selecione uma UF"</option>
                    <For
                        each=move || ufs.get()
                        key=|uf| uf.clone()
                        children=move |uf| {
                            view! { <option value=uf.clone()>{uf.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    id="city"
                    name="city"
                    prop:value=move || selected_city.get()
                    on:change=move |ev| selected_city.set(event_target_value(&ev))
                >
                    <option value=CITY_NONE>"Selecione uma cidade"</option>
                    <For
                        each=move || cities.get()
                        key=|city| city.clone()
                        children=move |city| {
                            view! { <option value=city.clone()>{city.clone()}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
