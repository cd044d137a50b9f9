//! Collection Point Registration Screen
//!
//! Loads the item catalog and geography lists at mount, lets the user pick
//! the point's coordinate on the map, and posts the assembled payload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{Header, ItemsGrid, MapView, UfCitySelect, CITY_NONE, UF_NONE};
use crate::context::{submit_outcome, AppContext};
use crate::location;
use crate::models::{Item, NewPoint};
use crate::selection::{self, PointForm};

#[component]
pub fn CreatePointScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let (selected_items, set_selected_items) = signal(Vec::<i64>::new());
    let (initial_position, set_initial_position) = signal::<Option<(f64, f64)>>(None);
    let (location_note, set_location_note) = signal::<Option<String>>(None);
    let (marker, set_marker) = signal::<Option<(f64, f64)>>(None);
    let selected_uf = RwSignal::new(UF_NONE.to_string());
    let selected_city = RwSignal::new(CITY_NONE.to_string());
    let form = Store::new(PointForm::default());

    // Catalog, once per mount. A failure leaves the grid empty; the rest of
    // the form stays usable.
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

    // One-shot geolocation for the initial map center. Failure falls back
    // to a default center so the map stays renderable and clickable.
    Effect::new(move |_| {
        location::current_position(
            move |lat, lon| set_initial_position.set(Some((lat, lon))),
            move |err| {
                web_sys::console::log_1(&format!("[LOCATION] {err}").into());
                let (center, note) = location::fallback_center(&err);
                if let Some(note) = note {
                    set_location_note.set(Some(note.to_string()));
                }
                set_initial_position.set(Some(center));
            },
        );
    });

    let on_field_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        form.write().set_field(&input.name(), input.value());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = NewPoint::from_parts(
            &form.get(),
            &selected_uf.get(),
            &selected_city.get(),
            marker.get().unwrap_or((0.0, 0.0)),
            &selected_items.get(),
        );
        spawn_local(async move {
            let result = api::create_point(&payload).await;
            if let Err(e) = &result {
                // The form and its state stay put; the user retries at will.
                web_sys::console::error_1(
                    &format!("[SUBMIT] point creation failed: {e}").into(),
                );
            }
            if let Some(route) = submit_outcome(&result) {
                ctx.navigate(route);
            }
        });
    };

    view! {
        <div class="page-create-point">
            <Header link_text="Voltar para home"/>
            <form on:submit=on_submit>
                <h1>"Cadastro do ponto de coleta"</h1>

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <div class="field">
                        <label for="name">"Nome da Entidade"</label>
                        <input type="text" id="name" name="name" on:input=on_field_input/>
                    </div>
                    <div class="field-group">
                        <div class="field">
                            <label for="email">"Email"</label>
                            <input type="email" id="email" name="email" on:input=on_field_input/>
                        </div>
                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input type="text" id="whatsapp" name="whatsapp" on:input=on_field_input/>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereços"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    {move || {
                        location_note
                            .get()
                            .map(|note| view! { <p class="location-note">{note}</p> })
                    }}

                    {move || match initial_position.get() {
                        Some(center) => view! {
                            <MapView
                                center=center
                                marker=marker
                                on_pick=Callback::new(move |coord| set_marker.set(Some(coord)))
                            />
                        }
                            .into_any(),
                        None => view! { <p class="map-placeholder">"Localizando..."</p> }.into_any(),
                    }}

                    <UfCitySelect selected_uf=selected_uf selected_city=selected_city/>

                    <div class="field">
                        <label for="address">"Endereço"</label>
                        <input type="text" id="address" name="address" on:input=on_field_input/>
                    </div>
                    <div class="field-group">
                        <div class="field">
                            <label for="number">"Número"</label>
                            <input type="number" id="number" name="number" on:input=on_field_input/>
                        </div>
                        <div class="field">
                            <label for="zipcode">"CEP"</label>
                            <input type="text" id="zipcode" name="zipcode" on:input=on_field_input/>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de Coleta"</h2>
                        <span>"Selecione um ou mais itens abaixo"</span>
                    </legend>
                    <ItemsGrid
                        items=items
                        selected=selected_items
                        on_toggle=Callback::new(move |id| {
                            set_selected_items.update(|ids| selection::toggle(ids, id))
                        })
                    />
                </fieldset>

                <button type="submit">"Cadastrar ponto de coleta"</button>
            </form>
        </div>
    }
}
