//! Item Catalog Grid
//!
//! Selectable item categories; a grid on the form, a horizontal bar on the
//! browse screen.

use leptos::prelude::*;

use crate::models::Item;
use crate::selection;

#[component]
pub fn ItemsGrid(
    items: ReadSignal<Vec<Item>>,
    selected: ReadSignal<Vec<i64>>,
    on_toggle: Callback<i64>,
    #[prop(optional)] horizontal: bool,
) -> impl IntoView {
    let container_class = if horizontal { "items-bar" } else { "items-grid" };

    view! {
        <ul class=container_class>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let item_class = move || {
                        if selection::is_selected(&selected.get(), id) {
                            "item selected"
                        } else {
                            "item"
                        }
                    };
                    view! {
                        <li class=item_class on:click=move |_| on_toggle.run(id)>
                            <img src=item.image_url.clone() alt=item.title.clone()/>
                            <span>{item.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
