//! Campo di ricerca

use leptos::prelude::*;

#[component]
pub fn SearchBar(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Cerca specie o famiglia..."
            prop:value=move || query.get()
            on:input=move |ev| {
                set_query.set(event_target_value(&ev));
            }
        />
    }
}
