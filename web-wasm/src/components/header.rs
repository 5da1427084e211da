//! Intestazione dell'app

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Database Flora"</h1>
        </header>
    }
}
