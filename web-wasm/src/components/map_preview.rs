//! Anteprima mappa OpenStreetMap
//!
//! Embed statico in sola lettura, inquadrato su un riquadro di ±0,01°
//! attorno al punto. Con coordinate vuote o non interpretabili non
//! viene mostrato nulla.

use flora_common::{osm_embed_url, parse_coordinates, BoundingBox};
use leptos::prelude::*;

#[component]
pub fn MapPreview(
    coordinate_text: ReadSignal<String>,
    show_map: ReadSignal<bool>,
) -> impl IntoView {
    let embed_url = Memo::new(move |_| {
        let text = coordinate_text.get();
        if text.is_empty() {
            return None;
        }
        parse_coordinates(&text)
            .ok()
            .map(|point| osm_embed_url(BoundingBox::around(point), point))
    });

    view! {
        <Show when=move || show_map.get() && embed_url.get().is_some()>
            <div class="map-container">
                <iframe src=move || embed_url.get().unwrap_or_default()></iframe>
            </div>
        </Show>
    }
}
