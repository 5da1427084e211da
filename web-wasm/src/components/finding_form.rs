//! Modulo di inserimento di un nuovo ritrovamento

use leptos::prelude::*;

use crate::components::map_preview::MapPreview;

#[component]
pub fn FindingForm<FG, FM, FS>(
    location_text: ReadSignal<String>,
    set_location_text: WriteSignal<String>,
    coordinate_text: ReadSignal<String>,
    set_coordinate_text: WriteSignal<String>,
    note_text: ReadSignal<String>,
    set_note_text: WriteSignal<String>,
    gps_status: ReadSignal<String>,
    show_map: ReadSignal<bool>,
    on_acquire_gps: FG,
    on_show_map: FM,
    on_save: FS,
) -> impl IntoView
where
    FG: Fn(()) + 'static + Clone + Send + Sync,
    FM: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="finding-form">
            <h3>"Aggiungi nuovo ritrovamento:"</h3>

            <input
                type="text"
                placeholder="Nuova località"
                prop:value=move || location_text.get()
                on:input=move |ev| {
                    set_location_text.set(event_target_value(&ev));
                }
            />

            <input
                type="text"
                placeholder="Coordinate (es: 45,43306076 11,11554812)"
                prop:value=move || coordinate_text.get()
                on:input=move |ev| {
                    set_coordinate_text.set(event_target_value(&ev));
                }
            />

            <div class="button-row">
                <button
                    class="btn btn-gps"
                    on:click={
                        let on_acquire_gps = on_acquire_gps.clone();
                        move |_| on_acquire_gps(())
                    }
                >
                    "Acquisisci GPS"
                </button>
                <Show when=move || !coordinate_text.get().is_empty()>
                    {
                        let on_show_map = on_show_map.clone();
                        view! {
                            <button
                                class="btn btn-map"
                                on:click=move |_| on_show_map(())
                            >
                                "Visualizza sulla mappa"
                            </button>
                        }
                    }
                </Show>
            </div>

            <MapPreview coordinate_text=coordinate_text show_map=show_map />

            <Show when=move || !gps_status.get().is_empty()>
                <div class=move || {
                    // la variante di successo inizia sempre con
                    // "Posizione acquisita"
                    if gps_status.get().starts_with("Posizione acquisita") {
                        "gps-status success"
                    } else {
                        "gps-status warning"
                    }
                }>
                    {move || gps_status.get()}
                </div>
            </Show>

            <textarea
                placeholder="Note sul ritrovamento..."
                prop:value=move || note_text.get()
                on:input=move |ev| {
                    set_note_text.set(event_target_value(&ev));
                }
            ></textarea>

            <button
                class="btn btn-save"
                on:click={
                    let on_save = on_save.clone();
                    move |_| on_save(())
                }
            >
                "Salva ritrovamento"
            </button>
        </div>
    }
}
