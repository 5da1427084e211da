//! Pannello di dettaglio della specie selezionata
//!
//! Mostra i campi del record e ospita il modulo del nuovo ritrovamento.

use flora_common::SpeciesRecord;
use leptos::prelude::*;

use crate::components::finding_form::FindingForm;

#[component]
pub fn DetailPanel<FG, FM, FS>(
    selected: ReadSignal<Option<SpeciesRecord>>,
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
        <div>
            {move || {
                let Some(record) = selected.get() else {
                    return view! {
                        <div class="detail-panel empty">
                            "Seleziona una pianta per vedere i dettagli"
                        </div>
                    }
                    .into_any();
                };

                let on_acquire_gps = on_acquire_gps.clone();
                let on_show_map = on_show_map.clone();
                let on_save = on_save.clone();

                view! {
                    <div class="detail-panel">
                        <h2>{record.species.clone()}</h2>
                        <p>
                            <span class="field-label">"Famiglia: "</span>
                            {record.family.clone()}
                        </p>
                        {record.reference_code.clone().map(|code| view! {
                            <p>
                                <span class="field-label">"Pignatti: "</span>
                                {code}
                            </p>
                        })}
                        {record.locations.clone().map(|locations| view! {
                            <p>
                                <span class="field-label">"Località: "</span>
                                {locations}
                            </p>
                        })}

                        <FindingForm
                            location_text=location_text
                            set_location_text=set_location_text
                            coordinate_text=coordinate_text
                            set_coordinate_text=set_coordinate_text
                            note_text=note_text
                            set_note_text=set_note_text
                            gps_status=gps_status
                            show_map=show_map
                            on_acquire_gps=on_acquire_gps
                            on_show_map=on_show_map
                            on_save=on_save
                        />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
