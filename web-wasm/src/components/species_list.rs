//! Lista delle specie con contatore dei risultati
//!
//! La lista mostra il risultato del filtro; con dataset da qualche
//! migliaio di righe il re-render completo a ogni variazione della
//! query è più che sufficiente.

use flora_common::SpeciesRecord;
use leptos::prelude::*;

fn result_count_label(shown: usize, total: usize) -> String {
    format!("Risultati: {} di {}", shown, total)
}

#[component]
pub fn SpeciesList<F>(
    records: ReadSignal<Vec<SpeciesRecord>>,
    filtered: Memo<Vec<SpeciesRecord>>,
    loading: ReadSignal<bool>,
    selected: ReadSignal<Option<SpeciesRecord>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(SpeciesRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <div>
            <div class="species-list">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="list-status">"Caricamento..."</div>
                        }
                        .into_any();
                    }

                    let on_select = on_select.clone();
                    filtered
                        .get()
                        .into_iter()
                        .map(|record| {
                            let on_select = on_select.clone();
                            let row_record = record.clone();
                            let is_selected =
                                move || selected.get().as_ref() == Some(&row_record);
                            let click_record = record.clone();
                            view! {
                                <div
                                    class=move || {
                                        if is_selected() {
                                            "species-row selected"
                                        } else {
                                            "species-row"
                                        }
                                    }
                                    on:click=move |_| on_select(click_record.clone())
                                >
                                    <div class="species-name">{record.species.clone()}</div>
                                    <div class="species-family">{record.family.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="result-count">
                {move || result_count_label(filtered.get().len(), records.get().len())}
            </div>
        </div>
    }
}
