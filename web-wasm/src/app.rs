//! Componente applicazione principale
//!
//! Tutto lo stato mutabile della sessione vive qui come segnali Leptos:
//! la lista dei record, la selezione, la bozza del ritrovamento. Le
//! mutazioni avvengono solo nei gestori degli eventi utente, serializzati
//! dal modello a thread singolo del browser.

use flora_common::{
    apply_finding, filter_records, write_workbook, FindingDraft, SpeciesRecord, EXPORT_FILE_NAME,
    GPS_ACQUIRING, VALIDATION_MESSAGE,
};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::components::{
    detail_panel::DetailPanel, header::Header, search_bar::SearchBar, species_list::SpeciesList,
};
use crate::data::{fetch_database, DATABASE_PATH};
use crate::export::download_xlsx;
use crate::geolocation;

const CONFIRM_SAVE: &str = "Sei sicuro di voler salvare questo nuovo ritrovamento?";
const SAVE_SUCCESS: &str = "Ritrovamento salvato con successo!";

fn alert(message: &str) {
    let _ = web_sys::window().unwrap().alert_with_message(message);
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .unwrap()
        .confirm_with_message(message)
        .unwrap_or(false)
}

/// Data odierna localizzata, usata come etichetta della nota
fn today_label() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("it-IT", &JsValue::UNDEFINED)
        .into()
}

/// Componente applicazione principale
#[component]
pub fn App() -> impl IntoView {
    // dataset e selezione
    let (records, set_records) = signal(Vec::<SpeciesRecord>::new());
    let (loading, set_loading) = signal(true);
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal(None::<SpeciesRecord>);

    // bozza del ritrovamento
    let (location_text, set_location_text) = signal(String::new());
    let (coordinate_text, set_coordinate_text) = signal(String::new());
    let (note_text, set_note_text) = signal(String::new());
    let (gps_status, set_gps_status) = signal(String::new());
    let (show_map, set_show_map) = signal(false);

    // caricamento iniziale: un fallimento lascia la lista vuota, l'app
    // resta utilizzabile
    spawn_local(async move {
        match fetch_database(DATABASE_PATH).await {
            Ok(loaded) => set_records.set(loaded),
            Err(e) => gloo::console::error!("Errore nel caricamento dei dati:", e),
        }
        set_loading.set(false);
    });

    let filtered = Memo::new(move |_| filter_records(&records.get(), &query.get()));

    // selezione dalla lista: nasconde l'eventuale mappa precedente
    let on_select = move |record: SpeciesRecord| {
        set_selected.set(Some(record));
        set_show_map.set(false);
    };

    let on_acquire_gps = move |_| {
        set_gps_status.set(GPS_ACQUIRING.to_string());
        geolocation::acquire_position(
            move |coordinates| set_coordinate_text.set(coordinates),
            move |status| set_gps_status.set(status),
        );
    };

    let on_show_map = move |_| set_show_map.set(true);

    // salvataggio: validazione, conferma, merge, download, poi aggiorna
    // lo stato e svuota la bozza
    let on_save = move |_| {
        let draft = FindingDraft {
            location_text: location_text.get_untracked(),
            coordinate_text: coordinate_text.get_untracked(),
            note_text: note_text.get_untracked(),
        };

        let Some(current) = selected.get_untracked() else {
            alert(VALIDATION_MESSAGE);
            return;
        };
        if !draft.is_complete() {
            alert(VALIDATION_MESSAGE);
            return;
        }
        if !confirm(CONFIRM_SAVE) {
            return;
        }

        let merge_result =
            apply_finding(&records.get_untracked(), &current, &draft, &today_label());
        let (updated, merged) = match merge_result {
            Ok(outcome) => outcome,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        // il download fa parte del salvataggio: se l'esportazione
        // fallisce lo stato non viene toccato
        let bytes = match write_workbook(&updated) {
            Ok(bytes) => bytes,
            Err(e) => {
                gloo::console::error!(format!("Esportazione fallita: {}", e));
                return;
            }
        };
        if let Err(e) = download_xlsx(&bytes, EXPORT_FILE_NAME) {
            gloo::console::error!("Download fallito:", e);
            return;
        }

        set_records.set(updated);
        set_selected.set(Some(merged));
        set_location_text.set(String::new());
        set_coordinate_text.set(String::new());
        set_note_text.set(String::new());
        set_gps_status.set(String::new());
        set_show_map.set(false);

        alert(SAVE_SUCCESS);
    };

    view! {
        <div class="container">
            <Header />

            <SearchBar query=query set_query=set_query />

            <div class="main-grid">
                <SpeciesList
                    records=records
                    filtered=filtered
                    loading=loading
                    selected=selected
                    on_select=on_select
                />

                <DetailPanel
                    selected=selected
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
        </div>
    }
}
