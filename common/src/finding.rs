//! Merge di un nuovo ritrovamento nel record selezionato
//!
//! I registri `locations` e `notes` sono append-only: il merge aggiunge
//! sempre in coda, mai rimuove o riordina voci precedenti. La data viene
//! iniettata dal chiamante (nel browser: `Date.toLocaleDateString()`),
//! così la funzione resta pura e verificabile senza ambiente host.

use crate::error::{Error, Result};
use crate::types::{FindingDraft, SpeciesRecord};

/// Separatore tra le voci dei registri
pub const ENTRY_SEPARATOR: &str = "; ";

/// Nota predefinita quando il campo è lasciato vuoto
pub const DEFAULT_NOTE: &str = "Nuovo ritrovamento";

/// Messaggio bloccante quando mancano i campi minimi
pub const VALIDATION_MESSAGE: &str = "Inserisci almeno la località e le coordinate";

/// Aggiunge `entry` in coda a un registro, conservando byte per byte il
/// contenuto precedente come prefisso.
fn append_entry(log: Option<&str>, entry: &str) -> String {
    match log {
        Some(previous) if !previous.is_empty() => {
            format!("{}{}{}", previous, ENTRY_SEPARATOR, entry)
        }
        _ => entry.to_string(),
    }
}

/// Produce il record aggiornato con il ritrovamento in bozza.
///
/// Rifiuta la bozza se località o coordinate sono vuote; in tal caso
/// nessuno stato viene toccato e l'errore porta il messaggio da mostrare
/// all'utente. Tutti gli altri campi del record restano invariati.
pub fn merge_finding(
    record: &SpeciesRecord,
    draft: &FindingDraft,
    date_label: &str,
) -> Result<SpeciesRecord> {
    if !draft.is_complete() {
        return Err(Error::Validation(VALIDATION_MESSAGE.to_string()));
    }

    let location_entry = format!("{} ({})", draft.location_text, draft.coordinate_text);

    let note_text = if draft.note_text.is_empty() {
        DEFAULT_NOTE
    } else {
        &draft.note_text
    };
    let note_entry = format!("{} ({})", note_text, date_label);

    Ok(SpeciesRecord {
        locations: Some(append_entry(record.locations.as_deref(), &location_entry)),
        notes: Some(append_entry(record.notes.as_deref(), &note_entry)),
        ..record.clone()
    })
}

/// Applica il ritrovamento all'intera lista: ogni record con la stessa
/// specie del selezionato viene sostituito dal record aggiornato, gli
/// altri restano identici e nella stessa posizione.
///
/// Eventuali specie duplicate vengono aggiornate tutte allo stesso modo,
/// come nel comportamento storico dell'applicazione.
pub fn apply_finding(
    records: &[SpeciesRecord],
    selected: &SpeciesRecord,
    draft: &FindingDraft,
    date_label: &str,
) -> Result<(Vec<SpeciesRecord>, SpeciesRecord)> {
    let merged = merge_finding(selected, draft, date_label)?;

    let updated = records
        .iter()
        .map(|record| {
            if record.species == selected.species {
                merged.clone()
            } else {
                record.clone()
            }
        })
        .collect();

    Ok((updated, merged))
}
