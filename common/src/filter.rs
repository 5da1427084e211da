//! Filtro di ricerca su specie e famiglia
//!
//! Funzione pura, ricalcolata a ogni variazione della query: con dataset
//! da centinaia a poche migliaia di righe non serve alcuna cache.

use crate::types::SpeciesRecord;

/// Restituisce la sottosequenza ordinata dei record la cui specie o famiglia
/// contiene la query (senza distinzione di maiuscole). Query vuota: lista
/// completa nell'ordine originale.
pub fn filter_records(records: &[SpeciesRecord], query: &str) -> Vec<SpeciesRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &query))
        .cloned()
        .collect()
}

/// `query` deve già essere in minuscolo.
fn matches_query(record: &SpeciesRecord, query: &str) -> bool {
    record.species.to_lowercase().contains(query) || record.family.to_lowercase().contains(query)
}
