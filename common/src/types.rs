//! Tipi del modello dati
//!
//! Condivisi tra la logica pura e l'app Web (WASM):
//! - SpeciesRecord: una riga del dataset (specie, famiglia, ritrovamenti)
//! - FindingDraft: nuovo ritrovamento in fase di compilazione

use serde::{Deserialize, Serialize};

/// Una specie censita nel dataset.
///
/// I rename serde corrispondono esattamente alle intestazioni di colonna
/// del foglio Excel, così la serializzazione conserva i nomi originali.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(rename = "SPECIE", default)]
    pub species: String,

    #[serde(rename = "FAMIGLIA", default)]
    pub family: String,

    /// Codice di riferimento tassonomico (Pignatti)
    #[serde(rename = "Pignatti", default, skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    /// Registro delle località, separate da "; ", con coordinate tra parentesi
    #[serde(rename = "Località", default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,

    /// Registro delle note, separate da "; ", con data tra parentesi
    #[serde(rename = "Note", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Ritrovamento in bozza: esiste solo mentre una specie è selezionata
/// e l'utente sta compilando il modulo. Viene svuotato dopo il merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindingDraft {
    pub location_text: String,
    pub coordinate_text: String,
    pub note_text: String,
}

impl FindingDraft {
    /// Località e coordinate sono i campi minimi richiesti per il salvataggio.
    pub fn is_complete(&self) -> bool {
        !self.location_text.is_empty() && !self.coordinate_text.is_empty()
    }
}
