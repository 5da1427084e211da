//! Test di integrazione del flusso di salvataggio
//!
//! Ricostruisce il percorso completo dell'app: lettura del dataset,
//! ricerca, merge del ritrovamento, esportazione e rilettura.

use flora_common::{
    apply_finding, filter_records, read_workbook, write_workbook, FindingDraft, SpeciesRecord,
};

fn create_test_record(index: usize) -> SpeciesRecord {
    SpeciesRecord {
        species: format!("Specie di prova {}", index),
        family: if index % 2 == 0 {
            "Fagaceae".to_string()
        } else {
            "Lamiaceae".to_string()
        },
        reference_code: Some(format!("P-{}", index)),
        locations: None,
        notes: None,
    }
}

#[test]
fn test_full_save_flow_roundtrip() {
    let mut records: Vec<SpeciesRecord> = (1..=10).map(create_test_record).collect();
    records[4].locations = Some("Valle d'Aosta (45,00 7,00)".to_string());

    // lettura del dataset esportato
    let bytes = write_workbook(&records).expect("esportazione fallita");
    let loaded = read_workbook(&bytes).expect("lettura fallita");
    assert_eq!(records, loaded);

    // ricerca della specie da aggiornare
    let filtered = filter_records(&loaded, "prova 5");
    assert_eq!(filtered.len(), 1);
    let selected = filtered[0].clone();

    // merge del nuovo ritrovamento
    let draft = FindingDraft {
        location_text: "Monte Bianco".to_string(),
        coordinate_text: "45,83 6,86".to_string(),
        note_text: String::new(),
    };
    let (updated, merged) =
        apply_finding(&loaded, &selected, &draft, "01/06/2025").expect("merge fallito");

    assert_eq!(
        merged.locations.as_deref(),
        Some("Valle d'Aosta (45,00 7,00); Monte Bianco (45,83 6,86)")
    );
    assert_eq!(updated.len(), loaded.len());

    // i record non coinvolti sono rimasti identici
    for (before, after) in loaded.iter().zip(&updated) {
        if before.species != selected.species {
            assert_eq!(before, after);
        }
    }

    // riesportazione: il merge sopravvive al giro completo
    let bytes = write_workbook(&updated).expect("esportazione fallita");
    let reloaded = read_workbook(&bytes).expect("lettura fallita");
    assert_eq!(updated, reloaded);
}

#[test]
fn test_invalid_draft_does_not_change_dataset() {
    let records: Vec<SpeciesRecord> = (1..=3).map(create_test_record).collect();
    let bytes_before = write_workbook(&records).expect("esportazione fallita");

    let draft = FindingDraft {
        location_text: String::new(),
        coordinate_text: "45,83 6,86".to_string(),
        note_text: "nota orfana".to_string(),
    };
    let result = apply_finding(&records, &records[0], &draft, "01/06/2025");
    assert!(result.is_err(), "la bozza incompleta doveva essere rifiutata");

    // il dataset riletto è identico a prima del tentativo
    let reloaded = read_workbook(&bytes_before).expect("lettura fallita");
    assert_eq!(records, reloaded);
}
