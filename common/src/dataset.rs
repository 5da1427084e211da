//! Lettura e scrittura del dataset in formato Excel
//!
//! La lettura usa calamine sul primo foglio del file, con la prima riga
//! come intestazione e le colonne agganciate per nome esatto. La
//! scrittura usa rust_xlsxwriter verso un buffer in memoria: nel browser
//! il file viene poi offerto come download, non c'è filesystem.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::error::{Error, Result};
use crate::types::SpeciesRecord;

/// Intestazioni di colonna, nell'ordine del foglio originale
pub const COLUMNS: [&str; 5] = ["SPECIE", "FAMIGLIA", "Pignatti", "Località", "Note"];

/// Nome del foglio nel file esportato
pub const EXPORT_SHEET_NAME: &str = "Flora";

/// Nome del file offerto in download
pub const EXPORT_FILE_NAME: &str = "database_aggiornato.xlsx";

/// Legge il primo foglio del workbook e produce la lista dei record
/// nell'ordine delle righe. Le righe completamente vuote vengono
/// saltate, le celle mancanti diventano campi vuoti o `None`.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<SpeciesRecord>> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Dataset("nessun foglio presente".to_string()))??;

    let mut rows = range.rows();
    let headers: HashMap<String, usize> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(index, cell)| (cell_to_string(cell), index))
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in rows {
        let value = |name: &str| -> String {
            headers
                .get(name)
                .and_then(|&index| row.get(index))
                .map(cell_to_string)
                .unwrap_or_default()
        };
        let optional = |name: &str| -> Option<String> {
            let text = value(name);
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        };

        let record = SpeciesRecord {
            species: value("SPECIE"),
            family: value("FAMIGLIA"),
            reference_code: optional("Pignatti"),
            locations: optional("Località"),
            notes: optional("Note"),
        };

        if record == SpeciesRecord::default() {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

/// Serializza la lista completa in un workbook con un unico foglio
/// "Flora" e le stesse intestazioni della lettura, restituendo i byte
/// del file.
pub fn write_workbook(records: &[SpeciesRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &record.species)?;
        worksheet.write_string(row, 1, &record.family)?;
        // le celle assenti restano vuote, come nel file di partenza
        if let Some(reference_code) = &record.reference_code {
            worksheet.write_string(row, 2, reference_code)?;
        }
        if let Some(locations) = &record.locations {
            worksheet.write_string(row, 3, locations)?;
        }
        if let Some(notes) = &record.notes {
            worksheet.write_string(row, 4, notes)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Le celle arrivano tipizzate da calamine; il modello dati è tutto
/// testuale, quindi i numeri interi (es. i codici Pignatti) non devono
/// guadagnare un ".0" spurio.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            (*value as i64).to_string()
        }
        other => other.to_string(),
    }
}
