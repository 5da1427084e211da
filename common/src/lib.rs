//! Database Flora — libreria comune
//!
//! Logica condivisa tra i test nativi e l'app Web (WASM): modello dati,
//! filtro di ricerca, merge dei ritrovamenti, utilità geografiche e
//! codec Excel (feature `excel`, attiva di default).

pub mod error;
pub mod filter;
pub mod finding;
pub mod geo;
pub mod types;

#[cfg(feature = "excel")]
pub mod dataset;

pub use error::{Error, Result};
pub use filter::filter_records;
pub use finding::{apply_finding, merge_finding, DEFAULT_NOTE, VALIDATION_MESSAGE};
pub use geo::{
    format_coordinates, gps_status, osm_embed_url, parse_coordinates, BoundingBox, GeoPoint,
    GPS_ACQUIRING, GPS_UNAVAILABLE, GPS_UNSUPPORTED,
};
pub use types::{FindingDraft, SpeciesRecord};

#[cfg(feature = "excel")]
pub use dataset::{read_workbook, write_workbook, COLUMNS, EXPORT_FILE_NAME, EXPORT_SHEET_NAME};
