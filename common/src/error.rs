//! Tipi di errore

use thiserror::Error;

/// Errore comune della libreria
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "excel")]
    #[error("errore di lettura del foglio: {0}")]
    SheetRead(#[from] calamine::XlsxError),

    #[cfg(feature = "excel")]
    #[error("errore di scrittura del foglio: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("dataset non valido: {0}")]
    Dataset(String),

    #[error("coordinate non valide: {0}")]
    Coordinate(String),

    /// Messaggio di validazione mostrato direttamente all'utente
    #[error("{0}")]
    Validation(String),
}

/// Alias del tipo Result
pub type Result<T> = std::result::Result<T, Error>;
