//! Acquisizione della posizione dal browser
//!
//! Incapsula `navigator.geolocation` dietro una coppia di callback, così
//! il resto dell'app ragiona solo su stringhe: le coordinate formattate
//! e il messaggio di stato. Nessun retry automatico: una nuova
//! acquisizione parte solo da un nuovo click dell'utente.

use flora_common::{format_coordinates, gps_status, GPS_UNAVAILABLE, GPS_UNSUPPORTED};
use wasm_bindgen::prelude::*;
use web_sys::{Position, PositionError, PositionOptions};

/// Timeout della richiesta al dispositivo
const TIMEOUT_MS: u32 = 30_000;

/// Età massima accettata per una posizione in cache (5 minuti)
const MAXIMUM_AGE_MS: u32 = 300_000;

/// Richiede la posizione corrente.
///
/// `on_fix` riceve le coordinate formattate ("lat lon" con virgola
/// decimale), `on_status` il messaggio di stato leggibile. L'alta
/// precisione non viene richiesta: meglio una risposta rapida e
/// disponibile che un fix perfetto.
pub fn acquire_position<FX, FS>(on_fix: FX, on_status: FS)
where
    FX: Fn(String) + 'static,
    FS: Fn(String) + 'static + Clone,
{
    let navigator = web_sys::window().unwrap().navigator();
    let geolocation = match navigator.geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_status(GPS_UNSUPPORTED.to_string());
            return;
        }
    };

    let mut options = PositionOptions::new();
    options.enable_high_accuracy(false);
    options.timeout(TIMEOUT_MS);
    options.maximum_age(MAXIMUM_AGE_MS);

    let status_success = on_status.clone();
    let success = Closure::wrap(Box::new(move |position: Position| {
        let coords = position.coords();
        on_fix(format_coordinates(coords.latitude(), coords.longitude()));
        status_success(gps_status(coords.accuracy()));
    }) as Box<dyn FnMut(Position)>);

    let status_error = on_status.clone();
    let error = Closure::wrap(Box::new(move |_error: PositionError| {
        status_error(GPS_UNAVAILABLE.to_string());
    }) as Box<dyn FnMut(PositionError)>);

    let result = geolocation.get_current_position_with_error_callback_and_options(
        success.as_ref().unchecked_ref(),
        Some(error.as_ref().unchecked_ref()),
        &options,
    );
    if result.is_err() {
        on_status(GPS_UNAVAILABLE.to_string());
    }

    // i callback devono sopravvivere alla chiamata
    success.forget();
    error.forget();
}
