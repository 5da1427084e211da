//! Caricamento del dataset all'avvio
//!
//! Il file Excel viene servito come risorsa statica accanto all'app e
//! scaricato una sola volta via fetch. Un fallimento non è fatale:
//! l'errore viene registrato in console e la lista resta vuota.

use flora_common::{read_workbook, SpeciesRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Percorso relativo del dataset
pub const DATABASE_PATH: &str = "database.xlsx";

/// Scarica e interpreta il dataset.
pub async fn fetch_database(url: &str) -> Result<Vec<SpeciesRecord>, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "fetch di {} fallita: {}",
            url,
            resp.status()
        )));
    }

    let buffer = JsFuture::from(resp.array_buffer()?).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    read_workbook(&bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}
