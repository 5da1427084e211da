//! Download lato client del file esportato
//!
//! I byte del workbook diventano un Blob, il Blob un object URL, e un
//! click sintetico su un'ancora temporanea avvia il download. Nessun
//! passaggio dal server.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Offre `data` come download con il nome di file indicato.
pub fn download_xlsx(data: &[u8], filename: &str) -> Result<(), JsValue> {
    let array = Uint8Array::from(data);
    let parts = Array::of1(&array.into());

    let mut options = BlobPropertyBag::new();
    options.type_(XLSX_MIME);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_download_xlsx_accepts_buffer() {
        let bytes = vec![0x50, 0x4b, 0x03, 0x04];
        assert!(download_xlsx(&bytes, "test.xlsx").is_ok());
    }
}
