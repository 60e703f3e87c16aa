//! ブラウザ操作（クリップボード・ファイルダウンロード）
//!
//! どちらもネットワークを使わないローカル操作

use js_sys::{Array, Uint8Array};
use resume_assist_common::DownloadFile;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[wasm_bindgen(module = "/js/clipboard.js")]
extern "C" {
    #[wasm_bindgen(js_name = "copyText", catch)]
    async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    copy_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Copy failed: {:?}", e))
}

/// Blob URL を作ってダウンロードを起動し、直後に URL を解放する
pub fn download(file: &DownloadFile) -> Result<(), JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(file.bytes.as_slice()));

    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use resume_assist_common::Artifact;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_download_cover_letter() {
        let file = Artifact::CoverLetter.package("Dear Hiring Manager");
        assert!(download(&file).is_ok());
    }
}
