//! Logo upload boundary: reading a selected file into bytes.

use wasm_bindgen_futures::JsFuture;

/// Read the full contents of a selected file.
///
/// Resolves once the browser has the whole payload in memory; the size
/// check against the ledger's limit happens in the document model, not
/// here.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read file: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
