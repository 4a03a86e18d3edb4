use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard via the async Clipboard API.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
