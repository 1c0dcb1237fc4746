//! Async clipboard write via `navigator.clipboard`.

/// Writes `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when the window or clipboard API is unavailable or the
/// write is rejected (for example, by a permissions policy).
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Ok(())
    }
}
