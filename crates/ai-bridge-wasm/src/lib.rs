use wasm_bindgen::prelude::*;

fn ping_bytes_internal(message: &[u8]) -> Result<String, String> {
    ai_bridge::ping(message).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn version() -> String {
    ai_bridge::version().to_owned()
}

/// Answers a `Uint8Array` payload. Throws the decode message on invalid UTF-8.
#[wasm_bindgen]
pub fn ping_bytes(message: &[u8]) -> Result<String, JsValue> {
    ping_bytes_internal(message).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn ping_text(message: &str) -> String {
    ai_bridge::ping_text(message)
}
