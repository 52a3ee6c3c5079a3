use crate::errors::GridError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::searcher::search;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        // A real JavaScript Error object, so stack traces behave
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and panic reporting with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    // 1. Panics surface as console errors instead of opaque traps
    console_error_panic_hook::set_once();

    // 2. Route the log facade to the developer console
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

/// JS entry: (grid_text: string, words: string[]) returns string[] holding
/// the found words, one entry per axis a word matches on, original casing.
///
/// `grid_text` is puzzle text: one row per line, optional spaces between
/// letters.
///
/// # Errors
/// Returns a `JsValue` error if `words` isn't a string array, the grid text
/// fails validation, or the result can't be serialized.
#[wasm_bindgen]
pub fn search_text(grid_text: &str, words: JsValue) -> Result<JsValue, JsValue> {
    // words: string[] -> Vec<String>
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("words must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            details: "The words parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Pass a plain string array, e.g., ['cat', 'dog', 'fish']".to_string()),
        }
    })?;

    let grid = Grid::parse_from_str(grid_text).map_err(WasmError::from)?;

    // Borrow as &[&str] for the engine
    let refs: Vec<&str> = words.iter().map(|s| s.as_str()).collect();
    let found = search(&grid, &refs);

    to_value(&found).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The search result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Parse a newline-separated word-list string into an array of words.
///
/// Lines are trimmed and blank lines skipped; order, casing, and duplicates
/// are kept. Handy for feeding a textarea's contents to [`search_text`].
///
/// # Errors
/// Returns a `JsValue` error if the parsed list can't be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let list = WordList::parse_from_str(text);
    to_value(&list.words).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize word list".to_string(),
            details: "The word list could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
