//! Expose the `markup-diff` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff` for rendering the merged document.
///
/// # Arguments
///
/// - `before`: The original markup.
/// - `after`: The changed markup.
/// - `class_name`: Optional class added to every `<ins>` and `<del>` marker.
#[wasm_bindgen(js_name = htmlDiff)]
#[must_use]
pub fn html_diff(before: &str, after: &str, class_name: Option<String>) -> String {
    set_panic_hook();

    crate::diff(before, after, class_name.as_deref())
}

/// Replaces the process-wide atomic tag set, such as
/// `"iframe,object,math,svg,script,video,head,style,li"`.
///
/// # Errors
///
/// Throws if the pattern is invalid. The previous set stays active.
#[wasm_bindgen(js_name = setAtomicTags)]
pub fn set_atomic_tags(pattern: &str) -> Result<(), JsError> {
    set_panic_hook();

    crate::configure_atomic_tags(pattern).map_err(|error| JsError::new(&error.to_string()))
}

/// WASM wrapper around `crate::align` returning the operations as a JSON
/// array of `{ action, startInBefore, endInBefore, startInAfter, endInAfter }`.
///
/// # Errors
///
/// Throws if the operations cannot be serialized, which should not happen.
#[wasm_bindgen(js_name = calculateOperations)]
pub fn calculate_operations(before: &str, after: &str) -> Result<String, JsError> {
    set_panic_hook();

    let operations = crate::align(&crate::tokenize(before), &crate::tokenize(after));

    serde_json::to_string(&operations).map_err(|error| JsError::new(&error.to_string()))
}

/// The original text of every token of `markup`.
#[wasm_bindgen(js_name = htmlToTokens)]
#[must_use]
pub fn html_to_tokens(markup: &str) -> Vec<String> {
    set_panic_hook();

    crate::tokenize(markup)
        .iter()
        .map(|token| token.original().to_owned())
        .collect()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
