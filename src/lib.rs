// Reusable library API, shared by the CLI and WASM builds
pub mod errors;
pub mod grid;
pub mod log;
pub mod scan;
pub mod searcher;
pub mod transform;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
