//! JS-facing surface

pub mod wasm;
