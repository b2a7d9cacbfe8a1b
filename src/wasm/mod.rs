//! WebAssembly bindings for the LR35902 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU core,
//! enabling a browser shell to load a program and step it frame by frame.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::GameBoyCore;
