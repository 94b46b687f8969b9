//! Shared Dioxus components and D3.js bridge for the disaster prediction app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js map and bar-chart renderers
//!   via `js_sys::eval()`
//! - `state`: reactive AppState with Dioxus Signals
//! - `fetch`: the single asynchronous fetch operation
//! - `components`: reusable RSX components (inputs, panels, containers)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
