//! Dioxus components for the music catalog dashboard.
//!
//! This crate provides:
//! - `browser`: fetch, timers and the clock via `web-sys` / `js-sys`
//! - `responsive`: the load-on-mount + debounced-resize hook every chart shares
//! - `components`: one view per chart plus small layout pieces

pub mod browser;
pub mod components;
pub mod responsive;
