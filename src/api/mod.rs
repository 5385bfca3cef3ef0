//! Crossword Viewer WASM API
//!
//! This module provides the JavaScript-facing API: `mount` fetches a puzzle
//! and renders it, `mountStatic` renders a payload the page already has.
//!
//! # Module Structure
//!
//! - `helpers`: serde-wasm-bindgen conversions
//! - `app`: the mounted application and its entry points

pub mod helpers;
pub mod app;

pub use app::{mount, mount_static, CrosswordApp, MountOptions};
