#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Verdant UI: presentational Yew components with headless state logic.
//!
//! Decision logic (floating placement, outside-interaction checks, the
//! open/closed machine, toast expiry, pagination views) lives in [`core`] and
//! builds on every target. Components and hooks are compiled for `wasm32` only.
//!
//! Applications provide a [`UiConfig`] through a Yew `ContextProvider` and wrap
//! the tree in a `yewdux` root so the toast and message-dialog stores are
//! scoped to that application.

pub mod config;
pub mod core;
pub mod error;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

pub use config::UiConfig;
pub use error::UiError;
