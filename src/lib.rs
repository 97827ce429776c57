#![doc(test(attr(deny(warnings))))]

//! Select Core offers grouped, numbered selection primitives for
//! interactive command-line menus: render a sorted listing of named groups
//! and map a chosen number back to its group and item.

pub mod cli;
pub mod config;
pub mod errors;
pub mod selector;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Select Core tracing initialized.");
    });
}
