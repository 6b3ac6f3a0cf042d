#![doc(test(attr(deny(warnings))))]

//! ArthaKu Core holds the budgeting model, derived views, and persistence
//! ports behind the ArthaKu personal finance frontends.

pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("ArthaKu Core tracing initialized.");
    });
}
