#![doc(test(attr(deny(warnings))))]

//! Lifetrack Core offers the record keeping, aggregation, and dashboard
//! primitives that power personal finance and lifestyle tracking workflows.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Lifetrack Core tracing initialized.");
    });
}
