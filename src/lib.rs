#![doc(test(attr(deny(warnings))))]

//! Deskbook provides the bounded record store, fixed-width binary persistence,
//! and menu-driven CLI glue shared by the money, task, and contact utilities.

pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Deskbook tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("deskbook=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
