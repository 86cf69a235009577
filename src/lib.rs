//! Facade crate re-exporting [`touchbridge_core`].

pub use touchbridge_core::*;
