//! Library components for the `pyq` terminal dashboard.

pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
