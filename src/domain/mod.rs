//! Domain model: receipts, the points rules, and the ports the application
//! layer depends on.

pub mod points;
pub mod ports;
pub mod receipt;
