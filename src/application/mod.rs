//! Application layer orchestrating scoring and storage.
//!
//! `ReceiptProcessor` is the entry point used by the HTTP interface. It runs
//! the rule engine, assigns an id and hands the result to the store.

pub mod processor;
