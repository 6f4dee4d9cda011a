//! The credential store.

pub mod service;
