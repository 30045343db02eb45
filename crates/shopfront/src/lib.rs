//! Demo shopfront for the sweetshop inventory service.
//!
//! A binary crate with a small library surface, so the scripted trading day
//! can be exercised by tests as well as from `main`.

pub mod seed;
pub mod tour;
