//! SmartSwitch firmware library.
//!
//! Button gesture recognition for smart wall switches: debounced edges and
//! a periodic tick go in, typed button events come out.  Everything here
//! is pure logic and runs on the host for testing; the ESP-IDF entry point
//! lives in `main.rs` behind the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
