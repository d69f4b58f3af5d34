//! Application core. Pure logic, no I/O.
//!
//! Routes edges and ticks to the per-button gesture machines and carries
//! their events out through the [`ports::EventQueue`] port, keeping this
//! layer fully testable without real peripherals.

pub mod commands;
pub mod emitter;
pub mod ports;
pub mod service;
