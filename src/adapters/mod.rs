//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `log_sink`     | EventQueue         | Serial log output        |
//!
//! The embassy-sync channel adapters live next to the trait in
//! [`app::ports`](crate::app::ports).

pub mod log_sink;
