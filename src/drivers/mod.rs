//! Hardware-facing drivers.

pub mod switch_input;
