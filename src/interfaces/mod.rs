//! Outer surfaces: reading operations and reporting outcomes.

pub mod csv;
