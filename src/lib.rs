//! Structural deep-equality comparison for loosely typed values.

/// Value model, flattening, comparison, and input readers.
pub mod equal;
