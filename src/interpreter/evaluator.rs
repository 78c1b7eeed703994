/// Core evaluation logic.
///
/// Contains the program, statement and expression dispatch, declarations,
/// assignments and object construction.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements floating-point arithmetic and the truncating remainder.
pub mod binary;
