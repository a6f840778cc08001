//! numerical_stability — shared tolerances and dense linear-algebra helpers.
//!
//! Purpose
//! -------
//! Keep the numerically delicate pieces of the crate (pseudo-inverses,
//! condition-number reporting, tolerance constants, `ndarray` ↔ `nalgebra`
//! copies) in one place so the cointegration pipeline can assume
//! well-defined behavior on singular or badly scaled inputs.
//!
//! Conventions
//! -----------
//! - Pure functions only: no logging, no I/O, no global state.
//! - Factorization failures surface as `None`; the calling layer maps them
//!   into its own typed error.

pub mod linalg;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::linalg::{
    Conditioning, DEFAULT_CONDITION_THRESHOLD, EIGEN_EPS, PseudoInverse, from_dmatrix,
    pseudo_inverse, symmetrize, to_dmatrix,
};
