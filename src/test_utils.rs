// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Animation curves and geometry produce floats that `assert_eq!` cannot
//! compare reliably, so tests use the `approx` assertion macros.

pub use approx::assert_abs_diff_eq;
