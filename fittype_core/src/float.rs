// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Rust's float rounding methods like `f64::floor` and `f64::round` are not
//! available in `core`. We provide a small trait that dispatches to either
//! `std` or `libm` depending on features.

/// Float rounding helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn round(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("fittype_core requires either the `std` or `libm` feature");
