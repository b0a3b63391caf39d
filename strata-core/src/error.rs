//! Error types for the Strata core library.
//!
//! Only configuration problems surface as typed errors. Graph invariant
//! violations are programming errors and abort through assertions inside
//! [`crate::Graph`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring a [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StrataError {
    /// The target depth must include at least the root layer.
    #[error("target_depth must be at least 1 (got {got})")]
    InvalidDepth {
        /// The invalid depth supplied by the caller.
        got: usize,
    },
    /// A probability parameter fell outside `[0, 1]`.
    #[error("{parameter} must be within [0, 1] (got {got})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`StrataError`] variants.
    enum StrataErrorCode for StrataError {
        /// The target depth must include at least the root layer.
        InvalidDepth => InvalidDepth { .. } => "STRATA_INVALID_DEPTH",
        /// A probability parameter fell outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "STRATA_INVALID_PROBABILITY",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, StrataError>;
