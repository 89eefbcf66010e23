//! Response envelope normalization and error extraction.
//!
//! Backend endpoints wrap their payloads in several envelope conventions
//! (`{success, data}`, `{ok, data}`, `{ok, memory}`, a bare entity, a bare
//! array) and report failures as strings or structured bodies. This crate
//! adapts both into one canonical form so UI code never needs per-endpoint
//! adapters.
//!
//! ## Architectural Layer
//!
//! **Pure functions.** This crate has no I/O, no logging, and no state. Inputs
//! are values the caller has already decoded; the caller owns the fetch.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`shape`] | [`ResponseShape`] and its precedence-ordered classifier |
//! | [`normalize`](mod@normalize) | [`normalize()`], [`normalize_ref`], [`normalize_as`] |
//! | [`errors`] | [`NormalizedError`], [`extract`], [`extract_body`] |
//! | [`identifiers`] | Newtype identifiers ([`AppId`]) |
//! | [`value`] | Dynamic truthiness probes shared by the classifiers |
//!
//! Both [`normalize()`] and [`extract`] are total: they never fail and never
//! panic, whatever the input.

pub mod errors;
pub mod identifiers;
pub mod normalize;
pub mod shape;
pub mod value;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{extract, extract_body, NormalizedError, FALLBACK_MESSAGE, UNKNOWN_ERROR_MESSAGE};
pub use identifiers::AppId;
pub use normalize::{normalize, normalize_as, normalize_ref, DecodeError};
pub use shape::ResponseShape;
pub use value::is_truthy;
