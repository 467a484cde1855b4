//! Reference parsing for [RFC 3986 URIs][RFC 3986] and [RFC 3987 IRIs][RFC 3987].
//!
//! This crate splits a reference string into its five components (scheme,
//! authority, path, query, fragment) in a single scan, resolves references
//! against a base per RFC 3986 section 5.3, removes dot segments per
//! section 5.2.4, and provides the percent-encoding codec those operations
//! depend on. It has no knowledge of any particular scheme; comparisons and
//! interpretations beyond the generic syntax are up to the caller.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//!
//! # Parse modes
//!
//! Every entry point that parses takes a [`parser::ParseMode`]:
//!
//! * `IriStrict` / `UriStrict` validate each character against the grammar
//!   production for its component and require well-formed percent triplets
//!   (except inside the port). `Uri*` modes additionally reject any byte
//!   outside ASCII.
//! * `IriLenient` / `UriLenient` find the same five component boundaries but
//!   skip the per-character legality checks.
//! * `IriSurrogateLenient` exists for texts transcoded from UTF-16, where an
//!   unpaired surrogate is classified as U+FFFD instead of rejected. Rust
//!   strings cannot carry unpaired surrogates, so under this crate the mode
//!   behaves exactly like `IriLenient`; it is kept so that mode values
//!   round-trip through configuration unchanged.
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + Enables the operations that produce new strings:
//!       [`percent`], [`normalize`], [`resolve`], and [`build`].
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + Lets error types implement `std::error::Error`.
//! * Without neither of them:
//!     + Splitting ([`parser`]) and validation ([`validate`]) remain
//!       available and allocation-free.
//!
//! # Examples
//!
//! ```
//! use iri_ref::parser::{split, ParseMode};
//!
//! let r = split("http://user@host:80/path?q#f", ParseMode::IriStrict)
//!     .expect("should be a valid IRI reference");
//! assert_eq!(r.scheme(), Some("http"));
//! assert_eq!(r.authority(), Some("user@host:80"));
//! assert_eq!(r.path(), "/path");
//! assert_eq!(r.query(), Some("q"));
//! assert_eq!(r.fragment(), Some("f"));
//! ```
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use iri_ref::parser::ParseMode;
//! use iri_ref::resolve::resolve;
//!
//! let resolved = resolve("../g", "http://a/b/c/d;p?q", ParseMode::IriStrict)
//!     .expect("should be a valid reference");
//! assert_eq!(resolved, "http://a/b/g");
//! # }
//! ```
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod build;
pub mod components;
#[cfg(feature = "alloc")]
pub mod normalize;
pub mod parser;
#[cfg(feature = "alloc")]
pub mod percent;
#[cfg(feature = "alloc")]
pub mod resolve;
pub mod validate;
