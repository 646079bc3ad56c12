//! Mapping records and the bidirectional translation index.
//!
//! Everything a dataset says about renamed symbols ends up here, in one of
//! two shapes: the raw loader output ([`ClassRecord`] with flat member lists)
//! and the indexed, immutable form the resolver consults ([`ClassMapping`]
//! inside a [`MappingIndex`]). The index is built exactly once and never
//! mutated, so it can be read from any number of threads without locking.
//!
//! # Key Components
//!
//! - [`MemberMapping`]: one renamed field or method (methods carry
//!   descriptors for overload disambiguation)
//! - [`ClassRecord`] / [`ClassMapping`]: one renamed type, raw and indexed
//! - [`MappingIndex`]: class tables keyed by native and canonical name, plus
//!   the detected naming mode of the running host
//! - [`loader`]: dataset producers ([`loader::MappingSource`] and the two
//!   concrete formats)
//!
//! # Examples
//!
//! ```rust
//! use symscope::mapping::{loader::{MappingSource, ProguardSource}, MappingIndex};
//!
//! let source = ProguardSource::from_text("pkg.Foo -> a1:\n    int bar -> f\n");
//! let index = MappingIndex::with_mode(Some(source.load()?), false);
//!
//! assert_eq!(index.class_by_canonical("pkg.Foo").unwrap().native_name, "a1");
//! # Ok::<(), symscope::Error>(())
//! ```

pub mod loader;

mod index;
mod types;

pub use index::MappingIndex;
pub use types::{ClassMapping, ClassRecord, MemberMapping};
