// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::too_many_arguments)]
//#![deny(unsafe_code)]
// - 'access/accessor.rs' performs raw offset-based reads and writes
// - 'access/location.rs' carries host-pinned raw pointers across threads
// - 'types/mirror.rs' marks the opaque method-handle pointer Send/Sync

//! # symscope
//!
//! Symbol translation and raw member access for code running inside a host
//! whose internal names differ between the build it was compiled against and
//! the build it actually runs on.
//!
//! Two problems are solved together: given a name known at compile time, find
//! the name the running host actually uses (**symbol translation**), and once
//! a member's storage location is known, read and write it directly through
//! its offset, bypassing visibility and type-checking overhead (**raw
//! access**).
//!
//! ## Features
//!
//! - **Bidirectional name index** - class, field and method renames indexed
//!   by both naming schemes, built once and read lock-free afterwards
//! - **Overload-safe method keys** - methods are keyed by name plus a type
//!   descriptor, so overloads translate independently
//! - **Environment detection** - a one-time probe decides which naming scheme
//!   the running host uses, letting the same client code run unmodified
//!   against canonically named and renamed host builds
//! - **Graceful degradation** - a missing or unparsable mapping dataset is
//!   logged and resolution becomes an identity pass-through, never an error
//! - **One narrow unsafe surface** - every unchecked get/set lives in
//!   [`access`], behind documented caller-verified invariants
//! - **Pluggable datasets** - ProGuard-style rename lists and multi-namespace
//!   tiny datasets ship in [`mapping::loader`]; anything else can implement
//!   [`mapping::loader::MappingSource`]
//!
//! ## Quick Start
//!
//! Translation needs no host at all; the pure layers can be used directly:
//!
//! ```rust
//! use symscope::prelude::*;
//!
//! let source = ProguardSource::from_text(
//!     "pkg.Foo -> a1:\n    int bar -> f\n    void doThing(int) -> c\n",
//! );
//! let index = MappingIndex::with_mode(Some(source.load()?), false);
//! let resolver = SymbolResolver::new(&index);
//!
//! assert_eq!(resolver.native_class_name("pkg.Foo"), "a1");
//! assert_eq!(resolver.canonical_class_name("a1"), "pkg.Foo");
//! # Ok::<(), symscope::Error>(())
//! ```
//!
//! Inside a host process, install the host capability once at startup and go
//! through the facade instead:
//!
//! ```rust,ignore
//! use symscope::{prelude::*, runtime};
//!
//! runtime::install(host_environment, Some(Box::new(dataset)));
//!
//! let accessor = runtime::scope().field_accessor_by_path("pkg.Foo", "bar")?;
//! unsafe { accessor.set_i32(instance, 7) };
//! ```
//!
//! ## Architecture
//!
//! `symscope` is organized into several key modules, leaves first:
//!
//! - [`mapping`] - mapping records, dataset loaders and the immutable
//!   bidirectional index
//! - [`types`] - pure type descriptions plus the host introspection traits
//! - [`resolver`] - name translation and descriptor construction
//! - [`access`] - the single unsafe boundary: typed get/set at resolved
//!   storage offsets
//! - [`runtime`] - process-wide initialization and the resolve-and-access
//!   facade
//! - [`Error`] and [`Result`] - error handling; missing mapping *data*
//!   degrades silently, missing *members* fail loudly

#[macro_use]
mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use symscope::prelude::*;
///
/// let index = MappingIndex::with_mode(None, false);
/// assert!(index.is_pass_through());
/// ```
pub mod prelude;

pub mod access;
pub mod mapping;
pub mod resolver;
pub mod runtime;
pub mod types;

pub use error::Error;

/// The result type used throughout symscope.
pub type Result<T> = std::result::Result<T, Error>;
