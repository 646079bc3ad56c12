//! Symbol translation between naming schemes.
//!
//! The resolver is the per-lookup half of the translation pipeline: it
//! consults the immutable [`crate::mapping::MappingIndex`] and answers "what
//! does the running host call this symbol" (and the reverse) for classes,
//! fields and methods. Methods are disambiguated by a descriptor built here
//! from the pure [`crate::types::TypeDesc`] form.
//!
//! # Key Components
//!
//! - [`SymbolResolver`]: bidirectional class/field/method name translation
//!   with pass-through-on-miss semantics
//! - [`method_descriptor`]: standalone, direction-parameterized descriptor
//!   construction
//!
//! # Examples
//!
//! ```rust
//! use symscope::{
//!     mapping::MappingIndex,
//!     resolver::SymbolResolver,
//! };
//!
//! // No dataset loaded: every resolution is an identity pass-through.
//! let index = MappingIndex::with_mode(None, false);
//! let resolver = SymbolResolver::new(&index);
//!
//! assert_eq!(resolver.native_class_name("pkg.Foo"), "pkg.Foo");
//! ```

mod descriptor;
mod symbols;

pub use descriptor::method_descriptor;
pub use symbols::SymbolResolver;
