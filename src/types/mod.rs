//! Type descriptions and the host introspection surface.
//!
//! Two views of "a type" live here, serving different halves of symbol
//! resolution:
//!
//! - [`TypeDesc`] / [`PrimitiveKind`]: the pure, tagged description used for
//!   descriptor construction. Closed set of cases, no runtime dependency,
//!   directly unit-testable.
//! - [`TypeMirror`] / [`HostEnv`]: the capability traits a concrete host
//!   implements so the core can enumerate nested/enclosing relationships and
//!   locate members without knowing how the host represents types.
//!
//! [`canonical_name_of`] and [`describe_type`] bridge the two: the former
//! computes the stable qualified name of a live type, which is the key every
//! class-level mapping lookup starts from, and the latter turns a live type
//! into the [`TypeDesc`] a descriptor is built from.

mod desc;
mod mirror;

pub use desc::{PrimitiveKind, TypeDesc};
pub use mirror::{canonical_name_of, describe_type, HostEnv, MethodHandle, TypeMirror, TypeRef};
