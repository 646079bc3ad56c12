//! Raw offset-based member access — the crate's one unsafe boundary.
//!
//! Everything that dereferences a resolved storage offset lives in this
//! module; the rest of the crate only manipulates names and immutable tables.
//! A [`FieldLocation`] records where a field's value physically lives (static
//! block + offset, or per-instance offset), and a [`FieldAccessor`] performs
//! typed get/set at that location with **no type checking and no bounds
//! checking**. The preconditions are documented caller-verified invariants,
//! not runtime checks — the accessor exists precisely to bypass the normal
//! safety of ordinary member access once the caller has established
//! correctness through symbol resolution.
//!
//! # Key Components
//!
//! - [`FieldLocation`]: resolved, reusable storage location of one field
//! - [`StaticBase`]: host-pinned base pointer of a type's static storage
//! - [`FieldAccessor`]: per-kind unsafe get/set over a location
//!
//! # Examples
//!
//! ```rust
//! use symscope::access::FieldAccessor;
//! use std::mem::offset_of;
//!
//! struct Counter { hits: i32 }
//!
//! let mut counter = Counter { hits: 0 };
//! let accessor = FieldAccessor::instance_at(offset_of!(Counter, hits));
//! let base = std::ptr::from_mut(&mut counter).cast::<u8>();
//!
//! unsafe {
//!     accessor.set_i32(base, 7);
//!     assert_eq!(accessor.get_i32(base), 7);
//! }
//! ```

mod accessor;
mod location;

pub use accessor::FieldAccessor;
pub use location::{FieldLocation, StaticBase};
