/// Base pointer of a type's static storage block.
///
/// Obtained from the host environment when a static field is resolved. The
/// pointer is opaque to this crate; it is only ever combined with a field
/// offset inside [`crate::access::FieldAccessor`].
///
/// # Safety Contract
///
/// The host guarantees the block lives for the remainder of the process and
/// never moves. That guarantee is what makes the `Send`/`Sync` implementations
/// sound: the pointer itself is freely copyable between threads, and all
/// dereferencing happens behind the `unsafe` accessor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticBase(*mut u8);

// The wrapped pointer is never dereferenced outside the accessor's unsafe
// operations, and the host pins the storage for the process lifetime.
unsafe impl Send for StaticBase {}
unsafe impl Sync for StaticBase {}

impl StaticBase {
    /// Wraps a raw pointer to a static storage block provided by the host.
    #[must_use]
    pub fn new(ptr: *mut u8) -> Self {
        StaticBase(ptr)
    }

    /// The raw base pointer of the storage block.
    #[must_use]
    pub fn as_ptr(self) -> *mut u8 {
        self.0
    }
}

/// The resolved storage location of a field — the reusable product of symbol
/// resolution.
///
/// A location is produced once per resolved member and then reused across any
/// number of accesses; it is `Copy`, immutable, and safe to share between
/// threads for concurrent reads. The two variants mirror the two storage
/// kinds a field can have:
///
/// - [`FieldLocation::Static`] - the field lives at a fixed offset inside the
///   owning type's static storage block; the instance argument of an access is
///   ignored
/// - [`FieldLocation::Instance`] - the field lives at a fixed offset inside
///   each instance of the owning type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// Field lives in the owning type's static storage block.
    Static {
        /// Base pointer of the static storage block
        base: StaticBase,
        /// Byte offset of the field within the block
        offset: usize,
    },
    /// Field lives at a fixed offset inside each instance.
    Instance {
        /// Byte offset of the field within an instance
        offset: usize,
    },
}

impl FieldLocation {
    /// Whether this location targets static storage.
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, FieldLocation::Static { .. })
    }

    /// The byte offset of the field within its storage.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            FieldLocation::Static { offset, .. } | FieldLocation::Instance { offset } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_location_reports_kind_and_offset() {
        let location = FieldLocation::Static {
            base: StaticBase::new(std::ptr::null_mut()),
            offset: 24,
        };

        assert!(location.is_static());
        assert_eq!(location.offset(), 24);
    }

    #[test]
    fn instance_location_reports_kind_and_offset() {
        let location = FieldLocation::Instance { offset: 8 };

        assert!(!location.is_static());
        assert_eq!(location.offset(), 8);
    }

    #[test]
    fn locations_are_copy_and_comparable() {
        let a = FieldLocation::Instance { offset: 16 };
        let b = a;

        assert_eq!(a, b, "Copied location should compare equal");
    }
}
