use crate::access::{FieldLocation, StaticBase};

macro_rules! accessor_kind {
    ($kind:literal, $getter:ident, $setter:ident, $ty:ty) => {
        #[doc = concat!("Reads the ", $kind, " value at this accessor's location.")]
        ///
        /// For static locations `instance` is ignored and may be null.
        ///
        /// # Safety
        ///
        /// The caller must guarantee the location's preconditions: `instance`
        /// points to a live instance of the owning type (instance locations),
        #[doc = concat!("and the storage at the recorded offset holds a `", stringify!($ty), "`.")]
        /// Violating either is undefined behavior, not a reported error.
        #[must_use]
        pub unsafe fn $getter(&self, instance: *mut u8) -> $ty {
            self.target(instance).cast::<$ty>().read()
        }

        #[doc = concat!("Writes a ", $kind, " value to this accessor's location.")]
        ///
        /// For static locations `instance` is ignored and may be null.
        ///
        /// # Safety
        ///
        /// Same preconditions as the matching getter; additionally no other
        /// thread may be concurrently writing the same storage unless the
        /// caller provides its own synchronization.
        pub unsafe fn $setter(&self, instance: *mut u8, value: $ty) {
            self.target(instance).cast::<$ty>().write(value);
        }
    };
}

/// Typed raw access to one resolved field location.
///
/// This is the single auditable unsafe surface of the crate: every get/set
/// bypasses visibility and type checking entirely and works directly on the
/// storage offset recorded in the [`FieldLocation`]. Construct one accessor
/// per resolved member and reuse it across accesses; construction is cheap
/// but resolution (done by the facade) is not.
///
/// # Caller-Verified Invariants
///
/// None of these are checked at access time; each one is the caller's
/// responsibility, normally discharged by resolving the member through the
/// symbol resolver first:
///
/// - the instance passed to an instance-location access is a live, properly
///   aligned instance of the owning type
/// - the storage kind matches (static accessors built from static slots,
///   instance accessors from instance slots)
/// - the value kind read or written matches the field's actual kind and size
///
/// # Concurrency
///
/// Operations take no locks and provide no atomicity beyond what the
/// underlying storage naturally offers for aligned same-size access.
/// Concurrent unsynchronized writes to the same member are a data race the
/// caller owns; read-only sharing of one accessor across threads is fine.
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor {
    location: FieldLocation,
}

impl FieldAccessor {
    /// Creates an accessor over an already-resolved field location.
    #[must_use]
    pub fn new(location: FieldLocation) -> Self {
        FieldAccessor { location }
    }

    /// Creates an accessor for an instance field at a caller-supplied raw
    /// offset — the escape hatch for members located by other means.
    #[must_use]
    pub fn instance_at(offset: usize) -> Self {
        FieldAccessor {
            location: FieldLocation::Instance { offset },
        }
    }

    /// Creates an accessor for a static field at a caller-supplied raw
    /// offset inside `base` — the escape hatch for members located by other
    /// means.
    #[must_use]
    pub fn static_at(base: StaticBase, offset: usize) -> Self {
        FieldAccessor {
            location: FieldLocation::Static { base, offset },
        }
    }

    /// The resolved location this accessor targets.
    #[must_use]
    pub fn location(&self) -> FieldLocation {
        self.location
    }

    /// Resolves the concrete storage address for one access.
    fn target(&self, instance: *mut u8) -> *mut u8 {
        match self.location {
            FieldLocation::Static { base, offset } => unsafe { base.as_ptr().add(offset) },
            FieldLocation::Instance { offset } => unsafe { instance.add(offset) },
        }
    }

    accessor_kind!("boolean", get_bool, set_bool, bool);
    accessor_kind!("8-bit integer", get_i8, set_i8, i8);
    accessor_kind!("16-bit integer", get_i16, set_i16, i16);
    accessor_kind!("32-bit integer", get_i32, set_i32, i32);
    accessor_kind!("64-bit integer", get_i64, set_i64, i64);
    accessor_kind!("32-bit float", get_f32, set_f32, f32);
    accessor_kind!("64-bit float", get_f64, set_f64, f64);
    accessor_kind!("character", get_char, set_char, char);
    accessor_kind!("object reference", get_ref, set_ref, *mut ());
}
