//! Process-wide initialization and the resolve-and-access facade.
//!
//! The two capabilities this crate depends on have deliberately different
//! failure policies, so they are held as two independent once-initialized
//! values rather than one shared "maybe failed" flag:
//!
//! - the **host environment** (type lookup + raw storage locations) is
//!   installed once at startup; using the library before it is installed is a
//!   programming error and aborts via panic — there is no degraded mode
//!   without a host
//! - the **mapping index** is built lazily on first use; an absent or
//!   unparsable dataset is logged and resolution degrades to identity
//!   pass-through, which is a normal outcome for hosts that ship without
//!   translation data
//!
//! [`HostScope`] bundles both and carries the facade operations that compose
//! translation, member lookup and accessor construction into single calls, so
//! calling code never touches the index or resolver directly. The free
//! functions [`install`] and [`scope`] manage the one process-wide instance;
//! embedders that want explicit lifetimes (or tests) can construct
//! [`HostScope`] values directly instead.

use std::sync::{Arc, Mutex, OnceLock};

use crate::{
    access::{FieldAccessor, FieldLocation},
    mapping::{loader::MappingSource, MappingIndex},
    resolver::SymbolResolver,
    types::{canonical_name_of, HostEnv, MethodHandle, TypeDesc, TypeRef},
    Error, Result,
};

static SCOPE: OnceLock<HostScope> = OnceLock::new();

/// Installs the process-wide host environment and, optionally, the mapping
/// dataset source.
///
/// Call once at startup, before any resolution. A second install is ignored
/// with a warning; the first environment wins for the process lifetime.
pub fn install(host: Arc<dyn HostEnv>, source: Option<Box<dyn MappingSource>>) {
    if SCOPE.set(HostScope::new(host, source)).is_err() {
        log::warn!("Host environment already installed; ignoring reinstall");
    }
}

/// The process-wide [`HostScope`].
///
/// # Panics
///
/// Panics if [`install`] has not been called. This is deliberate: missing the
/// host capability is unrecoverable and must abort startup rather than limp
/// along in a silently degraded mode.
#[must_use]
pub fn scope() -> &'static HostScope {
    SCOPE
        .get()
        .expect("host environment not installed; call symscope::runtime::install at startup")
}

/// The composed resolve-and-access surface over one host environment.
///
/// Owns the host capability and the lazily built mapping index. All
/// operations are synchronous, never block beyond the one-time index build,
/// and are safe to call from arbitrary threads.
pub struct HostScope {
    host: Arc<dyn HostEnv>,
    index: OnceLock<MappingIndex>,
    pending_source: Mutex<Option<Box<dyn MappingSource>>>,
}

impl HostScope {
    /// Creates a scope over a host environment and an optional mapping
    /// dataset source.
    ///
    /// The dataset is not touched here; it is consumed by the first call that
    /// needs the index.
    #[must_use]
    pub fn new(host: Arc<dyn HostEnv>, source: Option<Box<dyn MappingSource>>) -> Self {
        HostScope {
            host,
            index: OnceLock::new(),
            pending_source: Mutex::new(source),
        }
    }

    /// The installed host environment.
    #[must_use]
    pub fn host(&self) -> &dyn HostEnv {
        self.host.as_ref()
    }

    /// The mapping index, building it on first use.
    ///
    /// Concurrent first-use from multiple threads still results in exactly
    /// one build. A missing or unparsable dataset is logged here, once, and
    /// yields a pass-through index.
    pub fn mappings(&self) -> &MappingIndex {
        self.index.get_or_init(|| {
            let source = self
                .pending_source
                .lock()
                .expect("Failed to acquire lock")
                .take();

            let records = match source {
                Some(source) => match source.load() {
                    Ok(records) => Some(records),
                    Err(error) => {
                        log::error!(
                            "Failed to load mappings from {}: {}",
                            source.describe(),
                            error
                        );
                        None
                    }
                },
                None => {
                    log::error!(
                        "No mapping dataset registered; symbol resolution will pass through unchanged"
                    );
                    None
                }
            };

            MappingIndex::build(records, self.host.as_ref())
        })
    }

    /// A resolver over this scope's mapping index.
    pub fn resolver(&self) -> SymbolResolver<'_> {
        SymbolResolver::new(self.mappings())
    }

    /// Loads a type by its canonical qualified name.
    ///
    /// The name is translated first; failure to then load the type is a hard
    /// error, because unlike a missing mapping entry there is no sensible
    /// fallback for a missing type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] carrying the post-translation name.
    pub fn class(&self, canonical_path: &str) -> Result<TypeRef> {
        let native = self.resolver().native_class_name(canonical_path);

        self.host
            .type_by_name(&native)
            .ok_or(Error::TypeNotFound(native))
    }

    /// Resolves a field by canonical name and builds its accessor in one
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldNotFound`] when the resolved (or passed-through)
    /// name does not exist on `ty` — pass-through absorbs missing mapping
    /// data, never missing members.
    pub fn field_accessor(&self, ty: &TypeRef, canonical_name: &str) -> Result<FieldAccessor> {
        let native = self.resolver().native_field_name(ty.as_ref(), canonical_name);

        ty.field(&native)
            .map(FieldAccessor::new)
            .ok_or_else(|| Error::FieldNotFound {
                type_name: display_name(ty),
                field: native,
            })
    }

    /// Loads a type by canonical path and builds a field accessor on it in
    /// one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the type cannot be loaded, or
    /// [`Error::FieldNotFound`] if the resolved field does not exist on it.
    pub fn field_accessor_by_path(
        &self,
        canonical_path: &str,
        canonical_name: &str,
    ) -> Result<FieldAccessor> {
        let ty = self.class(canonical_path)?;

        self.field_accessor(&ty, canonical_name)
    }

    /// Builds an accessor from a caller-supplied raw storage location,
    /// bypassing name resolution entirely.
    ///
    /// The escape hatch for members whose location was discovered by other
    /// means; the caller owns every precondition the location implies.
    #[must_use]
    pub fn field_accessor_at(&self, location: FieldLocation) -> FieldAccessor {
        FieldAccessor::new(location)
    }

    /// Resolves a method by canonical name and signature and returns the
    /// host's handle for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodNotFound`] when the resolved (or
    /// passed-through) name and descriptor do not exist on `ty`.
    pub fn method_handle(
        &self,
        ty: &TypeRef,
        canonical_name: &str,
        params: &[TypeDesc],
        return_type: &TypeDesc,
    ) -> Result<MethodHandle> {
        let resolver = self.resolver();
        let native = resolver.native_method_name(ty.as_ref(), canonical_name, params, return_type);
        let descriptor = resolver.native_descriptor(params, return_type);

        ty.method(&native, &descriptor)
            .ok_or_else(|| Error::MethodNotFound {
                type_name: display_name(ty),
                method: native,
                descriptor,
            })
    }

    /// Loads a type by canonical path and resolves a method handle on it in
    /// one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the type cannot be loaded, or
    /// [`Error::MethodNotFound`] if the resolved method does not exist on it.
    pub fn method_handle_by_path(
        &self,
        canonical_path: &str,
        canonical_name: &str,
        params: &[TypeDesc],
        return_type: &TypeDesc,
    ) -> Result<MethodHandle> {
        let ty = self.class(canonical_path)?;

        self.method_handle(&ty, canonical_name, params, return_type)
    }
}

/// Best-effort name for error context; unnameable types still need to be
/// reported somehow.
fn display_name(ty: &TypeRef) -> String {
    canonical_name_of(ty.as_ref()).unwrap_or_else(|| ty.simple_name())
}
