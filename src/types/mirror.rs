use std::sync::Arc;

use crate::{
    access::FieldLocation,
    types::{PrimitiveKind, TypeDesc},
};

/// Reference-counted handle to a host-side type reflection.
pub type TypeRef = Arc<dyn TypeMirror>;

/// Opaque handle to a host-side method, as resolved by the host environment.
///
/// The handle is produced by [`TypeMirror::method`] and carried through the
/// facade unchanged; how it is invoked is entirely between the caller and the
/// host. This crate attaches no calling convention or signature semantics to
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodHandle(*const ());

// Opaque token; the host guarantees whatever it points at is process-lived.
unsafe impl Send for MethodHandle {}
unsafe impl Sync for MethodHandle {}

impl MethodHandle {
    /// Wraps a raw host-provided method pointer.
    #[must_use]
    pub fn new(ptr: *const ()) -> Self {
        MethodHandle(ptr)
    }

    /// The raw pointer the host associated with the method.
    #[must_use]
    pub fn as_ptr(self) -> *const () {
        self.0
    }
}

/// Reflection capability over a single host type.
///
/// This is the introspection surface the resolver and facade consume; it keeps
/// the core logic independent of how a concrete host represents its types. An
/// implementation reports structural facts (array component, primitive kind,
/// enclosing type) and performs member lookups by the names the *host* uses —
/// name translation happens before a `TypeMirror` is ever consulted.
pub trait TypeMirror: Send + Sync {
    /// The simple (unqualified) name of the type.
    fn simple_name(&self) -> String;

    /// The qualified dotted name of the type as the host knows it.
    ///
    /// Only consulted for top-level types; nested types are named by walking
    /// [`TypeMirror::enclosing`] (see [`canonical_name_of`]).
    fn qualified_name(&self) -> String;

    /// The directly enclosing type, if this type is nested.
    fn enclosing(&self) -> Option<TypeRef>;

    /// The component type, if this type is an array.
    fn component(&self) -> Option<TypeRef>;

    /// The primitive kind, if this type is a primitive.
    fn primitive(&self) -> Option<PrimitiveKind>;

    /// Whether this type cannot be named stably (anonymous, local, or
    /// dynamically hidden). Unnameable types cannot participate in symbol
    /// translation.
    fn is_unnameable(&self) -> bool;

    /// Locates a declared field by the name the host uses for it.
    fn field(&self, native_name: &str) -> Option<FieldLocation>;

    /// Looks up a declared method by host-side name and type descriptor.
    ///
    /// The descriptor disambiguates overloads; two methods sharing a name but
    /// differing in parameter types are distinct entries.
    fn method(&self, native_name: &str, native_descriptor: &str) -> Option<MethodHandle>;
}

/// Capability surface the embedding host must provide, installed once at
/// process start.
///
/// Beyond type lookup, the host names the probe symbol used to detect which
/// naming scheme the running build uses. One deployment target ships
/// canonically named internals while another ships renamed ones; the probe
/// lets the same client code work unmodified against either.
pub trait HostEnv: Send + Sync {
    /// Looks up a loadable type by the qualified dotted name the host uses.
    fn type_by_name(&self, qualified: &str) -> Option<TypeRef>;

    /// Qualified name of a symbol that exists only in canonically named
    /// builds of the host.
    fn canonical_probe(&self) -> &str;
}

/// Computes the qualified dotted name of a type, or `None` if the type cannot
/// be named stably.
///
/// Arrays are named via their component type with `[]` appended after the
/// walk, never before. Nested types are composed by walking the enclosing
/// chain outward, joining segments with `$`. Anonymous, local and hidden
/// types — and arrays of them — yield `None`.
#[must_use]
pub fn canonical_name_of(ty: &dyn TypeMirror) -> Option<String> {
    if let Some(component) = ty.component() {
        return canonical_name_of(component.as_ref()).map(|name| name + "[]");
    }

    if ty.is_unnameable() {
        return None;
    }

    match ty.enclosing() {
        None => Some(ty.qualified_name()),
        Some(enclosing) => canonical_name_of(enclosing.as_ref())
            .map(|outer| format!("{}${}", outer, ty.simple_name())),
    }
}

/// Converts a live type into its pure description, suitable for descriptor
/// construction.
///
/// Primitives map to their kind, arrays recurse through the component, and
/// everything else is described by its qualified name. Types that cannot be
/// named stably yield `None`: there is no descriptor form for them.
#[must_use]
pub fn describe_type(ty: &dyn TypeMirror) -> Option<TypeDesc> {
    if let Some(kind) = ty.primitive() {
        return Some(TypeDesc::Primitive(kind));
    }

    if let Some(component) = ty.component() {
        return describe_type(component.as_ref()).map(TypeDesc::array);
    }

    canonical_name_of(ty).map(TypeDesc::Class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MirrorSpec;

    #[test]
    fn top_level_type_uses_qualified_name() {
        let ty = MirrorSpec::class("pkg.Foo").build();

        assert_eq!(canonical_name_of(ty.as_ref()), Some("pkg.Foo".to_string()));
    }

    #[test]
    fn nested_type_walks_enclosing_chain() {
        let outer = MirrorSpec::class("pkg.Outer");
        let middle = MirrorSpec::nested("Middle", outer);
        let inner = MirrorSpec::nested("Inner", middle).build();

        assert_eq!(
            canonical_name_of(inner.as_ref()),
            Some("pkg.Outer$Middle$Inner".to_string())
        );
    }

    #[test]
    fn array_appends_suffix_after_translation() {
        let ty = MirrorSpec::array_of(MirrorSpec::class("pkg.Foo")).build();

        assert_eq!(canonical_name_of(ty.as_ref()), Some("pkg.Foo[]".to_string()));
    }

    #[test]
    fn unnameable_type_has_no_name() {
        let ty = MirrorSpec::class("pkg.Foo$1").unnameable().build();

        assert_eq!(canonical_name_of(ty.as_ref()), None);
    }

    #[test]
    fn array_of_unnameable_has_no_name() {
        let ty = MirrorSpec::array_of(MirrorSpec::class("pkg.Foo$1").unnameable()).build();

        assert_eq!(canonical_name_of(ty.as_ref()), None);
    }

    #[test]
    fn describe_type_covers_all_shapes() {
        let primitive = MirrorSpec::primitive(PrimitiveKind::I4).build();
        let class = MirrorSpec::class("pkg.Foo").build();
        let array = MirrorSpec::array_of(MirrorSpec::primitive(PrimitiveKind::R8)).build();
        let hidden = MirrorSpec::class("pkg.Foo$1").unnameable().build();

        assert_eq!(
            describe_type(primitive.as_ref()),
            Some(TypeDesc::Primitive(PrimitiveKind::I4))
        );
        assert_eq!(
            describe_type(class.as_ref()),
            Some(TypeDesc::class("pkg.Foo"))
        );
        assert_eq!(
            describe_type(array.as_ref()),
            Some(TypeDesc::array(PrimitiveKind::R8.into()))
        );
        assert_eq!(describe_type(hidden.as_ref()), None);
    }
}
