//! Shared fixtures for unit tests: an in-memory host environment and a
//! builder for host-type reflections.

use std::{collections::HashMap, sync::Arc};

use crate::{
    access::FieldLocation,
    types::{HostEnv, MethodHandle, PrimitiveKind, TypeMirror, TypeRef},
};

/// Builder for an in-memory [`TypeMirror`] implementation.
pub(crate) struct MirrorSpec {
    simple: String,
    qualified: String,
    enclosing: Option<TypeRef>,
    component: Option<TypeRef>,
    primitive: Option<PrimitiveKind>,
    unnameable: bool,
    fields: HashMap<String, FieldLocation>,
    methods: HashMap<String, MethodHandle>,
}

impl MirrorSpec {
    /// A top-level class with the given qualified dotted name.
    pub(crate) fn class(qualified: &str) -> Self {
        let simple = qualified
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(qualified)
            .to_string();

        MirrorSpec {
            simple,
            qualified: qualified.to_string(),
            enclosing: None,
            component: None,
            primitive: None,
            unnameable: false,
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    /// A class nested directly inside `outer`.
    pub(crate) fn nested(simple: &str, outer: MirrorSpec) -> Self {
        let mut spec = MirrorSpec::class(simple);
        spec.enclosing = Some(outer.build());
        spec
    }

    /// An array type over `component`.
    pub(crate) fn array_of(component: MirrorSpec) -> Self {
        let mut spec = MirrorSpec::class("[]");
        spec.component = Some(component.build());
        spec
    }

    /// A primitive type of the given kind.
    pub(crate) fn primitive(kind: PrimitiveKind) -> Self {
        let mut spec = MirrorSpec::class(&kind.to_string());
        spec.primitive = Some(kind);
        spec
    }

    /// Marks the type anonymous/local/hidden.
    pub(crate) fn unnameable(mut self) -> Self {
        self.unnameable = true;
        self
    }

    /// Declares a field by host-side name.
    pub(crate) fn field(mut self, native_name: &str, location: FieldLocation) -> Self {
        self.fields.insert(native_name.to_string(), location);
        self
    }

    /// Declares a method by host-side name and descriptor.
    pub(crate) fn method(
        mut self,
        native_name: &str,
        descriptor: &str,
        handle: MethodHandle,
    ) -> Self {
        self.methods
            .insert(format!("{native_name}{descriptor}"), handle);
        self
    }

    pub(crate) fn build(self) -> TypeRef {
        Arc::new(FixtureType {
            simple: self.simple,
            qualified: self.qualified,
            enclosing: self.enclosing,
            component: self.component,
            primitive: self.primitive,
            unnameable: self.unnameable,
            fields: self.fields,
            methods: self.methods,
        })
    }
}

struct FixtureType {
    simple: String,
    qualified: String,
    enclosing: Option<TypeRef>,
    component: Option<TypeRef>,
    primitive: Option<PrimitiveKind>,
    unnameable: bool,
    fields: HashMap<String, FieldLocation>,
    methods: HashMap<String, MethodHandle>,
}

impl TypeMirror for FixtureType {
    fn simple_name(&self) -> String {
        self.simple.clone()
    }

    fn qualified_name(&self) -> String {
        self.qualified.clone()
    }

    fn enclosing(&self) -> Option<TypeRef> {
        self.enclosing.clone()
    }

    fn component(&self) -> Option<TypeRef> {
        self.component.clone()
    }

    fn primitive(&self) -> Option<PrimitiveKind> {
        self.primitive
    }

    fn is_unnameable(&self) -> bool {
        self.unnameable
    }

    fn field(&self, native_name: &str) -> Option<FieldLocation> {
        self.fields.get(native_name).copied()
    }

    fn method(&self, native_name: &str, native_descriptor: &str) -> Option<MethodHandle> {
        self.methods
            .get(&format!("{native_name}{native_descriptor}"))
            .copied()
    }
}

/// In-memory [`HostEnv`] with a fixed set of loadable types.
pub(crate) struct FixtureHost {
    types: HashMap<String, TypeRef>,
    probe: String,
}

impl FixtureHost {
    /// A host whose canonical-only probe symbol is `probe`.
    pub(crate) fn new(probe: &str) -> Self {
        FixtureHost {
            types: HashMap::new(),
            probe: probe.to_string(),
        }
    }

    /// Registers a loadable type under the name the host uses for it.
    pub(crate) fn with_type(mut self, qualified: &str, ty: TypeRef) -> Self {
        self.types.insert(qualified.to_string(), ty);
        self
    }
}

impl HostEnv for FixtureHost {
    fn type_by_name(&self, qualified: &str) -> Option<TypeRef> {
        self.types.get(qualified).cloned()
    }

    fn canonical_probe(&self) -> &str {
        &self.probe
    }
}
