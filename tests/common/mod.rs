//! Shared in-memory host environment for integration tests.
//!
//! Host types are backed by real Rust structs: field locations come from
//! `offset_of!` and static storage from leaked blocks, so accessor round
//! trips exercise genuine memory, not a simulation.

use std::{collections::HashMap, sync::Arc};

use symscope::prelude::*;

/// A host type assembled from explicit parts.
pub struct HostType {
    simple: String,
    qualified: String,
    fields: HashMap<String, FieldLocation>,
    methods: HashMap<String, MethodHandle>,
}

impl HostType {
    pub fn new(qualified: &str) -> Self {
        let simple = qualified
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(qualified)
            .to_string();

        HostType {
            simple,
            qualified: qualified.to_string(),
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    pub fn field(mut self, native_name: &str, location: FieldLocation) -> Self {
        self.fields.insert(native_name.to_string(), location);
        self
    }

    #[allow(dead_code)]
    pub fn method(mut self, native_name: &str, descriptor: &str, handle: MethodHandle) -> Self {
        self.methods
            .insert(format!("{native_name}{descriptor}"), handle);
        self
    }

    pub fn build(self) -> TypeRef {
        Arc::new(BuiltType(self))
    }
}

struct BuiltType(HostType);

impl TypeMirror for BuiltType {
    fn simple_name(&self) -> String {
        self.0.simple.clone()
    }

    fn qualified_name(&self) -> String {
        self.0.qualified.clone()
    }

    fn enclosing(&self) -> Option<TypeRef> {
        None
    }

    fn component(&self) -> Option<TypeRef> {
        None
    }

    fn primitive(&self) -> Option<PrimitiveKind> {
        None
    }

    fn is_unnameable(&self) -> bool {
        false
    }

    fn field(&self, native_name: &str) -> Option<FieldLocation> {
        self.0.fields.get(native_name).copied()
    }

    fn method(&self, native_name: &str, native_descriptor: &str) -> Option<MethodHandle> {
        self.0
            .methods
            .get(&format!("{native_name}{native_descriptor}"))
            .copied()
    }
}

/// In-memory host with a fixed type table and configurable probe symbol.
pub struct TestHost {
    types: HashMap<String, TypeRef>,
    probe: String,
}

impl TestHost {
    pub fn new(probe: &str) -> Self {
        TestHost {
            types: HashMap::new(),
            probe: probe.to_string(),
        }
    }

    pub fn with_type(mut self, qualified: &str, ty: TypeRef) -> Self {
        self.types.insert(qualified.to_string(), ty);
        self
    }
}

impl HostEnv for TestHost {
    fn type_by_name(&self, qualified: &str) -> Option<TypeRef> {
        self.types.get(qualified).cloned()
    }

    fn canonical_probe(&self) -> &str {
        &self.probe
    }
}
