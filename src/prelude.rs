// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all symscope operations
pub use crate::Error;

/// The result type used throughout symscope
pub use crate::Result;

// ================================================================================================
// Mapping Data and Index
// ================================================================================================

/// Raw and indexed mapping records
pub use crate::mapping::{ClassMapping, ClassRecord, MappingIndex, MemberMapping};

/// Dataset producers
pub use crate::mapping::loader::{MappingSource, ProguardSource, TinySource};

// ================================================================================================
// Type Descriptions and Host Capabilities
// ================================================================================================

/// Pure type descriptions for descriptor construction
pub use crate::types::{PrimitiveKind, TypeDesc};

/// Host introspection surface
pub use crate::types::{
    canonical_name_of, describe_type, HostEnv, MethodHandle, TypeMirror, TypeRef,
};

// ================================================================================================
// Resolution and Raw Access
// ================================================================================================

/// Symbol translation
pub use crate::resolver::{method_descriptor, SymbolResolver};

/// Raw member access
pub use crate::access::{FieldAccessor, FieldLocation, StaticBase};

/// Process-wide facade
pub use crate::runtime::HostScope;
