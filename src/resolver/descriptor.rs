//! Pure type-descriptor construction.
//!
//! A descriptor is the string that keys overloaded methods: each parameter
//! type is encoded in sequence between parentheses, followed by the return
//! type. Primitives use their fixed one-letter codes, arrays prepend one `[`
//! per dimension, and object types emit `L<path>;` with `.` replaced by `/`.
//! The class-name mapper hook is what makes a descriptor direction-specific:
//! object paths are run through it before encoding, so a descriptor can embed
//! translated class names and matching stays self-consistent across the two
//! naming schemes.
//!
//! Everything here is referentially transparent and independent of any live
//! introspection surface; [`crate::types::TypeDesc`] is the only input shape.

use crate::types::TypeDesc;

/// Builds a method descriptor from parameter and return types.
///
/// `map_class` translates a qualified dotted class path between naming
/// schemes; returning `None` keeps the path unchanged, which is how missing
/// mapping entries pass through. Primitives never reach the mapper.
///
/// # Arguments
///
/// * `params` - Parameter types, in declaration order
/// * `return_type` - The return type
/// * `map_class` - Direction-specific class-name translation hook
#[must_use]
pub fn method_descriptor<F>(params: &[TypeDesc], return_type: &TypeDesc, mut map_class: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut descriptor = String::from("(");

    for param in params {
        encode(param, &mut map_class, &mut descriptor);
    }

    descriptor.push(')');
    encode(return_type, &mut map_class, &mut descriptor);
    descriptor
}

/// Encodes a single type into an existing descriptor buffer.
pub(crate) fn encode<F>(ty: &TypeDesc, map_class: &mut F, out: &mut String)
where
    F: FnMut(&str) -> Option<String>,
{
    match ty {
        TypeDesc::Primitive(kind) => out.push(kind.code()),
        TypeDesc::Array(component) => {
            out.push('[');
            encode(component, map_class, out);
        }
        TypeDesc::Class(path) => {
            let mapped = map_class(path).unwrap_or_else(|| path.clone());
            out.push('L');
            out.push_str(&mapped.replace('.', "/"));
            out.push(';');
        }
    }
}
