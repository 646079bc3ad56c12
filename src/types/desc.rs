use strum::{Display, EnumIter};

/// The closed set of primitive value kinds a descriptor can encode.
///
/// Each kind owns a fixed one-letter descriptor code; primitive encoding never
/// consults the mapping index. The naming follows size-based conventions:
/// `I1`/`I2`/`I4`/`I8` for 8/16/32/64-bit integers, `R4`/`R8` for 32/64-bit
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PrimitiveKind {
    /// No value (method return position only)
    Void,
    /// Boolean value
    Boolean,
    /// Character value
    Char,
    /// 8-bit signed integer
    I1,
    /// 16-bit signed integer
    I2,
    /// 32-bit signed integer
    I4,
    /// 64-bit signed integer
    I8,
    /// 32-bit floating point
    R4,
    /// 64-bit floating point
    R8,
}

impl PrimitiveKind {
    /// The fixed one-letter descriptor code for this kind.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            PrimitiveKind::Void => 'V',
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::I1 => 'B',
            PrimitiveKind::I2 => 'S',
            PrimitiveKind::I4 => 'I',
            PrimitiveKind::I8 => 'J',
            PrimitiveKind::R4 => 'F',
            PrimitiveKind::R8 => 'D',
        }
    }
}

/// A type, described for descriptor construction.
///
/// This is the pure, tagged form descriptor building works over: a small
/// closed set of cases with no tie to any live introspection surface, which
/// keeps descriptor construction referentially transparent and directly
/// unit-testable. Qualified class names are dot-separated with nested types
/// joined by `$`, in whichever naming scheme the caller is working in — the
/// descriptor builder translates them per lookup direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    /// A primitive value kind
    Primitive(PrimitiveKind),
    /// An object type, by qualified dotted name
    Class(String),
    /// An array of the component type
    Array(Box<TypeDesc>),
}

impl TypeDesc {
    /// Describes an object type by qualified dotted name.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        TypeDesc::Class(name.into())
    }

    /// Describes an array of `component`.
    #[must_use]
    pub fn array(component: TypeDesc) -> Self {
        TypeDesc::Array(Box::new(component))
    }
}

impl From<PrimitiveKind> for TypeDesc {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDesc::Primitive(kind)
    }
}
