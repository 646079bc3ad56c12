use std::{collections::HashMap, path::Path};

use crate::{
    mapping::{loader::MappingSource, ClassRecord, MemberMapping},
    resolver::method_descriptor,
    types::{PrimitiveKind, TypeDesc},
    Result,
};

/// Parser for the ProGuard-style rename list.
///
/// The format is a direct canonical→native mapping: one unindented header
/// line per class (`canonical.Name -> nativeName:`), followed by indented
/// member lines. Field lines carry a source-level type and name; method lines
/// additionally carry a parameter list and an optional `start:end:` line-range
/// prefix:
///
/// ```text
/// pkg.Foo -> a1:
///     int bar -> f
///     void doThing(int,java.lang.String) -> c
///     1:4:pkg.Bar child() -> e
/// ```
///
/// Member types are written with source-level names (`int`,
/// `java.lang.String[]`), so the loader converts them into descriptor form
/// twice: once verbatim for the canonical descriptor, and once with class
/// names run through the dataset's own class table for the native descriptor.
pub struct ProguardSource {
    text: String,
    description: String,
}

impl ProguardSource {
    /// Creates a source over already-loaded dataset text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        ProguardSource {
            text: text.into(),
            description: "proguard dataset (inline)".to_string(),
        }
    }

    /// Creates a source that reads the dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        Ok(ProguardSource {
            text: std::fs::read_to_string(path)?,
            description: format!("proguard dataset ({})", path.display()),
        })
    }
}

impl MappingSource for ProguardSource {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn load(&self) -> Result<Vec<ClassRecord>> {
        let classes = parse_classes(&self.text)?;

        // The class table must be complete before member descriptors can be
        // built, because native descriptors embed translated class names.
        let class_map: HashMap<String, String> = classes
            .iter()
            .map(|class| (class.canonical.clone(), class.native.clone()))
            .collect();

        Ok(classes
            .into_iter()
            .map(|class| class.into_record(&class_map))
            .collect())
    }
}

struct RawClass {
    canonical: String,
    native: String,
    fields: Vec<MemberMapping>,
    methods: Vec<RawMethod>,
}

struct RawMethod {
    canonical: String,
    native: String,
    params: Vec<TypeDesc>,
    return_type: TypeDesc,
}

impl RawClass {
    fn into_record(self, class_map: &HashMap<String, String>) -> ClassRecord {
        let methods = self
            .methods
            .into_iter()
            .map(|method| {
                let canonical_descriptor =
                    method_descriptor(&method.params, &method.return_type, |_| None);
                let native_descriptor =
                    method_descriptor(&method.params, &method.return_type, |path| {
                        class_map.get(path).cloned()
                    });

                MemberMapping::method(
                    method.native,
                    method.canonical,
                    native_descriptor,
                    canonical_descriptor,
                )
            })
            .collect();

        ClassRecord {
            native_name: self.native,
            canonical_name: self.canonical,
            methods,
            fields: self.fields,
        }
    }
}

fn parse_classes(text: &str) -> Result<Vec<RawClass>> {
    let mut classes: Vec<RawClass> = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let number = number + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if raw.starts_with(|c: char| c.is_whitespace()) {
            let Some(class) = classes.last_mut() else {
                return Err(dataset_error!(number, "member line before any class header"));
            };
            parse_member(trimmed, number, class)?;
        } else {
            classes.push(parse_class_header(trimmed, number)?);
        }
    }

    Ok(classes)
}

fn parse_class_header(line: &str, number: usize) -> Result<RawClass> {
    let Some(line) = line.strip_suffix(':') else {
        return Err(dataset_error!(number, "class header missing trailing ':'"));
    };
    let Some((canonical, native)) = line.split_once(" -> ") else {
        return Err(dataset_error!(number, "class header missing ' -> '"));
    };

    Ok(RawClass {
        canonical: canonical.trim().to_string(),
        native: native.trim().to_string(),
        fields: Vec::new(),
        methods: Vec::new(),
    })
}

fn parse_member(line: &str, number: usize, class: &mut RawClass) -> Result<()> {
    let Some((left, native)) = line.split_once(" -> ") else {
        return Err(dataset_error!(number, "member line missing ' -> '"));
    };
    let native = native.trim();
    let left = strip_line_range(left.trim());

    if let Some((head, params)) = left.split_once('(') {
        let Some(params) = params.strip_suffix(')') else {
            return Err(dataset_error!(number, "method parameter list missing ')'"));
        };
        let mut head = head.split_whitespace();
        let (Some(return_type), Some(name), None) = (head.next(), head.next(), head.next())
        else {
            return Err(dataset_error!(number, "expected '<type> <name>(<params>)'"));
        };

        let params = params
            .split(',')
            .filter(|param| !param.trim().is_empty())
            .map(|param| source_type(param.trim()))
            .collect();

        class.methods.push(RawMethod {
            canonical: name.to_string(),
            native: native.to_string(),
            params,
            return_type: source_type(return_type),
        });
    } else {
        let mut parts = left.split_whitespace();
        let (Some(_field_type), Some(name), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(dataset_error!(number, "expected '<type> <name>'"));
        };

        class.fields.push(MemberMapping::field(native, name));
    }

    Ok(())
}

/// Drops the optional `start:end:` line-range prefix from a method line.
fn strip_line_range(left: &str) -> &str {
    let mut rest = left;

    for _ in 0..2 {
        match rest.split_once(':') {
            Some((digits, tail)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                rest = tail;
            }
            _ => return rest,
        }
    }

    rest
}

/// Converts a source-level type string (`int`, `pkg.Foo[][]`) into the pure
/// descriptor form.
fn source_type(src: &str) -> TypeDesc {
    if let Some(component) = src.strip_suffix("[]") {
        return TypeDesc::array(source_type(component));
    }

    match src {
        "void" => PrimitiveKind::Void.into(),
        "boolean" => PrimitiveKind::Boolean.into(),
        "char" => PrimitiveKind::Char.into(),
        "byte" => PrimitiveKind::I1.into(),
        "short" => PrimitiveKind::I2.into(),
        "int" => PrimitiveKind::I4.into(),
        "long" => PrimitiveKind::I8.into(),
        "float" => PrimitiveKind::R4.into(),
        "double" => PrimitiveKind::R8.into(),
        class => TypeDesc::class(class),
    }
}
