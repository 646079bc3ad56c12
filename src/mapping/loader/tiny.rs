use std::{collections::HashMap, path::Path};

use crate::{
    mapping::{loader::MappingSource, ClassRecord, MemberMapping},
    Result,
};

/// Parser for the tab-separated multi-namespace dataset.
///
/// Every name in this format exists once per logical namespace; the caller
/// selects which namespace plays the native role and which the canonical one.
/// Class names are slash-separated on disk and converted to the dotted form
/// used everywhere else in this crate:
///
/// ```text
/// tiny	2	0	official	named
/// c	a1	pkg/Foo
/// 	f	I	f	bar
/// 	m	(ILjava/lang/String;)V	c	doThing
/// ```
///
/// Member descriptors are stored in the first namespace's class names only,
/// so the loader rewrites each descriptor's object segments into both
/// selected namespaces before emitting the record.
pub struct TinySource {
    text: String,
    description: String,
    native_namespace: String,
    canonical_namespace: String,
}

impl TinySource {
    /// Creates a source over already-loaded dataset text.
    ///
    /// `native_namespace` and `canonical_namespace` select which name columns
    /// feed the two sides of every mapping.
    #[must_use]
    pub fn from_text(
        text: impl Into<String>,
        native_namespace: impl Into<String>,
        canonical_namespace: impl Into<String>,
    ) -> Self {
        TinySource {
            text: text.into(),
            description: "tiny dataset (inline)".to_string(),
            native_namespace: native_namespace.into(),
            canonical_namespace: canonical_namespace.into(),
        }
    }

    /// Creates a source that reads the dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file cannot be read.
    pub fn from_path(
        path: impl AsRef<Path>,
        native_namespace: impl Into<String>,
        canonical_namespace: impl Into<String>,
    ) -> Result<Self> {
        let path = path.as_ref();

        Ok(TinySource {
            text: std::fs::read_to_string(path)?,
            description: format!("tiny dataset ({})", path.display()),
            native_namespace: native_namespace.into(),
            canonical_namespace: canonical_namespace.into(),
        })
    }
}

impl MappingSource for TinySource {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn load(&self) -> Result<Vec<ClassRecord>> {
        let mut lines = self.text.lines().enumerate();

        let Some((_, header)) = lines.next() else {
            return Err(dataset_error!(1, "empty dataset"));
        };
        let columns = parse_header(header, &self.native_namespace, &self.canonical_namespace)?;

        // Descriptors reference first-namespace class names, so the class
        // tables must be collected before member lines can be translated.
        let mut to_native: HashMap<String, String> = HashMap::new();
        let mut to_canonical: HashMap<String, String> = HashMap::new();

        for (index, line) in self.text.lines().enumerate().skip(1) {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.first() == Some(&"c") {
                let (key, native, canonical) = class_names(&fields, &columns, index + 1)?;
                to_native.insert(key.clone(), native);
                to_canonical.insert(key, canonical);
            }
        }

        let mut records: Vec<ClassRecord> = Vec::new();

        for (index, line) in lines {
            let number = index + 1;
            let fields: Vec<&str> = line.split('\t').collect();

            match fields.first() {
                Some(&"c") => {
                    let (_, native, canonical) = class_names(&fields, &columns, number)?;
                    records.push(ClassRecord {
                        native_name: dotted(&native),
                        canonical_name: dotted(&canonical),
                        methods: Vec::new(),
                        fields: Vec::new(),
                    });
                }
                Some(&"") if fields.get(1) == Some(&"f") || fields.get(1) == Some(&"m") => {
                    let Some(record) = records.last_mut() else {
                        return Err(dataset_error!(number, "member line before any class line"));
                    };

                    let descriptor = *fields
                        .get(2)
                        .filter(|descriptor| !descriptor.is_empty())
                        .ok_or_else(|| dataset_error!(number, "member line missing descriptor"))?;
                    let native = member_name(&fields, 3 + columns.native, number)?;
                    let canonical = member_name(&fields, 3 + columns.canonical, number)?;

                    if fields[1] == "m" {
                        record.methods.push(MemberMapping::method(
                            native,
                            canonical,
                            remap_descriptor(descriptor, &to_native),
                            remap_descriptor(descriptor, &to_canonical),
                        ));
                    } else {
                        record.fields.push(MemberMapping::field(native, canonical));
                    }
                }
                // Parameter/comment/property lines carry no rename data.
                _ => {}
            }
        }

        Ok(records)
    }
}

struct Columns {
    native: usize,
    canonical: usize,
}

fn parse_header(header: &str, native_ns: &str, canonical_ns: &str) -> Result<Columns> {
    let fields: Vec<&str> = header.split('\t').collect();

    if fields.first() != Some(&"tiny") || fields.get(1) != Some(&"2") {
        return Err(dataset_error!(1, "not a tiny v2 header"));
    }

    let namespaces = fields.get(3..).unwrap_or(&[]);
    let position = |ns: &str| -> Result<usize> {
        namespaces
            .iter()
            .position(|candidate| *candidate == ns)
            .ok_or_else(|| dataset_error!(1, "namespace '{}' not present in dataset", ns))
    };

    Ok(Columns {
        native: position(native_ns)?,
        canonical: position(canonical_ns)?,
    })
}

fn class_names(
    fields: &[&str],
    columns: &Columns,
    number: usize,
) -> Result<(String, String, String)> {
    let name = |column: usize| -> Result<String> {
        fields
            .get(1 + column)
            .filter(|name| !name.is_empty())
            .map(|name| (*name).to_string())
            .ok_or_else(|| dataset_error!(number, "class line missing a namespace column"))
    };

    // Descriptor segments are keyed by the first namespace's name.
    Ok((name(0)?, name(columns.native)?, name(columns.canonical)?))
}

fn member_name(fields: &[&str], index: usize, number: usize) -> Result<String> {
    fields
        .get(index)
        .filter(|name| !name.is_empty())
        .map(|name| (*name).to_string())
        .ok_or_else(|| dataset_error!(number, "member line missing a namespace column"))
}

/// Converts a slash-separated class path into the dotted form.
fn dotted(path: &str) -> String {
    path.replace('/', ".")
}

/// Rewrites every `L<path>;` segment of a descriptor through `map`, leaving
/// unmapped paths and all other segments unchanged.
fn remap_descriptor(descriptor: &str, map: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(descriptor.len());
    let mut rest = descriptor;

    while let Some(start) = rest.find('L') {
        let Some(length) = rest[start..].find(';') else {
            // Unterminated object segment; emit verbatim.
            break;
        };

        out.push_str(&rest[..=start]);
        let path = &rest[start + 1..start + length];
        match map.get(path) {
            Some(mapped) => out.push_str(mapped),
            None => out.push_str(path),
        }
        out.push(';');
        rest = &rest[start + length + 1..];
    }

    out.push_str(rest);
    out
}
