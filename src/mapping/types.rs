use std::{collections::HashMap, sync::Arc};

/// One renamed member — a field or a method.
///
/// Methods carry descriptors in both naming schemes because overloading is
/// permitted and member keys must disambiguate by signature; fields are never
/// overloaded, so their descriptors are absent. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberMapping {
    /// The name used by the running host
    pub native_name: String,
    /// The name known to calling code
    pub canonical_name: String,
    /// Type descriptor in native class names (methods only)
    pub native_descriptor: Option<String>,
    /// Type descriptor in canonical class names (methods only)
    pub canonical_descriptor: Option<String>,
}

impl MemberMapping {
    /// Creates a field mapping (no descriptors).
    #[must_use]
    pub fn field(native_name: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        MemberMapping {
            native_name: native_name.into(),
            canonical_name: canonical_name.into(),
            native_descriptor: None,
            canonical_descriptor: None,
        }
    }

    /// Creates a method mapping with descriptors for both naming schemes.
    #[must_use]
    pub fn method(
        native_name: impl Into<String>,
        canonical_name: impl Into<String>,
        native_descriptor: impl Into<String>,
        canonical_descriptor: impl Into<String>,
    ) -> Self {
        MemberMapping {
            native_name: native_name.into(),
            canonical_name: canonical_name.into(),
            native_descriptor: Some(native_descriptor.into()),
            canonical_descriptor: Some(canonical_descriptor.into()),
        }
    }

    /// The native-side lookup key: name plus descriptor for methods, bare
    /// name for fields.
    #[must_use]
    pub fn native_key(&self) -> String {
        match &self.native_descriptor {
            Some(descriptor) => format!("{}{}", self.native_name, descriptor),
            None => self.native_name.clone(),
        }
    }

    /// The canonical-side lookup key: name plus descriptor for methods, bare
    /// name for fields.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        match &self.canonical_descriptor {
            Some(descriptor) => format!("{}{}", self.canonical_name, descriptor),
            None => self.canonical_name.clone(),
        }
    }
}

/// Raw per-class record as produced by a mapping dataset loader.
///
/// Loaders emit these; [`ClassMapping::from_record`] turns them into the
/// indexed, immutable form the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    /// Qualified dotted name used by the running host
    pub native_name: String,
    /// Qualified dotted name known to calling code
    pub canonical_name: String,
    /// Renamed methods declared on the class
    pub methods: Vec<MemberMapping>,
    /// Renamed fields declared on the class
    pub fields: Vec<MemberMapping>,
}

/// One renamed type with its member lookup tables, indexed in both
/// directions.
///
/// Methods are keyed by `name + descriptor` so overloads resolve
/// independently; fields are keyed by simple name. All four tables are built
/// once in [`ClassMapping::from_record`] and never mutated afterwards, which
/// is what makes lock-free concurrent reads sound.
#[derive(Debug)]
pub struct ClassMapping {
    /// Qualified dotted name used by the running host
    pub native_name: String,
    /// Qualified dotted name known to calling code
    pub canonical_name: String,

    methods_by_native: HashMap<String, Arc<MemberMapping>>,
    methods_by_canonical: HashMap<String, Arc<MemberMapping>>,

    fields_by_native: HashMap<String, Arc<MemberMapping>>,
    fields_by_canonical: HashMap<String, Arc<MemberMapping>>,
}

impl ClassMapping {
    /// Builds the indexed form of a raw class record.
    ///
    /// Duplicate keys within a table are resolved last-write-wins, matching
    /// the insertion-order behavior of the datasets this data comes from; a
    /// collision is a data-quality problem in the dataset, so it is reported
    /// with [`log::warn!`] rather than silently swallowed.
    #[must_use]
    pub fn from_record(record: ClassRecord) -> Self {
        let mut mapping = ClassMapping {
            native_name: record.native_name,
            canonical_name: record.canonical_name,
            methods_by_native: HashMap::with_capacity(record.methods.len()),
            methods_by_canonical: HashMap::with_capacity(record.methods.len()),
            fields_by_native: HashMap::with_capacity(record.fields.len()),
            fields_by_canonical: HashMap::with_capacity(record.fields.len()),
        };

        for method in record.methods {
            let member = Arc::new(method);
            Self::insert(
                &mut mapping.methods_by_native,
                member.native_key(),
                member.clone(),
                &mapping.native_name,
            );
            Self::insert(
                &mut mapping.methods_by_canonical,
                member.canonical_key(),
                member,
                &mapping.native_name,
            );
        }

        for field in record.fields {
            let member = Arc::new(field);
            Self::insert(
                &mut mapping.fields_by_native,
                member.native_key(),
                member.clone(),
                &mapping.native_name,
            );
            Self::insert(
                &mut mapping.fields_by_canonical,
                member.canonical_key(),
                member,
                &mapping.native_name,
            );
        }

        mapping
    }

    fn insert(
        table: &mut HashMap<String, Arc<MemberMapping>>,
        key: String,
        member: Arc<MemberMapping>,
        class_name: &str,
    ) {
        if let Some(previous) = table.insert(key.clone(), member) {
            log::warn!(
                "Duplicate mapping key '{}' in class '{}'; replacing entry for '{}'",
                key,
                class_name,
                previous.canonical_name
            );
        }
    }

    /// Looks up a method by its native `name + descriptor` key.
    #[must_use]
    pub fn method_by_native(&self, key: &str) -> Option<&MemberMapping> {
        self.methods_by_native.get(key).map(Arc::as_ref)
    }

    /// Looks up a method by its canonical `name + descriptor` key.
    #[must_use]
    pub fn method_by_canonical(&self, key: &str) -> Option<&MemberMapping> {
        self.methods_by_canonical.get(key).map(Arc::as_ref)
    }

    /// Looks up a field by its native name.
    #[must_use]
    pub fn field_by_native(&self, name: &str) -> Option<&MemberMapping> {
        self.fields_by_native.get(name).map(Arc::as_ref)
    }

    /// Looks up a field by its canonical name.
    #[must_use]
    pub fn field_by_canonical(&self, name: &str) -> Option<&MemberMapping> {
        self.fields_by_canonical.get(name).map(Arc::as_ref)
    }
}
