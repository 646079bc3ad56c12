use std::{collections::HashMap, sync::Arc};

use crate::{
    mapping::{ClassMapping, ClassRecord},
    types::HostEnv,
};

/// Bidirectional class lookup tables plus the detected naming mode of the
/// running host.
///
/// Built exactly once from the records a mapping dataset loader produced;
/// immutable afterwards, so concurrent reads need no locking. When no dataset
/// is available both tables are absent and every lookup falls through, which
/// turns all resolution into an identity pass-through — a normal, expected
/// outcome for hosts that ship without translation data, not an error.
#[derive(Debug)]
pub struct MappingIndex {
    by_native: Option<HashMap<String, Arc<ClassMapping>>>,
    by_canonical: Option<HashMap<String, Arc<ClassMapping>>>,
    host_is_canonical: bool,
}

impl MappingIndex {
    /// Builds the index from loader output and detects the host naming mode.
    ///
    /// `records` is `None` when no dataset could be loaded (absent or failed
    /// to parse); the resulting index is a pass-through. An empty record set
    /// is treated the same way. The naming-mode probe runs exactly once, here:
    /// if the host can load the canonical-only probe symbol, the running build
    /// already uses canonical names and class classification prefers the
    /// canonical-keyed table.
    #[must_use]
    pub fn build(records: Option<Vec<ClassRecord>>, host: &dyn HostEnv) -> Self {
        let host_is_canonical = host.type_by_name(host.canonical_probe()).is_some();

        Self::with_mode(records, host_is_canonical)
    }

    /// Builds the index with an explicitly supplied naming mode, skipping the
    /// host probe. Useful when the mode is already known.
    #[must_use]
    pub fn with_mode(records: Option<Vec<ClassRecord>>, host_is_canonical: bool) -> Self {
        let records = match records {
            Some(records) if !records.is_empty() => records,
            _ => {
                return MappingIndex {
                    by_native: None,
                    by_canonical: None,
                    host_is_canonical,
                }
            }
        };

        let mut by_native = HashMap::with_capacity(records.len());
        let mut by_canonical = HashMap::with_capacity(records.len());

        for record in records {
            let mapping = Arc::new(ClassMapping::from_record(record));
            if let Some(previous) =
                by_native.insert(mapping.native_name.clone(), mapping.clone())
            {
                log::warn!(
                    "Duplicate class mapping for native name '{}'; replacing '{}'",
                    mapping.native_name,
                    previous.canonical_name
                );
            }
            if let Some(previous) =
                by_canonical.insert(mapping.canonical_name.clone(), mapping.clone())
            {
                log::warn!(
                    "Duplicate class mapping for canonical name '{}'; replacing '{}'",
                    mapping.canonical_name,
                    previous.native_name
                );
            }
        }

        MappingIndex {
            by_native: Some(by_native),
            by_canonical: Some(by_canonical),
            host_is_canonical,
        }
    }

    /// Whether the index carries no translation data and every lookup is an
    /// identity pass-through.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.by_native.is_none()
    }

    /// Whether the running host natively uses canonical names.
    #[must_use]
    pub fn host_is_canonical(&self) -> bool {
        self.host_is_canonical
    }

    /// Looks up a class mapping by the name the running host uses.
    #[must_use]
    pub fn class_by_native(&self, name: &str) -> Option<&Arc<ClassMapping>> {
        self.by_native.as_ref()?.get(name)
    }

    /// Looks up a class mapping by the name calling code knows.
    #[must_use]
    pub fn class_by_canonical(&self, name: &str) -> Option<&Arc<ClassMapping>> {
        self.by_canonical.as_ref()?.get(name)
    }

    /// Classifies the name of a live host type, honoring the naming mode.
    ///
    /// A live type's name is in whichever scheme the running host uses, so a
    /// canonically named host is checked against the canonical table first,
    /// falling back to the native table either way.
    #[must_use]
    pub fn class_for_live_name(&self, name: &str) -> Option<&Arc<ClassMapping>> {
        if self.host_is_canonical {
            if let Some(mapping) = self.class_by_canonical(name) {
                return Some(mapping);
            }
        }

        self.class_by_native(name)
    }
}
