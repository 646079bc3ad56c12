//! Mapping dataset producers.
//!
//! The index does not care where translation data comes from; anything that
//! can yield a set of [`ClassRecord`]s is a valid source. Two concrete
//! producers cover the dataset families found in the wild:
//!
//! - [`ProguardSource`]: the direct two-way rename list with source-level
//!   member types (one class per block, members indented beneath it)
//! - [`TinySource`]: the tab-separated multi-namespace dataset, where the
//!   native and canonical columns are selected by namespace identifier
//!
//! Load failure is an explicit "no mappings" signal to the runtime: the error
//! is logged and resolution degrades to pass-through. It is never surfaced to
//! resolution callers.

mod proguard;
mod tiny;

pub use proguard::ProguardSource;
pub use tiny::TinySource;

use crate::{mapping::ClassRecord, Result};

/// An opaque producer of raw mapping records.
///
/// Implementations parse one dataset format end to end and either yield every
/// class record it contains or fail as a unit — a partially parsed dataset is
/// worse than none, because it would silently translate some symbols and pass
/// others through.
pub trait MappingSource: Send {
    /// Human-readable description of the source, used in log output.
    fn describe(&self) -> String;

    /// Parses the dataset into raw class records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedDataset`] with the offending line
    /// number when the dataset cannot be parsed, or
    /// [`crate::Error::FileError`] if it cannot be read at all.
    fn load(&self) -> Result<Vec<ClassRecord>>;
}
