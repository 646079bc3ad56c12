use thiserror::Error;

macro_rules! dataset_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::MalformedDataset {
            message: $msg.to_string(),
            line: $line,
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::MalformedDataset {
            message: format!($fmt, $($arg)*),
            line: $line,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Failures split into two families with very different policies. Missing *mapping data* is
/// never an error at resolution time: lookups degrade to pass-through and the load failure is
/// only logged. Missing *members* — a type or member that still cannot be found once
/// translation (or pass-through) has been applied — always surfaces as one of the variants
/// below, with enough context to debug a mismatched mapping dataset.
///
/// # Error Categories
///
/// ## Resolution Errors
/// - [`Error::TypeNotFound`] - A type could not be loaded from the host at all
/// - [`Error::FieldNotFound`] - A resolved field name does not exist on the target type
/// - [`Error::MethodNotFound`] - A resolved method key does not exist on the target type
///
/// ## Mapping Dataset Errors
/// - [`Error::MalformedDataset`] - A mapping dataset could not be parsed
/// - [`Error::FileError`] - Filesystem I/O errors while reading a dataset
///
/// # Examples
///
/// ```rust
/// use symscope::Error;
///
/// fn report(error: &Error) {
///     match error {
///         Error::TypeNotFound(name) => eprintln!("no such type: {}", name),
///         Error::FieldNotFound { type_name, field } => {
///             eprintln!("no field {} on {}", field, type_name);
///         }
///         other => eprintln!("{}", other),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The requested type could not be loaded from the host environment.
    ///
    /// Unlike a missing mapping entry, which silently falls back to the queried
    /// name, a type that cannot be loaded at all has no sensible fallback. The
    /// associated value is the name the load was attempted with, after any
    /// translation was applied.
    #[error("Could not load type '{0}' from the host environment")]
    TypeNotFound(String),

    /// The resolved field name does not exist on the target type.
    ///
    /// Raised after translation (or pass-through) has already been applied, so
    /// the `field` value is the name that was actually searched for on the host
    /// side. Usually indicates a mapping dataset that does not match the running
    /// host build.
    #[error("No field named '{field}' on type '{type_name}'")]
    FieldNotFound {
        /// Qualified name of the type the lookup ran against
        type_name: String,
        /// The field name that was searched for, post-translation
        field: String,
    },

    /// The resolved method key does not exist on the target type.
    ///
    /// The `method` and `descriptor` values are the post-translation name and
    /// type descriptor the host was asked for; overloads that differ only in
    /// descriptor resolve independently, so a descriptor mismatch fails here
    /// rather than silently matching another overload.
    #[error("No method named '{method}' with descriptor '{descriptor}' on type '{type_name}'")]
    MethodNotFound {
        /// Qualified name of the type the lookup ran against
        type_name: String,
        /// The method name that was searched for, post-translation
        method: String,
        /// The type descriptor the method was keyed with
        descriptor: String,
    },

    /// A mapping dataset is damaged and could not be parsed.
    ///
    /// Dataset loaders report this with the 1-based line number of the record
    /// that failed. Callers that feed loaders into the runtime never see this
    /// variant propagate: a failed load is logged and the resolver degrades to
    /// pass-through.
    #[error("Malformed mapping dataset - line {line}: {message}")]
    MalformedDataset {
        /// Description of what was malformed
        message: String,
        /// 1-based line number within the dataset
        line: usize,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading a mapping dataset
    /// from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
