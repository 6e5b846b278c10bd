//! crates/logging/src/location.rs
//! Call-site identity recorded by every log entry.

use std::fmt;
use std::panic::Location;

/// Where a log statement lives in the source tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Source file path as reported by `file!()`.
    pub file: &'static str,
    /// One-based line number.
    pub line: u32,
    /// Module path of the call site, or `""` when unknown.
    pub module: &'static str,
}

impl SourceLocation {
    /// Creates a location from its parts.
    pub const fn new(file: &'static str, line: u32, module: &'static str) -> Self {
        Self { file, line, module }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function.
    ///
    /// The module path is not available through [`Location`], so it is left
    /// empty.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), "")
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if !self.module.is_empty() {
            write!(f, " {}", self.module)?;
        }
        Ok(())
    }
}

/// Expands to the [`SourceLocation`] of the macro invocation.
///
/// ```
/// let here = logging::source_location!();
/// assert!(here.file.ends_with(".rs"));
/// assert_eq!(here.module, module_path!());
/// ```
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(::std::file!(), ::std::line!(), ::std::module_path!())
    };
}
