// ehm.rs - Error handling module
//
// Result<T, AppError> + ? operator + From conversions for every fallible
// path in the tool.  Icon configuration problems are deliberately absent
// here: they are diagnostics collected on the RuleSet, never errors.

use std::path::PathBuf;

use thiserror::Error;





/// Unified error type for glyphls.
#[derive(Debug, Error)]
pub enum AppError {
    /// Win32 console API error
    #[cfg(windows)]
    #[error("{0}")]
    Win32(#[from] windows::core::Error),

    /// Standard I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Path does not exist
    #[error("Error:   {} does not exist", .0.display())]
    PathNotFound(PathBuf),
}





#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_path_not_found
    //
    //  Verifies display output for PathNotFound error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_path_not_found() {
        let e = AppError::PathNotFound(PathBuf::from("no/such/dir"));
        assert_eq!(format!("{}", e), "Error:   no/such/dir does not exist");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_io_error
    //
    //  Verifies conversion from std::io::Error to AppError::Io, keeping the
    //  underlying error as the source.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.source().is_some());
        assert_eq!(format!("{}", app_err), "test");
    }
}
