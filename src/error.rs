use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the error conditions that can occur while interpreting compilation-log
/// tag trees and producing suggestions. Damage that can be recovered locally (a malformed
/// branch attribute, an unresolvable method ID) is reported through the
/// [`crate::model::diagnostics::Diagnostics`] collector instead and never surfaces here;
/// only failures that invalidate the current member's walk become an [`Error`].
///
/// # Examples
///
/// ```rust,no_run
/// use hotscope::{Error, JitModel};
/// use hotscope::suggestion::AttributeSuggestionWalker;
/// # fn get_model() -> JitModel { JitModel::new() }
/// # fn get_member(model: &JitModel) -> hotscope::model::member::MemberRc { unimplemented!() }
///
/// let model = get_model();
/// let member = get_member(&model);
/// let mut walker = AttributeSuggestionWalker::new(&model);
///
/// match walker.visit(&member) {
///     Ok(()) => println!("Collected {} suggestions", walker.suggestions().len()),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed log: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The compilation log is damaged and could not be interpreted.
    ///
    /// This error indicates that a tag carries an attribute the walk cannot proceed
    /// without, such as an unparseable bytecode-position marker. Offsets gate the
    /// attribution of every later event in the scan, so this is fatal for the current
    /// member (and only for the current member). The error includes the source location
    /// where the malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for
    /// wrapping driver-level failures with additional context.
    #[error("{0}")]
    Error(String),
}
