pub mod error;
pub mod feature;
pub mod output;
pub mod probe;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use error::Error;
pub use feature::Feature;
pub use output::Format;
pub use probe::{Outcome, probe};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The name of the companion module's directory.
pub const SPIN_DIR_NAME: &str = "electron-spin";

/// The environment variable that overrides the companion directory. An empty value is ignored.
pub const SPIN_DIR_VAR: &str = "ELECTRON_SPIN_PROBE_DIR";

/// The file that must exist in the companion directory for it to be usable.
pub const MARKER_FILE_NAME: &str = "BUILD.gn";
