use crate::{Error, Feature, MARKER_FILE_NAME, Result, SPIN_DIR_NAME};
use std::path::{Path, PathBuf};

/// The result of probing the companion directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
	/// The companion directory does not exist. This is not an error.
	Absent,

	/// The companion directory is present and defines its build target. Holds the detected features in candidate order.
	Present(Vec<&'a Feature>),
}

impl Outcome<'_> {
	/// The tokens to emit for this outcome.
	#[must_use]
	pub fn tokens(&self) -> Vec<&'static str> {
		match self {
			Outcome::Absent => Vec::new(),
			Outcome::Present(features) => features.iter().map(|feature| feature.token).collect(),
		}
	}
}

/// Get the directory containing the running executable.
///
/// The path comes from [`std::env::current_exe`], which on Linux reads `/proc/self/exe`. When the executable is run through a symlink, this is the directory of the symlink's target, not of the symlink.
pub fn exe_anchor() -> Result<PathBuf> {
	let exe = std::env::current_exe().map_err(Error::Locate)?;
	let anchor = exe.parent().ok_or_else(|| {
		Error::Locate(std::io::Error::new(
			std::io::ErrorKind::NotFound,
			format!("{} has no parent directory", exe.display()),
		))
	})?;
	Ok(anchor.to_owned())
}

/// Resolve the companion directory, two levels above `anchor`.
#[must_use]
pub fn spin_dir(anchor: &Path) -> PathBuf {
	anchor.join("..").join("..").join(SPIN_DIR_NAME)
}

/// Probe `dir` for the companion module and each of `features`.
///
/// All checks are made relative to `dir`. Paths that cannot be inspected are treated as absent.
pub fn probe<'a>(dir: &Path, features: &'a [Feature]) -> Result<Outcome<'a>> {
	#[cfg(feature = "tracing")]
	tracing::info!(?dir, "probing the companion directory");

	// A missing companion directory is a valid configuration.
	if !dir.is_dir() {
		#[cfg(feature = "tracing")]
		tracing::info!("companion directory absent, nothing to do");
		return Ok(Outcome::Absent);
	}

	// The directory must define its build target.
	let marker = dir.join(MARKER_FILE_NAME);
	if !marker.is_file() {
		#[cfg(feature = "tracing")]
		tracing::warn!(?marker, "marker file absent");
		return Err(Error::MissingBuildDefinition {
			dir: dir.to_owned(),
		});
	}

	// Check each candidate header once, in order.
	let detected = features
		.iter()
		.filter(|feature| {
			let present = dir.join(feature.header()).is_file();
			#[cfg(feature = "tracing")]
			tracing::debug!(name = feature.name, present, "checked feature");
			present
		})
		.collect();

	Ok(Outcome::Present(detected))
}
