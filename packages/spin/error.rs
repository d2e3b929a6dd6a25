use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The companion directory exists but does not define its build target.
	#[error(
		"electron-spin directory present, but electron-spin/BUILD.gn absent. It is expected to define the target electron-spin"
	)]
	MissingBuildDefinition { dir: PathBuf },

	#[error("failed to locate the current executable")]
	Locate(#[source] std::io::Error),

	#[error("failed to write the feature tokens")]
	Output(#[source] std::io::Error),

	#[error("failed to encode the feature tokens")]
	Encode(#[source] serde_json::Error),
}

/// Print an error and its chain of sources to stderr.
pub fn print_error(error: &Error) {
	let mut stderr = std::io::stderr().lock();
	write_error(&mut stderr, error).ok();
}

/// Write an error to `writer`, one line for the error and one `->` line per source.
pub fn write_error(
	writer: &mut impl std::io::Write,
	error: &(dyn std::error::Error + 'static),
) -> std::io::Result<()> {
	writeln!(writer, "error: {error}")?;
	let mut source = error.source();
	while let Some(error) = source {
		let message = error.to_string().replace('\n', "\n   ");
		writeln!(writer, "-> {message}")?;
		source = error.source();
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::{Error, write_error};

	#[test]
	fn missing_build_definition_is_one_line() {
		let error = Error::MissingBuildDefinition {
			dir: "/src/electron-spin".into(),
		};
		let mut buffer = Vec::new();
		write_error(&mut buffer, &error).unwrap();
		assert_eq!(
			String::from_utf8(buffer).unwrap(),
			"error: electron-spin directory present, but electron-spin/BUILD.gn absent. It is expected to define the target electron-spin\n"
		);
	}

	#[test]
	fn sources_are_chained() {
		let error = Error::Output(std::io::Error::new(
			std::io::ErrorKind::BrokenPipe,
			"broken pipe",
		));
		let mut buffer = Vec::new();
		write_error(&mut buffer, &error).unwrap();
		assert_eq!(
			String::from_utf8(buffer).unwrap(),
			"error: failed to write the feature tokens\n-> broken pipe\n"
		);
	}
}
