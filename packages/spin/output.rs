use crate::{Error, Result};
use std::io::Write;

/// How the detected tokens are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
	/// One token per line.
	#[default]
	Lines,

	/// A single JSON array of tokens, for GN's `exec_script(..., "json")`.
	Json,
}

/// Write `tokens` to `writer` in the given format and flush it.
pub fn write_tokens(writer: &mut impl Write, tokens: &[&str], format: Format) -> Result<()> {
	match format {
		Format::Lines => {
			for token in tokens {
				writeln!(writer, "{token}").map_err(Error::Output)?;
			}
		},
		Format::Json => {
			serde_json::to_writer(&mut *writer, tokens).map_err(Error::Encode)?;
			writeln!(writer).map_err(Error::Output)?;
		},
	}
	writer.flush().map_err(Error::Output)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::{Format, write_tokens};

	fn render(tokens: &[&str], format: Format) -> String {
		let mut buffer = Vec::new();
		write_tokens(&mut buffer, tokens, format).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	#[test]
	fn lines() {
		let tokens = ["ELECTRON_SPIN_INTERCEPTORS", "ELECTRON_SPIN_SCHEME_URL_LOADER"];
		assert_eq!(
			render(&tokens, Format::Lines),
			"ELECTRON_SPIN_INTERCEPTORS\nELECTRON_SPIN_SCHEME_URL_LOADER\n"
		);
		assert_eq!(render(&[], Format::Lines), "");
	}

	#[test]
	fn json() {
		assert_eq!(
			render(&["ELECTRON_SPIN_PREFERENCES"], Format::Json),
			"[\"ELECTRON_SPIN_PREFERENCES\"]\n"
		);
		assert_eq!(render(&[], Format::Json), "[]\n");
	}

	#[test]
	fn write_failures_are_reported() {
		struct Closed;
		impl std::io::Write for Closed {
			fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
				Err(std::io::ErrorKind::BrokenPipe.into())
			}
			fn flush(&mut self) -> std::io::Result<()> {
				Ok(())
			}
		}
		let result = write_tokens(&mut Closed, &["ELECTRON_SPIN_PREFERENCES"], Format::Lines);
		assert!(matches!(result, Err(crate::Error::Output(_))));
	}
}
