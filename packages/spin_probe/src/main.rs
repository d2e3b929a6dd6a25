use clap::Parser;
use electron_spin::{
	Format, SPIN_DIR_VAR,
	feature::{BUILTIN_SCHEMES_FEATURES, FEATURES, Feature},
	output::write_tokens,
	probe::{exe_anchor, spin_dir},
};
use std::path::PathBuf;

/// Detect the electron-spin companion module and print a preprocessor definition for each feature it provides.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	/// The companion directory. Defaults to `$ELECTRON_SPIN_PROBE_DIR` if set, otherwise `../../electron-spin` relative to this executable.
	#[arg(long)]
	spin_dir: Option<PathBuf>,

	/// The list of features to probe for.
	#[arg(long, value_enum, default_value_t = Candidates::Current)]
	candidates: Candidates,

	/// The output format.
	#[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
	format: OutputFormat,

	/// Build systems may pass arguments of their own. They are ignored.
	#[arg(hide = true)]
	#[allow(dead_code)]
	ignored: Vec<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Candidates {
	Current,
	BuiltinSchemes,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
	Lines,
	Json,
}

impl Candidates {
	fn features(self) -> &'static [Feature] {
		match self {
			Candidates::Current => FEATURES,
			Candidates::BuiltinSchemes => BUILTIN_SCHEMES_FEATURES,
		}
	}
}

impl From<OutputFormat> for Format {
	fn from(value: OutputFormat) -> Self {
		match value {
			OutputFormat::Lines => Format::Lines,
			OutputFormat::Json => Format::Json,
		}
	}
}

fn main() {
	// Setup tracing.
	#[cfg(feature = "tracing")]
	electron_spin::tracing::setup();

	// Parse the args. Usage errors exit with the same status as any other failure.
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(error) if !error.use_stderr() => error.exit(),
		Err(error) => {
			error.print().ok();
			std::process::exit(1);
		},
	};

	if let Err(error) = main_inner(args) {
		electron_spin::error::print_error(&error);
		std::process::exit(1);
	}
}

fn main_inner(args: Args) -> electron_spin::Result<()> {
	#[cfg(feature = "tracing")]
	tracing::info!(?args, "parsed arguments");

	// Resolve the companion directory.
	let dir = args.spin_dir.or_else(|| {
		std::env::var_os(SPIN_DIR_VAR)
			.filter(|value| !value.is_empty())
			.map(PathBuf::from)
	});
	let dir = match dir {
		Some(dir) => dir,
		None => spin_dir(&exe_anchor()?),
	};

	// Probe it.
	let outcome = electron_spin::probe(&dir, args.candidates.features())?;
	#[cfg(feature = "tracing")]
	tracing::info!(?outcome, "probed the companion directory");

	// Print the tokens. An absent module has none.
	let mut stdout = std::io::stdout().lock();
	write_tokens(&mut stdout, &outcome.tokens(), args.format.into())?;

	Ok(())
}
