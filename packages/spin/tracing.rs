use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// The environment variable holding the tracing filter directives.
pub const TRACING_VAR: &str = "ELECTRON_SPIN_PROBE_TRACING";

/// Initialize tracing if [`TRACING_VAR`] holds valid filter directives such as `electron_spin=debug`.
///
/// Events are written to stderr, stdout is reserved for the emitted tokens.
pub fn setup() {
	let Some(targets) = std::env::var(TRACING_VAR)
		.ok()
		.and_then(|filter| filter.parse::<tracing_subscriber::filter::Targets>().ok())
	else {
		return;
	};
	let format_layer = tracing_subscriber::fmt::layer()
		.compact()
		.with_ansi(false)
		.without_time()
		.with_writer(std::io::stderr);
	tracing_subscriber::registry()
		.with(targets)
		.with(format_layer)
		.try_init()
		.ok();
}
