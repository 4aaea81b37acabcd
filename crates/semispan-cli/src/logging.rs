use tracing_subscriber::EnvFilter;

/// Library crates whose events the `semispan` binary shows.
const CRATE_TARGETS: &[&str] = &[
    "semispan",
    "semispan_core",
    "semispan_gen",
    "semispan_render",
];

/// Install the stderr subscriber for the `semispan` binary.
///
/// Each `-v` raises every semispan target one level above the quiet
/// default of `warn`, up to `trace`. A set `RUST_LOG` replaces the derived
/// filter entirely. Stdout carries only the rendered views.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
