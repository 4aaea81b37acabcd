use clap::{Parser, ValueEnum};
use semispan_gen::SpanStrategy;

/// Default for `--max-plot-radius`: about four million glyphs.
pub const DEFAULT_MAX_PLOT_RADIUS: u32 = 1_000;

/// Semicircle span tables from integer-only arithmetic.
#[derive(Debug, Parser)]
#[command(
    name = "semispan",
    version,
    about = "Print the per-row spans of a circle's upper-right quadrant",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Circle radius (non-negative integer).
    pub radius: String,

    /// Span generation strategy.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Midpoint)]
    pub strategy: StrategyArg,

    /// Glyph drawn on the outline.
    #[arg(long, default_value_t = '*')]
    pub marker: char,

    /// Glyph drawn off the outline.
    #[arg(long, default_value_t = ' ')]
    pub blank: char,

    /// Skip the row/span listing.
    #[arg(long)]
    pub no_listing: bool,

    /// Skip the text plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Largest radius the plot is drawn for. The plot grows with the
    /// square of the radius.
    #[arg(long, value_name = "RADIUS", default_value_t = DEFAULT_MAX_PLOT_RADIUS)]
    pub max_plot_radius: u32,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line names for [`SpanStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Octant midpoint walk with reflection.
    Midpoint,
    /// Largest in-circle column per row.
    Exact,
}

impl From<StrategyArg> for SpanStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Midpoint => SpanStrategy::Midpoint,
            StrategyArg::Exact => SpanStrategy::Exact,
        }
    }
}
