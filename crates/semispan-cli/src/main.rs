mod cli;
mod logging;

use std::process;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use semispan_core::Radius;
use semispan_gen::SpanStrategy;
use semispan_render::{render_listing, render_plot, PlotConfig};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Validate the input, generate the table, and render the requested views.
fn run(cli: &Cli) -> Result<String> {
    let radius: Radius = cli
        .radius
        .parse()
        .with_context(|| format!("cannot use {:?} as a radius", cli.radius))?;

    let plot_config = PlotConfig {
        marker: cli.marker,
        blank: cli.blank,
    };
    plot_config.validate().context("invalid plot glyphs")?;
    ensure!(
        cli.no_plot || radius.get() <= cli.max_plot_radius,
        "radius {radius} is too large to plot (limit {}); pass --no-plot or raise --max-plot-radius",
        cli.max_plot_radius
    );

    let strategy = SpanStrategy::from(cli.strategy);
    let table = strategy.source().spans(radius);
    info!(radius = radius.get(), %strategy, rows = table.len(), "span table generated");

    let mut out = String::new();
    if !cli.no_listing {
        out.push_str(&render_listing(&table));
    }
    if !cli.no_plot {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_plot(&table, &plot_config)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let argv = std::iter::once("semispan").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        run(&cli)
    }

    #[test]
    fn listing_and_plot_for_radius_five() {
        let out = run_args(&["5"]).unwrap();
        assert!(out.starts_with("Radius: 5\n y | x (right span)\n"));
        assert!(out.contains(" 4 | 2\n"));
        assert!(out.ends_with("*         *\n*         *\n"));
    }

    #[test]
    fn plot_only_with_custom_glyphs() {
        let out = run_args(&["1", "--no-listing", "--marker", "o", "--blank", "."]).unwrap();
        assert_eq!(out, ".o.\no.o\n");
    }

    #[test]
    fn listing_only_with_exact_strategy() {
        let out = run_args(&["5", "--no-plot", "--strategy", "exact"]).unwrap();
        assert!(out.contains(" 1 | 4\n"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn negative_radius_is_reported() {
        let err = run_args(&["-3"]).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("cannot use \"-3\" as a radius"), "{msg}");
        assert!(msg.contains("radius must be non-negative, got -3"), "{msg}");
    }

    #[test]
    fn non_integer_radius_is_reported() {
        let err = run_args(&["abc"]).unwrap_err();
        assert!(format!("{err:#}").contains("radius 'abc' is not an integer"));
    }

    #[test]
    fn indistinct_glyphs_are_reported() {
        let err = run_args(&["2", "--marker", "#", "--blank", "#"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid plot glyphs"));
    }

    #[test]
    fn oversized_plot_is_refused_before_generation() {
        let err = run_args(&["2147483647"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "radius 2147483647 is too large to plot (limit 1000); \
             pass --no-plot or raise --max-plot-radius"
        );
    }

    #[test]
    fn plot_limit_is_inclusive_and_adjustable() {
        let out = run_args(&["3", "--no-listing", "--max-plot-radius", "3"]).unwrap();
        assert_eq!(out.lines().count(), 4);
        assert!(run_args(&["4", "--max-plot-radius", "3"]).is_err());
        let out = run_args(&["1500", "--no-plot"]).unwrap();
        assert!(out.starts_with("Radius: 1500\n"));
    }

    #[test]
    fn strategy_arg_maps_onto_strategy() {
        assert_eq!(SpanStrategy::from(cli::StrategyArg::Exact), SpanStrategy::Exact);
        assert_eq!(
            SpanStrategy::from(cli::StrategyArg::Midpoint),
            SpanStrategy::Midpoint
        );
    }
}
