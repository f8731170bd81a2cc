use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pyramid_core::chain::{reference, ChainDefinition, Hierarchy};
use pyramid_core::config::Theme;
use pyramid_core::display::{format_table, render_chart, terminal_plot_size, ChartSeries, Report};
use pyramid_core::error::ConfigurationError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Summarise and plot a cession pyramid.
#[derive(Parser, Debug)]
#[command(name = "pyramid")]
#[command(version)]
#[command(about = "Visualise The Will of the Many hierarchy", long_about = None)]
struct Cli {
    /// Colour theme for the plot (sakura, nord, osaka-jade, tokyo-night, system)
    #[arg(short, long, default_value = "system", value_parser = parse_theme)]
    theme: Theme,

    /// JSON chain definition to use instead of the built-in pyramid
    #[arg(short, long)]
    definition: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Skip the bar chart in table mode
    #[arg(long)]
    no_chart: bool,

    /// Print the active chain definition as JSON and exit
    #[arg(long)]
    print_definition: bool,

    /// Log model evaluation to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn parse_theme(key: &str) -> Result<Theme, ConfigurationError> {
    key.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    debug!(theme = %cli.theme, format = ?cli.format, "options parsed");

    let hierarchy = match &cli.definition {
        Some(path) => load_definition(path)?,
        None => reference::try_reference()?,
    };

    if cli.print_definition {
        println!("{}", definition_json(&hierarchy)?);
        return Ok(());
    }

    let report = Report::from_hierarchy(&hierarchy);
    match cli.format {
        OutputFormat::Json => {
            println!("{}", report.to_json_pretty().context("serializing report")?);
        }
        OutputFormat::Table => {
            println!();
            print!("{}", format_table(&report));

            if !cli.no_chart {
                let (width, height) = terminal_plot_size();
                info!(width, height, "rendering chart");
                let series = ChartSeries::from_hierarchy(&hierarchy);
                print!("{}", render_chart(&series, cli.theme.palette(), width, height));
            }
        }
    }

    Ok(())
}

fn definition_json(hierarchy: &Hierarchy) -> Result<String> {
    ChainDefinition::from_hierarchy(hierarchy)
        .to_json_pretty()
        .context("serializing chain definition")
}

fn load_definition(path: &Path) -> Result<Hierarchy> {
    let file = File::open(path).with_context(|| format!("opening chain definition {}", path.display()))?;
    let definition = ChainDefinition::from_reader(BufReader::new(file))
        .with_context(|| format!("reading chain definition {}", path.display()))?;
    let hierarchy = definition.build()?;
    info!(path = %path.display(), ranks = hierarchy.len(), "chain definition loaded");
    Ok(hierarchy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_json_reloads() {
        let hierarchy = reference::try_reference().unwrap();
        let json = definition_json(&hierarchy).unwrap();
        let reloaded = ChainDefinition::from_json_str(&json).unwrap().build().unwrap();
        assert_eq!(reloaded.collected(reloaded.apex()).unwrap(), 430.25);
    }

    #[test]
    fn test_unknown_theme_is_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["pyramid", "--theme", "solarized"]).unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'solarized'"), "{}", err);
    }
}
