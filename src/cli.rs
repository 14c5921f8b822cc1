/*!
chartframe Command Line Interface

Reads CSV data and emits Vega-Lite JSON for the inferred (or requested) chart.
*/

use anyhow::{Context, Result};
use chartframe::writer::{VegaLiteWriter, Writer};
use chartframe::{classify_axis, Chart, ChartKind, DataFramePlotExt, SeriesPlotExt, VERSION};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chartframe")]
#[command(about = "Plot CSV data with automatic axis-type and chart-kind inference")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the inferred axis type of every column
    Classify {
        /// Path to a CSV file with a header row
        file: PathBuf,
    },

    /// Plot two or three columns of a table
    Plot {
        /// Path to a CSV file with a header row
        file: PathBuf,

        /// Column for the x axis
        #[arg(long)]
        x: String,

        /// Column for the y axis
        #[arg(long)]
        y: String,

        /// Column to group by color
        #[arg(long)]
        color: Option<String>,

        /// Chart kind (bar, line, scatter, area, kde, histogram); inferred if omitted
        #[arg(long)]
        kind: Option<String>,

        /// Output file path (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Plot a single column as a sequence or distribution
    Series {
        /// Path to a CSV file with a header row
        file: PathBuf,

        /// Column holding the values
        #[arg(long)]
        values: String,

        /// Column to use as the index (row number if omitted)
        #[arg(long)]
        index: Option<String>,

        /// What to draw
        #[arg(long, value_enum, default_value_t = SeriesMode::Plot)]
        mode: SeriesMode,

        /// Output file path (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesMode {
    /// Line or bar chart against the index
    Plot,
    /// Density curve
    Kde,
    /// Histogram
    Hist,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { file } => {
            let df = read_csv(&file)?;
            for column in df.get_columns() {
                match classify_axis(column) {
                    Ok(axis_type) => println!("{}\t{}", column.name(), axis_type),
                    Err(e) => println!("{}\t{}", column.name(), e),
                }
            }
        }

        Commands::Plot {
            file,
            x,
            y,
            color,
            kind,
            output,
        } => {
            let df = read_csv(&file)?;
            let kind = kind.as_deref().map(ChartKind::from_name);
            let chart = df
                .ch_plot(&x, &y, color.as_deref(), kind)
                .with_context(|| format!("Failed to plot '{}' against '{}'", y, x))?;
            emit(&chart, output.as_deref())?;
        }

        Commands::Series {
            file,
            values,
            index,
            mode,
            output,
        } => {
            let df = read_csv(&file)?;
            let chart = series_chart(&df, &values, index.as_deref(), mode)?;
            emit(&chart, output.as_deref())?;
        }
    }

    Ok(())
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    tracing::info!("Reading {}", path.display());
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("Failed to read CSV file {}", path.display()))
}

fn column_series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;
    Ok(column.as_materialized_series())
}

fn series_chart(
    df: &DataFrame,
    values: &str,
    index: Option<&str>,
    mode: SeriesMode,
) -> Result<Chart> {
    let series = column_series(df, values)?;
    let chart = match (mode, index) {
        (SeriesMode::Plot, Some(index)) => {
            series.ch_plot_with_index(column_series(df, index)?)?
        }
        (SeriesMode::Plot, None) => series.ch_plot()?,
        (SeriesMode::Kde, _) => series.ch_kde()?,
        (SeriesMode::Hist, _) => series.ch_hist()?,
    };
    Ok(chart)
}

fn emit(chart: &Chart, output: Option<&Path>) -> Result<()> {
    let json = VegaLiteWriter::new().write(chart)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
