use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use ivm_xyz::config::load_shapes;
use ivm_xyz::export::measures::{write_header, writer_for_path};
use ivm_xyz::logging;
use ivm_xyz::report::evaluate_catalog;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Measure every shape in a catalog and write a CSV report"
)]
struct Cli {
    /// YAML list, single TOML record, or directory of TOML records
    #[arg(long, default_value = "data/shapes/concentric.yaml")]
    catalog: PathBuf,
    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let shapes = load_shapes(&cli.catalog)?;
    let measurements = evaluate_catalog(&shapes)?;

    let mut writer = writer_for_path(&cli.output)?;
    write_header(writer.as_mut())?;
    for measurement in &measurements {
        measurement.record().write_to(writer.as_mut())?;
    }
    writer.flush()?;

    tracing::info!(
        shapes = measurements.len(),
        catalog = %cli.catalog.display(),
        "wrote shape report"
    );
    Ok(())
}
