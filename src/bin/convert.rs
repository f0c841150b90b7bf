use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use csv::ReaderBuilder;
use ivm_xyz::conversion::{ivm_to_xyz, xyz_to_ivm};
use ivm_xyz::export::measures::writer_for_path;
use ivm_xyz::logging;

#[derive(Parser)]
#[command(author, version, about = "Convert between XYZ and IVM (quadray) coordinates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// XYZ triple to canonical quadray
    Xyz {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Quadray quadruple to XYZ
    Ivm {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        #[arg(allow_negative_numbers = true)]
        d: f64,
    },
    /// Convert every row of a headerless CSV: 3 columns are XYZ, 4 are IVM
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Xyz { x, y, z } => {
            let [a, b, c, d] = xyz_to_ivm(x, y, z);
            println!("a={a:.6} b={b:.6} c={c:.6} d={d:.6}");
        }
        Command::Ivm { a, b, c, d } => {
            let [x, y, z] = ivm_to_xyz(a, b, c, d);
            println!("x={x:.6} y={y:.6} z={z:.6}");
        }
        Command::Batch { input, output } => {
            let count = convert_batch(&input, &output)?;
            tracing::info!(rows = count, input = %input.display(), "converted batch");
        }
    }
    Ok(())
}

fn convert_batch(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(input)?;
    let mut writer = writer_for_path(output)?;
    writeln!(writer, "x,y,z,a,b,c,d")?;

    let mut count = 0;
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let values = rec
            .iter()
            .map(|field| field.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|err| anyhow::anyhow!("row {}: {err}", line + 1))?;
        let (xyz, ivm) = match values.as_slice() {
            &[x, y, z] => ([x, y, z], xyz_to_ivm(x, y, z)),
            &[a, b, c, d] => (ivm_to_xyz(a, b, c, d), [a, b, c, d]),
            other => {
                return Err(anyhow::anyhow!(
                    "row {}: expected 3 or 4 columns, found {}",
                    line + 1,
                    other.len()
                ));
            }
        };
        writeln!(
            writer,
            "{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
            xyz[0], xyz[1], xyz[2], ivm[0], ivm[1], ivm[2], ivm[3]
        )?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
