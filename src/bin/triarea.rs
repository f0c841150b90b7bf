use clap::Parser;
use ivm_xyz::logging;
use ivm_xyz::volumes::EdgeLengthTriangle;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Triangle area from its three edge lengths (IVM and XYZ units)"
)]
struct Cli {
    a: f64,
    b: f64,
    c: f64,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let tri = EdgeLengthTriangle::new(cli.a, cli.b, cli.c);
    println!("IVM area: {:.6}", tri.ivm_area()?);
    println!("XYZ area: {:.6}", tri.xyz_area()?);
    Ok(())
}
