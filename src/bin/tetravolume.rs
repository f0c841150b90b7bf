use clap::Parser;
use ivm_xyz::logging;
use ivm_xyz::volumes::EdgeLengthTetrahedron;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Tetrahedron volume from its six edge lengths (IVM and XYZ units)"
)]
struct Cli {
    /// Edges from the shared vertex: a, b, c
    a: f64,
    b: f64,
    c: f64,
    /// Edges opposite a, b and c, in the order |a-b|, |b-c|, |c-a|
    d: f64,
    e: f64,
    f: f64,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let tet = EdgeLengthTetrahedron::new(cli.a, cli.b, cli.c, cli.d, cli.e, cli.f);
    println!("IVM volume: {:.6}", tet.ivm_volume()?);
    println!("XYZ volume: {:.6}", tet.xyz_volume()?);
    Ok(())
}
