use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use ivm_xyz::export::polyhedra::write_sidecar;
use ivm_xyz::logging;
use ivm_xyz::polyhedra::by_name;
use ivm_xyz::report::polyhedron_sidecar;
use ivm_xyz::vectors::Vector;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a Concentric Hierarchy polyhedron as an orthographic wireframe PNG"
)]
struct Cli {
    /// Catalog name: tetrahedron, cube, octahedron, icosahedron, cuboctahedron
    #[arg(long)]
    shape: String,
    #[arg(long, default_value = "artifacts/polyhedron.png")]
    output: PathBuf,
    /// Also write the vertex/edge table as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Spin about Z before tilting (degrees)
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    rotate_z: f64,
    /// Tilt about X after spinning (degrees)
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    rotate_x: f64,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let polyhedron = by_name(&cli.shape)?
        .ok_or_else(|| anyhow::anyhow!("Unknown polyhedron '{}'", cli.shape))?;

    let projected: Vec<(f64, f64)> = polyhedron
        .xyz_vertices()
        .into_iter()
        .map(|(_, xyz)| {
            let v = Vector::from(xyz).rotate_z(cli.rotate_z).rotate_x(cli.rotate_x);
            (v.x(), v.y())
        })
        .collect();
    let extent = projected
        .iter()
        .fold(0.0_f64, |acc, (x, y)| acc.max(x.abs()).max(y.abs()));
    if extent == 0.0 {
        return Err(anyhow::anyhow!("Polyhedron '{}' has no extent", polyhedron.name));
    }
    let half = extent * 1.1;
    let aspect = f64::from(cli.width) / f64::from(cli.height);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(0)
            .y_label_area_size(0)
            .build_cartesian_2d(-half * aspect..half * aspect, -half..half)?;

        let edge_color = RGBColor(30, 60, 140);
        for [i, j] in polyhedron.edge_indices() {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![projected[i], projected[j]],
                ShapeStyle::from(&edge_color).stroke_width(2),
            )))?;
        }
        let vertex_color = RGBColor(210, 100, 20);
        chart.draw_series(
            projected
                .iter()
                .map(|&point| Circle::new(point, 4, vertex_color.filled())),
        )?;
    }
    root.present()?;
    tracing::info!(shape = %polyhedron.name, output = %cli.output.display(), "rendered polyhedron");

    if let Some(json) = &cli.json {
        let sidecar = polyhedron_sidecar(&polyhedron, Local::now().to_rfc3339())?;
        write_sidecar(json, &sidecar)?;
        tracing::info!(path = %json.display(), "wrote polyhedron sidecar");
    }
    Ok(())
}
