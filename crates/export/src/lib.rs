//! Export helpers for CSV and JSON artifacts.

pub mod measures {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "name,shape,measure,ivm,xyz,edges";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard measurement CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the measurement exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub name: &'a str,
        pub shape: &'a str,
        /// `volume` or `area`.
        pub measure: &'a str,
        pub ivm: f64,
        pub xyz: f64,
        pub edges: &'a [f64],
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        /// Edge lengths share one column, separated by `;`. Names containing
        /// delimiters or quotes are quoted.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let edges: Vec<String> = self.edges.iter().map(|e| format!("{e:.6}")).collect();
            let ivm = format!("{:.9}", self.ivm);
            let xyz = format!("{:.9}", self.xyz);
            let edges = edges.join(";");
            let mut csv = csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(writer);
            csv.write_record([
                self.name,
                self.shape,
                self.measure,
                ivm.as_str(),
                xyz.as_str(),
                edges.as_str(),
            ])?;
            csv.flush()
        }
    }
}

pub mod polyhedra {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// A labelled vertex already projected to XYZ.
    #[derive(Debug, Clone, Serialize)]
    pub struct Vertex {
        pub label: char,
        pub xyz: [f64; 3],
    }

    /// Plot-ready description of a polyhedron: plain coordinates and index pairs.
    #[derive(Debug, Clone, Serialize)]
    pub struct Sidecar {
        pub name: String,
        pub ivm_volume: f64,
        pub xyz_volume: f64,
        pub generated_at: String,
        pub vertices: Vec<Vertex>,
        pub edges: Vec<[usize; 2]>,
    }

    /// Write a polyhedron sidecar as pretty-printed JSON, creating parent directories.
    pub fn write_sidecar(path: &Path, sidecar: &Sidecar) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, sidecar)?;
        Ok(())
    }
}
