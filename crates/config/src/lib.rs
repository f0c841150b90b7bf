//! Shape catalogs: named tetrahedra and triangles to be measured in batch.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One named entry of a shape catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShapeConfig {
    pub name: String,
    pub shape: ShapeSpec,
    #[serde(default)]
    pub notes: Option<String>,
}

/// How a shape is described: by edge lengths, or by vectors from a common origin.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ShapeSpec {
    #[serde(rename = "tetrahedron")]
    Tetrahedron { edges: [f64; 6] },
    #[serde(rename = "triangle")]
    Triangle { edges: [f64; 3] },
    #[serde(rename = "xyz_tetrahedron")]
    XyzTetrahedron { vectors: [[f64; 3]; 3] },
    #[serde(rename = "quadray_tetrahedron")]
    QuadrayTetrahedron { vectors: [[f64; 4]; 3] },
    #[serde(rename = "xyz_triangle")]
    XyzTriangle { vectors: [[f64; 3]; 2] },
    #[serde(rename = "quadray_triangle")]
    QuadrayTriangle { vectors: [[f64; 4]; 2] },
    #[serde(other)]
    Unsupported,
}

impl ShapeSpec {
    /// The catalog tag this shape was read from.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeSpec::Tetrahedron { .. } => "tetrahedron",
            ShapeSpec::Triangle { .. } => "triangle",
            ShapeSpec::XyzTetrahedron { .. } => "xyz_tetrahedron",
            ShapeSpec::QuadrayTetrahedron { .. } => "quadray_tetrahedron",
            ShapeSpec::XyzTriangle { .. } => "xyz_triangle",
            ShapeSpec::QuadrayTriangle { .. } => "quadray_triangle",
            ShapeSpec::Unsupported => "unsupported",
        }
    }
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load shapes from a YAML list, a single-record TOML file, or a directory of TOML files.
pub fn load_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<ShapeConfig>, ConfigError> {
    let shapes: Vec<ShapeConfig> = load_records(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), count = shapes.len(), "loaded shape catalog");
    Ok(shapes)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        tracing::trace!(path = %path.display(), "reading catalog record");
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
