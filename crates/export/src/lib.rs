//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Failures while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

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

pub mod rows {
    use nominal_constellation::{ClassicalElements, Constellation, StateVector};
    use serde::Serialize;

    /// One satellite's element set, in the column order of the CSV export.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ElementRow {
        pub index: usize,
        pub plane: usize,
        pub semi_major_axis_m: f64,
        pub eccentricity: f64,
        pub inclination_rad: f64,
        pub raan_rad: f64,
        pub arg_periapsis_rad: f64,
        pub true_anomaly_rad: f64,
    }

    /// One satellite's inertial state.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct StateRow {
        pub index: usize,
        pub x_m: f64,
        pub y_m: f64,
        pub z_m: f64,
        pub vx_m_s: f64,
        pub vy_m_s: f64,
        pub vz_m_s: f64,
    }

    pub fn element_rows(constellation: &Constellation<ClassicalElements>) -> Vec<ElementRow> {
        constellation
            .iter()
            .map(|(&index, elements)| ElementRow {
                index,
                plane: index / constellation.satellites_per_plane(),
                semi_major_axis_m: elements.semi_major_axis_m,
                eccentricity: elements.eccentricity,
                inclination_rad: elements.inclination_rad,
                raan_rad: elements.raan_rad,
                arg_periapsis_rad: elements.arg_periapsis_rad,
                true_anomaly_rad: elements.true_anomaly_rad,
            })
            .collect()
    }

    pub fn state_rows(constellation: &Constellation<StateVector>) -> Vec<StateRow> {
        constellation
            .iter()
            .map(|(&index, state)| {
                let [x_m, y_m, z_m] = state.position_m;
                let [vx_m_s, vy_m_s, vz_m_s] = state.velocity_m_s;
                StateRow {
                    index,
                    x_m,
                    y_m,
                    z_m,
                    vx_m_s,
                    vy_m_s,
                    vz_m_s,
                }
            })
            .collect()
    }
}

pub mod table {
    use std::io::Write;

    use serde::Serialize;

    use crate::ExportError;

    /// Write rows as CSV; the header comes from the row's field names.
    pub fn write_csv<W: Write, R: Serialize>(writer: W, rows: &[R]) -> Result<(), ExportError> {
        let mut out = csv::Writer::from_writer(writer);
        for row in rows {
            out.serialize(row)?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod document {
    use std::io::Write;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    /// Envelope of a JSON constellation export.
    #[derive(Debug, Serialize)]
    pub struct ConstellationDocument<'a, R> {
        pub body: &'a str,
        pub strategy: &'a str,
        pub satellites: &'a [R],
    }

    /// Pretty-print the document followed by a trailing newline.
    pub fn write_json<W: Write, R: Serialize>(
        mut writer: W,
        document: &ConstellationDocument<'_, R>,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub use document::{ConstellationDocument, write_json};
pub use rows::{ElementRow, StateRow, element_rows, state_rows};
pub use table::write_csv;
