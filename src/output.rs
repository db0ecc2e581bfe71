// src/output.rs
//
// CSV export for external charting tools. Every renderer takes the output
// writer as an argument; the *_to_csv_file variants create a file for callers
// that have no writer of their own.
use crate::mc::path_engine::PathMatrix;
use crate::stats::DescriptiveStats;
use std::fs::File;
use std::io::{self, Write};

pub fn render_paths<W: Write>(
    out: &mut W,
    paths: &PathMatrix,
    dt: f64,
    max_paths: usize,
) -> io::Result<()> {
    let (rows, cols) = paths.dim();
    let shown = cols.min(max_paths);

    write!(out, "time")?;
    for i in 0..shown {
        write!(out, ",path_{}", i)?;
    }
    writeln!(out)?;

    for t in 0..rows {
        write!(out, "{}", t as f64 * dt)?;
        for i in 0..shown {
            write!(out, ",{}", paths[[t, i]])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn paths_to_csv_file(
    filename: &str,
    paths: &PathMatrix,
    dt: f64,
    max_paths: usize,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    render_paths(&mut file, paths, dt, max_paths)
}

pub fn render_stats<W: Write>(
    out: &mut W,
    label: &str,
    stats: &DescriptiveStats,
) -> io::Result<()> {
    writeln!(out, "generated_at,{}", chrono::Utc::now().to_rfc3339())?;
    writeln!(out, "sample,{}", label)?;
    writeln!(out, "size,{}", stats.size)?;
    writeln!(out, "min,{}", stats.min)?;
    writeln!(out, "max,{}", stats.max)?;
    writeln!(out, "mean,{}", stats.mean)?;
    writeln!(out, "std,{}", stats.std)?;
    writeln!(out, "skew,{}", stats.skew)?;
    writeln!(out, "kurtosis,{}", stats.kurtosis)?;
    Ok(())
}

pub fn stats_to_csv_file(filename: &str, label: &str, stats: &DescriptiveStats) -> io::Result<()> {
    let mut file = File::create(filename)?;
    render_stats(&mut file, label, stats)
}

pub fn render_value_series<W: Write>(out: &mut W, series: &[(f64, f64)]) -> io::Result<()> {
    writeln!(out, "time,value")?;
    for (time, value) in series {
        writeln!(out, "{},{}", time, value)?;
    }
    Ok(())
}

pub fn value_series_to_csv_file(filename: &str, series: &[(f64, f64)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    render_value_series(&mut file, series)
}
