//! File-based pipeline stages and workspace maintenance.
//!
//! Each stage reads its inputs fresh from disk, delegates to the pure
//! functions in [`seq_analysis::protein`](crate::seq_analysis::protein) and
//! writes its outputs. Read and write failures are returned, never swallowed.

use crate::error::{Error, Result};
use crate::seq_analysis::protein::charge::{self, ChargeTable};
use crate::seq_analysis::protein::params::molecular_weight::MATURE_INSULIN_MASS;
use crate::seq_analysis::protein::segments::{self, SegmentKind, Segments};
use crate::seq_analysis::protein::{clean, weight};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Cleaned preproinsulin, relative to the data directory.
pub const CLEAN_FILE: &str = "preproinsulin_seq_clean.txt";

/// Suffix shared by every file the pipeline generates.
pub const GENERATED_SUFFIX: &str = "_seq_clean.txt";

fn read_trimmed(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn write(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Clean the raw record at `input` and persist the result to `output`.
///
/// A length other than `expected_len` is only a warning.
pub fn clean_file(input: &Path, output: &Path, expected_len: Option<usize>) -> Result<String> {
    let raw = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let seq = clean::clean_sequence(&raw);
    write(output, &seq)?;

    info!("clean file created: {}", output.display());
    info!("final length: {} characters", seq.len());
    if let Some(expected) = expected_len {
        if clean::length_matches(&seq, expected) {
            info!("length OK: {} amino acids", expected);
        } else {
            warn!("expected {} amino acids, got {}", expected, seq.len());
        }
    }
    if !clean::is_standard_protein(&seq) {
        warn!("cleaned sequence contains non-standard residue codes");
    }
    Ok(seq)
}

/// Split the cleaned precursor at `clean`.
///
/// With `out_dir` set, each segment is written to its own file there. On a
/// length mismatch `Ok(None)` is returned and nothing is written.
///
/// Segments are written one at a time in sequence order. A failed write
/// returns immediately and segment files written before it stay on disk.
pub fn split_file(clean: &Path, out_dir: Option<&Path>) -> Result<Option<Segments>> {
    let seq = read_trimmed(clean)?;
    info!("input length received: {} amino acids", seq.chars().count());

    let parts = match segments::split(&seq) {
        Some(parts) => parts,
        None => return Ok(None),
    };
    if let Some(dir) = out_dir {
        for (kind, seq) in parts.iter() {
            write(&dir.join(kind.file_name()), seq)?;
        }
        for (kind, seq) in parts.iter() {
            info!(
                "{} -> {} characters (expected: {})",
                kind.file_name(),
                seq.len(),
                kind.expected_len()
            );
        }
    }
    Ok(Some(parts))
}

fn read_segment(data_dir: &Path, kind: SegmentKind) -> Result<String> {
    read_trimmed(&data_dir.join(kind.file_name()))
}

/// Read all four segment files from `data_dir`.
pub fn load_segments(data_dir: &Path) -> Result<Segments> {
    Ok(Segments {
        leader: read_segment(data_dir, SegmentKind::Leader)?,
        b_chain: read_segment(data_dir, SegmentKind::BChain)?,
        c_peptide: read_segment(data_dir, SegmentKind::CPeptide)?,
        a_chain: read_segment(data_dir, SegmentKind::AChain)?,
    })
}

/// Molecular weight of insulin (B + A) and its deviation from the literature mass.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightReport {
    /// Leader + B + C + A as reassembled from the segments.
    pub preproinsulin: String,
    pub a_chain: String,
    pub molecular_weight: f64,
    pub error_percentage: f64,
}

impl WeightReport {
    pub fn from_segments(parts: &Segments) -> Self {
        let molecular_weight = weight::molecular_weight(parts.insulin().as_bytes());
        WeightReport {
            preproinsulin: parts.concat(),
            a_chain: parts.a_chain.clone(),
            molecular_weight,
            error_percentage: weight::error_percentage(molecular_weight, MATURE_INSULIN_MASS),
        }
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, body: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(title.len()))?;
    writeln!(f, "{}", body)?;
    writeln!(f)
}

impl fmt::Display for WeightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "The sequence of human preproinsulin:", &self.preproinsulin)?;
        section(f, "The sequence of human insulin, chain A:", &self.a_chain)?;
        section(
            f,
            "The rough molecular weight of insulin:",
            format_args!("{:.2} Da", self.molecular_weight),
        )?;
        section(f, "Error percentage:", format_args!("{:.2}%", self.error_percentage))
    }
}

/// Weight stage: reads the four segments from `data_dir`.
///
/// The full cleaned precursor is optional; when present it is checked
/// against the reassembled segments.
pub fn weight_report(data_dir: &Path) -> Result<WeightReport> {
    let parts = load_segments(data_dir)?;
    let report = WeightReport::from_segments(&parts);
    match read_trimmed(&data_dir.join(CLEAN_FILE)) {
        Ok(full) if full != report.preproinsulin => {
            warn!("{} does not match the reassembled segments", CLEAN_FILE)
        }
        Ok(_) => {}
        Err(e) if e.is_not_found() => info!("{} not found, skipping check", CLEAN_FILE),
        Err(e) => return Err(e),
    }
    Ok(report)
}

/// Charge stage: net charge of B + A from the segment files in `data_dir`.
pub fn charge_report(data_dir: &Path) -> Result<ChargeTable> {
    let b_chain = read_segment(data_dir, SegmentKind::BChain)?;
    let a_chain = read_segment(data_dir, SegmentKind::AChain)?;
    let insulin = [b_chain, a_chain].concat();
    Ok(charge::charge_table(&charge::count_charged(insulin.as_bytes())))
}

/// Everything one full pipeline run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub sequence: String,
    pub segments: Segments,
    pub weight: WeightReport,
    pub charge: ChargeTable,
}

/// Clean, split, weigh and charge in order, against one data directory.
///
/// Returns `Ok(None)` when the splitter rejects the cleaned sequence.
pub fn run_pipeline(raw_input: &Path, data_dir: &Path) -> Result<Option<PipelineOutput>> {
    let clean_path = data_dir.join(CLEAN_FILE);
    let sequence = clean_file(raw_input, &clean_path, Some(segments::PREPROINSULIN_LEN))?;
    let segments = match split_file(&clean_path, Some(data_dir))? {
        Some(parts) => parts,
        None => return Ok(None),
    };
    Ok(Some(PipelineOutput {
        sequence,
        segments,
        weight: weight_report(data_dir)?,
        charge: charge_report(data_dir)?,
    }))
}

/// A file produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Generated `*_seq_clean.txt` files in `data_dir`, sorted by path.
///
/// A missing directory holds nothing.
pub fn find_generated(data_dir: &Path) -> Result<Vec<GeneratedFile>> {
    let read_err = |source| Error::Read {
        path: data_dir.to_path_buf(),
        source,
    };
    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(read_err(e)),
    };
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_err)?;
        let generated = entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.ends_with(GENERATED_SUFFIX));
        let meta = entry.metadata().map_err(read_err)?;
        if generated && meta.is_file() {
            files.push(GeneratedFile {
                path: entry.path(),
                size: meta.len(),
            });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Delete `files`, returning how many were removed and the failures.
pub fn remove_generated(files: &[GeneratedFile]) -> (usize, Vec<Error>) {
    let mut deleted = 0;
    let mut errors = Vec::new();
    for file in files {
        match fs::remove_file(&file.path) {
            Ok(()) => deleted += 1,
            Err(source) => errors.push(Error::Remove {
                path: file.path.clone(),
                source,
            }),
        }
    }
    (deleted, errors)
}
