//! Command-line interface for fingerprinting and comparing image files

use crate::fingerprint::pipeline::{Fingerprint, Fingerprinter};
use crate::fingerprint::shuffle::shuffle;
use crate::io::configuration::{DEFAULT_PRECISION, SUPPORTED_EXTENSIONS};
use crate::io::encoding::{pattern_text, signature_text};
use crate::io::error::{FingerprintError, Result};
use crate::io::progress::BatchProgress;
use crate::math::precision::Precision;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "imgsmlr")]
#[command(
    author,
    version,
    about = "Compute perceptual patterns and signatures of JPEG, PNG and GIF images"
)]
/// Command-line arguments for the fingerprint tool
pub struct Cli {
    /// Decimal digits kept in printed values
    #[arg(short, long, global = true, default_value_t = DEFAULT_PRECISION)]
    pub precision: u8,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command-line tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the signature of an image file or of every image in a directory
    Fingerprint {
        /// Image file or directory to process
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Also print the shuffled pattern of each image
        #[arg(long)]
        pattern: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print pattern and signature distances between two images
    Compare {
        /// First image
        first: PathBuf,
        /// Second image
        second: PathBuf,
    },
}

/// Runs a parsed command line, writing results to a sink
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the precision is out of range, the target cannot be
    /// read, a single-file target fails to fingerprint, or output cannot be
    /// written
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let precision = Precision::new(self.cli.precision)?;
        precision.set_global();
        let fingerprinter = Fingerprinter::new(precision);

        match &self.cli.command {
            Command::Fingerprint {
                target,
                pattern,
                quiet,
            } => Self::fingerprint_target(&fingerprinter, target, *pattern, *quiet, out),
            Command::Compare { first, second } => {
                Self::compare(&fingerprinter, first, second, out)
            }
        }
    }

    fn fingerprint_target(
        fingerprinter: &Fingerprinter,
        target: &Path,
        with_pattern: bool,
        quiet: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        if target.is_file() {
            let fingerprint = fingerprint_file(fingerprinter, target)?;
            return write_fingerprint(fingerprinter, target, &fingerprint, with_pattern, out);
        }

        let files = collect_images(target)?;
        let mut progress = BatchProgress::new(files.len(), !quiet);

        for file in &files {
            progress.start_file(file);
            match fingerprint_file(fingerprinter, file) {
                Ok(fingerprint) => {
                    write_fingerprint(fingerprinter, file, &fingerprint, with_pattern, out)?;
                    progress.complete_file(true);
                }
                Err(error) => {
                    let label = if error.is_degenerate() { "skipped" } else { "error" };
                    write_line(out, &format!("{}\t{label}: {error}", file.display()))?;
                    progress.complete_file(false);
                }
            }
        }

        progress.finish();
        if progress.failures() > 0 {
            tracing::warn!(
                failures = progress.failures(),
                total = files.len(),
                "some images produced no fingerprint"
            );
        }
        Ok(())
    }

    fn compare(
        fingerprinter: &Fingerprinter,
        first: &Path,
        second: &Path,
        out: &mut impl Write,
    ) -> Result<()> {
        let a = fingerprint_file(fingerprinter, first)?;
        let b = fingerprint_file(fingerprinter, second)?;
        let digits = usize::from(fingerprinter.precision().digits());

        let pattern_distance = fingerprinter.pattern_distance(&a.pattern, &b.pattern);
        let signature_distance = fingerprinter.signature_distance(&a.signature, &b.signature);

        write_line(out, &format!("pattern_distance: {pattern_distance:.digits$}"))?;
        write_line(
            out,
            &format!("signature_distance: {signature_distance:.digits$}"),
        )
    }
}

/// Read and fingerprint one file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fingerprinted
pub fn fingerprint_file(fingerprinter: &Fingerprinter, path: &Path) -> Result<Fingerprint> {
    let bytes = std::fs::read(path).map_err(|e| FingerprintError::FileSystem {
        path: path.to_path_buf(),
        operation: "read image",
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "fingerprinting");
    fingerprinter.fingerprint_bytes(&bytes)
}

/// Image files directly inside a directory, sorted by path
///
/// # Errors
///
/// Returns an error if the target is not a readable directory
pub fn collect_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| FingerprintError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether the file extension names a decodable format
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

fn write_fingerprint(
    fingerprinter: &Fingerprinter,
    path: &Path,
    fingerprint: &Fingerprint,
    with_pattern: bool,
    out: &mut impl Write,
) -> Result<()> {
    let precision = fingerprinter.precision();
    write_line(
        out,
        &format!(
            "{}\t{}",
            path.display(),
            signature_text(&fingerprint.signature, precision)
        ),
    )?;
    if with_pattern {
        let shuffled = shuffle(&fingerprint.pattern);
        write_line(out, &format!("pattern: {}", pattern_text(&shuffled, precision)))?;
    }
    Ok(())
}

fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|e| FingerprintError::FileSystem {
        path: PathBuf::from("<stdout>"),
        operation: "write output",
        source: e,
    })
}
