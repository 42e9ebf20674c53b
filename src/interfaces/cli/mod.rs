//! Command-line interface of GenCSF.

use std::path::PathBuf;

use clap::Parser;

use crate::angmom::spin::HalfSpin;
use crate::io::format::gencsf_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted GenCSF heading to the `gencsf-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    gencsf_output!("╭─────────────────────────────────────────────────────────────────────────────╮");
    gencsf_output!("│                                                                             │");
    gencsf_output!("│   GenCSF — genealogical configuration state function generator              │");
    gencsf_output!("│                                                                             │");
    gencsf_output!("│   Exact spin eigenfunctions of N unpaired electrons by successive           │");
    gencsf_output!("│   spin-1/2 coupling along branching-diagram paths.                          │");
    gencsf_output!("│                                                                             │");
    gencsf_output!("│                                                               {version:>13} │");
    gencsf_output!("│                                                     Author: Bang C. Huynh   │");
    gencsf_output!("╰─────────────────────────────────────────────────────────────────────────────╯");
    gencsf_output!("");
}

/// A structure containing the command-line arguments of GenCSF.
///
/// A run is specified either by a YAML configuration file (`--config`) or
/// directly on the command line by the triple `--n-electrons`, `--total-spin`,
/// and `--projection`. Spin values accept fractional (`3/2`), decimal (`1.5`),
/// or integral (`2`) forms.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML configuration file specifying the CSF generation
    /// parameters.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a plain-text file to which the output is also written.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The number of unpaired electrons.
    #[arg(short, long)]
    pub n_electrons: Option<usize>,

    /// The target total spin.
    #[arg(short = 's', long)]
    pub total_spin: Option<HalfSpin>,

    /// The target spin projection.
    #[arg(short = 'm', long)]
    pub projection: Option<HalfSpin>,

    /// Suppresses the spin-multiplet distribution in the output.
    #[arg(long)]
    pub no_distribution: bool,

    /// Name for saving the generation result as a binary file (without the
    /// `.gencsf.csf` extension).
    #[arg(long)]
    pub save: Option<PathBuf>,
}
