//! Driver for the generation of configuration state functions.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use anyhow::format_err;
use derive_builder::Builder;
use log;
use num::BigUint;
use serde::{Deserialize, Serialize};

use crate::angmom::spin::HalfSpin;
use crate::csf::construction::CsfConstructionContext;
use crate::drivers::GenCsfDriver;
use crate::genealogy::multiplet::{multiplet_degeneracy, MultipletDistribution};
use crate::genealogy::path::{SpinPath, SpinPathEnumerator};
use crate::io::format::{
    gencsf_output, gencsf_warn, log_subtitle, log_title, nice_bool, GenCsfOutput,
};
use crate::io::{write_gencsf_binary, GenCsfFileType};
use crate::symbolic::expr::CsfExpr;


// ==================
// Struct definitions
// ==================

// ----------
// Diagnostic
// ----------

/// A structured diagnostic for a $`(N, S, M)`$ request that violates the
/// admissibility preconditions, raised before any recursion starts.
#[derive(Clone, Debug)]
pub struct InvalidSpinRequest {
    /// The requested number of unpaired electrons.
    pub n_electrons: usize,

    /// The requested total spin.
    pub total_spin: HalfSpin,

    /// The requested spin projection.
    pub projection: HalfSpin,

    /// A description of the violated precondition.
    reason: String,
}

impl fmt::Display for InvalidSpinRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid request (N = {}, S = {}, M = {}): {}",
            self.n_electrons, self.total_spin, self.projection, self.reason
        )
    }
}

impl Error for InvalidSpinRequest {}

/// Checks the admissibility preconditions of a $`(N, S, M)`$ request:
/// $`S \ge 0`$, $`|M| \le S`$, and matching parities of $`N`$ and $`2S`$
/// ($`N`$ spin-$`\tfrac{1}{2}`$ electrons can only realise total spins of
/// matching parity).
///
/// # Arguments
///
/// * `n_electrons` - The number $`N`$ of unpaired electrons.
/// * `total_spin` - The target total spin $`S`$.
/// * `projection` - The target spin projection $`M`$.
///
/// # Returns
///
/// A `Result` that is an [`InvalidSpinRequest`] diagnostic when any
/// precondition is violated.
pub fn validate_spin_request(
    n_electrons: usize,
    total_spin: HalfSpin,
    projection: HalfSpin,
) -> Result<(), InvalidSpinRequest> {
    let reason = if total_spin.is_negative() {
        Some("the total spin S is negative.".to_string())
    } else if projection.abs() > total_spin {
        Some("the projection M lies outside [-S, S].".to_string())
    } else if i64::try_from(n_electrons)
        .expect("Unable to convert an electron count.")
        .rem_euclid(2)
        != total_spin.twice().rem_euclid(2)
    {
        Some("N and 2S have mismatched parities.".to_string())
    } else {
        None
    };
    match reason {
        Some(reason) => Err(InvalidSpinRequest {
            n_electrons,
            total_spin,
            projection,
            reason,
        }),
        None => Ok(()),
    }
}

// ----------
// Parameters
// ----------

fn default_true() -> bool {
    true
}

/// A structure containing control parameters for CSF generation.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct CsfGenerationParams {
    /// The number $`N`$ of unpaired (open-shell) electrons.
    pub n_electrons: usize,

    /// The target total spin $`S`$.
    pub total_spin: HalfSpin,

    /// The target spin projection $`M`$.
    pub projection: HalfSpin,

    /// Boolean indicating if the spin-multiplet distribution of the
    /// $`N`$-electron system is to be written to the output before the CSFs.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub write_distribution: bool,

    /// Optional name for saving the result as a binary file of type
    /// [`GenCsfFileType::Csf`]. If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<PathBuf>,
}

impl CsfGenerationParams {
    /// Returns a builder to construct a [`CsfGenerationParams`] structure.
    pub fn builder() -> CsfGenerationParamsBuilder {
        CsfGenerationParamsBuilder::default()
    }
}

impl fmt::Display for CsfGenerationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of unpaired electrons N: {}", self.n_electrons)?;
        writeln!(f, "Target total spin S: {}", self.total_spin)?;
        writeln!(f, "Target spin projection M: {}", self.projection)?;
        writeln!(
            f,
            "Write multiplet distribution: {}",
            nice_bool(self.write_distribution)
        )?;
        if let Some(name) = self.result_save_name.as_ref() {
            writeln!(f, "Save result to: {}", name.display())?;
        }
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain one generated configuration state function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCsf {
    /// The genealogical path addressing this CSF.
    pub path: SpinPath,

    /// The canonicalised spin eigenfunction of the path at the requested
    /// projection. The zero expression indicates a CSF that vanishes
    /// structurally at that projection, which is a per-path outcome and not an
    /// error.
    pub expression: CsfExpr,
}

/// A structure to contain the result of a CSF generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CsfGenerationResult {
    /// The requested number of unpaired electrons.
    pub n_electrons: usize,

    /// The requested total spin.
    pub total_spin: HalfSpin,

    /// The requested spin projection.
    pub projection: HalfSpin,

    /// The generated CSFs in stable enumeration order. An empty list is the
    /// legitimate outcome of a request admitting no genealogical paths.
    pub csfs: Vec<GeneratedCsf>,
}

impl CsfGenerationResult {
    /// The number of generated CSFs.
    #[must_use]
    pub fn n_csfs(&self) -> usize {
        self.csfs.len()
    }
}

impl fmt::Display for CsfGenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.csfs.is_empty() {
            writeln!(
                f,
                "No CSFs are possible for N = {}, S = {}.",
                self.n_electrons, self.total_spin
            )?;
            return Ok(());
        }
        writeln!(
            f,
            "Found {} CSF{} for N = {}, S = {}, M = {}.",
            self.n_csfs(),
            if self.n_csfs() != 1 { "s" } else { "" },
            self.n_electrons,
            self.total_spin,
            self.projection
        )?;
        writeln!(f)?;
        for (i, csf) in self.csfs.iter().enumerate() {
            writeln!(f, "CSF #{} (path: {})", i + 1, csf.path)?;
            if csf.expression.is_zero() {
                writeln!(f, "  (zero for the requested M value)")?;
            } else {
                writeln!(f, "  {}", csf.expression)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for the generation of configuration state functions.
#[derive(Clone, Builder)]
pub struct CsfGenerationDriver<'a> {
    /// The control parameters for CSF generation.
    parameters: &'a CsfGenerationParams,

    /// The result of the CSF generation.
    #[builder(setter(skip), default = "None")]
    result: Option<CsfGenerationResult>,
}

impl<'a> CsfGenerationDriver<'a> {
    /// Returns a builder to construct a [`CsfGenerationDriver`] structure.
    pub fn builder() -> CsfGenerationDriverBuilder<'a> {
        CsfGenerationDriverBuilder::default()
    }

    /// Executes CSF generation.
    fn generate_csfs(&mut self) -> Result<(), anyhow::Error> {
        log_title("Genealogical CSF Generation");
        gencsf_output!("");
        let params = self.parameters;
        params.log_output_display();

        validate_spin_request(params.n_electrons, params.total_spin, params.projection)?;

        if params.write_distribution {
            log_subtitle(&format!(
                "Spin multiplets of {} unpaired electron{}",
                params.n_electrons,
                if params.n_electrons != 1 { "s" } else { "" }
            ));
            gencsf_output!("");
            MultipletDistribution::analyse(params.n_electrons).log_output_display();
            gencsf_output!("");
        }

        let mut enumerator = SpinPathEnumerator::new(params.n_electrons, params.total_spin);
        let paths = enumerator.enumerate();

        let predicted = multiplet_degeneracy(params.n_electrons, params.total_spin);
        if BigUint::from(paths.len()) != predicted {
            gencsf_warn!(
                "The number of enumerated paths ({}) differs from the predicted multiplet \
                 degeneracy ({}).",
                paths.len(),
                predicted
            );
        }

        let mut context = CsfConstructionContext::new();
        let csfs = paths
            .into_iter()
            .map(|path| {
                let expression = context.construct(&path, params.projection).canonicalize();
                GeneratedCsf { path, expression }
            })
            .collect::<Vec<_>>();

        let result = CsfGenerationResult {
            n_electrons: params.n_electrons,
            total_spin: params.total_spin,
            projection: params.projection,
            csfs,
        };
        result.log_output_display();

        if let Some(name) = params.result_save_name.as_ref() {
            write_gencsf_binary(name, GenCsfFileType::Csf, &result)?;
            gencsf_output!(
                "CSF generation results saved as {}.{}.",
                name.display(),
                GenCsfFileType::Csf.ext()
            );
            gencsf_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl GenCsfDriver for CsfGenerationDriver<'_> {
    type Params = CsfGenerationParams;

    type Outcome = CsfGenerationResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No CSF generation results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.generate_csfs()
    }
}
