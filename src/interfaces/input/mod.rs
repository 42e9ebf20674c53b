//! YAML input specification of GenCSF.

use std::path::Path;

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

use crate::angmom::spin::HalfSpin;
use crate::drivers::csf_generation::{CsfGenerationDriver, CsfGenerationParams};
use crate::drivers::GenCsfDriver;
use crate::interfaces::InputHandle;
use crate::io::read_gencsf_yaml;

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// A structure containing `GenCSF` input parameters which can be serialised
/// into and deserialised from a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct Input {
    /// Specification of the parameters for CSF generation.
    pub generation: CsfGenerationParams,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            generation: CsfGenerationParams::builder()
                .n_electrons(4)
                .total_spin(HalfSpin::zero())
                .projection(HalfSpin::zero())
                .build()
                .expect("Unable to build a default set of CSF generation parameters."),
        }
    }
}

impl Input {
    /// Reads an input specification from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the YAML file (with its `.yml` or `.yaml`
    /// extension).
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialised input specification.
    pub fn from_yaml_file<P: AsRef<Path>>(name: P) -> Result<Self, anyhow::Error> {
        read_gencsf_yaml(name.as_ref()).with_context(|| {
            format!(
                "Unable to deserialise the YAML input file `{}`",
                name.as_ref().display()
            )
        })
    }
}

impl InputHandle for Input {
    /// Handles the input specification and runs CSF generation.
    fn handle(&self) -> Result<(), anyhow::Error> {
        let mut driver = CsfGenerationDriver::builder()
            .parameters(&self.generation)
            .build()
            .with_context(|| "Unable to construct a CSF generation driver from the input file")?;
        driver
            .run()
            .with_context(|| "Unable to execute the CSF generation driver successfully")
    }
}
