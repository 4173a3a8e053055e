//! Parameter layering for the CLI: defaults, then a TOML file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use argon_hash::ParameterSet;
use clap::Args;
use color_eyre::eyre::{Result, WrapErr};

/// Overrides for individual Argon2id parameters.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Parameter file (TOML); defaults to <config dir>/argon-hash/params.toml when present
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Memory cost in KiB
    #[arg(short = 'm', long, value_name = "KIB", global = true)]
    pub memory: Option<u32>,

    /// Number of iterations
    #[arg(short = 't', long, value_name = "N", global = true)]
    pub iterations: Option<u32>,

    /// Degree of parallelism
    #[arg(short = 'p', long, value_name = "N", global = true)]
    pub parallelism: Option<u8>,

    /// Salt length in bytes
    #[arg(long, value_name = "BYTES", global = true)]
    pub salt_length: Option<u32>,

    /// Digest length in bytes
    #[arg(long, value_name = "BYTES", global = true)]
    pub digest_length: Option<u32>,
}

impl ParamArgs {
    /// Resolves the effective parameter set.
    pub fn resolve(&self) -> Result<ParameterSet> {
        let base = match self.config_path() {
            Some(path) => load_file(&path)?,
            None => ParameterSet::default(),
        };
        Ok(self.apply(base))
    }

    fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(path.clone());
        }
        let default = dirs::config_dir()?.join("argon-hash").join("params.toml");
        default.is_file().then_some(default)
    }

    fn apply(&self, mut params: ParameterSet) -> ParameterSet {
        if let Some(memory) = self.memory {
            params = params.with_memory_cost_kib(memory);
        }
        if let Some(iterations) = self.iterations {
            params = params.with_iterations(iterations);
        }
        if let Some(parallelism) = self.parallelism {
            params = params.with_parallelism(parallelism);
        }
        if let Some(salt_length) = self.salt_length {
            params = params.with_salt_length(salt_length);
        }
        if let Some(digest_length) = self.digest_length {
            params = params.with_digest_length(digest_length);
        }
        params
    }
}

/// Reads a parameter file. Missing keys keep their defaults.
pub fn load_file(path: &Path) -> Result<ParameterSet> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file '{}'", path.display()))?;
    let params: ParameterSet = toml::from_str(&content)
        .wrap_err_with(|| format!("Invalid config file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), ?params, "loaded parameter file");
    Ok(params)
}
