//! Layered configuration for the delegating tasks.
//!
//! Lowest to highest precedence:
//!
//! 1. built-in default (`cargo`)
//! 2. the `CARGO` variable set by cargo when it launches us
//! 3. `xtask.toml` in the working directory
//! 4. `LOFI_XTASK_TOOLCHAIN__PROGRAM`
//!
//! Only the program can be chosen. The working directory and the argument
//! lists are fixed, and a bad `xtask.toml` is reported and skipped, never
//! fatal.

use std::ffi::OsString;
use std::path::Path;

use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "xtask.toml";
pub const PROGRAM_ENV: &str = "LOFI_XTASK_TOOLCHAIN__PROGRAM";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "cargo".to_string()
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        ToolchainConfig {
            program: default_program(),
        }
    }
}

impl Config {
    /// Load from the current working directory and the process environment.
    pub fn load() -> Self {
        let cwd = std::env::current_dir().ok();
        Self::load_from(
            cwd.as_deref(),
            std::env::var_os("CARGO"),
            std::env::var_os(PROGRAM_ENV),
        )
    }

    pub fn load_from(
        root: Option<&Path>,
        cargo: Option<OsString>,
        program: Option<OsString>,
    ) -> Self {
        let base = Self::base(cargo);
        let with_file = match root {
            Some(root) => base.clone().merge(Toml::file(root.join(CONFIG_FILE))),
            None => base.clone(),
        };

        let mut config: Config = match with_file.extract() {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}", CONFIG_FILE, e);
                base.extract().unwrap_or_default()
            }
        };

        // Taken verbatim: a program called `true` or `1` is still a name.
        if let Some(program) = program.filter(|p| !p.is_empty()) {
            config.toolchain.program = program.to_string_lossy().into_owned();
        }
        config
    }

    fn base(cargo: Option<OsString>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        match cargo {
            Some(cargo) => figment.merge(Serialized::default(
                "toolchain.program",
                cargo.to_string_lossy().into_owned(),
            )),
            None => figment,
        }
    }
}
