//! Command-line arguments
//!
//! Every setting can also come from an environment variable; clap applies
//! command line over environment, and the result is layered over the TOML
//! config file.

use std::path::PathBuf;

use clap::Parser;
use seoulhot_common::config::ConfigLayer;

/// Command-line arguments for seoulhot-web
#[derive(Parser, Debug)]
#[command(name = "seoulhot-web")]
#[command(about = "Seoul festival recommendation site")]
#[command(version)]
pub struct Args {
    /// TOML config file (default: <config dir>/seoulhot/config.toml if present)
    #[arg(short, long, env = "SEOULHOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "SEOULHOT_BIND_ADDR")]
    pub bind_addr: Option<String>,

    /// Base URL of the recommendation API
    #[arg(short, long, env = "SEOULHOT_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Recommendations requested per track
    #[arg(short = 'n', long, env = "SEOULHOT_TOP_N")]
    pub top_n: Option<u32>,

    /// Directory with page template overrides
    #[arg(short, long, env = "SEOULHOT_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl Args {
    /// Settings given on the command line or in the environment
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            bind_addr: self.bind_addr.clone(),
            api_base_url: self.api_base_url.clone(),
            top_n: self.top_n,
            templates_dir: self.templates_dir.clone(),
        }
    }
}
