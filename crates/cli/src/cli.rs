use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    check_style_command, detect_command, prepare_solution_command, prepare_stub_command,
    run_tests_command, scan_command,
};

#[derive(Parser, Debug)]
#[command(name = "exercise-runner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the nearest one above the exercise
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the toolchain that handles an exercise
    Detect {
        /// Exercise directory
        path: PathBuf,
    },
    /// Check the code style of an exercise
    CheckStyle {
        path: PathBuf,

        /// Write the JSON result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build an exercise and run its tests
    #[command(visible_alias = "r")]
    RunTests {
        path: PathBuf,

        /// Write the JSON result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Describe the tests of an exercise without building it
    Scan {
        path: PathBuf,

        /// Exercise name, defaults to the directory name
        #[arg(short, long)]
        name: Option<String>,

        /// Write the JSON result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Strip model solutions from an exercise, in place
    PrepareStub { path: PathBuf },
    /// Remove stub markers from a model solution, in place
    PrepareSolution { path: PathBuf },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let config = self.config.as_deref();

        match self.command {
            Commands::Detect { path } => detect_command(&path, config),
            Commands::CheckStyle { path, output } => {
                check_style_command(&path, config, output.as_deref())
            }
            Commands::RunTests { path, output } => {
                run_tests_command(&path, config, output.as_deref())
            }
            Commands::Scan { path, name, output } => {
                scan_command(&path, name.as_deref(), config, output.as_deref())
            }
            Commands::PrepareStub { path } => prepare_stub_command(&path, config),
            Commands::PrepareSolution { path } => prepare_solution_command(&path, config),
        }
    }
}
