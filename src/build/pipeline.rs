//! Build orchestration
//!
//! Shows the banner, asks for confirmation, then runs the CMake configure and
//! build steps in order. The first failing step ends the run.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use super::cmake::{command_line, CMakeConfig, Step, CMAKE, MIN_CMAKE_VERSION};
use crate::error::TreebuildError;
use crate::exec::CommandRunner;
use crate::utils::{terminal, tools};

/// The user's answer to the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Decline,
}

impl Confirmation {
    /// `n` and `no` decline in any case; any other answer proceeds.
    ///
    /// Only the line terminator is stripped, so `" no"` proceeds.
    pub fn parse(answer: &str) -> Self {
        let answer = answer.trim_end_matches(['\r', '\n']).to_lowercase();
        if answer == "n" || answer == "no" {
            Confirmation::Decline
        } else {
            Confirmation::Proceed
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined; nothing was run
    Aborted,
    /// Both steps exited with status 0
    Succeeded,
    /// A step exited non-zero; later steps were skipped
    Failed { step: Step, exit_code: i32 },
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Aborted | Outcome::Succeeded => 0,
            Outcome::Failed { exit_code, .. } => u8::try_from(*exit_code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
        }
    }
}

/// Drives the configure and build steps through a [`CommandRunner`]
pub struct BuildPipeline<R: CommandRunner> {
    config: CMakeConfig,
    runner: R,
    assume_yes: bool,
    verbose: bool,
}

impl<R: CommandRunner> BuildPipeline<R> {
    pub fn new(config: CMakeConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            assume_yes: false,
            verbose: false,
        }
    }

    /// Skip the confirmation prompt
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the whole pipeline, reading the answer from `input` and writing
    /// all status text to `out`.
    ///
    /// Step failures become [`Outcome::Failed`]. `Err` is reserved for
    /// environment problems: unreadable input, missing cmake, spawn errors.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Outcome> {
        terminal::print_banner(out)?;

        if self.confirm(input, out)? == Confirmation::Decline {
            terminal::print_aborted(out)?;
            writeln!(out)?;
            return Ok(Outcome::Aborted);
        }

        let outcome = match self.run_steps(out) {
            Ok(()) => {
                terminal::print_success(out, self.config.build_dir())?;
                Outcome::Succeeded
            }
            Err(err) => match err.downcast_ref::<TreebuildError>() {
                Some(TreebuildError::StepFailed { step, exit_code }) => {
                    terminal::print_failure(out, *exit_code)?;
                    Outcome::Failed {
                        step: *step,
                        exit_code: *exit_code,
                    }
                }
                _ => return Err(err),
            },
        };

        writeln!(out)?;
        Ok(outcome)
    }

    fn confirm(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Confirmation> {
        if self.assume_yes {
            return Ok(Confirmation::Proceed);
        }

        terminal::print_prompt(out, self.config.generator_name())?;

        let mut answer = String::new();
        let read = input
            .read_line(&mut answer)
            .map_err(|source| TreebuildError::Prompt { source })?;

        if read == 0 {
            // Closed stdin is not an answer
            writeln!(out)?;
            return Ok(Confirmation::Decline);
        }

        Ok(Confirmation::parse(&answer))
    }

    fn run_steps(&mut self, out: &mut impl Write) -> Result<()> {
        let cmake = self.runner.resolve(CMAKE, "configuring and building the project")?;

        if self.verbose {
            terminal::print_verbose(
                out,
                &format!("Found {} at {}", cmake.name, cmake.path.display()),
            )?;
        }
        if let Some(version) = &cmake.version {
            if self.verbose {
                terminal::print_verbose(out, version)?;
            }
            if let Some(found) = tools::version_below(version, MIN_CMAKE_VERSION) {
                terminal::print_warning(
                    out,
                    &format!("CMake {} is older than the required 3.12; the build may fail.", found),
                )?;
            }
        }

        if let Some(generator) = self.config.generator_name() {
            terminal::print_generator(out, generator)?;
        }

        for step in [Step::Configure, Step::Build] {
            self.run_step(step, &cmake.path, out)?;
        }

        Ok(())
    }

    fn run_step(&mut self, step: Step, cmake: &Path, out: &mut impl Write) -> Result<()> {
        let args = self.config.args_for(step);
        let heading = match step {
            Step::Configure => "Preparing build files...",
            Step::Build => "Building the project...",
        };
        terminal::print_step(out, heading, &command_line(CMAKE, &args))?;

        let result = self.runner.run(cmake, &args)?;
        if self.verbose {
            terminal::print_verbose(out, &format!("{} step finished in {:.1?}", step, result.duration))?;
        }
        if !result.success {
            return Err(TreebuildError::StepFailed {
                step,
                exit_code: result.exit_code,
            }
            .into());
        }

        Ok(())
    }
}
