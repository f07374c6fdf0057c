//! Terminal output utilities
//!
//! Every status line is written to a caller-supplied sink so the orchestrator
//! can be driven against an in-memory buffer.

use std::io::{self, Write};
use std::path::Path;

use console::{style, StyledObject};

/// Highlight for names and success markers
pub fn green<D>(text: D) -> StyledObject<D> {
    style(text).green().bright()
}

/// Highlight for tools and section headings
pub fn cyan<D>(text: D) -> StyledObject<D> {
    style(text).cyan().bright()
}

/// Highlight for commands, paths and prompts
pub fn yellow<D>(text: D) -> StyledObject<D> {
    style(text).yellow().bright()
}

/// Highlight for failure markers
pub fn red<D>(text: D) -> StyledObject<D> {
    style(text).red().bright()
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", red("error").bold(), message);
}

/// Print the welcome banner
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\nWelcome to the {} build automation script!",
        green("Simple Binary Tree")
    )?;
    writeln!(
        out,
        "\nThis script will prepare the build files and build the {} for the project.",
        green("tests executable")
    )?;
    writeln!(
        out,
        "{} is required to run this script (minimum version: 3.12). Make sure you have it installed.",
        cyan("CMake")
    )?;
    writeln!(
        out,
        "{} will automatically detect the C++ compiler on your system, provided it is in the {}.",
        cyan("CMake"),
        cyan("PATH")
    )?;
    writeln!(
        out,
        "You can {} the default generator by providing one as a command line argument. For example: {}.",
        green("override"),
        yellow("treebuild \"Visual Studio 16 2019\"")
    )
}

/// Print the confirmation question without a trailing newline
pub fn print_prompt(out: &mut impl Write, generator: Option<&str>) -> io::Result<()> {
    match generator {
        Some(generator) => write!(
            out,
            "\n{}{}{} (y/n): ",
            yellow("You have specified generator "),
            cyan(generator),
            yellow(". Do you wish to continue?")
        )?,
        None => write!(out, "\n{} (y/n): ", yellow("Do you wish to continue?"))?,
    }
    out.flush()
}

pub fn print_aborted(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}: The build process was aborted by the user.",
        red("ABORTED")
    )
}

pub fn print_generator(out: &mut impl Write, generator: &str) -> io::Result<()> {
    writeln!(
        out,
        "\nUsing the {}: {}",
        green("user-specified generator"),
        cyan(generator)
    )
}

/// Print a step heading followed by the command about to run
pub fn print_step(out: &mut impl Write, heading: &str, command_line: &str) -> io::Result<()> {
    writeln!(out, "\n{}", cyan(heading))?;
    writeln!(out, "Running command: {}", yellow(command_line))?;
    out.flush()
}

/// Print the success message and where to find the test executable
pub fn print_success(out: &mut impl Write, build_dir: &Path) -> io::Result<()> {
    let msvc_dir = build_dir.join("tests").join("Debug");
    let gcc_dir = build_dir.join("tests");

    writeln!(
        out,
        "\n{}: The project was built successfully!",
        green("SUCCESS")
    )?;
    writeln!(
        out,
        "- If you built the project with {},         you can find the executable in the {} directory.",
        cyan("MSVC"),
        yellow(msvc_dir.display())
    )?;
    writeln!(
        out,
        "- If you built the project with {} or {}, you can find the executable in the {}       directory.",
        cyan("MinGW"),
        cyan("GCC"),
        yellow(gcc_dir.display())
    )
}

pub fn print_failure(out: &mut impl Write, exit_code: i32) -> io::Result<()> {
    writeln!(
        out,
        "{}: The build process failed with error code {}.",
        red("ERROR"),
        exit_code
    )
}

pub fn print_warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", yellow("WARNING"), message)
}

/// Print a diagnostic line, shown only with --verbose
pub fn print_verbose(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("›").dim(), style(message).dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_prompt_mentions_generator() {
        let text = render(|out| print_prompt(out, Some("Ninja")));
        assert_eq!(
            text,
            "\nYou have specified generator Ninja. Do you wish to continue? (y/n): "
        );
    }

    #[test]
    fn test_prompt_without_generator() {
        let text = render(|out| print_prompt(out, None));
        assert_eq!(text, "\nDo you wish to continue? (y/n): ");
    }

    #[test]
    fn test_success_hints_use_build_dir() {
        let text = render(|out| print_success(out, Path::new("out")));
        assert!(text.contains("SUCCESS: The project was built successfully!"));
        assert!(text.contains(&Path::new("out").join("tests").join("Debug").display().to_string()));
        assert!(text.contains("MinGW or GCC"));
    }

    #[test]
    fn test_failure_includes_code() {
        let text = render(|out| print_failure(out, 42));
        assert_eq!(text, "ERROR: The build process failed with error code 42.\n");
    }
}
