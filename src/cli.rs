//! Command-line interface for the two generator binaries.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Arguments of `new-class`.
#[derive(Parser, Debug)]
#[command(
    name = "new-class",
    author,
    version,
    about = "Generate the public and private sources of a new SynqClient class",
    long_about = None
)]
pub struct ClassArgs {
    /// Name of the class to generate, e.g. `JobQueue`
    #[arg(value_name = "CLASS_NAME")]
    pub class_name: String,

    /// The class the new class derives from.
    #[arg(long, value_name = "BASE_CLASS_NAME")]
    pub base_class: Option<String>,

    /// Repository root to write into instead of the one derived from the
    /// location of this executable
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Render everything and print the target paths without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `new-test`.
#[derive(Parser, Debug)]
#[command(
    name = "new-test",
    author,
    version,
    about = "Generate an empty unit test project for a SynqClient class",
    long_about = None
)]
pub struct TestArgs {
    /// Name of the class under test, e.g. `JobQueue`
    #[arg(value_name = "CLASS_NAME")]
    pub class_name: String,

    /// Repository root to write into instead of the one derived from the
    /// location of this executable
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Render everything and print the target paths without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments of either binary.
///
/// # Exits
/// * With status code 1 after printing help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args<A: Parser + CommandFactory>() -> A {
    match A::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                A::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
