/*!
Main binary for jsonlite.
*/

use anyhow::Result;
use clap::{ArgAction, ColorChoice, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use jsonlite::commands::{
    self,
    input::Input,
    parse::{self as parse_cmd, ParseOptions},
    tokenize as tokenize_cmd,
};

/// Tokenize or parse a JSON-like document.
#[derive(Parser)]
#[command(name = "jl", version, about, arg_required_else_help = true, long_about = None, disable_help_subcommand = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// Available subcommands for `jl`
#[derive(Subcommand)]
enum Commands {
    /// Print the token sequence of the input document
    Tokenize {
        #[arg(value_name = "FILE")]
        /// Optional path to the input document. If omitted, reads from STDIN
        input: Option<PathBuf>,
        /// Display the number of tokens before the tokens themselves
        #[arg(long, action = ArgAction::SetTrue)]
        count: bool,
    },
    /// Parse the input document and print its value tree
    Parse {
        #[arg(value_name = "FILE")]
        /// Optional path to the input document. If omitted, reads from STDIN
        input: Option<PathBuf>,
        /// Reject anything after the first complete value
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
        /// Print standard, escaped JSON instead of the plain rendering
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
        /// Display depth of the input document
        #[arg(long, action = ArgAction::SetTrue)]
        depth: bool,
        /// Do not display the parsed value
        #[arg(short, long, action = ArgAction::SetTrue)]
        no_display: bool,
        /// When to highlight the output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jl to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Loads the document from `path`, or from STDIN when no path is given.
/// Returns `None` (after printing help for `subcommand`) if STDIN is an
/// interactive terminal.
fn load_input(path: Option<PathBuf>, subcommand: &str) -> Result<Option<Input>> {
    if let Some(path) = path {
        return Input::from_path(&path).map(Some);
    }

    if io::stdin().is_terminal() {
        // No piped input and no file specified
        let mut cmd = Args::command();
        if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
            sub.print_help()?;
        }
        return Ok(None);
    }

    Input::from_reader(io::stdin().lock()).map(Some)
}

/// Entry point for main binary.
///
/// This parses the command line arguments and runs the selected subcommand.
/// If no input file is given, the document is read from STDIN. Output is
/// printed to STDOUT.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut stdout = io::stdout().lock();

    match args.command {
        Commands::Tokenize { input, count } => {
            let Some(input) = load_input(input, "tokenize")? else {
                return Ok(());
            };
            tokenize_cmd::run(&mut stdout, &input, count)?;
        }
        Commands::Parse {
            input,
            strict,
            json,
            depth,
            no_display,
            color,
        } => {
            let Some(input) = load_input(input, "parse")? else {
                return Ok(());
            };
            let color = match color {
                ColorChoice::Always => {
                    colored::control::set_override(true);
                    true
                }
                ColorChoice::Never => false,
                ColorChoice::Auto => io::stdout().is_terminal(),
            };
            let options = ParseOptions {
                strict,
                json,
                depth,
                no_display,
                color,
            };
            parse_cmd::run(&mut stdout, &input, &options)?;
        }
        Commands::Generate(cmd) => match cmd {
            GenerateCommand::Shell { shell } => {
                commands::generate::generate_completions(
                    shell,
                    &mut Args::command(),
                    &mut stdout,
                );
            }
            GenerateCommand::Man { output_dir } => {
                for path in commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )? {
                    writeln!(stdout, "Generated: {}", path.display())?;
                }
            }
        },
    }

    Ok(())
}
