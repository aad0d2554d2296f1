//! `generate` subcommand.
use anyhow::{Context, Result};
use clap_complete::Shell;
use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write shell completions for `cmd` to `writer`.
pub fn generate_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Generate the man page for `cmd` and, recursively, one page per
/// subcommand, into `output_dir` if given, else the current directory.
/// Returns the paths written.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page cannot be
/// written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = vec![write_man_page(cmd.clone(), &output_dir)?];
    generate_subcommand_man_pages(
        cmd,
        &output_dir,
        cmd.get_name(),
        &mut written,
    )?;

    Ok(written)
}

/// Generate subcommand Man pages recursively, named `<prefix>-<name>.1`.
fn generate_subcommand_man_pages(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{prefix}-{}", subcmd.get_name());

        // clap_mangen takes the page title from the command name, which must
        // be `'static`; leaking is fine for a one-shot generation.
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);
        written.push(write_man_page(renamed, output_dir)?);

        if subcmd.has_subcommands() {
            generate_subcommand_man_pages(
                subcmd,
                output_dir,
                &prefixed_name,
                written,
            )?;
        }
    }

    Ok(())
}

/// Render one man page to `<output_dir>/<name>.1`.
fn write_man_page(cmd: clap::Command, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(format!("{}.1", cmd.get_name()));
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    info!("generated {}", path.display());
    Ok(path)
}
