//! Kinfolk CLI: display or export a person record.
//!
//! Without `--markdown`, the record is exported to HTML next to its source
//! file and opened in the browser. With `--markdown`, the markdown
//! rendering goes to stdout and the program exits.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use kinfolk::{lookup, PersonRecord, SystemLauncher};

/// Provide info on a person
#[derive(Debug, Parser)]
#[command(name = "kinfolk", version, about = "Provide info on a person")]
struct Cli {
    /// Person file to load; defaults to one named after this program
    file: Option<PathBuf>,

    /// Generate markdown to stdout
    #[arg(short, long)]
    markdown: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => default_record_path()?,
    };
    let path = resolve_record_path(path)?;

    let record =
        PersonRecord::load(&path).with_context(|| format!("failed to load {}", path.display()))?;

    if cli.markdown {
        print!("{}", record.render_markdown()?);
    } else {
        record.export_html(&path, &SystemLauncher)?;
    }

    Ok(())
}

/// Derive the record path from the program's own invocation name.
fn default_record_path() -> anyhow::Result<PathBuf> {
    let program = std::env::args()
        .next()
        .context("cannot determine the program name")?;
    record_path_for_program(&program).context("cannot determine the program name")
}

/// The record named after a program: same stem, `.yaml` extension.
fn record_path_for_program(program: &str) -> Option<PathBuf> {
    let stem = Path::new(program).file_stem()?.to_str()?;
    Some(PathBuf::from(format!("{}.yaml", stem)))
}

/// Use the path as given when it exists; otherwise treat its stem as a
/// partial name and take the first matching record in the current
/// directory.
fn resolve_record_path(path: PathBuf) -> anyhow::Result<PathBuf> {
    if path.exists() {
        return Ok(path);
    }

    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
        if let Some(found) = lookup::find_record_here(stem)? {
            return Ok(PathBuf::from(found));
        }
    }

    bail!("no record found for {}", path.display())
}
