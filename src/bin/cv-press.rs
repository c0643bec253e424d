//! CV Press CLI tool
//!
//! Renders the compiled-in CV to a PDF file, optionally after an
//! interactive margin walkthrough.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cv_press::content::cv_elements;
use cv_press::layout::{Margins, PageDimensions};
use cv_press::margin::Margin;
use cv_press::pdf::{DocInfo, DocTemplate};
use cv_press::style::StyleSheet;

/// CV Press - render a one-page CV to PDF
#[derive(Parser)]
#[command(name = "cv-press")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render cv.pdf in the working directory with the default margins
    cv-press

    # Adjust the margins first, then render
    cv-press --interactive

    # Render somewhere else and open the result
    cv-press -o out/cv.pdf --open")]
struct Cli {
    /// Walk through the page margins before rendering
    #[arg(short, long)]
    interactive: bool,

    /// Output PDF file path (overwritten on every run)
    #[arg(short, long, default_value = "cv.pdf")]
    output: PathBuf,

    /// Open the output file after creation
    #[arg(long)]
    open: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut margin = Margin::default();

    if cli.interactive {
        let stdin = io::stdin();
        margin = margin
            .prompt(&mut stdin.lock(), &mut io::stdout())
            .context("margin configuration failed")?;
    }

    let template =
        DocTemplate::new(PageDimensions::a4(), Margins::from(margin)).with_info(DocInfo {
            title: Some("Syafiq Ziyadul Arifin - Curriculum Vitae".to_string()),
            author: Some("Syafiq Ziyadul Arifin".to_string()),
        });
    let styles = StyleSheet::default();
    let elements = cv_elements(&styles, &template.frame());

    eprintln!("Rendering CV...");
    template
        .render_to_file(&elements, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    eprintln!("Output: {}", cli.output.display());

    if cli.open {
        open_file(&cli.output)?;
    }

    Ok(())
}

/// Open a file with the system default application
fn open_file(path: &PathBuf) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}
