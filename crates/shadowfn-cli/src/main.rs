//! shadowfn CLI - command line front end for the shadow-pair analyzer

use std::fs;
use std::path::{Path, PathBuf};

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use thiserror::Error;
use walkdir::WalkDir;

use shadowfn_analyzer::{findings, run, CollectedDiagnostics, FuncPair};
use shadowfn_ast::Unit;
use shadowfn_symbols::bind;

#[derive(Parser)]
#[command(name = "shadowfn")]
#[command(about = "Detects exported functions wrapping a first-letter-lowercased twin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more unit files and report shadow pairs
    Analyze {
        /// Unit JSON files, or directories searched for *.unit.json
        paths: Vec<PathBuf>,
        /// Print findings as a JSON array instead of diagnostics
        #[arg(long)]
        json: bool,
        /// Print only the diagnostic records, no source snippets
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show the bound package scope of a unit
    Symbols {
        /// Unit JSON file
        file: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { paths, json, quiet } => cmd_analyze(&paths, json, quiet),
        Commands::Symbols { file } => cmd_symbols(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_analyze(paths: &[PathBuf], json: bool, quiet: bool) -> Result<(), CliError> {
    let mut all_findings = Vec::new();

    for path in discover_units(paths) {
        let unit = load_unit(&path)?;
        let bound = bind(&unit);
        let mut sink = CollectedDiagnostics::default();
        let pairs = run(&unit, &bound.table, &mut sink);

        if json {
            all_findings.extend(findings(&unit, &pairs));
            continue;
        }

        for diag in &sink.diagnostics {
            // Record text carries its own trailing newline
            print!("{}", diag.message);
        }
        if !quiet {
            for pair in &pairs {
                render_pair(&unit, pair);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&all_findings).unwrap());
    }

    Ok(())
}

fn cmd_symbols(path: &Path) -> Result<(), CliError> {
    let unit = load_unit(path)?;
    let bound = bind(&unit);

    for symbol in bound.table.package_symbols() {
        let file = unit
            .file(symbol.file)
            .map(|f| f.name.as_str())
            .unwrap_or("?");
        println!(
            "{:<12} {:?} ({}:{})",
            symbol.name, symbol.kind, file, symbol.name_span.start
        );
    }

    if !bound.unresolved.is_empty() {
        println!();
        for err in &bound.unresolved {
            println!("unresolved: {}", err);
        }
    }

    Ok(())
}

/// Expand directories into the *.unit.json files they contain
fn discover_units(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut units = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let name = entry.file_name().to_string_lossy();
                if entry.file_type().is_file() && name.ends_with(".unit.json") {
                    units.push(entry.into_path());
                }
            }
        } else {
            units.push(path.clone());
        }
    }

    units
}

fn load_unit(path: &Path) -> Result<Unit, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one pair as a source-annotated report
///
/// Labels stay within the exported function's file; when the shadow is
/// declared elsewhere its position is carried in the record text already
/// printed above.
fn render_pair(unit: &Unit, pair: &FuncPair<'_>) {
    let Some(file) = unit.file(pair.exported.file) else {
        return;
    };
    let file_name = file.name.clone();
    let decl = pair.exported.decl;

    let mut report = Report::build(ReportKind::Advice, file_name.clone(), decl.span.start)
        .with_message(format!(
            "exported function `{}` shadows an unexported twin",
            decl.name
        ))
        .with_label(
            Label::new((file_name.clone(), decl.name_span.start..decl.name_span.end))
                .with_message("exported wrapper")
                .with_color(Color::Yellow),
        );

    let (shadow_file, shadow_span) = pair.shadow.def_site();
    if shadow_file == pair.exported.file {
        report = report.with_label(
            Label::new((file_name.clone(), shadow_span.start..shadow_span.end))
                .with_message("shadow defined here")
                .with_color(Color::Blue),
        );
    }

    for site in &pair.call_sites {
        report = report.with_label(
            Label::new((file_name.clone(), site.start..site.end))
                .with_message("called here")
                .with_color(Color::Green),
        );
    }

    report
        .finish()
        .eprint((file_name, Source::from(file.text.as_str())))
        .ok();
}
