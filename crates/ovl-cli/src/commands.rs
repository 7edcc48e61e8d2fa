use std::path::{Path, PathBuf};

use anyhow::bail;
use colored::Colorize;
use ovl_merge::{fold_overlays, leaf_count, FoldReport};
use ovl_source::{read_document, read_documents, render, write_document};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, &cli.format),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    preflight(&args.base, &args.overlays)?;

    let base = read_document(&args.base)?;
    let overlays = read_documents(&args.overlays)?;
    debug!(overlays = overlays.len(), "folding overlays onto base");
    let report = fold_overlays(base, &overlays);

    let to_stdout = args.output.is_none();
    match &args.output {
        Some(path) => {
            write_document(path, &report.document)?;
            println!(
                "{} Wrote merged document to {}",
                "✓".green().bold(),
                path.display().to_string().bold(),
            );
        }
        None => print!("{}", render(&report.document)?),
    }

    if args.stats {
        // Keep stdout clean for piping when the document went there.
        print_stats(&report, &args.overlays, format, to_stdout)?;
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for path in &args.paths {
        match read_document(path) {
            Ok(document) => println!(
                "{} {} ({} keys, {} leaves)",
                "✓".green(),
                path.display().to_string().bold(),
                document.len(),
                leaf_count(&document),
            ),
            Err(err) => {
                failures += 1;
                println!("{} {}", "✗".red(), err);
            }
        }
    }
    if failures > 0 {
        bail!("{failures} invalid document(s)");
    }
    Ok(())
}

/// Check every input path before any merge work; report all missing ones
/// together.
fn preflight(base: &Path, overlays: &[PathBuf]) -> anyhow::Result<()> {
    let missing: Vec<String> = std::iter::once(base)
        .chain(overlays.iter().map(PathBuf::as_path))
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        bail!("missing input(s): {}", missing.join(", "));
    }
}

fn print_stats(
    report: &FoldReport,
    overlays: &[PathBuf],
    format: &OutputFormat,
    use_stderr: bool,
) -> anyhow::Result<()> {
    let text = match format {
        OutputFormat::Text => render_stats_text(report, overlays),
        OutputFormat::Json => {
            let layers: Vec<_> = overlays
                .iter()
                .zip(&report.overlay_changes)
                .map(|(path, changes)| {
                    serde_json::json!({
                        "source": path.display().to_string(),
                        "changes": changes,
                    })
                })
                .collect();
            let stats = serde_json::json!({
                "base_leaves": report.base_leaves,
                "overlays": layers,
                "total_changes": report.total_changes,
                "untouched": report.untouched,
            });
            let mut rendered = serde_json::to_string_pretty(&stats)?;
            rendered.push('\n');
            rendered
        }
    };

    if use_stderr {
        eprint!("{text}");
    } else {
        print!("{text}");
    }
    Ok(())
}

fn render_stats_text(report: &FoldReport, overlays: &[PathBuf]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Merge statistics".bold()));
    out.push_str(&format!("  base leaves:   {}\n", report.base_leaves));
    for (path, changes) in overlays.iter().zip(&report.overlay_changes) {
        let noun = if *changes == 1 { "change" } else { "changes" };
        out.push_str(&format!(
            "  {}: {} {}\n",
            path.display().to_string().yellow(),
            changes,
            noun,
        ));
    }
    out.push_str(&format!("  total changes: {}\n", report.total_changes));
    out.push_str(&format!("  untouched:     {}\n", report.untouched));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn merge_writes_the_folded_document() {
        let dir = TempDir::new().unwrap();
        let base = write_file(&dir, "base.json", r#"{"a": {"x": 1, "y": 2}, "b": 5}"#);
        let overlay = write_file(&dir, "prod.json", r#"{"a": {"y": 3, "z": 4}}"#);
        let out = dir.path().join("out.json");

        let args = MergeArgs {
            base,
            overlays: vec![overlay],
            output: Some(out.clone()),
            stats: false,
        };
        cmd_merge(args, &OutputFormat::Text).unwrap();

        let merged = read_document(&out).unwrap();
        assert_eq!(merged.get("a"), Some(&json!({"x": 1, "y": 3, "z": 4})));
        assert_eq!(merged.get("b"), Some(&json!(5)));
    }

    #[test]
    fn merge_applies_overlays_in_order() {
        let dir = TempDir::new().unwrap();
        let base = write_file(&dir, "base.json", r#"{"port": 80}"#);
        let staging = write_file(&dir, "staging.json", r#"{"port": 8080}"#);
        let local = write_file(&dir, "local.json", r#"{"port": 9090}"#);
        let out = dir.path().join("out.json");

        let args = MergeArgs {
            base,
            overlays: vec![staging, local],
            output: Some(out.clone()),
            stats: false,
        };
        cmd_merge(args, &OutputFormat::Text).unwrap();

        let merged = read_document(&out).unwrap();
        assert_eq!(merged.get("port"), Some(&json!(9090)));
    }

    #[test]
    fn merge_aborts_before_writing_when_an_overlay_is_malformed() {
        let dir = TempDir::new().unwrap();
        let base = write_file(&dir, "base.json", r#"{"a": 1}"#);
        let broken = write_file(&dir, "broken.json", "{nope");
        let out = dir.path().join("out.json");

        let args = MergeArgs {
            base,
            overlays: vec![broken],
            output: Some(out.clone()),
            stats: false,
        };
        let err = cmd_merge(args, &OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
        assert!(!out.exists(), "no partial output on failure");
    }

    #[test]
    fn preflight_reports_every_missing_input() {
        let dir = TempDir::new().unwrap();
        let present = write_file(&dir, "present.json", "{}");
        let gone_base = dir.path().join("gone-base.json");
        let gone_overlay = dir.path().join("gone-overlay.json");

        let err = preflight(&gone_base, &[present, gone_overlay]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gone-base.json"));
        assert!(message.contains("gone-overlay.json"));
        assert!(!message.contains("present.json"));
    }

    #[test]
    fn check_counts_every_invalid_document() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.json", r#"{"a": 1}"#);
        let bad = write_file(&dir, "bad.json", "[]");
        let worse = write_file(&dir, "worse.json", "{broken");

        let err = cmd_check(CheckArgs {
            paths: vec![good, bad, worse],
        })
        .unwrap_err();
        assert!(err.to_string().contains("2 invalid"));
    }

    #[test]
    fn check_passes_on_valid_documents() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.json", r#"{"a": {"b": 1}}"#);

        cmd_check(CheckArgs { paths: vec![good] }).unwrap();
    }
}
