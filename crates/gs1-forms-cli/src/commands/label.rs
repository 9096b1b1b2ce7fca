use crate::console::ConsoleNotifier;
use crate::{FieldArgs, LabelFormat};
use anyhow::{Context, Result};
use colored::Colorize;
use gs1_forms::{render_pdf, render_zpl, Config, FormKind, Label};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Returns whether the submission was accepted (and a label produced)
pub fn execute(
    config: &Config,
    kind: FormKind,
    fields: &FieldArgs,
    format: LabelFormat,
    out: Option<&Path>,
) -> Result<bool> {
    let snapshot = fields.snapshot()?;
    let today = chrono::Local::now().date_naive();

    if !config.validator(today).validate(kind, &snapshot, &ConsoleNotifier) {
        return Ok(false);
    }

    let label = Label::from_snapshot(kind, &snapshot)?;
    let labels = std::slice::from_ref(&label);
    let rendered = match format {
        LabelFormat::Ais => format!("{}\n", label.element_string()?).into_bytes(),
        LabelFormat::Zpl => render_zpl(labels, &config.zpl_options())?.into_bytes(),
        LabelFormat::Json => {
            let json = match &label {
                Label::Case(item) => serde_json::to_string_pretty(item)?,
                Label::Pallet(pallet) => serde_json::to_string_pretty(pallet)?,
            };
            format!("{}\n", json).into_bytes()
        }
        LabelFormat::Pdf => render_pdf(labels, config.messages.lang)?,
    };

    match out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write label: {:?}", path))?;
            eprintln!("{} {} label written to {}", "✓".green().bold(), kind, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&rendered)
                .and_then(|()| stdout.flush())
                .context("Failed to write label to stdout")?;
        }
    }

    Ok(true)
}
