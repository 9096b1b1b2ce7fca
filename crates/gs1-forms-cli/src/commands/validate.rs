use crate::console::ConsoleNotifier;
use crate::FieldArgs;
use anyhow::Result;
use colored::Colorize;
use gs1_forms::{Config, FormKind};

/// Returns whether the submission was accepted
pub fn execute(
    config: &Config,
    kind: FormKind,
    fields: &FieldArgs,
    reject_expired: bool,
) -> Result<bool> {
    let snapshot = fields.snapshot()?;
    let today = chrono::Local::now().date_naive();

    let mut validator = config.validator(today);
    if reject_expired {
        validator = validator.with_expiry_check(today);
    }

    let accepted = validator.validate(kind, &snapshot, &ConsoleNotifier);
    if accepted {
        println!("{} {} form accepted", "✓".green().bold(), kind);
    }
    Ok(accepted)
}
