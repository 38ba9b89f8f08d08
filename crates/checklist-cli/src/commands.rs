use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use checklist_cli::script::{apply_script, parse_script};
use checklist_core::{ChecklistStore, StoreConfig};
use checklist_model::{Checklist, validate_columns};
use checklist_output::{ExportFormat, write_export};
use checklist_persistence::{PersistenceError, load_checklist, read_checklist, save_checklist};
use tracing::{info, info_span};

use crate::cli::{EditArgs, ExportArgs, ExportFormatArg, NewArgs, ShowArgs, ValidateArgs};
use crate::types::{EditSummary, ValidationResult};

pub fn run_new(args: &NewArgs, config: &StoreConfig) -> Result<PathBuf> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        );
    }
    let mut config = config.clone();
    if let Some(title) = &args.title {
        config = config.with_default_title(title.clone());
    }
    if let Some(columns) = args.columns {
        config = config.with_default_column_count(usize::from(columns));
    }
    let store = ChecklistStore::new(config);
    save_checklist(store.checklist(), &args.file).map_err(persistence_error)?;
    Ok(args.file.clone())
}

pub fn run_show(args: &ShowArgs) -> Result<Checklist> {
    load_checklist(&args.file).map_err(persistence_error)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationResult> {
    let checklist = read_checklist(&args.file).map_err(persistence_error)?;
    Ok(ValidationResult {
        file: args.file.clone(),
        title: checklist.title.clone(),
        rows: checklist.rows.len(),
        columns: checklist.columns.len(),
        schema: validate_columns(&checklist.columns),
        structure: checklist.check_invariants().err(),
    })
}

pub fn run_edit(args: &EditArgs, config: &StoreConfig) -> Result<EditSummary> {
    let span = info_span!("edit", file = %args.file.display());
    let _guard = span.enter();

    let checklist = load_checklist(&args.file).map_err(persistence_error)?;
    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let commands = parse_script(&content)
        .with_context(|| format!("parse script {}", args.script.display()))?;
    info!(commands = commands.len(), "applying edit script");

    let mut store = ChecklistStore::open(config.clone(), checklist)
        .with_context(|| format!("open {}", args.file.display()))?;
    let report = apply_script(&mut store, commands);

    let saved_to = if args.dry_run {
        None
    } else {
        let target = args.output.clone().unwrap_or_else(|| args.file.clone());
        save_checklist(store.checklist(), &target).map_err(persistence_error)?;
        Some(target)
    };

    Ok(EditSummary {
        report,
        saved_to,
        rows: store.total_rows(),
        columns: store.total_columns(),
        can_undo: store.can_undo(),
    })
}

pub fn run_export(args: &ExportArgs) -> Result<PathBuf> {
    let checklist = load_checklist(&args.file).map_err(persistence_error)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| parent_dir(&args.file));
    let format = match args.format {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Json => ExportFormat::Json,
    };
    let today = chrono::Local::now().date_naive();
    write_export(&checklist, format, &output_dir, today)
        .with_context(|| format!("export {} as {format}", args.file.display()))
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Surface the user-facing message and hint; the original error stays in
/// the chain.
fn persistence_error(error: PersistenceError) -> anyhow::Error {
    let message = match error.suggestion() {
        Some(hint) => format!("{} ({hint})", error.user_message()),
        None => error.user_message(),
    };
    anyhow::Error::new(error).context(message)
}
