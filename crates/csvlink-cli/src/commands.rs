use anyhow::{Context, Result};
use comfy_table::Table as DisplayTable;
use tracing::info;

use csvlink_core::{DecisionSurface, RunStats};
use csvlink_ingest::{read_table, write_table};
use csvlink_model::{FieldSelection, MatchConfig};

use crate::cli::{ColumnsArgs, LinkArgs};
use crate::prompt::{DeclineAll, StdinPrompt};
use crate::summary::apply_table_style;

pub fn run_link(args: &LinkArgs) -> Result<RunStats> {
    let source = read_table(&args.source)
        .with_context(|| format!("load source: {}", args.source.display()))?;
    let target = read_table(&args.target)
        .with_context(|| format!("load target: {}", args.target.display()))?;

    let fields = FieldSelection {
        source_key: args.source_column.clone(),
        target_key: args.target_column.clone(),
        target_linked: args.linked_column.clone(),
    };
    let cfg = MatchConfig {
        near_threshold: args.near_threshold,
        prompt_cap: args.prompt_cap,
        ..MatchConfig::from_lists(&args.cutoff_words, &args.strip_words, &args.strip_chars)
    };

    let mut surface: Box<dyn DecisionSurface> = if args.non_interactive {
        Box::new(DeclineAll)
    } else {
        Box::new(StdinPrompt)
    };

    let outcome = csvlink_core::run(&source, &target, &fields, &cfg, surface.as_mut())?;
    write_table(&outcome.table, &args.output)
        .with_context(|| format!("save output: {}", args.output.display()))?;
    info!(
        rows = outcome.stats.rows,
        output = %args.output.display(),
        "run complete"
    );
    Ok(outcome.stats)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let table = read_table(&args.file)
        .with_context(|| format!("load csv: {}", args.file.display()))?;
    let mut display = DisplayTable::new();
    apply_table_style(&mut display);
    display.set_header(vec!["#", "Column"]);
    for (index, column) in table.columns.iter().enumerate() {
        display.add_row(vec![(index + 1).to_string(), column.clone()]);
    }
    println!("{display}");
    Ok(())
}
