use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::info;

use navlog_cli::pipeline::run_batch;
use navlog_cli::types::{BatchOptions, BatchResult};
use navlog_ingest::{TableFormat, read_table};
use navlog_map::resolve_table;
use navlog_model::ColumnResolution;
use navlog_standards::load_builtin_alias_table;

use crate::cli::{ResolveArgs, RunArgs};
use crate::summary::{apply_table_style, dim_cell};

pub fn run_normalize(args: &RunArgs) -> Result<BatchResult> {
    let aliases = load_builtin_alias_table().context("load alias table")?;
    let options = BatchOptions {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        suffix: args.suffix.clone(),
        dry_run: args.dry_run,
        write_report: !args.no_report,
    };
    info!(
        input_dir = %options.input_dir.display(),
        output_dir = %options.output_dir.display(),
        alias_table = aliases.version(),
        dry_run = options.dry_run,
        "starting batch"
    );
    run_batch(&options, &aliases)
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let aliases = load_builtin_alias_table().context("load alias table")?;
    let format = TableFormat::detect(&args.file)?;
    let table = read_table(&args.file, format)
        .with_context(|| format!("read {}", args.file.display()))?;
    let plan = resolve_table(&aliases, &table.columns);

    let mut output = Table::new();
    output.set_header(vec!["Column", "Source header", "Index"]);
    apply_table_style(&mut output);
    for (column, resolution) in &plan.columns {
        let row = match resolution {
            ColumnResolution::Resolved { header, index } => vec![
                Cell::new(column),
                Cell::new(header),
                Cell::new(index),
            ],
            ColumnResolution::Unresolved if aliases.is_row_id(column) => vec![
                Cell::new(column),
                dim_cell("(row index)"),
                dim_cell("-"),
            ],
            ColumnResolution::Unresolved => {
                vec![Cell::new(column), dim_cell("-"), dim_cell("-")]
            }
        };
        output.add_row(row);
    }
    println!("{}", args.file.display());
    println!("{output}");
    println!(
        "{} of {} columns resolved",
        plan.resolved_count(),
        plan.columns.len()
    );
    Ok(())
}

pub fn run_aliases() -> Result<()> {
    let aliases = load_builtin_alias_table().context("load alias table")?;
    let mut table = Table::new();
    table.set_header(vec!["Column", "Transform", "Aliases"]);
    apply_table_style(&mut table);
    for spec in aliases.columns() {
        table.add_row(vec![
            spec.name.to_string(),
            spec.transform.as_str().to_string(),
            spec.aliases.join(", "),
        ]);
    }
    println!("Alias table version {}", aliases.version());
    println!("{table}");
    Ok(())
}
