use anyhow::Result;

use super::super::{args::DumpCommand, exit_status::ExitStatus, report};
use super::{CommandResult, CommandSummary, DumpSummary};
use crate::{
    core::DumpContext,
    json_writer::{load_table, write_table},
};

/// Scan the source tree and write the text id table.
///
/// With `--merge`, translations already in the output file are kept for ids
/// that are still referenced.
pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = DumpContext::new(args)?;

    report::print_found(ctx.files.len(), &ctx.root_dir);

    let mut extraction = ctx.extract()?;

    let merge = if args.merge && ctx.output.is_file() {
        let existing = load_table(&ctx.output)?;
        Some(extraction.table.keep_existing(existing))
    } else {
        None
    };

    write_table(&ctx.output, &extraction.table, ctx.config.indent)?;

    Ok(CommandResult {
        summary: CommandSummary::Dump(DumpSummary {
            files_found: ctx.files.len(),
            files_scanned: extraction.files_scanned,
            skipped_paths: ctx.skipped_count,
            unreadable: extraction.unreadable,
            id_count: extraction.table.len(),
            match_count: extraction.match_count,
            merge,
            output: ctx.output,
        }),
        exit_status: ExitStatus::Success,
    })
}
