use std::path::Path;

use anyhow::Result;
use treecascade::ui::widgets::tree_table::render_table;
use treecascade::{Event, JsonRenderSink, TreeCascade};

use crate::presentation::context::UiContext;
use crate::presentation::output::summary_json;

use super::replay;

pub fn cmd_apply(ctx: &UiContext, nodes: &Path, events: &[Event]) -> Result<()> {
    let records = ctx.load_records(nodes)?;

    if ctx.json {
        // Intents stream as they happen; the summary closes the stream
        let mut engine = TreeCascade::new(records, ctx.config.clone(), JsonRenderSink::stdout())?;
        replay(&mut engine, events)?;
        let summary = summary_json(&engine, "apply", events.len());
        engine.sink().write_value(summary);
        return Ok(());
    }

    let mut engine = TreeCascade::headless(records, ctx.config.clone())?;
    replay(&mut engine, events)?;
    print!("{}", render_table(&engine, &ctx.row_style()));
    Ok(())
}
