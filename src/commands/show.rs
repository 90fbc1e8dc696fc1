use std::path::Path;

use anyhow::Result;
use treecascade::ui::widgets::tree_table::render_table;
use treecascade::TreeCascade;

use crate::presentation::context::UiContext;
use crate::presentation::output::row_json;

pub fn cmd_show(ctx: &UiContext, nodes: &Path) -> Result<()> {
    let records = ctx.load_records(nodes)?;
    let engine = TreeCascade::headless(records, ctx.config.clone())?;

    if ctx.json {
        let rows: Vec<serde_json::Value> = engine.visible_rows().iter().map(row_json).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print!("{}", render_table(&engine, &ctx.row_style()));
    Ok(())
}
