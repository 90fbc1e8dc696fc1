use std::path::Path;

use anyhow::Result;
use treecascade::TreeIndex;

use crate::presentation::context::UiContext;
use crate::presentation::output::write_event;

pub fn cmd_validate(ctx: &UiContext, nodes: &Path) -> Result<()> {
    let records = ctx.load_records(nodes)?;
    let index = TreeIndex::build(records)?;
    let max_depth = index.max_depth().unwrap_or(0);

    if ctx.json {
        let mut out = std::io::stdout().lock();
        write_event(
            &mut out,
            &serde_json::json!({
                "event": "validated",
                "command": "validate",
                "nodes": index.len(),
                "roots": index.roots().len(),
                "max_depth": max_depth,
            }),
        )?;
        return Ok(());
    }

    println!(
        "{} {} nodes, {} {}, max depth {}",
        ctx.glyphs().ok(),
        index.len(),
        index.roots().len(),
        if index.roots().len() == 1 { "root" } else { "roots" },
        max_depth
    );
    Ok(())
}
