use std::path::Path;

use anyhow::Result;
use treecascade::{Event, TreeCascade};

use crate::presentation::context::UiContext;

use super::replay;

pub fn cmd_checked(ctx: &UiContext, nodes: &Path, events: &[Event], kinds: &[String]) -> Result<()> {
    let records = ctx.load_records(nodes)?;
    let mut engine = TreeCascade::headless(records, ctx.config.clone())?;
    replay(&mut engine, events)?;

    let checked = engine.checked_nodes(kinds);
    if ctx.json {
        println!("{}", serde_json::to_string(&checked)?);
        return Ok(());
    }

    for id in checked {
        println!("{}", id);
    }
    Ok(())
}
