use std::path::Path;

use anyhow::{bail, Result};
use treecascade::ui::widgets::tree_table::{run_interactive, TreeBrowser};
use treecascade::TreeCascade;

use crate::presentation::context::UiContext;

pub fn cmd_browse(ctx: &UiContext, nodes: &Path) -> Result<()> {
    if !ctx.caps.is_tty {
        bail!("browse needs an interactive terminal; use `show` or `apply` instead");
    }

    let records = ctx.load_records(nodes)?;
    let engine = TreeCascade::headless(records, ctx.config.clone())?;
    let mut browser = TreeBrowser::new(engine);

    let title = format!("treecascade: {}", nodes.display());
    let Some(checked) = run_interactive(&mut browser, &ctx.row_style(), &title)? else {
        return Ok(());
    };

    if ctx.json {
        println!("{}", serde_json::to_string(&checked)?);
    } else {
        for id in checked {
            println!("{}", id);
        }
    }
    Ok(())
}
