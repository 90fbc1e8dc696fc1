//! Subcommand implementations
//!
//! Each command receives the resolved [`UiContext`] and returns `anyhow`
//! errors with context attached.

mod apply;
mod browse;
mod checked;
mod show;
mod validate;

pub use apply::cmd_apply;
pub use browse::cmd_browse;
pub use checked::cmd_checked;
pub use show::cmd_show;
pub use validate::cmd_validate;

use anyhow::{Context, Result};
use treecascade::{Event, RenderSink, TreeCascade};

/// Replay events in order, naming the failing one
pub(crate) fn replay<S: RenderSink>(engine: &mut TreeCascade<S>, events: &[Event]) -> Result<()> {
    for (i, event) in events.iter().enumerate() {
        engine
            .apply(event)
            .with_context(|| format!("event {} ('{}') failed", i + 1, event))?;
    }
    Ok(())
}
