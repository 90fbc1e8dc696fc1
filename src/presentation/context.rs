//! Per-invocation context
//!
//! Resolves configuration, installs logging and picks the icon set once so
//! every command sees the same settings.

use std::path::Path;

use anyhow::{Context, Result};

use treecascade::config::{self, ConfigSource};
use treecascade::ui::widgets::tree_table::RowStyle;
use treecascade::ui::terminal::{detect_capabilities, TerminalCapabilities};
use treecascade::ui::theme::Glyphs;
use treecascade::Config;

use super::cli::Cli;
use super::{logging, output};

pub struct UiContext {
    pub config: Config,
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub unicode: bool,
}

impl UiContext {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let (config, warnings, source) = config::resolve(cli.config.as_deref(), &cwd)
            .context("failed to load configuration")?;

        logging::init(cli.verbose, config.output.verbosity);
        tracing::debug!(?source, "configuration resolved");

        let caps = detect_capabilities();
        let unicode = pick_unicode(cli.ascii, &config, &caps);

        if let ConfigSource::File(path) = &source {
            if !cli.json {
                output::print_config_warnings(path, &warnings, &Glyphs::new(unicode));
            }
        }

        Ok(Self {
            config,
            json: cli.json,
            caps,
            unicode,
        })
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs::new(self.unicode)
    }

    pub fn row_style(&self) -> RowStyle {
        RowStyle::new(self.unicode, self.config.output.indent)
    }

    pub fn load_records(&self, nodes: &Path) -> Result<Vec<treecascade::NodeRecord>> {
        treecascade::load_records(nodes)
            .with_context(|| format!("failed to read node records from {}", nodes.display()))
    }
}

fn pick_unicode(ascii_flag: bool, config: &Config, caps: &TerminalCapabilities) -> bool {
    !ascii_flag && config.output.unicode && caps.supports_unicode
}
