//! Design tokens for the tree table UI.
//!
//! All icons must be sourced from this module.

use crate::domain::node::{CheckState, Checkbox, TogglerState};

pub mod icons {
    pub const OK: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "›";

    // Tri-state checkbox.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const MIXED: &str = "◐";
    pub const DISABLED: &str = "⊘";

    // Togglers.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";

    // Key hints.
    pub const UP_DOWN: &str = "↑↓";
    pub const RIGHT_LEFT: &str = "→←";
}

pub mod icons_ascii {
    pub const OK: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";

    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const MIXED: &str = "[-]";
    pub const DISABLED: &str = "[#]";

    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";

    pub const UP_DOWN: &str = "Up/Down";
    pub const RIGHT_LEFT: &str = "Right/Left";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}

/// Icon set chosen once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    unicode: bool,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn ok(&self) -> &'static str {
        self.pick(icons::OK, icons_ascii::OK)
    }

    pub fn warning(&self) -> &'static str {
        self.pick(icons::WARNING, icons_ascii::WARNING)
    }

    pub fn pointer(&self) -> &'static str {
        self.pick(icons::POINTER, icons_ascii::POINTER)
    }

    pub fn up_down(&self) -> &'static str {
        self.pick(icons::UP_DOWN, icons_ascii::UP_DOWN)
    }

    pub fn right_left(&self) -> &'static str {
        self.pick(icons::RIGHT_LEFT, icons_ascii::RIGHT_LEFT)
    }

    /// Horizontal rule `width` columns wide
    pub fn rule(&self, width: usize) -> String {
        self.pick(borders::HORIZONTAL, borders_ascii::HORIZONTAL).repeat(width)
    }

    /// Toggler glyph; leaves get blank padding of the same width
    pub fn toggler(&self, state: TogglerState) -> String {
        let expanded = self.pick(icons::EXPANDED, icons_ascii::EXPANDED);
        match state {
            TogglerState::Expanded => expanded.to_string(),
            TogglerState::Collapsed => {
                self.pick(icons::COLLAPSED, icons_ascii::COLLAPSED).to_string()
            }
            TogglerState::None => " ".repeat(expanded.chars().count()),
        }
    }

    pub fn check_state(&self, state: CheckState) -> &'static str {
        match state {
            CheckState::Checked => self.pick(icons::CHECKED, icons_ascii::CHECKED),
            CheckState::Unchecked => self.pick(icons::UNCHECKED, icons_ascii::UNCHECKED),
            CheckState::Mixed => self.pick(icons::MIXED, icons_ascii::MIXED),
        }
    }

    /// Checkbox glyph; disabled boxes render the same regardless of state
    pub fn checkbox(&self, checkbox: Checkbox) -> &'static str {
        if checkbox.enabled {
            self.check_state(checkbox.state)
        } else {
            self.pick(icons::DISABLED, icons_ascii::DISABLED)
        }
    }
}
