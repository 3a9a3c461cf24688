use std::io::Write;
use std::str::FromStr;

use vitrine_shared::{Theme, VitrineError};
use vitrine_store::SlotStore;

use crate::state::Gallery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

impl FromStr for ThemeAction {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "toggle" => Ok(Self::Toggle),
            "show" => Ok(Self::Show),
            other => other.parse().map(Self::Set),
        }
    }
}

/// `vitrine theme [toggle|dark|light]`
pub fn theme<S: SlotStore>(
    gallery: &mut Gallery<S>,
    action: ThemeAction,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            gallery.toggle_theme();
        }
        ThemeAction::Set(theme) => gallery.set_theme(theme),
    }

    writeln!(out, "{}", gallery.theme())?;
    Ok(())
}
