use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
pub(crate) fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to write to clipboard")?;
    Ok(())
}
