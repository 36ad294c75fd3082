use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use plotters::style::{FontStyle, register_font};
use tracing::debug;
use crate::error::{PlotError, Result};

/// Family name every chart text style asks for.
pub const FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, see `assets/DejaVuSans-LICENSE`.
static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

fn register(name: &str, bytes: &'static [u8]) -> Result<()> {
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| PlotError::InvalidFont(name.to_string()))?;
    FONT_REGISTERED.store(true, Ordering::SeqCst);
    Ok(())
}

/// Makes sure [`FONT_FAMILY`] resolves to a font, falling back to the
/// embedded one. A font registered through [`load_font`] is kept.
pub fn ensure_font() -> Result<()> {
    if FONT_REGISTERED.load(Ordering::SeqCst) {
        return Ok(());
    }
    debug!("Registering embedded DejaVu Sans");
    register("embedded DejaVu Sans", EMBEDDED_FONT)
}

/// Registers the TrueType font at `path` as [`FONT_FAMILY`], replacing the
/// embedded default. The bytes live for the rest of the process, so call this once.
pub fn load_font(path: &Path) -> Result<()> {
    let bytes: &'static [u8] = Box::leak(std::fs::read(path)?.into_boxed_slice());
    register(&path.display().to_string(), bytes)
}
