mod app;
mod clock;
mod screens;

use anyhow::{bail, Result};
use clockface_engine::device::GpuInit;
use clockface_engine::logging::{init_logging, LoggingConfig};
use clockface_engine::window::{Runtime, RuntimeConfig};

use crate::app::ClockShell;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let font_bytes = load_font();
    if font_bytes.is_empty() {
        bail!("no usable system font found");
    }

    let shell = ClockShell::new(&font_bytes)?;

    Runtime::run(
        RuntimeConfig {
            title: "Clockface".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        shell,
    )
}

fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}
