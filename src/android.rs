use crate::Scaler;
use anyhow::{Context, Result};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Scales the logo to every launcher icon density and writes it to
/// `<res>/mipmap-<label>/ic_launcher.png` and `ic_launcher_round.png`.
///
/// The png for a density is encoded once and written under both names, so
/// the round icon carries the same pixels as the square one; launchers
/// apply their own shape mask. Returns the written paths in write order.
/// The first failed directory or file write aborts the remaining
/// densities.
pub fn mipmap_ic_launcher(icon: impl AsRef<Path>, res: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut scaler = Scaler::open(icon)?;
    scaler.optimize();
    let mut written = Vec::with_capacity(DPI_LABEL.len() * 2);
    for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
        let dir = res.as_ref().join(format!("mipmap-{}", label));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let mut png = Cursor::new(Vec::new());
        scaler.write(&mut png, size)?;
        for name in ["ic_launcher.png", "ic_launcher_round.png"] {
            let path = dir.join(name);
            std::fs::write(&path, png.get_ref())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
            written.push(path);
        }
    }
    Ok(written)
}
