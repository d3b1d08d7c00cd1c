use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::font::FontLoad;
use crate::render::render_icon;

/// One row of the iconset plan: the pixel size to render and every filename
/// the converter expects that buffer under.
pub struct IconSlot {
    pub render_size: u32,
    pub filenames: &'static [&'static str],
}

/// The fixed iconset contents. An `@2x` name labels the same buffer as the
/// double-density variant of half its display size; it is a naming convention
/// of the converter, not a resize. 1024 exists only as the `@2x` form of 512.
pub const ICONSET_PLAN: &[IconSlot] = &[
    IconSlot { render_size: 16, filenames: &["icon_16x16.png", "icon_8x8@2x.png"] },
    IconSlot { render_size: 32, filenames: &["icon_32x32.png", "icon_16x16@2x.png"] },
    IconSlot { render_size: 64, filenames: &["icon_64x64.png", "icon_32x32@2x.png"] },
    IconSlot { render_size: 128, filenames: &["icon_128x128.png", "icon_64x64@2x.png"] },
    IconSlot { render_size: 256, filenames: &["icon_256x256.png", "icon_128x128@2x.png"] },
    IconSlot { render_size: 512, filenames: &["icon_512x512.png", "icon_256x256@2x.png"] },
    IconSlot { render_size: 1024, filenames: &["icon_512x512@2x.png"] },
];

/// Render every size in the plan and write it into `dir`, creating the
/// directory (and missing parents) first. Earlier files stay on disk if a
/// later write fails.
pub fn write_iconset(dir: &Path, font: &FontLoad) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create iconset directory {}", dir.display()))?;

    let mut written = Vec::new();
    for slot in ICONSET_PLAN {
        let img = render_icon(slot.render_size, font);
        for name in slot.filenames {
            let path = dir.join(name);
            img.save(&path)
                .with_context(|| format!("failed to save {}", path.display()))?;
            debug!("wrote {} at {}x{} px", path.display(), slot.render_size, slot.render_size);
            written.push(path);
        }
    }
    Ok(written)
}
