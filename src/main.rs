use std::path::Path;

use anyhow::Result;
use log::warn;

use mkicns::{
    ConversionResult, ICNS_PATH, ICONSET_DIR, compile_icns, load_preferred_font, write_iconset,
};

fn main() -> Result<()> {
    env_logger::init();

    let font = load_preferred_font();
    let written = write_iconset(Path::new(ICONSET_DIR), &font)?;
    println!("✅ wrote {} icon files to {}", written.len(), ICONSET_DIR);

    match compile_icns(Path::new(ICONSET_DIR), Path::new(ICNS_PATH)) {
        ConversionResult::Succeeded(path) => println!("✅ compiled {}", path.display()),
        ConversionResult::Failed(reason) => {
            warn!("{}", reason);
            println!("⚠️ icns conversion failed, the PNG icon set remains usable");
        }
    }

    Ok(())
}
