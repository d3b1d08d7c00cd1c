use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

/// Outcome of compiling the iconset into an `.icns` container.
pub enum ConversionResult {
    Succeeded(PathBuf),
    Failed(String),
}

/// Run `iconutil -c icns -o <output> <iconset_dir>` and wait for it. A spawn
/// error and a nonzero exit both come back as `Failed`; on success the output
/// file is taken on trust from the tool.
pub fn compile_icns(iconset_dir: &Path, output: &Path) -> ConversionResult {
    debug!(
        "running iconutil -c icns -o {} {}",
        output.display(),
        iconset_dir.display()
    );

    let invocation = Command::new("iconutil")
        .arg("-c")
        .arg("icns")
        .arg("-o")
        .arg(output)
        .arg(iconset_dir)
        .output();

    match invocation {
        Ok(out) if out.status.success() => ConversionResult::Succeeded(output.to_path_buf()),
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            ConversionResult::Failed(format!(
                "iconutil exited with {}: {}",
                out.status,
                stderr.trim()
            ))
        }
        Err(err) => ConversionResult::Failed(format!("failed to run iconutil: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_input_reports_failure() {
        // Fails to spawn where iconutil is absent, and iconutil itself
        // rejects a missing iconset directory where it is present.
        let tmp = tempfile::tempdir().unwrap();
        let result = compile_icns(
            &tmp.path().join("missing.iconset"),
            &tmp.path().join("AppIcon.icns"),
        );
        assert!(matches!(result, ConversionResult::Failed(_)));
    }
}
