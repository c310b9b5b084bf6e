use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle every file under `output_dir` into a new ZIP at `archive_path`.
///
/// The walk is recursive and inclusive: any regular file found in the tree is
/// added under its path relative to `output_dir`, including files this
/// pipeline did not produce. The one exclusion is the archive itself, matched
/// by path identity rather than by `.zip` extension, so unrelated files that
/// happen to share the extension are still archived.
///
/// Overwrites any prior archive at `archive_path`.
pub fn create_archive(
    output_dir: &Path,
    archive_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut pending = vec![output_dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path != archive_path {
                let name = relative_entry_name(&path, output_dir)?;
                zip.start_file(name, options)?;
                let mut src = File::open(&path)?;
                io::copy(&mut src, &mut zip)?;
            }
        }
    }

    zip.finish()?;
    Ok(())
}

/// Archive entry name for `path`: its path relative to `base`, with `/`
/// separators.
fn relative_entry_name(path: &Path, base: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let rel: PathBuf = path.strip_prefix(base)?.to_path_buf();
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
