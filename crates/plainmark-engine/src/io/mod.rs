use std::fs;
use std::path::{Path, PathBuf};

use crate::formatter::format;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a plainmark document
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Where the HTML for `input` goes: same file stem, new extension, either
/// next to the input or inside `output_dir`.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let renamed = input.with_extension(extension);
    match (output_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}

/// Read `input`, render it and write the HTML to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<PathBuf, IoError> {
    let plain = read_document(input)?;
    let html = format(&plain);
    write_html(output, &html)?;
    log::debug!("converted {} -> {}", input.display(), output.display());
    Ok(output.to_path_buf())
}
