// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Read one saved page. `page` names it in the error ("attendance", "timetable").
pub fn read_page(page: &'static str, path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Input {
        page,
        path: path.to_path_buf(),
        source,
    })?;
    // Saved pages are not always clean UTF-8; a replaced byte beats a hard failure.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the payload to `path`, or to stdout when `path` is `None`.
/// Returns the path written to, if any.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<Option<PathBuf>> {
    match path {
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(contents.as_bytes())
                .and_then(|_| out.write_all(b"\n"))
                .and_then(|_| out.flush())
                .map_err(|source| Error::Output { path: PathBuf::from("<stdout>"), source })?;
            Ok(None)
        }
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut body = String::with_capacity(contents.len() + 1);
            body.push_str(contents);
            body.push('\n');
            fs::write(p, body).map_err(|source| Error::Output { path: p.to_path_buf(), source })?;
            Ok(Some(p.to_path_buf()))
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Output {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Output { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
