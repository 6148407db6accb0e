use super::SourceDocument;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read every document under `paths`. Directories are walked for files ending
/// in `suffix`; files given directly are always read. Results are sorted by
/// path.
pub fn collect_documents(paths: &[PathBuf], suffix: &str) -> Result<Vec<SourceDocument>> {
    let mut found: Vec<(PathBuf, String)> = Vec::new();

    for root in paths {
        if root.is_dir() {
            for entry in WalkDir::new(root).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if entry.file_type().is_file() && has_suffix(path, suffix) {
                    let relative = path.strip_prefix(root).unwrap_or(path);
                    found.push((path.to_path_buf(), document_name(relative, suffix)));
                }
            }
        } else {
            found.push((root.clone(), document_name(root, suffix)));
        }
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found.dedup_by(|a, b| a.0 == b.0);

    let mut documents = Vec::with_capacity(found.len());
    for (path, name) in found {
        let text = fs::read_to_string(&path)?;
        documents.push(SourceDocument { name, text });
    }
    tracing::debug!("Collected {} document(s)", documents.len());
    Ok(documents)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}

/// Forward-slash path with the source suffix removed.
fn document_name(path: &Path, suffix: &str) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    joined
        .strip_suffix(suffix)
        .map(str::to_string)
        .unwrap_or(joined)
}
