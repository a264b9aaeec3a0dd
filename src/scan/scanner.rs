//! Template discovery under a formula tree

use crate::utils::normalize_path;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_TEMPLATE_PATTERNS: &[&str] = &["**/*.sls", "**/*.j2", "**/*.jinja"];

#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub templates_found: usize,
}

/// Walks a formula tree and collects template paths relative to its root.
pub struct TemplateScanner {
    root_path: PathBuf,
    patterns: Vec<String>,
    follow_symlinks: bool,
    stats: ScanStats,
}

impl TemplateScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            patterns: DEFAULT_TEMPLATE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            follow_symlinks: false,
            stats: ScanStats::default(),
        }
    }

    /// Set glob patterns (matched against `/`-separated relative paths)
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn build_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid template pattern: {}", pattern))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Relative template paths, sorted.
    pub fn scan(&mut self) -> Result<Vec<String>> {
        self.stats = ScanStats::default();
        let globset = self.build_globset()?;

        let root = self.root_path.clone();
        let walker = WalkDir::new(&self.root_path)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| !is_hidden_dir(entry, &root));

        let mut templates = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            self.stats.files_scanned += 1;

            let Some(rel_path) = relative(entry.path(), &self.root_path) else {
                continue;
            };
            if globset.is_match(&rel_path) {
                templates.push(rel_path);
            }
        }

        templates.sort();
        self.stats.templates_found = templates.len();
        tracing::debug!(
            "Found {} templates in {} files under {}",
            self.stats.templates_found,
            self.stats.files_scanned,
            self.root_path.display()
        );
        Ok(templates)
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

fn is_hidden_dir(entry: &DirEntry, root: &Path) -> bool {
    entry.file_type().is_dir()
        && entry.path() != root
        && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn relative(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(normalize_path(rel.to_str()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, "# template\n").expect("write");
    }

    #[test]
    fn test_scan_default_patterns() {
        let tmp = TempDir::new().expect("tmp");
        touch(tmp.path(), "metalk8s/kubernetes/init.sls");
        touch(tmp.path(), "metalk8s/kubernetes/files/kubelet.conf.j2");
        touch(tmp.path(), "metalk8s/addons/map.jinja");
        touch(tmp.path(), "metalk8s/README.md");
        touch(tmp.path(), ".git/hooks/pre-commit.sls");

        let mut scanner = TemplateScanner::new(tmp.path().to_path_buf());
        let templates = scanner.scan().expect("scan");

        assert_eq!(
            templates,
            vec![
                "metalk8s/addons/map.jinja",
                "metalk8s/kubernetes/files/kubelet.conf.j2",
                "metalk8s/kubernetes/init.sls",
            ]
        );
        assert_eq!(scanner.stats().files_scanned, 4);
        assert_eq!(scanner.stats().templates_found, 3);
    }

    #[test]
    fn test_scan_custom_patterns() {
        let tmp = TempDir::new().expect("tmp");
        touch(tmp.path(), "a/init.sls");
        touch(tmp.path(), "a/b/deployed.sls");

        let mut scanner = TemplateScanner::new(tmp.path().to_path_buf())
            .patterns(vec!["**/deployed.sls".to_string()]);
        assert_eq!(scanner.scan().expect("scan"), vec!["a/b/deployed.sls"]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let mut scanner =
            TemplateScanner::new(tmp.path().to_path_buf()).patterns(vec!["a[".to_string()]);
        let err = scanner.scan().unwrap_err();
        assert!(err.to_string().contains("Invalid template pattern"));
    }
}
