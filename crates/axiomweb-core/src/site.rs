//! Static asset passthrough.
//!
//! The site build copies a fixed list of files and directories unchanged
//! from the input tree into the output directory. The output root mirrors
//! the input root's structure; no transformation is applied.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SiteError;

/// Directory holding layout partials, relative to the input root.
pub const INCLUDES_DIR: &str = "_includes";

/// Default output directory, relative to the input root.
pub const OUTPUT_DIR: &str = "_site";

/// Passthrough entries copied by default: stylesheet, script, images, admin.
pub const DEFAULT_PASSTHROUGH: &[&str] = &["style.css", "script.js", "images", "admin"];

/// Site build configuration.
///
/// The input directory is the project root; every passthrough entry is a
/// path relative to it.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    passthrough: Vec<PathBuf>,
}

/// Outcome of a site build, for display by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Individual files copied into the output tree
    pub copied_files: usize,
    /// Passthrough entries that were missing from the input tree
    pub skipped: Vec<PathBuf>,
}

impl SiteConfig {
    /// Standard layout: output at `<input>/_site`, default passthrough list.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        let output_dir = input_dir.join(OUTPUT_DIR);
        Self {
            input_dir,
            output_dir,
            passthrough: DEFAULT_PASSTHROUGH.iter().map(PathBuf::from).collect(),
        }
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Override the passthrough list.
    pub fn with_passthrough<I, P>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.passthrough = entries.into_iter().map(Into::into).collect();
        self
    }

    /// The input root.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// The output root.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Copy every passthrough entry into the output directory.
    ///
    /// A listed entry missing from the input tree is skipped and counted in
    /// the report rather than failing the build. Re-running overwrites the
    /// previous copies in place.
    pub fn build(&self) -> Result<BuildReport, SiteError> {
        if !self.input_dir.is_dir() {
            return Err(SiteError::InputDirMissing(self.input_dir.clone()));
        }
        fs::create_dir_all(&self.output_dir)?;

        let mut report = BuildReport::default();
        for rel in &self.passthrough {
            let src = self.input_dir.join(rel);
            if !src.exists() {
                tracing::warn!(asset = %rel.display(), "passthrough asset missing, skipping");
                report.skipped.push(rel.clone());
                continue;
            }
            copy_into(&src, &self.output_dir.join(rel), &mut report)?;
        }

        tracing::info!(
            files = report.copied_files,
            skipped = report.skipped.len(),
            output = %self.output_dir.display(),
            "site build complete"
        );
        Ok(report)
    }

    /// Remove the output directory. Idempotent.
    pub fn clean(&self) -> Result<(), SiteError> {
        if self.output_dir.exists() {
            fs::remove_dir_all(&self.output_dir)?;
            tracing::info!(output = %self.output_dir.display(), "removed output directory");
        }
        Ok(())
    }
}

/// Recursively copy a file or directory, mirroring structure under `dest`.
fn copy_into(src: &Path, dest: &Path, report: &mut BuildReport) -> Result<(), SiteError> {
    if src.is_dir() {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_into(&entry.path(), &dest.join(entry.file_name()), report)?;
        }
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
        report.copied_files += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn sample_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "style.css", "body { margin: 0; }");
        write(dir.path(), "script.js", "// site behaviors");
        write(dir.path(), "images/barber-at-work.jpg", "jpegdata");
        write(dir.path(), "images/icons/menu.svg", "<svg/>");
        write(dir.path(), "admin/config.yml", "backend: git");
        dir
    }

    #[test]
    fn build_mirrors_input_structure() {
        let dir = sample_site();
        let config = SiteConfig::new(dir.path());
        let report = config.build().unwrap();

        assert_eq!(report.copied_files, 5);
        assert!(report.skipped.is_empty());

        let out = dir.path().join(OUTPUT_DIR);
        assert!(out.join("style.css").is_file());
        assert!(out.join("script.js").is_file());
        assert!(out.join("images/barber-at-work.jpg").is_file());
        assert!(out.join("images/icons/menu.svg").is_file());
        assert!(out.join("admin/config.yml").is_file());
    }

    #[test]
    fn copies_are_byte_identical() {
        let dir = sample_site();
        let config = SiteConfig::new(dir.path());
        config.build().unwrap();

        let copied = fs::read_to_string(dir.path().join(OUTPUT_DIR).join("style.css")).unwrap();
        assert_eq!(copied, "body { margin: 0; }");
    }

    #[test]
    fn missing_asset_is_skipped_and_reported() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "style.css", "x");

        let config = SiteConfig::new(dir.path());
        let report = config.build().unwrap();

        assert_eq!(report.copied_files, 1);
        let skipped: Vec<String> = report
            .skipped
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(skipped, vec!["script.js", "images", "admin"]);
    }

    #[test]
    fn rebuild_overwrites_previous_output() {
        let dir = sample_site();
        let config = SiteConfig::new(dir.path());
        config.build().unwrap();

        write(dir.path(), "style.css", "body { margin: 1px; }");
        config.build().unwrap();

        let copied = fs::read_to_string(dir.path().join(OUTPUT_DIR).join("style.css")).unwrap();
        assert_eq!(copied, "body { margin: 1px; }");
    }

    #[test]
    fn custom_output_dir_and_passthrough() {
        let dir = sample_site();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::new(dir.path())
            .with_output_dir(out.path().join("public"))
            .with_passthrough(["images"]);

        let report = config.build().unwrap();
        assert_eq!(report.copied_files, 2);
        assert!(out.path().join("public/images/icons/menu.svg").is_file());
        assert!(!out.path().join("public/style.css").exists());
    }

    #[test]
    fn clean_is_idempotent() {
        let dir = sample_site();
        let config = SiteConfig::new(dir.path());
        config.build().unwrap();

        config.clean().unwrap();
        assert!(!config.output_dir().exists());
        config.clean().unwrap();
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::new(dir.path().join("nope"));
        let err = config.build().unwrap_err();
        assert!(matches!(err, SiteError::InputDirMissing(_)));
    }
}
