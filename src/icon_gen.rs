use crate::error::{IconError, IconResult};
use crate::manifest::{IconsManifest, MANIFEST_FILE_NAME};
use crate::render::save_icon;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// Sizes generated for the extension toolbar, in order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Also write `manifest-icons.json` next to the icons
    pub manifest: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct FailedIcon {
    pub size: u32,
    pub path: PathBuf,
    pub error: IconError,
}

/// Outcome of a batch run. A failed icon doesn't stop the remaining ones.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedIcon>,
    pub failed: Vec<FailedIcon>,
    pub manifest: Option<PathBuf>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// File name for an icon of the given size, e.g. `icon48.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Generate every icon in [`ICON_SIZES`] into `out_dir`.
pub fn generate_icons(out_dir: &Path, options: &GenerateOptions) -> IconResult<GenerationReport> {
    generate_sizes(out_dir, &ICON_SIZES, options)
}

/// Generate icons of the given sizes into `out_dir`, creating it if needed.
///
/// Only a failure to create the directory (or write the manifest) is
/// returned as an error; per-icon failures are collected in the report.
pub fn generate_sizes(
    out_dir: &Path,
    sizes: &[u32],
    options: &GenerateOptions,
) -> IconResult<GenerationReport> {
    create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;

    println!("Generating extension icons...");
    let mut report = GenerationReport::default();

    for &size in sizes {
        let filename = icon_file_name(size);
        let output_path = out_dir.join(&filename);

        match save_icon(size, &output_path) {
            Ok(()) => {
                println!("  ✓ Generated {filename} ({size}x{size})");
                report.generated.push(GeneratedIcon {
                    size,
                    path: output_path,
                });
            }
            Err(error) => {
                log::warn!("Failed to generate {}: {error}", output_path.display());
                println!("  ✗ Failed {filename}: {error}");
                report.failed.push(FailedIcon {
                    size,
                    path: output_path,
                    error,
                });
            }
        }
    }

    if options.manifest && !report.generated.is_empty() {
        report.manifest = Some(write_manifest(out_dir, &report.generated)?);
    }

    Ok(report)
}

fn write_manifest(out_dir: &Path, icons: &[GeneratedIcon]) -> IconResult<PathBuf> {
    // Paths in the manifest are relative to the extension root, which is
    // taken to be the parent of the output directory.
    let dir_name = out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut manifest = IconsManifest::new();
    for icon in icons {
        manifest.add_icon(icon.size, &dir_name, &icon_file_name(icon.size));
    }

    let path = out_dir.join(MANIFEST_FILE_NAME);
    manifest.write_to_file(&path)?;
    println!("  ✓ Generated {MANIFEST_FILE_NAME}");
    Ok(path)
}
