//! Build package archives from a Heat template or MuranoPL classes
//!
//! Layout of a generated archive:
//!
//! ```text
//! manifest.yaml
//! template.yaml        (Heat.HOT packages)
//! Classes/...          (MuranoPL packages)
//! Resources/...        (MuranoPL, optional)
//! UI/ui.yaml           (MuranoPL, optional)
//! logo.png             (optional)
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::manifest::MANIFEST_FILE;
use crate::error::{MuranoError, Result, config, fs};

const HOT_FORMAT: &str = "Heat.HOT/1.0";
const MURANOPL_FORMAT: &str = "MuranoPL/1.0";
const HOT_NAME_PREFIX: &str = "io.murano.apps.generated";
const DEFAULT_AUTHOR: &str = "OpenStack";

/// Inputs of `package-create`
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub template: Option<PathBuf>,
    pub classes_dir: Option<PathBuf>,
    pub resources_dir: Option<PathBuf>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub output: Option<PathBuf>,
    pub ui: Option<PathBuf>,
    pub package_type: String,
    pub logo: Option<PathBuf>,
}

/// A file to store in the archive
struct Entry {
    archive_path: String,
    source: PathBuf,
}

/// Build the package described by `options` and return the archive path
pub fn create_package(options: &CreateOptions) -> Result<PathBuf> {
    if !matches!(options.package_type.as_str(), "Application" | "Library") {
        return Err(config::command(format!(
            "Package type should be Application or Library, got '{}'",
            options.package_type
        )));
    }
    if let Some(logo) = &options.logo {
        require_file(logo)?;
    }

    let (manifest, entries, default_output) = match (&options.template, &options.classes_dir) {
        (Some(_), Some(_)) => {
            return Err(config::command(
                "Provide --template for a HOT-based package, OR --classes-dir for a MuranoPL-based package",
            ));
        }
        (None, None) => {
            return Err(config::command(
                "Provide --template for a HOT-based package, OR at least --classes-dir for a MuranoPL-based package",
            ));
        }
        (Some(template), None) => prepare_hot(options, template)?,
        (None, Some(classes_dir)) => prepare_muranopl(options, classes_dir)?,
    };

    let output = options.output.clone().unwrap_or(default_output);
    write_archive(&output, &manifest, &entries)?;
    tracing::info!(path = %output.display(), "package archive written");
    Ok(output)
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(fs::not_found(path.display().to_string()))
    }
}

fn prepare_hot(options: &CreateOptions, template: &Path) -> Result<(Mapping, Vec<Entry>, PathBuf)> {
    require_file(template)?;
    let content = std::fs::read_to_string(template)
        .map_err(|e| fs::read_failed(template.display().to_string(), e.to_string()))?;
    let parsed: Value = serde_yaml::from_str(&content).map_err(|e| {
        config::command(format!(
            "Heat template {} should be a valid yaml file: {e}",
            template.display()
        ))
    })?;

    let stem = template
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "template".to_string());
    let name = options.name.clone().unwrap_or_else(|| stem.clone());
    let full_name = options
        .full_name
        .clone()
        .unwrap_or_else(|| format!("{HOT_NAME_PREFIX}.{}", normalize_name(&name)));
    let description = options.description.clone().unwrap_or_else(|| {
        parsed
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "Heat-defined application for a template \"{}\"",
                    template.display()
                )
            })
    });

    let mut manifest = base_manifest(options, HOT_FORMAT, &full_name, &name, &description);
    let mut entries = vec![Entry {
        archive_path: "template.yaml".to_string(),
        source: template.to_path_buf(),
    }];
    add_logo(options, &mut manifest, &mut entries);

    Ok((manifest, entries, PathBuf::from(format!("{stem}.zip"))))
}

fn prepare_muranopl(
    options: &CreateOptions,
    classes_dir: &Path,
) -> Result<(Mapping, Vec<Entry>, PathBuf)> {
    if !classes_dir.is_dir() {
        return Err(config::command(format!(
            "{} is not a directory",
            classes_dir.display()
        )));
    }
    if let Some(resources) = &options.resources_dir {
        if !resources.is_dir() {
            return Err(config::command(format!(
                "{} is not a directory",
                resources.display()
            )));
        }
    }
    if let Some(ui) = &options.ui {
        require_file(ui)?;
    }

    let mut entries = Vec::new();
    let mut classes = Mapping::new();
    for (source, relative) in walk_files(classes_dir)? {
        let class_name = read_class_name(&source)?;
        classes.insert(
            Value::String(class_name),
            Value::String(relative.clone()),
        );
        entries.push(Entry {
            archive_path: format!("Classes/{relative}"),
            source,
        });
    }

    let first_class = classes
        .keys()
        .next()
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| config::command("Application should have at least one class"))?;
    let full_name = options.full_name.clone().unwrap_or(first_class);
    let name = options.name.clone().unwrap_or_else(|| {
        full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name.as_str())
            .to_string()
    });
    let description = options.description.clone().unwrap_or_else(|| {
        format!("MuranoPL-defined application {name}")
    });

    let mut manifest = base_manifest(options, MURANOPL_FORMAT, &full_name, &name, &description);
    manifest.insert("Classes".into(), Value::Mapping(classes));

    if let Some(resources) = &options.resources_dir {
        for (source, relative) in walk_files(resources)? {
            entries.push(Entry {
                archive_path: format!("Resources/{relative}"),
                source,
            });
        }
    }
    if let Some(ui) = &options.ui {
        manifest.insert("UI".into(), "ui.yaml".into());
        entries.push(Entry {
            archive_path: "UI/ui.yaml".to_string(),
            source: ui.clone(),
        });
    }
    add_logo(options, &mut manifest, &mut entries);

    Ok((manifest, entries, PathBuf::from(format!("{full_name}.zip"))))
}

fn base_manifest(
    options: &CreateOptions,
    format: &str,
    full_name: &str,
    name: &str,
    description: &str,
) -> Mapping {
    let mut manifest = Mapping::new();
    manifest.insert("Format".into(), format.into());
    manifest.insert("Type".into(), options.package_type.as_str().into());
    manifest.insert("FullName".into(), full_name.into());
    manifest.insert("Name".into(), name.into());
    manifest.insert("Description".into(), description.into());
    manifest.insert(
        "Author".into(),
        options.author.as_deref().unwrap_or(DEFAULT_AUTHOR).into(),
    );
    let tags = options.tags.iter().map(|t| Value::from(t.as_str())).collect();
    manifest.insert("Tags".into(), Value::Sequence(tags));
    manifest
}

fn add_logo(options: &CreateOptions, manifest: &mut Mapping, entries: &mut Vec<Entry>) {
    if let Some(logo) = &options.logo {
        manifest.insert("Logo".into(), "logo.png".into());
        entries.push(Entry {
            archive_path: "logo.png".to_string(),
            source: logo.clone(),
        });
    }
}

/// `wordpress_app` -> `WordpressApp`
fn normalize_name(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Files under `dir` with their `/`-separated relative paths, sorted
fn walk_files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| fs::read_failed(dir.display().to_string(), e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| fs::io_error(e.to_string()))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("/");
        files.push((entry.path().to_path_buf(), relative));
    }
    Ok(files)
}

/// Fully qualified name of the MuranoPL class defined in `path`
fn read_class_name(path: &Path) -> Result<String> {
    let invalid = || {
        config::command(format!(
            "MuranoPL class {} should be a valid yaml file",
            path.display()
        ))
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
    let class: Value = serde_yaml::from_str(&content).map_err(|_| invalid())?;
    if !class.is_mapping() {
        return Err(invalid());
    }

    let name = class.get("Name").and_then(Value::as_str).ok_or_else(|| {
        config::command(format!(
            "Error in class definition {}: 'Name' section is required",
            path.display()
        ))
    })?;
    let namespaces = class
        .get("Namespaces")
        .and_then(Value::as_mapping)
        .cloned()
        .unwrap_or_default();
    resolve_class_name(&namespaces, name).ok_or_else(|| {
        config::command(format!(
            "Error in class definition {}: unknown namespace in '{name}'",
            path.display()
        ))
    })
}

/// Apply MuranoPL namespace aliases (`=` is the default namespace)
fn resolve_class_name(namespaces: &Mapping, name: &str) -> Option<String> {
    if let Some(absolute) = name.strip_prefix(':') {
        return Some(absolute.to_string());
    }
    let (alias, short) = name.split_once(':').unwrap_or(("=", name));
    match namespaces.get(alias).and_then(Value::as_str) {
        Some(namespace) if !namespace.is_empty() => Some(format!("{namespace}.{short}")),
        _ if alias == "=" => Some(short.to_string()),
        _ => None,
    }
}

fn write_archive(output: &Path, manifest: &Mapping, entries: &[Entry]) -> Result<()> {
    let write_failed = |e: &dyn std::fmt::Display| fs::write_failed(output.display().to_string(), e.to_string());

    let file = File::create(output).map_err(|e| write_failed(&e))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let manifest_yaml = serde_yaml::to_string(manifest)
        .map_err(|e| MuranoError::ArchiveFailed { reason: e.to_string() })?;
    zip.start_file(MANIFEST_FILE, options)?;
    zip.write_all(manifest_yaml.as_bytes())
        .map_err(|e| write_failed(&e))?;

    for entry in entries {
        let bytes = std::fs::read(&entry.source)
            .map_err(|e| fs::read_failed(entry.source.display().to_string(), e.to_string()))?;
        zip.start_file(entry.archive_path.as_str(), options)?;
        zip.write_all(&bytes).map_err(|e| write_failed(&e))?;
    }

    zip.finish()?;
    Ok(())
}
