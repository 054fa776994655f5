use crate::error::{LexiscoreError, Result};
use crate::types::config::LexiscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "lexiscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".lexiscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/lexiscore/config.toml";

/// Loads configuration layered global, then repo, then local. Missing layers are skipped.
pub fn load_config(root: &Path) -> Result<LexiscoreConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LexiscoreConfig> {
    // Later layers win: global, then repo `lexiscore.toml`, then `.lexiscore/local.toml`.
    // Tables merge key by key, so a layer only overrides the keys it sets.
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: LexiscoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| LexiscoreError::ConfigParse(e.to_string()))?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LexiscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ReportFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_falls_back_to_defaults_without_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.input.dir, PathBuf::from("files"));
        assert_eq!(cfg.language.extension, "py");
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[resources]
dictionary = "/usr/share/dict/words"

[output]
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[input]
dir = "src"

[output]
path = "report.json"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".lexiscore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[input]
dir = "scratch"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.input.dir, PathBuf::from("scratch"));
        assert_eq!(
            cfg.resources.dictionary,
            PathBuf::from("/usr/share/dict/words")
        );
        assert_eq!(cfg.output.path, PathBuf::from("report.json"));
        assert_eq!(cfg.output.format, ReportFormat::Json);
    }

    #[test]
    fn load_config_reports_malformed_layer() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[input\ndir = 3")
            .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, LexiscoreError::ConfigParse(_)));
    }
}
