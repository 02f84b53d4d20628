use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item};

#[derive(Debug, Clone, Copy)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}

/// Write a preset policy to `path`.
///
/// A new file gets the preset verbatim. An existing file keeps its other
/// settings and its `policy.ignore` list; the rest of `[policy]` is replaced.
pub fn generate_config_at_path<P: AsRef<Path>>(path: P, preset: InitPreset) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        fs::write(path, get_preset_config(preset))
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        return Ok(());
    }

    merge_into_existing(path, preset)
}

fn merge_into_existing(path: &Path, preset: InitPreset) -> Result<()> {
    let existing = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let mut doc = existing
        .parse::<DocumentMut>()
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    let preset_doc = get_preset_config(preset)
        .parse::<DocumentMut>()
        .context("Invalid preset config format")?;
    let mut policy = preset_doc
        .get("policy")
        .and_then(Item::as_table)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Preset config has no [policy] table"))?;

    let kept_ignore = doc
        .get("policy")
        .and_then(|p| p.get("ignore"))
        .filter(|ignore| ignore.is_array())
        .cloned();
    if let Some(ignore) = kept_ignore {
        policy["ignore"] = ignore;
    }

    if !doc.contains_key("format") {
        if let Some(format) = preset_doc.get("format") {
            doc["format"] = format.clone();
        }
    }
    doc["policy"] = Item::Table(policy);

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}

fn get_preset_config(preset: InitPreset) -> &'static str {
    match preset {
        InitPreset::Red => include_str!("../presets/red.toml"),
        InitPreset::Green => include_str!("../presets/green.toml"),
        InitPreset::Yellow => include_str!("../presets/yellow.toml"),
    }
}
