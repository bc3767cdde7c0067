use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provenance block written next to every report and printed by `report`.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub command: String,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &str, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            planar_version: planar::VERSION,
            command: command.to_string(),
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` for `artifact`, recording it as the
/// sole output.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let derived = provenance_path(Path::new("/tmp/out/summary.json"));
        assert_eq!(derived, Path::new("/tmp/out/summary.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("summary.json");
        fs::write(&artifact, "{}").unwrap();
        let prov = Provenance::new("run", json!({"input": "figs.csv"}));
        let path = write_sidecar(&artifact, prov).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "run");
        assert_eq!(parsed["params"]["input"], "figs.csv");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
