use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar document written next to every artifact.
#[derive(Serialize)]
struct Provenance<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: Callsite,
    tag: Option<&'a str>,
    params: &'a Value,
    outputs: Vec<String>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Run parameters recorded in the sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn tagged(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write `<artifact>.provenance.json` with the code revision, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = Provenance {
        code_rev: current_git_rev(),
        engine_version: hexstyle::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        tag: payload.tag.as_deref(),
        params: &payload.params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the build: `GIT_COMMIT` at compile or run time, else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/layer.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/layer.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_params_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("layer.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"classes": 5})).tagged(Some("run-7".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["classes"], 5);
        assert_eq!(parsed["tag"], "run-7");
        assert_eq!(parsed["engine_version"], hexstyle::VERSION);
    }
}
