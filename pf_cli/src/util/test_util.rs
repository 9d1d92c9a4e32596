use std::{env, path::PathBuf, process};

pub(crate) fn args(args: &[&str]) -> impl Iterator<Item = String> {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

/// `tests/fixes/<name>/<name>.json`
pub(crate) fn fixture_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/fixes")
        .join(name)
        .join(format!("{}.json", name))
        .to_string_lossy()
        .to_string()
}

pub(crate) fn temp_path(name: &str) -> String {
    env::temp_dir()
        .join(format!("pubfix_{}_{}", process::id(), name))
        .to_string_lossy()
        .to_string()
}
