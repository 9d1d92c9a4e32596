#![cfg(test)]

use crate::rust_api::{make_public, Doc};
use serde::Deserialize;
use std::{
    fmt::Write as _,
    fs, panic,
    path::{Path, PathBuf},
};

/// テストケースで適用する修正
#[derive(Deserialize)]
struct FixArgs {
    name: String,
    #[serde(default)]
    within_one_crate: bool,
}

#[derive(Deserialize)]
struct TestCase {
    fix: FixArgs,
}

fn run(input_file: &Path, input: &str) -> Result<String, String> {
    let test_case: TestCase = serde_json::from_str(input).map_err(|err| err.to_string())?;
    let FixArgs {
        name,
        within_one_crate,
    } = test_case.fix;

    let output_opt = make_public(Doc::new(1), input_file, input, &name, within_one_crate)
        .map_err(|err| err.to_string())?;

    let mut out = String::new();
    match output_opt {
        Some(output) => {
            writeln!(out, "{}", output.title).ok();
            writeln!(
                out,
                "{} {:?}",
                output.edit.range.start(),
                output.edit.new_text
            )
            .ok();
            writeln!(out, "---").ok();
            writeln!(out, "{}", output.text).ok();
        }
        None => {
            writeln!(out, "unavailable").ok();
        }
    }
    Ok(out)
}

#[test]
fn test_fixes() {
    let mut pass = 0;
    let mut fail = vec![];

    for dir in fs::read_dir(tests_dir().join("fixes")).unwrap() {
        let dir = match dir {
            Ok(it) => it,
            Err(_) => continue,
        };

        let (input_file, output_file) = {
            let file_name = dir.file_name();
            let name = file_name.to_string_lossy();
            let input_file = dir.path().join(format!("{}.json", name));
            let output_file = dir.path().join(format!("{}.txt", name));
            (input_file, output_file)
        };
        let input = fs::read_to_string(&input_file)
            .unwrap_or_else(|err| panic!("expected {:?} ({:?})", input_file, err));

        let result = panic::catch_unwind(|| run(&input_file, &input));
        match result {
            Ok(Ok(actual)) => {
                let expected = fs::read_to_string(&output_file).unwrap_or_default();
                if actual != expected {
                    fs::write(&output_file, &actual).unwrap();
                    fail.push((input_file, format!("snapshot updated:\n{}", actual)));
                    continue;
                }

                pass += 1;
            }
            Ok(Err(err)) => fail.push((input_file, err)),
            Err(err) => fail.push((input_file, format!("ERROR {:?}", err))),
        }
    }

    if !fail.is_empty() {
        panic!("fails {:#?}", fail)
    }
    if pass == 0 {
        panic!("no tests");
    }
}

fn tests_dir() -> PathBuf {
    let manifest_dir: &'static str = env!("CARGO_MANIFEST_DIR");
    let tests_dir = PathBuf::from(manifest_dir)
        .join("../tests")
        .canonicalize()
        .unwrap();
    assert_eq!(tests_dir.file_name().unwrap().to_str(), Some("tests"));
    tests_dir
}
