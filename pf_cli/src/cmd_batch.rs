use crate::{
    cmd_dump::do_exec_dump_cmd,
    cmd_fix::do_exec_fix_cmd,
    cmd_help::string_is_help_flag,
    cmd_outline::do_exec_outline_cmd,
    parse_cmd,
    util::{dyn_error::DynError, package_info::PackageInfo},
    Cmd,
};
use pf_core::rust_api::Doc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{env::Args, fmt::Debug, io, panic};

#[derive(Deserialize, Debug)]
struct InputRow {
    id: Option<Value>,
    args: Option<Vec<String>>,
}

struct Action {
    id: Option<Value>,
    cmd: Cmd,
    args: Vec<String>,
}

/// 1つのコマンドの結果。成功したら `out`、失敗したら `err` を持つ。
#[derive(Serialize, Debug)]
struct OutputRow {
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,
}

fn write_batch_help() {
    let package_info = PackageInfo::from_env();
    print!(include_str!("cmd_batch_help.txt"), command = package_info.name);
}

fn parse_action(json: &str) -> Result<Action, DynError> {
    let row: InputRow = match serde_json::from_str(json) {
        Ok(row) => row,
        Err(err) => {
            return Err(format!("JSON としてパースできません。({}) {}", json.trim(), err).into())
        }
    };

    let id = row.id;

    let mut args = row.args.unwrap_or_default();
    if args.is_empty() {
        return Err("args は空にできません。".into());
    }
    let cmd_name = args.remove(0);

    let cmd = match parse_cmd(&cmd_name) {
        Some(cmd) => cmd,
        None => return Err(format!("サブコマンド '{}' はありません。", cmd_name).into()),
    };

    if let Cmd::Batch | Cmd::Help | Cmd::Version = cmd {
        return Err(format!("batch ではサブコマンド '{}' を使えません。", cmd_name).into());
    }

    Ok(Action { id, cmd, args })
}

fn write_row(row: &OutputRow) {
    match serde_json::to_string(row) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("couldn't serialize {:?} ({:?})", row, err),
    }
}

/// コマンドを実行する。`doc` は行ごとに異なる。
fn exec_action(doc: Doc, action: Action) -> OutputRow {
    let Action { id, cmd, args } = action;

    let caught = panic::catch_unwind(|| {
        let args = args.into_iter();
        match cmd {
            Cmd::Fix => do_exec_fix_cmd(doc, args),
            Cmd::Outline => do_exec_outline_cmd(doc, args),
            Cmd::Dump => do_exec_dump_cmd(doc, args),
            Cmd::Batch | Cmd::Help | Cmd::Version => unreachable!(),
        }
    });

    let result: Result<String, Box<dyn Debug + Send + 'static>> = match caught {
        Ok(Ok(out)) => Ok(out),
        Ok(Err(err)) => Err(err.into_inner()),
        Err(err) => Err(Box::new(err)),
    };

    match result {
        Ok(out) => OutputRow {
            id,
            out: Some(out),
            err: None,
        },
        Err(err) => OutputRow {
            id,
            out: None,
            err: Some(format!("{:?}", err)),
        },
    }
}

fn exec_loop(line_index: usize) -> Result<(), DynError> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Ok(());
    }

    let action = parse_action(&line)?;
    let doc = Doc::new(line_index + 1);

    let ((), result) = rayon::join(
        move || write_row(&exec_action(doc, action)),
        move || exec_loop(line_index + 1),
    );
    result
}

pub(crate) fn exec_batch_cmd(mut args: Args, help: bool) -> Result<(), DynError> {
    if help || args.any(|arg| string_is_help_flag(&arg)) {
        write_batch_help();
        return Ok(());
    }

    exec_loop(0)
}
