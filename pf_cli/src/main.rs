mod cmd_batch;
mod cmd_dump;
mod cmd_fix;
mod cmd_help;
mod cmd_outline;

mod util {
    pub(crate) mod dyn_error;
    pub(crate) mod output;
    pub(crate) mod package_info;
    pub(crate) mod source_input;

    #[cfg(test)]
    pub(crate) mod test_util;
}

use cmd_batch::exec_batch_cmd;
use cmd_dump::exec_dump_cmd;
use cmd_fix::exec_fix_cmd;
use cmd_help::{exec_help_cmd, string_is_help_flag};
use cmd_outline::exec_outline_cmd;
use env_logger::Env;
use std::{env, process};
use util::{dyn_error::DynError, package_info::PackageInfo};

#[derive(Copy, Clone, Debug)]
pub(crate) enum Cmd {
    Fix,
    Outline,
    Dump,
    Batch,
    Help,
    Version,
}

pub(crate) fn parse_cmd(s: &str) -> Option<Cmd> {
    let cmd = match s {
        "fix" => Cmd::Fix,
        "outline" => Cmd::Outline,
        "dump" => Cmd::Dump,
        "batch" => Cmd::Batch,
        "help" => Cmd::Help,
        "version" | "-V" | "--version" => Cmd::Version,
        _ if string_is_help_flag(s) => Cmd::Help,
        _ => return None,
    };
    Some(cmd)
}

fn exec_version_cmd() {
    println!("{}", PackageInfo::from_env().version);
}

fn init_log() {
    let env = Env::default().default_filter_or("warn");
    env_logger::from_env(env).init();
}

fn exec_with_args(mut args: env::Args) -> Result<(), DynError> {
    args.next();

    let cmd_name = match args.next() {
        Some(it) => it,
        None => {
            exec_help_cmd();
            return Ok(());
        }
    };

    let cmd = match parse_cmd(&cmd_name) {
        Some(cmd) => cmd,
        None => {
            exec_help_cmd();
            return Err(format!("サブコマンド '{}' はありません。", cmd_name).into());
        }
    };
    log::debug!("cmd={:?}", cmd);

    // サブコマンドのヘルプは引数を読む前に判定する。
    let help = env::args().skip(2).any(|arg| string_is_help_flag(&arg));

    match cmd {
        Cmd::Fix => exec_fix_cmd(args, help),
        Cmd::Outline => exec_outline_cmd(args, help),
        Cmd::Dump => exec_dump_cmd(args, help),
        Cmd::Batch => exec_batch_cmd(args, help),
        Cmd::Help => {
            exec_help_cmd();
            Ok(())
        }
        Cmd::Version => {
            exec_version_cmd();
            Ok(())
        }
    }
}

fn main() {
    init_log();

    if let Err(err) = exec_with_args(env::args()) {
        eprintln!("ERROR: {:?}", err.into_inner());
        process::exit(1);
    }
}
