use crate::util::{
    dyn_error::DynError, output::write_output, package_info::PackageInfo,
    source_input::SourceInput,
};
use pf_core::rust_api::{dump_syntax, Doc};
use std::env::Args;

pub(crate) fn write_dump_help() {
    let package_info = PackageInfo::from_env();
    print!(include_str!("cmd_dump_help.txt"), command = package_info.name);
}

pub(crate) fn do_exec_dump_cmd(
    doc: Doc,
    mut args: impl Iterator<Item = String>,
) -> Result<String, DynError> {
    let mut input = SourceInput::default();

    // or stdout
    let mut output_path_opt = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--out" => {
                let output_path = args
                    .next()
                    .ok_or_else(|| DynError::from("-o/--out の後にファイル名がありません。"))?;
                output_path_opt = Some(output_path);
            }
            _ => input.accept(arg)?,
        }
    }

    let (source_path, src) = input.read()?;
    let syntax_dump = dump_syntax(doc, &source_path, &src)?;
    let output = format!("{}\n\n{}\n", syntax_dump.text, syntax_dump.tree);

    write_output(output_path_opt, output)
}

pub(crate) fn exec_dump_cmd(args: Args, help: bool) -> Result<(), DynError> {
    if help {
        write_dump_help();
        return Ok(());
    }

    print!("{}", do_exec_dump_cmd(Doc::new(1), args)?);
    Ok(())
}
