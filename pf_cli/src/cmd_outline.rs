use crate::util::{dyn_error::DynError, package_info::PackageInfo, source_input::SourceInput};
use pf_core::rust_api::{outline, Doc};
use std::env::Args;

pub(crate) fn write_outline_help() {
    let package_info = PackageInfo::from_env();
    print!(include_str!("cmd_outline_help.txt"), command = package_info.name);
}

pub(crate) fn do_exec_outline_cmd(
    doc: Doc,
    args: impl Iterator<Item = String>,
) -> Result<String, DynError> {
    let mut input = SourceInput::default();
    for arg in args {
        input.accept(arg)?;
    }

    let (source_path, src) = input.read()?;
    Ok(outline(doc, &source_path, &src)?)
}

pub(crate) fn exec_outline_cmd(args: Args, help: bool) -> Result<(), DynError> {
    if help {
        write_outline_help();
        return Ok(());
    }

    print!("{}", do_exec_outline_cmd(Doc::new(1), args)?);
    Ok(())
}
