use crate::util::{
    dyn_error::DynError, output::write_output, package_info::PackageInfo,
    source_input::SourceInput,
};
use pf_core::rust_api::{make_public, Doc};
use std::env::Args;

pub(crate) fn write_fix_help() {
    let package_info = PackageInfo::from_env();
    print!(include_str!("cmd_fix_help.txt"), command = package_info.name);
}

/// 修正を適用して、出力するテキストを返す。(`-o` があればファイルに書いて空文字列を返す。)
pub(crate) fn do_exec_fix_cmd(
    doc: Doc,
    mut args: impl Iterator<Item = String>,
) -> Result<String, DynError> {
    let mut input = SourceInput::default();
    let mut name_opt = None;
    let mut within_one_crate = false;
    let mut print_edit = false;

    // or stdout
    let mut output_path_opt = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" | "--name" => {
                let name = args
                    .next()
                    .ok_or_else(|| DynError::from("--name の後に宣言の名前がありません。"))?;
                name_opt = Some(name);
            }
            "--crate" => within_one_crate = true,
            "--edit" => print_edit = true,
            "-o" | "--out" => {
                let output_path = args
                    .next()
                    .ok_or_else(|| DynError::from("-o/--out の後にファイル名がありません。"))?;
                output_path_opt = Some(output_path);
            }
            _ => input.accept(arg)?,
        }
    }

    let name = name_opt.ok_or_else(|| DynError::from("--name が指定されていません。"))?;
    let (source_path, src) = input.read()?;

    let output = match make_public(doc, &source_path, &src, &name, within_one_crate)? {
        Some(it) => it,
        None => {
            return Err(format!(
                "'{}' を公開する修正はありません。(見つからないか、すでに可視性が指定されているか、編集できない宣言です)",
                name
            )
            .into())
        }
    };
    log::info!("{}", output.title);

    let text = if print_edit {
        format!(
            "{}\n{} {:?}\n",
            output.title,
            output.edit.range.start(),
            output.edit.new_text
        )
    } else {
        output.text
    };

    write_output(output_path_opt, text)
}

pub(crate) fn exec_fix_cmd(args: Args, help: bool) -> Result<(), DynError> {
    if help {
        write_fix_help();
        return Ok(());
    }

    print!("{}", do_exec_fix_cmd(Doc::new(1), args)?);
    Ok(())
}
