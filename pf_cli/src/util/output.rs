use super::dyn_error::DynError;
use std::fs;

/// 出力先のファイルが指定されていればテキストを書き込み、空文字列を返す。
/// 指定されていなければテキストをそのまま返す。(標準出力か batch の出力行になる。)
pub(crate) fn write_output(
    output_path_opt: Option<String>,
    text: String,
) -> Result<String, DynError> {
    match output_path_opt {
        Some(output_path) => {
            fs::write(output_path, text)?;
            Ok(String::new())
        }
        None => Ok(text),
    }
}
