use super::dyn_error::DynError;
use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
};

/// 入力ファイル (JSON) の指定
#[derive(Default)]
pub(crate) struct SourceInput {
    use_stdin: bool,
    source_path_opt: Option<String>,
}

impl SourceInput {
    /// 引数がファイル名か `-` なら受け取る。
    pub(crate) fn accept(&mut self, arg: String) -> Result<(), DynError> {
        if arg == "-" {
            self.use_stdin = true;
            return Ok(());
        }

        let old = self.source_path_opt.replace(arg);
        if old.is_some() {
            return Err("ファイル名を2つ以上、指定することはできません。".into());
        }
        Ok(())
    }

    /// 入力を読む。パスとテキストを返す。
    pub(crate) fn read(&self) -> Result<(PathBuf, String), DynError> {
        if self.use_stdin {
            let source_path = env::current_dir()?.join("STDIN.json");
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok((source_path, src))
        } else if let Some(source_path) = &self.source_path_opt {
            let source_path = PathBuf::from(source_path);
            let src = fs::read_to_string(&source_path)?;
            Ok((source_path, src))
        } else {
            Err("入力ファイルが指定されていません。".into())
        }
    }
}
