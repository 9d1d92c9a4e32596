//! 外部 (CLI など) に公開する API

pub use crate::{
    fixes::{MakePublicFix, TextEdit},
    lang_service::{LangService, OutlineItem},
    project::{Package, PackageOrigin},
    source::{Doc, TPos, TRange},
    symbols::{Presentation, PresentationFlags, SymbolKind, VisibilityMark},
    syntax::{Vis, VisRestriction},
};
use std::{fmt::Write as _, path::Path};

/// ドキュメントを1つだけ開いた LangService を作る。
///
/// `doc` はログにパスを出すためのもの。並列に呼ぶときは呼び出しごとに別の値を渡すこと。
fn open(doc: Doc, source_path: &Path, input: &str) -> Result<LangService, serde_json::Error> {
    Doc::set_path(doc, source_path);

    let mut ls = LangService::new();
    ls.open_json(doc, 1, input)?;
    Ok(ls)
}

pub struct MakePublicOutput {
    /// 修正の表題
    pub title: String,
    pub edit: TextEdit,
    /// 修正後のテキスト
    pub text: String,
}

/// 入力 (JSON) に含まれる宣言に make public の修正を適用する。
/// 修正を提示できないときは `Ok(None)` を返す。
pub fn make_public(
    doc: Doc,
    source_path: &Path,
    input: &str,
    name: &str,
    within_one_crate: bool,
) -> Result<Option<MakePublicOutput>, serde_json::Error> {
    let mut ls = open(doc, source_path, input)?;

    let fix = match ls.make_public(doc, name, within_one_crate) {
        Some(it) => it,
        None => return Ok(None),
    };

    let output = ls
        .apply_fix(doc, &fix)
        .and_then(|(_, edit)| Some((edit, ls.doc_text(doc)?)))
        .map(|(edit, text)| MakePublicOutput {
            title: fix.text().to_string(),
            edit,
            text,
        });
    Ok(output)
}

/// アウトラインを1行1項目のテキストにする。
///
/// ```text
/// impl S  1:1
///   method new(x: i32)  1:10  [static private fixable]
/// ```
pub fn render_outline(items: &[OutlineItem]) -> String {
    let mut out = String::new();

    for item in items {
        let mut marks = vec![];
        if item.presentation.static_mark {
            marks.push("static");
        }
        match item.presentation.visibility_mark_opt {
            Some(VisibilityMark::Public) => marks.push("public"),
            Some(VisibilityMark::Private) => marks.push("private"),
            None => {}
        }
        if item.fixable {
            marks.push("fixable");
        }

        write!(
            out,
            "{:indent$}{} {}",
            "",
            item.presentation.kind.as_str(),
            item.name,
            indent = item.depth * 2
        )
        .ok();
        if item.presentation.kind == SymbolKind::Method {
            write!(out, "({})", item.declarations.join(", ")).ok();
        }
        write!(out, "  {}", item.pos).ok();
        if !marks.is_empty() {
            write!(out, "  [{}]", marks.join(" ")).ok();
        }
        out.push('\n');
    }

    out
}

pub fn outline(doc: Doc, source_path: &Path, input: &str) -> Result<String, serde_json::Error> {
    let ls = open(doc, source_path, input)?;
    Ok(render_outline(&ls.outline(doc)))
}

pub struct SyntaxDump {
    /// 構文木のデバッグ表示
    pub tree: String,
    pub text: String,
}

pub fn dump_syntax(
    doc: Doc,
    source_path: &Path,
    input: &str,
) -> Result<SyntaxDump, serde_json::Error> {
    let ls = open(doc, source_path, input)?;
    Ok(SyntaxDump {
        tree: ls.dump_syntax(doc).unwrap_or_default(),
        text: ls.doc_text(doc).unwrap_or_default(),
    })
}
