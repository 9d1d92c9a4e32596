use super::outline::{collect_outline, matches_path, symbol_name, OutlineItem};
use crate::{
    fixes::{MakePublicFix, TextEdit},
    project::{Package, Workspace},
    source::Doc,
    syntax::{visibility_of, PElement, PNode, PNodeJson, PTree},
    utils::DebugWith,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ドキュメントとして受け取るデータ
#[derive(Serialize, Deserialize)]
pub(crate) struct DocInput {
    #[serde(default)]
    pub(crate) package: Option<Package>,
    pub(crate) tree: PNodeJson,
}

struct DocData {
    version: i64,
    tree: PTree,
}

/// ホスト (エディターや CLI) に機能を提供するもの
#[derive(Default)]
pub struct LangService {
    docs: HashMap<Doc, DocData>,
    workspace: Workspace,
}

impl LangService {
    pub fn new() -> Self {
        LangService::default()
    }

    pub(crate) fn open_doc(&mut self, doc: Doc, version: i64, tree: PTree) {
        log::trace!("open {:?} v{}", doc, version);
        self.docs.insert(doc, DocData { version, tree });
    }

    /// JSON で表されたドキュメント (パッケージと構文木) を開く。
    pub fn open_json(&mut self, doc: Doc, version: i64, json: &str) -> Result<(), serde_json::Error> {
        let input: DocInput = serde_json::from_str(json)?;
        let tree = PTree::from_node_json(&input.tree)?;
        self.open_doc(doc, version, tree);

        if let Some(package) = input.package {
            self.set_package(doc, package);
        }
        Ok(())
    }

    pub fn close_doc(&mut self, doc: Doc) {
        self.docs.remove(&doc);
        self.workspace.detach(doc);
    }

    /// ドキュメントが属するパッケージを設定する。
    pub fn set_package(&mut self, doc: Doc, package: Package) {
        let id = self.workspace.add_package(package);
        self.workspace.attach(doc, id);
    }

    pub fn doc_version(&self, doc: Doc) -> Option<i64> {
        self.docs.get(&doc).map(|data| data.version)
    }

    pub fn doc_text(&self, doc: Doc) -> Option<String> {
        self.docs.get(&doc).map(|data| data.tree.text())
    }

    /// 構文木をデバッグ用の形式で出力する。
    pub fn dump_syntax(&self, doc: Doc) -> Option<String> {
        let tree = &self.docs.get(&doc)?.tree;
        Some(format!("{:#?}", DebugWith::new(&tree.root, tree)))
    }

    /// 構文木を JSON で出力する。
    pub fn doc_json(&self, doc: Doc) -> Option<String> {
        let tree = &self.docs.get(&doc)?.tree;
        match tree.to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                log::error!("couldn't serialize {:?} ({:?})", doc, err);
                None
            }
        }
    }

    /// 名前 (`foo` や `S::x` のようなパス) で宣言を探す。複数あれば先頭にあるもの。
    pub(crate) fn find_decl(&self, doc: Doc, name: &str) -> Option<PElement> {
        let tree = &self.docs.get(&doc)?.tree;
        let segments = name.split("::").map(str::trim).collect::<Vec<_>>();

        tree.descendants(tree.root).into_iter().find(|&element| {
            element.kind(&tree.elements).is_visible_decl() && matches_path(tree, element, &segments)
        })
    }

    /// 宣言を公開する修正を求める。提示できなければ None
    pub fn make_public(
        &self,
        doc: Doc,
        name: &str,
        within_one_crate: bool,
    ) -> Option<MakePublicFix> {
        let decl = self.find_decl(doc, name)?;
        let tree = &self.docs.get(&doc)?.tree;
        let element_name_opt = symbol_name(tree, decl);

        MakePublicFix::create_if_compatible(
            tree,
            decl,
            element_name_opt.as_deref(),
            within_one_crate,
            self.workspace.origin_of(doc),
        )
    }

    /// 修正を適用する。編集の対象となるバージョンと、編集内容を返す。
    pub fn apply_fix(&mut self, doc: Doc, fix: &MakePublicFix) -> Option<(i64, TextEdit)> {
        let data = self.docs.get_mut(&doc)?;

        let decl = fix.decl();
        if !data.tree.elements.has(decl) || data.tree.offset_of(PNode::Element(decl)).is_none() {
            log::warn!("fix {:?} doesn't belong to {:?}", fix.text(), doc);
            return None;
        }
        if !visibility_of(&data.tree, decl).is_private() {
            log::warn!("fix {:?} is already applied", fix.text());
            return None;
        }

        let edit = fix.invoke(&mut data.tree)?;
        let version = data.version;
        data.version += 1;
        Some((version, edit))
    }

    pub fn outline(&self, doc: Doc) -> Vec<OutlineItem> {
        match self.docs.get(&doc) {
            Some(data) => collect_outline(&data.tree, self.workspace.origin_of(doc)),
            None => vec![],
        }
    }
}
