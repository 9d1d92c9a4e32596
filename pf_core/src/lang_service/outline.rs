use crate::{
    fixes::MakePublicFix,
    project::PackageOrigin,
    source::TPos,
    symbols::{ImplMethod, Presentation, PresentationFlags, SymbolKind, VisibilityMark},
    syntax::{visibility_of, PElement, PElementKind, PNode, PTree, Vis},
};

/// アウトライン (ドキュメント内の宣言の一覧) の項目
#[derive(Clone, Debug)]
pub struct OutlineItem {
    pub name: String,
    /// 宣言の入れ子の深さ
    pub depth: usize,
    pub pos: TPos,
    pub vis: Vis,
    pub presentation: Presentation,
    /// メソッドのパラメータ (テキスト)
    pub declarations: Vec<String>,
    /// make public の修正を提示できるか
    pub fixable: bool,
}

/// 宣言の名前
///
/// impl ブロックは型の名前、タプル構造体のフィールドは位置 (`0`, `1`, ...) を名前とみなす。
pub(crate) fn symbol_name(tree: &PTree, decl: PElement) -> Option<String> {
    match decl.kind(&tree.elements) {
        PElementKind::ImplItem => tree
            .child_element(decl, PElementKind::Ty)
            .map(|ty| tree.non_trivia_text(ty)),
        PElementKind::TupleFieldDecl => {
            let parent = tree.parent(PNode::Element(decl))?;
            tree.child_elements(parent, PElementKind::TupleFieldDecl)
                .position(|field| field == decl)
                .map(|index| index.to_string())
        }
        _ => tree
            .child_element(decl, PElementKind::Name)
            .map(|name| tree.non_trivia_text(name)),
    }
}

/// 宣言がパス `Outer::inner` に一致するか。
///
/// 最後のセグメントが宣言自身の名前で、その手前のセグメントは外側の宣言の名前に内側から順に一致する。
pub(crate) fn matches_path(tree: &PTree, decl: PElement, segments: &[&str]) -> bool {
    let (last, outer) = match segments.split_last() {
        Some(it) => it,
        None => return false,
    };
    if symbol_name(tree, decl).as_deref() != Some(*last) {
        return false;
    }

    let mut current = decl;
    for segment in outer.iter().rev() {
        current = match enclosing_symbol(tree, current) {
            Some(it) => it,
            None => return false,
        };
        if symbol_name(tree, current).as_deref() != Some(*segment) {
            return false;
        }
    }
    true
}

fn enclosing_symbol(tree: &PTree, element: PElement) -> Option<PElement> {
    let mut current = element;
    loop {
        current = tree.parent(PNode::Element(current))?;
        if SymbolKind::from_element_kind(current.kind(&tree.elements)).is_some() {
            return Some(current);
        }
    }
}

fn presentation_of(tree: &PTree, decl: PElement, kind: SymbolKind, vis: &Vis) -> Presentation {
    let flags = PresentationFlags { visibility: true };
    if let Some(method) = ImplMethod::from_element(tree, decl) {
        return method.presentation(tree, flags);
    }

    let visibility_mark_opt = if kind == SymbolKind::Impl {
        None
    } else if vis.is_private() {
        Some(VisibilityMark::Private)
    } else {
        Some(VisibilityMark::Public)
    };
    Presentation {
        kind,
        static_mark: false,
        visibility_mark_opt,
    }
}

fn collect(
    tree: &PTree,
    element: PElement,
    depth: usize,
    origin_opt: Option<PackageOrigin>,
    items: &mut Vec<OutlineItem>,
) {
    for &child in tree.children(element) {
        let decl = match child.as_element() {
            Some(it) => it,
            None => continue,
        };
        let kind = match SymbolKind::from_element_kind(decl.kind(&tree.elements)) {
            Some(it) => it,
            None => {
                collect(tree, decl, depth, origin_opt, items);
                continue;
            }
        };

        let name = symbol_name(tree, decl).unwrap_or_default();
        let pos = match tree.offset_of(PNode::Element(decl)) {
            Some(it) => it,
            None => {
                log::error!("unreachable declaration {:?}", decl);
                continue;
            }
        };
        let vis = visibility_of(tree, decl);
        let presentation = presentation_of(tree, decl, kind, &vis);
        let declarations = match ImplMethod::from_element(tree, decl) {
            Some(method) => method
                .declarations(tree)
                .into_iter()
                .map(|param| tree.node_text(PNode::Element(param)).trim().to_string())
                .collect(),
            None => vec![],
        };
        let fixable =
            MakePublicFix::create_if_compatible(tree, decl, None, false, origin_opt).is_some();

        items.push(OutlineItem {
            name,
            depth,
            pos,
            vis,
            presentation,
            declarations,
            fixable,
        });

        collect(tree, decl, depth + 1, origin_opt, items);
    }
}

/// 宣言を前順に列挙する。
pub(crate) fn collect_outline(tree: &PTree, origin_opt: Option<PackageOrigin>) -> Vec<OutlineItem> {
    let mut items = vec![];
    collect(tree, tree.root, 0, origin_opt, &mut items);
    items
}
