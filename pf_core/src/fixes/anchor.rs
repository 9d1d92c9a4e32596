use crate::syntax::{PElementKind, PNode, PNodeKind, PTree};
use std::fmt::Debug;

/// 挿入位置の決定に必要な、構文木の読み取り操作
pub(crate) trait AnchorTree {
    type Node: Copy + Eq + Debug;

    /// 空白とコメントを読み飛ばした、直前の兄弟
    fn prev_non_comment_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn kind(&self, node: Self::Node) -> PNodeKind;
}

impl AnchorTree for PTree {
    type Node = PNode;

    fn prev_non_comment_sibling(&self, node: PNode) -> Option<PNode> {
        PTree::prev_non_comment_sibling(self, node)
    }

    fn parent(&self, node: PNode) -> Option<PNode> {
        PTree::parent(self, node).map(PNode::Element)
    }

    fn kind(&self, node: PNode) -> PNodeKind {
        PTree::kind(self, node)
    }
}

/// 宣言の名前識別子 `identifier` から、可視性を挿入すべき位置 (アンカー) を求める。
/// 可視性はアンカーの直前に挿入する。
///
/// `extern "C"`, `unsafe`, `const`, `async` などの修飾子が名前の前にあれば、
/// それらをまとめて後ろに回すため、アンカーを一番手前の修飾子まで戻す。
/// 属性や宣言の先頭に当たったら止まる。属性は可視性より前に残る。
///
/// ```text
/// #[inline] unsafe fn foo() {}
///           ^ anchor
/// ```
///
/// 識別子は構文木に接続されていなければいけない。
pub(crate) fn resolve_anchor<T: AnchorTree>(tree: &T, identifier: T::Node) -> T::Node {
    debug_assert!(tree.parent(identifier).is_some(), "detached {:?}", identifier);

    let mut anchor = identifier;
    loop {
        match tree.prev_non_comment_sibling(anchor) {
            None => break,
            Some(prev) if tree.kind(prev) == PNodeKind::Element(PElementKind::Attr) => break,
            Some(prev) => {
                log::trace!("anchor moves back over {:?}", tree.kind(prev));
                anchor = prev;
            }
        }
    }
    anchor
}
