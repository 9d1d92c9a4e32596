//! 構文木に挿入するためのノードを作る。
//!
//! 作られたノードはどこにも挿入されていない状態で返る。

use super::*;

fn fixed_token(tree: &mut PTree, kind: TokenKind) -> PNode {
    let text = match kind.fixed_text() {
        Some(text) => text,
        None => unreachable!("{:?} has no fixed text", kind),
    };
    PNode::Token(tree.alloc_token(kind, text.to_string()))
}

/// 可視性 (`pub` または `pub(crate)`) の要素を作る。
pub(crate) fn create_vis(tree: &mut PTree, scope: VisScope) -> PElement {
    let children = match scope {
        VisScope::Public => vec![fixed_token(tree, TokenKind::Pub)],
        VisScope::CrateRestricted => vec![
            fixed_token(tree, TokenKind::Pub),
            fixed_token(tree, TokenKind::LeftParen),
            fixed_token(tree, TokenKind::Crate),
            fixed_token(tree, TokenKind::RightParen),
        ],
    };
    tree.alloc_element(PElementKind::Vis, children)
}

/// 区切りの空白
pub(crate) fn create_space(tree: &mut PTree) -> PToken {
    tree.alloc_token(TokenKind::Space, " ".to_string())
}
