use super::*;
use crate::{
    source::TPos,
    utils::{DebugWith, DebugWithContext},
};
use std::fmt::{self, Debug, Formatter};

/// 構文木
///
/// 空白やコメントも含めて、テキストを完全に復元できる。(ロスレス)
/// 各ノードは親へのリンクを持つので、兄弟や親をたどれる。
pub(crate) struct PTree {
    /// ルート要素 (ふつうは `SourceFile`)
    pub(crate) root: PElement,
    pub(crate) tokens: PTokens,
    pub(crate) elements: PElementArena,
}

impl PTree {
    pub(crate) fn new(root: PElement, tokens: PTokens, elements: PElementArena) -> Self {
        PTree {
            root,
            tokens,
            elements,
        }
    }

    pub(crate) fn kind(&self, node: PNode) -> PNodeKind {
        match node {
            PNode::Token(token) => PNodeKind::Token(token.kind(&self.tokens)),
            PNode::Element(element) => PNodeKind::Element(element.kind(&self.elements)),
        }
    }

    pub(crate) fn parent(&self, node: PNode) -> Option<PElement> {
        match node {
            PNode::Token(token) => self.tokens[token].parent(),
            PNode::Element(element) => self.elements[element].parent(),
        }
    }

    pub(crate) fn children(&self, element: PElement) -> &[PNode] {
        self.elements[element].children()
    }

    /// 親要素と、親の子要素リストにおける位置
    fn index_in_parent(&self, node: PNode) -> Option<(PElement, usize)> {
        let parent = self.parent(node)?;
        match self.children(parent).iter().position(|&child| child == node) {
            Some(index) => Some((parent, index)),
            None => {
                log::error!("broken parent link {:?} -> {:?}", node, parent);
                None
            }
        }
    }

    pub(crate) fn prev_sibling(&self, node: PNode) -> Option<PNode> {
        let (parent, index) = self.index_in_parent(node)?;
        if index == 0 {
            return None;
        }
        Some(self.children(parent)[index - 1])
    }

    #[allow(unused)]
    pub(crate) fn next_sibling(&self, node: PNode) -> Option<PNode> {
        let (parent, index) = self.index_in_parent(node)?;
        self.children(parent).get(index + 1).copied()
    }

    /// 手前にある兄弟のうち、空白でもコメントでもない最初のもの
    pub(crate) fn prev_non_comment_sibling(&self, node: PNode) -> Option<PNode> {
        let mut current = self.prev_sibling(node)?;
        while self.kind(current).is_trivia() {
            current = self.prev_sibling(current)?;
        }
        Some(current)
    }

    /// 指定した種類の子要素のうち最初のもの
    pub(crate) fn child_element(&self, element: PElement, kind: PElementKind) -> Option<PElement> {
        self.children(element)
            .iter()
            .filter_map(|child| child.as_element())
            .find(|child| child.kind(&self.elements) == kind)
    }

    pub(crate) fn child_elements<'a>(
        &'a self,
        element: PElement,
        kind: PElementKind,
    ) -> impl Iterator<Item = PElement> + 'a {
        self.children(element)
            .iter()
            .filter_map(|child| child.as_element())
            .filter(move |child| child.kind(&self.elements) == kind)
    }

    /// 要素自身とその子孫の要素を前順で列挙する。
    pub(crate) fn descendants(&self, element: PElement) -> Vec<PElement> {
        let mut elements = vec![];
        let mut stack = vec![element];

        while let Some(element) = stack.pop() {
            elements.push(element);

            let children = self.children(element).iter().rev();
            stack.extend(children.filter_map(|child| child.as_element()));
        }

        elements
    }

    // -----------------------------------------------
    // 変更
    // -----------------------------------------------

    /// どこにも挿入されていないトークンを作る。
    pub(crate) fn alloc_token(&mut self, kind: TokenKind, text: String) -> PToken {
        self.tokens.alloc(TokenData::new(kind, text))
    }

    /// どこにも挿入されていない要素を作る。子ノードはこの要素に取り込まれる。
    pub(crate) fn alloc_element(&mut self, kind: PElementKind, children: Vec<PNode>) -> PElement {
        let element = self.elements.alloc(PElementData::new(kind, vec![]));
        for &child in &children {
            assert_eq!(self.parent(child), None, "{:?} already has a parent", child);
            self.set_parent(child, Some(element));
        }
        *element.of_mut(&mut self.elements).children_mut() = children;
        element
    }

    fn set_parent(&mut self, node: PNode, parent_opt: Option<PElement>) {
        match node {
            PNode::Token(token) => self.tokens[token].set_parent(parent_opt),
            PNode::Element(element) => self.elements[element].set_parent(parent_opt),
        }
    }

    /// `parent` の子ノードである `anchor` の直前に、`new_node` を挿入する。
    ///
    /// `new_node` は構文木から切り離されていなければいけない。
    pub(crate) fn insert_before(&mut self, parent: PElement, new_node: PNode, anchor: PNode) {
        assert_eq!(self.parent(new_node), None, "{:?} already has a parent", new_node);

        let index = match self.children(parent).iter().position(|&child| child == anchor) {
            Some(index) => index,
            None => panic!("{:?} is not a child of {:?}", anchor, parent),
        };

        self.elements[parent].children_mut().insert(index, new_node);
        self.set_parent(new_node, Some(parent));
    }

    // -----------------------------------------------
    // テキスト
    // -----------------------------------------------

    pub(crate) fn write_text(&self, node: PNode, out: &mut String) {
        match node {
            PNode::Token(token) => out.push_str(token.text(&self.tokens)),
            PNode::Element(element) => {
                for &child in self.children(element) {
                    self.write_text(child, out);
                }
            }
        }
    }

    pub(crate) fn node_text(&self, node: PNode) -> String {
        let mut out = String::new();
        self.write_text(node, &mut out);
        out
    }

    /// 構文木全体のテキスト
    pub(crate) fn text(&self) -> String {
        self.node_text(PNode::Element(self.root))
    }

    /// 空白とコメントを除いたテキスト。名前を比較するのに使う。
    pub(crate) fn non_trivia_text(&self, element: PElement) -> String {
        let mut out = String::new();
        for &child in self.children(element) {
            match child {
                PNode::Token(token) if token.kind(&self.tokens).is_trivia() => {}
                PNode::Token(token) => out.push_str(token.text(&self.tokens)),
                PNode::Element(element) => out += &self.non_trivia_text(element),
            }
        }
        out
    }

    /// ノードの開始位置。ノードがルートから到達できなければ None
    pub(crate) fn offset_of(&self, node: PNode) -> Option<TPos> {
        let mut pos = TPos::ZERO;
        if self.find_offset(PNode::Element(self.root), node, &mut pos) {
            Some(pos)
        } else {
            None
        }
    }

    fn find_offset(&self, current: PNode, target: PNode, pos: &mut TPos) -> bool {
        if current == target {
            return true;
        }

        match current {
            PNode::Token(token) => {
                *pos += TPos::from(token.text(&self.tokens));
                false
            }
            PNode::Element(element) => self
                .children(element)
                .iter()
                .any(|&child| self.find_offset(child, target, pos)),
        }
    }

    pub(crate) fn write_trace(&self) {
        log::trace!("SyntaxTree:\n{:#?}", DebugWith::new(&self.root, self));
    }
}

impl DebugWithContext<PTree> for PToken {
    fn fmt(&self, tree: &PTree, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.of(&tree.tokens), f)
    }
}

impl DebugWithContext<PTree> for PElement {
    fn fmt(&self, tree: &PTree, f: &mut Formatter<'_>) -> fmt::Result {
        let data = self.of(&tree.elements);
        write!(f, "{:?} ", data.kind())?;

        f.debug_list()
            .entries(
                data.children()
                    .iter()
                    .map(|child| DebugWith::new(child, tree)),
            )
            .finish()
    }
}

impl DebugWithContext<PTree> for PNode {
    fn fmt(&self, tree: &PTree, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PNode::Token(inner) => DebugWithContext::fmt(inner, tree, f),
            PNode::Element(inner) => DebugWithContext::fmt(inner, tree, f),
        }
    }
}

impl Debug for PTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        DebugWithContext::fmt(&self.root, self, f)
    }
}
