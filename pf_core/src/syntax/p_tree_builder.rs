use super::*;

/// 構文木を前順に組み立てるもの。
///
/// 外部の構文解析器から受け取ったデータを構文木に変換するのに使う。
///
/// ```ignore
/// b.start(PElementKind::FnItem);
/// b.token(TokenKind::Fn, "fn");
/// ...
/// b.finish();
/// ```
#[derive(Default)]
pub(crate) struct PTreeBuilder {
    tokens: PTokens,
    elements: PElementArena,
    /// 組み立て中の要素の種類と子ノード
    stack: Vec<(PElementKind, Vec<PNode>)>,
    root_opt: Option<PElement>,
}

impl PTreeBuilder {
    pub(crate) fn new() -> Self {
        PTreeBuilder::default()
    }

    pub(crate) fn start(&mut self, kind: PElementKind) {
        assert!(self.root_opt.is_none(), "root element is already finished");
        self.stack.push((kind, vec![]));
    }

    pub(crate) fn token(&mut self, kind: TokenKind, text: &str) {
        let token = self.tokens.alloc(TokenData::new(kind, text.to_string()));

        match self.stack.last_mut() {
            Some((_, children)) => children.push(PNode::Token(token)),
            None => panic!("token {:?} outside of elements", kind),
        }
    }

    pub(crate) fn finish(&mut self) {
        let (kind, children) = match self.stack.pop() {
            Some(it) => it,
            None => panic!("finish without start"),
        };

        let element = self.elements.alloc(PElementData::new(kind, vec![]));
        for &child in &children {
            match child {
                PNode::Token(token) => self.tokens[token].set_parent(Some(element)),
                PNode::Element(child) => self.elements[child].set_parent(Some(element)),
            }
        }
        *self.elements[element].children_mut() = children;

        match self.stack.last_mut() {
            Some((_, siblings)) => siblings.push(PNode::Element(element)),
            None => self.root_opt = Some(element),
        }
    }

    pub(crate) fn build(self) -> PTree {
        assert!(self.stack.is_empty(), "unfinished elements: {}", self.stack.len());

        let root = match self.root_opt {
            Some(root) => root,
            None => panic!("empty tree"),
        };
        let tree = PTree::new(root, self.tokens, self.elements);
        tree.write_trace();
        tree
    }
}

/// テストで構文木を手早く書くためのもの
#[cfg(test)]
impl PTreeBuilder {
    pub(crate) fn keyword(&mut self, word: &str) {
        let kind = TokenKind::from_keyword(word).unwrap();
        self.token(kind, word);
    }

    pub(crate) fn punct(&mut self, text: &str) {
        let kind = TokenKind::from_punctuation(text).unwrap();
        self.token(kind, text);
    }

    pub(crate) fn ident(&mut self, text: &str) {
        self.token(TokenKind::Ident, text);
    }

    pub(crate) fn space(&mut self, text: &str) {
        self.token(TokenKind::Space, text);
    }

    pub(crate) fn comment(&mut self, text: &str) {
        self.token(TokenKind::Comment, text);
    }

    pub(crate) fn name(&mut self, text: &str) {
        self.start(PElementKind::Name);
        self.ident(text);
        self.finish();
    }

    /// `#[content]`
    pub(crate) fn attr(&mut self, content: &str) {
        self.start(PElementKind::Attr);
        self.punct("#");
        self.punct("[");
        self.token(TokenKind::Other, content);
        self.punct("]");
        self.finish();
    }

    /// `extern "abi"`
    pub(crate) fn extern_abi(&mut self, abi: &str) {
        self.start(PElementKind::ExternAbi);
        self.keyword("extern");
        self.space(" ");
        self.token(TokenKind::Str, &format!("{:?}", abi));
        self.finish();
    }

    pub(crate) fn empty_params(&mut self) {
        self.start(PElementKind::ParamList);
        self.punct("(");
        self.punct(")");
        self.finish();
    }

    pub(crate) fn empty_block(&mut self) {
        self.start(PElementKind::Block);
        self.punct("{");
        self.punct("}");
        self.finish();
    }

    /// 型 (識別子1つ)
    pub(crate) fn ty(&mut self, text: &str) {
        self.start(PElementKind::Ty);
        self.ident(text);
        self.finish();
    }
}
