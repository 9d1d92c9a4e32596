use super::*;

/// `pub(...)` の括弧の中身
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VisRestriction {
    /// `pub(crate)`
    Crate,
    /// `pub(super)`
    Super,
    /// `pub(self)`
    SelfMod,
    /// `pub(in path)`
    InPath(String),
}

/// Visibility. 可視性
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Vis {
    /// 可視性の指定なし
    Private,
    Restricted(VisRestriction),
    /// `pub`
    Public,
}

impl Vis {
    pub fn is_private(&self) -> bool {
        *self == Vis::Private
    }
}

/// 挿入する可視性の範囲
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum VisScope {
    /// `pub`
    Public,
    /// `pub(crate)`
    CrateRestricted,
}

impl VisScope {
    pub(crate) fn from_within_one_crate(within_one_crate: bool) -> Self {
        if within_one_crate {
            VisScope::CrateRestricted
        } else {
            VisScope::Public
        }
    }
}

/// 宣言の可視性を調べる。
///
/// `pub(self)` は意味としては非公開だが、すでに可視性の指定があるので `Restricted` とする。
pub(crate) fn visibility_of(tree: &PTree, decl: PElement) -> Vis {
    let vis = match tree.child_element(decl, PElementKind::Vis) {
        Some(it) => it,
        None => return Vis::Private,
    };

    let mut tokens = tree
        .children(vis)
        .iter()
        .filter_map(|child| child.as_token())
        .filter(|token| !token.kind(&tree.tokens).is_trivia())
        .skip_while(|token| token.kind(&tree.tokens) != TokenKind::LeftParen)
        .skip(1);

    let restriction = match tokens.next().map(|token| token.kind(&tree.tokens)) {
        None => return Vis::Public,
        Some(TokenKind::Crate) => VisRestriction::Crate,
        Some(TokenKind::Super) => VisRestriction::Super,
        Some(TokenKind::SelfLower) => VisRestriction::SelfMod,
        Some(TokenKind::In) => {
            let path = tokens
                .take_while(|token| token.kind(&tree.tokens) != TokenKind::RightParen)
                .map(|token| token.text(&tree.tokens))
                .collect::<String>();
            VisRestriction::InPath(path)
        }
        Some(kind) => {
            log::error!("unknown visibility restriction {:?}", kind);
            VisRestriction::InPath(String::new())
        }
    };
    Vis::Restricted(restriction)
}
