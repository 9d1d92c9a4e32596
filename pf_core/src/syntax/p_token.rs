use super::*;
use crate::utils::{VecArena, VecArenaId};
use std::fmt::{self, Debug, Formatter};

pub(crate) struct PTokenTag;

/// 構文木のトークン (終端ノード)
pub(crate) type PToken = VecArenaId<PTokenTag>;

pub(crate) type PTokens = VecArena<PTokenTag, TokenData>;

/// 字句データ
#[derive(Clone)]
pub(crate) struct TokenData {
    kind: TokenKind,
    text: String,
    /// 構文木に挿入されていないトークンは親を持たない。
    parent_opt: Option<PElement>,
}

impl TokenData {
    pub(crate) fn new(kind: TokenKind, text: String) -> Self {
        TokenData {
            kind,
            text,
            parent_opt: None,
        }
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn parent(&self) -> Option<PElement> {
        self.parent_opt
    }

    pub(super) fn set_parent(&mut self, parent_opt: Option<PElement>) {
        self.parent_opt = parent_opt;
    }
}

impl PToken {
    pub(crate) fn kind(self, tokens: &PTokens) -> TokenKind {
        tokens[self].kind()
    }

    pub(crate) fn text(self, tokens: &PTokens) -> &str {
        tokens[self].text()
    }
}

impl Debug for TokenData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TokenKind::Space
            | TokenKind::Comment
            | TokenKind::Other
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Ident => write!(f, "{:?}", self.text()),
            _ => write!(f, "{:?}", self.kind()),
        }
    }
}
