use super::*;
use std::fmt::{self, Debug, Formatter};

// -----------------------------------------------
// PNodeKind
// -----------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq)]
pub(crate) enum PNodeKind {
    Token(TokenKind),
    Element(PElementKind),
}

impl PNodeKind {
    pub(crate) fn is_trivia(self) -> bool {
        match self {
            PNodeKind::Token(kind) => kind.is_trivia(),
            PNodeKind::Element(_) => false,
        }
    }
}

impl Debug for PNodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PNodeKind::Token(inner) => Debug::fmt(inner, f),
            PNodeKind::Element(inner) => Debug::fmt(inner, f),
        }
    }
}

impl From<TokenKind> for PNodeKind {
    fn from(kind: TokenKind) -> Self {
        PNodeKind::Token(kind)
    }
}

impl From<PElementKind> for PNodeKind {
    fn from(kind: PElementKind) -> Self {
        PNodeKind::Element(kind)
    }
}

// -----------------------------------------------
// PNode
// -----------------------------------------------

/// 構文木のノード (構文要素またはトークン) のID
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum PNode {
    Token(PToken),
    Element(PElement),
}

impl PNode {
    pub(crate) fn as_element(self) -> Option<PElement> {
        match self {
            PNode::Element(element) => Some(element),
            PNode::Token(_) => None,
        }
    }

    pub(crate) fn as_token(self) -> Option<PToken> {
        match self {
            PNode::Token(token) => Some(token),
            PNode::Element(_) => None,
        }
    }
}

impl From<PToken> for PNode {
    fn from(token: PToken) -> Self {
        PNode::Token(token)
    }
}

impl From<PElement> for PNode {
    fn from(element: PElement) -> Self {
        PNode::Element(element)
    }
}

impl Debug for PNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PNode::Token(inner) => write!(f, "token#{:?}", inner),
            PNode::Element(inner) => write!(f, "element#{:?}", inner),
        }
    }
}
