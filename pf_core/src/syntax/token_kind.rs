use serde::{Deserialize, Serialize};

/// 字句の種類
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub(crate) enum TokenKind {
    // トリビア
    Space,
    Comment,

    Ident,
    Number,
    Str,
    /// 構文木の作り手が分類しなかった字句 (属性の中身など)
    Other,

    // キーワード
    Async,
    Const,
    Crate,
    Enum,
    Extern,
    Fn,
    For,
    Impl,
    In,
    Mod,
    Mut,
    Pub,
    /// `self`
    SelfLower,
    Static,
    Struct,
    Super,
    Trait,
    Type,
    Unsafe,
    Use,

    // 記号類
    And,
    Bang,
    Colon,
    ColonColon,
    Comma,
    Dot,
    Equal,
    Hash,
    LeftAngle,
    LeftBrace,
    LeftBracket,
    LeftParen,
    RightAngle,
    RightBrace,
    RightBracket,
    RightParen,
    RightSlimArrow,
    Semi,
    Star,
}

static KEYWORD_TABLE: &[(TokenKind, &str)] = &[
    (TokenKind::Async, "async"),
    (TokenKind::Const, "const"),
    (TokenKind::Crate, "crate"),
    (TokenKind::Enum, "enum"),
    (TokenKind::Extern, "extern"),
    (TokenKind::Fn, "fn"),
    (TokenKind::For, "for"),
    (TokenKind::Impl, "impl"),
    (TokenKind::In, "in"),
    (TokenKind::Mod, "mod"),
    (TokenKind::Mut, "mut"),
    (TokenKind::Pub, "pub"),
    (TokenKind::SelfLower, "self"),
    (TokenKind::Static, "static"),
    (TokenKind::Struct, "struct"),
    (TokenKind::Super, "super"),
    (TokenKind::Trait, "trait"),
    (TokenKind::Type, "type"),
    (TokenKind::Unsafe, "unsafe"),
    (TokenKind::Use, "use"),
];

static PUNCTUATION_TABLE: &[(TokenKind, &str)] = &[
    (TokenKind::And, "&"),
    (TokenKind::Bang, "!"),
    (TokenKind::Colon, ":"),
    (TokenKind::ColonColon, "::"),
    (TokenKind::Comma, ","),
    (TokenKind::Dot, "."),
    (TokenKind::Equal, "="),
    (TokenKind::Hash, "#"),
    (TokenKind::LeftAngle, "<"),
    (TokenKind::LeftBrace, "{"),
    (TokenKind::LeftBracket, "["),
    (TokenKind::LeftParen, "("),
    (TokenKind::RightAngle, ">"),
    (TokenKind::RightBrace, "}"),
    (TokenKind::RightBracket, "]"),
    (TokenKind::RightParen, ")"),
    (TokenKind::RightSlimArrow, "->"),
    (TokenKind::Semi, ";"),
    (TokenKind::Star, "*"),
];

#[cfg(test)]
fn lookup(table: &[(TokenKind, &str)], text: &str) -> Option<TokenKind> {
    table
        .iter()
        .find_map(|&(kind, word)| if word == text { Some(kind) } else { None })
}

impl TokenKind {
    /// キーワードの綴りから字句の種類を引く。
    #[cfg(test)]
    pub(crate) fn from_keyword(text: &str) -> Option<TokenKind> {
        lookup(KEYWORD_TABLE, text)
    }

    #[cfg(test)]
    pub(crate) fn from_punctuation(text: &str) -> Option<TokenKind> {
        lookup(PUNCTUATION_TABLE, text)
    }

    /// 綴りが固定されている字句なら、その綴り
    pub(crate) fn fixed_text(self) -> Option<&'static str> {
        KEYWORD_TABLE
            .iter()
            .chain(PUNCTUATION_TABLE)
            .find_map(|&(kind, word)| if kind == self { Some(word) } else { None })
    }

    /// 空白やコメント。兄弟をたどるときに読み飛ばされる。
    pub(crate) fn is_trivia(self) -> bool {
        match self {
            TokenKind::Space | TokenKind::Comment => true,
            _ => false,
        }
    }
}
