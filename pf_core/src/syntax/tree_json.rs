//! 構文木の JSON 表現
//!
//! 外部の構文解析器は構文木をこの形式で渡す。
//!
//! - 要素: `{"kind": "FnItem", "children": [...]}`
//! - トークン: `{"token": "Ident", "text": "foo"}`
//!
//! キーワードや記号のように綴りが決まっているトークンは `text` を省略できる。
//! 省略しないときは決まった綴りと一致しなければならない。

use super::*;
use serde::{de::Error as _, Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum PNodeJson {
    Token {
        token: TokenKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Element {
        kind: PElementKind,
        #[serde(default)]
        children: Vec<PNodeJson>,
    },
}

fn build_node(b: &mut PTreeBuilder, node: &PNodeJson) -> Result<(), serde_json::Error> {
    match node {
        PNodeJson::Token { token, text } => {
            let text = match (text, token.fixed_text()) {
                (Some(text), Some(fixed)) if text.as_str() != fixed => {
                    return Err(serde_json::Error::custom(format!(
                        "token {:?} must be spelled {:?}, not {:?}",
                        token, fixed, text
                    )))
                }
                (Some(text), _) => text.as_str(),
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(serde_json::Error::custom(format!(
                        "token {:?} requires text",
                        token
                    )))
                }
            };
            b.token(*token, text);
        }
        PNodeJson::Element { kind, children } => {
            b.start(*kind);
            for child in children {
                build_node(b, child)?;
            }
            b.finish();
        }
    }
    Ok(())
}

impl PTree {
    pub(crate) fn from_node_json(root: &PNodeJson) -> Result<PTree, serde_json::Error> {
        if let PNodeJson::Token { token, .. } = root {
            return Err(serde_json::Error::custom(format!(
                "root must be an element, not token {:?}",
                token
            )));
        }

        let mut b = PTreeBuilder::new();
        build_node(&mut b, root)?;
        Ok(b.build())
    }

    #[cfg(test)]
    pub(crate) fn from_json(json: &str) -> Result<PTree, serde_json::Error> {
        let root: PNodeJson = serde_json::from_str(json)?;
        PTree::from_node_json(&root)
    }

    pub(crate) fn to_node_json(&self, node: PNode) -> PNodeJson {
        match node {
            PNode::Token(token) => PNodeJson::Token {
                token: token.kind(&self.tokens),
                text: Some(token.text(&self.tokens).to_string()),
            },
            PNode::Element(element) => PNodeJson::Element {
                kind: element.kind(&self.elements),
                children: self
                    .children(element)
                    .iter()
                    .map(|&child| self.to_node_json(child))
                    .collect(),
            },
        }
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_node_json(PNode::Element(self.root)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCT_JSON: &str = r#"{
        "kind": "SourceFile",
        "children": [
            {
                "kind": "StructItem",
                "children": [
                    { "token": "Struct" },
                    { "token": "Space", "text": " " },
                    { "kind": "Name", "children": [{ "token": "Ident", "text": "Point" }] },
                    { "token": "Space", "text": " " },
                    {
                        "kind": "NamedFieldList",
                        "children": [
                            { "token": "LeftBrace" },
                            { "token": "Space", "text": " " },
                            {
                                "kind": "NamedFieldDecl",
                                "children": [
                                    { "kind": "Name", "children": [{ "token": "Ident", "text": "x" }] },
                                    { "token": "Colon" },
                                    { "token": "Space", "text": " " },
                                    { "kind": "Ty", "children": [{ "token": "Ident", "text": "i32" }] }
                                ]
                            },
                            { "token": "Space", "text": " " },
                            { "token": "RightBrace" }
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let tree = PTree::from_json(STRUCT_JSON).unwrap();
        assert_eq!(tree.text(), "struct Point { x: i32 }");

        let field = tree
            .descendants(tree.root)
            .into_iter()
            .find(|element| element.kind(&tree.elements) == PElementKind::NamedFieldDecl)
            .unwrap();
        let name = tree.child_element(field, PElementKind::Name).unwrap();
        assert_eq!(tree.non_trivia_text(name), "x");
    }

    #[test]
    fn test_to_json_preserves_text() {
        let tree = PTree::from_json(STRUCT_JSON).unwrap();
        let json = tree.to_json().unwrap();
        let reloaded = PTree::from_json(&json).unwrap();
        assert_eq!(reloaded.text(), tree.text());
        assert_eq!(format!("{:?}", reloaded), format!("{:?}", tree));
    }

    #[test]
    fn test_token_without_text_is_error() {
        let json = r#"{ "kind": "SourceFile", "children": [{ "token": "Ident" }] }"#;
        let err = PTree::from_json(json).err().unwrap();
        assert!(err.to_string().contains("requires text"));
    }

    #[test]
    fn test_fixed_token_with_other_text_is_error() {
        let json = r#"{ "kind": "FnItem", "children": [{ "token": "Pub", "text": "fn" }] }"#;
        let err = PTree::from_json(json).err().unwrap();
        assert!(err.to_string().contains("must be spelled \"pub\""));

        // 同じ綴りなら書いてもよい。
        let json = r#"{ "kind": "FnItem", "children": [{ "token": "Pub", "text": "pub" }] }"#;
        assert_eq!(PTree::from_json(json).unwrap().text(), "pub");
    }

    #[test]
    fn test_root_token_is_error() {
        let json = r#"{ "token": "Fn" }"#;
        assert!(PTree::from_json(json).is_err());
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let json = r#"{ "kind": "Closure", "children": [] }"#;
        assert!(PTree::from_json(json).is_err());
    }
}
