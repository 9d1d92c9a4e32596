//! 構文木
//!
//! 構文解析は行わない。構文木は外部の構文解析器から JSON で受け取るか、
//! `PTreeBuilder` で組み立てる。

mod p_element;
mod p_factory;
mod p_node;
mod p_token;
mod p_tree;
mod p_tree_builder;
mod p_vis;
mod token_kind;
mod tree_json;

pub(crate) use p_element::{PElement, PElementArena, PElementData, PElementKind};
pub(crate) use p_factory::{create_space, create_vis};
pub(crate) use p_node::{PNode, PNodeKind};
pub(crate) use p_token::{PToken, PTokens, TokenData};
pub(crate) use p_tree::PTree;
pub(crate) use p_tree_builder::PTreeBuilder;
pub(crate) use p_vis::{visibility_of, VisScope};
pub use p_vis::{Vis, VisRestriction};
pub(crate) use token_kind::TokenKind;
pub(crate) use tree_json::PNodeJson;
