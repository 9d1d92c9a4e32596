use super::*;
use crate::utils::{VecArena, VecArenaId};
use serde::{Deserialize, Serialize};

/// 構文要素の種類
///
/// 宣言の頭部 (属性、可視性、修飾子、名前) は細かく分かれている。
/// 型や式の中身には立ち入らないので、`Ty` や `Block` はトークンを並べたものにすぎない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub(crate) enum PElementKind {
    SourceFile,

    // 宣言の一部
    /// 外部属性 (`#[...]`)
    Attr,
    /// 可視性 (`pub`, `pub(crate)` など)
    Vis,
    /// 呼び出し規約の指定 (`extern "C"`)
    ExternAbi,
    /// 宣言の名前。名前識別子 (name identifier) でもある。
    Name,
    ParamList,
    Param,
    SelfParam,
    RetType,
    Ty,
    Block,
    NamedFieldList,
    TupleFieldList,
    VariantList,
    /// トレイトや impl の本体 (`{ ... }`)
    AssocItemList,

    // 宣言
    FnItem,
    StructItem,
    EnumItem,
    TraitItem,
    ImplItem,
    ConstItem,
    StaticItem,
    TypeAlias,
    ModItem,
    NamedFieldDecl,
    TupleFieldDecl,
    EnumVariant,
}

impl PElementKind {
    /// 可視性を持ちうる宣言か？
    pub(crate) fn is_visible_decl(self) -> bool {
        match self {
            PElementKind::FnItem
            | PElementKind::StructItem
            | PElementKind::EnumItem
            | PElementKind::TraitItem
            | PElementKind::ConstItem
            | PElementKind::StaticItem
            | PElementKind::TypeAlias
            | PElementKind::ModItem
            | PElementKind::NamedFieldDecl
            | PElementKind::TupleFieldDecl
            | PElementKind::EnumVariant => true,
            _ => false,
        }
    }
}

pub(crate) struct PElementTag;

/// 構文要素 (構文木の非終端ノード)
pub(crate) type PElement = VecArenaId<PElementTag>;

pub(crate) type PElementArena = VecArena<PElementTag, PElementData>;

/// 構文要素のデータ
#[derive(Clone, Debug)]
pub(crate) struct PElementData {
    kind: PElementKind,
    children: Vec<PNode>,
    parent_opt: Option<PElement>,
}

impl PElementData {
    pub(crate) fn new(kind: PElementKind, children: Vec<PNode>) -> Self {
        PElementData {
            kind,
            children,
            parent_opt: None,
        }
    }

    pub(crate) fn kind(&self) -> PElementKind {
        self.kind
    }

    pub(crate) fn children(&self) -> &[PNode] {
        &self.children
    }

    pub(crate) fn parent(&self) -> Option<PElement> {
        self.parent_opt
    }

    pub(super) fn children_mut(&mut self) -> &mut Vec<PNode> {
        &mut self.children
    }

    pub(super) fn set_parent(&mut self, parent_opt: Option<PElement>) {
        self.parent_opt = parent_opt;
    }
}

impl PElement {
    pub(crate) fn kind(self, elements: &PElementArena) -> PElementKind {
        elements[self].kind()
    }
}
