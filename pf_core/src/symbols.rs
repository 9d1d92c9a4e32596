//! 宣言の表示に使う情報 (アウトラインなど)

use crate::syntax::{visibility_of, PElement, PElementKind, PNode, PTree, Vis};

/// シンボルの種類
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SymbolKind {
    Function,
    /// impl ブロックの中の関数
    Method,
    Struct,
    Enum,
    Trait,
    Impl,
    Const,
    Static,
    TypeAlias,
    Mod,
    Field,
    Variant,
}

impl SymbolKind {
    pub(crate) fn from_element_kind(kind: PElementKind) -> Option<SymbolKind> {
        let it = match kind {
            PElementKind::FnItem => SymbolKind::Function,
            PElementKind::StructItem => SymbolKind::Struct,
            PElementKind::EnumItem => SymbolKind::Enum,
            PElementKind::TraitItem => SymbolKind::Trait,
            PElementKind::ImplItem => SymbolKind::Impl,
            PElementKind::ConstItem => SymbolKind::Const,
            PElementKind::StaticItem => SymbolKind::Static,
            PElementKind::TypeAlias => SymbolKind::TypeAlias,
            PElementKind::ModItem => SymbolKind::Mod,
            PElementKind::NamedFieldDecl | PElementKind::TupleFieldDecl => SymbolKind::Field,
            PElementKind::EnumVariant => SymbolKind::Variant,
            _ => return None,
        };
        Some(it)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Function => "fn",
            SymbolKind::Method => "method",
            SymbolKind::Struct => "struct",
            SymbolKind::Enum => "enum",
            SymbolKind::Trait => "trait",
            SymbolKind::Impl => "impl",
            SymbolKind::Const => "const",
            SymbolKind::Static => "static",
            SymbolKind::TypeAlias => "type",
            SymbolKind::Mod => "mod",
            SymbolKind::Field => "field",
            SymbolKind::Variant => "variant",
        }
    }
}

/// 表示する印の指定
#[derive(Copy, Clone, Debug, Default)]
pub struct PresentationFlags {
    /// 可視性の印を付けるか
    pub visibility: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VisibilityMark {
    Public,
    Private,
}

/// シンボルの表示。アイコンは描画せず、アイコンに付ける印だけを決める。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Presentation {
    pub kind: SymbolKind,
    pub static_mark: bool,
    pub visibility_mark_opt: Option<VisibilityMark>,
}

/// impl ブロックの中にある関数
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct ImplMethod {
    element: PElement,
}

impl ImplMethod {
    pub(crate) fn from_element(tree: &PTree, element: PElement) -> Option<ImplMethod> {
        if element.kind(&tree.elements) != PElementKind::FnItem {
            return None;
        }

        let owner = tree
            .parent(PNode::Element(element))
            .filter(|parent| parent.kind(&tree.elements) == PElementKind::AssocItemList)
            .and_then(|parent| tree.parent(PNode::Element(parent)))?;
        if owner.kind(&tree.elements) != PElementKind::ImplItem {
            return None;
        }

        Some(ImplMethod { element })
    }

    fn param_list(self, tree: &PTree) -> Option<PElement> {
        tree.child_element(self.element, PElementKind::ParamList)
    }

    /// 宣言されるもの (パラメータ)。self パラメータは含まない。
    pub(crate) fn declarations(self, tree: &PTree) -> Vec<PElement> {
        match self.param_list(tree) {
            Some(params) => tree.child_elements(params, PElementKind::Param).collect(),
            None => vec![],
        }
    }

    /// 可視性の指定があれば公開とみなす。(`pub(crate)` なども含む)
    pub(crate) fn is_public(self, tree: &PTree) -> bool {
        visibility_of(tree, self.element) != Vis::Private
    }

    /// self パラメータを持たない関数 (関連関数)
    pub(crate) fn is_static(self, tree: &PTree) -> bool {
        self.param_list(tree)
            .and_then(|params| tree.child_element(params, PElementKind::SelfParam))
            .is_none()
    }

    pub(crate) fn presentation(self, tree: &PTree, flags: PresentationFlags) -> Presentation {
        let visibility_mark_opt = if flags.visibility {
            Some(if self.is_public(tree) {
                VisibilityMark::Public
            } else {
                VisibilityMark::Private
            })
        } else {
            None
        };

        Presentation {
            kind: SymbolKind::Method,
            static_mark: self.is_static(tree),
            visibility_mark_opt,
        }
    }
}
