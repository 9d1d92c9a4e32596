use super::resolve_anchor;
use crate::{
    project::PackageOrigin,
    source::TRange,
    syntax::{
        create_space, create_vis, visibility_of, PElement, PElementKind, PNode, PTree, VisScope,
    },
};

/// テキストの編集
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextEdit {
    pub range: TRange,
    pub new_text: String,
}

/// 非公開の宣言に可視性を付ける修正 (クイックフィックス)
#[derive(Clone, Debug)]
pub struct MakePublicFix {
    decl: PElement,
    text: String,
    within_one_crate: bool,
}

impl MakePublicFix {
    /// 修正を提示できるなら作る。
    ///
    /// - 可視性の指定がない (`pub(crate)` などはまだ対象外)
    /// - enum のバリアントでない (enum の可視性に従う)
    /// - トレイトのメンバーでない (トレイトの可視性に従う)
    /// - 利用者のワークスペースに属している (依存パッケージのコードは編集できない)
    pub(crate) fn create_if_compatible(
        tree: &PTree,
        decl: PElement,
        element_name_opt: Option<&str>,
        within_one_crate: bool,
        origin_opt: Option<PackageOrigin>,
    ) -> Option<MakePublicFix> {
        let kind = decl.kind(&tree.elements);
        let grandparent_opt = tree
            .parent(PNode::Element(decl))
            .and_then(|parent| tree.parent(PNode::Element(parent)));

        let compatible = kind.is_visible_decl()
            && visibility_of(tree, decl).is_private()
            && kind != PElementKind::EnumVariant
            && grandparent_opt.map(|it| it.kind(&tree.elements)) != Some(PElementKind::TraitItem)
            && origin_opt == Some(PackageOrigin::Workspace)
            && tree.child_element(decl, PElementKind::Name).is_some();
        if !compatible {
            log::debug!("make public is not available for {:?} ({:?})", kind, origin_opt);
            return None;
        }

        let text = match element_name_opt {
            Some(name) => format!("Make `{}` public", name),
            None => "Make public".to_string(),
        };
        Some(MakePublicFix {
            decl,
            text,
            within_one_crate,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn family_name(&self) -> &'static str {
        "Make public"
    }

    pub fn within_one_crate(&self) -> bool {
        self.within_one_crate
    }

    pub(crate) fn decl(&self) -> PElement {
        self.decl
    }

    /// 構文木に可視性を挿入する。挿入したテキストとその位置を返す。
    ///
    /// 宣言が名前を失っていたり、構文木から切り離されていたら何もしない。
    pub(crate) fn invoke(&self, tree: &mut PTree) -> Option<TextEdit> {
        let identifier = match tree.child_element(self.decl, PElementKind::Name) {
            Some(name) => PNode::Element(name),
            None => {
                log::error!("{:?} has no name identifier", self.decl);
                return None;
            }
        };

        let anchor = resolve_anchor(tree, identifier);
        let pos = tree.offset_of(anchor)?;
        debug_assert_eq!(tree.parent(anchor), Some(self.decl));

        let scope = VisScope::from_within_one_crate(self.within_one_crate);
        let new_text = insert_visibility(tree, anchor, scope)
            .into_iter()
            .map(|node| tree.node_text(node))
            .collect::<String>();

        log::debug!("inserted {:?} at {}", new_text, pos);
        Some(TextEdit {
            range: pos.to_empty_range(),
            new_text,
        })
    }
}

/// アンカーの直前に可視性と区切りの空白を挿入する。挿入したノードを返す。
///
/// 構文木は空白を明示的に持ち、整形はされない。
/// `extern "C"` やフィールド名の前に `pub(crate)` を置く場合も含めて、区切りは常に必要になる。
pub(crate) fn insert_visibility(tree: &mut PTree, anchor: PNode, scope: VisScope) -> Vec<PNode> {
    let parent = match tree.parent(anchor) {
        Some(parent) => parent,
        None => panic!("detached anchor {:?}", anchor),
    };

    let vis = PNode::Element(create_vis(tree, scope));
    tree.insert_before(parent, vis, anchor);

    let space = PNode::Token(create_space(tree));
    tree.insert_before(parent, space, anchor);

    vec![vis, space]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{PTreeBuilder, TokenKind};

    const WS: Option<PackageOrigin> = Some(PackageOrigin::Workspace);

    fn build(f: impl FnOnce(&mut PTreeBuilder)) -> PTree {
        let mut b = PTreeBuilder::new();
        b.start(PElementKind::SourceFile);
        f(&mut b);
        b.finish();
        b.build()
    }

    fn find(tree: &PTree, kind: PElementKind, name: &str) -> PElement {
        tree.descendants(tree.root)
            .into_iter()
            .find(|&element| {
                element.kind(&tree.elements) == kind
                    && tree
                        .child_element(element, PElementKind::Name)
                        .map_or(false, |it| tree.non_trivia_text(it) == name)
            })
            .unwrap()
    }

    /// 宣言に修正を適用して、テキストを返す。
    fn apply(mut tree: PTree, kind: PElementKind, name: &str, within_one_crate: bool) -> String {
        let decl = find(&tree, kind, name);
        let fix =
            MakePublicFix::create_if_compatible(&tree, decl, Some(name), within_one_crate, WS)
                .unwrap();
        fix.invoke(&mut tree).unwrap();
        tree.text()
    }

    /// `<prefix> fn foo() {}` (prefix はトークン列を組み立てる関数)
    fn fn_tree(prefix: impl FnOnce(&mut PTreeBuilder)) -> PTree {
        build(|b| {
            b.start(PElementKind::FnItem);
            prefix(b);
            b.keyword("fn");
            b.space(" ");
            b.name("foo");
            b.empty_params();
            b.space(" ");
            b.empty_block();
            b.finish();
        })
    }

    /// `extern "C" fn foo();`
    fn extern_fn_tree() -> PTree {
        build(|b| {
            b.start(PElementKind::FnItem);
            b.extern_abi("C");
            b.space(" ");
            b.keyword("fn");
            b.space(" ");
            b.name("foo");
            b.empty_params();
            b.punct(";");
            b.finish();
        })
    }

    /// `struct S { x: i32, pub y: i32 }`
    fn struct_tree() -> PTree {
        build(|b| {
            b.start(PElementKind::StructItem);
            b.keyword("struct");
            b.space(" ");
            b.name("S");
            b.space(" ");
            b.start(PElementKind::NamedFieldList);
            b.punct("{");
            b.space(" ");
            b.start(PElementKind::NamedFieldDecl);
            b.name("x");
            b.punct(":");
            b.space(" ");
            b.ty("i32");
            b.finish();
            b.punct(",");
            b.space(" ");
            b.start(PElementKind::NamedFieldDecl);
            b.start(PElementKind::Vis);
            b.keyword("pub");
            b.finish();
            b.space(" ");
            b.name("y");
            b.punct(":");
            b.space(" ");
            b.ty("i32");
            b.finish();
            b.space(" ");
            b.punct("}");
            b.finish();
            b.finish();
        })
    }

    /// `enum E { A }`
    fn enum_tree() -> PTree {
        build(|b| {
            b.start(PElementKind::EnumItem);
            b.keyword("enum");
            b.space(" ");
            b.name("E");
            b.space(" ");
            b.start(PElementKind::VariantList);
            b.punct("{");
            b.space(" ");
            b.start(PElementKind::EnumVariant);
            b.name("A");
            b.finish();
            b.space(" ");
            b.punct("}");
            b.finish();
            b.finish();
        })
    }

    /// `<keyword> T { fn foo() {} }` (keyword は trait または impl)
    fn assoc_fn_tree(owner_kind: PElementKind, keyword: &str) -> PTree {
        build(|b| {
            b.start(owner_kind);
            b.keyword(keyword);
            b.space(" ");
            if owner_kind == PElementKind::TraitItem {
                b.name("T");
            } else {
                b.ty("T");
            }
            b.space(" ");
            b.start(PElementKind::AssocItemList);
            b.punct("{");
            b.space(" ");
            b.start(PElementKind::FnItem);
            b.keyword("fn");
            b.space(" ");
            b.name("foo");
            b.empty_params();
            b.space(" ");
            b.empty_block();
            b.finish();
            b.space(" ");
            b.punct("}");
            b.finish();
            b.finish();
        })
    }

    // -----------------------------------------------
    // 挿入
    // -----------------------------------------------

    #[test]
    fn test_plain_fn() {
        let tree = fn_tree(|_| {});
        assert_eq!(apply(tree, PElementKind::FnItem, "foo", false), "pub fn foo() {}");

        let tree = fn_tree(|_| {});
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", true),
            "pub(crate) fn foo() {}"
        );
    }

    #[test]
    fn test_fn_with_attr() {
        let tree = fn_tree(|b| {
            b.attr("inline");
            b.space("\n");
        });
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", false),
            "#[inline]\npub fn foo() {}"
        );
    }

    #[test]
    fn test_fn_with_modifiers() {
        let tree = fn_tree(|b| {
            b.extern_abi("C");
            b.space(" ");
            b.keyword("unsafe");
            b.space(" ");
        });
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", false),
            r#"pub extern "C" unsafe fn foo() {}"#
        );
    }

    #[test]
    fn test_fn_with_attr_and_modifiers() {
        let tree = fn_tree(|b| {
            b.attr("inline");
            b.space("\n");
            b.keyword("unsafe");
            b.space(" ");
            b.keyword("const");
            b.space(" ");
        });
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", true),
            "#[inline]\npub(crate) unsafe const fn foo() {}"
        );
    }

    #[test]
    fn test_comments_stay_in_place() {
        let tree = fn_tree(|b| {
            b.comment("/// doc");
            b.space("\n");
            b.keyword("async");
            b.space(" ");
            b.comment("/* c */");
            b.space(" ");
        });
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", false),
            "/// doc\npub async /* c */ fn foo() {}"
        );
    }

    #[test]
    fn test_extern_fn_restricted() {
        let tree = extern_fn_tree();
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", true),
            r#"pub(crate) extern "C" fn foo();"#
        );
    }

    #[test]
    fn test_named_field_restricted() {
        let tree = struct_tree();
        assert_eq!(
            apply(tree, PElementKind::NamedFieldDecl, "x", true),
            "struct S { pub(crate) x: i32, pub y: i32 }"
        );
    }

    #[test]
    fn test_struct_item() {
        let tree = struct_tree();
        assert_eq!(
            apply(tree, PElementKind::StructItem, "S", false),
            "pub struct S { x: i32, pub y: i32 }"
        );
    }

    #[test]
    fn test_inherent_impl_method() {
        let tree = assoc_fn_tree(PElementKind::ImplItem, "impl");
        assert_eq!(
            apply(tree, PElementKind::FnItem, "foo", false),
            "impl T { pub fn foo() {} }"
        );
    }

    #[test]
    fn test_inserted_vis_is_classified() {
        let mut tree = extern_fn_tree();
        let decl = find(&tree, PElementKind::FnItem, "foo");
        let fix = MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), true, WS).unwrap();
        fix.invoke(&mut tree).unwrap();

        assert_eq!(
            visibility_of(&tree, decl),
            crate::syntax::Vis::Restricted(crate::syntax::VisRestriction::Crate)
        );

        // 2回目は提示されない。
        assert!(MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), true, WS).is_none());
    }

    #[test]
    fn test_text_edit() {
        let mut tree = fn_tree(|b| {
            b.attr("inline");
            b.space("\n");
            b.keyword("unsafe");
            b.space(" ");
        });
        let decl = find(&tree, PElementKind::FnItem, "foo");
        let fix = MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), true, WS).unwrap();
        let edit = fix.invoke(&mut tree).unwrap();

        assert_eq!(edit.new_text, "pub(crate) ");
        assert!(edit.range.is_empty());
        assert_eq!(edit.range.start().index(), "#[inline]\n".len());
        assert_eq!(
            (edit.range.start().row(), edit.range.start().column8()),
            (1, 0)
        );
    }

    #[test]
    fn test_insert_visibility_returns_inserted_nodes() {
        let mut tree = fn_tree(|_| {});
        let decl = find(&tree, PElementKind::FnItem, "foo");
        let name = PNode::Element(tree.child_element(decl, PElementKind::Name).unwrap());
        let anchor = resolve_anchor(&tree, name);

        let inserted = insert_visibility(&mut tree, anchor, VisScope::Public);
        assert_eq!(inserted.len(), 2);
        assert_eq!(tree.next_sibling(inserted[0]), Some(inserted[1]));
        assert_eq!(tree.next_sibling(inserted[1]), Some(anchor));
        assert_eq!(tree.kind(inserted[1]), crate::syntax::PNodeKind::Token(TokenKind::Space));
    }

    // -----------------------------------------------
    // 提示の条件
    // -----------------------------------------------

    #[test]
    fn test_text() {
        let tree = fn_tree(|_| {});
        let decl = find(&tree, PElementKind::FnItem, "foo");

        let fix = MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), false, WS).unwrap();
        assert_eq!(fix.text(), "Make `foo` public");
        assert_eq!(fix.family_name(), "Make public");
        assert!(!fix.within_one_crate());
        assert_eq!(fix.decl(), decl);

        let fix = MakePublicFix::create_if_compatible(&tree, decl, None, true, WS).unwrap();
        assert_eq!(fix.text(), "Make public");
        assert!(fix.within_one_crate());
    }

    #[test]
    fn test_unavailable_for_non_private() {
        let tree = struct_tree();
        let y = find(&tree, PElementKind::NamedFieldDecl, "y");
        for &within_one_crate in &[false, true] {
            assert!(
                MakePublicFix::create_if_compatible(&tree, y, Some("y"), within_one_crate, WS)
                    .is_none()
            );
        }

        let tree = fn_tree(|b| {
            b.start(PElementKind::Vis);
            b.keyword("pub");
            b.punct("(");
            b.keyword("crate");
            b.punct(")");
            b.finish();
            b.space(" ");
        });
        let decl = find(&tree, PElementKind::FnItem, "foo");
        assert!(MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), false, WS).is_none());
    }

    #[test]
    fn test_unavailable_for_enum_variant() {
        let tree = enum_tree();
        let variant = find(&tree, PElementKind::EnumVariant, "A");
        assert!(
            MakePublicFix::create_if_compatible(&tree, variant, Some("A"), false, WS).is_none()
        );

        // enum 自体は対象
        let e = find(&tree, PElementKind::EnumItem, "E");
        assert!(MakePublicFix::create_if_compatible(&tree, e, Some("E"), false, WS).is_some());
    }

    #[test]
    fn test_unavailable_for_trait_member() {
        let tree = assoc_fn_tree(PElementKind::TraitItem, "trait");
        let decl = find(&tree, PElementKind::FnItem, "foo");
        assert!(MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), false, WS).is_none());

        let trait_item = find(&tree, PElementKind::TraitItem, "T");
        assert!(
            MakePublicFix::create_if_compatible(&tree, trait_item, Some("T"), false, WS).is_some()
        );
    }

    #[test]
    fn test_unavailable_outside_workspace() {
        let tree = fn_tree(|_| {});
        let decl = find(&tree, PElementKind::FnItem, "foo");

        for &origin_opt in &[
            None,
            Some(PackageOrigin::Dependency),
            Some(PackageOrigin::Stdlib),
        ] {
            assert!(
                MakePublicFix::create_if_compatible(&tree, decl, Some("foo"), false, origin_opt)
                    .is_none()
            );
        }
    }

    #[test]
    fn test_unavailable_for_non_decl() {
        let tree = fn_tree(|_| {});
        let decl = find(&tree, PElementKind::FnItem, "foo");
        let params = tree.child_element(decl, PElementKind::ParamList).unwrap();
        assert!(MakePublicFix::create_if_compatible(&tree, params, None, false, WS).is_none());
    }

    #[test]
    fn test_unavailable_without_name() {
        // struct P(i32);
        let tree = build(|b| {
            b.start(PElementKind::StructItem);
            b.keyword("struct");
            b.space(" ");
            b.name("P");
            b.start(PElementKind::TupleFieldList);
            b.punct("(");
            b.start(PElementKind::TupleFieldDecl);
            b.ty("i32");
            b.finish();
            b.punct(")");
            b.finish();
            b.punct(";");
            b.finish();
        });
        let field = tree
            .descendants(tree.root)
            .into_iter()
            .find(|&it| it.kind(&tree.elements) == PElementKind::TupleFieldDecl)
            .unwrap();
        assert!(MakePublicFix::create_if_compatible(&tree, field, None, false, WS).is_none());
    }
}
