//! パッケージとその出処
//!
//! パッケージのメタデータ (Cargo.toml など) は読まない。
//! ホストが分類済みのパッケージを渡し、ドキュメントがどのパッケージに属するかを登録する。

use crate::{
    source::Doc,
    utils::{VecArena, VecArenaId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// パッケージの出処
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageOrigin {
    /// 利用者自身のプロジェクト。編集できる。
    Workspace,
    /// 外部の依存パッケージ
    Dependency,
    /// 標準ライブラリ
    Stdlib,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub origin: PackageOrigin,
}

pub(crate) struct PackageTag;

pub(crate) type PackageId = VecArenaId<PackageTag>;

/// パッケージの集まりと、ドキュメントの所属
#[derive(Default)]
pub(crate) struct Workspace {
    packages: VecArena<PackageTag, Package>,
    doc_packages: HashMap<Doc, PackageId>,
}

impl Workspace {
    /// パッケージを追加する。同名のパッケージがあればそれを返す。
    pub(crate) fn add_package(&mut self, package: Package) -> PackageId {
        let existing_opt = self
            .packages
            .enumerate()
            .find(|(_, p)| p.name == package.name)
            .map(|(id, _)| id);

        match existing_opt {
            Some(id) => {
                if self.packages[id].origin != package.origin {
                    log::warn!(
                        "package {} origin changed {:?} -> {:?}",
                        package.name,
                        self.packages[id].origin,
                        package.origin
                    );
                    self.packages[id].origin = package.origin;
                }
                id
            }
            None => self.packages.alloc(package),
        }
    }

    pub(crate) fn attach(&mut self, doc: Doc, package: PackageId) {
        assert!(self.packages.has(package));
        self.doc_packages.insert(doc, package);
    }

    pub(crate) fn detach(&mut self, doc: Doc) {
        self.doc_packages.remove(&doc);
    }

    pub(crate) fn containing_package(&self, doc: Doc) -> Option<&Package> {
        let id = *self.doc_packages.get(&doc)?;
        self.packages.get(id)
    }

    pub(crate) fn origin_of(&self, doc: Doc) -> Option<PackageOrigin> {
        self.containing_package(doc).map(|package| package.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, origin: PackageOrigin) -> Package {
        Package {
            name: name.to_string(),
            origin,
        }
    }

    #[test]
    fn test_containing_package() {
        let mut workspace = Workspace::default();
        let app = workspace.add_package(package("app", PackageOrigin::Workspace));
        let serde = workspace.add_package(package("serde", PackageOrigin::Dependency));

        let (main, dep, orphan) = (Doc::new(0), Doc::new(1), Doc::new(2));
        workspace.attach(main, app);
        workspace.attach(dep, serde);

        assert_eq!(workspace.origin_of(main), Some(PackageOrigin::Workspace));
        assert_eq!(workspace.origin_of(dep), Some(PackageOrigin::Dependency));
        assert_eq!(workspace.origin_of(orphan), None);
        assert_eq!(workspace.containing_package(dep).unwrap().name, "serde");

        workspace.detach(main);
        assert_eq!(workspace.origin_of(main), None);
    }

    #[test]
    fn test_add_package_deduplicates_by_name() {
        let mut workspace = Workspace::default();
        let first = workspace.add_package(package("app", PackageOrigin::Dependency));
        let second = workspace.add_package(package("app", PackageOrigin::Workspace));
        assert_eq!(first, second);

        let doc = Doc::new(0);
        workspace.attach(doc, first);
        assert_eq!(workspace.origin_of(doc), Some(PackageOrigin::Workspace));
    }

    #[test]
    fn test_origin_json() {
        let package: Package =
            serde_json::from_str(r#"{ "name": "std", "origin": "stdlib" }"#).unwrap();
        assert_eq!(package, self::package("std", PackageOrigin::Stdlib));
    }
}
