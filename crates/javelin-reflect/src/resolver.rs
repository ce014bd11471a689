use std::collections::HashMap;

use javelin_meta::ClassDecl;

/// Supplies class declarations the registry cannot derive on its own.
///
/// Invoked only on a cache miss, under the registry lock, for classes the
/// built-in core set does not cover. Returning `None` makes the requesting
/// operation fail with [`crate::TypeError::NotResolvable`]; the miss is not
/// cached, so a later attempt may succeed.
pub trait SymbolResolver: Send + Sync {
    fn resolve(&self, binary_name: &str) -> Option<ClassDecl>;
}

/// A resolver that knows nothing.
pub struct NoResolver;

impl SymbolResolver for NoResolver {
    fn resolve(&self, _binary_name: &str) -> Option<ClassDecl> {
        None
    }
}

/// In-memory resolver over a fixed declaration set.
#[derive(Default)]
pub struct MapResolver {
    classes: HashMap<String, ClassDecl>,
}

impl MapResolver {
    pub fn new() -> MapResolver {
        MapResolver::default()
    }

    pub fn insert(&mut self, decl: ClassDecl) -> &mut MapResolver {
        self.classes.insert(decl.binary_name.clone(), decl);
        self
    }

    pub fn from_declarations(decls: impl IntoIterator<Item = ClassDecl>) -> MapResolver {
        let mut resolver = MapResolver::new();
        for decl in decls {
            resolver.insert(decl);
        }
        resolver
    }
}

impl SymbolResolver for MapResolver {
    fn resolve(&self, binary_name: &str) -> Option<ClassDecl> {
        self.classes.get(binary_name).cloned()
    }
}
