//! In-memory symbol table and pass loop.
//!
//! `SymbolTable` is a small reference implementation of [`SemanticApi`] for
//! hosts without a full semantic analyzer (and for tests). `SemanticPass`
//! re-runs a unit of work until it stops asking for another pass, marking
//! the last permitted pass as final.

use crate::api::{
    PlaceholderNode, SemanticApi, SymbolNode, SymbolTableNode, TypeAlias, TypeVarExpr, VarNode,
};
use crate::outcome::PassStatus;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::debug;
use typa_common::limits::MAX_SEMANAL_PASSES;
use typa_types::{ClassInfo, Type};

// =============================================================================
// SymbolTable
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Module whose names resolve unqualified.
    module: String,
    /// Every symbol, keyed by fully-qualified name.
    symbols: FxHashMap<String, SymbolTableNode>,
    /// Local names bound by imports: local name -> fully-qualified name.
    imports: FxHashMap<String, String>,
    incomplete_namespaces: FxHashSet<String>,
    final_iteration: bool,
}

impl SymbolTable {
    /// Empty table for analyzing `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    /// Table pre-populated with the builtin classes and the special-form
    /// vocabulary of `builtins`, `typing`, `typing_extensions`,
    /// `mypy_extensions` and `collections`.
    pub fn with_prelude(module: impl Into<String>) -> Self {
        let mut table = Self::new(module);
        table.install_prelude();
        table
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn add(&mut self, node: SymbolTableNode) {
        self.symbols.insert(node.fullname.clone(), node);
    }

    pub fn add_class(&mut self, info: ClassInfo) -> Arc<ClassInfo> {
        let info = Arc::new(info);
        self.add(SymbolTableNode::new(SymbolNode::Class(Arc::clone(&info))));
        info
    }

    pub fn add_alias(&mut self, alias: TypeAlias) -> Arc<TypeAlias> {
        let alias = Arc::new(alias);
        self.add(SymbolTableNode::new(SymbolNode::Alias(Arc::clone(&alias))));
        alias
    }

    pub fn add_type_var(&mut self, expr: TypeVarExpr) -> Arc<TypeVarExpr> {
        let expr = Arc::new(expr);
        self.add(SymbolTableNode::new(SymbolNode::TypeVar(Arc::clone(&expr))));
        expr
    }

    pub fn add_var(&mut self, var: VarNode) -> Arc<VarNode> {
        let var = Arc::new(var);
        self.add(SymbolTableNode::new(SymbolNode::Var(Arc::clone(&var))));
        var
    }

    pub fn add_placeholder(&mut self, fullname: impl Into<String>, becomes_class: bool) {
        let node = PlaceholderNode {
            fullname: fullname.into(),
            becomes_class,
        };
        self.add(SymbolTableNode::new(SymbolNode::Placeholder(Arc::new(node))));
    }

    pub fn add_module(&mut self, fullname: impl Into<String>) {
        self.add(SymbolTableNode::new(SymbolNode::Module(fullname.into())));
    }

    pub fn add_function(&mut self, fullname: impl Into<String>) {
        self.add(SymbolTableNode::new(SymbolNode::Function(fullname.into())));
    }

    pub fn add_decorator(&mut self, fullname: impl Into<String>) {
        self.add(SymbolTableNode::new(SymbolNode::Decorator(fullname.into())));
    }

    /// Bind `local` in the current module to `fullname` (`from m import X as local`).
    pub fn import(&mut self, local: impl Into<String>, fullname: impl Into<String>) {
        self.imports.insert(local.into(), fullname.into());
    }

    /// `from module import a, b, ...`.
    pub fn import_from(&mut self, module: &str, names: &[&str]) {
        for name in names {
            self.import(*name, format!("{module}.{name}"));
        }
    }

    pub fn remove(&mut self, fullname: &str) -> Option<SymbolTableNode> {
        self.symbols.remove(fullname)
    }

    pub fn get(&self, fullname: &str) -> Option<&SymbolTableNode> {
        self.symbols.get(fullname)
    }

    pub fn class(&self, fullname: &str) -> Option<Arc<ClassInfo>> {
        match self.get(fullname)?.node.as_ref()? {
            SymbolNode::Class(info) => Some(Arc::clone(info)),
            _ => None,
        }
    }

    pub fn mark_incomplete(&mut self, namespace: impl Into<String>) {
        self.incomplete_namespaces.insert(namespace.into());
    }

    pub fn mark_complete(&mut self, namespace: &str) {
        self.incomplete_namespaces.remove(namespace);
    }

    pub fn set_final_iteration(&mut self, final_iteration: bool) {
        self.final_iteration = final_iteration;
    }

    fn install_prelude(&mut self) {
        for module in [
            "builtins",
            "typing",
            "typing_extensions",
            "mypy_extensions",
            "collections",
        ] {
            self.add_module(module);
        }

        let plain = [
            "builtins.object",
            "builtins.int",
            "builtins.str",
            "builtins.bytes",
            "builtins.float",
            "builtins.complex",
            "builtins.bool",
            "builtins.function",
            "builtins.type",
            "builtins.enumerate",
        ];
        for fullname in plain {
            self.add_class(ClassInfo::new(fullname));
        }
        let generic: [(&str, &[&str]); 10] = [
            ("builtins.tuple", &["T_co"]),
            ("builtins.list", &["T"]),
            ("builtins.dict", &["KT", "VT"]),
            ("builtins.set", &["T"]),
            ("builtins.frozenset", &["T_co"]),
            ("collections.deque", &["T"]),
            ("collections.defaultdict", &["KT", "VT"]),
            ("collections.Counter", &["T"]),
            ("collections.ChainMap", &["KT", "VT"]),
            ("mypy_extensions.FlexibleAlias", &["T", "U"]),
        ];
        for (fullname, type_vars) in generic {
            self.add_class(ClassInfo::generic(fullname, type_vars));
        }

        // Special forms are recognized by name; the node only has to exist.
        let special = [
            "builtins.None",
            "typing.Any",
            "typing.Union",
            "typing.Optional",
            "typing.Tuple",
            "typing.Callable",
            "typing.Type",
            "typing.ClassVar",
            "typing.NoReturn",
            "typing.Literal",
            "typing.Final",
            "typing_extensions.Literal",
            "typing_extensions.Final",
            "typing_extensions.Annotated",
            "mypy_extensions.NoReturn",
        ];
        for fullname in special {
            self.add_var(VarNode::new(fullname));
        }

        let aliases = [
            ("typing.List", "builtins.list"),
            ("typing.Dict", "builtins.dict"),
            ("typing.Set", "builtins.set"),
            ("typing.FrozenSet", "builtins.frozenset"),
            ("typing.Deque", "collections.deque"),
            ("typing.DefaultDict", "collections.defaultdict"),
            ("typing.Counter", "collections.Counter"),
            ("typing.ChainMap", "collections.ChainMap"),
        ];
        for (alias, target) in aliases {
            if let Some(info) = self.class(target) {
                let target = Type::instance(&info, Vec::new());
                self.add_alias(TypeAlias::bare(alias, target));
            }
        }

        for constructor in ["Arg", "DefaultArg", "NamedArg", "DefaultNamedArg", "VarArg", "KwArg"] {
            self.add_function(format!("mypy_extensions.{constructor}"));
        }
    }
}

impl SemanticApi for SymbolTable {
    fn lookup_qualified(&self, name: &str) -> Option<SymbolTableNode> {
        let (head, rest) = match name.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (name, None),
        };
        let imported = self.imports.get(head).map(|target| match rest {
            Some(rest) => format!("{target}.{rest}"),
            None => target.clone(),
        });
        let candidates = [
            imported,
            Some(format!("{}.{name}", self.module)),
            Some(format!("builtins.{name}")),
            Some(name.to_string()),
        ];
        candidates
            .into_iter()
            .flatten()
            .find_map(|fullname| self.symbols.get(&fullname).cloned())
    }

    fn lookup_fully_qualified(&self, fullname: &str) -> Option<SymbolTableNode> {
        self.symbols.get(fullname).cloned()
    }

    fn is_incomplete_namespace(&self, module: &str) -> bool {
        self.incomplete_namespaces.contains(module)
    }

    fn is_final_iteration(&self) -> bool {
        self.final_iteration
    }
}

// =============================================================================
// SemanticPass
// =============================================================================

/// Outcome of a pass loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassReport {
    /// Passes actually run.
    pub passes: u32,
    /// Status reported by the last pass.
    pub status: PassStatus,
}

/// Re-runs a unit of analysis until it completes or the pass limit is hit.
#[derive(Copy, Clone, Debug)]
pub struct SemanticPass {
    max_passes: u32,
}

impl Default for SemanticPass {
    fn default() -> Self {
        Self {
            max_passes: MAX_SEMANAL_PASSES,
        }
    }
}

impl SemanticPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_passes(max_passes: u32) -> Self {
        Self {
            max_passes: max_passes.max(1),
        }
    }

    pub const fn max_passes(&self) -> u32 {
        self.max_passes
    }

    /// Run `unit` (given the table and the 1-based pass number) until it
    /// reports [`PassStatus::Complete`]. The table is flagged as on its final
    /// iteration for the last permitted pass.
    pub fn run(
        &self,
        table: &mut SymbolTable,
        mut unit: impl FnMut(&mut SymbolTable, u32) -> PassStatus,
    ) -> PassReport {
        let mut status = PassStatus::Complete;
        for pass in 1..=self.max_passes {
            table.set_final_iteration(pass == self.max_passes);
            status = unit(table, pass);
            debug!(pass, ?status, "semantic pass finished");
            if status.is_complete() {
                table.set_final_iteration(false);
                return PassReport {
                    passes: pass,
                    status,
                };
            }
        }
        table.set_final_iteration(false);
        PassReport {
            passes: self.max_passes,
            status,
        }
    }
}

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod symbols_tests;
