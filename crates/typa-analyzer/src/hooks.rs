//! Extension hooks for plugin-defined type names.
//!
//! A hook registered for a fully-qualified name replaces ordinary resolution
//! of that name; whatever it returns is used as is.

use rustc_hash::FxHashMap;
use std::rc::Rc;
use typa_common::Provenance;
use typa_types::{ArgKind, Instance, Type, TypeList, UnboundType};

/// Types, kinds and names of a parsed callable argument list.
pub type CallableArgs = (Vec<Type>, Vec<ArgKind>, Vec<Option<String>>);

/// Analyzer services available to a hook.
pub trait TypeAnalyzerPluginInterface {
    /// Report an error at `at`.
    fn fail(&mut self, at: Provenance, message: String);

    /// Instance of a builtin class; missing arguments are filled with `Any`.
    fn named_type(&mut self, fullname: &str, args: Vec<Type>) -> Option<Instance>;

    /// Resolve `ty` as an argument of the hooked name.
    fn analyze_type(&mut self, ty: &Type) -> Type;

    /// Parse a `[A, Arg(B, 'b'), ...]` argument list.
    fn analyze_callable_args(&mut self, arglist: &TypeList) -> Option<CallableArgs>;
}

/// What a hook sees.
pub struct AnalyzeTypeContext<'a> {
    pub ty: &'a UnboundType,
    pub api: &'a mut dyn TypeAnalyzerPluginInterface,
}

pub type TypeAnalyzeHook = Rc<dyn Fn(&mut AnalyzeTypeContext<'_>) -> Type>;

/// Source of type-analysis hooks.
pub trait PluginRegistry {
    fn type_analyze_hook(&self, fullname: &str) -> Option<TypeAnalyzeHook>;
}

/// Registry with no hooks.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPlugins;

impl PluginRegistry for NoPlugins {
    fn type_analyze_hook(&self, _fullname: &str) -> Option<TypeAnalyzeHook> {
        None
    }
}

/// Hooks keyed by fully-qualified name.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: FxHashMap<String, TypeAnalyzeHook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        fullname: impl Into<String>,
        hook: impl Fn(&mut AnalyzeTypeContext<'_>) -> Type + 'static,
    ) {
        self.hooks.insert(fullname.into(), Rc::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl PluginRegistry for HookRegistry {
    fn type_analyze_hook(&self, fullname: &str) -> Option<TypeAnalyzeHook> {
        self.hooks.get(fullname).cloned()
    }
}
