//! Type-expression resolution.
//!
//! `TypeAnalyzer` turns an unresolved type expression into a canonical type.
//! It is a total `Type -> Type` transformation: synthetic forms are
//! eliminated, canonical forms pass through (re-resolving their children
//! where they can contain synthetic forms), and every error path yields an
//! `Any` plus a diagnostic.
//!
//! Forward references are the reason resolution can be provisional. A public
//! entry point returns a [`Resolution`] whose status tells the driver whether
//! it must run this unit again (`Deferred`) or whether the program merely is
//! not stable yet (`Incomplete`).
//!
//! The special-form, callable and literal rules live in sibling modules as
//! further `impl TypeAnalyzer` blocks.

use crate::alias::expand_type_alias;
use crate::api::{SemanticApi, SymbolNode, SymbolTableNode};
use crate::collector::infer_type_variables;
use crate::fixup::{fix_instance, get_omitted_any, no_subscript_builtin_alias, nongen_builtin};
use crate::flags::AnalyzerFlags;
use crate::hooks::{AnalyzeTypeContext, CallableArgs, PluginRegistry, TypeAnalyzerPluginInterface};
use crate::outcome::{AliasResolution, PassStatus, Resolution};
use crate::scope::TypeVarScope;
use indexmap::IndexSet;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, trace};
use typa_common::limits::MAX_TYPE_NESTING_DEPTH;
use typa_common::{DiagnosticSink, ErrorCode, Options, Provenance, codes, format_message, messages};
use typa_types::{
    AnyType, CallableType, ClassInfo, Instance, LiteralType, LiteralValue, PlaceholderType,
    RawExpressionType, RecordType, StarType, TupleType, Type, TypeList, TypeOfAny, TypeVarDef,
    TypeVarType, UnboundType, has_explicit_any, make_optional, make_type_type, make_union,
};

// =============================================================================
// Nesting
// =============================================================================

/// How deep inside another type's arguments the current expression sits.
///
/// Threaded by value through the recursion; 0 is the top level of a
/// declaration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nesting(u32);

impl Nesting {
    pub const TOP: Self = Self(0);

    pub const fn deeper(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub const fn level(self) -> u32 {
        self.0
    }

    pub const fn is_top(self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// TypeAnalyzer
// =============================================================================

pub struct TypeAnalyzer<'a> {
    pub(crate) api: &'a dyn SemanticApi,
    pub(crate) plugins: &'a dyn PluginRegistry,
    pub(crate) options: &'a Options,
    pub(crate) sink: &'a mut dyn DiagnosticSink,
    pub(crate) flags: AnalyzerFlags,
    /// Innermost type-variable frame.
    pub(crate) tvar_scope: Rc<TypeVarScope>,
    /// Aliases expanded so far, with their own dependencies.
    pub(crate) aliases_used: IndexSet<String>,
    /// Pass signal raised since the last public entry point returned.
    pending: PassStatus,
}

impl<'a> TypeAnalyzer<'a> {
    pub fn new(
        api: &'a dyn SemanticApi,
        plugins: &'a dyn PluginRegistry,
        options: &'a Options,
        sink: &'a mut dyn DiagnosticSink,
        tvar_scope: Rc<TypeVarScope>,
        flags: AnalyzerFlags,
    ) -> Self {
        Self {
            api,
            plugins,
            options,
            sink,
            flags,
            tvar_scope,
            aliases_used: IndexSet::new(),
            pending: PassStatus::Complete,
        }
    }

    // -------------------------------------------------------------------------
    // Public entry points
    // -------------------------------------------------------------------------

    /// Resolve `ty` as a top-level type expression.
    pub fn resolve(&mut self, ty: &Type) -> Resolution {
        let resolved = self.visit(ty, Nesting::TOP);
        self.finish(resolved)
    }

    /// Resolve a function signature, binding its type variables in a fresh
    /// frame. The signature's own argument and return types count as top
    /// level.
    pub fn analyze_signature(&mut self, callable: &CallableType) -> Resolution {
        let resolved = self.visit_callable_type(callable, Nesting::TOP, false);
        self.finish(resolved)
    }

    /// Run `f` with a fresh function frame pushed on the type-variable scope.
    ///
    /// The frame is popped when `f` returns.
    pub fn with_scope_frame<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let outer = Rc::clone(&self.tvar_scope);
        self.tvar_scope = Rc::new(outer.method_frame());
        let result = f(self);
        self.tvar_scope = outer;
        result
    }

    /// Bind the type variables of `callable` in a fresh frame, then run `f`
    /// with the bindings.
    pub fn with_function_scope<R>(
        &mut self,
        callable: &CallableType,
        f: impl FnOnce(&mut Self, Vec<TypeVarDef>) -> R,
    ) -> R {
        self.with_scope_frame(|this| {
            let defs = this.bind_function_type_variables(callable);
            f(this, defs)
        })
    }

    /// Bind the type variables `callable` quantifies over in the current
    /// frame.
    ///
    /// Declared variables are re-bound as is. Otherwise they are inferred
    /// from the signature, skipping those an enclosing scope already binds.
    pub fn bind_function_type_variables(&mut self, callable: &CallableType) -> Vec<TypeVarDef> {
        if !callable.variables.is_empty() {
            for var in &callable.variables {
                let declared = self.api.lookup_qualified(&var.name).and_then(|sym| match sym.node {
                    Some(SymbolNode::TypeVar(expr)) => Some(expr),
                    _ => None,
                });
                match declared {
                    Some(expr) => {
                        self.scope_mut().bind_new(&var.name, &expr);
                    }
                    None => self.scope_mut().bind_existing(var.clone()),
                }
            }
            return callable.variables.clone();
        }

        let inferred = infer_type_variables(self.api, &self.tvar_scope, callable);
        let mut defs = Vec::with_capacity(inferred.len());
        for (name, expr) in inferred {
            if self.is_defined_type_var(&name) {
                continue;
            }
            if !self.tvar_scope.allow_binding(&expr.fullname) {
                let message = format_message(messages::TVAR_BOUND_BY_OUTER, &[&name]);
                self.fail(callable.pos, message, None);
            }
            trace!(name = %name, fullname = %expr.fullname, "binding inferred type variable");
            defs.push(self.scope_mut().bind_new(&name, &expr));
        }
        defs
    }

    pub fn tvar_scope(&self) -> &Rc<TypeVarScope> {
        &self.tvar_scope
    }

    pub fn flags(&self) -> AnalyzerFlags {
        self.flags
    }

    /// Aliases expanded by this analyzer so far.
    pub fn aliases_used(&self) -> &IndexSet<String> {
        &self.aliases_used
    }

    fn finish(&mut self, ty: Type) -> Resolution {
        let status = std::mem::take(&mut self.pending);
        Resolution::new(ty, status)
    }

    // -------------------------------------------------------------------------
    // Shared helpers
    // -------------------------------------------------------------------------

    pub(crate) fn fail(&mut self, at: Provenance, message: String, code: Option<ErrorCode>) {
        self.sink.fail(at, message, code);
    }

    pub(crate) fn note(&mut self, at: Provenance, message: String) {
        self.sink.note(at, message);
    }

    /// Ask the driver to re-run the containing unit.
    pub(crate) fn defer(&mut self) {
        debug!("deferring unit: forward reference not materialized");
        self.pending = self.pending.merge(PassStatus::Deferred);
    }

    /// Tell the driver the program is not stable yet.
    pub(crate) fn record_incomplete_ref(&mut self) {
        debug!("recording incomplete reference");
        self.pending = self.pending.merge(PassStatus::Incomplete);
    }

    pub(crate) fn scope_mut(&mut self) -> &mut TypeVarScope {
        Rc::make_mut(&mut self.tvar_scope)
    }

    pub(crate) fn defining_alias(&self) -> bool {
        self.flags.contains(AnalyzerFlags::DEFINING_ALIAS)
    }

    fn allow_unbound_tvars(&self) -> bool {
        self.flags
            .intersects(AnalyzerFlags::ALLOW_UNBOUND_TVARS | AnalyzerFlags::DEFINING_ALIAS)
    }

    /// Omitted generic arguments are an error here.
    pub(crate) fn disallow_any_generics(&self) -> bool {
        self.options.disallow_any_generics && !self.flags.contains(AnalyzerFlags::TYPESHED_STUB)
    }

    /// Filler for the omitted arguments of the bare special form `t`.
    pub(crate) fn omitted_any(&mut self, t: &UnboundType) -> Type {
        let disallow_any = self.disallow_any_generics();
        get_omitted_any(disallow_any, &mut *self.sink, t.pos, None, || t.name.clone())
    }

    /// Instance of the class `fullname`, with missing arguments filled by
    /// `Any`. `None` when the class is not (yet) in the symbol table.
    pub(crate) fn named_instance(
        &self,
        fullname: &str,
        args: Vec<Type>,
        at: Provenance,
    ) -> Option<Instance> {
        let sym = self.api.lookup_fully_qualified(fullname)?;
        let Some(SymbolNode::Class(info)) = sym.node else {
            return None;
        };
        let args = if args.is_empty() {
            vec![Type::any(TypeOfAny::SpecialForm); info.arity()]
        } else {
            args
        };
        Some(Instance::at(info, args, at))
    }

    /// [`named_instance`](Self::named_instance) for a class the resolver
    /// cannot do without: a miss is an incomplete reference while builtins
    /// are still being processed, and an error otherwise.
    pub(crate) fn required_named_type(
        &mut self,
        fullname: &str,
        args: Vec<Type>,
        at: Provenance,
    ) -> Option<Instance> {
        let found = self.named_instance(fullname, args, at);
        if found.is_none() {
            let module = fullname.rsplit_once('.').map_or("builtins", |(module, _)| module);
            if self.api.is_incomplete_namespace(module) {
                self.record_incomplete_ref();
            } else {
                let name = typa_types::short_name(fullname);
                self.fail(at, format_message(messages::NAME_NOT_DEFINED, &[name]), None);
            }
        }
        found
    }

    fn is_defined_type_var(&self, name: &str) -> bool {
        self.api
            .lookup_qualified(name)
            .is_some_and(|sym| self.tvar_scope.get_binding(&sym.fullname).is_some())
    }

    // -------------------------------------------------------------------------
    // Recursion
    // -------------------------------------------------------------------------

    /// Resolve `ty` as an argument of the type at `level`.
    pub(crate) fn anal_type(&mut self, ty: &Type, level: Nesting) -> Type {
        self.visit(ty, level.deeper())
    }

    pub(crate) fn anal_array(&mut self, types: &[Type], level: Nesting) -> Vec<Type> {
        types.iter().map(|ty| self.anal_type(ty, level)).collect()
    }

    fn anal_maybe_nested(&mut self, ty: &Type, level: Nesting, nested: bool) -> Type {
        if nested {
            self.anal_type(ty, level)
        } else {
            self.visit(ty, level)
        }
    }

    /// Dispatch on the variant of `ty`.
    pub(crate) fn visit(&mut self, ty: &Type, level: Nesting) -> Type {
        if level.level() > MAX_TYPE_NESTING_DEPTH {
            self.fail(ty.pos(), messages::TYPE_TOO_DEEP.to_string(), Some(codes::MISC));
            return Type::any_at(TypeOfAny::FromError, ty.pos());
        }
        match ty {
            Type::Unbound(t) => self.visit_unbound_type(t, level, false),
            Type::Any(_)
            | Type::None(_)
            | Type::Uninhabited(_)
            | Type::Deleted(_)
            | Type::Instance(_)
            | Type::TypeVar(_)
            | Type::Literal(_) => ty.clone(),
            Type::TypeList(t) => self.visit_type_list(t),
            Type::CallableArgument(t) => {
                self.fail(t.pos, messages::INVALID_TYPE.to_string(), None);
                Type::error()
            }
            Type::Callable(t) => self.visit_callable_type(t, level, true),
            Type::Tuple(t) => self.visit_tuple_type(t, level),
            Type::Record(t) => self.visit_record_type(t, level),
            Type::RawExpression(t) => self.visit_raw_expression_type(t),
            Type::Star(t) => Type::Star(StarType {
                item: Box::new(self.anal_type(&t.item, level)),
                pos: t.pos,
            }),
            Type::Union(t) => {
                let items = self.anal_array(&t.items, level);
                make_union(items, t.pos)
            }
            Type::Ellipsis(t) => {
                self.fail(t.pos, messages::UNEXPECTED_ELLIPSIS.to_string(), None);
                Type::error()
            }
            Type::TypeType(t) => {
                let item = self.anal_type(&t.item, level);
                make_type_type(item, t.pos)
            }
            Type::Placeholder(t) => self.visit_placeholder_type(t, level),
        }
    }

    // -------------------------------------------------------------------------
    // Named references
    // -------------------------------------------------------------------------

    pub(crate) fn visit_unbound_type(
        &mut self,
        t: &UnboundType,
        level: Nesting,
        defining_literal: bool,
    ) -> Type {
        let resolved = self.visit_unbound_type_nonoptional(t, level, defining_literal);
        if t.optional {
            make_optional(resolved)
        } else {
            resolved
        }
    }

    fn visit_unbound_type_nonoptional(
        &mut self,
        t: &UnboundType,
        level: Nesting,
        defining_literal: bool,
    ) -> Type {
        let Some(sym) = self.api.lookup_qualified(&t.name) else {
            trace!(name = %t.name, "unresolved name");
            return Type::any_at(TypeOfAny::SpecialForm, t.pos);
        };

        let node = match &sym.node {
            Some(SymbolNode::Placeholder(placeholder)) => {
                trace!(name = %t.name, becomes_class = placeholder.becomes_class, "placeholder symbol");
                if self.api.is_final_iteration() {
                    self.cannot_resolve_type(t);
                    return Type::any_at(TypeOfAny::FromError, t.pos);
                }
                if placeholder.becomes_class {
                    if self.flags.contains(AnalyzerFlags::ALLOW_PLACEHOLDER) {
                        self.defer();
                    } else {
                        self.record_incomplete_ref();
                    }
                    return Type::Placeholder(PlaceholderType {
                        fullname: Some(placeholder.fullname.clone()),
                        args: self.anal_array(&t.args, level),
                        pos: t.pos,
                    });
                }
                self.record_incomplete_ref();
                return Type::any_at(TypeOfAny::SpecialForm, t.pos);
            }
            Some(node) => node,
            None => {
                let message = format_message(messages::INTERNAL_ERROR_NO_NODE, &[&sym.kind.to_string()]);
                self.fail(t.pos, message, None);
                return Type::any_at(TypeOfAny::SpecialForm, t.pos);
            }
        };
        let fullname = sym.fullname.as_str();

        if let Some(hook) = self.plugins.type_analyze_hook(fullname) {
            trace!(fullname, "plugin hook");
            let mut ctx = AnalyzeTypeContext { ty: t, api: self };
            return hook(&mut ctx);
        }

        if nongen_builtin(fullname).is_some()
            && !t.args.is_empty()
            && !self.flags.contains(AnalyzerFlags::ALLOW_UNNORMALIZED)
        {
            let message = no_subscript_builtin_alias(fullname, !self.defining_alias());
            self.fail(t.pos, message, None);
        }

        if let SymbolNode::TypeVar(_) = node
            && let Some(def) = self.tvar_scope.get_binding(fullname).cloned()
        {
            trace!(name = %t.name, id = def.id.0, "bound type variable");
            if self.defining_alias() {
                let message = format_message(messages::BOUND_TVAR_IN_ALIAS, &[&t.name]);
                self.fail(t.pos, message, None);
                return Type::any_at(TypeOfAny::FromError, t.pos);
            }
            if !t.args.is_empty() {
                let message = format_message(messages::TVAR_WITH_ARGS, &[&t.name]);
                self.fail(t.pos, message, None);
            }
            return Type::TypeVar(TypeVarType::new(def, t.pos));
        }

        if let Some(special) = self.try_analyze_special_unbound_type(t, fullname, level) {
            trace!(fullname, "special form");
            return special;
        }

        match node {
            SymbolNode::Alias(alias) => {
                trace!(alias = %alias.fullname, "alias reference");
                self.aliases_used.insert(fullname.to_string());
                self.aliases_used.extend(alias.alias_deps.iter().cloned());
                let args = self.anal_array(&t.args, level);
                let disallow_any = self.disallow_any_generics();
                let mut expanded = expand_type_alias(
                    alias,
                    args,
                    t.pos,
                    Some(t.name.as_str()),
                    disallow_any,
                    &mut *self.sink,
                );
                // Only the top-level instance of an expansion can have the wrong arity.
                if let Type::Instance(instance) = &mut expanded
                    && !instance.has_expected_arity()
                    && !self.defining_alias()
                {
                    let written = Some(t.name.as_str());
                    fix_instance(instance, &mut *self.sink, disallow_any, true, written);
                }
                expanded
            }
            SymbolNode::Class(info) => {
                trace!(class = %info.fullname, "class reference");
                self.analyze_type_with_type_info(info, &t.args, t.pos, level)
            }
            _ => self.analyze_unbound_type_without_type_info(t, &sym, level, defining_literal),
        }
    }

    fn cannot_resolve_type(&mut self, t: &UnboundType) {
        let message = format_message(messages::CANNOT_RESOLVE_NAME, &[&t.name]);
        self.fail(t.pos, message, None);
    }

    /// Instance (or tuple/record shape) of a known class.
    pub(crate) fn analyze_type_with_type_info(
        &mut self,
        info: &Arc<ClassInfo>,
        args: &[Type],
        at: Provenance,
        level: Nesting,
    ) -> Type {
        if !args.is_empty() && info.fullname == "builtins.tuple" {
            let fallback = Instance::at(
                Arc::clone(info),
                vec![Type::any(TypeOfAny::SpecialForm)],
                at,
            );
            return Type::Tuple(TupleType {
                pos: at,
                ..TupleType::new(self.anal_array(args, level), fallback)
            });
        }

        let mut instance = Instance::at(Arc::clone(info), self.anal_array(args, level), at);
        if !instance.has_expected_arity() && !self.defining_alias() {
            let disallow_any = self.disallow_any_generics();
            fix_instance(&mut instance, &mut *self.sink, disallow_any, false, None);
        }

        if let Some(tuple_base) = &info.tuple_base {
            if !args.is_empty() {
                self.fail(at, messages::GENERIC_TUPLE_UNSUPPORTED.to_string(), None);
                return Type::any_at(TypeOfAny::FromError, at);
            }
            return Type::Tuple(TupleType {
                items: self.anal_array(&tuple_base.items, level),
                fallback: instance,
                implicit: tuple_base.implicit,
                pos: at,
            });
        }
        if let Some(record_base) = &info.record_base {
            if !args.is_empty() {
                self.fail(at, messages::GENERIC_TYPEDDICT_UNSUPPORTED.to_string(), None);
                return Type::any_at(TypeOfAny::FromError, at);
            }
            let items = record_base
                .items
                .iter()
                .map(|(name, item)| (name.clone(), self.anal_type(item, level)))
                .collect();
            return Type::Record(RecordType {
                items,
                required_keys: record_base.required_keys.clone(),
                fallback: instance,
                pos: at,
            });
        }
        Type::Instance(instance)
    }

    /// A name that resolves to something other than a class or alias.
    fn analyze_unbound_type_without_type_info(
        &mut self,
        t: &UnboundType,
        sym: &SymbolTableNode,
        level: Nesting,
        defining_literal: bool,
    ) -> Type {
        let name = sym.fullname.as_str();

        // A variable of type Any (typically an unfollowed import) works as Any.
        if let Some(SymbolNode::Var(var)) = &sym.node
            && let Some(Type::Any(any)) = &var.ty
        {
            return Type::Any(AnyType {
                missing_import_name: any.missing_import_name.clone(),
                ..AnyType::at(TypeOfAny::FromUnimportedType, t.pos)
            });
        }

        let unbound_tvar = matches!(&sym.node, Some(SymbolNode::TypeVar(_)))
            && self.tvar_scope.get_binding(name).is_none();
        if unbound_tvar && self.allow_unbound_tvars() {
            trace!(name = %t.name, "free type variable");
            return Type::Unbound(t.clone());
        }

        if let Some(SymbolNode::Var(var)) = &sym.node
            && let Some(info) = var.info.as_ref().filter(|info| info.is_enum)
        {
            if !defining_literal {
                let message =
                    format_message(messages::INVALID_TYPE_RAW_ENUM_VALUE, &[info.name(), var.name()]);
                self.fail(t.pos, message, None);
                return Type::any_at(TypeOfAny::FromError, t.pos);
            }
            return Type::Literal(LiteralType::new(
                LiteralValue::Str(var.name().to_string()),
                Instance::at(Arc::clone(info), Vec::new(), t.pos),
                t.pos,
            ));
        }

        let resolved = t.copy_with_args(self.anal_array(&t.args, level));
        let mut notes = Vec::new();
        let message = match &sym.node {
            Some(SymbolNode::Var(_)) => messages::VARIABLE_NOT_VALID_TYPE,
            Some(SymbolNode::Function(_) | SymbolNode::Decorator(_)) => {
                notes.push(messages::NOTE_PERHAPS_CALLABLE.to_string());
                messages::FUNCTION_NOT_VALID_TYPE
            }
            Some(SymbolNode::Module(_)) => messages::MODULE_NOT_VALID_TYPE,
            _ if unbound_tvar => {
                let short = typa_types::short_name(name);
                notes.push(format_message(messages::NOTE_TVAR_CLASS_HINT, &[short]));
                notes.push(format_message(messages::NOTE_TVAR_FUNCTION_HINT, &[short]));
                messages::TVAR_UNBOUND
            }
            _ => messages::CANNOT_INTERPRET_AS_TYPE,
        };
        self.fail(t.pos, format_message(message, &[name]), Some(codes::VALID_TYPE));
        for note in notes {
            self.note(t.pos, note);
        }
        Type::Unbound(resolved)
    }

    // -------------------------------------------------------------------------
    // Canonical and synthetic variants
    // -------------------------------------------------------------------------

    fn visit_type_list(&mut self, t: &TypeList) -> Type {
        self.fail(t.pos, messages::BRACKETED_LIST_NOT_TYPE.to_string(), None);
        self.note(t.pos, messages::NOTE_DID_YOU_MEAN_LIST.to_string());
        Type::error()
    }

    /// Resolve a callable, binding its own type variables in a child frame.
    pub(crate) fn visit_callable_type(
        &mut self,
        t: &CallableType,
        level: Nesting,
        nested: bool,
    ) -> Type {
        self.with_scope_frame(|this| {
            let variables = if this.defining_alias() {
                t.variables.clone()
            } else {
                this.bind_function_type_variables(t)
            };
            let arg_types = t
                .arg_types
                .iter()
                .map(|arg| this.anal_maybe_nested(arg, level, nested))
                .collect();
            let ret_type = this.anal_maybe_nested(&t.ret_type, level, nested);
            let fallback = match &t.fallback {
                Some(fallback) => Some(fallback.clone()),
                None => this
                    .named_instance("builtins.function", Vec::new(), Provenance::UNKNOWN)
                    .map(Box::new),
            };
            let variables = this.anal_var_defs(variables, level);
            Type::Callable(CallableType {
                arg_types,
                ret_type: Box::new(ret_type),
                fallback,
                variables,
                ..t.clone()
            })
        })
    }

    fn anal_var_defs(&mut self, defs: Vec<TypeVarDef>, level: Nesting) -> Vec<TypeVarDef> {
        defs.into_iter()
            .map(|def| TypeVarDef {
                values: self.anal_array(&def.values, level),
                upper_bound: Box::new(self.visit(&def.upper_bound, level)),
                ..def
            })
            .collect()
    }

    fn visit_tuple_type(&mut self, t: &TupleType, level: Nesting) -> Type {
        if t.implicit && !self.flags.contains(AnalyzerFlags::ALLOW_TUPLE_LITERAL) {
            self.fail(t.pos, messages::TUPLE_SYNTAX_ERROR.to_string(), Some(codes::SYNTAX));
            let note = match t.items.len() {
                0 => messages::NOTE_EMPTY_TUPLE,
                1 => messages::NOTE_SPURIOUS_COMMA,
                _ => messages::NOTE_USE_TUPLE,
            };
            self.note(t.pos, note.to_string());
            return Type::error();
        }
        let star_count = t.items.iter().filter(|item| matches!(item, Type::Star(_))).count();
        if star_count > 1 {
            self.fail(t.pos, messages::AT_MOST_ONE_STAR.to_string(), None);
            if t.implicit {
                return Type::Tuple(TupleType {
                    items: vec![Type::error(); t.items.len()],
                    ..t.clone()
                });
            }
            return Type::error();
        }
        Type::Tuple(TupleType {
            items: self.anal_array(&t.items, level),
            ..t.clone()
        })
    }

    fn visit_record_type(&mut self, t: &RecordType, level: Nesting) -> Type {
        let items = t
            .items
            .iter()
            .map(|(name, item)| (name.clone(), self.anal_type(item, level)))
            .collect();
        Type::Record(RecordType {
            items,
            ..t.clone()
        })
    }

    /// A raw scalar outside `Literal[...]` is never a type.
    fn visit_raw_expression_type(&mut self, t: &RawExpressionType) -> Type {
        if self.flags.contains(AnalyzerFlags::REPORT_INVALID_TYPES) {
            let message = match (t.base_type_name.as_str(), &t.literal_value) {
                ("builtins.int" | "builtins.bool", Some(value)) => {
                    format_message(messages::RAW_INT_TRY_LITERAL, &[&value.to_string()])
                }
                ("builtins.float" | "builtins.complex", _) => {
                    format_message(messages::RAW_FLOAT_NOT_TYPE, &[t.simple_name()])
                }
                _ => messages::INVALID_ANNOTATION.to_string(),
            };
            self.fail(t.pos, message, Some(codes::VALID_TYPE));
            if let Some(note) = &t.note {
                self.note(t.pos, note.clone());
            }
        }
        Type::any_at(TypeOfAny::FromError, t.pos)
    }

    /// Re-look-up a forward reference from an earlier pass. One that is
    /// still unresolved on the final pass is a possible cyclic definition.
    fn visit_placeholder_type(&mut self, t: &PlaceholderType, level: Nesting) -> Type {
        let sym = t
            .fullname
            .as_deref()
            .and_then(|fullname| self.api.lookup_fully_qualified(fullname));
        match sym.and_then(|sym| sym.node) {
            None | Some(SymbolNode::Placeholder(_)) if self.api.is_final_iteration() => {
                let name = t.fullname.as_deref().map_or("?", typa_types::short_name);
                self.fail(t.pos, format_message(messages::CANNOT_RESOLVE_NAME, &[name]), None);
                Type::any_at(TypeOfAny::FromError, t.pos)
            }
            None | Some(SymbolNode::Placeholder(_)) => {
                self.defer();
                Type::Placeholder(t.clone())
            }
            Some(SymbolNode::Class(info)) => {
                self.analyze_type_with_type_info(&info, &t.args, t.pos, level)
            }
            Some(other) => {
                let message = format_message(messages::PLACEHOLDER_NOT_CLASS, &[other.fullname()]);
                self.fail(t.pos, message, Some(codes::VALID_TYPE));
                Type::any_at(TypeOfAny::FromError, t.pos)
            }
        }
    }
}

// =============================================================================
// Plugin interface
// =============================================================================

impl TypeAnalyzerPluginInterface for TypeAnalyzer<'_> {
    fn fail(&mut self, at: Provenance, message: String) {
        self.sink.fail(at, message, None);
    }

    fn named_type(&mut self, fullname: &str, args: Vec<Type>) -> Option<Instance> {
        TypeAnalyzer::named_instance(self, fullname, args, Provenance::UNKNOWN)
    }

    /// Hooked names are resolved at the top level, so their arguments sit one
    /// level down.
    fn analyze_type(&mut self, ty: &Type) -> Type {
        self.anal_type(ty, Nesting::TOP)
    }

    fn analyze_callable_args(&mut self, arglist: &TypeList) -> Option<CallableArgs> {
        TypeAnalyzer::analyze_callable_args(self, arglist)
    }
}

// =============================================================================
// Free entry points
// =============================================================================

/// Resolve the right-hand side of an alias definition.
///
/// Arity is not checked (it is checked where the alias is used), free type
/// variables are the alias's formals, and the result lists every alias the
/// target depends on, transitively.
pub fn analyze_type_alias(
    ty: &Type,
    api: &dyn SemanticApi,
    plugins: &dyn PluginRegistry,
    options: &Options,
    sink: &mut dyn DiagnosticSink,
    tvar_scope: Rc<TypeVarScope>,
    flags: AnalyzerFlags,
) -> AliasResolution {
    let flags = flags | AnalyzerFlags::DEFINING_ALIAS;
    let mut analyzer = TypeAnalyzer::new(api, plugins, options, sink, tvar_scope, flags);
    let Resolution { ty, status } = analyzer.resolve(ty);
    debug!(aliases_used = analyzer.aliases_used.len(), ?status, "analyzed alias target");
    AliasResolution {
        ty,
        aliases_used: analyzer.aliases_used,
        status,
    }
}

/// Report an explicit `Any` in `ty` when the options forbid it.
pub fn check_for_explicit_any(
    ty: Option<&Type>,
    options: &Options,
    is_typeshed_stub: bool,
    sink: &mut dyn DiagnosticSink,
    at: Provenance,
) {
    if options.disallow_any_explicit
        && !is_typeshed_stub
        && ty.is_some_and(has_explicit_any)
    {
        sink.fail(at, messages::EXPLICIT_ANY.to_string(), Some(codes::MISC));
    }
}

#[cfg(test)]
#[path = "../tests/analyzer_tests.rs"]
mod analyzer_tests;
