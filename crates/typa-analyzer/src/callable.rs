//! `Callable[...]` construction and argument-list validation.

use crate::analyzer::{Nesting, TypeAnalyzer};
use crate::hooks::CallableArgs;
use rustc_hash::FxHashSet;
use tracing::trace;
use typa_common::{DiagnosticSink, Provenance, format_message, messages};
use typa_types::{AnyType, ArgKind, CallableType, Type, TypeList, TypeOfAny, UnboundType};

/// Argument constructors and the kind each one produces.
const ARG_KINDS_BY_CONSTRUCTOR: &[(&str, ArgKind)] = &[
    ("mypy_extensions.Arg", ArgKind::Pos),
    ("mypy_extensions.DefaultArg", ArgKind::Opt),
    ("mypy_extensions.NamedArg", ArgKind::Named),
    ("mypy_extensions.DefaultNamedArg", ArgKind::NamedOpt),
    ("mypy_extensions.VarArg", ArgKind::Star),
    ("mypy_extensions.KwArg", ArgKind::Star2),
];

pub fn arg_kind_for_constructor(fullname: &str) -> Option<ArgKind> {
    ARG_KINDS_BY_CONSTRUCTOR
        .iter()
        .find(|(name, _)| *name == fullname)
        .map(|(_, kind)| *kind)
}

impl TypeAnalyzer<'_> {
    /// `Callable`, `Callable[..., R]` and `Callable[[A, B], R]`.
    pub(crate) fn analyze_callable_type(&mut self, t: &UnboundType, level: Nesting) -> Type {
        let fallback = self
            .named_instance("builtins.function", Vec::new(), t.pos)
            .map(Box::new);
        let callable = match t.args.as_slice() {
            [] => {
                let any = self.omitted_any(t);
                CallableType::ellipsis_args(any.clone(), any)
            }
            [Type::TypeList(arglist), ret_type] => {
                let Some((arg_types, arg_kinds, arg_names)) = self.analyze_callable_args(arglist)
                else {
                    return Type::any_at(TypeOfAny::FromError, t.pos);
                };
                CallableType::new(arg_types, arg_kinds, arg_names, ret_type.clone())
            }
            [Type::Ellipsis(_), ret_type] => CallableType::ellipsis_args(
                Type::Any(AnyType::new(TypeOfAny::Explicit)),
                ret_type.clone(),
            ),
            [_, _] => {
                self.fail(t.pos, messages::CALLABLE_FIRST_ARG.to_string(), None);
                return Type::any_at(TypeOfAny::FromError, t.pos);
            }
            _ => {
                self.fail(t.pos, messages::CALLABLE_USAGE.to_string(), None);
                return Type::any_at(TypeOfAny::FromError, t.pos);
            }
        };
        trace!(arity = callable.arg_types.len(), ellipsis = callable.is_ellipsis_args, "Callable form");
        let callable = CallableType {
            fallback,
            pos: t.pos,
            ..callable
        };
        self.visit_callable_type(&callable, level, true)
    }

    /// Split `[A, Arg(B, 'b'), VarArg(C)]` into parallel types, kinds and
    /// names. `None` after reporting a malformed entry.
    pub(crate) fn analyze_callable_args(&mut self, arglist: &TypeList) -> Option<CallableArgs> {
        let mut arg_types = Vec::with_capacity(arglist.items.len());
        let mut arg_kinds = Vec::with_capacity(arglist.items.len());
        let mut arg_names = Vec::with_capacity(arglist.items.len());

        for item in &arglist.items {
            let Type::CallableArgument(arg) = item else {
                arg_types.push(item.clone());
                arg_kinds.push(ArgKind::Pos);
                arg_names.push(None);
                continue;
            };
            arg_types.push(arg.typ.as_ref().clone());
            arg_names.push(arg.name.clone());

            let constructor = arg.constructor.as_deref()?;
            let Some(sym) = self.api.lookup_qualified(constructor) else {
                let message = format_message(messages::NAME_NOT_DEFINED, &[constructor]);
                self.fail(arg.pos, message, None);
                return None;
            };
            let Some(kind) = arg_kind_for_constructor(&sym.fullname) else {
                let message = format_message(messages::INVALID_ARG_CONSTRUCTOR, &[&sym.fullname]);
                self.fail(arg.pos, message, None);
                return None;
            };
            arg_kinds.push(kind);
            if arg.name.is_some() && kind.is_star() {
                let message = format_message(messages::STAR_ARG_NAMED, &[constructor]);
                self.fail(arg.pos, message, None);
                return None;
            }
        }

        check_arg_names(&arg_names, "Callable", &mut *self.sink, arglist.pos);
        check_arg_kinds(&arg_kinds, &mut *self.sink, arglist.pos);
        Some((arg_types, arg_kinds, arg_names))
    }
}

/// Report the first argument name that occurs twice.
pub fn check_arg_names(
    names: &[Option<String>],
    description: &str,
    sink: &mut dyn DiagnosticSink,
    at: Provenance,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for name in names.iter().flatten() {
        if !seen.insert(name.as_str()) {
            let message = format_message(messages::DUPLICATE_ARGUMENT, &[name, description]);
            sink.fail(at, message, None);
            break;
        }
    }
}

/// Report the first argument whose kind is out of order.
///
/// Required positionals come first, then positionals with defaults, then
/// `*args`, keyword-only arguments, and `**kwargs` last.
pub fn check_arg_kinds(kinds: &[ArgKind], sink: &mut dyn DiagnosticSink, at: Provenance) {
    let mut is_var_arg = false;
    let mut is_kw_arg = false;
    let mut seen_named = false;
    let mut seen_opt = false;

    for kind in kinds {
        let error = match kind {
            ArgKind::Pos if is_var_arg || is_kw_arg || seen_named || seen_opt => {
                Some(messages::REQUIRED_AFTER_OTHERS)
            }
            ArgKind::Opt if is_var_arg || is_kw_arg || seen_named => {
                Some(messages::DEFAULT_AFTER_NAMED)
            }
            ArgKind::Star if is_var_arg || is_kw_arg || seen_named => {
                Some(messages::VAR_ARGS_AFTER_NAMED)
            }
            ArgKind::Named | ArgKind::NamedOpt if is_kw_arg => Some(messages::KWARGS_MUST_BE_LAST),
            ArgKind::Star2 if is_kw_arg => Some(messages::ONLY_ONE_KWARGS),
            _ => None,
        };
        if let Some(error) = error {
            sink.fail(at, error.to_string(), None);
            break;
        }
        match kind {
            ArgKind::Pos => {}
            ArgKind::Opt => seen_opt = true,
            ArgKind::Star => is_var_arg = true,
            ArgKind::Named | ArgKind::NamedOpt => seen_named = true,
            ArgKind::Star2 => is_kw_arg = true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/callable_tests.rs"]
mod callable_tests;
