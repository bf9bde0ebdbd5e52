//! Alias expansion.
//!
//! An alias target is an already-resolved type in which the alias's formals
//! still appear by name. Expansion substitutes the actual arguments written
//! at the use site (or `Any` fillers) for those names.

use crate::api::TypeAlias;
use crate::fixup::get_omitted_any;
use tracing::trace;
use typa_common::limits::MAX_SUBSTITUTION_DEPTH;
use typa_common::{DiagnosticSink, Provenance, codes, format_message, messages};
use typa_types::{Instance, Type, TypeOfAny};

/// Class whose two-argument instance `FlexibleAlias[T, X]` stands for `X`.
pub const FLEXIBLE_ALIAS: &str = "mypy_extensions.FlexibleAlias";

/// Expand `alias` applied to the already-resolved `args`.
///
/// - Generic alias, no arguments: every formal becomes `Any` (an error under
///   `disallow_any`).
/// - Non-generic alias, no arguments: the target, except that a bare alias
///   (`A = List`) strips the instance arguments.
/// - Bare alias with arguments: the arguments apply to the target class
///   directly.
/// - Otherwise: substitute, after checking the argument count.
///
/// `written_name` is the alias name as written at the use site, for
/// diagnostics.
pub fn expand_type_alias(
    alias: &TypeAlias,
    args: Vec<Type>,
    at: Provenance,
    written_name: Option<&str>,
    disallow_any: bool,
    sink: &mut dyn DiagnosticSink,
) -> Type {
    let expected = alias.alias_tvars.len();
    let given = args.len();
    trace!(alias = %alias.fullname, expected, given, "expanding type alias");

    if expected > 0 && given == 0 {
        return set_any_tvars(
            &alias.target,
            &alias.alias_tvars,
            at,
            false,
            disallow_any,
            sink,
            written_name,
        );
    }
    if expected == 0 && given == 0 {
        return match &alias.target {
            Type::Instance(target) if alias.no_args => {
                Type::Instance(Instance::at(target.class.clone(), Vec::new(), at))
            }
            target => target.clone(),
        };
    }
    if expected == 0
        && alias.no_args
        && let Type::Instance(target) = &alias.target
    {
        return Type::Instance(Instance::at(target.class.clone(), args, at));
    }
    if given != expected {
        let message = format_message(
            messages::BAD_ALIAS_ARG_COUNT,
            &[&expected.to_string(), &given.to_string()],
        );
        sink.fail(at, message, None);
        return set_any_tvars(&alias.target, &alias.alias_tvars, at, true, false, sink, None);
    }

    match replace_alias_tvars(&alias.target, &alias.alias_tvars, &args, at, sink) {
        Type::Instance(mut flexible) if flexible.class.fullname == FLEXIBLE_ALIAS => {
            flexible.args.pop().unwrap_or_else(|| Type::any(TypeOfAny::SpecialForm))
        }
        expanded => expanded,
    }
}

/// Formal named by `ty`, if `ty` is a bare reference to one of `vars`.
fn formal_index(ty: &Type, vars: &[String]) -> Option<usize> {
    let name = match ty {
        Type::Unbound(unbound) => unbound.name.as_str(),
        Type::TypeVar(tvar) => tvar.name(),
        _ => return None,
    };
    vars.iter().position(|var| var == name)
}

/// Replace every occurrence of a formal in `vars` by the matching entry of
/// `subs`, recursively. Rebuilt nodes take the use-site position `at`.
///
/// `subs` must have one entry per formal. A target nested deeper than
/// [`MAX_SUBSTITUTION_DEPTH`] is reported once and cut off with an
/// error-`Any`, so no formal survives the substitution.
pub fn replace_alias_tvars(
    ty: &Type,
    vars: &[String],
    subs: &[Type],
    at: Provenance,
    sink: &mut dyn DiagnosticSink,
) -> Type {
    let mut truncated = false;
    let replaced = replace_at_depth(ty, vars, subs, at, 0, &mut truncated);
    if truncated {
        sink.fail(at, messages::TYPE_TOO_DEEP.to_string(), Some(codes::MISC));
    }
    replaced
}

fn replace_at_depth(
    ty: &Type,
    vars: &[String],
    subs: &[Type],
    at: Provenance,
    depth: u32,
    truncated: &mut bool,
) -> Type {
    if let Some(index) = formal_index(ty, vars)
        && let Some(sub) = subs.get(index)
    {
        return sub.clone();
    }
    if ty.children().is_empty() {
        return ty.clone();
    }
    if depth >= MAX_SUBSTITUTION_DEPTH {
        *truncated = true;
        return Type::any_at(TypeOfAny::FromError, at);
    }
    let mut replaced = ty.map_children(&mut |child: &Type| {
        replace_at_depth(child, vars, subs, at, depth + 1, truncated)
    });
    replaced.set_pos(at);
    replaced
}

/// Substitute `Any` for every formal in `vars`.
///
/// The filler comes from an error when `from_error` or `disallow_any` is set
/// (the latter also reports the bare generic), and from omitted generics
/// otherwise.
pub fn set_any_tvars(
    ty: &Type,
    vars: &[String],
    at: Provenance,
    from_error: bool,
    disallow_any: bool,
    sink: &mut dyn DiagnosticSink,
    written_name: Option<&str>,
) -> Type {
    let any = if disallow_any {
        get_omitted_any(true, sink, at, None, || match (written_name, ty) {
            (Some(name), _) => name.to_string(),
            (None, Type::Unbound(unbound)) => unbound.name.clone(),
            (None, other) => other.to_string(),
        })
    } else if from_error {
        Type::any_at(TypeOfAny::FromError, at)
    } else {
        Type::any_at(TypeOfAny::FromOmittedGenerics, at)
    };
    let subs = vec![any; vars.len()];
    replace_alias_tvars(ty, vars, &subs, at, sink)
}

#[cfg(test)]
#[path = "../tests/alias_tests.rs"]
mod alias_tests;
