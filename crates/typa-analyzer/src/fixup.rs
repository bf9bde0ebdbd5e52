//! Generic arity repair.
//!
//! An instance whose argument count disagrees with its class is never left
//! as is: omitted arguments become `Any` (an error only under
//! `disallow_any_generics`), and a wrong non-zero count is replaced by
//! error-`Any`s with the instance marked invalid.

use tracing::debug;
use typa_common::limits::MAX_SUBSTITUTION_DEPTH;
use typa_common::{DiagnosticSink, Provenance, codes, format_message, messages};
use typa_types::{Instance, Type, TypeOfAny};

/// Builtin classes that were not subscriptable at runtime, with their
/// `typing` replacement (empty when there is none).
const NONGEN_BUILTINS: &[(&str, &str)] = &[
    ("builtins.tuple", "typing.Tuple"),
    ("builtins.enumerate", ""),
    ("builtins.list", "typing.List"),
    ("builtins.dict", "typing.Dict"),
    ("builtins.set", "typing.Set"),
    ("builtins.frozenset", "typing.FrozenSet"),
    ("collections.ChainMap", "typing.ChainMap"),
    ("collections.Counter", "typing.Counter"),
    ("collections.defaultdict", "typing.DefaultDict"),
    ("collections.deque", "typing.Deque"),
];

/// Replacement for a non-generic builtin, `Some("")` when it has none,
/// `None` when `fullname` is not such a builtin.
pub fn nongen_builtin(fullname: &str) -> Option<&'static str> {
    NONGEN_BUILTINS
        .iter()
        .find(|(name, _)| *name == fullname)
        .map(|(_, replacement)| *replacement)
}

/// The "... is not subscriptable" message for a non-generic builtin.
pub fn no_subscript_builtin_alias(fullname: &str, propose_alt: bool) -> String {
    let name = typa_types::short_name(fullname);
    match nongen_builtin(fullname) {
        Some(replacement) if propose_alt && !replacement.is_empty() => {
            format_message(messages::NOT_SUBSCRIPTABLE_USE_INSTEAD, &[name, replacement])
        }
        _ => format_message(messages::NOT_SUBSCRIPTABLE, &[name]),
    }
}

/// Filler for omitted generic arguments.
///
/// Under `disallow_any` this reports an error naming the construct
/// (`describe` renders it) and returns an error-`Any`; otherwise it is a
/// silent `Any` from omitted generics.
pub fn get_omitted_any(
    disallow_any: bool,
    sink: &mut dyn DiagnosticSink,
    at: Provenance,
    fullname: Option<&str>,
    describe: impl FnOnce() -> String,
) -> Type {
    if !disallow_any {
        return Type::any_at(TypeOfAny::FromOmittedGenerics, at);
    }
    let message = match fullname.and_then(nongen_builtin) {
        Some(alternative) if !alternative.is_empty() => {
            format_message(messages::IMPLICIT_GENERIC_ANY_BUILTIN, &[alternative])
        }
        _ => {
            let quoted = format!("\"{}\"", describe());
            format_message(messages::BARE_GENERIC, &[&quoted])
        }
    };
    sink.fail(at, message, Some(codes::TYPE_ARG));
    Type::any_at(TypeOfAny::FromError, at)
}

/// Natural-language argument count: "no type arguments", "1 type argument",
/// "3 type arguments".
fn describe_arity(n: usize) -> String {
    match n {
        0 => "no type arguments".to_string(),
        1 => "1 type argument".to_string(),
        n => format!("{n} type arguments"),
    }
}

/// Repair `instance` in place if its argument count is wrong.
///
/// `use_generic_error` suppresses the builtin-specific message (used when
/// the instance came out of an alias, whose name is what the user wrote);
/// `written_name` is that name.
pub fn fix_instance(
    instance: &mut Instance,
    sink: &mut dyn DiagnosticSink,
    disallow_any: bool,
    use_generic_error: bool,
    written_name: Option<&str>,
) {
    let expected = instance.class.arity();
    if instance.args.len() == expected {
        return;
    }

    if instance.args.is_empty() {
        let fullname = (!use_generic_error).then(|| instance.class.fullname.clone());
        debug!(class = %instance.class.fullname, expected, "filling omitted type arguments");
        let any = get_omitted_any(disallow_any, sink, instance.pos, fullname.as_deref(), || {
            written_name.unwrap_or(instance.class.name()).to_string()
        });
        instance.args = vec![any; expected];
        return;
    }

    let given = instance.args.len().to_string();
    debug!(
        class = %instance.class.fullname,
        expected,
        given = %given,
        "wrong number of type arguments"
    );
    let message = format_message(
        messages::WRONG_TYPE_ARG_COUNT,
        &[instance.class.name(), &describe_arity(expected), &given],
    );
    sink.fail(instance.pos, message, Some(codes::TYPE_ARG));
    instance.args = vec![Type::any(TypeOfAny::FromError); expected];
    instance.invalid = true;
}

/// Recursively repair every instance inside `ty`.
///
/// `Union[Dict, List[str, int]]` becomes
/// `Union[Dict[Any, Any], List[Any]]`. Omitted arguments are filled silently;
/// wrong counts are reported. Subtrees deeper than
/// [`MAX_SUBSTITUTION_DEPTH`] are replaced by an error-`Any`, reported once.
pub fn fix_instance_types(ty: &mut Type, sink: &mut dyn DiagnosticSink) {
    let mut truncated = None;
    fix_instance_types_at_depth(ty, sink, 0, &mut truncated);
    if let Some(at) = truncated {
        sink.fail(at, messages::TYPE_TOO_DEEP.to_string(), Some(codes::MISC));
    }
}

fn fix_instance_types_at_depth(
    ty: &mut Type,
    sink: &mut dyn DiagnosticSink,
    depth: u32,
    truncated: &mut Option<Provenance>,
) {
    if depth >= MAX_SUBSTITUTION_DEPTH && !ty.children().is_empty() {
        let at = ty.pos();
        truncated.get_or_insert(at);
        *ty = Type::any_at(TypeOfAny::FromError, at);
        return;
    }
    ty.for_each_child_mut(&mut |child: &mut Type| {
        fix_instance_types_at_depth(child, sink, depth + 1, truncated);
    });
    if let Type::Instance(instance) = ty {
        fix_instance(instance, sink, false, true, None);
    }
}

#[cfg(test)]
#[path = "../tests/fixup_tests.rs"]
mod fixup_tests;
