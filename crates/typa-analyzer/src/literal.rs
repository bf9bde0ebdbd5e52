//! `Literal[...]` construction.

use crate::analyzer::{Nesting, TypeAnalyzer};
use tracing::trace;
use typa_common::{Provenance, format_message, messages};
use typa_types::{Instance, LiteralType, LiteralValue, Type, TypeOfAny, UnboundType, make_union};

impl TypeAnalyzer<'_> {
    /// Union of the literal types named by the arguments of `t`.
    ///
    /// Any invalid parameter turns the whole form into an error `Any`.
    pub(crate) fn analyze_literal_type(&mut self, t: &UnboundType, level: Nesting) -> Type {
        if t.args.is_empty() {
            self.fail(t.pos, messages::LITERAL_AT_LEAST_ONE.to_string(), None);
            return Type::any_at(TypeOfAny::FromError, t.pos);
        }

        let mut output = Vec::with_capacity(t.args.len());
        for (index, arg) in t.args.iter().enumerate() {
            match self.analyze_literal_param(index + 1, arg, t.pos, level) {
                Some(literals) => output.extend(literals),
                None => return Type::any_at(TypeOfAny::FromError, t.pos),
            }
        }
        make_union(output, t.pos)
    }

    /// Literal types for parameter number `index` (1-based), or `None` after
    /// reporting why it is not a literal.
    fn analyze_literal_param(
        &mut self,
        index: usize,
        arg: &Type,
        at: Provenance,
        level: Nesting,
    ) -> Option<Vec<Type>> {
        // Written as a string: the string is the value.
        if let Type::Unbound(unbound) = arg
            && let Some(value) = &unbound.original_str_expr
        {
            let base = unbound
                .original_str_fallback
                .as_deref()
                .unwrap_or("builtins.str");
            let fallback = self.named_type_with_normalized_str(base, unbound.pos)?;
            return Some(vec![Type::Literal(LiteralType::new(
                LiteralValue::Str(value.clone()),
                fallback,
                unbound.pos,
            ))]);
        }

        // Any other name may be an alias or an enum member.
        let expanded;
        let arg = match arg {
            Type::Unbound(unbound) => {
                expanded = self.visit_unbound_type(unbound, level.deeper(), true);
                &expanded
            }
            other => other,
        };

        match arg {
            Type::Any(any) => {
                // Errors and unresolved names have been reported already.
                if !matches!(any.type_of_any, TypeOfAny::FromError | TypeOfAny::SpecialForm) {
                    let message = format_message(messages::LITERAL_PARAM_ANY, &[&index.to_string()]);
                    self.fail(at, message, None);
                }
                None
            }
            Type::RawExpression(raw) => {
                let Some(value) = &raw.literal_value else {
                    let name = raw.simple_name();
                    let message = if matches!(name, "float" | "complex") {
                        format_message(messages::LITERAL_PARAM_BAD_KIND, &[&index.to_string(), name])
                    } else {
                        messages::LITERAL_ARBITRARY_EXPR.to_string()
                    };
                    self.fail(at, message, None);
                    return None;
                };
                let fallback = self.named_type_with_normalized_str(&raw.base_type_name, raw.pos)?;
                trace!(value = %value, fallback = %fallback.class.fullname, "literal value");
                Some(vec![Type::Literal(LiteralType::new(value.clone(), fallback, raw.pos))])
            }
            Type::None(_) | Type::Literal(_) => Some(vec![arg.clone()]),
            Type::Instance(instance) if instance.last_known_value.is_some() => instance
                .last_known_value
                .as_deref()
                .map(|literal| vec![Type::Literal(literal.clone())]),
            Type::Union(union) => {
                let mut out = Vec::with_capacity(union.items.len());
                for item in &union.items {
                    out.extend(self.analyze_literal_param(index, item, at, level)?);
                }
                Some(out)
            }
            _ => {
                let message = format_message(messages::LITERAL_PARAM_INVALID, &[&index.to_string()]);
                self.fail(at, message, None);
                None
            }
        }
    }

    /// Instance of a string class, with `bytes`/`unicode` mapped onto `str`
    /// according to the target Python version.
    pub(crate) fn named_type_with_normalized_str(
        &mut self,
        fullname: &str,
        at: Provenance,
    ) -> Option<Instance> {
        let fullname = match fullname {
            "builtins.bytes" if self.options.is_python2() => "builtins.str",
            "builtins.unicode" if !self.options.is_python2() => "builtins.str",
            other => other,
        };
        self.required_named_type(fullname, Vec::new(), at)
    }
}
