//! Special forms recognized by fully-qualified name.

use crate::analyzer::{Nesting, TypeAnalyzer};
use crate::api::SymbolNode;
use tracing::trace;
use typa_common::{format_message, messages};
use typa_types::{
    AnyType, Instance, NoneType, TupleType, Type, TypeOfAny, TypeType, UnboundType, UninhabitedType,
    get_type_vars, make_optional, make_type_type, make_union,
};

pub const NONE_NAME: &str = "builtins.None";
pub const ANY_NAMES: &[&str] = &["typing.Any", "builtins.Any"];
pub const FINAL_NAMES: &[&str] = &["typing.Final", "typing_extensions.Final"];
pub const TUPLE_NAME: &str = "typing.Tuple";
pub const UNION_NAME: &str = "typing.Union";
pub const OPTIONAL_NAME: &str = "typing.Optional";
pub const CALLABLE_NAME: &str = "typing.Callable";
pub const TYPE_NAME: &str = "typing.Type";
pub const CLASSVAR_NAME: &str = "typing.ClassVar";
pub const NORETURN_NAMES: &[&str] = &["typing.NoReturn", "mypy_extensions.NoReturn"];
pub const LITERAL_NAMES: &[&str] = &["typing.Literal", "typing_extensions.Literal"];
pub const ANNOTATED_NAME: &str = "typing_extensions.Annotated";

impl TypeAnalyzer<'_> {
    /// Build the special form `fullname` applied to the arguments of `t`.
    ///
    /// `None` when `fullname` is an ordinary name.
    pub(crate) fn try_analyze_special_unbound_type(
        &mut self,
        t: &UnboundType,
        fullname: &str,
        level: Nesting,
    ) -> Option<Type> {
        let resolved = match fullname {
            NONE_NAME => Type::None(NoneType { pos: t.pos }),
            name if ANY_NAMES.contains(&name) => {
                Type::Any(AnyType::at(TypeOfAny::Explicit, t.pos))
            }
            name if FINAL_NAMES.contains(&name) => {
                self.fail(t.pos, messages::FINAL_OUTERMOST_ONLY.to_string(), None);
                Type::any_at(TypeOfAny::FromError, t.pos)
            }
            TUPLE_NAME => self.analyze_tuple_form(t, level),
            UNION_NAME => {
                let items = self.anal_array(&t.args, level);
                make_union(items, t.pos)
            }
            OPTIONAL_NAME => {
                if t.args.len() != 1 {
                    self.fail(t.pos, messages::OPTIONAL_ONE_ARG.to_string(), None);
                    return Some(Type::any_at(TypeOfAny::FromError, t.pos));
                }
                make_optional(self.anal_type(&t.args[0], level))
            }
            CALLABLE_NAME => self.analyze_callable_type(t, level),
            TYPE_NAME => {
                if t.args.is_empty() {
                    let any = self.omitted_any(t);
                    return Some(Type::TypeType(TypeType {
                        item: Box::new(any),
                        pos: t.pos,
                    }));
                }
                if t.args.len() != 1 {
                    self.fail(t.pos, messages::TYPE_ONE_ARG.to_string(), None);
                }
                make_type_type(self.anal_type(&t.args[0], level), t.pos)
            }
            CLASSVAR_NAME => self.analyze_class_var(t, level),
            name if NORETURN_NAMES.contains(&name) => Type::Uninhabited(UninhabitedType {
                is_noreturn: true,
                pos: t.pos,
            }),
            name if LITERAL_NAMES.contains(&name) => self.analyze_literal_type(t, level),
            ANNOTATED_NAME => {
                if t.args.len() < 2 {
                    self.fail(t.pos, messages::ANNOTATED_ARGS.to_string(), None);
                    return Some(Type::any_at(TypeOfAny::FromError, t.pos));
                }
                self.anal_type(&t.args[0], level)
            }
            _ => return None,
        };
        Some(resolved)
    }

    /// `Tuple`, `Tuple[()]`, `Tuple[T, ...]` and `Tuple[A, B, ...]`.
    fn analyze_tuple_form(&mut self, t: &UnboundType, level: Nesting) -> Type {
        // builtins.tuple takes part in the builtins import cycle and may not
        // be ready yet.
        let tuple_class = self
            .api
            .lookup_fully_qualified_or_none("builtins.tuple")
            .and_then(|sym| match sym.node {
                Some(SymbolNode::Class(info)) => Some(info),
                _ => None,
            });
        let Some(tuple_class) = tuple_class else {
            if self.api.is_incomplete_namespace("builtins") {
                self.record_incomplete_ref();
            } else {
                let message = format_message(messages::NAME_NOT_DEFINED, &["tuple"]);
                self.fail(t.pos, message, None);
            }
            return Type::any_at(TypeOfAny::SpecialForm, t.pos);
        };

        if t.args.is_empty() && !t.empty_tuple_index {
            trace!("bare Tuple");
            let any = self.omitted_any(t);
            return Type::Instance(Instance::at(tuple_class, vec![any], t.pos));
        }
        if let [item, Type::Ellipsis(_)] = t.args.as_slice() {
            trace!("variable-length Tuple");
            let item = self.anal_type(item, level);
            return Type::Instance(Instance::at(tuple_class, vec![item], t.pos));
        }
        let fallback = Instance::at(
            tuple_class,
            vec![Type::any(TypeOfAny::SpecialForm)],
            t.pos,
        );
        Type::Tuple(TupleType {
            pos: t.pos,
            ..TupleType::new(self.anal_array(&t.args, level), fallback)
        })
    }

    fn analyze_class_var(&mut self, t: &UnboundType, level: Nesting) -> Type {
        if !level.is_top() {
            self.fail(t.pos, messages::CLASSVAR_NESTED.to_string(), None);
        }
        if t.args.is_empty() {
            return Type::any_at(TypeOfAny::FromOmittedGenerics, t.pos);
        }
        if t.args.len() != 1 {
            self.fail(t.pos, messages::CLASSVAR_AT_MOST_ONE.to_string(), None);
            return Type::any_at(TypeOfAny::FromError, t.pos);
        }
        let item = self.anal_type(&t.args[0], level);
        if matches!(item, Type::TypeVar(_)) || !get_type_vars(&item).is_empty() {
            self.fail(t.pos, messages::CLASSVAR_GENERIC.to_string(), None);
            return Type::any_at(TypeOfAny::FromError, t.pos);
        }
        item
    }
}
