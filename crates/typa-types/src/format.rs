//! Surface-syntax rendering of types for diagnostics.

use crate::types::*;
use std::fmt;

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Type]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Str(value) => write!(f, "'{value}'"),
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = &self.fallback.class;
        match &self.value {
            LiteralValue::Str(member) if class.is_enum => {
                write!(f, "Literal[{}.{member}]", class.name())
            }
            LiteralValue::Str(value) if class.fullname == "builtins.bytes" => {
                write!(f, "Literal[b'{value}']")
            }
            value => write!(f, "Literal[{value}]"),
        }
    }
}

fn write_callable_arg(
    f: &mut fmt::Formatter<'_>,
    ty: &Type,
    kind: ArgKind,
    name: Option<&str>,
) -> fmt::Result {
    match (kind, name) {
        (ArgKind::Pos, _) => write!(f, "{ty}"),
        (ArgKind::Opt, _) => write!(f, "DefaultArg({ty})"),
        (ArgKind::Named, Some(name)) => write!(f, "NamedArg({ty}, '{name}')"),
        (ArgKind::Named, None) => write!(f, "NamedArg({ty})"),
        (ArgKind::NamedOpt, Some(name)) => write!(f, "DefaultNamedArg({ty}, '{name}')"),
        (ArgKind::NamedOpt, None) => write!(f, "DefaultNamedArg({ty})"),
        (ArgKind::Star, _) => write!(f, "VarArg({ty})"),
        (ArgKind::Star2, _) => write!(f, "KwArg({ty})"),
    }
}

impl fmt::Display for CallableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ellipsis_args {
            return write!(f, "Callable[..., {}]", self.ret_type);
        }
        f.write_str("Callable[[")?;
        for (i, ty) in self.arg_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let kind = self.arg_kinds.get(i).copied().unwrap_or(ArgKind::Pos);
            let name = self.arg_names.get(i).and_then(|name| name.as_deref());
            write_callable_arg(f, ty, kind, name)?;
        }
        write!(f, "], {}]", self.ret_type)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any(_) => f.write_str("Any"),
            Self::None(_) => f.write_str("None"),
            Self::Uninhabited(t) if t.is_noreturn => f.write_str("NoReturn"),
            Self::Uninhabited(_) => f.write_str("<nothing>"),
            Self::Deleted(_) => f.write_str("<deleted>"),
            Self::TypeVar(t) => f.write_str(t.name()),
            Self::Instance(t) => {
                f.write_str(t.class.name())?;
                if !t.args.is_empty() {
                    f.write_str("[")?;
                    write_list(f, &t.args)?;
                    f.write_str("]")?;
                }
                Ok(())
            }
            Self::Tuple(t) if t.items.is_empty() => f.write_str("Tuple[()]"),
            Self::Tuple(t) => {
                f.write_str("Tuple[")?;
                write_list(f, &t.items)?;
                f.write_str("]")
            }
            Self::Record(t) => {
                f.write_str("TypedDict({")?;
                for (i, (name, item)) in t.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let marker = if t.required_keys.contains(name) { "" } else { "?" };
                    write!(f, "'{name}'{marker}: {item}")?;
                }
                f.write_str("})")
            }
            Self::Callable(t) => write!(f, "{t}"),
            Self::Union(t) => match t.items.as_slice() {
                [item, Type::None(_)] | [Type::None(_), item] => write!(f, "Optional[{item}]"),
                items => {
                    f.write_str("Union[")?;
                    write_list(f, items)?;
                    f.write_str("]")
                }
            },
            Self::Literal(t) => write!(f, "{t}"),
            Self::TypeType(t) => write!(f, "Type[{}]", t.item),
            Self::Star(t) => write!(f, "*{}", t.item),
            Self::Placeholder(t) => match &t.fullname {
                Some(fullname) => f.write_str(short_name(fullname)),
                None => f.write_str("<placeholder>"),
            },
            Self::Unbound(t) => {
                f.write_str(&t.name)?;
                if !t.args.is_empty() {
                    f.write_str("[")?;
                    write_list(f, &t.args)?;
                    f.write_str("]")?;
                }
                if t.optional {
                    f.write_str("?")?;
                }
                Ok(())
            }
            Self::TypeList(t) => {
                f.write_str("[")?;
                write_list(f, &t.items)?;
                f.write_str("]")
            }
            Self::CallableArgument(t) => {
                let constructor = t.constructor.as_deref().unwrap_or("Arg");
                match &t.name {
                    Some(name) => write!(f, "{constructor}({}, '{name}')", t.typ),
                    None => write!(f, "{constructor}({})", t.typ),
                }
            }
            Self::Ellipsis(_) => f.write_str("..."),
            Self::RawExpression(t) => match &t.literal_value {
                Some(value) => write!(f, "{value}"),
                None => write!(f, "<{} literal>", t.simple_name()),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod format_tests;
