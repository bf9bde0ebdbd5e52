//! Message templates for analyzer diagnostics.
//!
//! Placeholders are positional (`{0}`, `{1}`, ...) and filled in with
//! [`format_message`](crate::format_message).

// =============================================================================
// Name resolution
// =============================================================================

pub const CANNOT_RESOLVE_NAME: &str = "Cannot resolve name \"{0}\" (possible cyclic definition)";
pub const INTERNAL_ERROR_NO_NODE: &str = "Internal error (node is None, kind={0})";
pub const NAME_NOT_DEFINED: &str = "Name '{0}' is not defined";
pub const NOT_SUBSCRIPTABLE: &str = "\"{0}\" is not subscriptable";
pub const NOT_SUBSCRIPTABLE_USE_INSTEAD: &str = "\"{0}\" is not subscriptable, use \"{1}\" instead";
pub const BOUND_TVAR_IN_ALIAS: &str = "Can't use bound type variable \"{0}\" to define generic alias";
pub const TVAR_WITH_ARGS: &str = "Type variable \"{0}\" used with arguments";
pub const TVAR_BOUND_BY_OUTER: &str = "Type variable '{0}' is bound by an outer class";
pub const TYPE_TOO_DEEP: &str = "Type expression is nested too deeply";
pub const PLACEHOLDER_NOT_CLASS: &str = "Forward reference \"{0}\" did not resolve to a class";

// =============================================================================
// Misuse of non-types
// =============================================================================

pub const VARIABLE_NOT_VALID_TYPE: &str = "Variable \"{0}\" is not valid as a type";
pub const FUNCTION_NOT_VALID_TYPE: &str = "Function \"{0}\" is not valid as a type";
pub const MODULE_NOT_VALID_TYPE: &str = "Module \"{0}\" is not valid as a type";
pub const TVAR_UNBOUND: &str = "Type variable \"{0}\" is unbound";
pub const CANNOT_INTERPRET_AS_TYPE: &str = "Cannot interpret reference \"{0}\" as a type";
pub const NOTE_PERHAPS_CALLABLE: &str =
    "Perhaps you need \"Callable[...]\" or a callback protocol?";
pub const NOTE_TVAR_CLASS_HINT: &str =
    "(Hint: Use \"Generic[{0}]\" or \"Protocol[{0}]\" base class to bind \"{0}\" inside a class)";
pub const NOTE_TVAR_FUNCTION_HINT: &str =
    "(Hint: Use \"{0}\" in function signature to bind \"{0}\" inside a function)";
pub const INVALID_TYPE_RAW_ENUM_VALUE: &str = "Invalid type: try using Literal[{0}.{1}] instead?";
pub const BRACKETED_LIST_NOT_TYPE: &str = "Bracketed expression \"[...]\" is not valid as a type";
pub const NOTE_DID_YOU_MEAN_LIST: &str = "Did you mean \"List[...]\"?";
pub const INVALID_TYPE: &str = "Invalid type";
pub const UNEXPECTED_ELLIPSIS: &str = "Unexpected '...'";
pub const EXPLICIT_ANY: &str = "Explicit \"Any\" is not allowed";

// =============================================================================
// Special forms
// =============================================================================

pub const FINAL_OUTERMOST_ONLY: &str =
    "Final can be only used as an outermost qualifier in a variable annotation";
pub const OPTIONAL_ONE_ARG: &str = "Optional[...] must have exactly one type argument";
pub const TYPE_ONE_ARG: &str = "Type[...] must have exactly one type argument";
pub const CLASSVAR_NESTED: &str = "Invalid type: ClassVar nested inside other type";
pub const CLASSVAR_AT_MOST_ONE: &str = "ClassVar[...] must have at most one type argument";
pub const CLASSVAR_GENERIC: &str = "Invalid type: ClassVar cannot be generic";
pub const ANNOTATED_ARGS: &str =
    "Annotated[...] must have exactly one type argument and at least one annotation";
pub const GENERIC_TUPLE_UNSUPPORTED: &str = "Generic tuple types not supported";
pub const GENERIC_TYPEDDICT_UNSUPPORTED: &str = "Generic TypedDict types not supported";
pub const TUPLE_SYNTAX_ERROR: &str = "Syntax error in type annotation";
pub const NOTE_EMPTY_TUPLE: &str = "Suggestion: Use Tuple[()] instead of () for an empty tuple, or None for a function without a return value";
pub const NOTE_SPURIOUS_COMMA: &str = "Suggestion: Is there a spurious trailing comma?";
pub const NOTE_USE_TUPLE: &str = "Suggestion: Use Tuple[T1, ..., Tn] instead of (T1, ..., Tn)";
pub const AT_MOST_ONE_STAR: &str = "At most one star type allowed in a tuple";

// =============================================================================
// Callable
// =============================================================================

pub const CALLABLE_FIRST_ARG: &str =
    "The first argument to Callable must be a list of types or \"...\"";
pub const CALLABLE_USAGE: &str =
    "Please use \"Callable[[<parameters>], <return type>]\" or \"Callable\"";
pub const INVALID_ARG_CONSTRUCTOR: &str = "Invalid argument constructor \"{0}\"";
pub const STAR_ARG_NAMED: &str = "{0} arguments should not have names";
pub const DUPLICATE_ARGUMENT: &str = "Duplicate argument \"{0}\" in {1}";
pub const REQUIRED_AFTER_OTHERS: &str =
    "Required positional args may not appear after default, named or var args";
pub const DEFAULT_AFTER_NAMED: &str =
    "Positional default args may not appear after named or var args";
pub const VAR_ARGS_AFTER_NAMED: &str = "Var args may not appear after named or var args";
pub const KWARGS_MUST_BE_LAST: &str = "A **kwargs argument must be the last argument";
pub const ONLY_ONE_KWARGS: &str = "You may only have one **kwargs argument";

// =============================================================================
// Literal types
// =============================================================================

pub const LITERAL_AT_LEAST_ONE: &str = "Literal[...] must have at least one parameter";
pub const LITERAL_PARAM_ANY: &str = "Parameter {0} of Literal[...] cannot be of type \"Any\"";
pub const LITERAL_PARAM_BAD_KIND: &str = "Parameter {0} of Literal[...] cannot be of type \"{1}\"";
pub const LITERAL_ARBITRARY_EXPR: &str =
    "Invalid type: Literal[...] cannot contain arbitrary expressions";
pub const LITERAL_PARAM_INVALID: &str = "Parameter {0} of Literal[...] is invalid";
pub const RAW_INT_TRY_LITERAL: &str = "Invalid type: try using Literal[{0}] instead?";
pub const RAW_FLOAT_NOT_TYPE: &str = "Invalid type: {0} literals cannot be used as a type";
pub const INVALID_ANNOTATION: &str = "Invalid type comment or annotation";

// =============================================================================
// Generic arity and aliases
// =============================================================================

pub const IMPLICIT_GENERIC_ANY_BUILTIN: &str =
    "Implicit generic \"Any\". Use \"{0}\" and specify generic parameters";
pub const BARE_GENERIC: &str = "Missing type parameters for generic type {0}";
pub const WRONG_TYPE_ARG_COUNT: &str = "\"{0}\" expects {1}, but {2} given";
pub const BAD_ALIAS_ARG_COUNT: &str =
    "Bad number of arguments for type alias, expected: {0}, given: {1}";
