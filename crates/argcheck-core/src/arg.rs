//! # Dynamic Arguments
//!
//! The validators inspect values whose shape is only known at runtime:
//! payloads decoded from JSON, callbacks handed across a plugin boundary,
//! opaque host objects. `Arg` is the tagged union that carries them, and
//! every check in this crate is a match on its discriminant.
//!
//! ## Type Model
//!
//! - `Json` covers null, boolean, number, string, array and object.
//! - `Float` holds the numbers JSON cannot: the infinities and NaN.
//! - `Function` and `Class` are callable. A `Class` is also the only valid
//!   `type` constraint for an instance check.
//! - `Instance` is an opaque object. It is of generic-object type but never
//!   a sequence.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A callable argument.
///
/// Functions take positional JSON arguments and return a JSON value. Two
/// functions are equal only if they share the same allocation.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Function {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// Runtime descriptor for a Rust type, used as a class reference.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag for `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

/// An opaque host object.
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    tag: TypeTag,
}

impl Instance {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            tag: TypeTag::of::<T>(),
        }
    }

    /// The tag of the wrapped value's concrete type.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Borrow the wrapped value as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self.value.as_ref();
        any.downcast_ref::<T>()
    }

    /// True if the wrapped value was constructed as the type described by `tag`.
    pub fn is_instance_of(&self, tag: &TypeTag) -> bool {
        self.tag == *tag
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance<{}>", self.tag.name)
    }
}

/// A dynamically typed argument.
#[derive(Debug, Clone, Default)]
pub enum Arg {
    /// No value was supplied.
    #[default]
    Undefined,
    /// Any JSON value.
    Json(Value),
    /// A non-finite number.
    Float(f64),
    /// A callable.
    Function(Function),
    /// A type reference.
    Class(TypeTag),
    /// An opaque object.
    Instance(Instance),
}

impl Arg {
    /// Build a function argument from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Function::new(f))
    }

    /// Build a class reference for `T`.
    pub fn class<T: Any>() -> Self {
        Self::Class(TypeTag::of::<T>())
    }

    /// Wrap an opaque value.
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance(Instance::new(value))
    }

    /// Short name of the runtime type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Json(Value::Null) => "null",
            Self::Json(Value::Bool(_)) => "boolean",
            Self::Json(Value::Number(_)) | Self::Float(_) => "number",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Array(_)) => "array",
            Self::Json(Value::Object(_)) | Self::Instance(_) => "object",
            Self::Function(_) | Self::Class(_) => "function",
        }
    }

    /// True for values that can be invoked.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Class(_))
    }

    /// Borrow the JSON value, if this is one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Strict equality: no coercion between runtime types.
    ///
    /// Numbers compare by numeric value, so `1` and `1.0` are equal and NaN
    /// equals nothing. Functions and instances compare by identity.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Json(a), Self::Json(b)) => json_strict_eq(a, b),
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Class(a), Self::Class(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

pub(crate) fn json_strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&Value> for Arg {
    fn from(value: &Value) -> Self {
        Self::Json(value.clone())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Json(Value::String(value.to_string()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Json(Value::Bool(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<f64> for Arg {
    /// Non-finite floats have no JSON representation and become `Float`.
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Json(Value::from(value))
        } else {
            Self::Float(value)
        }
    }
}

impl From<Vec<Value>> for Arg {
    fn from(value: Vec<Value>) -> Self {
        Self::Json(Value::Array(value))
    }
}

impl From<Function> for Arg {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<TypeTag> for Arg {
    fn from(value: TypeTag) -> Self {
        Self::Class(value)
    }
}

impl From<Instance> for Arg {
    fn from(value: Instance) -> Self {
        Self::Instance(value)
    }
}
