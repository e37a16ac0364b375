//! The runtime value model.
//!
//! Every operator in this crate works on [`Value`], a closed sum type over
//! the source language's dynamic types. Containers and functions are shared
//! handles: cloning a `Value::Object` clones the handle, not the map, and
//! equality on handles is identity (`Arc::ptr_eq`).
//!
//! # Holes
//!
//! Arrays are fixed slot vectors. Deleting an element writes
//! [`Value::Undefined`] into the slot instead of removing it, so the length
//! never changes. Enumeration treats such slots as holes and skips them.

use crate::error::{RuntimeError, ThrownValue};
use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Zero-sized marker for the missing-value concept.
///
/// Distinct from `Null` everywhere: equality, truthiness, and coercion all
/// treat the two differently. Converts into [`Value::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Undefined;

/// The process-wide `undefined` value.
pub const UNDEFINED: Value = Value::Undefined;

/// A runtime value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    /// Single floating-point domain; integers are a subset.
    Number(f64),
    String(Arc<str>),
    Object(ObjectRef),
    Array(ArrayRef),
    Function(Function),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// A fresh, empty object.
    pub fn object() -> Self {
        Value::Object(ObjectRef::new())
    }

    /// A fresh object with the given entries, in order.
    pub fn object_from<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(entries.into_iter().collect())
    }

    /// A fresh array holding `items`.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// True for `Number(NaN)` only.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// True for the variants that loose equality refuses.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Property read (`v[key]`).
    ///
    /// Objects look the key up by its display form, arrays and strings
    /// accept canonical index keys and `length`. Anything absent reads as
    /// `Undefined`. A string index that lands on half of a surrogate pair
    /// reads as U+FFFD.
    pub fn get(&self, key: &Value) -> Value {
        match self {
            Value::Object(obj) => obj
                .get(&crate::coerce::to_display_string(key))
                .unwrap_or_default(),
            Value::Array(arr) => {
                if let Some(index) = array_index(key) {
                    return arr.get(index).unwrap_or_default();
                }
                match key.as_str() {
                    Some("length") => Value::from(arr.len()),
                    _ => Value::Undefined,
                }
            }
            Value::String(s) => {
                if let Some(index) = array_index(key) {
                    return s
                        .encode_utf16()
                        .nth(index)
                        .map(|unit| Value::string(String::from_utf16_lossy(&[unit])))
                        .unwrap_or_default();
                }
                match key.as_str() {
                    Some("length") => Value::from(s.encode_utf16().count()),
                    _ => Value::Undefined,
                }
            }
            _ => Value::Undefined,
        }
    }
}

/// Resolve a property key to an array index.
///
/// Accepts non-negative integral numbers and canonical decimal strings
/// (`"0"`, `"17"`, but not `"01"`, `" 1"`, or `"1.0"`).
pub(crate) fn array_index(key: &Value) -> Option<usize> {
    match key {
        Value::Number(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => {
            // Beyond usize::MAX the cast saturates, which is out of range anyway.
            Some(*n as usize)
        }
        Value::String(s) => {
            let canonical = !s.is_empty()
                && s.bytes().all(|b| b.is_ascii_digit())
                && (s.len() == 1 || !s.starts_with('0'));
            if canonical { s.parse().ok() } else { None }
        }
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::coerce::to_display_string(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&crate::coerce::number_to_string(*n)),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            // Containers stay shallow: they may be cyclic.
            Value::Object(obj) => write!(f, "Object({})", obj.len()),
            Value::Array(arr) => write!(f, "Array({})", arr.len()),
            Value::Function(func) => {
                write!(f, "[Function: {}]", func.name().unwrap_or("anonymous"))
            }
        }
    }
}

/// Largest index an array slot can have (`2^32 - 2`).
pub const MAX_ARRAY_INDEX: usize = 4_294_967_294;

// ============================================================================
// Objects
// ============================================================================

/// Shared handle to an insertion-ordered property map.
#[derive(Clone, Default)]
pub struct ObjectRef(Arc<RwLock<IndexMap<String, Value>>>);

impl ObjectRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Value>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Value>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Insert or overwrite. Overwriting keeps the key's original position.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.write().insert(key.into(), value)
    }

    /// Remove a key, keeping the order of the remaining keys.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Snapshot of the entries, in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectRef {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let map = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        ObjectRef(Arc::new(RwLock::new(map)))
    }
}

// ============================================================================
// Arrays
// ============================================================================

/// Shared handle to a slot vector.
#[derive(Clone, Default)]
pub struct ArrayRef(Arc<RwLock<Vec<Value>>>);

impl ArrayRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Value>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Value>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Slot at `index`; `None` past the end. Holes read as `Undefined`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read().get(index).cloned()
    }

    /// Write a slot, padding with holes when `index` is past the end.
    ///
    /// Fails with [`RuntimeError::IndexOutOfRange`] above [`MAX_ARRAY_INDEX`].
    pub fn set(&self, index: usize, value: Value) -> Result<(), RuntimeError> {
        if index > MAX_ARRAY_INDEX {
            return Err(RuntimeError::IndexOutOfRange { index });
        }
        let mut slots = self.write();
        if index >= slots.len() {
            slots.resize(index + 1, Value::Undefined);
        }
        slots[index] = value;
        Ok(())
    }

    pub fn push(&self, value: Value) {
        self.write().push(value);
    }

    pub fn pop(&self) -> Option<Value> {
        self.write().pop()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the slots, holes included.
    pub fn to_vec(&self) -> Vec<Value> {
        self.read().clone()
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<Value> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ArrayRef(Arc::new(RwLock::new(iter.into_iter().collect())))
    }
}

// ============================================================================
// Functions
// ============================================================================

type NativeFn = dyn Fn(&[Value]) -> Result<Value, ThrownValue> + Send + Sync;

struct FunctionInner {
    name: Option<String>,
    body: Box<NativeFn>,
}

/// An opaque callable, compared by identity only.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

impl Function {
    pub fn new<F>(name: Option<&str>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ThrownValue> + Send + Sync + 'static,
    {
        Function(Arc::new(FunctionInner {
            name: name.map(String::from),
            body: Box::new(body),
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, ThrownValue> {
        (self.0.body)(args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.0.name).finish()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Undefined> for Value {
    fn from(_: Undefined) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(ArrayRef(Arc::new(RwLock::new(items))))
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<ArrayRef> for Value {
    fn from(arr: ArrayRef) -> Self {
        Value::Array(arr)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

/// `None` becomes `Null`, mirroring how hosts hand optional data in.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
