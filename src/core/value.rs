//! Dynamically typed property values and typed conversions.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A single stored property value.
///
/// # Equality
///
/// Change detection compares values with `PartialEq`:
///
/// - Value-like variants compare by content. Floats compare with `==`,
///   except that two NaNs are considered equal so that re-assigning NaN is
///   not reported as a change.
/// - [`Value::Object`] compares by **pointer identity** of the shared `Rc`.
///   Two distinct allocations with identical content are *different*, so
///   assigning a freshly built but structurally equal object reports a
///   change. Re-assigning a clone of the same `Rc` does not.
/// - Values of different variants are never equal (`Int(1) != UInt(1)`).
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Floating point value.
    Float(f64),
    /// Single character.
    Char(char),
    /// Owned string.
    Text(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Shared reference-like value, compared by identity.
    Object(Rc<dyn Any>),
}

impl Value {
    /// Wrap an arbitrary value in a new shared allocation.
    pub fn object<T: Any>(value: T) -> Self {
        Self::Object(Rc::new(value))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Object(v) => f.debug_tuple("Object").field(&Rc::as_ptr(v)).finish(),
        }
    }
}

/// Types that can be read back out of a [`Value`].
///
/// Writing only needs `Into<Value>`; reading goes through
/// [`PropertyValue::from_value`], which returns `None` when the stored
/// variant does not fit the requested type.
///
/// Reads of unset properties return [`PropertyValue::zero`]. Value-like
/// types have a zero (`0`, `false`, `""`, empty list); `Option<T>` is `None`.
/// Shared objects (`Rc<T>`) have no zero, so an unset `Rc<T>` read fails
/// with `InvalidCast`; use `Option<Rc<T>>` when the property may be absent.
pub trait PropertyValue: Into<Value> + Sized {
    /// Convert a stored value into `Self`, if compatible.
    fn from_value(value: &Value) -> Option<Self>;

    /// Value returned for a property that was never written, if the type has one.
    fn zero() -> Option<Self>;
}

impl PropertyValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn zero() -> Option<Self> {
        Some(Self::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl PropertyValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some(false)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(value as i64)
                }
            }

            impl PropertyValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(v) => <$ty>::try_from(*v).ok(),
                        Value::UInt(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    }
                }

                fn zero() -> Option<Self> {
                    Some(0)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::UInt(value as u64)
                }
            }

            impl PropertyValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::UInt(v) => <$ty>::try_from(*v).ok(),
                        Value::Int(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    }
                }

                fn zero() -> Option<Self> {
                    Some(0)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl PropertyValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some(0.0)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl PropertyValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            // Precision loss is accepted, overflow to infinity is not
            Value::Float(v) => {
                let narrowed = *v as f32;
                (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
            }
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some(0.0)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl PropertyValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Char(v) => Some(*v),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some('\0')
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl PropertyValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some(String::new())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: PropertyValue> PropertyValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn zero() -> Option<Self> {
        Some(None)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: PropertyValue> PropertyValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T: Any> From<Rc<T>> for Value {
    fn from(value: Rc<T>) -> Self {
        Self::Object(value)
    }
}

impl<T: Any> PropertyValue for Rc<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(obj) => Rc::clone(obj).downcast::<T>().ok(),
            _ => None,
        }
    }

    fn zero() -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Address {
        city: String,
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from("Alice"), Value::from("Alice".to_string()));
        assert_ne!(Value::Int(1), Value::UInt(1));
        assert_ne!(Value::Null, Value::Bool(false));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::from(vec![1u8, 2]), Value::from(vec![1u8, 2]));
    }

    #[test]
    fn test_object_identity() {
        let a = Rc::new(Address {
            city: "Oslo".to_string(),
        });
        let b = Rc::new(Address {
            city: "Oslo".to_string(),
        });

        // Same allocation is equal, equal content in another allocation is not.
        assert_eq!(Value::from(Rc::clone(&a)), Value::from(Rc::clone(&a)));
        assert_ne!(Value::from(a), Value::from(b));
    }

    #[test]
    fn test_typed_round_trip() {
        assert_eq!(i32::from_value(&Value::from(-7i32)), Some(-7));
        assert_eq!(u16::from_value(&Value::from(7u16)), Some(7));
        assert_eq!(bool::from_value(&Value::from(true)), Some(true));
        assert_eq!(
            String::from_value(&Value::from("Bob")),
            Some("Bob".to_string())
        );
        assert_eq!(f32::from_value(&Value::from(1.5f32)), Some(1.5));
        assert_eq!(char::from_value(&Value::from('x')), Some('x'));
    }

    #[test]
    fn test_mismatched_reads() {
        assert_eq!(i32::from_value(&Value::from("text")), None);
        assert_eq!(u8::from_value(&Value::Int(300)), None);
        assert_eq!(u32::from_value(&Value::Int(-1)), None);
        assert_eq!(String::from_value(&Value::Null), None);
        assert_eq!(f32::from_value(&Value::Float(1e300)), None);
        assert_eq!(f32::from_value(&Value::Float(-1e300)), None);
    }

    #[test]
    fn test_option_and_list() {
        assert_eq!(Option::<i32>::from_value(&Value::Null), Some(None));
        assert_eq!(Option::<i32>::from_value(&Value::Int(3)), Some(Some(3)));
        assert_eq!(Option::<i32>::from_value(&Value::from("x")), None);
        assert_eq!(Value::from(None::<String>), Value::Null);

        let list = Value::from(vec!["a", "b"]);
        assert_eq!(
            Vec::<String>::from_value(&list),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(Vec::<i32>::from_value(&list), None);
    }

    #[test]
    fn test_object_downcast() {
        let addr = Rc::new(Address {
            city: "Lima".to_string(),
        });
        let value = Value::from(Rc::clone(&addr));

        let back = Rc::<Address>::from_value(&value).unwrap();
        assert!(Rc::ptr_eq(&addr, &back));
        assert!(Rc::<String>::from_value(&value).is_none());
    }

    #[test]
    fn test_f32_narrowing() {
        assert_eq!(f32::from_value(&Value::Float(0.1)), Some(0.1f32));
        assert_eq!(
            f32::from_value(&Value::Float(f64::INFINITY)),
            Some(f32::INFINITY)
        );
        assert!(f32::from_value(&Value::Float(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(i32::zero(), Some(0));
        assert_eq!(String::zero(), Some(String::new()));
        assert_eq!(Option::<Rc<Address>>::zero(), Some(None));
        assert!(Rc::<Address>::zero().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(1i8).kind(), "int");
        assert_eq!(Value::from(1u8).kind(), "uint");
        assert_eq!(Value::object(5u8).kind(), "object");
        assert!(Value::default().is_null());
    }
}
