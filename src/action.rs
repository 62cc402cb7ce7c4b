use crate::compat::{String, ToString, Vec};
use core::fmt;
use core::str::FromStr;

/// Wire name of the remove action
pub const URL_REMOVE: &str = "remove";
/// Wire name of the set action
pub const URL_SET: &str = "set";
/// Wire name of the toggle action
pub const URL_TOGGLE: &str = "toggle";

/// The three parts of an [`ActionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamAction {
    Remove,
    Set,
    Toggle,
}

impl ParamAction {
    /// Order in which the resolver applies the parts of an action set.
    pub const RESOLVE_ORDER: [Self; 3] = [Self::Set, Self::Toggle, Self::Remove];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remove => URL_REMOVE,
            Self::Set => URL_SET,
            Self::Toggle => URL_TOGGLE,
        }
    }
}

impl fmt::Display for ParamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the three actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of `remove`, `set`, `toggle`")]
pub struct UnknownAction;

impl FromStr for ParamAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            URL_REMOVE => Ok(Self::Remove),
            URL_SET => Ok(Self::Set),
            URL_TOGGLE => Ok(Self::Toggle),
            _ => Err(UnknownAction),
        }
    }
}

/// A loosely typed input value.
///
/// Values are stringified for serialization and compared by their string
/// form when toggling, so `Value::Integer(20)` matches a stored `"20"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Compare against a stored parameter value by string form.
    pub fn loosely_eq(&self, other: &str) -> bool {
        match self {
            Self::String(s) => s == other,
            _ => self.to_string() == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => fmt_float(*n, f),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Number formatting as a browser would print it in a URL.
fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::$variant(<$wide>::from(n))
                }
            }
        )*
    };
}

impl_from_number!(Integer as i64: i8, i16, i32, i64);
impl_from_number!(Unsigned as u64: u8, u16, u32, u64);
impl_from_number!(Float as f64: f32, f64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Self::Integer(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Unsigned(n as u64)
    }
}

/// Value of a `set` entry: a single value or an ordered list of values
/// that become repeated parameters sharing one key.
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    One(Value),
    Many(Vec<Value>),
}

impl SetValue {
    pub fn values(&self) -> &[Value] {
        match self {
            Self::One(value) => core::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl From<Value> for SetValue {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Value>> for SetValue {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

/// A declarative description of how to change a query string.
///
/// Every part is optional. Entries in `set` and `toggle` keep the order in
/// which their keys were declared, which decides where new parameters land.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSet {
    /// Keys to drop entirely
    pub remove: Option<Vec<String>>,
    /// Keys whose every occurrence is replaced
    pub set: Option<Vec<(String, SetValue)>>,
    /// Keys to add, or drop when already holding the given value
    pub toggle: Option<Vec<(String, Value)>>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.remove.get_or_insert_with(Vec::new).push(key.into());
        self
    }

    #[must_use]
    pub fn set(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_value(key, SetValue::One(value.into()))
    }

    #[must_use]
    pub fn set_many<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.set_value(key, SetValue::Many(values))
    }

    /// Re-declaring a key replaces its value but keeps its original position.
    #[must_use]
    pub fn set_value(mut self, key: impl Into<String>, value: SetValue) -> Self {
        upsert(self.set.get_or_insert_with(Vec::new), key.into(), value);
        self
    }

    /// Re-declaring a key replaces its value but keeps its original position.
    #[must_use]
    pub fn toggle(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        upsert(
            self.toggle.get_or_insert_with(Vec::new),
            key.into(),
            value.into(),
        );
        self
    }

    /// Whether the given part is present.
    pub fn has(&self, action: ParamAction) -> bool {
        match action {
            ParamAction::Remove => self.remove.is_some(),
            ParamAction::Set => self.set.is_some(),
            ParamAction::Toggle => self.toggle.is_some(),
        }
    }

    /// True when no part is present.
    pub fn is_empty(&self) -> bool {
        !ParamAction::RESOLVE_ORDER
            .iter()
            .any(|&action| self.has(action))
    }
}

pub(crate) fn upsert<T>(entries: &mut Vec<(String, T)>, key: String, value: T) {
    if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = value;
    } else {
        entries.push((key, value));
    }
}
