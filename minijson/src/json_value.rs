use std::{collections::BTreeMap, fmt, rc::Rc};

/// Object members. Keys iterate (and serialise) in sorted order, not insertion order.
pub type JsonObject = BTreeMap<String, Rc<JsonValue>>;

/// Array elements, in parse/insertion order.
pub type JsonArray = Vec<Rc<JsonValue>>;

/// An in-memory JSON value.
///
/// Containers hold their children through [`Rc`], so a node may be shared between several
/// parents when a tree is built by hand. Trees produced by the parser are never shared.
///
/// The caller must not build cycles: `Rc` gives no interior mutability, so a cycle can only be
/// made by going around the type system, and such a tree would leak and recurse forever when
/// serialised.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(JsonObject),
    Array(JsonArray),
}

/// Which of the six variants a [`JsonValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Object => "object",
            JsonKind::Array => "array",
        };

        f.write_str(name)
    }
}

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            Self::Null => JsonKind::Null,
            Self::Bool(_) => JsonKind::Bool,
            Self::Number(_) => JsonKind::Number,
            Self::String(_) => JsonKind::String,
            Self::Object(_) => JsonKind::Object,
            Self::Array(_) => JsonKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    // Typed getters. Asking for the wrong variant is a bug in the caller, so these panic
    // instead of returning a default. Use the `as_*` family when the kind is not known.

    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Bool`].
    #[track_caller]
    pub fn get_bool(&self) -> bool {
        match self {
            Self::Bool(val) => *val,
            _ => self.kind_mismatch(JsonKind::Bool),
        }
    }

    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Number`].
    #[track_caller]
    pub fn get_number(&self) -> f64 {
        match self {
            Self::Number(val) => *val,
            _ => self.kind_mismatch(JsonKind::Number),
        }
    }

    /// # Panics
    ///
    /// If the value is not a [`JsonValue::String`].
    #[track_caller]
    pub fn get_string(&self) -> &str {
        match self {
            Self::String(val) => val,
            _ => self.kind_mismatch(JsonKind::String),
        }
    }

    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Object`].
    #[track_caller]
    pub fn get_object(&self) -> &JsonObject {
        match self {
            Self::Object(val) => val,
            _ => self.kind_mismatch(JsonKind::Object),
        }
    }

    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Array`].
    #[track_caller]
    pub fn get_array(&self) -> &JsonArray {
        match self {
            Self::Array(val) => val,
            _ => self.kind_mismatch(JsonKind::Array),
        }
    }

    /// Mutable access to the members, for assigning into an object in place.
    ///
    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Object`].
    #[track_caller]
    pub fn get_object_mut(&mut self) -> &mut JsonObject {
        match self {
            Self::Object(val) => val,
            _ => self.kind_mismatch(JsonKind::Object),
        }
    }

    /// Mutable access to the elements, for assigning into an array in place.
    ///
    /// # Panics
    ///
    /// If the value is not a [`JsonValue::Array`].
    #[track_caller]
    pub fn get_array_mut(&mut self) -> &mut JsonArray {
        match self {
            Self::Array(val) => val,
            _ => self.kind_mismatch(JsonKind::Array),
        }
    }

    #[track_caller]
    fn kind_mismatch(&self, requested: JsonKind) -> ! {
        panic!(
            "[BUG] Requested a {requested} from a JSON value holding a {}",
            self.kind()
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Self::Array(val) => Some(val),
            _ => None,
        }
    }

    /// Look up an object member. `None` for a missing key or a non-object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key).map(Rc::as_ref)
    }

    /// Look up an array element. `None` when out of bounds or for a non-array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index).map(Rc::as_ref)
    }
}

impl From<bool> for JsonValue {
    fn from(val: bool) -> Self {
        Self::Bool(val)
    }
}

impl From<f64> for JsonValue {
    fn from(val: f64) -> Self {
        Self::Number(val)
    }
}

impl From<String> for JsonValue {
    fn from(val: String) -> Self {
        Self::String(val)
    }
}

impl From<&str> for JsonValue {
    fn from(val: &str) -> Self {
        Self::String(val.to_string())
    }
}

impl From<JsonObject> for JsonValue {
    fn from(val: JsonObject) -> Self {
        Self::Object(val)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(val: JsonArray) -> Self {
        Self::Array(val)
    }
}
