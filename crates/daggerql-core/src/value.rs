use indexmap::IndexMap;

/// A literal argument value as it appears in query text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    /// Renders this value as GraphQL literal text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// `false` if any float in this value, however deeply nested, is NaN or
    /// infinite. Such floats have no GraphQL literal form.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite(),
            Self::List(values) => values.iter().all(Value::is_finite),
            Self::Object(entries) => entries.values().all(Value::is_finite),
            Self::Boolean(_) | Self::Int(_) | Self::String(_) => true,
        }
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
            Self::Float(value) => out.push_str(value.to_string().as_str()),
            Self::Int(value) => out.push_str(value.to_string().as_str()),
            Self::List(values) => {
                out.push('[');
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    value.render_into(out);
                }
                out.push(']');
            },
            Self::Object(entries) => {
                out.push('{');
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    out.push_str(key);
                    out.push(':');
                    value.render_into(out);
                }
                out.push('}');
            },
            Self::String(value) => {
                out.push('"');
                escape_into(value, out);
                out.push('"');
            },
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render().as_str())
    }
}

/// Escapes the contents of a GraphQL string literal (without the surrounding
/// quotes).
pub fn escape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            ch if (ch as u32) < 0x20 => {
                out.push_str(format!("\\u{:04X}", ch as u32).as_str());
            },
            ch => out.push(ch),
        }
    }
}

/// Conversion into a wire literal. Generated bindings call this for every
/// argument they send.
pub trait ToValue {
    fn to_value(&self) -> Value;
}
impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}
impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}
impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}
impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}
impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}
impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}
impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}
impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}
impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}
impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}
impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Implemented by generated input object types.
pub trait InputObject {
    /// One `(field name, value)` pair per declared field, in declaration
    /// order.
    fn to_wire_pairs(&self) -> Vec<(String, Value)>;

    fn to_object_value(&self) -> Value {
        Value::Object(self.to_wire_pairs().into_iter().collect())
    }
}
