// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{OrdinaryObject, String, Symbol};
use crate::ecmascript::{
    abstract_operations::type_conversion::format_number,
    builtins::{
        builtin_function::BuiltinFunction, error::Error, foreign_object::ForeignObject,
        proxy::Proxy,
    },
    execution::Agent,
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(String),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Number(f64),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(OrdinaryObject),

    // Exotic and built-in object types.
    BuiltinFunction(BuiltinFunction),
    Error(Error),
    Proxy(Proxy),
    /// An object owned by the embedder, reached through
    /// [`HostHooks`](crate::ecmascript::execution::agent::HostHooks).
    ForeignObject(ForeignObject),
}

impl Value {
    pub fn from_str(agent: &mut Agent, str: &str) -> Value {
        String::from_str(agent, str).into()
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_object(self) -> bool {
        matches!(
            self,
            Value::Object(_)
                | Value::BuiltinFunction(_)
                | Value::Error(_)
                | Value::Proxy(_)
                | Value::ForeignObject(_)
        )
    }

    /// Human readable rendering of the value for diagnostics.
    ///
    /// Unlike ToString this never calls into user code: objects are
    /// described by their kind and errors by their type and message.
    pub fn string_repr(self, agent: &Agent) -> std::string::String {
        match self {
            Value::Undefined => "undefined".to_owned(),
            Value::Null => "null".to_owned(),
            Value::Boolean(value) => value.to_string(),
            Value::String(string) => string.as_str(agent).to_owned(),
            Value::Symbol(symbol) => symbol.descriptive_string(agent),
            Value::Number(number) => {
                let mut buffer = ryu_js::Buffer::new();
                format_number(&mut buffer, number).to_owned()
            }
            Value::Error(error) => error.to_display_string(agent),
            Value::BuiltinFunction(function) => match function.name(agent) {
                Some(name) => format!("function {}() {{ [native code] }}", name.as_str(agent)),
                None => "function () { [native code] }".to_owned(),
            },
            Value::Object(_) | Value::Proxy(_) => "[object Object]".to_owned(),
            Value::ForeignObject(_) => "[foreign object]".to_owned(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

macro_rules! impl_value_from_n {
    ($size: ty) => {
        impl From<$size> for Value {
            fn from(value: $size) -> Self {
                Value::Number(f64::from(value))
            }
        }
    };
}

impl_value_from_n!(u8);
impl_value_from_n!(i8);
impl_value_from_n!(u16);
impl_value_from_n!(i16);
impl_value_from_n!(u32);
impl_value_from_n!(i32);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self {
        value.unwrap_or(Value::Undefined)
    }
}
