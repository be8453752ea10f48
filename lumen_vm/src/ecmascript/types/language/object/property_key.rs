// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::Agent,
    types::{String, Symbol, Value},
};

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. All Strings and Symbols,
/// including the empty String, are valid as property keys. A _property name_
/// is a property key that is a String.
///
/// Strings are interned, so two keys are the same key exactly when their
/// handles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        PropertyKey::String(String::from_str(agent, str))
    }

    pub fn into_value(self) -> Value {
        match self {
            PropertyKey::String(data) => Value::String(data),
            PropertyKey::Symbol(data) => Value::Symbol(data),
        }
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Extract a JavaScript Array index (an integer in the inclusive range of
    /// `0..=(2^32 - 2)`) from a PropertyKey if it matches the range.
    ///
    /// Returns None if the PropertyKey is not the canonical string form of
    /// such an integer.
    pub fn as_array_index(self, agent: &Agent) -> Option<u32> {
        let PropertyKey::String(string) = self else {
            return None;
        };
        let str = string.as_str(agent);
        if str.is_empty() || (str.len() > 1 && str.starts_with('0')) {
            return None;
        }
        if !str.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        match str.parse::<u32>() {
            Ok(index) if index != u32::MAX => Some(index),
            _ => None,
        }
    }

    /// Human readable rendering of the key for diagnostics.
    pub fn string_repr(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::String(string) => string.as_str(agent).to_owned(),
            PropertyKey::Symbol(symbol) => symbol.descriptive_string(agent),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<PropertyKey> for Value {
    fn from(value: PropertyKey) -> Self {
        value.into_value()
    }
}

impl TryFrom<Value> for PropertyKey {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::String(data) => Ok(PropertyKey::String(data)),
            Value::Symbol(data) => Ok(PropertyKey::Symbol(data)),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, agent::Options};

    fn agent() -> Agent {
        Agent::new(Options::default(), &DefaultHostHooks)
    }

    #[test]
    fn equal_text_is_an_equal_key() {
        let mut agent = agent();
        let a = PropertyKey::from_str(&mut agent, "foo");
        let b = PropertyKey::from_str(&mut agent, "foo");
        let c = PropertyKey::from_str(&mut agent, "bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn symbols_are_never_equal_to_strings() {
        let mut agent = agent();
        let symbol = Symbol::new(&mut agent, Some("foo"));
        let string = PropertyKey::from_str(&mut agent, "foo");
        assert_ne!(PropertyKey::from(symbol), string);
        assert!(PropertyKey::from(symbol).is_symbol());
        assert_eq!(
            PropertyKey::from(symbol).string_repr(&agent),
            "Symbol(foo)"
        );
    }

    #[test]
    fn array_indexes() {
        let mut agent = agent();
        let cases = [
            ("0", Some(0)),
            ("42", Some(42)),
            ("4294967294", Some(4_294_967_294)),
            ("4294967295", None),
            ("01", None),
            ("-1", None),
            ("1.5", None),
            ("", None),
            ("foo", None),
        ];
        for (str, expected) in cases {
            let key = PropertyKey::from_str(&mut agent, str);
            assert_eq!(key.as_array_index(&agent), expected, "{str}");
        }
    }
}
