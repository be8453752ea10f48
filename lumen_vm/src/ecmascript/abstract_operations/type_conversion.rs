// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.

use super::{
    operations_on_objects::{call_function, get, get_object_method},
    testing_and_comparison::is_callable,
};
use crate::{
    ecmascript::{
        builtins::ArgumentsList,
        execution::{Agent, JsResult, agent::ExceptionType},
        types::{Object, PropertyKey, String, Value},
    },
    heap::{BUILTIN_STRING_MEMORY, WellKnownSymbolIndexes},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Ok(input) = Object::try_from(input) else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_object_method(
        agent,
        input,
        PropertyKey::Symbol(WellKnownSymbolIndexes::ToPrimitive.into()),
    )?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        let hint = match preferred_type {
            // i. If preferredType is not present, then
            // 1. Let hint be "default".
            None => BUILTIN_STRING_MEMORY.default,
            // ii. Else if preferredType is STRING, then
            // 1. Let hint be "string".
            Some(PreferredType::String) => BUILTIN_STRING_MEMORY.string,
            // iii. Else,
            // 1. Assert: preferredType is NUMBER.
            // 2. Let hint be "number".
            Some(PreferredType::Number) => BUILTIN_STRING_MEMORY.number,
        };
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(
            agent,
            exotic_to_prim,
            input.into(),
            Some(ArgumentsList(&[hint.into()])),
        )?;
        if !result.is_object() {
            // v. If result is not an Object, return result.
            Ok(result)
        } else {
            // vi. Throw a TypeError exception.
            Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Cannot convert object to primitive value",
            ))
        }
    } else {
        // c. If preferredType is not present, let preferredType be NUMBER.
        // d. Return ? OrdinaryToPrimitive(input, preferredType).
        ordinary_to_primitive(
            agent,
            input,
            preferred_type.unwrap_or(PreferredType::Number),
        )
    }
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from(BUILTIN_STRING_MEMORY.toString);
    let value_of_key = PropertyKey::from(BUILTIN_STRING_MEMORY.valueOf);
    let method_names = match hint {
        PreferredType::String => {
            // 1. If hint is STRING, then
            // a. Let methodNames be « "toString", "valueOf" ».
            [to_string_key, value_of_key]
        }
        PreferredType::Number => {
            // 2. Else,
            // a. Let methodNames be « "valueOf", "toString" ».
            [value_of_key, to_string_key]
        }
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if let Some(method) = is_callable(method) {
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, o.into(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception_with_static_message(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
///
/// The abstract operation ToBoolean takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It converts argument to a value of
/// type Boolean.
pub fn to_boolean(agent: &Agent, argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(value) => value,
        // 2. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or the
        //    empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Number(number) => !(number == 0.0 || number.is_nan()),
        Value::String(string) => !string.is_empty(agent),
        // 4. Return true.
        Value::Symbol(_)
        | Value::Object(_)
        | Value::BuiltinFunction(_)
        | Value::Error(_)
        | Value::Proxy(_)
        | Value::ForeignObject(_) => true,
    }
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
///
/// The abstract operation ToString takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a String
/// or a throw completion. It converts argument to a value of type String.
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(string) => Ok(string),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a string",
        )),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(BUILTIN_STRING_MEMORY.undefined),
        // 4. If argument is null, return "null".
        Value::Null => Ok(BUILTIN_STRING_MEMORY.null),
        // 5. If argument is true, return "true".
        // 6. If argument is false, return "false".
        Value::Boolean(value) => Ok(if value {
            BUILTIN_STRING_MEMORY.r#true
        } else {
            BUILTIN_STRING_MEMORY.r#false
        }),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(number) => {
            let mut buffer = ryu_js::Buffer::new();
            let str = format_number(&mut buffer, number);
            Ok(String::from_str(agent, str))
        }
        // 9. Assert: argument is an Object.
        // 10. Let primValue be ? ToPrimitive(argument, STRING).
        // 11. Assert: primValue is not an Object.
        // 12. Return ? ToString(primValue).
        Value::Object(_)
        | Value::BuiltinFunction(_)
        | Value::Error(_)
        | Value::Proxy(_)
        | Value::ForeignObject(_) => {
            let primitive = to_primitive(agent, argument, Some(PreferredType::String))?;
            to_string(agent, primitive)
        }
    }
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
///
/// The abstract operation ToPropertyKey takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a
/// property key or a throw completion. It converts argument to a value that
/// can be used as a property key.
pub fn to_property_key(agent: &mut Agent, argument: Value) -> JsResult<PropertyKey> {
    // Fast path: an existing key converts to itself without side effects.
    if let Ok(property_key) = PropertyKey::try_from(argument) {
        return Ok(property_key);
    }

    // 1. Let key be ? ToPrimitive(argument, STRING).
    let key = to_primitive(agent, argument, Some(PreferredType::String))?;

    // 2. If key is a Symbol, then
    if let Value::Symbol(symbol) = key {
        // a. Return key.
        return Ok(PropertyKey::Symbol(symbol));
    }

    // 3. Return ! ToString(key).
    Ok(PropertyKey::String(to_string(agent, key)?))
}

/// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
///
/// Radix 10 only.
pub(crate) fn format_number(buffer: &mut ryu_js::Buffer, number: f64) -> &str {
    buffer.format(number)
}
