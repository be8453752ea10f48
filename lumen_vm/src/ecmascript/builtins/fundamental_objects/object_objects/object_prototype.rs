// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::has_own_property, type_conversion::to_property_key,
        },
        builtins::{
            ArgumentsList, Behaviour, Builtin, builtin_function::create_builtin,
        },
        execution::{Agent, JsResult, agent::ExceptionType},
        types::{Object, ObjectEntry, PropertyKey, String, Value},
    },
    heap::BUILTIN_STRING_MEMORY,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeHasOwnProperty;
impl Builtin for ObjectPrototypeHasOwnProperty {
    const NAME: String = BUILTIN_STRING_MEMORY.hasOwnProperty;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::has_own_property);
}

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.2 Object.prototype.hasOwnProperty ( V )](https://tc39.es/ecma262/#sec-object.prototype.hasownproperty)
    ///
    /// Primitive receivers have no wrapper objects here; they report no own
    /// properties.
    fn has_own_property(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = match Object::try_from(this_value) {
            Ok(o) => o,
            Err(()) if this_value.is_undefined() || this_value.is_null() => {
                return Err(agent.throw_exception_with_static_message(
                    ExceptionType::TypeError,
                    "Cannot convert undefined or null to object",
                ));
            }
            Err(()) => return Ok(false.into()),
        };
        // 3. Return ? HasOwnProperty(O, P).
        has_own_property(agent, o, p).map(Value::from)
    }

    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(_: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        let tag = match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => BUILTIN_STRING_MEMORY._object_Undefined_,
            // 2. If the this value is null, return "[object Null]".
            Value::Null => BUILTIN_STRING_MEMORY._object_Null_,
            // 8. Else if O has a [[Call]] internal method, let builtinTag be "Function".
            Value::BuiltinFunction(_) => BUILTIN_STRING_MEMORY._object_Function_,
            // 9. Else if O has an [[ErrorData]] internal slot, let builtinTag be "Error".
            Value::Error(_) => BUILTIN_STRING_MEMORY._object_Error_,
            // 14. Else, let builtinTag be "Object".
            _ => BUILTIN_STRING_MEMORY._object_Object_,
        };
        Ok(tag.into())
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        if this_value.is_undefined() || this_value.is_null() {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            ));
        }
        Ok(this_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().object_prototype();
        let has_own_property = create_builtin::<ObjectPrototypeHasOwnProperty>(agent);
        let to_string = create_builtin::<ObjectPrototypeToString>(agent);
        let value_of = create_builtin::<ObjectPrototypeValueOf>(agent);
        agent[this].properties.extend([
            ObjectEntry::new_prototype_function_entry(
                PropertyKey::String(ObjectPrototypeHasOwnProperty::NAME),
                has_own_property.into(),
            ),
            ObjectEntry::new_prototype_function_entry(
                PropertyKey::String(ObjectPrototypeToString::NAME),
                to_string.into(),
            ),
            ObjectEntry::new_prototype_function_entry(
                PropertyKey::String(ObjectPrototypeValueOf::NAME),
                value_of.into(),
            ),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, get_object_method},
            type_conversion::to_string,
        },
        builtins::ArgumentsList,
        execution::{Agent, DefaultHostHooks, Options},
        types::{Object, OrdinaryObject, PropertyKey, Value},
    };
    use crate::heap::BUILTIN_STRING_MEMORY;

    #[test]
    fn has_own_property_ignores_inherited_properties() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let object = OrdinaryObject::create_empty_object(&mut agent);
        let has_own_property = get_object_method(
            &mut agent,
            object.into(),
            PropertyKey::String(BUILTIN_STRING_MEMORY.hasOwnProperty),
        )
        .unwrap()
        .unwrap();
        let inherited = Value::String(BUILTIN_STRING_MEMORY.toString);
        let result = call_function(
            &mut agent,
            has_own_property,
            object.into(),
            Some(ArgumentsList(&[inherited])),
        )
        .unwrap();
        assert_eq!(result, Value::Boolean(false));

        let prototype: Object = agent.current_realm().intrinsics().object_prototype().into();
        let result = call_function(
            &mut agent,
            has_own_property,
            prototype.into(),
            Some(ArgumentsList(&[inherited])),
        )
        .unwrap();
        assert_eq!(result, Value::Boolean(true));

        let error = call_function(
            &mut agent,
            has_own_property,
            Value::Undefined,
            Some(ArgumentsList(&[inherited])),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(&agent),
            "TypeError: Cannot convert undefined or null to object"
        );
    }

    #[test]
    fn to_string_tags() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let object = OrdinaryObject::create_empty_object(&mut agent);
        let string = to_string(&mut agent, object.into()).unwrap();
        assert_eq!(string, BUILTIN_STRING_MEMORY._object_Object_);
        let error = agent.create_exception(
            crate::ecmascript::execution::ExceptionType::TypeError,
            "x",
        );
        let string = to_string(&mut agent, error).unwrap();
        assert_eq!(string, BUILTIN_STRING_MEMORY._object_Error_);
    }
}
