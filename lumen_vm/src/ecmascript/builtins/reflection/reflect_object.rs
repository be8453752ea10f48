// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::has_property, type_conversion::to_property_key,
        },
        builtins::{ArgumentsList, Behaviour, Builtin, builtin_function::create_builtin},
        execution::{Agent, JsResult, agent::ExceptionType},
        types::{Object, ObjectEntry, PropertyKey, String, Value},
    },
    heap::BUILTIN_STRING_MEMORY,
};

pub(crate) struct ReflectObject;

struct ReflectObjectHas;
impl Builtin for ReflectObjectHas {
    const NAME: String = BUILTIN_STRING_MEMORY.has;

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ReflectObject::has);
}

/// ### [28.1.8 Reflect.has ( target, propertyKey )](https://tc39.es/ecma262/#sec-reflect.has)
pub fn reflect_has(agent: &mut Agent, target: Value, property_key: Value) -> JsResult<bool> {
    // 1. If target is not an Object, throw a TypeError exception.
    let Ok(target) = Object::try_from(target) else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Value is not an object",
        ));
    };
    // 2. Let key be ? ToPropertyKey(propertyKey).
    let key = to_property_key(agent, property_key)?;
    // 3. Return ? target.[[HasProperty]](key).
    has_property(agent, target, key)
}

impl ReflectObject {
    fn has(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        reflect_has(agent, arguments.get(0), arguments.get(1)).map(Value::from)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.current_realm().intrinsics().reflect();
        let has = create_builtin::<ReflectObjectHas>(agent);
        agent[this]
            .properties
            .push(ObjectEntry::new_prototype_function_entry(
                PropertyKey::String(ReflectObjectHas::NAME),
                has.into(),
            ));
    }
}
