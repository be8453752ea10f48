// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::call_function, testing_and_comparison::same_value,
    },
    execution::{Agent, JsResult},
    types::{
        InternalMethods, ObjectEntry, ObjectEntryPropertyDescriptor, OrdinaryObject,
        PropertyDescriptor, PropertyKey, Value,
    },
};

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2-9. Set D's fields from the attributes of X and return D.
    agent[object]
        .find(property_key)
        .map(|entry| entry.value.to_property_descriptor())
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = ordinary_get_own_property(agent, object, property_key);

    // 2. Let extensible be ? IsExtensible(O).
    let extensible = agent[object].extensible;

    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    validate_and_apply_property_descriptor(
        agent,
        object,
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }

        // c-d. Create an own property named P of object O whose attributes
        //      are set to the value of the corresponding field in Desc if Desc
        //      has that field, or to the attribute's default value otherwise.
        agent[object].properties.push(ObjectEntry {
            key: property_key,
            value: ObjectEntryPropertyDescriptor::from_new_descriptor(&descriptor),
        });

        // e. Return true.
        return true;
    };

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }

        // b. If Desc has an [[Enumerable]] field and SameValue(Desc.[[Enumerable]], current.[[Enumerable]])
        //    is false, return false.
        if descriptor.enumerable.is_some() && descriptor.enumerable != current.enumerable {
            return false;
        }

        // c. If IsGenericDescriptor(Desc) is false and SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current))
        //    is false, return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }

        // d. If IsAccessorDescriptor(current) is true, then
        if current.is_accessor_descriptor() {
            // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]], current.[[Get]]) is false,
            //    return false.
            if descriptor.get.is_some() && descriptor.get != current.get {
                return false;
            }

            // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]], current.[[Set]]) is
            //     false, return false.
            if descriptor.set.is_some() && descriptor.set != current.set {
                return false;
            }
        }
        // e. Else if current.[[Writable]] is false, then
        else if current.writable == Some(false) {
            // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is true, return false.
            if descriptor.writable == Some(true) {
                return false;
            }

            // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]], current.[[Value]])
            //     is false, return false.
            if let Some(value) = descriptor.value
                && !same_value(value, current.value.unwrap_or(Value::Undefined))
            {
                return false;
            }
        }
    }

    // 6. If O is not undefined, then
    let configurable = descriptor
        .configurable
        .or(current.configurable)
        .unwrap_or(false);
    let enumerable = descriptor
        .enumerable
        .or(current.enumerable)
        .unwrap_or(false);
    let replacement =
        // a. If IsDataDescriptor(current) is true and IsAccessorDescriptor(Desc) is true, then
        if current.is_data_descriptor() && descriptor.is_accessor_descriptor() {
            // iii. Replace the property named P of object O with an accessor
            //      property.
            ObjectEntryPropertyDescriptor::Accessor {
                get: descriptor.get.flatten(),
                set: descriptor.set.flatten(),
                enumerable,
                configurable,
            }
        }
        // b. Else if IsAccessorDescriptor(current) is true and IsDataDescriptor(Desc) is true, then
        else if current.is_accessor_descriptor() && descriptor.is_data_descriptor() {
            // iii. Replace the property named P of object O with a data
            //      property.
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
                writable: descriptor.writable.unwrap_or(false),
                enumerable,
                configurable,
            }
        }
        // c. Else,
        else if current.is_accessor_descriptor() {
            // i. For each field of Desc, set the corresponding attribute of the
            //    property named P of object O to the value of the field.
            ObjectEntryPropertyDescriptor::Accessor {
                get: descriptor.get.or(current.get).flatten(),
                set: descriptor.set.or(current.set).flatten(),
                enumerable,
                configurable,
            }
        } else {
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor
                    .value
                    .or(current.value)
                    .unwrap_or(Value::Undefined),
                writable: descriptor
                    .writable
                    .or(current.writable)
                    .unwrap_or(false),
                enumerable,
                configurable,
            }
        };
    if let Some(entry) = agent[object].find_mut(property_key) {
        entry.value = replacement;
    }

    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    // 2. If hasOwn is not undefined, return true.
    if agent[object].find(property_key).is_some() {
        return Ok(true);
    }

    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    let parent = agent[object].prototype;

    // 4. If parent is not null, then
    if let Some(parent) = parent {
        // a. Return ? parent.[[HasProperty]](P).
        return parent.internal_has_property(agent, property_key);
    }

    // 5. Return false.
    Ok(false)
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = agent[object].find(property_key).map(|entry| entry.value) else {
        // 2. If desc is undefined, then

        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = agent[object].prototype else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };

        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };

    match descriptor {
        // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
        ObjectEntryPropertyDescriptor::Data { value, .. } => Ok(value),
        // 4. Assert: IsAccessorDescriptor(desc) is true.
        // 5. Let getter be desc.[[Get]].
        ObjectEntryPropertyDescriptor::Accessor { get, .. } => match get {
            // 6. If getter is undefined, return undefined.
            None => Ok(Value::Undefined),
            // 7. Return ? Call(getter, Receiver).
            Some(getter) => call_function(agent, getter, receiver, None),
        },
    }
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
pub(crate) fn ordinary_own_property_keys(
    agent: &Agent,
    object: OrdinaryObject,
) -> Vec<PropertyKey> {
    let properties = &agent[object].properties;
    // 1. Let keys be a new empty List.
    let mut integer_keys = vec![];
    let mut keys = Vec::with_capacity(properties.len());
    let mut symbol_keys = vec![];

    for entry in properties {
        match entry.key {
            PropertyKey::Symbol(_) => symbol_keys.push(entry.key),
            PropertyKey::String(_) => match entry.key.as_array_index(agent) {
                Some(index) => integer_keys.push((index, entry.key)),
                // 3. For each own property key P of O such that P is a String
                //    and P is not an array index, in ascending chronological
                //    order of property creation, do
                //    a. Append P to keys.
                None => keys.push(entry.key),
            },
        }
    }

    // 2. For each own property key P of O such that P is an array index,
    if !integer_keys.is_empty() {
        // in ascending numeric index order, do
        integer_keys.sort_by_key(|(index, _)| *index);
        // a. Append P to keys.
        keys.splice(0..0, integer_keys.into_iter().map(|(_, key)| key));
    }

    // 4. For each own property key P of O such that P is a Symbol, in
    //    ascending chronological order of property creation, do
    //    a. Append P to keys.
    keys.extend(symbol_keys);

    // 5. Return keys.
    keys
}
