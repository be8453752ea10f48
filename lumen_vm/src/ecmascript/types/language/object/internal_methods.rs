// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, OrdinaryObject, PropertyKey};
use crate::ecmascript::{
    builtins::ordinary::{
        ordinary_define_own_property, ordinary_get, ordinary_get_own_property,
        ordinary_has_property, ordinary_own_property_keys,
    },
    execution::{Agent, JsResult},
    types::{PropertyDescriptor, Value},
};

/// ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
///
/// Exotic objects that store their own properties in an ordinary object keep
/// that object as their backing object. Objects without one behave as an
/// empty, non-extensible object with a null prototype unless they override
/// the relevant internal methods.
pub trait InternalSlots
where
    Self: Sized + Copy + Into<Object>,
{
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject>;

    /// #### \[\[Extensible\]\]
    fn internal_extensible(self, agent: &Agent) -> bool {
        self.get_backing_object(agent)
            .is_some_and(|backing_object| agent[backing_object].extensible)
    }

    /// #### \[\[Extensible\]\]
    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        if let Some(backing_object) = self.get_backing_object(agent) {
            agent[backing_object].extensible = value;
        }
    }

    /// #### \[\[Prototype\]\]
    ///
    /// All ordinary objects have an internal slot called \[\[Prototype\]\]. The value
    /// of this internal slot is either null or an object and is used for
    /// implementing inheritance.
    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        self.get_backing_object(agent)
            .and_then(|backing_object| agent[backing_object].prototype)
    }
}

/// ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
pub trait InternalMethods
where
    Self: InternalSlots,
{
    /// ## \[\[GetPrototypeOf\]\]
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        // 1. Return O.[[Prototype]].
        Ok(self.internal_prototype(agent))
    }

    /// ## \[\[IsExtensible\]\]
    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        // 1. Return O.[[Extensible]].
        Ok(self.internal_extensible(agent))
    }

    /// ## \[\[PreventExtensions\]\]
    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        // 1. Set O.[[Extensible]] to false.
        self.internal_set_extensible(agent, false);
        // 2. Return true.
        Ok(true)
    }

    /// ## \[\[GetOwnProperty\]\]
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        // 1. Return OrdinaryGetOwnProperty(O, P).
        Ok(self
            .get_backing_object(agent)
            .and_then(|backing_object| {
                ordinary_get_own_property(agent, backing_object, property_key)
            }))
    }

    /// ## \[\[DefineOwnProperty\]\]
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        // 1. Return ? OrdinaryDefineOwnProperty(O, P, Desc).
        match self.get_backing_object(agent) {
            Some(backing_object) => Ok(ordinary_define_own_property(
                agent,
                backing_object,
                property_key,
                property_descriptor,
            )),
            None => Ok(false),
        }
    }

    /// ## \[\[HasProperty\]\]
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        // 1. Return ? OrdinaryHasProperty(O, P).
        match self.get_backing_object(agent) {
            Some(backing_object) => ordinary_has_property(agent, backing_object, property_key),
            None => {
                // 3. Let parent be ? O.[[GetPrototypeOf]]().
                let parent = self.internal_get_prototype_of(agent)?;
                // 4. If parent is not null, then
                if let Some(parent) = parent {
                    // a. Return ? parent.[[HasProperty]](P).
                    parent.internal_has_property(agent, property_key)
                } else {
                    // 5. Return false.
                    Ok(false)
                }
            }
        }
    }

    /// ## \[\[Get\]\]
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        // 1. Return ? OrdinaryGet(O, P, Receiver).
        match self.get_backing_object(agent) {
            Some(backing_object) => ordinary_get(agent, backing_object, property_key, receiver),
            None => {
                let parent = self.internal_get_prototype_of(agent)?;
                match parent {
                    Some(parent) => parent.internal_get(agent, property_key, receiver),
                    None => Ok(Value::Undefined),
                }
            }
        }
    }

    /// ## \[\[OwnPropertyKeys\]\]
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        // 1. Return OrdinaryOwnPropertyKeys(O).
        Ok(self
            .get_backing_object(agent)
            .map(|backing_object| ordinary_own_property_keys(agent, backing_object))
            .unwrap_or_default())
    }
}
