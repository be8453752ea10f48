// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod internal_methods;
mod property_key;

use std::ops::{Index, IndexMut};

pub(crate) use data::{ObjectEntry, ObjectEntryPropertyDescriptor};
pub use data::ObjectHeapData;
pub use internal_methods::{InternalMethods, InternalSlots};
pub use property_key::PropertyKey;

use super::Value;
use crate::{
    ecmascript::{
        builtins::{
            builtin_function::BuiltinFunction, error::Error, foreign_object::ForeignObject,
            proxy::Proxy,
        },
        execution::{Agent, JsResult},
        types::PropertyDescriptor,
    },
    heap::{CreateHeapData, Heap, indexes::ObjectIndex},
};

/// An object with ordinary internal methods whose own properties live in an
/// [`ObjectHeapData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// In Lumen an Object is a subset of [`Value`]s: every variant here has a
/// matching variant there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
    Error(Error),
    Proxy(Proxy),
    ForeignObject(ForeignObject),
}

impl OrdinaryObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
    pub fn create(agent: &mut Agent, prototype: Option<Object>) -> Self {
        agent.heap.create(ObjectHeapData::new(prototype))
    }

    /// Creates an empty extensible object inheriting from
    /// `%Object.prototype%`.
    pub fn create_empty_object(agent: &mut Agent) -> Self {
        let prototype = agent.current_realm().intrinsics().object_prototype();
        Self::create(agent, Some(prototype.into()))
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        match value {
            Object::Object(data) => Value::Object(data),
            Object::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Object::Error(data) => Value::Error(data),
            Object::Proxy(data) => Value::Proxy(data),
            Object::ForeignObject(data) => Value::ForeignObject(data),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(data) => Ok(Object::Object(data)),
            Value::BuiltinFunction(data) => Ok(Object::BuiltinFunction(data)),
            Value::Error(data) => Ok(Object::Error(data)),
            Value::Proxy(data) => Ok(Object::Proxy(data)),
            Value::ForeignObject(data) => Ok(Object::ForeignObject(data)),
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::String(_)
            | Value::Symbol(_)
            | Value::Number(_) => Err(()),
        }
    }
}

impl InternalSlots for OrdinaryObject {
    #[inline(always)]
    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        Some(self)
    }
}

impl InternalMethods for OrdinaryObject {}

macro_rules! dispatch {
    ($object: expr, $method: ident($($arg: expr),*)) => {
        match $object {
            Object::Object(data) => data.$method($($arg),*),
            Object::BuiltinFunction(data) => data.$method($($arg),*),
            Object::Error(data) => data.$method($($arg),*),
            Object::Proxy(data) => data.$method($($arg),*),
            Object::ForeignObject(data) => data.$method($($arg),*),
        }
    };
}

impl InternalSlots for Object {
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        dispatch!(self, get_backing_object(agent))
    }
}

impl InternalMethods for Object {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        dispatch!(self, internal_get_prototype_of(agent))
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        dispatch!(self, internal_is_extensible(agent))
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        dispatch!(self, internal_prevent_extensions(agent))
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        dispatch!(self, internal_get_own_property(agent, property_key))
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        dispatch!(
            self,
            internal_define_own_property(agent, property_key, property_descriptor)
        )
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        dispatch!(self, internal_has_property(agent, property_key))
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        dispatch!(self, internal_get(agent, property_key, receiver))
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        dispatch!(self, internal_own_property_keys(agent))
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(data);
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.heap
            .objects
            .get(index.get_index())
            .expect("Object out of bounds")
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.get_index())
            .expect("Object out of bounds")
    }
}
