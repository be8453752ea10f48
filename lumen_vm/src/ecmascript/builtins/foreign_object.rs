// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Objects owned by the embedder.
//!
//! A foreign object has no properties in the heap. Member lookups go to the
//! agent's [`HostHooks`](crate::ecmascript::execution::HostHooks); when
//! [`Options::foreign_object_prototype`](crate::ecmascript::execution::Options)
//! is enabled, lookups that miss continue on an emulated native prototype
//! chosen by the host.

use std::{any::Any, fmt, ops::Index};

use tracing::trace;

use crate::{
    ecmascript::{
        execution::{Agent, HostHooks, JsResult},
        types::{InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyKey, Value},
    },
    heap::{CreateHeapData, Heap, indexes::ForeignObjectIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForeignObject(pub(crate) ForeignObjectIndex);

pub struct ForeignObjectHeapData {
    pub(crate) host_data: Box<dyn Any>,
}

impl fmt::Debug for ForeignObjectHeapData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignObjectHeapData")
            .finish_non_exhaustive()
    }
}

impl ForeignObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Wraps host data in a new foreign object.
    pub fn new<T: Any>(agent: &mut Agent, host_data: T) -> Self {
        agent.heap.create(ForeignObjectHeapData {
            host_data: Box::new(host_data),
        })
    }

    /// The host data of the object, if it is a `T`.
    pub fn host_data<T: Any>(self, agent: &Agent) -> Option<&T> {
        agent[self].host_data.downcast_ref::<T>()
    }
}

/// Resolves the emulated prototypes of foreign objects through the host.
///
/// The agent creates it the first time a foreign object's prototype is
/// needed. Nothing is cached: every resolution asks the host again.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ForeignPrototypeResolver {
    host_hooks: &'static dyn HostHooks,
}

impl ForeignPrototypeResolver {
    pub(crate) fn new(host_hooks: &'static dyn HostHooks) -> Self {
        Self { host_hooks }
    }

    fn resolve(self, agent: &Agent, object: ForeignObject) -> Option<Object> {
        self.host_hooks.foreign_object_prototype(agent, object)
    }
}

/// Returns the native prototype the foreign object currently appears to
/// inherit from.
pub(crate) fn foreign_object_prototype(
    agent: &mut Agent,
    object: ForeignObject,
) -> Option<Object> {
    let host_hooks = agent.host_hooks;
    let resolver = *agent
        .foreign_prototype_resolver
        .get_or_insert_with(|| ForeignPrototypeResolver::new(host_hooks));
    let prototype = resolver.resolve(agent, object);
    trace!(?object, ?prototype, "resolved foreign object prototype");
    prototype
}

/// Existence check on a foreign object: a host member, or when prototype
/// emulation is enabled, a property of the emulated prototype.
///
/// Continuing on the prototype counts as a call, so a host that hands back
/// a chain leading to the same object hits the call stack limit.
pub(crate) fn foreign_has_property(
    agent: &mut Agent,
    object: ForeignObject,
    property_key: PropertyKey,
) -> JsResult<bool> {
    let host_hooks = agent.host_hooks;
    if host_hooks.foreign_has_member(agent, object, property_key) {
        return Ok(true);
    }
    if !agent.options.foreign_object_prototype {
        return Ok(false);
    }
    let Some(prototype) = foreign_object_prototype(agent, object) else {
        return Ok(false);
    };
    agent.enter_call()?;
    let result = prototype.internal_has_property(agent, property_key);
    agent.leave_call();
    result
}

impl From<ForeignObject> for Value {
    fn from(value: ForeignObject) -> Self {
        Value::ForeignObject(value)
    }
}

impl From<ForeignObject> for Object {
    fn from(value: ForeignObject) -> Self {
        Object::ForeignObject(value)
    }
}

impl InternalSlots for ForeignObject {
    #[inline(always)]
    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        None
    }
}

impl InternalMethods for ForeignObject {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        if agent.options.foreign_object_prototype {
            Ok(foreign_object_prototype(agent, self))
        } else {
            Ok(None)
        }
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        foreign_has_property(agent, self, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        let host_hooks = agent.host_hooks;
        if let Some(value) = host_hooks.foreign_get_member(agent, self, property_key) {
            return Ok(value);
        }
        let Some(prototype) = self.internal_get_prototype_of(agent)? else {
            return Ok(Value::Undefined);
        };
        agent.enter_call()?;
        let result = prototype.internal_get(agent, property_key, receiver);
        agent.leave_call();
        result
    }
}

impl CreateHeapData<ForeignObjectHeapData, ForeignObject> for Heap {
    fn create(&mut self, data: ForeignObjectHeapData) -> ForeignObject {
        self.foreign_objects.push(data);
        ForeignObject(ForeignObjectIndex::last(&self.foreign_objects))
    }
}

impl Index<ForeignObject> for Agent {
    type Output = ForeignObjectHeapData;

    fn index(&self, index: ForeignObject) -> &Self::Output {
        self.heap
            .foreign_objects
            .get(index.get_index())
            .expect("ForeignObject out of bounds")
    }
}
