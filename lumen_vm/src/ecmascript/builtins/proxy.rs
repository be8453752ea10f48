// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.5 Proxy Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots)
//!
//! Only the `has` trap is dispatched to the handler. The other internal
//! methods check for revocation and then forward to the target.

use std::ops::{Index, IndexMut};

use abstract_operations::{
    NonRevokedProxy, ProxyTrap, validate_has_trap_result, validate_non_revoked_proxy,
};
use data::ProxyHeapData;
use tracing::trace;

use super::foreign_object::{ForeignObject, foreign_has_property};
use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, get_object_method},
            type_conversion::{to_boolean, to_property_key},
        },
        builtins::ArgumentsList,
        execution::{Agent, JsResult, agent::ExceptionType},
        types::{
            InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyDescriptor,
            PropertyKey, Value,
        },
    },
    heap::{BUILTIN_STRING_MEMORY, CreateHeapData, Heap, indexes::ProxyIndex},
};

pub(crate) mod abstract_operations;
pub mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proxy(pub(crate) ProxyIndex);

impl Proxy {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Revokes the proxy. Every later internal method call on it throws a
    /// TypeError.
    pub fn revoke(self, agent: &mut Agent) {
        agent[self] = ProxyHeapData::Revoked;
    }

    pub fn is_revoked(self, agent: &Agent) -> bool {
        matches!(agent[self], ProxyHeapData::Revoked)
    }

    /// \[\[ProxyTarget]], or None if the proxy was revoked.
    pub fn target(self, agent: &Agent) -> Option<Object> {
        match agent[self] {
            ProxyHeapData::NonRevoked { proxy_target, .. } => Some(proxy_target),
            ProxyHeapData::Revoked => None,
        }
    }

    /// \[\[ProxyHandler]], or None if the proxy was revoked.
    pub fn handler(self, agent: &Agent) -> Option<Object> {
        match agent[self] {
            ProxyHeapData::NonRevoked { proxy_handler, .. } => Some(proxy_handler),
            ProxyHeapData::Revoked => None,
        }
    }
}

/// ### [10.5.15 ProxyCreate ( target, handler )](https://tc39.es/ecma262/#sec-proxycreate)
///
/// The abstract operation ProxyCreate takes arguments target (an ECMAScript
/// language value) and handler (an ECMAScript language value) and returns
/// either a normal completion containing a Proxy exotic object or a throw
/// completion. It is used to specify the creation of new Proxy objects.
pub fn proxy_create(agent: &mut Agent, target: Value, handler: Value) -> JsResult<Proxy> {
    // 1. If target is not an Object, throw a TypeError exception.
    let Ok(target) = Object::try_from(target) else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Proxy target must be an object",
        ));
    };
    // 2. If handler is not an Object, throw a TypeError exception.
    let Ok(handler) = Object::try_from(handler) else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Proxy handler must be an object",
        ));
    };
    // 3. Let P be MakeBasicObject(« [[ProxyHandler]], [[ProxyTarget]] »).
    // 4-6. Set P's essential internal methods to the definitions specified in 10.5.
    // 7. Set P.[[ProxyTarget]] to target.
    // 8. Set P.[[ProxyHandler]] to handler.
    // 9. Return P.
    Ok(agent.heap.create(ProxyHeapData::NonRevoked {
        proxy_target: target,
        proxy_handler: handler,
    }))
}

/// What a proxy forwards to: an object of this heap, or an object owned by
/// the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyTarget {
    Native(Object),
    Foreign(ForeignObject),
}

impl From<Object> for ProxyTarget {
    fn from(value: Object) -> Self {
        match value {
            Object::ForeignObject(object) => ProxyTarget::Foreign(object),
            object => ProxyTarget::Native(object),
        }
    }
}

impl From<ProxyTarget> for Object {
    fn from(value: ProxyTarget) -> Self {
        match value {
            ProxyTarget::Native(object) => object,
            ProxyTarget::Foreign(object) => object.into(),
        }
    }
}

/// Existence check used when the handler has no `has` trap.
///
/// A native target answers through its own \[\[HasProperty]], so inherited
/// properties count and a proxy target dispatches to its own handler. A
/// foreign target is asked through the host, falling back to its emulated
/// prototype when that is enabled.
pub fn target_has_property(
    agent: &mut Agent,
    target: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    match ProxyTarget::from(target) {
        ProxyTarget::Native(target) => target.internal_has_property(agent, property_key),
        ProxyTarget::Foreign(target) => foreign_has_property(agent, target, property_key),
    }
}

/// ### [10.5.7 \[\[HasProperty\]\] ( P )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-hasproperty-p)
///
/// The \[\[HasProperty]] internal method of a Proxy exotic object O takes
/// argument P (a property key) and returns either a normal completion
/// containing a Boolean or a throw completion.
///
/// `key` may be any value; it is converted with ToPropertyKey before the
/// proxy is inspected, so conversion side effects and errors come before
/// the revocation check.
///
/// > #### Note
/// > \[\[HasProperty]] for Proxy objects enforces the following invariant:
/// >
/// > A property cannot be reported as non-existent if it exists as a
/// > non-configurable own property of the target object and is either an
/// > accessor or non-writable. Foreign targets are not checked.
pub fn proxy_has_property(agent: &mut Agent, proxy: Proxy, key: Value) -> JsResult<bool> {
    let property_key = to_property_key(agent, key)?;
    // 1. Perform ? ValidateNonRevokedProxy(O).
    // 2. Let target be O.[[ProxyTarget]].
    // 3. Let handler be O.[[ProxyHandler]].
    // 4. Assert: handler is an Object.
    let NonRevokedProxy { target, handler } =
        validate_non_revoked_proxy(agent, proxy, ProxyTrap::Has)?;
    // 5. Let trap be ? GetMethod(handler, "has").
    let trap = get_object_method(agent, handler, BUILTIN_STRING_MEMORY.has.into())?;
    // 6. If trap is undefined, then
    let Some(trap) = trap else {
        trace!(?proxy, "no has trap, asking the target");
        // a. Return ? target.[[HasProperty]](P).
        return target_has_property(agent, target, property_key);
    };
    // 7. Let booleanTrapResult be ToBoolean(? Call(trap, handler, « target, P »)).
    let trap_result = call_function(
        agent,
        trap,
        handler.into(),
        Some(ArgumentsList(&[target.into(), property_key.into_value()])),
    )?;
    let boolean_trap_result = to_boolean(agent, trap_result);
    trace!(?proxy, boolean_trap_result, "has trap returned");
    // 8. If booleanTrapResult is false, then
    if !boolean_trap_result
        && let ProxyTarget::Native(target) = ProxyTarget::from(target)
    {
        // a-b. The target may not have the property as a frozen own property.
        validate_has_trap_result(agent, target, property_key)?;
    }
    // 9. Return booleanTrapResult.
    Ok(boolean_trap_result)
}

impl From<Proxy> for Value {
    fn from(value: Proxy) -> Self {
        Value::Proxy(value)
    }
}

impl From<Proxy> for Object {
    fn from(value: Proxy) -> Self {
        Object::Proxy(value)
    }
}

impl InternalSlots for Proxy {
    #[inline(always)]
    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        None
    }
}

impl InternalMethods for Proxy {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::GetPrototypeOf)?;
        target.internal_get_prototype_of(agent)
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::IsExtensible)?;
        target.internal_is_extensible(agent)
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::PreventExtensions)?;
        target.internal_prevent_extensions(agent)
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::GetOwnPropertyDescriptor)?;
        target.internal_get_own_property(agent, property_key)
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::DefineProperty)?;
        target.internal_define_own_property(agent, property_key, property_descriptor)
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        proxy_has_property(agent, self, property_key.into_value())
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::Get)?;
        target.internal_get(agent, property_key, receiver)
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        let NonRevokedProxy { target, .. } =
            validate_non_revoked_proxy(agent, self, ProxyTrap::OwnKeys)?;
        target.internal_own_property_keys(agent)
    }
}

impl CreateHeapData<ProxyHeapData, Proxy> for Heap {
    fn create(&mut self, data: ProxyHeapData) -> Proxy {
        self.proxys.push(data);
        Proxy(ProxyIndex::last(&self.proxys))
    }
}

impl Index<Proxy> for Agent {
    type Output = ProxyHeapData;

    fn index(&self, index: Proxy) -> &Self::Output {
        self.heap
            .proxys
            .get(index.get_index())
            .expect("Proxy out of bounds")
    }
}

impl IndexMut<Proxy> for Agent {
    fn index_mut(&mut self, index: Proxy) -> &mut Self::Output {
        self.heap
            .proxys
            .get_mut(index.get_index())
            .expect("Proxy out of bounds")
    }
}
