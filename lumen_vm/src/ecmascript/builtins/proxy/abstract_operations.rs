// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use super::{Proxy, data::ProxyHeapData};
use crate::ecmascript::{
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{InternalMethods, Object, PropertyKey},
};

/// The proxy internal method being performed; used to name it in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProxyTrap {
    GetPrototypeOf,
    IsExtensible,
    PreventExtensions,
    GetOwnPropertyDescriptor,
    DefineProperty,
    Has,
    Get,
    OwnKeys,
}

impl ProxyTrap {
    const fn revoked_message(self) -> &'static str {
        match self {
            ProxyTrap::GetPrototypeOf => {
                "Cannot perform 'getPrototypeOf' on a proxy that has been revoked"
            }
            ProxyTrap::IsExtensible => {
                "Cannot perform 'isExtensible' on a proxy that has been revoked"
            }
            ProxyTrap::PreventExtensions => {
                "Cannot perform 'preventExtensions' on a proxy that has been revoked"
            }
            ProxyTrap::GetOwnPropertyDescriptor => {
                "Cannot perform 'getOwnPropertyDescriptor' on a proxy that has been revoked"
            }
            ProxyTrap::DefineProperty => {
                "Cannot perform 'defineProperty' on a proxy that has been revoked"
            }
            ProxyTrap::Has => "Cannot perform 'has' on a proxy that has been revoked",
            ProxyTrap::Get => "Cannot perform 'get' on a proxy that has been revoked",
            ProxyTrap::OwnKeys => "Cannot perform 'ownKeys' on a proxy that has been revoked",
        }
    }
}

/// The target and handler of a proxy that has not been revoked.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NonRevokedProxy {
    pub(crate) target: Object,
    pub(crate) handler: Object,
}

/// ### [10.5.14 ValidateNonRevokedProxy ( proxy )](https://tc39.es/ecma262/#sec-validatenonrevokedproxy)
///
/// The abstract operation ValidateNonRevokedProxy takes argument
/// proxy (a Proxy exotic object) and returns either a normal completion containing unused or a throw completion.
/// It throws a TypeError exception if proxy has been revoked.
///
/// Returns the proxy's target and handler on success.
pub(crate) fn validate_non_revoked_proxy(
    agent: &mut Agent,
    proxy: Proxy,
    trap: ProxyTrap,
) -> JsResult<NonRevokedProxy> {
    let proxy_data = agent[proxy];
    match proxy_data {
        ProxyHeapData::NonRevoked {
            proxy_target,
            proxy_handler,
        } => {
            // 3. Return unused.
            Ok(NonRevokedProxy {
                target: proxy_target,
                handler: proxy_handler,
            })
        }
        // 1. If proxy.[[ProxyTarget]] is null, throw a TypeError exception.
        // 2. Assert: proxy.[[ProxyHandler]] is not null.
        ProxyHeapData::Revoked => Err(agent
            .throw_exception_with_static_message(ExceptionType::TypeError, trap.revoked_message())),
    }
}

/// ### [10.5.7 \[\[HasProperty\]\] ( P )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-hasproperty-p) steps 8.a-b
///
/// Called when a `has` trap reported `property_key` as absent. A trap may not
/// hide a property that the target can never lose or change: a
/// non-configurable accessor property, or a non-configurable non-writable
/// data property.
pub(crate) fn validate_has_trap_result(
    agent: &mut Agent,
    target: Object,
    property_key: PropertyKey,
) -> JsResult<()> {
    // a. Let targetDesc be ? target.[[GetOwnProperty]](P).
    let target_desc = target.internal_get_own_property(agent, property_key)?;
    // b. If targetDesc is not undefined, then
    if let Some(target_desc) = target_desc
        && target_desc.is_frozen()
    {
        debug!(
            key = %property_key.string_repr(agent),
            "has trap hid a frozen property"
        );
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Proxy 'has' trap returned false for a non-configurable, non-writable property",
        ));
    }
    Ok(())
}
