// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::Cell;

use lumen_vm::ecmascript::{
    abstract_operations::operations_on_objects::{create_data_property_or_throw, get},
    builtins::{
        ArgumentsList, Behaviour, BuiltinFunctionArgs, ForeignObject, create_builtin_function,
        proxy::{proxy_create, proxy_has_property, target_has_property},
    },
    execution::{Agent, HostHooks, JsResult, Options},
    types::{Object, OrdinaryObject, PropertyKey, Value},
};

thread_local! {
    static PROTOTYPE_LOOKUPS: Cell<usize> = const { Cell::new(0) };
}

/// Host data of the foreign objects in these tests.
struct HostObject {
    members: Vec<&'static str>,
    prototype: Cell<Option<Object>>,
}

#[derive(Debug)]
struct TestHostHooks;

impl HostHooks for TestHostHooks {
    fn foreign_has_member(&self, agent: &Agent, object: ForeignObject, key: PropertyKey) -> bool {
        let Some(host_object) = object.host_data::<HostObject>(agent) else {
            return false;
        };
        let PropertyKey::String(key) = key else {
            return false;
        };
        host_object
            .members
            .iter()
            .any(|member| *member == key.as_str(agent))
    }

    fn foreign_get_member(
        &self,
        agent: &Agent,
        object: ForeignObject,
        key: PropertyKey,
    ) -> Option<Value> {
        if self.foreign_has_member(agent, object, key) {
            Some(Value::Boolean(true))
        } else {
            None
        }
    }

    fn foreign_object_prototype(&self, agent: &Agent, object: ForeignObject) -> Option<Object> {
        PROTOTYPE_LOOKUPS.set(PROTOTYPE_LOOKUPS.get() + 1);
        object
            .host_data::<HostObject>(agent)
            .and_then(|host_object| host_object.prototype.get())
    }
}

fn new_agent(foreign_object_prototype: bool) -> Agent {
    Agent::new(
        Options {
            foreign_object_prototype,
            ..Default::default()
        },
        &TestHostHooks,
    )
}

fn prototype_with_x(agent: &mut Agent) -> Object {
    let prototype: Object = OrdinaryObject::create_empty_object(agent).into();
    let x = PropertyKey::from_str(agent, "x");
    create_data_property_or_throw(agent, prototype, x, Value::from(1)).unwrap();
    prototype
}

fn always_false(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Boolean(false))
}

#[test]
fn emulated_prototype_answers_for_missing_members() {
    let mut agent = new_agent(true);
    let prototype = prototype_with_x(&mut agent);
    let target = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec!["y"],
            prototype: Cell::new(Some(prototype)),
        },
    );
    let handler = OrdinaryObject::create_empty_object(&mut agent);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    for (key, expected) in [("x", true), ("y", true), ("z", false)] {
        let key = Value::from_str(&mut agent, key);
        assert_eq!(proxy_has_property(&mut agent, proxy, key).unwrap(), expected);
    }
    // Only the keys the host does not have reach the prototype.
    assert_eq!(PROTOTYPE_LOOKUPS.get(), 2);
}

#[test]
fn prototype_is_ignored_without_emulation() {
    let mut agent = new_agent(false);
    let prototype = prototype_with_x(&mut agent);
    let target = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec!["y"],
            prototype: Cell::new(Some(prototype)),
        },
    );
    let handler = OrdinaryObject::create_empty_object(&mut agent);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let x = Value::from_str(&mut agent, "x");
    let y = Value::from_str(&mut agent, "y");
    assert!(!proxy_has_property(&mut agent, proxy, x).unwrap());
    assert!(proxy_has_property(&mut agent, proxy, y).unwrap());
    assert_eq!(PROTOTYPE_LOOKUPS.get(), 0);
}

#[test]
fn foreign_object_without_prototype_has_only_its_members() {
    let mut agent = new_agent(true);
    let target = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec!["y"],
            prototype: Cell::new(None),
        },
    );
    let x = PropertyKey::from_str(&mut agent, "x");
    let y = PropertyKey::from_str(&mut agent, "y");
    assert!(!target_has_property(&mut agent, target.into(), x).unwrap());
    assert!(target_has_property(&mut agent, target.into(), y).unwrap());
}

#[test]
fn foreign_target_is_exempt_from_the_frozen_property_check() {
    let mut agent = new_agent(true);
    let target = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec!["y"],
            prototype: Cell::new(None),
        },
    );
    let trap = create_builtin_function(
        &mut agent,
        Behaviour::Regular(always_false),
        BuiltinFunctionArgs::new(2, "has"),
    );
    let handler: Object = OrdinaryObject::create_empty_object(&mut agent).into();
    let has = PropertyKey::from_str(&mut agent, "has");
    create_data_property_or_throw(&mut agent, handler, has, trap.into()).unwrap();
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let y = Value::from_str(&mut agent, "y");
    assert!(!proxy_has_property(&mut agent, proxy, y).unwrap());
}

#[test]
fn foreign_handler_can_supply_the_trap() {
    let mut agent = new_agent(false);
    let target = OrdinaryObject::create_empty_object(&mut agent);
    // The handler's `has` member reads as `true`, which is not callable.
    let handler = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec!["has"],
            prototype: Cell::new(None),
        },
    );
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(error.to_string(&agent), "TypeError: Not a callable object");

    let has = PropertyKey::from_str(&mut agent, "has");
    assert_eq!(get(&mut agent, handler.into(), has).unwrap(), Value::Boolean(true));
}

#[test]
fn prototype_changes_made_by_the_host_are_seen() {
    let mut agent = new_agent(true);
    let empty: Object = OrdinaryObject::create_empty_object(&mut agent).into();
    let with_x = prototype_with_x(&mut agent);
    let target = ForeignObject::new(
        &mut agent,
        HostObject {
            members: vec![],
            prototype: Cell::new(Some(empty)),
        },
    );
    let handler = OrdinaryObject::create_empty_object(&mut agent);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let x = Value::from_str(&mut agent, "x");
    assert!(!proxy_has_property(&mut agent, proxy, x).unwrap());

    let host_object = target.host_data::<HostObject>(&agent).unwrap();
    host_object.prototype.set(Some(with_x));
    assert!(proxy_has_property(&mut agent, proxy, x).unwrap());
    assert_eq!(PROTOTYPE_LOOKUPS.get(), 2);
}
