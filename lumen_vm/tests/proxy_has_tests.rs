// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};

use lumen_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::{
            create_data_property_or_throw, define_property_or_throw, has_property,
            integrity::Frozen, set_integrity_level,
        },
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, RegularFn, create_builtin_function,
            proxy::{Proxy, proxy_create, proxy_has_property},
            reflection::reflect_has,
        },
        execution::{Agent, DefaultHostHooks, ExceptionType, InterruptHandle, JsResult, Options},
        syntax_directed_operations::relational_operators::evaluate_in,
        types::{Function, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, Symbol, Value},
    },
    heap::BUILTIN_STRING_MEMORY,
};

thread_local! {
    static LOG: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    static TRAP_CALLS: Cell<usize> = const { Cell::new(0) };
    static TRAP_ARGUMENTS: RefCell<Vec<Value>> = const { RefCell::new(Vec::new()) };
    static TRAP_THIS: Cell<Value> = const { Cell::new(Value::Undefined) };
    static TRAP_FUNCTION: Cell<Value> = const { Cell::new(Value::Undefined) };
    static THROWN: Cell<Value> = const { Cell::new(Value::Undefined) };
    static RECURSIVE_PROXY: Cell<Option<Proxy>> = const { Cell::new(None) };
    static INTERRUPT: RefCell<Option<InterruptHandle>> = const { RefCell::new(None) };
}

fn log(entry: &'static str) {
    LOG.with_borrow_mut(|log| log.push(entry));
}

fn take_log() -> Vec<&'static str> {
    LOG.with_borrow_mut(std::mem::take)
}

fn new_agent() -> Agent {
    Agent::new(Options::default(), &DefaultHostHooks)
}

fn function(agent: &mut Agent, behaviour: RegularFn, length: u8, name: &str) -> Function {
    create_builtin_function(
        agent,
        Behaviour::Regular(behaviour),
        BuiltinFunctionArgs::new(length, name),
    )
    .into()
}

fn object_with(agent: &mut Agent, properties: &[(&str, Value)]) -> Object {
    let object: Object = OrdinaryObject::create_empty_object(agent).into();
    for &(key, value) in properties {
        let key = PropertyKey::from_str(agent, key);
        create_data_property_or_throw(agent, object, key, value).unwrap();
    }
    object
}

fn handler_with_trap(agent: &mut Agent, trap: RegularFn) -> Object {
    let trap = function(agent, trap, 2, "has");
    object_with(agent, &[("has", trap.into())])
}

fn frozen_target(agent: &mut Agent) -> Object {
    let target = object_with(agent, &[("a", Value::from(1))]);
    assert!(set_integrity_level::<Frozen>(agent, target).unwrap());
    target
}

fn always_false(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    TRAP_CALLS.set(TRAP_CALLS.get() + 1);
    Ok(Value::Boolean(false))
}

fn returns_one(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    TRAP_CALLS.set(TRAP_CALLS.get() + 1);
    Ok(Value::from(1))
}

fn records_arguments(_: &mut Agent, this: Value, arguments: ArgumentsList) -> JsResult<Value> {
    TRAP_THIS.set(this);
    TRAP_ARGUMENTS.set(arguments.to_vec());
    Ok(Value::Boolean(true))
}

fn logging_trap(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    log("trap");
    Ok(Value::Boolean(false))
}

fn has_getter(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    log("lookup");
    Ok(TRAP_FUNCTION.get())
}

fn logging_to_string(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    log("key");
    Ok(Value::from_str(agent, "a"))
}

fn throwing(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    let error = agent.throw_exception(ExceptionType::Error, "boom");
    THROWN.set(error.value());
    Err(error)
}

fn recursing_trap(agent: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
    let proxy = RECURSIVE_PROXY.get().unwrap();
    proxy_has_property(agent, proxy, arguments.get(1)).map(Value::from)
}

fn interrupting_trap(agent: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
    INTERRUPT.with_borrow(|handle| handle.as_ref().unwrap().interrupt());
    let proxy = RECURSIVE_PROXY.get().unwrap();
    proxy_has_property(agent, proxy, arguments.get(1)).map(Value::from)
}

/// A key object whose string conversion is observable.
fn logging_key(agent: &mut Agent) -> Value {
    let to_string = function(agent, logging_to_string, 0, "toString");
    object_with(agent, &[("toString", to_string.into())]).into()
}

#[test]
fn frozen_property_cannot_be_reported_missing() {
    let mut agent = new_agent();
    let target = frozen_target(&mut agent);
    let handler = handler_with_trap(&mut agent, always_false);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(
        error.to_string(&agent),
        "TypeError: Proxy 'has' trap returned false for a non-configurable, non-writable property"
    );
    // A property the target does not have may be reported missing.
    let key = Value::from_str(&mut agent, "b");
    assert!(!proxy_has_property(&mut agent, proxy, key).unwrap());
}

#[test]
fn missing_trap_asks_the_target() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[("a", Value::from(1))]);
    let handler = object_with(&mut agent, &[]);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let a = Value::from_str(&mut agent, "a");
    let b = Value::from_str(&mut agent, "b");
    assert!(proxy_has_property(&mut agent, proxy, a).unwrap());
    assert!(!proxy_has_property(&mut agent, proxy, b).unwrap());
}

#[test]
fn truthy_trap_result_skips_the_invariant_check() {
    let mut agent = new_agent();
    let target = frozen_target(&mut agent);
    let handler = handler_with_trap(&mut agent, returns_one);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    for key in ["a", "b"] {
        let key = Value::from_str(&mut agent, key);
        assert!(proxy_has_property(&mut agent, proxy, key).unwrap());
    }
    assert_eq!(TRAP_CALLS.get(), 2);
}

#[test]
fn trap_less_proxy_is_transparent() {
    let mut agent = new_agent();
    let prototype = object_with(&mut agent, &[("inherited", Value::Null)]);
    let target: Object = OrdinaryObject::create(&mut agent, Some(prototype)).into();
    let own = PropertyKey::from_str(&mut agent, "own");
    create_data_property_or_throw(&mut agent, target, own, Value::Undefined).unwrap();
    let symbol = Symbol::new(&mut agent, Some("sym"));
    create_data_property_or_throw(&mut agent, target, symbol.into(), Value::Undefined).unwrap();
    let handler = object_with(&mut agent, &[]);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();

    let other_symbol = Symbol::new(&mut agent, Some("sym"));
    let keys = [
        own,
        PropertyKey::from_str(&mut agent, "inherited"),
        PropertyKey::from_str(&mut agent, "missing"),
        symbol.into(),
        other_symbol.into(),
    ];
    for key in keys {
        assert_eq!(
            proxy_has_property(&mut agent, proxy, key.into_value()).unwrap(),
            has_property(&mut agent, target, key).unwrap(),
        );
    }
}

#[test]
fn trap_receives_handler_target_and_coerced_key() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[]);
    let handler = handler_with_trap(&mut agent, records_arguments);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    assert!(proxy_has_property(&mut agent, proxy, Value::from(42)).unwrap());
    assert_eq!(TRAP_THIS.get(), Value::from(handler));
    let arguments = TRAP_ARGUMENTS.take();
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0], Value::from(target));
    let key = Value::from_str(&mut agent, "42");
    assert_eq!(arguments[1], key);
}

#[test]
fn side_effects_happen_in_order() {
    let mut agent = new_agent();
    let target = frozen_target(&mut agent);
    let trap = function(&mut agent, logging_trap, 2, "has");
    TRAP_FUNCTION.set(trap.into());
    let getter = function(&mut agent, has_getter, 0, "get has");
    let handler = object_with(&mut agent, &[]);
    define_property_or_throw(
        &mut agent,
        handler,
        BUILTIN_STRING_MEMORY.has.into(),
        PropertyDescriptor {
            get: Some(Some(getter)),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = logging_key(&mut agent);
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert!(error.to_string(&agent).starts_with("TypeError: Proxy 'has' trap"));
    assert_eq!(take_log(), ["key", "lookup", "trap"]);
}

#[test]
fn key_is_coerced_before_the_revocation_check() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[]);
    let handler = handler_with_trap(&mut agent, always_false);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    proxy.revoke(&mut agent);
    let key = logging_key(&mut agent);
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(
        error.to_string(&agent),
        "TypeError: Cannot perform 'has' on a proxy that has been revoked"
    );
    assert_eq!(take_log(), ["key"]);
    assert_eq!(TRAP_CALLS.get(), 0);
}

#[test]
fn key_coercion_errors_propagate() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[]);
    let handler = handler_with_trap(&mut agent, always_false);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let to_string = function(&mut agent, throwing, 0, "toString");
    let key = object_with(&mut agent, &[("toString", to_string.into())]);
    let error = proxy_has_property(&mut agent, proxy, key.into()).unwrap_err();
    assert_eq!(error.value(), THROWN.get());
    assert_eq!(error.to_string(&agent), "Error: boom");
    assert_eq!(TRAP_CALLS.get(), 0);
}

#[test]
fn trap_errors_propagate_unchanged() {
    let mut agent = new_agent();
    let target = frozen_target(&mut agent);
    let handler = handler_with_trap(&mut agent, throwing);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(error.value(), THROWN.get());
}

#[test]
fn non_callable_trap_is_a_type_error() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[]);
    let handler = object_with(&mut agent, &[("has", Value::from(5))]);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(error.to_string(&agent), "TypeError: Not a callable object");
}

#[test]
fn nullish_trap_falls_through_to_the_target() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[("a", Value::from(1))]);
    for trap in [Value::Undefined, Value::Null] {
        let handler = object_with(&mut agent, &[("has", trap)]);
        let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
        let key = Value::from_str(&mut agent, "a");
        assert!(proxy_has_property(&mut agent, proxy, key).unwrap());
    }
}

#[test]
fn trap_inherited_by_the_handler_is_used() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[("a", Value::from(1))]);
    let handler_prototype = handler_with_trap(&mut agent, always_false);
    let handler = OrdinaryObject::create(&mut agent, Some(handler_prototype));
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    assert!(!proxy_has_property(&mut agent, proxy, key).unwrap());
    assert_eq!(TRAP_CALLS.get(), 1);
}

#[test]
fn pure_trap_is_idempotent() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[("a", Value::from(1))]);
    let handler = handler_with_trap(&mut agent, always_false);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let first = proxy_has_property(&mut agent, proxy, key).unwrap();
    let second = proxy_has_property(&mut agent, proxy, key).unwrap();
    assert_eq!(first, second);
    assert_eq!(TRAP_CALLS.get(), 2);
}

#[test]
fn nested_proxies_dispatch_to_the_inner_trap() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[]);
    let inner_handler = handler_with_trap(&mut agent, returns_one);
    let inner = proxy_create(&mut agent, target.into(), inner_handler.into()).unwrap();
    let outer_handler = object_with(&mut agent, &[]);
    let outer = proxy_create(&mut agent, inner.into(), outer_handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "anything");
    assert!(proxy_has_property(&mut agent, outer, key).unwrap());
    assert_eq!(TRAP_CALLS.get(), 1);

    inner.revoke(&mut agent);
    let error = proxy_has_property(&mut agent, outer, key).unwrap_err();
    assert_eq!(
        error.to_string(&agent),
        "TypeError: Cannot perform 'has' on a proxy that has been revoked"
    );
}

#[test]
fn trap_may_reenter_the_evaluator() {
    let mut agent = new_agent();
    let target = object_with(&mut agent, &[("a", Value::from(1))]);
    let inner_handler = object_with(&mut agent, &[]);
    let inner = proxy_create(&mut agent, target.into(), inner_handler.into()).unwrap();
    RECURSIVE_PROXY.set(Some(inner));
    let handler = handler_with_trap(&mut agent, recursing_trap);
    let outer = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let a = Value::from_str(&mut agent, "a");
    let b = Value::from_str(&mut agent, "b");
    assert!(proxy_has_property(&mut agent, outer, a).unwrap());
    assert!(!proxy_has_property(&mut agent, outer, b).unwrap());
}

#[test]
fn unbounded_recursion_hits_the_call_stack_limit() {
    let mut agent = Agent::new(
        Options {
            call_stack_limit: 32,
            ..Default::default()
        },
        &DefaultHostHooks,
    );
    let target = object_with(&mut agent, &[]);
    let handler = handler_with_trap(&mut agent, recursing_trap);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    RECURSIVE_PROXY.set(Some(proxy));
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, proxy, key).unwrap_err();
    assert_eq!(
        error.to_string(&agent),
        "RangeError: Maximum call stack size exceeded"
    );
    // The agent is usable again once the error has unwound.
    RECURSIVE_PROXY.set(None);
    let plain_handler = object_with(&mut agent, &[]);
    let plain = proxy_create(&mut agent, target.into(), plain_handler.into()).unwrap();
    assert!(!proxy_has_property(&mut agent, plain, key).unwrap());
}

#[test]
fn interrupt_propagates_out_of_nested_traps() {
    let mut agent = new_agent();
    INTERRUPT.set(Some(agent.interrupt_handle()));
    let target = object_with(&mut agent, &[]);
    let inner_handler = handler_with_trap(&mut agent, returns_one);
    let inner = proxy_create(&mut agent, target.into(), inner_handler.into()).unwrap();
    RECURSIVE_PROXY.set(Some(inner));
    let handler = handler_with_trap(&mut agent, interrupting_trap);
    let outer = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let key = Value::from_str(&mut agent, "a");
    let error = proxy_has_property(&mut agent, outer, key).unwrap_err();
    assert_eq!(error.to_string(&agent), "Error: Execution interrupted");
    assert_eq!(TRAP_CALLS.get(), 0);
    // The interrupt is consumed by the call it stopped.
    assert!(proxy_has_property(&mut agent, inner, key).unwrap());
}

#[test]
fn in_operator_and_reflect_has_reach_the_trap() {
    let mut agent = new_agent();
    let target = frozen_target(&mut agent);
    let handler = handler_with_trap(&mut agent, always_false);
    let proxy = proxy_create(&mut agent, target.into(), handler.into()).unwrap();
    let b = Value::from_str(&mut agent, "b");
    assert!(!evaluate_in(&mut agent, b, proxy.into()).unwrap());
    assert!(!reflect_has(&mut agent, proxy.into(), b).unwrap());
    let a = Value::from_str(&mut agent, "a");
    assert!(evaluate_in(&mut agent, a, proxy.into()).is_err());
    assert!(reflect_has(&mut agent, proxy.into(), a).is_err());
    assert_eq!(TRAP_CALLS.get(), 4);

    let error = evaluate_in(&mut agent, a, Value::Undefined).unwrap_err();
    assert_eq!(
        error.to_string(&agent),
        "TypeError: The right-hand side of an `in` expression must be an object, got 'undefined'."
    );
}
