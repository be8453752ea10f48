// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Deref, Index};

use crate::{
    ecmascript::{
        execution::{Agent, JsResult},
        types::{
            InternalMethods, InternalSlots, Object, ObjectEntry, ObjectHeapData, OrdinaryObject,
            PropertyKey, String, Value,
        },
    },
    heap::{BUILTIN_STRING_MEMORY, CreateHeapData, Heap, indexes::BuiltinFunctionIndex},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub &'a [Value]);

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Regular(RegularFn),
}

pub trait Builtin {
    const NAME: String;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;
}

#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunctionArgs<'a> {
    pub length: u8,
    pub name: &'a str,
}

impl<'a> BuiltinFunctionArgs<'a> {
    pub fn new(length: u8, name: &'a str) -> Self {
        Self { length, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

#[derive(Debug, Clone)]
pub struct BuiltinFunctionHeapData {
    pub(crate) behaviour: Behaviour,
    pub(crate) length: u8,
    pub(crate) name: String,
    /// Holds the `length` and `name` properties and any property added later.
    pub(crate) backing_object: OrdinaryObject,
}

impl BuiltinFunction {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }

    /// The function's initial name, or None for an anonymous function.
    pub fn name(self, agent: &Agent) -> Option<String> {
        let name = agent[self].name;
        if name.is_empty(agent) { None } else { Some(name) }
    }

    /// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    pub(crate) fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Return ? BuiltinCallOrConstruct(F, thisArgument, argumentsList, undefined).
        agent.enter_call()?;
        let behaviour = agent[self].behaviour;
        let result = match behaviour {
            Behaviour::Regular(behaviour) => behaviour(agent, this_argument, arguments_list),
        };
        agent.leave_call();
        result
    }
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The function's \[\[Prototype]] is always the realm's
/// `%Function.prototype%`.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    let name = String::from_str(agent, args.name);
    create_builtin_function_with_name(agent, behaviour, args.length, name)
}

pub(crate) fn create_builtin<T: Builtin>(agent: &mut Agent) -> BuiltinFunction {
    create_builtin_function_with_name(agent, T::BEHAVIOUR, T::LENGTH, T::NAME)
}

fn create_builtin_function_with_name(
    agent: &mut Agent,
    behaviour: Behaviour,
    length: u8,
    name: String,
) -> BuiltinFunction {
    // 4. Let func be a new built-in function object that, when called,
    //    performs the action described by behaviour using the provided
    //    arguments as the values of the corresponding parameters specified
    //    by behaviour.
    let function_prototype = agent.current_realm().intrinsics().function_prototype();
    let mut backing_object = ObjectHeapData::new(Some(function_prototype.into()));
    // 10. Perform SetFunctionLength(func, length).
    backing_object.properties.push(ObjectEntry::new_frozen_entry(
        PropertyKey::String(BUILTIN_STRING_MEMORY.length),
        Value::from(length),
    ));
    // 11-12. Perform SetFunctionName(func, name, prefix).
    backing_object.properties.push(ObjectEntry::new_frozen_entry(
        PropertyKey::String(BUILTIN_STRING_MEMORY.name),
        name.into(),
    ));
    let backing_object = agent.heap.create(backing_object);
    agent.heap.create(BuiltinFunctionHeapData {
        behaviour,
        length,
        name,
        backing_object,
    })
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl InternalSlots for BuiltinFunction {
    #[inline(always)]
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        Some(agent[self].backing_object)
    }
}

impl InternalMethods for BuiltinFunction {}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(data);
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        self.heap
            .builtin_functions
            .get(index.get_index())
            .expect("BuiltinFunction out of bounds")
    }
}
