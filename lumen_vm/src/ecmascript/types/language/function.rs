// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, Value};
use crate::ecmascript::{
    builtins::{ArgumentsList, builtin_function::BuiltinFunction},
    execution::{Agent, JsResult},
};

/// Objects that have a \[\[Call]] internal method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    BuiltinFunction(BuiltinFunction),
}

impl Function {
    /// ### [\[\[Call]] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    pub(crate) fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        match self {
            Function::BuiltinFunction(function) => {
                function.internal_call(agent, this_argument, arguments_list)
            }
        }
    }
}

impl From<BuiltinFunction> for Function {
    fn from(value: BuiltinFunction) -> Self {
        Function::BuiltinFunction(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(function) => Value::BuiltinFunction(function),
        }
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(function) => Object::BuiltinFunction(function),
        }
    }
}

impl TryFrom<Value> for Function {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::BuiltinFunction(function) => Ok(Function::BuiltinFunction(function)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for Function {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::BuiltinFunction(function) => Ok(Function::BuiltinFunction(function)),
            _ => Err(()),
        }
    }
}
