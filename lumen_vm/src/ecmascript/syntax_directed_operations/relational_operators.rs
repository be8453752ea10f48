// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [13.10 Relational Operators](https://tc39.es/ecma262/#sec-relational-operators)

use crate::ecmascript::{
    abstract_operations::{operations_on_objects::has_property, type_conversion::to_property_key},
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{Object, Value},
};

/// ### [13.10.1 Runtime Semantics: Evaluation](https://tc39.es/ecma262/#sec-relational-operators-runtime-semantics-evaluation)
///
/// RelationalExpression : RelationalExpression `in` ShiftExpression
///
/// `lval` and `rval` are the already evaluated operands.
pub fn evaluate_in(agent: &mut Agent, lval: Value, rval: Value) -> JsResult<bool> {
    // 5. If rval is not an Object, throw a TypeError exception.
    let Ok(rval) = Object::try_from(rval) else {
        let error_message = format!(
            "The right-hand side of an `in` expression must be an object, got '{}'.",
            rval.string_repr(agent)
        );
        return Err(agent.throw_exception(ExceptionType::TypeError, &error_message));
    };
    // 6. Return ? HasProperty(rval, ? ToPropertyKey(lval)).
    let property_key = to_property_key(agent, lval)?;
    has_property(agent, rval, property_key)
}
