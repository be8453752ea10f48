// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::debug;

use super::{Intrinsics, Realm};
use crate::{
    ecmascript::{
        builtins::{
            error::Error,
            foreign_object::{ForeignObject, ForeignPrototypeResolver},
        },
        types::{Object, PropertyKey, String, Value},
    },
    heap::Heap,
};

/// Default depth of nested function calls before a RangeError is thrown.
pub const DEFAULT_CALL_STACK_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Resolve an emulated native prototype for foreign objects that do not
    /// themselves have a requested member.
    pub foreign_object_prototype: bool,
    /// Maximum depth of nested function calls.
    pub call_stack_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            foreign_object_prototype: false,
            call_stack_limit: DEFAULT_CALL_STACK_LIMIT,
        }
    }
}

pub type JsResult<T> = std::result::Result<T, JsError>;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// Renders the thrown value without calling into user code.
    pub fn to_string(self, agent: &Agent) -> std::string::String {
        self.0.string_repr(agent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    Error,
    RangeError,
    ReferenceError,
    TypeError,
}

impl ExceptionType {
    pub const fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::ReferenceError => "ReferenceError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

/// Embedder callbacks. Foreign objects have no properties of their own in
/// the heap: every member access on them goes through these hooks.
pub trait HostHooks: std::fmt::Debug {
    /// Returns true if the foreign object has a member named by `key`.
    fn foreign_has_member(&self, agent: &Agent, object: ForeignObject, key: PropertyKey) -> bool {
        let _ = (agent, object, key);
        false
    }

    /// Reads a member of the foreign object, if it has one.
    fn foreign_get_member(
        &self,
        agent: &Agent,
        object: ForeignObject,
        key: PropertyKey,
    ) -> Option<Value> {
        let _ = (agent, object, key);
        None
    }

    /// Chooses the native prototype a foreign object appears to inherit from
    /// when foreign object prototypes are enabled.
    ///
    /// The default is `%Object.prototype%` for every foreign object.
    fn foreign_object_prototype(&self, agent: &Agent, object: ForeignObject) -> Option<Object> {
        let _ = object;
        Some(agent.current_realm().intrinsics().object_prototype().into())
    }
}

/// A thread safe handle that stops a running [`Agent`] at its next function
/// call.
#[derive(Debug, Clone)]
pub struct InterruptHandle(Arc<AtomicBool>);

impl InterruptHandle {
    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) host_hooks: &'static dyn HostHooks,
    realm: Realm,
    call_depth: usize,
    interrupt: Arc<AtomicBool>,
    /// Created the first time a foreign object's prototype is needed.
    pub(crate) foreign_prototype_resolver: Option<ForeignPrototypeResolver>,
}

impl Agent {
    pub fn new(options: Options, host_hooks: &'static dyn HostHooks) -> Self {
        let mut heap = Heap::new();
        let realm = Realm::new(&mut heap);
        let mut agent = Self {
            heap,
            options,
            host_hooks,
            realm,
            call_depth: 0,
            interrupt: Arc::new(AtomicBool::new(false)),
            foreign_prototype_resolver: None,
        };
        Intrinsics::initialize(&mut agent);
        agent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current_realm(&self) -> &Realm {
        &self.realm
    }

    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle(self.interrupt.clone())
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception_with_static_message(
        &mut self,
        kind: ExceptionType,
        message: &'static str,
    ) -> JsError {
        JsError::new(self.create_exception(kind, message))
    }

    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        JsError::new(self.create_exception(kind, message))
    }

    /// Creates an error object without throwing it.
    pub fn create_exception(&mut self, kind: ExceptionType, message: &str) -> Value {
        let message = String::from_str(self, message);
        Error::create(self, kind, Some(message)).into()
    }

    /// Accounts for a new function call, failing if the call stack limit is
    /// reached or the agent has been interrupted.
    pub(crate) fn enter_call(&mut self) -> JsResult<()> {
        if self.interrupt.swap(false, Ordering::Relaxed) {
            debug!(depth = self.call_depth, "execution interrupted");
            return Err(self.throw_exception_with_static_message(
                ExceptionType::Error,
                "Execution interrupted",
            ));
        }
        if self.call_depth >= self.options.call_stack_limit {
            debug!(limit = self.options.call_stack_limit, "call stack exhausted");
            return Err(self.throw_exception_with_static_message(
                ExceptionType::RangeError,
                "Maximum call stack size exceeded",
            ));
        }
        self.call_depth += 1;
        Ok(())
    }

    pub(crate) fn leave_call(&mut self) {
        debug_assert!(self.call_depth > 0);
        self.call_depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::DefaultHostHooks;

    #[test]
    fn exceptions_render_with_their_kind() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error =
            agent.throw_exception_with_static_message(ExceptionType::TypeError, "bad thing");
        assert_eq!(error.to_string(&agent), "TypeError: bad thing");
        let Value::Error(error) = error.value() else {
            panic!("expected an error object");
        };
        assert_eq!(error.kind(&agent), ExceptionType::TypeError);
    }

    #[test]
    fn call_depth_is_limited() {
        let mut agent = Agent::new(
            Options {
                call_stack_limit: 2,
                ..Default::default()
            },
            &DefaultHostHooks,
        );
        assert!(agent.enter_call().is_ok());
        assert!(agent.enter_call().is_ok());
        let error = agent.enter_call().unwrap_err();
        assert_eq!(
            error.to_string(&agent),
            "RangeError: Maximum call stack size exceeded"
        );
        agent.leave_call();
        assert!(agent.enter_call().is_ok());
    }

    #[test]
    fn interrupt_is_reported_once() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let handle = agent.interrupt_handle();
        std::thread::spawn(move || handle.interrupt())
            .join()
            .unwrap();
        let error = agent.enter_call().unwrap_err();
        assert_eq!(error.to_string(&agent), "Error: Execution interrupted");
        assert!(agent.enter_call().is_ok());
    }
}
