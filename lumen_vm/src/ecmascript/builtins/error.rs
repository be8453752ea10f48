// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use crate::{
    ecmascript::{
        execution::{Agent, agent::ExceptionType},
        types::{
            InternalMethods, InternalSlots, Object, ObjectEntry, ObjectEntryPropertyDescriptor,
            ObjectHeapData, OrdinaryObject, PropertyKey, String, Value,
        },
    },
    heap::{BUILTIN_STRING_MEMORY, CreateHeapData, Heap, indexes::ErrorIndex},
};

/// ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Error(pub(crate) ErrorIndex);

#[derive(Debug, Clone)]
pub struct ErrorHeapData {
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
    pub(crate) backing_object: OrdinaryObject,
}

impl Error {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Creates an error object of the given kind. A message becomes the
    /// object's own `message` property.
    pub fn create(agent: &mut Agent, kind: ExceptionType, message: Option<String>) -> Self {
        let object_prototype = agent.current_realm().intrinsics().object_prototype();
        let mut backing_object = ObjectHeapData::new(Some(object_prototype.into()));
        if let Some(message) = message {
            // 3.c. Perform CreateNonEnumerableDataPropertyOrThrow(O, "message", msg).
            backing_object.properties.push(ObjectEntry {
                key: PropertyKey::String(BUILTIN_STRING_MEMORY.message),
                value: ObjectEntryPropertyDescriptor::Data {
                    value: message.into(),
                    writable: true,
                    enumerable: false,
                    configurable: true,
                },
            });
        }
        let backing_object = agent.heap.create(backing_object);
        agent.heap.create(ErrorHeapData {
            kind,
            message,
            backing_object,
        })
    }

    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }

    pub fn message(self, agent: &Agent) -> Option<String> {
        agent[self].message
    }

    /// `"<kind>: <message>"`, or just the kind without a message.
    pub fn to_display_string(self, agent: &Agent) -> std::string::String {
        let kind = self.kind(agent).name();
        match self.message(agent) {
            Some(message) if !message.is_empty(agent) => {
                format!("{kind}: {}", message.as_str(agent))
            }
            _ => kind.to_owned(),
        }
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}

impl From<Error> for Object {
    fn from(value: Error) -> Self {
        Object::Error(value)
    }
}

impl InternalSlots for Error {
    #[inline(always)]
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        Some(agent[self].backing_object)
    }
}

impl InternalMethods for Error {}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(data);
        Error(ErrorIndex::last(&self.errors))
    }
}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        self.heap
            .errors
            .get(index.get_index())
            .expect("Error out of bounds")
    }
}
