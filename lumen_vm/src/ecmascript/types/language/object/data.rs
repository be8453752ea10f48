// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, PropertyKey};
use crate::ecmascript::types::{Function, PropertyDescriptor, Value};

#[derive(Debug, Clone)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: Vec<ObjectEntry>,
}

impl ObjectHeapData {
    pub fn new(prototype: Option<Object>) -> Self {
        Self {
            extensible: true,
            prototype,
            properties: Vec::new(),
        }
    }

    pub(crate) fn find(&self, key: PropertyKey) -> Option<&ObjectEntry> {
        self.properties.iter().find(|entry| entry.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: PropertyKey) -> Option<&mut ObjectEntry> {
        self.properties.iter_mut().find(|entry| entry.key == key)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ObjectEntry {
    pub key: PropertyKey,
    pub value: ObjectEntryPropertyDescriptor,
}

impl ObjectEntry {
    /// A non-writable, non-enumerable, configurable data property; the shape
    /// of a builtin function's `length` and `name`.
    pub(crate) fn new_frozen_entry(key: PropertyKey, value: Value) -> Self {
        Self {
            key,
            value: ObjectEntryPropertyDescriptor::Data {
                value,
                writable: false,
                enumerable: false,
                configurable: true,
            },
        }
    }

    /// A writable, non-enumerable, configurable data property; the shape of
    /// builtin methods installed on prototype objects.
    pub(crate) fn new_prototype_function_entry(key: PropertyKey, function: Function) -> Self {
        Self {
            key,
            value: ObjectEntryPropertyDescriptor::Data {
                value: function.into(),
                writable: true,
                enumerable: false,
                configurable: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ObjectEntryPropertyDescriptor {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
        enumerable: bool,
        configurable: bool,
    },
}

impl ObjectEntryPropertyDescriptor {
    /// Builds the stored form of a property newly created by
    /// \[\[DefineOwnProperty]]. Absent attributes default to false and an
    /// absent value to undefined.
    pub(crate) fn from_new_descriptor(descriptor: &PropertyDescriptor) -> Self {
        let enumerable = descriptor.enumerable.unwrap_or(false);
        let configurable = descriptor.configurable.unwrap_or(false);
        if descriptor.is_accessor_descriptor() {
            ObjectEntryPropertyDescriptor::Accessor {
                get: descriptor.get.flatten(),
                set: descriptor.set.flatten(),
                enumerable,
                configurable,
            }
        } else {
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
                writable: descriptor.writable.unwrap_or(false),
                enumerable,
                configurable,
            }
        }
    }

    pub(crate) fn to_property_descriptor(self) -> PropertyDescriptor {
        match self {
            ObjectEntryPropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
                ..Default::default()
            },
            ObjectEntryPropertyDescriptor::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                get: Some(get),
                set: Some(set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
                ..Default::default()
            },
        }
    }
}
