// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use crate::{ecmascript::execution::Agent, heap::indexes::StringIndex};

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Strings are interned: two strings with the same contents always share a
/// handle, so comparing handles compares contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct String(pub(crate) StringIndex);

#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Box<str>,
}

impl StringHeapData {
    pub(crate) fn new(str: &str) -> Self {
        Self { data: str.into() }
    }
}

impl String {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        agent.heap.intern_string(str)
    }

    pub fn as_str(self, agent: &Agent) -> &str {
        &agent[self].data
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].data.is_empty()
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        self.heap
            .strings
            .get(index.get_index())
            .expect("String out of bounds")
    }
}
