// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use super::String;
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, Heap, indexes::SymbolIndex},
};

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
///
/// Every symbol handle is unique; symbols with equal descriptions are still
/// distinct property keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub(crate) SymbolIndex);

#[derive(Debug, Clone)]
pub struct SymbolHeapData {
    /// \[\[Description]]
    pub(crate) descriptor: Option<String>,
}

impl Symbol {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Creates a new unique symbol, as `Symbol(description)` does.
    pub fn new(agent: &mut Agent, description: Option<&str>) -> Self {
        let descriptor = description.map(|description| String::from_str(agent, description));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    pub fn description(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(self, agent: &Agent) -> std::string::String {
        // 1. Let desc be sym's [[Description]] value.
        // 2. If desc is undefined, set desc to the empty String.
        let desc = self
            .description(agent)
            .map_or("", |description| description.as_str(agent));
        // 3. Assert: desc is a String.
        // 4. Return the string-concatenation of "Symbol(", desc, and ")".
        format!("Symbol({desc})")
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.get_index())
            .expect("Symbol out of bounds")
    }
}
