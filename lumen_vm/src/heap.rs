// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod heap_constants;
pub mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;

pub(crate) use heap_constants::BUILTIN_STRINGS_LIST;
pub use heap_constants::{BUILTIN_STRING_MEMORY, BuiltinStrings, WellKnownSymbolIndexes};
use indexes::StringIndex;

use crate::ecmascript::{
    builtins::{
        builtin_function::BuiltinFunctionHeapData, error::ErrorHeapData,
        foreign_object::ForeignObjectHeapData, proxy::data::ProxyHeapData,
    },
    types::{ObjectHeapData, String, StringHeapData, SymbolHeapData},
};

/// Storage for every heap-allocated value. Handles such as
/// [`OrdinaryObject`](crate::ecmascript::types::OrdinaryObject) are indexes
/// into one of these vectors.
#[derive(Debug)]
pub struct Heap {
    pub(crate) builtin_functions: Vec<BuiltinFunctionHeapData>,
    pub(crate) errors: Vec<ErrorHeapData>,
    pub(crate) foreign_objects: Vec<ForeignObjectHeapData>,
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) proxys: Vec<ProxyHeapData>,
    pub(crate) strings: Vec<StringHeapData>,
    pub(crate) symbols: Vec<SymbolHeapData>,
    /// Text to handle mapping; string equality is handle equality.
    string_lookup: HashMap<Box<str>, String, RandomState>,
}

pub trait CreateHeapData<T, F> {
    /// Creates a [`Value`](crate::ecmascript::types::Value) from the given
    /// data. Allocating the data is **not** guaranteed.
    fn create(&mut self, data: T) -> F;
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            builtin_functions: Vec::with_capacity(16),
            errors: Vec::with_capacity(8),
            foreign_objects: Vec::new(),
            objects: Vec::with_capacity(64),
            proxys: Vec::new(),
            strings: Vec::with_capacity(BUILTIN_STRINGS_LIST.len() + 32),
            symbols: Vec::with_capacity(WellKnownSymbolIndexes::COUNT),
            string_lookup: HashMap::with_hasher(RandomState::new()),
        };
        for str in BUILTIN_STRINGS_LIST {
            heap.intern_string(str);
        }
        heap.symbols.push(SymbolHeapData {
            descriptor: Some(BUILTIN_STRING_MEMORY.Symbol_toPrimitive),
        });
        debug_assert_eq!(heap.symbols.len(), WellKnownSymbolIndexes::COUNT);
        heap
    }

    /// Returns the unique string handle for `str`, allocating it on first
    /// use.
    pub(crate) fn intern_string(&mut self, str: &str) -> String {
        if let Some(&string) = self.string_lookup.get(str) {
            return string;
        }
        self.strings.push(StringHeapData::new(str));
        let string = String(StringIndex::last(&self.strings));
        self.string_lookup.insert(str.into(), string);
        string
    }
}
