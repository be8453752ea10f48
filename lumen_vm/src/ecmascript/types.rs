// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub(crate) use language::{ObjectEntry, ObjectEntryPropertyDescriptor};
pub use language::{
    Function, InternalMethods, InternalSlots, Object, ObjectHeapData, OrdinaryObject,
    PropertyKey, String, StringHeapData, Symbol, SymbolHeapData, Value,
};
pub use spec::PropertyDescriptor;
