// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Strings and symbols that are allocated when the heap is created. Their
//! handles are known at compile time.

use super::indexes::{StringIndex, SymbolIndex};
use crate::ecmascript::types::{String, Symbol};

macro_rules! builtin_strings {
    ($($name: ident: $text: literal,)*) => {
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Copy)]
        pub struct BuiltinStrings {
            $(
                #[doc = concat!("`", $text, "`")]
                pub $name: String,
            )*
        }

        #[allow(unused_assignments)]
        pub const BUILTIN_STRING_MEMORY: BuiltinStrings = {
            let mut index = 0;
            BuiltinStrings {
                $($name: {
                    let string = String(StringIndex::from_u32_index(index));
                    index += 1;
                    string
                },)*
            }
        };

        pub(crate) const BUILTIN_STRINGS_LIST: &[&str] = &[$($text,)*];
    };
}

builtin_strings! {
    _empty: "",
    _object_Error_: "[object Error]",
    _object_Function_: "[object Function]",
    _object_Null_: "[object Null]",
    _object_Object_: "[object Object]",
    _object_Undefined_: "[object Undefined]",
    default: "default",
    r#false: "false",
    has: "has",
    hasOwnProperty: "hasOwnProperty",
    length: "length",
    message: "message",
    name: "name",
    null: "null",
    number: "number",
    string: "string",
    Symbol_toPrimitive: "Symbol.toPrimitive",
    toString: "toString",
    r#true: "true",
    undefined: "undefined",
    valueOf: "valueOf",
}

/// Well-known symbols, allocated in this order when the heap is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
}

impl WellKnownSymbolIndexes {
    pub(crate) const COUNT: usize = 1;
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Symbol(SymbolIndex::from_u32_index(value as u32))
    }
}
