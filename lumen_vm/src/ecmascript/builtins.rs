// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10 Ordinary and Exotic Objects Behaviours](https://tc39.es/ecma262/#sec-ordinary-and-exotic-objects-behaviours)

pub mod builtin_function;
pub mod error;
pub mod foreign_object;
pub(crate) mod fundamental_objects;
pub(crate) mod ordinary;
pub mod proxy;
pub mod reflection;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs, RegularFn,
    create_builtin_function,
};
pub use error::Error;
pub use foreign_object::ForeignObject;
pub use proxy::Proxy;
