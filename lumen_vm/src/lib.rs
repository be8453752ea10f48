// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Lumen
//!
//! Proxy `[[HasProperty]]` evaluation on a small ECMAScript object model.
//!
//! Every operation runs through an [`Agent`](ecmascript::execution::Agent),
//! which owns the [`Heap`] and the engine [`Options`](ecmascript::execution::agent::Options).
//! Values are small copyable handles into the heap.

pub mod ecmascript;
pub mod heap;

pub use heap::Heap;
