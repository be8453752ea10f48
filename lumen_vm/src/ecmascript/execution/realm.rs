// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

pub use intrinsics::Intrinsics;

use crate::heap::Heap;

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// An [`Agent`](super::Agent) owns exactly one realm.
#[derive(Debug)]
pub struct Realm {
    intrinsics: Intrinsics,
}

impl Realm {
    /// Allocates the intrinsic objects. Their builtin methods are installed
    /// once the owning agent exists.
    pub(crate) fn new(heap: &mut Heap) -> Self {
        Self {
            intrinsics: Intrinsics::new(heap),
        }
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }
}
