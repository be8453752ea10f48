// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::{
            fundamental_objects::object_objects::object_prototype::ObjectPrototype,
            reflection::ReflectObject,
        },
        execution::Agent,
        types::{ObjectHeapData, OrdinaryObject},
    },
    heap::{CreateHeapData, Heap},
};

#[derive(Debug, Clone, Copy)]
pub struct Intrinsics {
    /// %Function.prototype%
    ///
    /// NOTE: This is not spec-compliant. Function prototype should be a
    /// function that always returns undefined; here it is an ordinary
    /// object.
    function_prototype: OrdinaryObject,
    /// %Object.prototype%
    object_prototype: OrdinaryObject,
    /// %Reflect%
    reflect: OrdinaryObject,
}

impl Intrinsics {
    pub(crate) fn new(heap: &mut Heap) -> Self {
        let object_prototype = heap.create(ObjectHeapData::new(None));
        let function_prototype = heap.create(ObjectHeapData::new(Some(object_prototype.into())));
        let reflect = heap.create(ObjectHeapData::new(Some(object_prototype.into())));
        Self {
            function_prototype,
            object_prototype,
            reflect,
        }
    }

    /// Installs the builtin functions of every intrinsic object.
    pub(crate) fn initialize(agent: &mut Agent) {
        ObjectPrototype::create_intrinsic(agent);
        ReflectObject::create_intrinsic(agent);
    }

    /// %Function.prototype%
    pub fn function_prototype(&self) -> OrdinaryObject {
        self.function_prototype
    }

    /// %Object.prototype%
    pub fn object_prototype(&self) -> OrdinaryObject {
        self.object_prototype
    }

    /// %Reflect%
    pub fn reflect(&self) -> OrdinaryObject {
        self.reflect
    }
}
