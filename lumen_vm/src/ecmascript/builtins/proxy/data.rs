// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::Object;

#[derive(Debug, Clone, Copy)]
pub enum ProxyHeapData {
    /// Proxy has not been revoked.
    NonRevoked {
        /// \[\[ProxyTarget]]
        proxy_target: Object,
        /// \[\[ProxyHandler]]
        proxy_handler: Object,
    },
    /// Proxy was revoked: both \[\[ProxyTarget]] and \[\[ProxyHandler]] are
    /// null.
    Revoked,
}
