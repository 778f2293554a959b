// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Operations to report on the health of the service.

use crate::db;
use crate::driver::Driver;
use iii_iv_core::driver::DriverResult;
use time::OffsetDateTime;

impl Driver {
    /// Verifies that the database is reachable by issuing a trivial query against it.
    pub(crate) async fn check_db(self) -> DriverResult<()> {
        let mut ex = self.db.ex().await?;
        db::ping(&mut ex).await?;
        Ok(())
    }

    /// Returns the current time as seen by the service.
    pub(crate) fn now_utc(&self) -> OffsetDateTime {
        self.clock.now_utc()
    }
}
