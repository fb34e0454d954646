// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Default implementations for stub methods.

/// The message used when a stub method has no implementation.
pub const UNIMPLEMENTED: &str = concat!(
    "No implementation provided for this stub method. ",
    "Applications mocking a client must implement every method they call."
);

/// The default implementation of any stub method.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<T> {
    unimplemented!("{UNIMPLEMENTED}");
}
