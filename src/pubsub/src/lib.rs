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

//! Google Cloud Client Libraries for Rust - Pub/Sub
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains the value objects used to configure [Pub/Sub]
//! subscriptions, and their wire representation.
//!
//! [Pub/Sub]: https://cloud.google.com/pubsub

pub use gax::Result;
pub use gax::error::Error;

/// The value objects.
pub mod model {
    pub use crate::dead_letter_policy::DeadLetterPolicy;
    pub use crate::topic::Topic;
}

mod dead_letter_policy;
mod topic;

/// The wire messages, as generated from the service protos.
#[allow(clippy::enum_variant_names)]
pub mod google {
    pub mod pubsub {
        pub mod v1 {
            include!("generated/protos/pubsub/google.pubsub.v1.rs");
        }
    }
}
