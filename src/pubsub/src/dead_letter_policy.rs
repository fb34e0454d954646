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

use crate::Result;
use crate::google::pubsub::v1;
use crate::model::Topic;

/// Configures where undeliverable messages go, and after how many attempts.
///
/// A subscription without a dead letter policy retries delivery forever.
///
/// # Example
/// ```
/// # use google_cloud_pubsub::model::{DeadLetterPolicy, Topic};
/// let topic = Topic::from_name("dead-letters", "my-project")?;
/// let policy = DeadLetterPolicy::new(Some(topic), 10);
/// let message = policy.to_message();
/// assert_eq!(message.dead_letter_topic, "projects/my-project/topics/dead-letters");
/// assert_eq!(DeadLetterPolicy::from_message(&message, "my-project")?, policy);
/// # google_cloud_pubsub::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeadLetterPolicy {
    dead_letter_topic: Option<Topic>,
    max_delivery_attempts: i32,
}

impl DeadLetterPolicy {
    /// Creates a new policy.
    ///
    /// A `max_delivery_attempts` of zero lets the service pick its default.
    pub fn new(dead_letter_topic: Option<Topic>, max_delivery_attempts: i32) -> Self {
        Self {
            dead_letter_topic,
            max_delivery_attempts,
        }
    }

    /// The topic receiving dead lettered messages.
    pub fn dead_letter_topic(&self) -> Option<&Topic> {
        self.dead_letter_topic.as_ref()
    }

    /// The maximum number of delivery attempts for any message.
    pub fn max_delivery_attempts(&self) -> i32 {
        self.max_delivery_attempts
    }

    /// Converts the policy to its wire message.
    pub fn to_message(&self) -> v1::DeadLetterPolicy {
        v1::DeadLetterPolicy {
            dead_letter_topic: self
                .dead_letter_topic
                .as_ref()
                .map(|t| t.name().to_string())
                .unwrap_or_default(),
            max_delivery_attempts: self.max_delivery_attempts,
        }
    }

    /// Creates a policy from its wire message.
    ///
    /// Short topic names are qualified with `project`. An empty topic name
    /// means the policy has no dead letter topic.
    pub fn from_message(message: &v1::DeadLetterPolicy, project: &str) -> Result<Self> {
        let dead_letter_topic = match message.dead_letter_topic.as_str() {
            "" => None,
            name => Some(Topic::from_name(name, project)?),
        };
        Ok(Self {
            dead_letter_topic,
            max_delivery_attempts: message.max_delivery_attempts,
        })
    }
}

impl From<DeadLetterPolicy> for v1::DeadLetterPolicy {
    fn from(value: DeadLetterPolicy) -> Self {
        value.to_message()
    }
}
