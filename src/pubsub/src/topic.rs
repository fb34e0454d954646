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

use crate::{Error, Result};

const PROJECTS: &str = "projects";
const TOPICS: &str = "topics";

/// A Pub/Sub topic, identified by its fully-qualified name.
///
/// Topic names have the form `projects/{project}/topics/{topic}`.
///
/// # Example
/// ```
/// # use google_cloud_pubsub::model::Topic;
/// let topic = Topic::from_name("my-topic", "my-project")?;
/// assert_eq!(topic.name(), "projects/my-project/topics/my-topic");
/// assert_eq!(topic.project(), "my-project");
/// assert_eq!(topic.id(), "my-topic");
/// # google_cloud_pubsub::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topic {
    name: String,
    // Byte offsets of the project and topic ids in `name`.
    project: std::ops::Range<usize>,
    id: std::ops::Range<usize>,
}

impl Topic {
    /// Creates a topic from a short or fully-qualified name.
    ///
    /// Short names are qualified with `project`. Fully-qualified names are
    /// used as-is, `project` is ignored.
    pub fn from_name(name: &str, project: &str) -> Result<Self> {
        if name.contains('/') {
            return Self::parse(name);
        }
        if name.is_empty() || project.is_empty() {
            return Err(Error::validation(format!(
                "a topic requires a project and a topic id, got project={project:?}, topic={name:?}"
            )));
        }
        Self::parse(&format!("{PROJECTS}/{project}/{TOPICS}/{name}"))
    }

    /// Parses a fully-qualified topic name.
    pub fn parse(name: &str) -> Result<Self> {
        let parts = name.split('/').collect::<Vec<_>>();
        match parts.as_slice() {
            [PROJECTS, project, TOPICS, id] if !project.is_empty() && !id.is_empty() => {
                let project_start = PROJECTS.len() + 1;
                let project_end = project_start + project.len();
                let id_start = project_end + TOPICS.len() + 2;
                Ok(Self {
                    name: name.to_string(),
                    project: project_start..project_end,
                    id: id_start..name.len(),
                })
            }
            _ => Err(Error::validation(format!(
                "invalid topic name {name:?}, expected projects/{{project}}/topics/{{topic}}"
            ))),
        }
    }

    /// The fully-qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id of the project owning the topic.
    pub fn project(&self) -> &str {
        &self.name[self.project.clone()]
    }

    /// The topic id, the last component of the name.
    pub fn id(&self) -> &str {
        &self.name[self.id.clone()]
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn short_name() -> anyhow::Result<()> {
        let topic = Topic::from_name("dead-letters", "my-project")?;
        assert_eq!(topic.name(), "projects/my-project/topics/dead-letters");
        assert_eq!(topic.project(), "my-project");
        assert_eq!(topic.id(), "dead-letters");
        assert_eq!(topic.to_string(), topic.name());
        Ok(())
    }

    #[test]
    fn qualified_name_ignores_project() -> anyhow::Result<()> {
        let topic = Topic::from_name("projects/other/topics/t", "my-project")?;
        assert_eq!(topic.project(), "other");
        assert_eq!(topic.id(), "t");
        Ok(())
    }

    #[test_case("", "p"; "empty topic")]
    #[test_case("t", ""; "empty project")]
    #[test_case("projects/p/topics/", "p"; "empty qualified topic")]
    #[test_case("projects//topics/t", "p"; "empty qualified project")]
    #[test_case("projects/p/subscriptions/s", "p"; "wrong collection")]
    #[test_case("projects/p/topics/t/extra", "p"; "too many components")]
    fn invalid(name: &str, project: &str) {
        let got = Topic::from_name(name, project);
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }
}
