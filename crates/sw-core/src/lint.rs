//! Authoring diagnostics that do not prevent a story from being played.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::scene::{Destination, SceneId};
use crate::story::Story;

/// A problem found in a story's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A choice points at a scene that does not exist.
    BrokenReference {
        /// Scene holding the choice.
        scene: SceneId,
        /// The choice label.
        label: String,
        /// The missing target.
        target: SceneId,
    },
    /// No sequence of choices leads from the start to this scene.
    Unreachable {
        /// The orphaned scene.
        scene: SceneId,
    },
    /// Nothing reachable from the start ever ends the story.
    NoEnding,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenReference {
                scene,
                label,
                target,
            } => write!(
                f,
                "scene '{scene}': choice \"{label}\" leads to unknown scene '{target}'"
            ),
            Self::Unreachable { scene } => {
                write!(f, "scene '{scene}' cannot be reached from the start")
            }
            Self::NoEnding => write!(f, "no reachable scene ever ends the story"),
        }
    }
}

impl Story {
    /// Check the graph for dangling choices, orphaned scenes, and missing endings.
    pub fn lint(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        for scene in self.scenes() {
            for (label, dest) in &scene.choices {
                let Some(target) = dest.scene() else {
                    continue;
                };
                if !self.contains(target) {
                    issues.push(Issue::BrokenReference {
                        scene: scene.id.clone(),
                        label: label.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let reachable = self.reachable();
        for scene in self.scenes() {
            if !reachable.contains(&scene.id) {
                issues.push(Issue::Unreachable {
                    scene: scene.id.clone(),
                });
            }
        }

        let can_end = reachable.iter().filter_map(|id| self.scene(id)).any(|s| {
            s.is_terminal() || s.choices.values().any(Destination::is_end)
        });
        if !can_end {
            issues.push(Issue::NoEnding);
        }

        for issue in &issues {
            tracing::warn!(%issue, "story lint");
        }
        issues
    }

    /// IDs of every existing scene reachable from the start.
    pub fn reachable(&self) -> HashSet<SceneId> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([self.start().clone()]);

        while let Some(id) = queue.pop_front() {
            let Some(scene) = self.scene(&id) else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }
            for target in scene.choices.values().filter_map(Destination::scene) {
                if !seen.contains(target) {
                    queue.push_back(target.clone());
                }
            }
        }
        seen
    }
}
