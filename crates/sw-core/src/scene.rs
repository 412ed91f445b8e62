use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved destination text that ends the story.
pub const END: &str = "END";

/// Identifier of a scene; the key into the story graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SceneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SceneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where a choice leads: another scene, or the end of the story.
///
/// In text form (story files, builder input) the reserved string `"END"`
/// is the end sentinel and anything else names a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    /// Move to the named scene.
    Scene(SceneId),
    /// Finish the story successfully.
    End,
}

impl Destination {
    /// Whether this destination ends the story.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// The target scene, if this is not the end sentinel.
    pub fn scene(&self) -> Option<&SceneId> {
        match self {
            Self::Scene(id) => Some(id),
            Self::End => None,
        }
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        if s == END {
            Self::End
        } else {
            Self::Scene(SceneId(s))
        }
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<SceneId> for Destination {
    fn from(id: SceneId) -> Self {
        Self::from(id.0)
    }
}

impl From<Destination> for String {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Scene(id) => id.0,
            Destination::End => END.to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene(id) => write!(f, "{id}"),
            Self::End => f.write_str(END),
        }
    }
}

/// A node in the story graph: text shown on entry plus labeled exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Unique identifier within the story.
    pub id: SceneId,
    /// Descriptive text shown when the player enters.
    pub text: String,
    /// Choice label to destination, in presentation order.
    pub choices: IndexMap<String, Destination>,
}

impl Scene {
    /// Create a scene with no choices (a terminal scene until choices are added).
    pub fn new(id: impl Into<SceneId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices: IndexMap::new(),
        }
    }

    /// Add a choice.
    ///
    /// Re-using a label replaces its destination and keeps its position.
    pub fn with_choice(mut self, label: impl Into<String>, dest: impl Into<Destination>) -> Self {
        self.choices.insert(label.into(), dest.into());
        self
    }

    /// Choice labels in the order they are shown to the player.
    pub fn labels(&self) -> Vec<&str> {
        self.choices.keys().map(String::as_str).collect()
    }

    /// Destination for an exact label.
    pub fn destination(&self, label: &str) -> Option<&Destination> {
        self.choices.get(label)
    }

    /// A scene without choices ends the story when entered.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_sentinel_from_text() {
        assert_eq!(Destination::from("END"), Destination::End);
        assert_eq!(
            Destination::from("hall"),
            Destination::Scene(SceneId::new("hall"))
        );
        // the sentinel is case-sensitive
        assert!(!Destination::from("end").is_end());
    }

    #[test]
    fn destination_serializes_as_string() {
        let json = serde_json::to_string(&Destination::End).unwrap();
        assert_eq!(json, "\"END\"");
        let dest: Destination = serde_json::from_str("\"hall\"").unwrap();
        assert_eq!(dest.scene().map(SceneId::as_str), Some("hall"));
    }

    #[test]
    fn choices_keep_insertion_order() {
        let scene = Scene::new("intro", "A dark room.")
            .with_choice("Zebra", "z")
            .with_choice("Apple", "a")
            .with_choice("Mango", END);

        assert_eq!(scene.labels(), vec!["Zebra", "Apple", "Mango"]);
        assert!(!scene.is_terminal());
    }

    #[test]
    fn repeated_label_replaces_in_place() {
        let scene = Scene::new("intro", "")
            .with_choice("Go", "a")
            .with_choice("Stay", "b")
            .with_choice("Go", "c");

        assert_eq!(scene.labels(), vec!["Go", "Stay"]);
        assert_eq!(scene.destination("Go"), Some(&Destination::from("c")));
    }

    #[test]
    fn scene_without_choices_is_terminal() {
        assert!(Scene::new("outside", "You win!").is_terminal());
    }
}
