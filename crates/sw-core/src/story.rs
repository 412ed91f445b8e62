use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::scene::{Destination, Scene, SceneId};

/// A complete story: the scene graph plus the scene where play begins.
///
/// A `Story` can only be obtained through [`StoryBuilder`] or by loading a
/// story file, both of which guarantee the start scene exists. The graph is
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Story {
    title: Option<String>,
    start: SceneId,
    scenes: IndexMap<SceneId, Scene>,
}

impl Story {
    /// Start building a story.
    pub fn builder() -> StoryBuilder {
        StoryBuilder::new()
    }

    /// Optional display title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// ID of the scene where play begins.
    pub fn start(&self) -> &SceneId {
        &self.start
    }

    /// The scene where play begins.
    pub fn start_scene(&self) -> &Scene {
        // presence checked by `StoryBuilder::build`
        &self.scenes[&self.start]
    }

    /// Look up a scene by ID.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene with this ID exists.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    /// All scenes in declaration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Number of choices across all scenes.
    pub fn choice_count(&self) -> usize {
        self.scenes.values().map(|s| s.choices.len()).sum()
    }

    // -----------------------------------------------------------------------
    // Story files
    // -----------------------------------------------------------------------

    /// Parse a story from its JSON form.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let file: StoryFile = serde_json::from_str(json)?;
        file.into_story()
    }

    /// Read and parse a story file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let story = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            scenes = story.scene_count(),
            start = %story.start,
            "loaded story"
        );
        Ok(story)
    }

    /// Serialize the story to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(&StoryFile::from(self))?)
    }

    /// Write the story to a file as JSON.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json + "\n").map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Incremental construction of a [`Story`].
#[derive(Debug, Default)]
pub struct StoryBuilder {
    title: Option<String>,
    start: Option<SceneId>,
    scenes: Vec<Scene>,
}

impl StoryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a scene.
    ///
    /// Unless a start is designated, the first scene added is the start.
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Add a scene and make it the start, replacing any earlier start.
    pub fn start_scene(mut self, scene: Scene) -> Self {
        self.start = Some(scene.id.clone());
        self.scenes.push(scene);
        self
    }

    /// Designate the start scene by ID.
    pub fn start(mut self, id: impl Into<SceneId>) -> Self {
        self.start = Some(id.into());
        self
    }

    /// Validate and assemble the story.
    pub fn build(self) -> CoreResult<Story> {
        let start = match self.start {
            Some(id) => id,
            None => self
                .scenes
                .first()
                .map(|s| s.id.clone())
                .ok_or(CoreError::EmptyStory)?,
        };

        let mut scenes = IndexMap::with_capacity(self.scenes.len());
        for scene in self.scenes {
            if scenes.contains_key(&scene.id) {
                return Err(CoreError::DuplicateScene(scene.id));
            }
            scenes.insert(scene.id.clone(), scene);
        }

        if scenes.is_empty() {
            return Err(CoreError::EmptyStory);
        }
        if !scenes.contains_key(&start) {
            return Err(CoreError::MissingStart(start));
        }

        Ok(Story {
            title: self.title,
            start,
            scenes,
        })
    }
}

// ---------------------------------------------------------------------------
// On-disk form
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    start: SceneId,
    #[serde(alias = "rooms")]
    scenes: IndexMap<SceneId, SceneFile>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    text: String,
    #[serde(default)]
    choices: IndexMap<String, Destination>,
}

impl StoryFile {
    fn into_story(self) -> CoreResult<Story> {
        let mut builder = StoryBuilder::new().start(self.start);
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        for (id, scene) in self.scenes {
            builder = builder.scene(Scene {
                id,
                text: scene.text,
                choices: scene.choices,
            });
        }
        builder.build()
    }
}

impl From<&Story> for StoryFile {
    fn from(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            start: story.start.clone(),
            scenes: story
                .scenes
                .iter()
                .map(|(id, scene)| {
                    (
                        id.clone(),
                        SceneFile {
                            text: scene.text.clone(),
                            choices: scene.choices.clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}
