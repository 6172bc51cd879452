//! Configuration schema definitions for studycheck.
//!
//! These structs map to the `.studycheck.yml` file format. Every section
//! carries `#[serde(default)]`, so a file only needs to name what it
//! changes; the defaults describe the voice-conversion study workstation.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.studycheck.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Study name shown in the header banner
    pub app_name: String,

    /// Interpreter settings
    pub python: PythonConfig,

    /// Packages that must be importable
    pub packages: Vec<String>,

    /// Directories that must exist, relative to the project root
    pub directories: Vec<DirectoryConfig>,

    /// Categorized sample audio
    pub samples: SamplesConfig,

    /// The cloned voice-conversion project
    pub external_project: ExternalProjectConfig,

    /// Model checkpoint lookup
    pub checkpoint: CheckpointConfig,

    /// Environment variable holding the Hugging Face token; null disables the check
    pub hf_token_env: Option<String>,

    /// Model-loading options handed to launchers
    pub model_loading: ModelLoadingConfig,

    /// Commands shown when everything is ready
    pub next_steps: Vec<String>,

    /// Setup documentation shown when something is missing
    pub setup_doc: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            app_name: "IUI 2025 User Study".to_string(),
            python: PythonConfig::default(),
            packages: ["torch", "torchaudio", "numpy", "ipywidgets", "voila", "jupyter"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            directories: vec![
                DirectoryConfig::new(
                    "seed-vc",
                    "Seed-VC directory (required for voice conversion)",
                ),
                DirectoryConfig::new(
                    "target_voices/emotion_samples",
                    "Target voice samples directory",
                ),
                DirectoryConfig::new(
                    "target_voices/emotion_samples/happy",
                    "Happy emotion samples",
                ),
                DirectoryConfig::new("target_voices/emotion_samples/sad", "Sad emotion samples"),
                DirectoryConfig::new(
                    "target_voices/emotion_samples/angry",
                    "Angry emotion samples",
                ),
            ],
            samples: SamplesConfig::default(),
            external_project: ExternalProjectConfig::default(),
            checkpoint: CheckpointConfig::default(),
            hf_token_env: Some("HF_TOKEN".to_string()),
            model_loading: ModelLoadingConfig::default(),
            next_steps: vec![
                "./run_study.sh".to_string(),
                "voila user_study_iui_2025.ipynb --port=8866".to_string(),
            ],
            setup_doc: "SETUP.txt".to_string(),
        }
    }
}

/// Python interpreter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// Interpreter to invoke (name on PATH or absolute path)
    pub executable: String,

    /// Minimum `major.minor` version
    pub min_version: String,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            executable: "python3".to_string(),
            min_version: "3.8".to_string(),
        }
    }
}

/// A directory that must exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Path relative to the project root
    pub path: String,

    /// Human description used as the check label
    pub description: String,
}

impl DirectoryConfig {
    /// Create a directory entry.
    pub fn new(path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

/// Sample audio layout: one subdirectory per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Root holding the category subdirectories
    pub root: String,

    /// File extension counted in each category, without the dot
    pub extension: String,

    /// Category labels, each a subdirectory of `root`
    pub categories: Vec<String>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            root: "target_voices/emotion_samples".to_string(),
            extension: "wav".to_string(),
            categories: vec!["happy".to_string(), "sad".to_string(), "angry".to_string()],
        }
    }
}

/// The external voice-conversion project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalProjectConfig {
    /// Display name used in hints
    pub name: String,

    /// Project directory relative to the project root
    pub path: String,

    /// Entry-point file inside the project directory
    pub entry_point: String,

    /// Module that must import with the project on the search path
    pub dependency: String,

    /// Label for the dependency check
    pub dependency_label: String,

    /// Hint shown when the dependency is missing
    pub install_hint: String,
}

impl Default for ExternalProjectConfig {
    fn default() -> Self {
        Self {
            name: "Seed-VC".to_string(),
            path: "seed-vc".to_string(),
            entry_point: "inference.py".to_string(),
            dependency: "yaml".to_string(),
            dependency_label: "PyYAML (Seed-VC dependency)".to_string(),
            install_hint: "Run: cd seed-vc && pip install -r requirements-mac.txt".to_string(),
        }
    }
}

/// Model checkpoint lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Checkpoint file name, used in the check label
    pub file_name: String,

    /// Candidate locations; relative paths resolve against the project root
    /// and a leading `~/` against the home directory
    pub locations: Vec<String>,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            file_name: "DiT_uvit_tat_xlsr_ema.pth".to_string(),
            locations: vec![
                "DiT_uvit_tat_xlsr_ema.pth".to_string(),
                "seed-vc/DiT_uvit_tat_xlsr_ema.pth".to_string(),
                "~/.cache/huggingface/hub".to_string(),
            ],
        }
    }
}

/// Options passed explicitly to model-loading call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelLoadingConfig {
    /// Load checkpoints written in the pre-2.6 full-pickle format
    pub legacy_checkpoint_format: bool,
}

impl Default for ModelLoadingConfig {
    fn default() -> Self {
        Self {
            legacy_checkpoint_format: true,
        }
    }
}
