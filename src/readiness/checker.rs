//! The readiness checker.
//!
//! `ReadinessChecker::run` walks the check groups in a fixed order and
//! never stops early: a failing interpreter still gets its packages,
//! directories and samples checked, so one run surfaces every problem.

use crate::config::StudyConfig;
use crate::python::{Interpreter, PythonVersion};
use crate::readiness::probe::Probe;
use crate::readiness::status::{CheckGroup, CheckResult, RunReport, Severity};
use crate::sys::resolve_path;
use std::path::{Path, PathBuf};

/// Placeholder in a label replaced by the probe's observation.
const OBSERVED: &str = "{observed}";

/// A labelled probe with a severity and remediation hint.
#[derive(Debug, Clone)]
pub struct Check {
    /// Label; `{observed}` is replaced with what the probe saw
    pub label: String,
    /// Condition to evaluate
    pub probe: Probe,
    /// Whether failure blocks readiness
    pub severity: Severity,
    /// Group for display
    pub group: CheckGroup,
    /// Shown when the check fails
    pub hint: Option<String>,
}

impl Check {
    /// Create a required check.
    pub fn required(group: CheckGroup, label: impl Into<String>, probe: Probe) -> Self {
        Self {
            label: label.into(),
            probe,
            severity: Severity::Required,
            group,
            hint: None,
        }
    }

    /// Create an informational check.
    pub fn informational(group: CheckGroup, label: impl Into<String>, probe: Probe) -> Self {
        Self {
            severity: Severity::Informational,
            ..Self::required(group, label, probe)
        }
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Evaluate the probe and build the result.
    pub fn evaluate(&self, interpreter: &dyn Interpreter) -> CheckResult {
        let outcome = self.probe.evaluate(interpreter);
        let observed = outcome.observed.as_deref().unwrap_or("not found");
        let label = self.label.replace(OBSERVED, observed);

        if outcome.passed {
            tracing::debug!("check passed: {}", label);
        } else {
            tracing::debug!("check failed ({:?}): {}", self.severity, label);
        }

        CheckResult {
            label,
            passed: outcome.passed,
            hint: if outcome.passed {
                None
            } else {
                self.hint.clone()
            },
            severity: self.severity,
            group: self.group,
            details: outcome.details,
        }
    }
}

/// Runs every readiness check for one project.
pub struct ReadinessChecker<'a> {
    config: &'a StudyConfig,
    project_root: PathBuf,
    home: Option<PathBuf>,
    interpreter: &'a dyn Interpreter,
}

impl<'a> ReadinessChecker<'a> {
    /// Create a checker for `project_root`.
    pub fn new(
        config: &'a StudyConfig,
        project_root: &Path,
        interpreter: &'a dyn Interpreter,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            home: crate::sys::home_dir(),
            interpreter,
        }
    }

    /// Override the home directory used to expand `~/` locations.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Run all groups in order and return the report.
    pub fn run(&self) -> RunReport {
        tracing::debug!("Running readiness checks in {}", self.project_root.display());
        let mut report = RunReport::new();

        self.record(&mut report, self.interpreter_checks());
        self.record(&mut report, self.package_checks());
        self.record(&mut report, self.directory_checks());
        self.record(&mut report, self.sample_checks());
        self.record(&mut report, self.external_project_checks());
        self.record(&mut report, vec![self.checkpoint_check()]);
        self.record(&mut report, self.hf_token_checks());

        tracing::debug!(
            "Readiness: {} ({} checks, {} blocking failures)",
            if report.is_ready() { "ready" } else { "not ready" },
            report.results().len(),
            report.blocking_failures().len()
        );
        report
    }

    fn record(&self, report: &mut RunReport, checks: Vec<Check>) {
        for check in &checks {
            report.push(check.evaluate(self.interpreter));
        }
    }

    fn path(&self, relative: &str) -> PathBuf {
        resolve_path(relative, &self.project_root, self.home.as_deref())
    }

    fn interpreter_checks(&self) -> Vec<Check> {
        let min = &self.config.python.min_version;
        // The loader validates min_version; a hand-built config that skipped
        // validation falls back to the lowest possible minimum.
        let minimum = PythonVersion::parse(min).unwrap_or(PythonVersion::new(0, 0, 0));
        vec![Check::required(
            CheckGroup::Interpreter,
            format!("Python {}", OBSERVED),
            Probe::InterpreterVersion { minimum },
        )
        .with_hint(format!("Please use Python {} or higher", min))]
    }

    fn package_checks(&self) -> Vec<Check> {
        self.config
            .packages
            .iter()
            .map(|pkg| {
                Check::required(
                    CheckGroup::Packages,
                    pkg.as_str(),
                    Probe::Import {
                        module: pkg.clone(),
                        search_path: None,
                    },
                )
                .with_hint(format!("Install with: pip install {}", pkg))
            })
            .collect()
    }

    fn directory_checks(&self) -> Vec<Check> {
        self.config
            .directories
            .iter()
            .map(|dir| {
                let path = self.path(&dir.path);
                Check::required(
                    CheckGroup::Directories,
                    dir.description.as_str(),
                    Probe::DirExists(path.clone()),
                )
                .with_hint(format!("Missing: {}", path.display()))
            })
            .collect()
    }

    /// One file-count check per category whose directory exists. A missing
    /// category directory is already reported by the directory group.
    fn sample_checks(&self) -> Vec<Check> {
        let samples = &self.config.samples;
        let root = self.path(&samples.root);
        let extension = samples.extension.trim_start_matches('.');

        samples
            .categories
            .iter()
            .map(|category| (category, root.join(category)))
            .filter(|(_, dir)| dir.is_dir())
            .map(|(category, dir)| {
                Check::required(
                    CheckGroup::Samples,
                    format!("{} samples ({} files)", capitalize(category), OBSERVED),
                    Probe::FileCount {
                        dir: dir.clone(),
                        extension: extension.to_string(),
                    },
                )
                .with_hint(format!(
                    "Add at least one .{} file to {}",
                    extension,
                    dir.display()
                ))
            })
            .collect()
    }

    /// Entry point and nested dependency, only when the project directory exists.
    fn external_project_checks(&self) -> Vec<Check> {
        let project = &self.config.external_project;
        let dir = self.path(&project.path);
        if !dir.is_dir() {
            tracing::debug!("{} not present, skipping its checks", dir.display());
            return Vec::new();
        }

        vec![
            Check::required(
                CheckGroup::ExternalProject,
                format!("{} exists", project.entry_point),
                Probe::PathExists(dir.join(&project.entry_point)),
            )
            .with_hint(format!("{} may not be properly installed", project.name)),
            Check::required(
                CheckGroup::ExternalProject,
                project.dependency_label.as_str(),
                Probe::Import {
                    module: project.dependency.clone(),
                    search_path: Some(dir),
                },
            )
            .with_hint(project.install_hint.as_str()),
        ]
    }

    fn checkpoint_check(&self) -> Check {
        let candidates = self
            .config
            .checkpoint
            .locations
            .iter()
            .map(|loc| self.path(loc))
            .collect();
        Check::informational(
            CheckGroup::Checkpoint,
            format!("Model checkpoint file ({})", self.config.checkpoint.file_name),
            Probe::AnyPathExists(candidates),
        )
        .with_hint("Model will be downloaded automatically on first run")
    }

    fn hf_token_checks(&self) -> Vec<Check> {
        let Some(var) = &self.config.hf_token_env else {
            return Vec::new();
        };
        vec![Check::informational(
            CheckGroup::HfToken,
            format!("Hugging Face token ({})", var),
            Probe::EnvVarSet(var.clone()),
        )
        .with_hint(format!("Set {} to download gated models", var))]
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, StudyCheckError};
    use std::fs;
    use tempfile::TempDir;

    /// Interpreter double: fixed version, importable modules listed.
    struct FakePython {
        version: Option<PythonVersion>,
        missing: Vec<&'static str>,
    }

    impl FakePython {
        fn healthy() -> Self {
            Self {
                version: Some(PythonVersion::new(3, 11, 4)),
                missing: Vec::new(),
            }
        }
    }

    impl Interpreter for FakePython {
        fn version(&self) -> Result<PythonVersion> {
            self.version.ok_or(StudyCheckError::InterpreterUnavailable {
                executable: "python3".to_string(),
                message: "No such file or directory".to_string(),
            })
        }

        fn can_import(&self, module: &str, _search_path: Option<&Path>) -> Result<bool> {
            Ok(!self.missing.contains(&module))
        }
    }

    /// A project with every directory, one wav per category, no checkpoint.
    fn complete_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let seed_vc = temp.path().join("seed-vc");
        fs::create_dir_all(&seed_vc).unwrap();
        fs::write(seed_vc.join("inference.py"), "").unwrap();
        for category in ["happy", "sad", "angry"] {
            let dir = temp
                .path()
                .join("target_voices/emotion_samples")
                .join(category);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{}_01.wav", category)), "").unwrap();
        }
        temp
    }

    fn config() -> StudyConfig {
        StudyConfig {
            hf_token_env: None,
            ..StudyConfig::default()
        }
    }

    fn run(config: &StudyConfig, root: &Path, python: &FakePython, home: &Path) -> RunReport {
        ReadinessChecker::new(config, root, python)
            .with_home(Some(home.to_path_buf()))
            .run()
    }

    #[test]
    fn complete_project_without_checkpoint_is_ready() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        assert!(report.is_ready());
        let checkpoint: Vec<_> = report.in_group(CheckGroup::Checkpoint).collect();
        assert_eq!(checkpoint.len(), 1);
        assert!(!checkpoint[0].passed);
        assert_eq!(checkpoint[0].severity, Severity::Informational);
        assert!(checkpoint[0].hint.as_deref().unwrap().contains("downloaded"));
    }

    #[test]
    fn one_missing_package_is_the_only_blocking_failure() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let python = FakePython {
            missing: vec!["torchaudio"],
            ..FakePython::healthy()
        };
        let report = run(&config(), project.path(), &python, home.path());

        assert!(!report.is_ready());
        let failures = report.blocking_failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].label, "torchaudio");
        assert!(failures[0].hint.as_deref().unwrap().contains("torchaudio"));
    }

    #[test]
    fn old_interpreter_does_not_short_circuit() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let python = FakePython {
            version: Some(PythonVersion::new(3, 7, 9)),
            missing: Vec::new(),
        };
        let report = run(&config(), project.path(), &python, home.path());

        assert!(!report.is_ready());
        assert_eq!(report.results()[0].label, "Python 3.7.9");
        assert!(!report.results()[0].passed);
        for group in [
            CheckGroup::Packages,
            CheckGroup::Directories,
            CheckGroup::Samples,
            CheckGroup::ExternalProject,
            CheckGroup::Checkpoint,
        ] {
            assert!(report.in_group(group).count() > 0, "{:?} missing", group);
        }
        assert_eq!(report.results().len(), 1 + 6 + 5 + 3 + 2 + 1);
    }

    #[test]
    fn missing_interpreter_is_reported_not_raised() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let python = FakePython {
            version: None,
            missing: Vec::new(),
        };
        let report = run(&config(), project.path(), &python, home.path());

        let first = &report.results()[0];
        assert_eq!(first.label, "Python not found");
        assert_eq!(first.hint.as_deref(), Some("Please use Python 3.8 or higher"));
        assert!(!first.details.is_empty());
    }

    #[test]
    fn missing_category_directory_emits_no_file_count() {
        let project = complete_project();
        fs::remove_dir_all(project.path().join("target_voices/emotion_samples/sad")).unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let samples: Vec<_> = report.in_group(CheckGroup::Samples).collect();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|r| !r.label.starts_with("Sad")));
        let sad_dir = report
            .in_group(CheckGroup::Directories)
            .find(|r| r.label == "Sad emotion samples")
            .unwrap();
        assert!(!sad_dir.passed);
        assert_eq!(report.blocking_failures().len(), 1);
    }

    #[test]
    fn empty_category_directory_exists_but_has_no_files() {
        let project = complete_project();
        fs::remove_file(project.path().join("target_voices/emotion_samples/angry/angry_01.wav"))
            .unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let angry_dir = report
            .in_group(CheckGroup::Directories)
            .find(|r| r.label == "Angry emotion samples")
            .unwrap();
        assert!(angry_dir.passed);
        let angry_count = report
            .in_group(CheckGroup::Samples)
            .find(|r| r.label.starts_with("Angry"))
            .unwrap();
        assert!(!angry_count.passed);
        assert_eq!(angry_count.label, "Angry samples (0 files)");
        assert!(!report.is_ready());
    }

    #[test]
    fn sample_labels_carry_counts_and_files() {
        let project = complete_project();
        let happy = project.path().join("target_voices/emotion_samples/happy");
        fs::write(happy.join("happy_02.wav"), "").unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let happy = report
            .in_group(CheckGroup::Samples)
            .find(|r| r.label.starts_with("Happy"))
            .unwrap();
        assert_eq!(happy.label, "Happy samples (2 files)");
        assert_eq!(happy.details, vec!["happy_01.wav", "happy_02.wav"]);
        assert!(happy.hint.is_none());
    }

    #[test]
    fn absent_external_project_skips_nested_group() {
        let project = complete_project();
        fs::remove_dir_all(project.path().join("seed-vc")).unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        assert_eq!(report.in_group(CheckGroup::ExternalProject).count(), 0);
        assert!(!report.is_ready());
    }

    #[test]
    fn regular_file_in_place_of_project_directory_fails_consistently() {
        let project = complete_project();
        fs::remove_dir_all(project.path().join("seed-vc")).unwrap();
        fs::write(project.path().join("seed-vc"), "").unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let seed_vc = report
            .in_group(CheckGroup::Directories)
            .find(|r| r.label.starts_with("Seed-VC directory"))
            .unwrap();
        assert!(!seed_vc.passed);
        assert_eq!(report.in_group(CheckGroup::ExternalProject).count(), 0);
        assert_eq!(report.blocking_failures().len(), 1);
    }

    #[test]
    fn missing_entry_point_blocks_readiness() {
        let project = complete_project();
        fs::remove_file(project.path().join("seed-vc/inference.py")).unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let failures = report.blocking_failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].label, "inference.py exists");
        assert_eq!(
            failures[0].hint.as_deref(),
            Some("Seed-VC may not be properly installed")
        );
    }

    #[test]
    fn missing_nested_dependency_blocks_readiness() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let python = FakePython {
            missing: vec!["yaml"],
            ..FakePython::healthy()
        };
        let report = run(&config(), project.path(), &python, home.path());

        let failures = report.blocking_failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].group, CheckGroup::ExternalProject);
        assert!(failures[0].hint.as_deref().unwrap().contains("pip install"));
    }

    #[test]
    fn checkpoint_found_in_project_root() {
        let project = complete_project();
        fs::write(project.path().join("DiT_uvit_tat_xlsr_ema.pth"), "").unwrap();
        let home = TempDir::new().unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        let checkpoint = report.in_group(CheckGroup::Checkpoint).next().unwrap();
        assert!(checkpoint.passed);
        assert!(checkpoint.hint.is_none());
    }

    #[test]
    fn checkpoint_found_in_home_cache() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join(".cache/huggingface/hub")).unwrap();
        let report = run(&config(), project.path(), &FakePython::healthy(), home.path());

        assert!(report.in_group(CheckGroup::Checkpoint).next().unwrap().passed);
    }

    #[test]
    fn hf_token_check_is_informational() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let config = StudyConfig {
            hf_token_env: Some("STUDYCHECK_TEST_UNSET_TOKEN".to_string()),
            ..StudyConfig::default()
        };
        let report = run(&config, project.path(), &FakePython::healthy(), home.path());

        let token = report.in_group(CheckGroup::HfToken).next().unwrap();
        assert!(!token.passed);
        assert_eq!(token.severity, Severity::Informational);
        assert!(report.is_ready());
    }

    #[test]
    fn verdict_matches_required_results() {
        let project = complete_project();
        fs::remove_dir_all(project.path().join("target_voices/emotion_samples/happy")).unwrap();
        let home = TempDir::new().unwrap();
        let python = FakePython {
            missing: vec!["voila", "yaml"],
            ..FakePython::healthy()
        };
        let report = run(&config(), project.path(), &python, home.path());

        let expected = report
            .results()
            .iter()
            .filter(|r| r.severity == Severity::Required)
            .all(|r| r.passed);
        assert_eq!(report.is_ready(), expected);
        assert_eq!(report.blocking_failures().len(), 3);
    }

    #[test]
    fn custom_extension_is_counted() {
        let project = complete_project();
        let home = TempDir::new().unwrap();
        let mut config = config();
        config.samples.extension = ".flac".to_string();
        let report = run(&config, project.path(), &FakePython::healthy(), home.path());

        let samples: Vec<_> = report.in_group(CheckGroup::Samples).collect();
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|r| !r.passed));
        assert!(samples[0].hint.as_deref().unwrap().contains(".flac file"));
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
