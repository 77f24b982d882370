//! Task records and the data sources they are resolved from.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::age::AgeGroup;

/// Task identifier as it appears in exported data files.
///
/// Exports are inconsistent about id types (numbers in some files, strings
/// in others), so both are accepted and compared by value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl TaskId {
    /// Loose equality: `7`, `"7"` and `"007"` all name the same task.
    /// Text-to-text comparison stays exact.
    pub fn matches(&self, other: &TaskId) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(n), Self::Text(s)) | (Self::Text(s), Self::Number(n)) => {
                s.trim().parse::<i64>().is_ok_and(|v| v == *n)
            }
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TaskId {
    /// Command-line ids become numeric when they look numeric, so they can
    /// match both numeric and string ids in the data.
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(s.to_string()),
        }
    }
}

/// Title of the placeholder record used when no task matches.
pub const MISSING_TASK_TITLE: &str = "Задание не найдено";
/// Body of the placeholder record used when no task matches.
pub const MISSING_TASK_DESCRIPTION: &str = "Ошибка загрузки данных задания";

/// One day's activity record, owned by the CMS export.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Task {
    /// Fallback record for an id no source knows about. The preview must
    /// always have something to show, so absence never becomes an error.
    pub fn placeholder(id: TaskId) -> Self {
        Self {
            id,
            title: Some(MISSING_TASK_TITLE.to_string()),
            description: Some(MISSING_TASK_DESCRIPTION.to_string()),
            age_group: Some(AgeGroup::M8To12.key().to_string()),
            image_url: None,
            image_path: None,
        }
    }
}

/// A named, ordered collection of tasks. Resolution searches sources in the
/// order given; earlier sources win on id collisions.
#[derive(Debug, Clone)]
pub struct TaskSource {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Shapes a task data file may take: the CMS export document with a `tasks`
/// field, or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskFile {
    Document { tasks: Vec<Task> },
    List(Vec<Task>),
}

impl TaskSource {
    /// Load a source from a JSON file, named by the file stem.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let file: TaskFile = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid task data in {}: {}", path.display(), e))?;

        let tasks = match file {
            TaskFile::Document { tasks } => tasks,
            TaskFile::List(tasks) => tasks,
        };

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { name, tasks })
    }
}

/// Load every readable source, skipping absent or malformed files.
/// Any subset of the configured files may be missing; the preview still
/// renders from whatever is left.
pub fn load_sources(paths: &[PathBuf]) -> Vec<TaskSource> {
    let mut sources = Vec::new();
    for path in paths {
        match TaskSource::load(path) {
            Ok(source) => {
                debug!(source = %source.name, count = source.tasks.len(), "source_loaded");
                sources.push(source);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "source_unavailable");
            }
        }
    }
    sources
}

/// Resolve a task by id, searching sources in priority order.
/// Never fails: absence degrades to a placeholder record.
pub fn resolve_task(id: &TaskId, sources: &[TaskSource]) -> Task {
    for source in sources {
        if let Some(task) = source.tasks.iter().find(|t| t.id.matches(id)) {
            debug!(source = %source.name, id = %id, "task_resolved");
            return task.clone();
        }
    }

    warn!(id = %id, "task_missing_placeholder_used");
    Task::placeholder(id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId) -> Task {
        Task {
            id,
            title: None,
            description: None,
            age_group: None,
            image_url: None,
            image_path: None,
        }
    }

    // TaskId::matches tests

    #[test]
    fn test_id_matches_number_to_number() {
        assert!(TaskId::Number(7).matches(&TaskId::Number(7)));
        assert!(!TaskId::Number(7).matches(&TaskId::Number(8)));
    }

    #[test]
    fn test_id_matches_text_to_text() {
        assert!(TaskId::Text("a1".into()).matches(&TaskId::Text("a1".into())));
        assert!(!TaskId::Text("a1".into()).matches(&TaskId::Text("a2".into())));
    }

    #[test]
    fn test_id_matches_number_to_text_coercion() {
        assert!(TaskId::Number(7).matches(&TaskId::Text("7".into())));
        assert!(TaskId::Text("7".into()).matches(&TaskId::Number(7)));
        assert!(TaskId::Number(7).matches(&TaskId::Text("007".into())));
        assert!(TaskId::Number(7).matches(&TaskId::Text(" 7 ".into())));
    }

    #[test]
    fn test_id_matches_non_numeric_text_never_matches_number() {
        assert!(!TaskId::Number(7).matches(&TaskId::Text("seven".into())));
        assert!(!TaskId::Number(7).matches(&TaskId::Text("".into())));
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!(TaskId::from("42"), TaskId::Number(42));
        assert_eq!(TaskId::from(" 42 "), TaskId::Number(42));
        assert_eq!(TaskId::from("day-1"), TaskId::Text("day-1".into()));
    }

    // Task::placeholder tests

    #[test]
    fn test_placeholder_fields() {
        let placeholder = Task::placeholder(TaskId::Number(42));
        assert_eq!(placeholder.id, TaskId::Number(42));
        assert_eq!(placeholder.title.as_deref(), Some(MISSING_TASK_TITLE));
        assert_eq!(
            placeholder.description.as_deref(),
            Some(MISSING_TASK_DESCRIPTION)
        );
        assert_eq!(placeholder.age_group.as_deref(), Some("8-12"));
        assert!(placeholder.image_url.is_none());
        assert!(placeholder.image_path.is_none());
    }

    // resolve_task tests

    #[test]
    fn test_resolve_finds_task_in_single_source() {
        let sources = vec![TaskSource {
            name: "tasks".into(),
            tasks: vec![task(TaskId::Number(1)), task(TaskId::Number(2))],
        }];
        let resolved = resolve_task(&TaskId::Number(2), &sources);
        assert_eq!(resolved.id, TaskId::Number(2));
    }

    #[test]
    fn test_resolve_earlier_source_wins() {
        let mut first = task(TaskId::Number(5));
        first.title = Some("first".into());
        let mut second = task(TaskId::Number(5));
        second.title = Some("second".into());

        let sources = vec![
            TaskSource {
                name: "tasks".into(),
                tasks: vec![first],
            },
            TaskSource {
                name: "content".into(),
                tasks: vec![second],
            },
        ];
        let resolved = resolve_task(&TaskId::Number(5), &sources);
        assert_eq!(resolved.title.as_deref(), Some("first"));
    }

    #[test]
    fn test_resolve_falls_through_to_later_source() {
        let sources = vec![
            TaskSource {
                name: "tasks".into(),
                tasks: vec![task(TaskId::Number(1))],
            },
            TaskSource {
                name: "content".into(),
                tasks: vec![task(TaskId::Number(9))],
            },
        ];
        let resolved = resolve_task(&TaskId::Number(9), &sources);
        assert_eq!(resolved.id, TaskId::Number(9));
    }

    #[test]
    fn test_resolve_loose_id_match_across_types() {
        let sources = vec![TaskSource {
            name: "tasks".into(),
            tasks: vec![task(TaskId::Text("7".into()))],
        }];
        let resolved = resolve_task(&TaskId::Number(7), &sources);
        assert_eq!(resolved.id, TaskId::Text("7".into()));
    }

    #[test]
    fn test_resolve_missing_id_returns_placeholder() {
        let sources = vec![TaskSource {
            name: "tasks".into(),
            tasks: vec![task(TaskId::Number(1))],
        }];
        let resolved = resolve_task(&TaskId::Number(42), &sources);
        assert_eq!(resolved.id, TaskId::Number(42));
        assert_eq!(resolved.title.as_deref(), Some(MISSING_TASK_TITLE));
        assert_eq!(resolved.age_group.as_deref(), Some("8-12"));
    }

    #[test]
    fn test_resolve_no_sources_returns_placeholder() {
        let resolved = resolve_task(&TaskId::Text("x".into()), &[]);
        assert_eq!(resolved.id, TaskId::Text("x".into()));
        assert_eq!(resolved.title.as_deref(), Some(MISSING_TASK_TITLE));
    }

    // Data file parsing tests

    #[test]
    fn test_task_deserializes_with_missing_fields() {
        let json = r#"{"id": 3}"#;
        let parsed: Task = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, TaskId::Number(3));
        assert!(parsed.title.is_none());
        assert!(parsed.description.is_none());
        assert!(parsed.age_group.is_none());
    }

    #[test]
    fn test_task_file_bare_array() {
        let json = r#"[{"id": 1}, {"id": "2"}]"#;
        let parsed: TaskFile = serde_json::from_str(json).unwrap();
        let TaskFile::List(tasks) = parsed else {
            panic!("expected bare array to parse as a list");
        };
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, TaskId::Text("2".into()));
    }

    #[test]
    fn test_task_file_cms_document() {
        let json = r#"{"tasks": [{"id": 1, "age_group": "18-24"}]}"#;
        let parsed: TaskFile = serde_json::from_str(json).unwrap();
        let TaskFile::Document { tasks } = parsed else {
            panic!("expected document to parse via the tasks field");
        };
        assert_eq!(tasks[0].age_group.as_deref(), Some("18-24"));
    }

    #[test]
    fn test_load_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{"tasks": [{"id": 7, "title": "t"}]}"#).unwrap();

        let source = TaskSource::load(&path).unwrap();
        assert_eq!(source.name, "content");
        assert_eq!(source.tasks.len(), 1);
    }

    #[test]
    fn test_load_source_missing_file() {
        let err = TaskSource::load(Path::new("./does-not-exist.json")).unwrap_err();
        assert!(err.contains("does-not-exist.json"));
    }

    #[test]
    fn test_load_sources_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("tasks.json");
        std::fs::write(&good, r#"[{"id": 1}]"#).unwrap();
        let bad = dir.path().join("broken.json");
        std::fs::write(&bad, "not json").unwrap();
        let missing = dir.path().join("absent.json");

        let sources = load_sources(&[bad, missing, good]);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "tasks");
    }
}
