//! Building the preview display model from a resolved task.

use chrono::NaiveTime;

use crate::age::AgeGroup;
use crate::render::escape_html;
use crate::task::Task;

/// Title used when a task carries none, and always used for the 8-12 group.
pub const DEFAULT_TITLE: &str = "Комплекс развития на сегодня";

/// Everything the renderer needs for one preview. Derived per call and
/// discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewModel {
    pub title: String,
    /// Escaped body with newlines already converted to `<br>`.
    pub body_html: String,
    /// Badge text: known-group label, else the raw `age_group`, else empty.
    pub age_group_label: String,
    pub image_ref: Option<String>,
    /// `HH:MM`, zero-padded.
    pub timestamp: String,
}

/// Derive the display model for a task at the given wall-clock time.
///
/// Pure: the clock reading is injected so output stays reproducible.
pub fn build_preview_model(task: &Task, now: NaiveTime) -> PreviewModel {
    let mut title = task
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let group = task.age_group.as_deref().and_then(AgeGroup::from_key);
    let body = match group {
        Some(group) => {
            // The 8-12 complex always ships under the stock title, whatever
            // the task record says.
            if group == AgeGroup::M8To12 {
                title = DEFAULT_TITLE.to_string();
            }
            group.message()
        }
        None => task.description.as_deref().unwrap_or(""),
    };
    let body_html = escape_html(body).replace('\n', "<br>");

    let age_group_label = match group {
        Some(group) => group.label().to_string(),
        None => task.age_group.clone().unwrap_or_default(),
    };

    // image_url wins over image_path; empty strings count as unset
    let image_ref = [task.image_url.as_deref(), task.image_path.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(str::to_string);

    PreviewModel {
        title,
        body_html,
        age_group_label,
        image_ref,
        timestamp: now.format("%H:%M").to_string(),
    }
}
