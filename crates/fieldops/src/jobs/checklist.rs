use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub label: String,
    /// Free-form quantity hint, e.g. "24 count".
    pub count: Option<String>,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(id: u32, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            count: None,
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

pub fn progress(items: &[ChecklistItem]) -> ChecklistProgress {
    let total = items.len();
    let completed = items.iter().filter(|i| i.completed).count();

    let percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    ChecklistProgress {
        completed,
        total,
        percent,
    }
}
