//! Text rendering of the student table and the summary cards.

use std::fmt::Write;

use crate::{api::RecordApi, controller::ListController, record::Student};

pub const LOADING_TEXT: &str = "Loading data...";
pub const EMPTY_TEXT: &str = "No students found. Add one to get started.";

/// One table row as displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub initial: char,
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub status: String,
}

impl Row {
    pub fn from_student(s: &Student) -> Self {
        Self {
            initial: avatar_initial(s.name.as_deref()),
            id: s.id.clone(),
            name: s.name.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            course: s.course.clone().unwrap_or_default(),
            status: s.status_label().to_string(),
        }
    }
}

/// First letter of the name, uppercased; `?` for a missing or empty name.
pub fn avatar_initial(name: Option<&str>) -> char {
    name.and_then(|n| n.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?')
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    /// Placeholder figure carried over from the dashboard mock-up (`total - 1`).
    /// It does not look at record status.
    pub active_learners_placeholder: usize,
}

pub fn stats(records: &[Student]) -> Stats {
    Stats {
        total: records.len(),
        active_learners_placeholder: records.len().saturating_sub(1),
    }
}

pub fn rows(records: &[Student]) -> Vec<Row> {
    records.iter().map(Row::from_student).collect()
}

/// Render the whole list view: stats line, loading/empty notice, then rows.
pub fn render<A: RecordApi>(controller: &ListController<A>) -> String {
    let mut out = String::new();
    let st = stats(controller.records());
    let _ = writeln!(
        out,
        "Total Students: {}  Active Learners: {}",
        st.total, st.active_learners_placeholder
    );
    let _ = writeln!(
        out,
        "{:<3} {:<36} {:<24} {:<28} {:<12} {}",
        "", "ID", "NAME", "CONTACT", "COURSE", "STATUS"
    );
    if controller.loading() {
        let _ = writeln!(out, "{LOADING_TEXT}");
    }
    if controller.is_empty_state() {
        let _ = writeln!(out, "{EMPTY_TEXT}");
    }
    for row in rows(controller.records()) {
        let _ = writeln!(
            out,
            "[{}] {:<36} {:<24} {:<28} {:<12} {}",
            row.initial, row.id, row.name, row.email, row.course, row.status
        );
    }
    out
}
