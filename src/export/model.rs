// src/export/model.rs

use crate::models::goals::Goals;
use crate::models::record::{DaySheetRecord, ScheduleEntry};
use crate::utils::date::long_date;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// Flat view of one day's sheet for every export format.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SheetExport {
    pub date: NaiveDate,
    pub priorities: Vec<String>,
    pub schedule: Vec<ScheduleEntry>,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_goal: Option<String>,
    pub exported_at: DateTime<Local>,
}

impl SheetExport {
    pub fn new(record: DaySheetRecord, goals: Goals) -> Self {
        Self {
            date: record.date,
            priorities: record.priorities,
            schedule: record.schedule,
            notes: record.notes,
            revenue_goal: goals.revenue,
            patient_goal: goals.patients,
            exported_at: record.saved_at,
        }
    }

    pub fn title(&self) -> String {
        format!("Day Sheet - {}", long_date(self.date))
    }
}

/// Header for CSV / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["section", "slot", "text"]
}

/// One row per filled item: goals, priorities, schedule, then note lines.
pub(crate) fn sheet_to_table(sheet: &SheetExport) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    let goals = [
        ("Revenue", &sheet.revenue_goal),
        ("Patients", &sheet.patient_goal),
    ];
    for (label, value) in goals {
        if let Some(v) = value {
            rows.push(vec!["goal".into(), label.into(), v.clone()]);
        }
    }

    for (i, p) in sheet.priorities.iter().enumerate() {
        rows.push(vec!["priority".into(), (i + 1).to_string(), p.clone()]);
    }

    for entry in &sheet.schedule {
        rows.push(vec![
            "schedule".into(),
            entry.time.clone(),
            entry.activity.clone(),
        ]);
    }

    for line in sheet.notes.lines().filter(|l| !l.trim().is_empty()) {
        rows.push(vec!["notes".into(), String::new(), line.to_string()]);
    }

    rows
}
