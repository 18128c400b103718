use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One filled schedule row as persisted: `{"time": "6:00 AM", "activity": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub activity: String,
}

/// The JSON envelope stored in both day-sheet slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySheetRecord {
    pub date: NaiveDate,                 // ⇔ "date" ("YYYY-MM-DD", local day)
    pub priorities: Vec<String>,         // ⇔ non-empty, trimmed
    pub schedule: Vec<ScheduleEntry>,    // ⇔ non-empty activities only
    #[serde(default)]
    pub notes: String,                   // ⇔ trimmed, "" when absent
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Local>,       // ⇔ write time, ISO-8601
}

impl DaySheetRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// A record is applicable only on the day it was written for.
    pub fn is_for(&self, day: NaiveDate) -> bool {
        self.date == day
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browser_shaped_json() {
        let raw = r#"{
            "date": "2026-10-16",
            "priorities": ["Call lab", "Confirm rooms"],
            "schedule": [{"time": "8:00 AM", "activity": "Huddle"}],
            "notes": "Dr. K out at 3",
            "savedAt": "2026-10-16T14:03:11.512Z"
        }"#;

        let rec = DaySheetRecord::from_json(raw).unwrap();
        assert_eq!(rec.date_str(), "2026-10-16");
        assert_eq!(rec.priorities.len(), 2);
        assert_eq!(rec.schedule[0].time, "8:00 AM");
        assert_eq!(rec.notes, "Dr. K out at 3");
    }

    #[test]
    fn notes_default_to_empty() {
        let raw = r#"{"date":"2026-10-16","priorities":[],"schedule":[],"savedAt":"2026-10-16T08:00:00+02:00"}"#;
        let rec = DaySheetRecord::from_json(raw).unwrap();
        assert_eq!(rec.notes, "");
    }

    #[test]
    fn serialized_keys_match_storage_format() {
        let rec = DaySheetRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            priorities: vec!["a".into()],
            schedule: vec![],
            notes: String::new(),
            saved_at: Local::now(),
        };
        let json = rec.to_json().unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"date\":\"2026-10-16\""));
    }
}
