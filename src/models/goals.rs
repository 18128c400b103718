/// The two scalar goals kept next to the day sheet.
/// Values are stored verbatim (trimmed), without a JSON envelope or date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goals {
    pub revenue: Option<String>,
    pub patients: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Revenue,
    Patients,
}

impl GoalKind {
    /// Storage key of the goal.
    pub fn key(&self) -> &'static str {
        match self {
            GoalKind::Revenue => "revenueGoal",
            GoalKind::Patients => "patientGoal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Revenue => "Revenue goal",
            GoalKind::Patients => "Patient goal",
        }
    }

    pub fn all() -> [GoalKind; 2] {
        [GoalKind::Revenue, GoalKind::Patients]
    }
}

impl Goals {
    pub fn get(&self, kind: GoalKind) -> Option<&str> {
        match kind {
            GoalKind::Revenue => self.revenue.as_deref(),
            GoalKind::Patients => self.patients.as_deref(),
        }
    }

    pub fn set(&mut self, kind: GoalKind, value: Option<String>) {
        match kind {
            GoalKind::Revenue => self.revenue = value,
            GoalKind::Patients => self.patients = value,
        }
    }
}
