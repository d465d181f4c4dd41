//! Hands-on activities and their safety documentation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Derived activity risk level. Never stored on input artifacts —
/// the safety gate classifies it from the material list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Low,
    Medium,
    High,
}

/// The five safety components an activity must document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyComponent {
    PpeRequired,
    Hazards,
    EmergencyProcedures,
    SupervisionRequired,
    CleanupProcedures,
}

impl SafetyComponent {
    /// All components, in the order they are checked.
    pub const ALL: [SafetyComponent; 5] = [
        Self::PpeRequired,
        Self::Hazards,
        Self::EmergencyProcedures,
        Self::SupervisionRequired,
        Self::CleanupProcedures,
    ];
}

impl std::fmt::Display for SafetyComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PpeRequired => "ppe_required",
            Self::Hazards => "hazards",
            Self::EmergencyProcedures => "emergency_procedures",
            Self::SupervisionRequired => "supervision_required",
            Self::CleanupProcedures => "cleanup_procedures",
        };
        f.write_str(s)
    }
}

/// A hands-on activity with its safety documentation.
///
/// The safety gate reads `materials` and may populate the other fields;
/// `auto_complete` returns a filled copy rather than mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub materials: Vec<String>,
    pub ppe_required: Vec<String>,
    pub hazards: Vec<String>,
    pub emergency_procedures: Vec<String>,
    /// `None` means unspecified, which is itself a deficiency.
    pub supervision_required: Option<bool>,
    pub cleanup_procedures: Vec<String>,
}

impl Activity {
    /// Returns true when the given component is missing or empty.
    pub fn component_missing(&self, component: SafetyComponent) -> bool {
        match component {
            SafetyComponent::PpeRequired => self.ppe_required.is_empty(),
            SafetyComponent::Hazards => self.hazards.is_empty(),
            SafetyComponent::EmergencyProcedures => self.emergency_procedures.is_empty(),
            SafetyComponent::SupervisionRequired => self.supervision_required.is_none(),
            SafetyComponent::CleanupProcedures => self.cleanup_procedures.is_empty(),
        }
    }

    /// Components that are missing or empty, in check order.
    pub fn missing_components(&self) -> SmallVec<[SafetyComponent; 5]> {
        SafetyComponent::ALL
            .into_iter()
            .filter(|c| self.component_missing(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_activity_is_missing_all_components() {
        let activity = Activity::default();
        assert_eq!(activity.missing_components().len(), 5);
    }

    #[test]
    fn supervision_false_counts_as_specified() {
        let activity = Activity {
            supervision_required: Some(false),
            ..Default::default()
        };
        assert!(!activity.component_missing(SafetyComponent::SupervisionRequired));
    }
}
