//! Safety gate — risk classification and safety-documentation completion.
//!
//! Materials drive a three-tier risk classification; the five required
//! safety components are then checked against that tier. Components
//! whose absence matters at the derived risk level become issues and
//! block export; the rest are recorded as advisory gaps for the repair
//! path.

mod suggestions;

use aho_corasick::AhoCorasick;
use plangate_core::config::SafetyConfig;
use plangate_core::errors::ConfigError;
use plangate_core::model::{Activity, SafetyComponent, SafetyLevel};
use plangate_core::report::{GateId, GateReport, Issue, IssueKind, Recommendation, Severity, Strategy};
use serde::{Deserialize, Serialize};

/// Hazardous-material scan outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardCheck {
    pub hazardous_materials: Vec<String>,
    pub level: HazardLevel,
    pub total_materials: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Safe,
    Moderate,
    High,
}

impl HazardCheck {
    pub fn has_hazards(&self) -> bool {
        !self.hazardous_materials.is_empty()
    }
}

/// Safety-detection outcome for one activity.
///
/// Only the level-dependent severity rules produce issues and drive
/// `block_export`; other absent components are listed in
/// `missing_components` without blocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub level: SafetyLevel,
    pub missing_components: Vec<SafetyComponent>,
    pub report: GateReport,
}

/// Classifies activity risk and repairs incomplete safety documentation.
pub struct SafetyGate {
    config: SafetyConfig,
    high_risk: AhoCorasick,
    medium_risk: AhoCorasick,
    hazardous: AhoCorasick,
}

impl SafetyGate {
    pub fn new(config: SafetyConfig) -> Result<Self, ConfigError> {
        let high_risk = Self::matcher(&config.effective_high_risk_keywords(), "high_risk_keywords")?;
        let medium_risk =
            Self::matcher(&config.effective_medium_risk_keywords(), "medium_risk_keywords")?;
        let hazardous =
            Self::matcher(&config.effective_hazardous_materials(), "hazardous_materials")?;
        Ok(Self {
            config,
            high_risk,
            medium_risk,
            hazardous,
        })
    }

    fn matcher(keywords: &[String], field: &str) -> Result<AhoCorasick, ConfigError> {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| ConfigError::ValidationFailed {
                field: format!("safety.{field}"),
                message: e.to_string(),
            })
    }

    /// Classify risk from the material list via keyword substring match.
    pub fn classify(&self, materials: &[String]) -> SafetyLevel {
        let text = materials.join(" ");
        if self.high_risk.is_match(&text) {
            SafetyLevel::High
        } else if self.medium_risk.is_match(&text) {
            SafetyLevel::Medium
        } else {
            SafetyLevel::Low
        }
    }

    /// Scan materials against the hazardous-materials table.
    ///
    /// No match is safe; up to the configured limit (default 2) of
    /// matched materials is moderate; more is high.
    pub fn check_hazardous_materials(&self, materials: &[String]) -> HazardCheck {
        let hazardous_materials: Vec<String> = materials
            .iter()
            .filter(|m| self.hazardous.is_match(m.as_str()))
            .cloned()
            .collect();

        let level = if hazardous_materials.is_empty() {
            HazardLevel::Safe
        } else if hazardous_materials.len() <= self.config.effective_moderate_hazard_limit() {
            HazardLevel::Moderate
        } else {
            HazardLevel::High
        };

        HazardCheck {
            hazardous_materials,
            level,
            total_materials: materials.len(),
        }
    }

    /// Check the five required safety components against the derived
    /// risk level. Components the severity rules care about become
    /// issues and block export; the rest are advisory.
    pub fn detect(&self, activity: &Activity) -> SafetyReport {
        let mut report = GateReport::clean(GateId::Safety);
        let level = self.classify(&activity.materials);
        let missing = activity.missing_components();

        if level == SafetyLevel::High && missing.contains(&SafetyComponent::EmergencyProcedures) {
            report.issues.push(Issue::new(
                IssueKind::MissingSafetyComponent {
                    component: SafetyComponent::EmergencyProcedures,
                },
                Severity::Critical,
                "High-risk materials require emergency procedures",
            ));
        }

        if level >= SafetyLevel::Medium && missing.contains(&SafetyComponent::PpeRequired) {
            let tier = match level {
                SafetyLevel::High => "High",
                _ => "Medium",
            };
            report.issues.push(Issue::new(
                IssueKind::MissingSafetyComponent {
                    component: SafetyComponent::PpeRequired,
                },
                Severity::High,
                format!("{tier}-risk activity requires PPE specification"),
            ));
        }

        if level != SafetyLevel::Low && missing.contains(&SafetyComponent::SupervisionRequired) {
            report.issues.push(Issue::new(
                IssueKind::MissingSafetyComponent {
                    component: SafetyComponent::SupervisionRequired,
                },
                Severity::Medium,
                "Activity requires supervision specification",
            ));
        }

        report.block_export = !report.issues.is_empty();
        for issue in &report.issues {
            if let IssueKind::MissingSafetyComponent { component } = issue.kind {
                report.recommendations.push(self.recommend(component, level));
            }
        }

        SafetyReport {
            level,
            missing_components: missing.into_vec(),
            report,
        }
    }

    fn recommend(&self, component: SafetyComponent, level: SafetyLevel) -> Recommendation {
        let (description, priority, steps) = match component {
            SafetyComponent::PpeRequired => (
                "Add required personal protective equipment",
                if level >= SafetyLevel::Medium {
                    Severity::High
                } else {
                    Severity::Medium
                },
                suggestions::ppe(level),
            ),
            SafetyComponent::Hazards => (
                "Identify and list potential hazards",
                Severity::High,
                suggestions::hazards(level),
            ),
            SafetyComponent::EmergencyProcedures => (
                "Specify emergency procedures",
                if level == SafetyLevel::High {
                    Severity::Critical
                } else {
                    Severity::High
                },
                suggestions::emergency_procedures(level),
            ),
            SafetyComponent::SupervisionRequired => (
                "Specify supervision requirements",
                Severity::Medium,
                suggestions::supervision(level),
            ),
            SafetyComponent::CleanupProcedures => (
                "Specify cleanup and disposal procedures",
                Severity::Medium,
                suggestions::cleanup(level),
            ),
        };

        Recommendation::new(
            Strategy::CompleteSafetyComponent { component },
            description,
            priority,
        )
        .with_implementation(steps)
    }

    /// Return a copy with every missing safety component filled from
    /// the level-keyed tables. Supervision defaults to required for
    /// anything above low risk.
    pub fn auto_complete(&self, activity: &Activity) -> Activity {
        let level = self.classify(&activity.materials);
        let mut completed = activity.clone();

        if completed.ppe_required.is_empty() {
            completed.ppe_required = suggestions::ppe(level);
        }
        if completed.hazards.is_empty() {
            completed.hazards = suggestions::hazards(level);
        }
        if completed.emergency_procedures.is_empty() {
            completed.emergency_procedures = suggestions::emergency_procedures(level);
        }
        if completed.supervision_required.is_none() {
            completed.supervision_required = Some(level != SafetyLevel::Low);
        }
        if completed.cleanup_procedures.is_empty() {
            completed.cleanup_procedures = suggestions::cleanup(level);
        }

        completed
    }

    /// Re-run detection; true when nothing blocks export.
    pub fn validate_completion(&self, activity: &Activity) -> bool {
        !self.detect(activity).report.block_export
    }

    /// Structural check on the documented protocols, independent of
    /// risk level. Returns one error string per empty required list.
    pub fn validate_protocols(&self, activity: &Activity) -> Vec<String> {
        let mut errors = Vec::new();
        if activity.ppe_required.is_empty() {
            errors.push("PPE required must be a non-empty list".to_string());
        }
        if activity.hazards.is_empty() {
            errors.push("Hazards must be a non-empty list".to_string());
        }
        if activity.emergency_procedures.is_empty() {
            errors.push("Emergency procedures must be a non-empty list".to_string());
        }
        errors
    }
}
