//! Canned safety-completion text, keyed by risk level.
//!
//! These tables are the deterministic fill used by `auto_complete` and
//! the implementation checklists attached to safety recommendations.

use plangate_core::model::SafetyLevel;

const PPE_LOW: &[&str] = &["No special PPE required"];
const PPE_MEDIUM: &[&str] = &[
    "Safety goggles (if using scissors or small tools)",
    "Gloves (optional for handling materials)",
    "Closed-toe shoes recommended",
];
const PPE_HIGH: &[&str] = &[
    "Safety goggles (required)",
    "Heat-resistant gloves (if using heat sources)",
    "Chemical-resistant gloves (if using chemicals)",
    "Lab coat or apron (recommended)",
    "Closed-toe shoes (required)",
];

const HAZARDS_LOW: &[&str] = &["Minimal hazards - standard classroom safety applies"];
const HAZARDS_MEDIUM: &[&str] = &[
    "Sharp objects (scissors, pins)",
    "Small electrical components",
    "Potential for minor cuts or scrapes",
    "Eye protection needed for cutting activities",
];
const HAZARDS_HIGH: &[&str] = &[
    "Heat sources and potential burns",
    "Chemical exposure risks",
    "Sharp objects and cutting hazards",
    "Electrical shock potential",
    "Eye and skin protection required",
];

const EMERGENCY_LOW: &[&str] = &["Standard first aid procedures"];
const EMERGENCY_MEDIUM: &[&str] = &[
    "First aid kit location",
    "Eye wash station location",
    "Emergency contact numbers",
    "Procedure for minor cuts or injuries",
];
const EMERGENCY_HIGH: &[&str] = &[
    "Emergency shutdown procedures",
    "Fire extinguisher location",
    "Eye wash station and safety shower locations",
    "Emergency contact numbers (911, poison control)",
    "Evacuation procedures",
    "Chemical spill response procedures",
];

const SUPERVISION_LOW: &[&str] = &["Standard classroom supervision"];
const SUPERVISION_MEDIUM: &[&str] = &[
    "Close supervision during cutting activities",
    "Monitor use of small electrical components",
    "Supervision ratio: 1:15 recommended",
];
const SUPERVISION_HIGH: &[&str] = &[
    "Direct supervision required at all times",
    "Qualified instructor must be present",
    "Supervision ratio: 1:10 maximum",
    "Additional safety officer recommended for large groups",
];

const CLEANUP_LOW: &[&str] = &[
    "Return materials to designated areas",
    "Wipe down work surfaces",
    "Wash hands thoroughly",
];
const CLEANUP_MEDIUM: &[&str] = &[
    "Dispose of sharp objects properly",
    "Return electrical components to storage",
    "Clean work surfaces with appropriate cleaners",
    "Wash hands thoroughly",
    "Check for any remaining hazards",
];
const CLEANUP_HIGH: &[&str] = &[
    "Follow chemical disposal procedures",
    "Cool heat sources completely",
    "Dispose of sharp objects in designated containers",
    "Decontaminate work surfaces",
    "Wash hands and exposed skin thoroughly",
    "Check for any remaining hazards",
    "Document any incidents or near-misses",
];

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

pub fn ppe(level: SafetyLevel) -> Vec<String> {
    owned(match level {
        SafetyLevel::Low => PPE_LOW,
        SafetyLevel::Medium => PPE_MEDIUM,
        SafetyLevel::High => PPE_HIGH,
    })
}

pub fn hazards(level: SafetyLevel) -> Vec<String> {
    owned(match level {
        SafetyLevel::Low => HAZARDS_LOW,
        SafetyLevel::Medium => HAZARDS_MEDIUM,
        SafetyLevel::High => HAZARDS_HIGH,
    })
}

pub fn emergency_procedures(level: SafetyLevel) -> Vec<String> {
    owned(match level {
        SafetyLevel::Low => EMERGENCY_LOW,
        SafetyLevel::Medium => EMERGENCY_MEDIUM,
        SafetyLevel::High => EMERGENCY_HIGH,
    })
}

pub fn supervision(level: SafetyLevel) -> Vec<String> {
    owned(match level {
        SafetyLevel::Low => SUPERVISION_LOW,
        SafetyLevel::Medium => SUPERVISION_MEDIUM,
        SafetyLevel::High => SUPERVISION_HIGH,
    })
}

pub fn cleanup(level: SafetyLevel) -> Vec<String> {
    owned(match level {
        SafetyLevel::Low => CLEANUP_LOW,
        SafetyLevel::Medium => CLEANUP_MEDIUM,
        SafetyLevel::High => CLEANUP_HIGH,
    })
}
