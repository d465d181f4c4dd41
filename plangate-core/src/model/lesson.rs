//! Lesson brief and draft artifact.

use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::quiz::{QuizItem, Rubric};
use super::section::Section;
use super::udl::UdlReport;

/// Input contract for the external content-generation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LessonBrief {
    pub topic: String,
    pub grade_band: String,
    pub period_length_minutes: i32,
    pub days: u32,
    pub class_size: u32,
    pub equipment: Vec<String>,
    pub objectives: Vec<String>,
}

impl LessonBrief {
    /// Total instructional minutes across all days.
    pub fn total_minutes(&self) -> i32 {
        self.period_length_minutes * self.days as i32
    }
}

/// Draft lesson artifact produced by content generation and inspected
/// by the gates. The gates read disjoint sub-objects: sections (time),
/// activity (safety), udl_report (UDL), quiz_items/rubrics (item bank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LessonDraft {
    pub topic: String,
    pub grade_band: String,
    /// Total time budget in minutes for the section sequence.
    pub total_minutes: i32,
    pub sections: Vec<Section>,
    pub activity: Activity,
    pub quiz_items: Vec<QuizItem>,
    pub rubrics: Vec<Rubric>,
    pub udl_report: UdlReport,
}

impl LessonDraft {
    /// Sum of section durations currently allocated.
    pub fn allocated_minutes(&self) -> i32 {
        self.sections.iter().map(|s| s.duration_minutes).sum()
    }
}
