//! Lesson artifact data model.
//!
//! All entities are value objects passed through the pipeline by value;
//! no gate owns cross-gate state. Repair operations return modified
//! copies rather than mutating in place.

pub mod activity;
pub mod item_bank;
pub mod lesson;
pub mod quiz;
pub mod section;
pub mod udl;

pub use activity::{Activity, SafetyComponent, SafetyLevel};
pub use item_bank::{CoverageScore, ItemBank, QualityMetric};
pub use lesson::{LessonBrief, LessonDraft};
pub use quiz::{Answer, Difficulty, ItemType, QuizItem, Rubric, RubricCriterion};
pub use section::{Priority, Section};
pub use udl::{ReadingLevel, UdlFlag, UdlPrinciple, UdlReport, UdlSupport, VocabularyEntry};
