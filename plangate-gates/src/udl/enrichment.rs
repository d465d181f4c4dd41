//! Additive UDL enrichment: fixed structured-support bundles.
//!
//! Each operation returns an enriched copy of the report. Bundles are
//! fixed values, so re-applying any operation is idempotent, and no
//! operation ever removes support that is already present.

use plangate_core::model::{UdlPrinciple, UdlReport};
use serde_json::json;

use super::UdlGate;

impl UdlGate {
    /// Turn upstream checker suggestions into structured support:
    /// vocabulary glossary, reading support, and per-principle bundles
    /// for every flag that carries a suggestion.
    pub fn apply_suggested_rewrites(&self, udl: &UdlReport) -> UdlReport {
        let mut improved = udl.clone();

        if !udl.vocabulary.is_empty() {
            let glossary: Vec<_> = udl
                .vocabulary
                .iter()
                .map(|entry| {
                    json!({
                        "term": entry.complex_word,
                        "definition": entry.simpler_alternative,
                    })
                })
                .collect();
            improved.support.vocabulary_support = Some(json!({
                "glossary": glossary,
                "inline_definitions": true,
                "preview_activity": "Vocabulary matching game",
            }));
        }

        if !udl.reading_level.recommendations.is_empty() {
            improved.support.reading_support = Some(json!({
                "simplified_text": true,
                "sentence_frames": true,
                "visual_aids": true,
                "audio_support": true,
            }));
        }

        for flag in udl.flags.iter().filter(|f| !f.suggestion.is_empty()) {
            if UdlPrinciple::Representation.matches(&flag.flag_type) {
                improved = self.add_visual_support(&improved);
            } else if UdlPrinciple::Engagement.matches(&flag.flag_type) {
                improved = self.add_engagement_options(&improved);
            } else if UdlPrinciple::Expression.matches(&flag.flag_type) {
                improved = self.add_expression_choices(&improved);
            }
        }

        improved
    }

    /// Set the representation-support bundle (multiple means of
    /// representation).
    pub fn add_visual_support(&self, udl: &UdlReport) -> UdlReport {
        let mut improved = udl.clone();
        improved.support.representation_support = Some(json!({
            "visual_aids": true,
            "audio_alternatives": true,
            "multiple_formats": true,
        }));
        improved
    }

    /// Set the engagement-support bundle.
    pub fn add_engagement_options(&self, udl: &UdlReport) -> UdlReport {
        let mut improved = udl.clone();
        improved.support.engagement_support = Some(json!({
            "individual_work": true,
            "partner_work": true,
            "group_work": true,
            "choice_boards": true,
            "interest_based_activities": true,
        }));
        improved
    }

    /// Set the expression-support bundle.
    pub fn add_expression_choices(&self, udl: &UdlReport) -> UdlReport {
        let mut improved = udl.clone();
        improved.support.expression_support = Some(json!({
            "written_response": true,
            "oral_presentation": true,
            "visual_diagram": true,
            "digital_creation": true,
            "performance": true,
        }));
        improved
    }

    /// Set the cross-cutting scaffold bundle.
    pub fn create_udl_scaffolds(&self, udl: &UdlReport) -> UdlReport {
        let mut improved = udl.clone();
        improved.support.udl_scaffolds = Some(json!({
            "vocabulary_support": {
                "glossary": true,
                "word_wall": true,
                "context_clues": true,
            },
            "reading_support": {
                "sentence_frames": true,
                "graphic_organizers": true,
                "audio_versions": true,
            },
            "writing_support": {
                "templates": true,
                "sentence_starters": true,
                "peer_review": true,
            },
            "math_support": {
                "manipulatives": true,
                "visual_models": true,
                "step_by_step": true,
            },
        }));
        improved
    }
}
