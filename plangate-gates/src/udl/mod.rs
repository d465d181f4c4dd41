//! UDL gate — accessibility coverage analysis and enrichment.
//!
//! The upstream checker reports coverage as free text ("85% UDL
//! compliant"), so the gate starts by degrading-tolerant numeric
//! extraction: parse failures become 0.0 or `None`, never errors.

mod enrichment;

use plangate_core::config::UdlConfig;
use plangate_core::errors::ConfigError;
use plangate_core::model::{UdlFlag, UdlPrinciple, UdlReport};
use plangate_core::report::{GateId, GateReport, Issue, IssueKind, Recommendation, Severity, Strategy};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Average-sentence-length limits per grade. Unknown grades fall back
/// to the strictest (grade 6) limit.
const GRADE_SENTENCE_LIMITS: &[(&str, f64)] = &[("6", 15.0), ("7", 17.0), ("8", 20.0)];

/// Readability check outcome for a block of lesson text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingCheck {
    pub is_appropriate: bool,
    pub estimated_level: String,
    pub avg_sentence_length: f64,
    pub recommendations: Vec<String>,
}

/// Vocabulary complexity scan for a block of lesson text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyCheck {
    pub complex_words: Vec<String>,
    pub complexity_score: f64,
    pub total_words: usize,
    pub complex_word_count: usize,
}

/// Analyzes UDL coverage reports and applies structured enrichment.
pub struct UdlGate {
    config: UdlConfig,
    digits: Regex,
}

impl UdlGate {
    pub fn new(config: UdlConfig) -> Result<Self, ConfigError> {
        let digits = Regex::new(r"\d+").map_err(|e| ConfigError::ValidationFailed {
            field: "udl".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { config, digits })
    }

    /// Parse a coverage score out of free text. Text before a `%` sign
    /// wins; otherwise the first digit run; otherwise 0.0.
    pub fn extract_score(&self, text: &str) -> f64 {
        if let Some(idx) = text.find('%') {
            return text[..idx].trim().parse().unwrap_or(0.0);
        }
        self.digits
            .find(text)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0)
    }

    /// First digit run in a grade string like "Grade 6-7".
    pub fn extract_grade(&self, text: &str) -> Option<u32> {
        self.digits.find(text).and_then(|m| m.as_str().parse().ok())
    }

    /// Analyze a UDL report for coverage, principle, reading-level, and
    /// vocabulary deficiencies.
    pub fn detect(&self, udl: &UdlReport) -> GateReport {
        let mut report = GateReport::clean(GateId::Udl);
        let min_score = self.config.effective_min_coverage_score();
        let low_threshold = self.config.effective_low_coverage_threshold();

        let score = self.extract_score(&udl.overall_score);
        if score < min_score {
            let severity = if score < low_threshold {
                Severity::High
            } else {
                Severity::Medium
            };
            report.issues.push(Issue::new(
                IssueKind::Coverage { score },
                severity,
                format!("Overall UDL coverage ({score}%) below minimum threshold ({min_score}%)"),
            ));
            report.recommendations.push(
                Recommendation::new(
                    Strategy::ApplySuggestedRewrites,
                    "Apply suggested UDL rewrites to improve accessibility",
                    Severity::High,
                )
                .with_implementation(vec![
                    "Use UDL checker suggestions to modify content".to_string()
                ]),
            );
        }

        for principle in UdlPrinciple::ALL {
            if !udl.flags.iter().any(|f| principle.matches(&f.flag_type)) {
                report.issues.push(Issue::new(
                    IssueKind::MissingPrinciple { principle },
                    Severity::Medium,
                    format!("Missing UDL principle: {principle}"),
                ));
                report.recommendations.push(
                    Recommendation::new(
                        Strategy::AddPrincipleSupport { principle },
                        format!("Add {principle} support to lesson materials"),
                        Severity::Medium,
                    )
                    .with_implementation(Self::principle_implementation(principle)),
                );
            }
        }

        for flag in udl.flags.iter().filter(|f| f.is_high_severity()) {
            let description = format!("Critical UDL issue: {}", flag.description);
            report.issues.push(Issue::new(
                IssueKind::CriticalFlag {
                    flag_type: flag.flag_type.clone(),
                },
                Severity::Critical,
                description.clone(),
            ));
            report.recommendations.push(
                Recommendation::new(
                    Strategy::AddressCriticalIssue,
                    format!("Address critical UDL issue: {description}"),
                    Severity::Critical,
                )
                .with_implementation(vec![
                    "Immediate attention required - review and revise content".to_string(),
                ]),
            );
        }

        let current_level = &udl.reading_level.current_level;
        if current_level.to_lowercase().contains("grade") {
            if let Some(grade) = self.extract_grade(current_level) {
                if grade > self.config.effective_max_grade_level() {
                    report.issues.push(Issue::new(
                        IssueKind::ReadingLevel {
                            current_level: current_level.clone(),
                        },
                        Severity::Medium,
                        format!(
                            "Reading level ({current_level}) may be too complex for target grade"
                        ),
                    ));
                    report.recommendations.push(
                        Recommendation::new(
                            Strategy::SimplifyLanguage,
                            "Simplify language and sentence structure",
                            Severity::Medium,
                        )
                        .with_implementation(vec![
                            "Break complex sentences into shorter ones".to_string(),
                            "Replace complex vocabulary with simpler alternatives".to_string(),
                            "Add definitions for technical terms".to_string(),
                        ]),
                    );
                }
            }
        }

        if udl.vocabulary.len() > self.config.effective_max_vocabulary_entries() {
            report.issues.push(Issue::new(
                IssueKind::Vocabulary {
                    complex_word_count: udl.vocabulary.len(),
                },
                Severity::Medium,
                format!(
                    "High vocabulary complexity ({} complex words identified)",
                    udl.vocabulary.len()
                ),
            ));
            report.recommendations.push(
                Recommendation::new(
                    Strategy::AddVocabularySupport,
                    "Add vocabulary support and definitions",
                    Severity::Medium,
                )
                .with_implementation(vec![
                    "Create glossary of key terms".to_string(),
                    "Add inline definitions".to_string(),
                    "Provide vocabulary preview activities".to_string(),
                ]),
            );
        }

        report
    }

    fn principle_implementation(principle: UdlPrinciple) -> Vec<String> {
        let steps: &[&str] = match principle {
            UdlPrinciple::Representation => &[
                "Add visual aids (diagrams, charts, images)",
                "Provide audio alternatives for text",
                "Use multiple formats for presenting information",
                "Add captions and transcripts for multimedia",
            ],
            UdlPrinciple::Engagement => &[
                "Offer choice in learning activities",
                "Connect content to student interests",
                "Provide multiple engagement options",
                "Include collaborative and individual work options",
            ],
            UdlPrinciple::Expression => &[
                "Offer multiple ways to demonstrate learning",
                "Provide templates and scaffolds",
                "Allow choice in assessment formats",
                "Include both written and oral response options",
            ],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }

    /// Shape validation on upstream flags: required fields present and
    /// severity/principle within their domains. One error string each.
    pub fn validate_flags(&self, flags: &[UdlFlag]) -> Vec<String> {
        const VALID_SEVERITIES: &[&str] = &["low", "medium", "high"];
        let mut errors = Vec::new();

        for flag in flags {
            for (field, value) in [
                ("type", &flag.flag_type),
                ("severity", &flag.severity),
                ("description", &flag.description),
                ("suggestion", &flag.suggestion),
                ("principle", &flag.principle),
            ] {
                if value.is_empty() {
                    errors.push(format!("Missing required field: {field}"));
                }
            }

            if !flag.severity.is_empty()
                && !VALID_SEVERITIES.contains(&flag.severity.to_lowercase().as_str())
            {
                errors.push(format!(
                    "Invalid severity: {}. Must be one of low, medium, high",
                    flag.severity
                ));
            }

            if !flag.principle.is_empty()
                && !UdlPrinciple::ALL.iter().any(|p| p.matches(&flag.principle))
            {
                errors.push(format!(
                    "Invalid principle: {}. Must be one of representation, engagement, expression",
                    flag.principle
                ));
            }
        }

        errors
    }

    /// Average-sentence-length readability check against a per-grade
    /// limit.
    pub fn check_reading_level(&self, text: &str, grade_level: &str) -> ReadingCheck {
        let words = text.split_whitespace().count();
        let sentences = text.split('.').count();
        let avg_sentence_length = words as f64 / sentences as f64;

        let limit = GRADE_SENTENCE_LIMITS
            .iter()
            .find(|(g, _)| *g == grade_level)
            .map(|(_, l)| *l)
            .unwrap_or(GRADE_SENTENCE_LIMITS[0].1);

        let is_appropriate = avg_sentence_length <= limit;
        let recommendations = if is_appropriate {
            Vec::new()
        } else {
            vec![
                "Simplify sentence structure and vocabulary".to_string(),
                "Break complex sentences into shorter ones".to_string(),
            ]
        };

        ReadingCheck {
            is_appropriate,
            estimated_level: if is_appropriate { "middle" } else { "high" }.to_string(),
            avg_sentence_length,
            recommendations,
        }
    }

    /// Ratio of long words (beyond the configured length) to all words.
    pub fn check_vocabulary_complexity(&self, text: &str) -> VocabularyCheck {
        let max_len = self.config.effective_complex_word_length();
        let words: Vec<String> = text.to_lowercase().split_whitespace().map(String::from).collect();
        let complex_words: Vec<String> = words
            .iter()
            .filter(|w| w.chars().count() > max_len)
            .cloned()
            .collect();

        let complexity_score = if words.is_empty() {
            0.0
        } else {
            complex_words.len() as f64 / words.len() as f64
        };

        VocabularyCheck {
            complexity_score,
            total_words: words.len(),
            complex_word_count: complex_words.len(),
            complex_words,
        }
    }

    /// True when the coverage score strictly improved or any support
    /// bundle was newly added.
    pub fn validate_improvement(&self, before: &UdlReport, after: &UdlReport) -> bool {
        let before_score = self.extract_score(&before.overall_score);
        let after_score = self.extract_score(&after.overall_score);
        if after_score > before_score {
            return true;
        }
        after.support.gained_over(&before.support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> UdlGate {
        UdlGate::new(UdlConfig::default()).unwrap()
    }

    #[test]
    fn score_extraction_prefers_percent_prefix() {
        let gate = gate();
        assert_eq!(gate.extract_score("85% UDL compliant"), 85.0);
        assert_eq!(gate.extract_score("score 42 of 100"), 42.0);
        assert_eq!(gate.extract_score("no numbers here"), 0.0);
        assert_eq!(gate.extract_score("about 85 % compliant"), 0.0);
    }

    #[test]
    fn grade_extraction_takes_first_run() {
        let gate = gate();
        assert_eq!(gate.extract_grade("Grade 6-7"), Some(6));
        assert_eq!(gate.extract_grade("Kindergarten"), None);
    }

    #[test]
    fn low_coverage_is_high_severity() {
        let gate = gate();
        let udl = UdlReport {
            overall_score: "45% UDL compliant".to_string(),
            ..Default::default()
        };
        let report = gate.detect(&udl);
        let coverage = report
            .issues
            .iter()
            .find(|i| matches!(i.kind, IssueKind::Coverage { .. }))
            .unwrap();
        assert_eq!(coverage.severity, Severity::High);
    }

    #[test]
    fn missing_principles_each_get_an_issue() {
        let gate = gate();
        let udl = UdlReport {
            overall_score: "90%".to_string(),
            flags: vec![UdlFlag {
                flag_type: "REPRESENTATION".to_string(),
                severity: "medium".to_string(),
                description: "d".to_string(),
                suggestion: "s".to_string(),
                principle: "representation".to_string(),
            }],
            ..Default::default()
        };
        let report = gate.detect(&udl);
        let missing: Vec<_> = report
            .issues
            .iter()
            .filter(|i| matches!(i.kind, IssueKind::MissingPrinciple { .. }))
            .collect();
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn high_severity_flag_escalates_to_critical() {
        let gate = gate();
        let udl = UdlReport {
            overall_score: "90%".to_string(),
            flags: vec![UdlFlag {
                flag_type: "REPRESENTATION".to_string(),
                severity: "HIGH".to_string(),
                description: "No visual alternatives".to_string(),
                suggestion: "Add diagrams".to_string(),
                principle: "representation".to_string(),
            }],
            ..Default::default()
        };
        let report = gate.detect(&udl);
        assert_eq!(report.max_severity(), Some(Severity::Critical));
    }

    #[test]
    fn flag_validation_reports_domain_errors() {
        let gate = gate();
        let flags = vec![UdlFlag {
            flag_type: "REPRESENTATION".to_string(),
            severity: "urgent".to_string(),
            description: "d".to_string(),
            suggestion: "s".to_string(),
            principle: "visibility".to_string(),
        }];
        let errors = gate.validate_flags(&flags);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Invalid severity: urgent"));
    }

    #[test]
    fn reading_check_flags_long_sentences() {
        let gate = gate();
        let long_text =
            "This sentence contains a very large number of words strung together without any \
             punctuation at all which makes it unreadable for younger students everywhere";
        let check = gate.check_reading_level(long_text, "6");
        assert!(!check.is_appropriate);
        assert_eq!(check.estimated_level, "high");
        assert_eq!(check.recommendations.len(), 2);

        let short = gate.check_reading_level("Solar power is clean. It uses sunlight.", "6");
        assert!(short.is_appropriate);
    }

    #[test]
    fn vocabulary_complexity_counts_long_words() {
        let gate = gate();
        let check = gate.check_vocabulary_complexity("photovoltaic cells convert sunlight");
        assert_eq!(check.total_words, 4);
        assert_eq!(check.complex_word_count, 1);
        assert_eq!(check.complex_words, vec!["photovoltaic".to_string()]);
    }
}
