//! Deterministic time-budget repairs: rebalance, split, combine, and
//! transition trimming.

use plangate_core::config::time_config::TRANSITION_REPLACEMENT;
use plangate_core::model::{Priority, Section};
use serde::{Deserialize, Serialize};

use super::TimeAllocator;

/// One day of a split lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub sections: Vec<Section>,
    pub total_time: i32,
    pub focus: String,
}

/// Two-day restructuring of an overlong lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitPlan {
    pub day1: DayPlan,
    pub day2: DayPlan,
    pub transition_notes: String,
}

impl TimeAllocator {
    /// Reallocate durations to fit the budget, keeping a 10% buffer.
    ///
    /// Sections are reordered highest priority first. Every section
    /// records its pre-rebalance duration and the signed adjustment.
    pub fn auto_rebalance(&self, sections: &[Section], total_time: i32) -> Vec<Section> {
        if sections.is_empty() {
            return Vec::new();
        }

        let buffer = self.config.effective_rebalance_buffer();
        let mut ordered: Vec<Section> = sections.to_vec();
        ordered.sort_by_key(|s| std::cmp::Reverse(s.priority.weight()));

        let total_weight: i64 = ordered.iter().map(|s| s.priority.weight()).sum();
        let mut remaining = total_time;
        let last = ordered.len() - 1;

        for (i, section) in ordered.iter_mut().enumerate() {
            let duration = if i == last {
                remaining
            } else {
                let share = section.priority.weight() as f64 / total_weight as f64
                    * total_time as f64
                    * buffer;
                let d = (share as i32).max(1);
                remaining -= d;
                d
            };
            section.original_duration = Some(section.duration_minutes);
            section.adjustment = Some(duration - section.duration_minutes);
            section.duration_minutes = duration;
        }

        ordered
    }

    /// Propose a midpoint split into two days.
    pub fn suggest_split(&self, sections: &[Section]) -> SplitPlan {
        let midpoint = sections.len() / 2;
        let (day1_sections, day2_sections) = sections.split_at(midpoint);

        let sum = |s: &[Section]| s.iter().map(|x| x.duration_minutes).sum();

        SplitPlan {
            day1: DayPlan {
                sections: day1_sections.to_vec(),
                total_time: sum(day1_sections),
                focus: "Introduction and core concepts".to_string(),
            },
            day2: DayPlan {
                sections: day2_sections.to_vec(),
                total_time: sum(day2_sections),
                focus: "Application and assessment".to_string(),
            },
            transition_notes: "Day 2 should begin with a brief review of day 1 concepts"
                .to_string(),
        }
    }

    /// Greedily merge adjacent combinable sections, left to right.
    ///
    /// Lessons with fewer than the configured minimum section count are
    /// returned unchanged.
    pub fn combine_sections(&self, sections: &[Section]) -> Vec<Section> {
        if sections.len() < self.config.effective_min_sections_to_combine() {
            return sections.to_vec();
        }

        let mut combined = Vec::with_capacity(sections.len());
        let mut i = 0;
        while i < sections.len() {
            if i + 1 < sections.len() && self.can_combine(&sections[i], &sections[i + 1]) {
                combined.push(self.merge_pair(&sections[i], &sections[i + 1]));
                i += 2;
            } else {
                combined.push(sections[i].clone());
                i += 1;
            }
        }
        combined
    }

    /// Rewrite verbose transition lead-ins and record character savings.
    pub fn optimize_transitions(&self, sections: &[Section]) -> Vec<Section> {
        sections
            .iter()
            .map(|section| {
                let mut optimized = section.clone();
                if !section.transition.is_empty() {
                    let rewritten = self.trim_transition(&section.transition);
                    optimized.transition_savings =
                        Some(section.transition.len().saturating_sub(rewritten.len()));
                    optimized.transition = rewritten;
                }
                optimized
            })
            .collect()
    }

    /// The first phrase in table order present anywhere wins, and every
    /// occurrence of it collapses to the replacement token.
    fn trim_transition(&self, transition: &str) -> String {
        let pattern = self
            .transition_matcher
            .find_overlapping_iter(transition)
            .map(|m| m.pattern())
            .min();
        let Some(pattern) = pattern else {
            return transition.to_string();
        };

        let mut out = String::with_capacity(transition.len());
        let mut pos = 0;
        for m in self.transition_matcher.find_overlapping_iter(transition) {
            if m.pattern() != pattern || m.start() < pos {
                continue;
            }
            out.push_str(&transition[pos..m.start()]);
            out.push_str(TRANSITION_REPLACEMENT);
            pos = m.end();
        }
        out.push_str(&transition[pos..]);
        out
    }

    fn can_combine(&self, a: &Section, b: &Section) -> bool {
        if a.priority == Priority::Low && b.priority == Priority::Low {
            return true;
        }

        let title_a = a.title.to_lowercase();
        let title_b = b.title.to_lowercase();
        let keywords = self.config.effective_combinable_keywords();
        keywords.iter().any(|k| title_a.contains(k.as_str()))
            && keywords.iter().any(|k| title_b.contains(k.as_str()))
    }

    fn merge_pair(&self, a: &Section, b: &Section) -> Section {
        let mut materials = a.materials.clone();
        materials.extend(b.materials.iter().cloned());

        Section {
            title: format!("{} & {}", a.title, b.title),
            description: format!("{} {}", a.description, b.description),
            duration_minutes: a.duration_minutes + b.duration_minutes,
            priority: Priority::Medium,
            materials,
            formative_check: format!("{} {}", a.formative_check, b.formative_check),
            transition: b.transition.clone(),
            original_duration: None,
            adjustment: None,
            combined_from: Some(vec![a.title.clone(), b.title.clone()]),
            transition_savings: None,
        }
    }

}

#[cfg(test)]
mod tests {
    use plangate_core::config::TimeConfig;
    use plangate_core::model::{Priority, Section};

    use crate::time::TimeAllocator;

    fn allocator() -> TimeAllocator {
        TimeAllocator::new(TimeConfig::default()).unwrap()
    }

    #[test]
    fn rebalance_records_original_and_adjustment() {
        let sections = vec![
            Section::timed("Main", Priority::High, 30),
            Section::timed("Extra", Priority::Low, 25),
        ];
        let out = allocator().auto_rebalance(&sections, 45);
        let sum: i32 = out.iter().map(|s| s.duration_minutes).sum();
        assert_eq!(sum, 45);
        assert_eq!(out[0].title, "Main");
        assert_eq!(out[0].original_duration, Some(30));
        assert_eq!(
            out[0].adjustment,
            Some(out[0].duration_minutes - 30)
        );
    }

    #[test]
    fn fewer_than_three_sections_are_not_combined() {
        let sections = vec![
            Section::timed("Intro", Priority::Low, 5),
            Section::timed("Warm-up", Priority::Low, 5),
        ];
        assert_eq!(allocator().combine_sections(&sections).len(), 2);
    }

    #[test]
    fn intro_and_warmup_merge_to_medium() {
        let sections = vec![
            Section::timed("Intro", Priority::Medium, 5),
            Section::timed("Warm-up", Priority::Medium, 5),
            Section::timed("Main Activity", Priority::High, 25),
        ];
        let out = allocator().combine_sections(&sections);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Intro & Warm-up");
        assert_eq!(out[0].priority, Priority::Medium);
        assert_eq!(out[0].duration_minutes, 10);
        assert_eq!(
            out[0].combined_from,
            Some(vec!["Intro".to_string(), "Warm-up".to_string()])
        );
    }

    #[test]
    fn verbose_transition_is_trimmed() {
        let mut section = Section::timed("Intro", Priority::Low, 5);
        section.transition = "Now let's move on to the main activity".to_string();
        let out = allocator().optimize_transitions(&[section]);
        assert_eq!(out[0].transition, "Next: the main activity");
        assert_eq!(
            out[0].transition_savings,
            Some("Now let's move on to".len() - "Next:".len())
        );
    }

    #[test]
    fn repeated_verbose_phrase_is_trimmed_everywhere() {
        let mut section = Section::timed("Recap", Priority::Low, 5);
        section.transition =
            "Now let's move on to the recap. Now let's move on to the quiz".to_string();
        let out = allocator().optimize_transitions(&[section]);
        assert_eq!(out[0].transition, "Next: the recap. Next: the quiz");
    }

    #[test]
    fn midpoint_split_sums_each_day() {
        let sections = vec![
            Section::timed("A", Priority::Low, 5),
            Section::timed("B", Priority::Medium, 10),
            Section::timed("C", Priority::High, 25),
            Section::timed("D", Priority::Low, 5),
        ];
        let plan = allocator().suggest_split(&sections);
        assert_eq!(plan.day1.sections.len(), 2);
        assert_eq!(plan.day1.total_time, 15);
        assert_eq!(plan.day2.total_time, 30);
        assert_eq!(plan.day1.focus, "Introduction and core concepts");
    }
}
