//! Deterministic lesson fixtures for tests and demos.
//! Same input → same output across runs.
//!
//! The content is a middle-school renewable-energy unit: a four-section
//! solar-oven lesson with a quiz, one rubric, and an upstream UDL report.

use crate::model::{
    Activity, Answer, Difficulty, ItemType, LessonBrief, LessonDraft, Priority, QuizItem,
    ReadingLevel, Rubric, RubricCriterion, Section, UdlFlag, UdlReport, VocabularyEntry,
};

/// A representative brief for the fixture unit.
pub fn sample_brief() -> LessonBrief {
    LessonBrief {
        topic: "Renewable Energy".to_string(),
        grade_band: "6-8".to_string(),
        period_length_minutes: 45,
        days: 1,
        class_size: 28,
        equipment: vec![
            "cardboard boxes".to_string(),
            "aluminum foil".to_string(),
            "thermometers".to_string(),
        ],
        objectives: vec![
            "Understand how solar energy can be converted to heat".to_string(),
            "Apply engineering design principles".to_string(),
            "Collect and analyze temperature data".to_string(),
        ],
    }
}

/// The fixture draft: a solar-oven lesson sized to the brief's budget.
///
/// The activity ships without safety documentation and the UDL report
/// carries known barriers, so gate tests have real deficiencies to find.
pub fn solar_energy_draft(brief: &LessonBrief) -> LessonDraft {
    LessonDraft {
        topic: brief.topic.clone(),
        grade_band: brief.grade_band.clone(),
        total_minutes: brief.total_minutes(),
        sections: fixture_sections(),
        activity: fixture_activity(),
        quiz_items: fixture_quiz_items(),
        rubrics: vec![fixture_rubric()],
        udl_report: fixture_udl_report(),
    }
}

fn fixture_sections() -> Vec<Section> {
    vec![
        Section {
            title: "Do Now".to_string(),
            description: "Students complete a quick warm-up activity about energy sources"
                .to_string(),
            duration_minutes: 5,
            priority: Priority::Low,
            materials: vec!["whiteboards".to_string(), "markers".to_string()],
            formative_check: "Quick poll: how many students can name 3 energy sources?"
                .to_string(),
            transition: "Now let's move on to the main lesson".to_string(),
            ..Default::default()
        },
        Section {
            title: "Introduction".to_string(),
            description: "Introduce renewable energy concepts and today's objectives"
                .to_string(),
            duration_minutes: 10,
            priority: Priority::Medium,
            materials: vec!["projector".to_string(), "slides".to_string()],
            formative_check: "Thumbs up/down: do you understand what renewable means?"
                .to_string(),
            transition: "Let's transition to the hands-on activity".to_string(),
            ..Default::default()
        },
        Section {
            title: "Main Activity".to_string(),
            description: "Students build and test solar ovens".to_string(),
            duration_minutes: 25,
            priority: Priority::High,
            materials: vec![
                "cardboard boxes".to_string(),
                "aluminum foil".to_string(),
                "thermometers".to_string(),
                "black paper".to_string(),
            ],
            formative_check: "Check-in: are students following safety procedures?".to_string(),
            transition: "Clean up and prepare for reflection".to_string(),
            ..Default::default()
        },
        Section {
            title: "Wrap-up".to_string(),
            description: "Reflect on learning and connect to objectives".to_string(),
            duration_minutes: 5,
            priority: Priority::Low,
            materials: vec!["exit tickets".to_string()],
            formative_check: "Exit ticket: name one thing you learned about solar energy"
                .to_string(),
            transition: "Dismissal".to_string(),
            ..Default::default()
        },
    ]
}

fn fixture_activity() -> Activity {
    Activity {
        title: "Solar Oven Construction and Testing".to_string(),
        description:
            "Students build and test simple solar ovens to understand solar energy conversion"
                .to_string(),
        materials: vec![
            "Cardboard boxes (1 per group)".to_string(),
            "Aluminum foil".to_string(),
            "Black construction paper".to_string(),
            "Thermometers".to_string(),
            "Scissors".to_string(),
            "Tape".to_string(),
        ],
        // Safety documentation deliberately absent; the safety gate
        // detects and completes it.
        ..Default::default()
    }
}

fn fixture_quiz_items() -> Vec<QuizItem> {
    vec![
        QuizItem {
            id: "q1".to_string(),
            item_type: ItemType::Mcq,
            question: "Which of the following is a renewable energy source?".to_string(),
            options: vec![
                "Coal".to_string(),
                "Natural Gas".to_string(),
                "Solar Power".to_string(),
                "Oil".to_string(),
            ],
            correct: Answer::Choice("Solar Power".to_string()),
            tolerance: None,
            points: 2.0,
            difficulty: Difficulty::Easy,
            explanation: "Solar power is naturally replenished.".to_string(),
        },
        QuizItem {
            id: "q2".to_string(),
            item_type: ItemType::MultiSelect,
            question: "Select all the materials needed to build a basic solar oven:".to_string(),
            options: vec![
                "Cardboard box".to_string(),
                "Aluminum foil".to_string(),
                "Black paper".to_string(),
                "Glass".to_string(),
            ],
            correct: Answer::Choices(vec![
                "Cardboard box".to_string(),
                "Aluminum foil".to_string(),
                "Black paper".to_string(),
            ]),
            tolerance: None,
            points: 3.0,
            difficulty: Difficulty::Medium,
            explanation: "These three form the structure and heat absorption.".to_string(),
        },
        QuizItem {
            id: "q3".to_string(),
            item_type: ItemType::Numeric,
            question:
                "If a solar oven reaches 150 degrees in 30 minutes, what is the average increase per minute?"
                    .to_string(),
            options: vec![],
            correct: Answer::Number(5.0),
            tolerance: Some(0.1),
            points: 3.0,
            difficulty: Difficulty::Hard,
            explanation: "150 / 30 = 5 degrees per minute".to_string(),
        },
        QuizItem {
            id: "q4".to_string(),
            item_type: ItemType::ShortAnswer,
            question: "Explain why black paper is used in solar ovens.".to_string(),
            options: vec![],
            correct: Answer::Keywords(vec!["absorbs".to_string(), "heat".to_string()]),
            tolerance: None,
            points: 4.0,
            difficulty: Difficulty::Medium,
            explanation: "Black surfaces absorb more light energy.".to_string(),
        },
    ]
}

fn fixture_rubric() -> Rubric {
    Rubric {
        question_id: "q4".to_string(),
        criteria: vec![
            RubricCriterion {
                level: 4,
                description: "Complete explanation mentioning absorption and heat conversion"
                    .to_string(),
            },
            RubricCriterion {
                level: 3,
                description: "Good explanation mentioning absorption or heat conversion"
                    .to_string(),
            },
            RubricCriterion {
                level: 2,
                description: "Basic explanation with some relevant information".to_string(),
            },
            RubricCriterion {
                level: 1,
                description: "Minimal or incorrect explanation".to_string(),
            },
        ],
    }
}

fn fixture_udl_report() -> UdlReport {
    UdlReport {
        overall_score: "85% UDL compliant".to_string(),
        flags: vec![
            UdlFlag {
                flag_type: "REPRESENTATION".to_string(),
                severity: "MEDIUM".to_string(),
                description: "Solar oven construction relies heavily on visual instructions"
                    .to_string(),
                suggestion: "Add tactile models and audio descriptions for each step".to_string(),
                principle: "Multiple means of representation".to_string(),
            },
            UdlFlag {
                flag_type: "EXPRESSION".to_string(),
                severity: "LOW".to_string(),
                description: "Limited options for students to demonstrate understanding"
                    .to_string(),
                suggestion: "Offer choice of written report, oral presentation, or diagram"
                    .to_string(),
                principle: "Multiple means of action and expression".to_string(),
            },
            UdlFlag {
                flag_type: "ENGAGEMENT".to_string(),
                severity: "LOW".to_string(),
                description: "Activity may not engage students with different interests"
                    .to_string(),
                suggestion: "Connect to students' personal experiences with energy use"
                    .to_string(),
                principle: "Multiple means of engagement".to_string(),
            },
        ],
        reading_level: ReadingLevel {
            current_level: "Grade 6-7".to_string(),
            recommendations: vec![
                "Simplify technical terms like 'capacity factor'".to_string(),
                "Break complex sentences into shorter ones".to_string(),
            ],
        },
        vocabulary: vec![
            VocabularyEntry {
                complex_word: "capacity factor".to_string(),
                simpler_alternative: "how much of the time it works".to_string(),
                context: "wind turbine problem".to_string(),
            },
            VocabularyEntry {
                complex_word: "kilowatt-hours".to_string(),
                simpler_alternative: "units of electricity".to_string(),
                context: "energy calculations".to_string(),
            },
        ],
        scaffolds: vec![
            "Provide sentence starters for written responses".to_string(),
            "Use graphic organizers for data analysis".to_string(),
        ],
        support: Default::default(),
    }
}
