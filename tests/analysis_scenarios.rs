//! Whole-pipeline checks for `analyze_answers`.

use vision_guide::analysis::{Priority, Theme, detect_themes};
use vision_guide::{AnswerMap, AnswerValue, Category, analyze_answers};

fn scenario_answers() -> AnswerMap {
    [
        ("time_2", AnswerValue::from(3)),
        (
            "time_3",
            AnswerValue::from("Deep work in the morning energizes me"),
        ),
        ("social_2", AnswerValue::from(20)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_partial_answers_end_to_end() {
    let analysis = analyze_answers(&scenario_answers());

    let time = analysis.category(Category::Time).unwrap();
    assert_eq!(time.completeness, 40.0);
    assert_eq!(
        time.key_insights,
        vec![
            "Low control over daily schedule - opportunity for improvement".to_string(),
            "Energy patterns: Deep work in the morning energizes me...".to_string(),
        ]
    );
    assert_eq!(time.priority, Priority::Medium);

    let social = analysis.category(Category::Social).unwrap();
    assert_eq!(social.completeness, 20.0);
    assert_eq!(
        social.key_insights,
        vec!["Highly social - thrives on connection with others".to_string()]
    );

    for category in [Category::Mental, Category::Physical, Category::Financial] {
        let c = analysis.category(category).unwrap();
        assert_eq!(c.completeness, 0.0);
        assert!(c.key_insights.is_empty());
        assert_eq!(c.priority, Priority::Low);
    }

    let focus: Vec<Category> = analysis.focus_areas.iter().map(|f| f.category).collect();
    assert_eq!(
        focus,
        vec![Category::Time, Category::Social, Category::Mental]
    );
    assert!(analysis.values.is_empty());
    assert!(analysis.conflicts.is_empty());
}

#[test]
fn test_every_category_present_and_bounded() {
    let analysis = analyze_answers(&AnswerMap::new());
    assert_eq!(analysis.priorities.len(), 5);
    for category in Category::ALL {
        let c = analysis.category(category).unwrap();
        assert!((0.0..=100.0).contains(&c.completeness));
    }
    assert_eq!(analysis.focus_areas.len(), 3);
    assert!(analysis.themes.is_empty());
}

#[test]
fn test_analysis_is_deterministic() {
    let answers = scenario_answers();
    let first = serde_json::to_string(&analyze_answers(&answers)).unwrap();
    let second = serde_json::to_string(&analyze_answers(&answers)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_ids_do_not_change_categories() {
    let mut answers = scenario_answers();
    let baseline = analyze_answers(&answers);
    answers.insert("bogus_9", 42);
    let with_unknown = analyze_answers(&answers);
    assert_eq!(baseline.priorities, with_unknown.priorities);
    assert_eq!(baseline.focus_areas, with_unknown.focus_areas);
}

#[test]
fn test_themes_need_three_keyword_hits() {
    let answers: AnswerMap = [
        ("time_4", "Learning every day"),
        ("mental_1", "Growth matters"),
    ]
    .into_iter()
    .collect();
    assert!(!detect_themes(&answers).contains(&Theme::Growth));

    let answers: AnswerMap = [
        ("time_4", "Learning every day"),
        ("mental_1", "Growth matters, keep growing"),
    ]
    .into_iter()
    .collect();
    let analysis = analyze_answers(&answers);
    assert!(analysis.has_theme(Theme::Growth));
}

#[test]
fn test_full_text_answers_raise_priority() {
    let answers: AnswerMap = [
        ("mental_1", "Writing and teaching"),
        ("mental_2", "Access to education"),
        ("mental_3", "legacy"),
        ("mental_4", "Music and languages"),
    ]
    .into_iter()
    .collect();
    let analysis = analyze_answers(&answers);
    let mental = analysis.category(Category::Mental).unwrap();
    assert_eq!(mental.completeness, 80.0);
    assert_eq!(mental.key_insights.len(), 4);
    assert_eq!(mental.priority, Priority::High);
}

#[test]
fn test_wire_format_uses_camel_case() {
    let value = serde_json::to_value(analyze_answers(&scenario_answers())).unwrap();
    assert!(value.get("focusAreas").is_some());
    assert_eq!(value["priorities"]["time"]["completeness"], 40.0);
    assert!(value["priorities"]["time"]["keyInsights"].is_array());
}

#[test]
fn test_whitespace_answers_count_as_present() {
    let answers: AnswerMap = [
        ("time_1", AnswerValue::from("mixed")),
        ("time_2", AnswerValue::from(9)),
        ("time_3", AnswerValue::from(" ")),
        ("time_4", AnswerValue::from("  ")),
        ("time_5", AnswerValue::from(5)),
    ]
    .into_iter()
    .collect();
    let analysis = analyze_answers(&answers);
    let time = analysis.category(Category::Time).unwrap();
    assert_eq!(time.completeness, 100.0);
    assert_eq!(
        time.key_insights,
        vec![
            "High control over time - good foundation for optimization".to_string(),
            "Energy patterns:  ...".to_string(),
            "Has a clear vision for ideal time allocation".to_string(),
        ]
    );
}

#[test]
fn test_numeric_social_style_is_echoed() {
    let answers: AnswerMap = [("social_1", 3)].into_iter().collect();
    let analysis = analyze_answers(&answers);
    assert_eq!(
        analysis.category(Category::Social).unwrap().key_insights,
        vec!["Preferred social style: 3".to_string()]
    );
}
