//! Narrative life-vision report built from a [`GlobalAnalysis`].

use serde::Serialize;
use std::fmt::Write as _;

use crate::analysis::{GlobalAnalysis, Theme};
use crate::answers::AnswerMap;
use crate::catalog::Category;
use crate::generation::{TextGenerator, prompts};

const RAZOR_PREFIX: &str = "I will say yes to opportunities that ";
const RAZOR_DEFAULT: &str = "align with my core values and long-term vision";

#[derive(Debug, Clone, Serialize)]
pub struct CategoryVision {
    pub category: Category,
    pub title: &'static str,
    pub icon: &'static str,
    pub vision: String,
    /// Rounded completeness percentage.
    pub completeness: u32,
    pub insight_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusSection {
    pub rank: usize,
    pub category: Category,
    pub title: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    pub id: usize,
    /// Category id, or "reflection" for the closing review step.
    pub category: String,
    pub title: String,
    pub description: String,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionReport {
    pub life_vision: String,
    pub life_razor: String,
    pub category_visions: Vec<CategoryVision>,
    pub focus_areas: Vec<FocusSection>,
    pub next_steps: Vec<NextStep>,
    pub themes: Vec<Theme>,
}

impl VisionReport {
    pub fn build(analysis: &GlobalAnalysis) -> Self {
        Self {
            life_vision: life_vision_statement(analysis),
            life_razor: life_razor(analysis),
            category_visions: Category::ALL
                .iter()
                .map(|c| category_vision(analysis, *c))
                .collect(),
            focus_areas: analysis
                .focus_areas
                .iter()
                .enumerate()
                .map(|(i, area)| FocusSection {
                    rank: i + 1,
                    category: area.category,
                    title: area.category.title(),
                    reason: area.reason.clone(),
                })
                .collect(),
            next_steps: next_steps(analysis),
            themes: analysis.themes.clone(),
        }
    }

    /// Replace the templated vision statement with generated text. The
    /// template is kept when generation fails or returns nothing.
    pub async fn with_generated_vision(
        mut self,
        generator: &dyn TextGenerator,
        answers: &AnswerMap,
    ) -> Self {
        let prompt = prompts::vision_statement_prompt(answers, &self.themes);
        match generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => self.life_vision = text.trim().to_string(),
            Ok(_) => tracing::warn!("Generator returned an empty vision statement"),
            Err(e) => tracing::warn!(
                "Vision generation via {} failed, keeping template: {}",
                generator.name(),
                e
            ),
        }
        self
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Your Life Vision Report\n");

        let _ = writeln!(out, "## 🌟 Your Life Vision Statement\n");
        let _ = writeln!(out, "{}\n", self.life_vision);

        let _ = writeln!(out, "## ⚡ Your Life Razor\n");
        let _ = writeln!(out, "> \"{}\"\n", self.life_razor);
        let _ = writeln!(
            out,
            "Use this statement as a filter for making decisions about opportunities, commitments, and life choices.\n"
        );

        let _ = writeln!(out, "## Five Wealth Category Visions\n");
        for cv in &self.category_visions {
            let _ = writeln!(out, "### {} {}\n", cv.icon, cv.title);
            let _ = writeln!(out, "{}\n", cv.vision);
            let _ = writeln!(
                out,
                "_{}% complete · {} insights identified_\n",
                cv.completeness, cv.insight_count
            );
        }

        if !self.focus_areas.is_empty() {
            let _ = writeln!(out, "## 🎯 Recommended Focus Areas\n");
            for area in &self.focus_areas {
                let _ = writeln!(out, "{}. **{}**: {}", area.rank, area.title, area.reason);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "## ✅ Your Next Steps\n");
        for step in &self.next_steps {
            let _ = writeln!(
                out,
                "{}. **{}** ({}): {}",
                step.id, step.title, step.timeframe, step.description
            );
        }
        out
    }
}

pub fn life_vision_statement(analysis: &GlobalAnalysis) -> String {
    let focus: Vec<String> = analysis
        .focus_areas
        .iter()
        .take(2)
        .map(|f| f.category.title().to_lowercase())
        .collect();

    let mut statement = format!(
        "My ideal life is one where I have meaningful control over my time, nurturing relationships that energize me, and pursue work that aligns with my values. I prioritize {} as foundations for a fulfilling life, while maintaining balance across all aspects of wealth.",
        focus.join(" and ")
    );
    for (theme, sentence) in [
        (Theme::Autonomy, "Freedom and flexibility are essential to my wellbeing."),
        (
            Theme::Growth,
            "Continuous learning and personal development drive my decisions.",
        ),
        (
            Theme::Connection,
            "Deep, meaningful relationships are at the center of my vision.",
        ),
    ] {
        if analysis.has_theme(theme) {
            statement.push(' ');
            statement.push_str(sentence);
        }
    }
    statement
}

pub fn life_razor(analysis: &GlobalAnalysis) -> String {
    let mut criteria: Vec<&str> = Vec::new();
    if analysis.has_theme(Theme::Growth) {
        criteria.push("challenge me to learn and grow");
    }
    if analysis.has_theme(Theme::Autonomy) {
        criteria.push("give me control over my time and decisions");
    }
    if analysis.has_theme(Theme::Connection) {
        criteria.push("strengthen my relationships or build community");
    }
    if analysis.is_focus(Category::Time) {
        criteria.push("align with how I want to spend my time");
    }
    if criteria.is_empty() {
        criteria.push(RAZOR_DEFAULT);
    }
    criteria.truncate(2);
    format!("{RAZOR_PREFIX}{}.", criteria.join(" and "))
}

fn category_vision(analysis: &GlobalAnalysis, category: Category) -> CategoryVision {
    let info = category.info();
    let (vision, completeness, insight_count) = match analysis.category(category) {
        None => (
            format!(
                "My vision for {} is still developing as I explore what matters most to me in this area.",
                info.title
            ),
            0,
            0,
        ),
        Some(a) => {
            let vision = if a.key_insights.is_empty() {
                format!(
                    "My {} vision is an area for exploration and development.",
                    info.title
                )
            } else {
                category_specific_vision(category, &a.key_insights)
            };
            (vision, a.completeness.round() as u32, a.key_insights.len())
        }
    };
    CategoryVision {
        category,
        title: info.title,
        icon: info.icon,
        vision,
        completeness,
        insight_count,
    }
}

fn category_specific_vision(category: Category, insights: &[String]) -> String {
    let joined = insights.join(". ");
    match category {
        Category::Time => format!(
            "I envision my time being spent in alignment with my energy and values, with sufficient control over my schedule to prioritize what matters most. {joined}."
        ),
        Category::Social => {
            let style = insights
                .iter()
                .find(|i| i.contains("social style"))
                .map(String::as_str)
                .unwrap_or("meaningful connections");
            let rest: Vec<&str> = insights
                .iter()
                .filter(|i| !i.contains("social style"))
                .map(String::as_str)
                .collect();
            format!(
                "My ideal social life involves {style} with people who energize and inspire me. {}.",
                rest.join(". ")
            )
        }
        Category::Mental => format!(
            "My mental wealth centers on pursuing meaningful work and growth that aligns with my purpose. {joined}."
        ),
        Category::Physical => format!(
            "I see my physical health as a foundation for everything else, focusing on feeling strong, energized, and comfortable in my body. {joined}."
        ),
        Category::Financial => format!(
            "My relationship with money is as a tool to enable the lifestyle and freedom I desire. {joined}."
        ),
    }
}

fn next_steps(analysis: &GlobalAnalysis) -> Vec<NextStep> {
    let mut steps: Vec<NextStep> = analysis
        .focus_areas
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, area)| {
            let title = area.category.title();
            NextStep {
                id: i + 1,
                category: area.category.as_str().to_string(),
                title: format!("Develop Your {title} Vision"),
                description: format!(
                    "{} Consider specific actions and changes that align with your {} goals.",
                    area.reason,
                    title.to_lowercase()
                ),
                timeframe: "30 days",
            }
        })
        .collect();

    steps.push(NextStep {
        id: steps.len() + 1,
        category: "reflection".to_string(),
        title: "Regular Vision Review".to_string(),
        description:
            "Schedule monthly check-ins to review your progress and adjust your vision as needed."
                .to_string(),
        timeframe: "Ongoing",
    });
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_answers;

    #[test]
    fn test_razor_defaults_without_themes_or_time_focus() {
        let mut analysis = analyze_answers(&AnswerMap::new());
        analysis.focus_areas.retain(|f| f.category != Category::Time);
        assert_eq!(
            life_razor(&analysis),
            "I will say yes to opportunities that align with my core values and long-term vision."
        );
    }

    #[test]
    fn test_razor_takes_first_two_criteria() {
        let mut analysis = analyze_answers(&AnswerMap::new());
        analysis.themes = vec![Theme::Autonomy, Theme::Growth, Theme::Connection];
        assert_eq!(
            life_razor(&analysis),
            "I will say yes to opportunities that challenge me to learn and grow and give me control over my time and decisions."
        );
    }

    #[test]
    fn test_vision_statement_names_top_two_focus_areas() {
        let mut analysis = analyze_answers(&AnswerMap::new());
        analysis.themes = vec![Theme::Connection];
        let statement = life_vision_statement(&analysis);
        assert!(statement.contains("I prioritize time wealth and social wealth as foundations"));
        assert!(statement.ends_with("Deep, meaningful relationships are at the center of my vision."));
        assert!(!statement.contains("Freedom and flexibility"));
    }

    #[test]
    fn test_social_vision_lifts_style_insight() {
        let insights = vec![
            "Preferred social style: Multiple different social circles".to_string(),
            "Values community contribution and connection".to_string(),
        ];
        assert_eq!(
            category_specific_vision(Category::Social, &insights),
            "My ideal social life involves Preferred social style: Multiple different social circles with people who energize and inspire me. Values community contribution and connection."
        );
    }

    #[test]
    fn test_next_steps_end_with_review() {
        let report = VisionReport::build(&analyze_answers(&AnswerMap::new()));
        assert_eq!(report.next_steps.len(), 4);
        assert_eq!(report.next_steps[0].title, "Develop Your Time Wealth Vision");
        assert_eq!(report.next_steps[0].timeframe, "30 days");
        let last = report.next_steps.last().unwrap();
        assert_eq!(last.id, 4);
        assert_eq!(last.category, "reflection");
        assert_eq!(last.timeframe, "Ongoing");
    }

    #[test]
    fn test_empty_category_vision_and_markdown() {
        let report = VisionReport::build(&analyze_answers(&AnswerMap::new()));
        assert_eq!(report.category_visions.len(), 5);
        assert_eq!(
            report.category_visions[2].vision,
            "My Mental Wealth vision is an area for exploration and development."
        );
        let md = report.render_markdown();
        assert!(md.starts_with("# Your Life Vision Report"));
        assert!(md.contains("### 💰 Financial Wealth"));
        assert!(md.contains("_0% complete · 0 insights identified_"));
        assert!(md.contains("1. **Time Wealth**: Time Wealth needs attention"));
    }
}
