//! Question tables, one per category.

use super::{Category, ChoiceOption, Question, QuestionKind, Scale};

const fn rating(min_label: &'static str, max_label: &'static str) -> QuestionKind {
    QuestionKind::NumericScale {
        scale: Scale {
            min: 1,
            max: 10,
            min_label,
            max_label,
        },
    }
}

pub(super) static TIME: [Question; 5] = [
    Question {
        id: "time_1",
        category: Category::Time,
        prompt: "How do you currently spend most of your waking hours?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "work_traditional", label: "Traditional 9-5 job" },
                ChoiceOption { value: "work_flexible", label: "Flexible/remote work" },
                ChoiceOption { value: "entrepreneurship", label: "Running my own business" },
                ChoiceOption { value: "creative_pursuits", label: "Creative or artistic pursuits" },
                ChoiceOption { value: "caregiving", label: "Caregiving responsibilities" },
                ChoiceOption { value: "education", label: "Learning or education" },
                ChoiceOption { value: "mixed", label: "A mix of different activities" },
            ],
        },
        required: true,
    },
    Question {
        id: "time_2",
        category: Category::Time,
        prompt: "How much control do you feel you have over your daily schedule?",
        kind: rating("No control", "Complete control"),
        required: true,
    },
    Question {
        id: "time_3",
        category: Category::Time,
        prompt: "What activities consistently energize you vs. drain you?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about specific activities, times of day, or types of work...",
        },
        required: true,
    },
    Question {
        id: "time_4",
        category: Category::Time,
        prompt: "Describe your ideal week. How would you spend your time if you had complete freedom?",
        kind: QuestionKind::FreeText {
            placeholder: "Be specific about activities, rhythm, and balance...",
        },
        required: true,
    },
    Question {
        id: "time_5",
        category: Category::Time,
        prompt: "How important is having a flexible schedule versus a structured routine?",
        kind: rating("Need structure", "Need flexibility"),
        required: true,
    },
];

pub(super) static SOCIAL: [Question; 5] = [
    Question {
        id: "social_1",
        category: Category::Social,
        prompt: "What best describes your ideal social environment?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "deep_few", label: "A few deep, meaningful relationships" },
                ChoiceOption { value: "broad_network", label: "A broad network of acquaintances" },
                ChoiceOption { value: "tight_community", label: "A tight-knit community group" },
                ChoiceOption { value: "family_focused", label: "Primarily family-centered" },
                ChoiceOption { value: "professional_network", label: "Strong professional network" },
                ChoiceOption { value: "mixed_circles", label: "Multiple different social circles" },
            ],
        },
        required: true,
    },
    Question {
        id: "social_2",
        category: Category::Social,
        prompt: "What's your ideal balance between alone time and social time?",
        kind: QuestionKind::Slider {
            scale: Scale {
                min: 0,
                max: 100,
                min_label: "100% alone",
                max_label: "100% social",
            },
        },
        required: true,
    },
    Question {
        id: "social_3",
        category: Category::Social,
        prompt: "Who are the most important people in your life, and what makes those relationships meaningful?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about the qualities and dynamics that matter most...",
        },
        required: true,
    },
    Question {
        id: "social_4",
        category: Category::Social,
        prompt: "What does community mean to you? How do you want to contribute?",
        kind: QuestionKind::FreeText {
            placeholder: "Consider both receiving support and giving back...",
        },
        required: true,
    },
    Question {
        id: "social_5",
        category: Category::Social,
        prompt: "How important is it for you to be around people who share your interests versus those who challenge your perspective?",
        kind: rating("Similar interests", "Different perspectives"),
        required: true,
    },
];

pub(super) static MENTAL: [Question; 5] = [
    Question {
        id: "mental_1",
        category: Category::Mental,
        prompt: "What activities or pursuits make you feel most fulfilled and alive?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about when time seems to fly by...",
        },
        required: true,
    },
    Question {
        id: "mental_2",
        category: Category::Mental,
        prompt: "What problems in the world do you feel called to solve or contribute to?",
        kind: QuestionKind::FreeText {
            placeholder: "These could be big or small, personal or global...",
        },
        required: true,
    },
    Question {
        id: "mental_3",
        category: Category::Mental,
        prompt: "What drives your sense of purpose most?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "helping_others", label: "Helping others and making a difference" },
                ChoiceOption { value: "creative_expression", label: "Creative expression and innovation" },
                ChoiceOption { value: "learning_growth", label: "Continuous learning and growth" },
                ChoiceOption { value: "achievement", label: "Achievement and recognition" },
                ChoiceOption { value: "autonomy", label: "Independence and self-direction" },
                ChoiceOption { value: "connection", label: "Deep connections and relationships" },
                ChoiceOption { value: "legacy", label: "Building something lasting" },
            ],
        },
        required: true,
    },
    Question {
        id: "mental_4",
        category: Category::Mental,
        prompt: "What would you regret not pursuing or exploring in your lifetime?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about experiences, skills, or contributions...",
        },
        required: true,
    },
    Question {
        id: "mental_5",
        category: Category::Mental,
        prompt: "How important is intellectual challenge versus emotional fulfillment in your ideal life?",
        kind: rating("Emotional fulfillment", "Intellectual challenge"),
        required: true,
    },
];

pub(super) static PHYSICAL: [Question; 5] = [
    Question {
        id: "physical_1",
        category: Category::Physical,
        prompt: "How would you describe your ideal physical state? How do you want to feel in your body?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about energy levels, strength, flexibility, overall wellbeing...",
        },
        required: true,
    },
    Question {
        id: "physical_2",
        category: Category::Physical,
        prompt: "What role does food play in your ideal life?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "fuel", label: "Primarily fuel for my body" },
                ChoiceOption { value: "pleasure", label: "A source of pleasure and enjoyment" },
                ChoiceOption { value: "social", label: "A way to connect with others" },
                ChoiceOption { value: "cultural", label: "Cultural expression and tradition" },
                ChoiceOption { value: "mindful", label: "Mindful, intentional nourishment" },
                ChoiceOption { value: "creative", label: "Creative outlet and experimentation" },
            ],
        },
        required: true,
    },
    Question {
        id: "physical_3",
        category: Category::Physical,
        prompt: "What physical activities bring you joy? What does movement mean to you?",
        kind: QuestionKind::FreeText {
            placeholder: "Consider both exercise and everyday movement...",
        },
        required: true,
    },
    Question {
        id: "physical_4",
        category: Category::Physical,
        prompt: "How much do you want to prioritize physical appearance versus functional health?",
        kind: rating("Functional health", "Physical appearance"),
        required: true,
    },
    Question {
        id: "physical_5",
        category: Category::Physical,
        prompt: "What does rest and recovery look like in your ideal life?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about sleep, relaxation, and recharging...",
        },
        required: true,
    },
];

pub(super) static FINANCIAL: [Question; 5] = [
    Question {
        id: "financial_1",
        category: Category::Financial,
        prompt: "What lifestyle do you actually want money to enable? Be specific.",
        kind: QuestionKind::FreeText {
            placeholder: "Think about experiences, security, freedom, impact...",
        },
        required: true,
    },
    Question {
        id: "financial_2",
        category: Category::Financial,
        prompt: "What best describes your relationship with money?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "tool", label: "Money is a tool for achieving my goals" },
                ChoiceOption { value: "security", label: "Money represents safety and security" },
                ChoiceOption { value: "freedom", label: "Money means freedom and options" },
                ChoiceOption { value: "stress", label: "Money is a source of stress or anxiety" },
                ChoiceOption { value: "status", label: "Money reflects success and status" },
                ChoiceOption { value: "complicated", label: "I have a complicated relationship with money" },
            ],
        },
        required: true,
    },
    Question {
        id: "financial_3",
        category: Category::Financial,
        prompt: "What would 'enough' money look like for you? How would you know when you have enough?",
        kind: QuestionKind::FreeText {
            placeholder: "Think about specific scenarios or feelings...",
        },
        required: true,
    },
    Question {
        id: "financial_4",
        category: Category::Financial,
        prompt: "How important is financial security versus financial freedom?",
        kind: rating("Security first", "Freedom first"),
        required: true,
    },
    Question {
        id: "financial_5",
        category: Category::Financial,
        prompt: "What's your preferred approach to earning money?",
        kind: QuestionKind::SingleChoice {
            options: &[
                ChoiceOption { value: "stable_employment", label: "Stable employment with benefits" },
                ChoiceOption { value: "multiple_streams", label: "Multiple income streams" },
                ChoiceOption { value: "high_risk_reward", label: "High risk, high reward ventures" },
                ChoiceOption { value: "passive_income", label: "Building passive income sources" },
                ChoiceOption { value: "service_based", label: "Selling services or expertise" },
                ChoiceOption { value: "creative_monetization", label: "Monetizing creative work" },
            ],
        },
        required: true,
    },
];
