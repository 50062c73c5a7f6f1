//! Question type catalog.
//!
//! The `question_types` lookup table is seeded from [`CATALOG`]. The seed
//! migration and `QuestionTypeRepo::seed_defaults` both mirror this list.

/// One entry of the static question type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTypeSpec {
    pub code: &'static str,
    pub label: &'static str,
    /// Answers are picked from the question's options.
    pub uses_options: bool,
    /// Answers are free text.
    pub allows_text_answer: bool,
}

pub const MULTIPLE_CHOICE: &str = "multiple_choice";
pub const QUIZ: &str = "quiz";
pub const OPEN_ENDED: &str = "open_ended";
pub const WORD_CLOUD: &str = "word_cloud";
pub const SCALES: &str = "scales";
pub const RANKING: &str = "ranking";
pub const QNA: &str = "qna";
pub const IMAGE_CHOICE: &str = "image_choice";
pub const SLIDER: &str = "slider";
pub const GRID: &str = "grid";
pub const PRIORITIZATION: &str = "prioritization";
pub const QUICK_FORM: &str = "quick_form";
pub const CONTENT_SLIDE: &str = "content_slide";

const fn spec(
    code: &'static str,
    label: &'static str,
    uses_options: bool,
    allows_text_answer: bool,
) -> QuestionTypeSpec {
    QuestionTypeSpec {
        code,
        label,
        uses_options,
        allows_text_answer,
    }
}

pub const CATALOG: &[QuestionTypeSpec] = &[
    spec(MULTIPLE_CHOICE, "Multiple choice", true, false),
    spec(QUIZ, "Quiz", true, false),
    spec(OPEN_ENDED, "Open ended", false, true),
    spec(WORD_CLOUD, "Word cloud", false, true),
    spec(SCALES, "Scales", false, false),
    spec(RANKING, "Ranking", false, false),
    spec(QNA, "Q&A", false, true),
    spec(IMAGE_CHOICE, "Image choice", true, false),
    spec(SLIDER, "Slider", false, false),
    spec(GRID, "Grid", false, false),
    spec(PRIORITIZATION, "Prioritization", false, false),
    spec(QUICK_FORM, "Quick form", false, true),
    spec(CONTENT_SLIDE, "Content slide", false, false),
];
