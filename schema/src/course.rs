use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub duration: String,
    pub level: Level,
    pub modules: Vec<Module>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`. Must be in bounds; enforced by catalog
    /// validation, not by construction.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

/// One quiz per course.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub questions: Vec<QuizQuestion>,
}
