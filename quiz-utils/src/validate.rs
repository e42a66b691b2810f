use std::collections::HashSet;

use schema::{Course, Quiz};

use crate::error::Error;

/// Validate the course catalog:
/// - course ids are unique, titles and module content are not empty
/// - every course has exactly one quiz, and every quiz a known course
/// - question ids are unique across the catalog
/// - every question has at least two options and an in-bounds correct index
/// - question and option text is not empty
pub fn validate_catalog(courses: &[Course], quizzes: &[Quiz]) -> Result<(), Error> {
    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "Duplicate course id {:?}",
                course.id
            )));
        }
        if course.title.trim().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "Course {:?} has empty title",
                course.id
            )));
        }
        for module in &course.modules {
            if module.content.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "Module {:?} in course {:?} has empty content",
                    module.id, course.id
                )));
            }
        }
    }

    let mut quiz_course_ids = HashSet::new();
    for quiz in quizzes {
        if !course_ids.contains(quiz.course_id.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "Quiz references unknown course {:?}",
                quiz.course_id
            )));
        }
        if !quiz_course_ids.insert(quiz.course_id.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "Course {:?} has more than one quiz",
                quiz.course_id
            )));
        }
        if quiz.questions.is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "Quiz for course {:?} has no questions",
                quiz.course_id
            )));
        }
    }

    for course in courses {
        if !quiz_course_ids.contains(course.id.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "Course {:?} has no quiz",
                course.id
            )));
        }
    }

    let mut question_ids = HashSet::new();
    for quiz in quizzes {
        for question in &quiz.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "Duplicate question id {:?}",
                    question.id
                )));
            }
            if question.question.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "Question {:?} has empty text",
                    question.id
                )));
            }
            if question.options.len() < 2 {
                return Err(Error::InvalidCatalog(format!(
                    "Question {:?} needs at least two options. Available: {}",
                    question.id,
                    question.options.len()
                )));
            }
            if question.correct_answer >= question.options.len() {
                return Err(Error::InvalidCatalog(format!(
                    "Question {:?} correct answer index {} is out of range for {} options",
                    question.id,
                    question.correct_answer,
                    question.options.len()
                )));
            }
            for option in &question.options {
                if option.trim().is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "Question {:?} has an empty option",
                        question.id
                    )));
                }
            }
        }
    }

    Ok(())
}
