use schema::{Quiz, QuizQuestion};
use tracing::debug;

use crate::error::Error;

/// Fixed pass policy: an attempt passes at 80% or above.
pub const PASSING_PERCENT: u32 = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttemptState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Result of a completed attempt, for the caller to push into the
/// progress store. The runner derives `passed` exactly once; the store
/// records it as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub passed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Next(usize),
    Completed(QuizOutcome),
}

/// Transient state machine for one quiz attempt. Nothing here is
/// persisted; discarding the runner discards the attempt.
#[derive(Debug, Default)]
pub struct QuizRunner {
    quiz: Option<Quiz>,
    state: AttemptState,
    current: usize,
    selections: Vec<Option<usize>>,
}

impl QuizRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn current_question_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.as_ref().and_then(|q| q.questions.get(self.current))
    }

    /// Selection for the current question, `None` while unanswered.
    pub fn selection(&self) -> Option<usize> {
        self.selections.get(self.current).copied().flatten()
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    /// Begin an attempt. Valid from `NotStarted` or `Completed`.
    pub fn start(&mut self, quiz: Quiz) -> Result<(), Error> {
        if self.state == AttemptState::InProgress {
            return Err(Error::AttemptActive);
        }
        if quiz.questions.is_empty() {
            return Err(Error::EmptyQuiz);
        }
        self.selections = vec![None; quiz.questions.len()];
        self.current = 0;
        self.quiz = Some(quiz);
        self.state = AttemptState::InProgress;
        Ok(())
    }

    /// Record the chosen option for the current question. Changing the
    /// selection before advancing is allowed and has no side effects.
    pub fn select_answer(&mut self, option: usize) -> Result<(), Error> {
        if self.state != AttemptState::InProgress {
            return Err(Error::NotInProgress);
        }
        let quiz = self.quiz.as_ref().expect("in-progress attempt has a quiz");
        let question = &quiz.questions[self.current];
        if option >= question.options.len() {
            return Err(Error::OptionOutOfRange {
                question: self.current,
                option,
            });
        }
        self.selections[self.current] = Some(option);
        Ok(())
    }

    /// Move past the current question. Rejected while the current question
    /// has no selection. On the final question this computes the score,
    /// transitions to `Completed`, and returns the outcome.
    pub fn advance(&mut self) -> Result<Advance, Error> {
        if self.state != AttemptState::InProgress {
            return Err(Error::NotInProgress);
        }
        if self.selections[self.current].is_none() {
            return Err(Error::Unanswered(self.current));
        }
        let quiz = self.quiz.as_ref().expect("in-progress attempt has a quiz");
        if self.current + 1 < quiz.questions.len() {
            self.current += 1;
            return Ok(Advance::Next(self.current));
        }

        let score = calculate_score(quiz, &self.selections);
        let outcome = QuizOutcome {
            score,
            passed: score >= PASSING_PERCENT,
        };
        debug!(
            course = %quiz.course_id,
            score = outcome.score,
            passed = outcome.passed,
            "quiz attempt completed"
        );
        self.state = AttemptState::Completed;
        Ok(Advance::Completed(outcome))
    }

    /// Discard the attempt from any state. Already-persisted results are
    /// untouched.
    pub fn reset(&mut self) {
        self.quiz = None;
        self.state = AttemptState::NotStarted;
        self.current = 0;
        self.selections.clear();
    }
}

/// Calculates the attempt score: `round(100 * correct / total)`. An
/// unanswered question counts as incorrect. Deterministic for a given quiz
/// and selection sequence.
pub fn calculate_score(quiz: &Quiz, selections: &[Option<usize>]) -> u32 {
    let total = quiz.questions.len();
    if total == 0 {
        return 0;
    }
    let correct = quiz
        .questions
        .iter()
        .zip(selections.iter())
        .filter(|(question, selected)| **selected == Some(question.correct_answer))
        .count();
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(correct: &[usize]) -> Quiz {
        Quiz {
            course_id: "c001".to_string(),
            questions: correct
                .iter()
                .enumerate()
                .map(|(i, &answer)| QuizQuestion {
                    id: format!("q{:03}", i + 1),
                    question: format!("Question {}?", i + 1),
                    options: (0..4).map(|o| format!("Option {o}")).collect(),
                    correct_answer: answer,
                })
                .collect(),
        }
    }

    fn run_through(runner: &mut QuizRunner, answers: &[usize]) -> QuizOutcome {
        for &answer in answers {
            runner.select_answer(answer).unwrap();
            match runner.advance().unwrap() {
                Advance::Next(_) => {}
                Advance::Completed(outcome) => return outcome,
            }
        }
        panic!("quiz did not complete");
    }

    #[test]
    fn all_correct_answers_score_one_hundred() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[2, 1, 1, 0, 3])).unwrap();

        let outcome = run_through(&mut runner, &[2, 1, 1, 0, 3]);
        assert_eq!(outcome, QuizOutcome { score: 100, passed: true });
        assert_eq!(runner.state(), AttemptState::Completed);
    }

    #[test]
    fn all_wrong_answers_score_zero() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[2, 1, 1, 0, 3])).unwrap();

        let outcome = run_through(&mut runner, &[0, 0, 0, 1, 0]);
        assert_eq!(outcome, QuizOutcome { score: 0, passed: false });
    }

    #[test]
    fn four_of_five_is_exactly_the_pass_threshold() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[2, 1, 1, 0, 3])).unwrap();

        let outcome = run_through(&mut runner, &[2, 1, 1, 0, 0]);
        assert_eq!(outcome.score, 80);
        assert!(outcome.passed);
    }

    #[test]
    fn three_of_five_fails() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[2, 1, 1, 0, 3])).unwrap();

        let outcome = run_through(&mut runner, &[2, 1, 1, 1, 0]);
        assert_eq!(outcome.score, 60);
        assert!(!outcome.passed);
    }

    #[test]
    fn score_is_rounded_to_nearest_integer() {
        // 1/3 -> 33.33 rounds down, 2/3 -> 66.67 rounds up
        let q = quiz(&[0, 0, 0]);
        assert_eq!(calculate_score(&q, &[Some(0), Some(1), Some(1)]), 33);
        assert_eq!(calculate_score(&q, &[Some(0), Some(0), Some(1)]), 67);
    }

    #[test]
    fn unanswered_selections_count_as_incorrect() {
        let q = quiz(&[0, 0]);
        assert_eq!(calculate_score(&q, &[Some(0), None]), 50);
    }

    #[test]
    fn advance_without_a_selection_is_rejected() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[2, 1])).unwrap();

        assert_eq!(runner.advance(), Err(Error::Unanswered(0)));
        assert_eq!(runner.state(), AttemptState::InProgress);
        assert_eq!(runner.current_question_index(), 0);

        // Same rejection on the final question.
        runner.select_answer(2).unwrap();
        assert_eq!(runner.advance(), Ok(Advance::Next(1)));
        assert_eq!(runner.advance(), Err(Error::Unanswered(1)));
        assert_eq!(runner.state(), AttemptState::InProgress);
        assert_eq!(runner.current_question_index(), 1);
    }

    #[test]
    fn changing_a_selection_before_advancing_is_free() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[3])).unwrap();

        runner.select_answer(0).unwrap();
        runner.select_answer(3).unwrap();
        let outcome = run_through(&mut runner, &[3]);
        assert_eq!(outcome.score, 100);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut runner = QuizRunner::new();
        runner.start(quiz(&[0])).unwrap();

        assert_eq!(
            runner.select_answer(4),
            Err(Error::OptionOutOfRange { question: 0, option: 4 })
        );
        assert_eq!(runner.selection(), None);
    }

    #[test]
    fn transitions_are_guarded() {
        let mut runner = QuizRunner::new();
        assert_eq!(runner.select_answer(0), Err(Error::NotInProgress));
        assert_eq!(runner.advance(), Err(Error::NotInProgress));

        runner.start(quiz(&[0])).unwrap();
        assert_eq!(runner.start(quiz(&[0])), Err(Error::AttemptActive));

        run_through(&mut runner, &[0]);
        // Completed -> InProgress via a fresh start is allowed.
        runner.start(quiz(&[1, 1])).unwrap();
        assert_eq!(runner.state(), AttemptState::InProgress);
        assert_eq!(runner.current_question_index(), 0);
        assert_eq!(runner.selections(), &[None::<usize>, None]);
    }

    #[test]
    fn reset_returns_to_not_started_from_any_state() {
        let mut runner = QuizRunner::new();
        runner.reset();
        assert_eq!(runner.state(), AttemptState::NotStarted);

        runner.start(quiz(&[0, 1])).unwrap();
        runner.select_answer(0).unwrap();
        runner.reset();
        assert_eq!(runner.state(), AttemptState::NotStarted);
        assert!(runner.selections().is_empty());
        assert!(runner.current_question().is_none());
    }

    #[test]
    fn empty_quiz_cannot_be_started() {
        let mut runner = QuizRunner::new();
        let empty = Quiz {
            course_id: "c001".to_string(),
            questions: Vec::new(),
        };
        assert_eq!(runner.start(empty), Err(Error::EmptyQuiz));
        assert_eq!(runner.state(), AttemptState::NotStarted);
    }

    #[test]
    fn identical_call_sequences_reproduce_the_score() {
        let answers = [2, 0, 1, 3, 2];
        let mut scores = Vec::new();
        for _ in 0..3 {
            let mut runner = QuizRunner::new();
            runner.start(quiz(&[2, 1, 1, 0, 3])).unwrap();
            scores.push(run_through(&mut runner, &answers).score);
        }
        assert_eq!(scores[0], scores[1]);
        assert_eq!(scores[1], scores[2]);
    }
}
