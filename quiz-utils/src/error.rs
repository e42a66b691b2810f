#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    InvalidCatalog(String),
    #[error("no quiz attempt is in progress")]
    NotInProgress,
    #[error("a quiz attempt is already in progress")]
    AttemptActive,
    #[error("quiz has no questions")]
    EmptyQuiz,
    #[error("question {0} has no selected option")]
    Unanswered(usize),
    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}
