pub mod pagination;
pub mod question_service;
pub mod quiz_selector;
pub mod search;
pub mod validation;

pub use pagination::{paginate, Page, PageRequest};
pub use question_service::{
    CategoryQuestions, Created, Deleted, QuestionListing, QuestionService, SearchResults,
};
pub use quiz_selector::{next_question, QuizCategory, QuizOutcome, QuizRequest, RandomSource};
pub use search::{filter_questions, search, term_matcher};
pub use validation::{parse_question_id, validate_category_filter, validate_new_question};
