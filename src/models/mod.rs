pub mod category;
pub mod loaders;
pub mod question;

pub use category::Category;
pub use loaders::{load_seed_file, parse_seed, SeedData, SeedQuestion};
pub use question::{NewQuestion, Question, QuestionDraft};
