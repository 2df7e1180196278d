pub mod category_repository;
pub mod question_repository;

pub use category_repository::{CategoryRecord, CategoryRepository, SeaOrmCategoryRepository};
pub use question_repository::{
    NewQuestion, QuestionRecord, QuestionRepository, SeaOrmQuestionRepository,
};
