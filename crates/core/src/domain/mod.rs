mod pagination;
mod quiz;

pub use pagination::{QUESTIONS_PER_PAGE, page_window};
pub use quiz::draw_question;
