mod filter_answers;

pub use filter_answers::{BlockedAnswer, FilterAnswersUseCase};
