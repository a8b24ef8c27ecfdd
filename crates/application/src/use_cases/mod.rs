pub mod dns;

pub use dns::{BlockedAnswer, FilterAnswersUseCase};
