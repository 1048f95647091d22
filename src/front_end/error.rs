use super::RecordRule;

pub type Result<T> = std::result::Result<T, pest::error::Error<RecordRule>>;
