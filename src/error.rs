//! Error management.

use derive_more::Display;

pub type Result<T> = std::result::Result<T, Err>;

#[derive(Debug, Display)]
pub enum Err {
    /// The league-membership file could not be read or parsed at setup time.
    #[display(fmt = "cannot load league: {}", _0)]
    ConfigLoad(String),
    /// An edge or count record failed to parse under the abort policy.
    #[display(fmt = "malformed record: {}", _0)]
    RecordParse(String),
    #[display(fmt = "io error: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for Err {}

impl From<std::io::Error> for Err {
    fn from(e: std::io::Error) -> Self {
        Err::Io(e)
    }
}
