use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum InputError {
    #[error("no number supplied on standard input")]
    Missing,
    #[error("`{0}` is not an integer")]
    Malformed(String),
}
