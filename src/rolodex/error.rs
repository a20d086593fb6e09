use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Invalid phone number format. Please enter 10 digits without spaces or separators.")]
    InvalidPhoneFormat,

    #[error("Invalid birthday date. Please enter date format dd-mm-yyyy")]
    InvalidBirthdayFormat,

    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
