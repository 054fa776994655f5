use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiscoreError {
    #[error("dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("language model load error: {0}")]
    ModelLoad(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input directory does not exist: {0}")]
    InputDirNotFound(String),

    #[error("input directory cannot be read: {0}")]
    InputDirUnreadable(String),

    #[error("unreadable source file {path}: {reason}")]
    UnreadableSource { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LexiscoreError>;
