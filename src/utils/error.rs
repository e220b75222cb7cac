use thiserror::Error;

/// 使用者看到的通用錯誤訊息，不區分錯誤種類
pub const GENERIC_LOAD_ERROR: &str = "Could not load projects. Check projects.json path/format.";

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("Failed to load projects.json ({status})")]
    Fetch { status: u16 },

    #[error("Request for project data failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Project data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    Parse,
    Config,
}

impl CardsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardsError::Fetch { .. } | CardsError::Transport(_) | CardsError::Io(_) => {
                ErrorCategory::Fetch
            }
            CardsError::Parse(_) => ErrorCategory::Parse,
            CardsError::Config { .. } | CardsError::InvalidConfigValue { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// 給終端使用者的訊息；載入錯誤一律使用同一句
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Fetch | ErrorCategory::Parse => GENERIC_LOAD_ERROR.to_string(),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardsError::Fetch { status: 404 } => "Check that projects.json exists at the source location",
            CardsError::Fetch { .. } | CardsError::Transport(_) => {
                "Check the source URL and that the server is reachable"
            }
            CardsError::Io(_) => "Check that the source directory exists and is readable",
            CardsError::Parse(_) => "Validate projects.json with a JSON linter",
            CardsError::Config { .. } | CardsError::InvalidConfigValue { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CardsError>;
