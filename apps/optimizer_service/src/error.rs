use thiserror::Error;

/// Startup configuration failures. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Помилка завантаження OpenAI API ключа: {0}. Переконайтесь, що змінна середовища OPENAI_API_KEY задана.")]
    MissingCredential(String),

    #[error("Invalid configuration value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
