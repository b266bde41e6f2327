use thiserror::Error;

/// Errors raised while binding a widget or loading its menu
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Container element '{0}' not found")]
    ContainerNotFound(String),

    #[error("Container element '{0}' is already bound to a menu widget")]
    AlreadyBound(String),

    #[error("Invalid menu location '{0}'")]
    InvalidLocation(String),

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch menu from {location}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Menu request to {location} returned status {status}")]
    Status {
        location: String,
        status: u16,
    },

    #[error("Failed to read menu from {location}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse menu from {location}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MenuError {
    /// Message including every underlying cause, outermost first
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_not_found_message() {
        let err = MenuError::ContainerNotFound("content_container".into());
        assert_eq!(err.to_string(), "Container element 'content_container' not found");
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MenuError::Parse { location: "menu.json".into(), source };
        assert_eq!(err.to_string(), "Failed to parse menu from menu.json");
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.describe().starts_with("Failed to parse menu from menu.json: EOF"));
    }
}
