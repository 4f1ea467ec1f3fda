use std::fmt;
use thiserror::Error;

/// 每個遠端動作對應一個固定的失敗訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadFarms,
    LoadFarm,
    CreateFarm,
    UpdateFarm,
    DeleteFarm,
    LoadFarmer,
    LoadFarmers,
    CreateFarmer,
    UpdateFarmer,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::LoadFarms => "Failed to load farms",
            Operation::LoadFarm => "Failed to load farm",
            Operation::CreateFarm => "Failed to create farm",
            Operation::UpdateFarm => "Failed to update farm",
            Operation::DeleteFarm => "Failed to delete farm",
            Operation::LoadFarmer => "Failed to load farmer",
            Operation::LoadFarmers => "Failed to load farmers",
            Operation::CreateFarmer => "Failed to create farmer",
            Operation::UpdateFarmer => "Failed to update farmer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Farm,
    Farmer,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Farm => write!(f, "Farm"),
            Resource::Farmer => write!(f, "Farmer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    NotFound,
    Server,
    Decode,
    Configuration,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{}", .operation.failure_message())]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// 請求本身無法建立（例如金鑰不是合法的 header 值），沒有送出
    #[error("{}", .operation.failure_message())]
    InvalidRequest {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", .operation.failure_message())]
    Status { operation: Operation, status: u16 },

    #[error("{}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} not found")]
    NotFound { resource: Resource, id: i64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    /// 失敗所屬的遠端動作（設定錯誤則沒有）
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ClientError::Network { operation, .. }
            | ClientError::InvalidRequest { operation, .. }
            | ClientError::Status { operation, .. }
            | ClientError::Decode { operation, .. } => Some(*operation),
            ClientError::NotFound {
                resource: Resource::Farm,
                ..
            } => Some(Operation::DeleteFarm),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Network { .. } => ErrorCategory::Network,
            ClientError::Status { .. } => ErrorCategory::Server,
            ClientError::Decode { .. } | ClientError::SerializationError(_) => {
                ErrorCategory::Decode
            }
            ClientError::NotFound { .. } => ErrorCategory::NotFound,
            ClientError::InvalidRequest { .. }
            | ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::IoError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the API server is running and AGRI_API_URL points at it",
            ErrorCategory::NotFound => "The record may already have been deleted; refresh the list",
            ErrorCategory::Server => "Check the API key and the request fields, then try again",
            ErrorCategory::Decode => "The server answered with an unexpected body; check the API version",
            ErrorCategory::Configuration => "Fix the configuration file or environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_static_message() {
        let err = ClientError::Status {
            operation: Operation::UpdateFarmer,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to update farmer");
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.operation(), Some(Operation::UpdateFarmer));
    }

    #[test]
    fn test_not_found_message() {
        let err = ClientError::NotFound {
            resource: Resource::Farm,
            id: 42,
        };
        assert_eq!(err.to_string(), "Farm not found");
        assert!(err.is_not_found());
        assert_eq!(err.operation(), Some(Operation::DeleteFarm));
    }

    #[test]
    fn test_config_errors_have_no_operation() {
        let err = ClientError::ConfigError {
            message: "bad file".to_string(),
        };
        assert_eq!(err.operation(), None);
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
