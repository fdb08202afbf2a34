//! # API Error Types
//!
//! Every network operation fails in one of three ways:
//!
//! - **Rejected**: the server answered with a status other than the expected
//!   success status
//! - **Unreachable**: the request went out but no response came back
//! - **Malformed**: the request could not be built, or the success body could
//!   not be understood
//!
//! None of them are retried. Screens turn them into a line of text with
//! [`ApiError::user_message`] and stay interactive.

use thiserror::Error;

/// The operation an error came from. Selects the message prefix and the
/// fallback used when the server did not send a `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    ListProducts,
    PlaceOrder,
}

impl Operation {
    fn prefix(self) -> &'static str {
        match self {
            Operation::PlaceOrder => "Error placing order: ",
            _ => "Error: ",
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            Operation::Login => "Incorrect username or password.",
            Operation::Register => "Something went wrong during registration.",
            Operation::ListProducts => "Failed to fetch products.",
            Operation::PlaceOrder => "Something went wrong.",
        }
    }

    fn unreachable(self) -> &'static str {
        match self {
            Operation::PlaceOrder => "No response from server.",
            _ => "No response from server. Check your connection or the backend server.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("no response from server")]
    Unreachable,

    #[error("malformed request or response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Text shown on the screen that issued `operation`.
    pub fn user_message(&self, operation: Operation) -> String {
        let body = match self {
            ApiError::Rejected { detail, .. } => {
                detail.as_deref().unwrap_or_else(|| operation.fallback())
            }
            ApiError::Unreachable => operation.unreachable(),
            ApiError::Malformed(reason) => reason.as_str(),
        };
        format!("{}{}", operation.prefix(), body)
    }
}
