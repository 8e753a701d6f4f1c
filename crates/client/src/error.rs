// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the client library.

/// Client-side errors.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be
    /// read.
    Transport(reqwest::Error),
    /// The server answered with a non-2xx status.
    Api {
        /// The HTTP status code.
        status: u16,
        /// The server's error message, or "Request failed" when the
        /// body carried none.
        message: String,
    },
    /// The response body did not match the expected shape.
    UnexpectedResponse(String),
    /// An operation was attempted without a session token.
    NotAuthenticated,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Transport error: {err}"),
            Self::Api { status, message } => {
                write!(f, "API error ({status}): {message}")
            }
            Self::UnexpectedResponse(message) => {
                write!(f, "Unexpected response: {message}")
            }
            Self::NotAuthenticated => write!(f, "Not authenticated: no session token"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
