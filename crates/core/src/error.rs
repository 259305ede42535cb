// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use manning_domain::DomainError;

/// Errors that can occur while configuring the engine or reducing its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A matrix was summarized against a topology it was not built for.
    TopologyMismatch {
        /// Description of the first difference found.
        reason: String,
    },
    /// A policy key is not recognized.
    UnknownPolicy {
        /// The policy being configured.
        policy: &'static str,
        /// The rejected key.
        value: String,
    },
}

impl CoreError {
    /// Returns whether this error stems from malformed configuration.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            Self::DomainViolation(err) => err.is_configuration_error(),
            Self::TopologyMismatch { .. } | Self::UnknownPolicy { .. } => true,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TopologyMismatch { reason } => {
                write!(f, "Matrix does not match topology: {reason}")
            }
            Self::UnknownPolicy { policy, value } => {
                write!(f, "Unknown {policy} policy '{value}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
