// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations.
///
/// These are returned to the code pushing into a [`Subject`](crate::Subject), distinct
/// from the [`RippleError`](crate::RippleError)s that travel through streams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has completed or errored and accepts no further notifications.
    #[error("Subject is closed")]
    Closed,
}
