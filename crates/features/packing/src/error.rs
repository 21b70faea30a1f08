use std::borrow::Cow;

/// Errors of the packing slice.
#[packwise_derive::packwise_error]
pub enum PackingError {
    /// The order quantity is missing, not an integer, below one or above the limit.
    #[error("Invalid order{}: {message}", format_context(.context))]
    InvalidOrder { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The pack catalog cannot serve any order. Fatal at startup.
    #[error("Invalid pack catalog{}: {message}", format_context(.context))]
    Catalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The packing configuration is unusable. Fatal at startup.
    #[error("Invalid packing configuration{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal packing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PackingError {
    pub(crate) fn invalid_order(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidOrder { message: message.into(), context: None }
    }

    pub(crate) fn catalog(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Catalog { message: message.into(), context: None }
    }

    #[cfg(feature = "server")]
    pub(crate) fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal { message: message.into(), context: None }
    }

    /// Whether the caller, not the service, is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidOrder { .. })
    }
}
