use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

/// A transient notification. Auto-expires; several may coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}
