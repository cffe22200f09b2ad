//! Renderable units produced by the response mappers and panel controllers

/// One renderable element of a panel's output
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Image { url: String, caption: Option<String> },
    Video { url: String },
    Text(String),
    Link { title: String, url: String },
}

impl DisplayItem {
    pub fn image(url: impl Into<String>, caption: Option<String>) -> Self {
        DisplayItem::Image {
            url: url.into(),
            caption,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DisplayItem::Text(text.into())
    }

    pub fn is_media(&self) -> bool {
        matches!(self, DisplayItem::Image { .. } | DisplayItem::Video { .. })
    }
}

/// Severity of a user-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS class used by the page renderer
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Warning => "notice notice-warning",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

/// A message shown above a panel's display items
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
