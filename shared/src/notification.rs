//! Transient status messages shown as toasts.

/// Severity of a notification; selects the toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    /// Completed action.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

impl NotifyLevel {
    /// Lower-case name, used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyLevel::Success => "success",
            NotifyLevel::Info => "info",
            NotifyLevel::Warning => "warning",
            NotifyLevel::Error => "error",
        }
    }
}

/// Corner of the viewport the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPosition {
    /// Top right corner.
    TopRight,
    /// Bottom right corner.
    #[default]
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
}

/// Display options of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    /// Where the stack is anchored.
    pub position: ToastPosition,
    /// Show a close button.
    pub close_button: bool,
    /// Show a countdown bar.
    pub progress_bar: bool,
    /// Insert new toasts above older ones.
    pub newest_on_top: bool,
    /// Auto-dismiss delay in milliseconds.
    pub timeout_ms: u32,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomRight,
            close_button: true,
            progress_bar: true,
            newest_on_top: true,
            timeout_ms: 1500,
        }
    }
}

/// A message waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Bold first line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity.
    pub level: NotifyLevel,
    /// How the toast is displayed.
    pub options: ToastOptions,
}

impl Notification {
    /// A notification with default display options.
    pub fn new(level: NotifyLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
            options: ToastOptions::default(),
        }
    }

    /// Shorthand for a [`NotifyLevel::Success`] notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotifyLevel::Success, title, message)
    }
}

/// A notification placed in the toast stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique within one page session; used to dismiss it.
    pub id: u64,
    /// What to show.
    pub notification: Notification,
}

/// Ordered toast stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Adds a notification and returns the id of its toast.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            notification,
        };
        if toast.notification.options.newest_on_top {
            self.toasts.insert(0, toast);
        } else {
            self.toasts.push(toast);
        }
        self.next_id
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Toasts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
