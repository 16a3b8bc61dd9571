/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_TTL_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Removes the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_after_dismissal() {
        let mut q = ToastQueue::new();
        let a = q.success("one");
        let b = q.error("two");
        assert_ne!(a, b);
        assert!(q.dismiss(a));
        let c = q.success("three");
        assert_ne!(a, c);
        assert_eq!(q.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn dismiss_twice_is_harmless() {
        let mut q = ToastQueue::new();
        let id = q.error("oops");
        assert!(q.dismiss(id));
        assert!(!q.dismiss(id));
        assert!(q.is_empty());
    }

    #[test]
    fn counts_by_kind() {
        let mut q = ToastQueue::new();
        q.success("a");
        q.error("b");
        q.success("c");
        assert_eq!(q.len(), 3);
        assert_eq!(q.count(ToastKind::Success), 2);
        assert_eq!(q.count(ToastKind::Error), 1);
    }
}
