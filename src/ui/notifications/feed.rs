#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub read: bool,
}

/// Notifications shown behind the header bell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn welcome() -> Self {
        let unread = |title: &str, body: &str| Notification {
            title: title.to_string(),
            body: body.to_string(),
            read: false,
        };
        Self::new(vec![
            unread("Welcome to Ok-E-store", "Browse the banner for this week's deals."),
            unread("Summer Sale is live", "Up to 50% off selected items."),
            unread("Free shipping", "Orders over $50 ship free."),
        ])
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }
}
