//! Wishlist collaborator: the set of products a shopper marked as liked.

use parking_lot::RwLock;
use std::collections::HashSet;

use crate::catalog::ProductId;

pub trait Wishlist: Send + Sync {
    fn is_favorited(&self, id: &ProductId) -> bool;

    /// Flips membership of `id` and returns the new membership.
    fn toggle_favorite(&self, id: &ProductId) -> bool;

    fn count(&self) -> usize;
}

/// Session-scoped wishlist held in memory.
#[derive(Debug, Default)]
pub struct InMemoryWishlist {
    items: RwLock<HashSet<ProductId>>,
}

impl InMemoryWishlist {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wishlist for InMemoryWishlist {
    fn is_favorited(&self, id: &ProductId) -> bool {
        self.items.read().contains(id)
    }

    fn toggle_favorite(&self, id: &ProductId) -> bool {
        let mut items = self.items.write();
        if items.remove(id) {
            false
        } else {
            items.insert(id.clone());
            true
        }
    }

    fn count(&self) -> usize {
        self.items.read().len()
    }
}
