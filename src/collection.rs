use crate::error::TreeResult;
use crate::rbtree::RedBlackTree;
use crate::tree::OrderedTree;

/// Ordered multiset contract shared by the balanced and unbalanced trees, for
/// callers (loaders, command loops) that do not care which one they hold.
pub trait SortedCollection<T: Ord> {
    fn insert(&mut self, value: T);

    /// Inserts `value` if present.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`](crate::TreeError::InvalidArgument) for
    /// `None`.
    fn try_insert(&mut self, value: Option<T>) -> TreeResult<()>;

    fn contains(&self, value: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

impl<T: Ord> SortedCollection<T> for OrderedTree<T> {
    fn insert(&mut self, value: T) {
        OrderedTree::insert(self, value);
    }

    fn try_insert(&mut self, value: Option<T>) -> TreeResult<()> {
        OrderedTree::try_insert(self, value).map(|_| ())
    }

    fn contains(&self, value: &T) -> bool {
        OrderedTree::contains(self, value)
    }

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }

    fn is_empty(&self) -> bool {
        OrderedTree::is_empty(self)
    }

    fn clear(&mut self) {
        OrderedTree::clear(self);
    }
}

impl<T: Ord> SortedCollection<T> for RedBlackTree<T> {
    fn insert(&mut self, value: T) {
        RedBlackTree::insert(self, value);
    }

    fn try_insert(&mut self, value: Option<T>) -> TreeResult<()> {
        RedBlackTree::try_insert(self, value).map(|_| ())
    }

    fn contains(&self, value: &T) -> bool {
        RedBlackTree::contains(self, value)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackTree::is_empty(self)
    }

    fn clear(&mut self) {
        RedBlackTree::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::SortedCollection;
    use crate::{OrderedTree, RedBlackTree, TreeError};

    fn load<C: SortedCollection<u32>>(collection: &mut C, records: &[Option<u32>]) -> usize {
        records
            .iter()
            .filter(|record| collection.try_insert(**record).is_ok())
            .count()
    }

    fn exercise<C: SortedCollection<u32> + Default>() {
        let mut collection = C::default();
        assert!(collection.is_empty());

        let loaded = load(&mut collection, &[Some(3), None, Some(1), Some(3)]);
        assert_eq!(loaded, 3);
        assert_eq!(collection.len(), 3);
        assert!(collection.contains(&3));
        assert!(!collection.contains(&2));
        assert_eq!(collection.try_insert(None), Err(TreeError::InvalidArgument));

        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    pub fn both_trees_honor_the_contract() {
        exercise::<OrderedTree<u32>>();
        exercise::<RedBlackTree<u32>>();
    }
}
