use super::{Record, RecordCollection, RecordRef};
use crate::errors::DomainError;

/// Integer position over a [`RecordCollection`].
///
/// The cursor does not borrow the collection, so the collection may be
/// mutated between steps. Positions then refer to whatever record currently
/// occupies that slot; records can be skipped or visited twice, but reads
/// past the end fail with [`DomainError::IndexOutOfBounds`] rather than
/// panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    #[inline]
    pub fn key(&self) -> usize {
        self.position
    }

    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn valid<R: Record + ?Sized>(&self, collection: &RecordCollection<R>) -> bool {
        self.position < collection.len()
    }

    pub fn current<'a, R: Record + ?Sized>(
        &self,
        collection: &'a RecordCollection<R>,
    ) -> Result<&'a RecordRef<R>, DomainError> {
        collection.get_record_by_index(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Host(&'static str);

    impl Record for Host {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn collection_of(names: &[&'static str]) -> RecordCollection<Host> {
        names
            .iter()
            .map(|&n| Rc::new(RefCell::new(Host(n))))
            .collect()
    }

    #[test]
    fn test_walks_in_insertion_order() {
        let collection = collection_of(&["a", "b", "c"]);
        let mut cursor = collection.cursor();
        let mut seen = Vec::new();

        while cursor.valid(&collection) {
            seen.push(cursor.current(&collection).unwrap().borrow().0);
            cursor.advance();
        }

        assert_eq!(seen, vec!["a", "b", "c"]);
        assert!(cursor.current(&collection).is_err());

        cursor.rewind();
        assert_eq!(cursor.key(), 0);
        assert_eq!(cursor.current(&collection).unwrap().borrow().0, "a");
    }

    #[test]
    fn test_mutation_between_steps_skips_not_panics() {
        let mut collection = collection_of(&["a", "b", "c"]);
        let mut cursor = Cursor::new();

        let first = Rc::clone(cursor.current(&collection).unwrap());
        cursor.advance();
        collection.remove(&first).unwrap();

        // "b" shifted into slot 0 and is skipped.
        assert_eq!(cursor.current(&collection).unwrap().borrow().0, "c");

        collection.clear();
        assert!(!cursor.valid(&collection));
        assert!(matches!(
            cursor.current(&collection),
            Err(DomainError::IndexOutOfBounds { index: 1, len: 0 })
        ));
    }
}
