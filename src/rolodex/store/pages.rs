use crate::record::Record;
use std::slice::Chunks;

/// One page of records, in insertion order.
pub type Chunk<'a> = &'a [Record];

/// Lazy fixed-size paging over a book's records.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], size: usize) -> Self {
        Self {
            chunks: records.chunks(size.max(1)),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
