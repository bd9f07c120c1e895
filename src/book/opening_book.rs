//! In-memory Polyglot opening book.
//!
//! The book owns the raw byte buffer of a `.bin` book file read in full by
//! the host. Records are sorted ascending by key with runs of equal keys;
//! lookup is a binary search that then walks backward to the first record
//! of the run. Parsed records are cached per index on first access, and
//! the cache tolerates concurrent readers.

use std::sync::OnceLock;

use crate::book::book_record::{BookRecord, BOOK_RECORD_SIZE};

pub struct OpeningBook {
    data: Vec<u8>,
    cache: Vec<OnceLock<BookRecord>>,
}

impl OpeningBook {
    /// Wrap a book buffer. Trailing bytes beyond the last whole record are
    /// ignored.
    pub fn new(data: Vec<u8>) -> Self {
        let count = data.len() / BOOK_RECORD_SIZE;
        Self {
            data,
            cache: (0..count).map(|_| OnceLock::new()).collect(),
        }
    }

    #[inline]
    pub fn record_count(&self) -> usize {
        self.cache.len()
    }

    /// Parse (or fetch the cached parse of) record `index`.
    pub fn record(&self, index: usize) -> BookRecord {
        *self.cache[index].get_or_init(|| {
            let offset = index * BOOK_RECORD_SIZE;
            let mut bytes = [0u8; BOOK_RECORD_SIZE];
            bytes.copy_from_slice(&self.data[offset..offset + BOOK_RECORD_SIZE]);
            BookRecord::from_bytes(&bytes)
        })
    }

    /// Index of the first record whose key equals `key`, or `None`.
    pub fn find_first_hash(&self, key: u64) -> Option<usize> {
        let count = self.record_count();
        if count < 2 {
            return None;
        }

        let first_key = self.record(0).key;
        let last_key = self.record(count - 1).key;
        if key < first_key || key > last_key {
            return None;
        }
        if key == first_key {
            return Some(0);
        }

        let mut found = count - 1;
        if key != last_key {
            let mut low = 0;
            let mut high = count - 1;
            loop {
                // Both endpoints have already compared unequal, so a
                // two-wide range means the key is absent.
                if high - low <= 1 {
                    return None;
                }
                let mid = (low + high) / 2;
                let mid_key = self.record(mid).key;
                if mid_key == key {
                    found = mid;
                    break;
                }
                if mid_key < key {
                    low = mid;
                } else {
                    high = mid;
                }
            }
        }

        // Walk back over the run of equal keys to its first record.
        while found > 0 && self.record(found - 1).key == key {
            found -= 1;
        }
        Some(found)
    }

    /// All records keyed by `key`, in book order; empty when absent.
    pub fn get_all_moves(&self, key: u64) -> Vec<BookRecord> {
        let Some(first) = self.find_first_hash(key) else {
            return Vec::new();
        };

        let mut records = Vec::new();
        let mut index = first;
        while index < self.record_count() {
            let record = self.record(index);
            if record.key != key {
                break;
            }
            records.push(record);
            index += 1;
        }
        records
    }
}
