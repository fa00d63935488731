// Snowflake-style 64-bit document ids: [timestamp:42][node:10][sequence:12].
// Ids sort by creation time, so an id-ordered collection scan doubles as a
// creation-order scan.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::{current_time_millis, DocId};

const NODE_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_NODE_ID: u16 = 1 << NODE_BITS;
const MAX_SEQUENCE: u64 = 1 << SEQUENCE_BITS;
const TIMESTAMP_MASK: u64 = (1 << 42) - 1;

#[derive(Debug)]
pub struct CmsIdGenerator {
    node_id: u16,
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl CmsIdGenerator {
    /// Create new ID generator for the given node
    pub fn new(node_id: u16) -> Self {
        assert!(
            node_id < MAX_NODE_ID,
            "Node ID must be less than {}",
            MAX_NODE_ID
        );

        Self {
            node_id,
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate the next unique document id
    pub fn next_id(&self) -> DocId {
        loop {
            let now = current_time_millis() as u64;

            let sequence = if now == self.last_timestamp.load(Ordering::Relaxed) {
                let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
                if seq >= MAX_SEQUENCE {
                    // Sequence exhausted for this millisecond
                    std::thread::sleep(std::time::Duration::from_millis(1));
                    continue;
                }
                seq
            } else {
                self.last_timestamp.store(now, Ordering::Relaxed);
                self.sequence.store(1, Ordering::Relaxed);
                0
            };

            let id = ((now & TIMESTAMP_MASK) << (NODE_BITS + SEQUENCE_BITS))
                | ((self.node_id as u64) << SEQUENCE_BITS)
                | sequence;
            return id as DocId;
        }
    }

    /// Extract the node ID from a document id
    pub fn extract_node_id(id: DocId) -> u16 {
        ((id as u64) >> SEQUENCE_BITS & (MAX_NODE_ID as u64 - 1)) as u16
    }

    /// Get this generator's node ID
    pub fn node_id(&self) -> u16 {
        self.node_id
    }
}
