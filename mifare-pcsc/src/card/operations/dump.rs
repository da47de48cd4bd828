// mifare-pcsc/src/card/operations/dump.rs

use crate::card::Card;
use crate::constants::{BLOCK_LEN, MAX_BLOCK};
use crate::types::{BlockNumber, KeyType};
use crate::{Error, ErrorKind, Result};

/// Ordered list of block reads and the keys to try for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpPlan {
    /// Blocks to read, in order
    pub blocks: Vec<u8>,
    /// Key used for every authentication
    pub key_type: KeyType,
    /// Reader key slots, tried in order until one authenticates.
    pub key_slots: Vec<u8>,
    /// Bytes per read (0x10, 0x20 or 0x30)
    pub read_len: usize,
}

impl DumpPlan {
    /// Every data block of a 1K card (sectors 0 to 15, trailers skipped),
    /// one block per read.
    pub fn data_blocks(key_type: KeyType, key_slots: Vec<u8>) -> Self {
        Self {
            blocks: (0..=MAX_BLOCK)
                .filter_map(|b| BlockNumber::new(b).ok())
                .filter(|b| !b.is_trailer())
                .map(|b| b.as_u8())
                .collect(),
            key_type,
            key_slots,
            read_len: BLOCK_LEN,
        }
    }
}

/// Outcome for one planned block.
#[derive(Debug)]
pub struct BlockRead {
    /// Block address from the plan
    pub block: u8,
    /// Data read, or why it could not be
    pub result: Result<Vec<u8>>,
}

/// Iterator over the reads of a `DumpPlan`.
///
/// A failed block is yielded and the walk moves on. A transport failure,
/// or a plan without key slots, is yielded once and ends the iteration.
pub struct DumpIterator<'a> {
    card: &'a mut Card,
    plan: &'a DumpPlan,
    next_index: usize,
    finished: bool,
}

impl<'a> DumpIterator<'a> {
    /// Start walking `plan` on `card`.
    pub fn new(card: &'a mut Card, plan: &'a DumpPlan) -> Self {
        Self {
            card,
            plan,
            next_index: 0,
            finished: false,
        }
    }

    fn authenticate_any(&mut self, block: u8) -> Result<()> {
        let plan = self.plan;
        let mut last_err = Error::NoKeySlots;
        for &slot in &plan.key_slots {
            match self.card.authenticate(block, plan.key_type, slot) {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == ErrorKind::Protocol => {
                    log::warn!(
                        "block {:#04x}: authentication with slot {:#04x} failed: {}",
                        block,
                        slot,
                        e
                    );
                    last_err = e;
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_err)
    }

    fn read_one(&mut self, block: u8) -> Result<Vec<u8>> {
        self.authenticate_any(block)?;
        self.card.read_block(block, self.plan.read_len)
    }
}

impl<'a> Iterator for DumpIterator<'a> {
    type Item = BlockRead;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let block = *self.plan.blocks.get(self.next_index)?;
        self.next_index += 1;

        let result = self.read_one(block);
        if let Err(e) = &result {
            if e.kind() == ErrorKind::Transport || matches!(e, Error::NoKeySlots) {
                self.finished = true;
            }
            log::warn!("block {:#04x}: {}", block, e);
        }
        Some(BlockRead { block, result })
    }
}
