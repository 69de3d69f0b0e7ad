//! Sequence number / primary term pair
//!
//! Elasticsearch versions documents for optimistic concurrency control with a
//! `(_seq_no, _primary_term)` pair returned on every read and sent back with
//! conditional writes. Properties of this type are filled from response
//! metadata, never from the document source, which is why their descriptors
//! are neither readable nor writable.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqNoPrimaryTermError {
    #[error("seq_no should not be negative, but it's {0}")]
    NegativeSeqNo(i64),
    #[error("primary_term should be positive, but it's {0}")]
    NonPositivePrimaryTerm(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeqNoPrimaryTerm {
    seq_no: i64,
    primary_term: i64,
}

impl SeqNoPrimaryTerm {
    pub fn new(seq_no: i64, primary_term: i64) -> Result<Self, SeqNoPrimaryTermError> {
        if seq_no < 0 {
            return Err(SeqNoPrimaryTermError::NegativeSeqNo(seq_no));
        }
        if primary_term <= 0 {
            return Err(SeqNoPrimaryTermError::NonPositivePrimaryTerm(primary_term));
        }
        Ok(Self { seq_no, primary_term })
    }

    pub fn seq_no(&self) -> i64 {
        self.seq_no
    }

    pub fn primary_term(&self) -> i64 {
        self.primary_term
    }
}

impl fmt::Display for SeqNoPrimaryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeqNoPrimaryTerm{{seqNo={}, primaryTerm={}}}", self.seq_no, self.primary_term)
    }
}
