//! Sequence classification flags

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// The pattern families a finite numeric sequence can match.
    ///
    /// This is a multi-label classification, not a partition: the
    /// analyzer runs independent tests and a sequence may carry several
    /// bits at once (a constant-step sequence whose successive moduli
    /// also happen to agree is both `ARITHMETIC` and `GEOMETRIC`).
    /// `SequenceKind::empty()` means no pattern was detected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SequenceKind: u8 {
        const ARITHMETIC = 1 << 0;
        const GEOMETRIC  = 1 << 1;
        const FIBONACCI  = 1 << 2;
        const TRIANGULAR = 1 << 3;
    }
}
