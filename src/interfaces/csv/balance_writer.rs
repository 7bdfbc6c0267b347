use crate::domain::balance::PrefundedAccountBalanceEntry;
use crate::error::Result;
use std::io::Write;

/// Writes validated balance entries as CSV.
///
/// Columns follow the entry's fields: `id,available_balance,currency,name`.
/// Balances are written exactly as Bridge reported them.
pub struct BalanceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BalanceWriter<W> {
    /// Creates a new `BalanceWriter` over any `Write` sink (e.g. stdout or a file).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every entry and flushes. The header row is only emitted when at
    /// least one entry exists.
    pub fn write_entries(&mut self, entries: &[PrefundedAccountBalanceEntry]) -> Result<()> {
        for entry in entries {
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
