use crate::options::MachineType;
use crate::stats::Tally;
use hashbrown::HashSet;

/// Number of fields in a roster row:
/// machine ID, user ID, application ID, machine type, comment.
pub const FIELD_COUNT: usize = 5;

const MACHINE_ID: usize = 0;
const USER_ID: usize = 1;
const APP_ID: usize = 2;
const MACHINE_TYPE: usize = 3;

/// Why a row was left out of the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Row does not have exactly [`FIELD_COUNT`] fields.
    Incomplete,
    /// Row belongs to another application.
    OtherApp,
    /// Machine ID was already accepted earlier in the pass.
    Duplicate,
}

/// Single-pass accumulator for roster rows.
///
/// Rows are judged in the order they are pushed, so the first row carrying a
/// given machine ID is the one that counts.
#[derive(Debug)]
pub struct RecordParser<'a> {
    target_app_id: &'a str,
    seen: HashSet<String>,
    tally: Tally,
}

impl<'a> RecordParser<'a> {
    pub fn new(target_app_id: &'a str) -> Self {
        Self {
            target_app_id,
            seen: HashSet::new(),
            tally: Tally::new(),
        }
    }

    /// Feed one row. Returns the reason when the row is excluded.
    pub fn push<S: AsRef<str>>(&mut self, record: &[S]) -> Result<(), Skip> {
        if record.len() != FIELD_COUNT {
            log::debug!("skipping row with {} field(s)", record.len());
            return Err(Skip::Incomplete);
        }

        let app_id = record[APP_ID].as_ref();
        if app_id != self.target_app_id {
            log::info!("skipping app id {app_id}");
            return Err(Skip::OtherApp);
        }

        let machine_id = record[MACHINE_ID].as_ref();
        if !self.seen.insert(machine_id.to_string()) {
            log::info!("Computer ID {machine_id} already processed so skip it");
            return Err(Skip::Duplicate);
        }

        let kind = MachineType::normalize(record[MACHINE_TYPE].as_ref());
        self.tally.record(record[USER_ID].as_ref(), kind);
        Ok(())
    }

    pub fn finish(self) -> Tally {
        self.tally
    }
}

/// Build the per-user tally for `target_app_id` from raw rows.
///
/// Malformed, foreign and duplicate rows are dropped; nothing here fails.
pub fn parse<I, R, S>(records: I, target_app_id: &str) -> Tally
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut parser = RecordParser::new(target_app_id);
    for record in records {
        // 除外理由はログ済み
        let _ = parser.push(record.as_ref());
    }
    parser.finish()
}
