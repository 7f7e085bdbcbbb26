//! Flat-file member roster.
//!
//! The roster is a UTF-8 text file with one `id|display_name|first_seen_at` record
//! per line, in insertion order. Every operation reads or rewrites the whole file;
//! there is no index. A missing file is an empty roster, and lines in older layouts
//! are carried through rewrites untouched (see [`RosterLine`]).
//!
//! All operations on one [`RosterStore`] are serialized by an internal lock, so the
//! gateway event handlers and the sync scheduler can share a single instance. A
//! sweep fetches live members before it reaches that lock, so it runs inside a
//! [`RosterSweep`] that remembers who left in the meantime.

pub mod line;
pub mod sweep;

#[cfg(test)]
mod test;

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub use line::RosterLine;
pub use sweep::RosterSweep;

use crate::error::roster::RosterError;
use crate::model::roster::{LiveMember, MemberRecord};

pub struct RosterStore {
    path: PathBuf,
    lock: Mutex<()>,
    departures: sweep::Departures,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            departures: sweep::Departures::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the ids of every parsable record in the roster.
    ///
    /// Lines without a separator, or whose id field is not a number, contribute
    /// nothing.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<u64>)`: Known member ids, empty if the file does not exist
    /// - `Err(RosterError::Io)`: The file exists but could not be read
    pub async fn load_known_ids(&self) -> Result<BTreeSet<u64>, RosterError> {
        let _guard = self.lock.lock().await;

        let contents = self.read().await?.unwrap_or_default();

        Ok(known_ids(&contents))
    }

    /// Gets every line of the roster in file order.
    pub async fn records(&self) -> Result<Vec<RosterLine>, RosterError> {
        let _guard = self.lock.lock().await;

        let contents = self.read().await?.unwrap_or_default();

        Ok(split_lines(&contents).map(RosterLine::parse).collect())
    }

    /// Starts a reconciliation sweep.
    ///
    /// Call this before fetching the live members handed to [`Self::reconcile`].
    pub fn begin_sweep(&self) -> RosterSweep<'_> {
        RosterSweep::begin(self)
    }

    /// Appends a record for every live member that is not in the roster yet
    ///
    /// Bot accounts are skipped, and so are members removed since `sweep` began.
    /// Members listed more than once (for example because they share several guilds
    /// with the bot) are written once, with the first display name seen. New records
    /// are written sorted by id and all carry the same `as_of` timestamp. Calling this
    /// again with the same members appends nothing.
    ///
    /// # Arguments
    /// - `sweep`: Sweep begun before `live_members` were fetched
    /// - `live_members`: Members currently present in the bot's guilds
    /// - `as_of`: Timestamp string stored as the first-seen time of new records
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of records appended, zero when the roster is up to date
    /// - `Err(RosterError::Io)`: The roster could not be read or appended to
    pub async fn reconcile(
        &self,
        sweep: &RosterSweep<'_>,
        live_members: &[LiveMember],
        as_of: &str,
    ) -> Result<usize, RosterError> {
        let _guard = self.lock.lock().await;

        let departed = sweep.departed();
        let contents = self.read().await?;
        let known = contents.as_deref().map(known_ids).unwrap_or_default();

        let mut missing: BTreeMap<u64, &str> = BTreeMap::new();
        for member in live_members.iter().filter(|member| {
            !member.is_bot && !known.contains(&member.id) && !departed.contains(&member.id)
        }) {
            missing.entry(member.id).or_insert(&member.display_name);
        }

        if missing.is_empty() {
            return Ok(0);
        }

        let records: Vec<MemberRecord> = missing
            .into_iter()
            .map(|(id, display_name)| MemberRecord::new(id, display_name, as_of))
            .collect();

        let needs_separator = contents.as_deref().is_some_and(lacks_final_newline);
        self.append_records(&records, needs_separator).await?;

        Ok(records.len())
    }

    /// Appends a single record without checking for an existing one with the same id.
    ///
    /// Creates the roster file if it does not exist.
    pub async fn append(
        &self,
        id: u64,
        display_name: &str,
        as_of: &str,
    ) -> Result<(), RosterError> {
        let _guard = self.lock.lock().await;

        let needs_separator = self
            .read()
            .await?
            .as_deref()
            .is_some_and(lacks_final_newline);

        self.append_records(&[MemberRecord::new(id, display_name, as_of)], needs_separator)
            .await
    }

    /// Removes every record of a member
    ///
    /// Rewrites the roster without the lines whose id matches. Lines that do not parse
    /// to an id are always kept verbatim. The new contents are written to a sibling
    /// `.tmp` file that then replaces the roster, so an interrupted rewrite leaves the
    /// previous roster intact. A symlinked roster is rewritten at its target, and the
    /// file keeps its permissions. Nothing is written when no line matches, and a
    /// missing roster file is not created.
    ///
    /// The departure is noted in every open [`RosterSweep`] even when the member had
    /// no record.
    ///
    /// # Arguments
    /// - `id`: Member id whose records should be removed
    ///
    /// # Returns
    /// - `Ok(Vec<RosterLine>)`: The removed lines, empty when the member had no record
    /// - `Err(RosterError::Io)`: The roster could not be read or rewritten
    pub async fn remove(&self, id: u64) -> Result<Vec<RosterLine>, RosterError> {
        let _guard = self.lock.lock().await;

        self.departures.record(id);

        let Some(contents) = self.read().await? else {
            return Ok(Vec::new());
        };

        let mut kept = String::with_capacity(contents.len());
        let mut removed = Vec::new();
        for line in split_lines(&contents).map(RosterLine::parse) {
            if line.id() == Some(id) {
                removed.push(line);
            } else {
                kept.push_str(line.raw());
                kept.push('\n');
            }
        }

        if removed.is_empty() {
            return Ok(removed);
        }

        self.replace(&kept).await?;

        Ok(removed)
    }

    /// Reads the whole roster, `None` when the file does not exist.
    async fn read(&self) -> Result<Option<String>, RosterError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::io(&self.path, e)),
        }
    }

    async fn append_records(
        &self,
        records: &[MemberRecord],
        needs_separator: bool,
    ) -> Result<(), RosterError> {
        let mut buf = String::new();
        if needs_separator {
            buf.push('\n');
        }
        for record in records {
            buf.push_str(&record.to_line());
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| RosterError::io(&self.path, e))?;

        file.write_all(buf.as_bytes())
            .await
            .map_err(|e| RosterError::io(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| RosterError::io(&self.path, e))?;

        Ok(())
    }

    async fn replace(&self, contents: &str) -> Result<(), RosterError> {
        let target = fs::canonicalize(&self.path)
            .await
            .map_err(|e| RosterError::io(&self.path, e))?;
        let permissions = fs::metadata(&target)
            .await
            .map_err(|e| RosterError::io(&target, e))?
            .permissions();
        let tmp_path = tmp_path(&target);

        fs::write(&tmp_path, contents)
            .await
            .map_err(|e| RosterError::io(&tmp_path, e))?;
        fs::set_permissions(&tmp_path, permissions)
            .await
            .map_err(|e| RosterError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &target)
            .await
            .map_err(|e| RosterError::io(&target, e))?;

        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split_terminator('\n')
}

fn known_ids(contents: &str) -> BTreeSet<u64> {
    split_lines(contents)
        .filter_map(|raw| RosterLine::parse(raw).id())
        .collect()
}

/// A hand-edited roster may lack a trailing newline; appends must not glue onto it.
fn lacks_final_newline(contents: &str) -> bool {
    !contents.is_empty() && !contents.ends_with('\n')
}
