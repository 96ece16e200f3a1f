// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The persisted watchlist.
//!
//! The watchlist is a JSON array of [`WatchlistEntry`] kept under a single
//! versioned key, in insertion order. A missing or unreadable value is
//! treated as an empty list.

use std::{collections::HashSet, path::Path};

use anyhow::Result;
use rusqlite::{Connection, TransactionBehavior};
use tracing::{info, warn};

use crate::{
    model::WatchlistEntry,
    storage::{self, get_item, set_item},
};

pub(crate) const WATCHLIST_KEY: &str = "watchlist_v1";

pub(crate) struct Watchlist {
    conn: Connection,
}

impl Watchlist {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: storage::init_db(path)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            conn: storage::init_memory_db().expect("in-memory storage"),
        }
    }

    /// All entries, in insertion order.
    pub(crate) fn entries(&self) -> Vec<WatchlistEntry> {
        match get_item(&self.conn, WATCHLIST_KEY) {
            Ok(raw) => parse_entries(raw.as_deref()),
            Err(e) => {
                warn!("Reading watchlist failed, treating as empty: {:#}", e);
                vec![]
            }
        }
    }

    pub(crate) fn ids(&self) -> HashSet<i64> {
        self.entries().into_iter().map(|e| e.id).collect()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: i64) -> bool {
        self.entries().iter().any(|e| e.id == id)
    }

    /// Removes `entry` if its id is present, otherwise appends it.
    ///
    /// Returns the new membership: `true` if the entry was added. The whole
    /// list is read, changed and written back inside one transaction.
    pub(crate) fn toggle(&mut self, entry: WatchlistEntry) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut entries = parse_entries(get_item(&tx, WATCHLIST_KEY)?.as_deref());

        let added = if entries.iter().any(|e| e.id == entry.id) {
            entries.retain(|e| e.id != entry.id);
            false
        } else {
            entries.push(entry);
            true
        };

        set_item(&tx, WATCHLIST_KEY, &serde_json::to_string(&entries)?)?;
        tx.commit()?;

        info!(added, count = entries.len(), "Watchlist updated");

        Ok(added)
    }
}

fn parse_entries(raw: Option<&str>) -> Vec<WatchlistEntry> {
    let Some(raw) = raw else {
        return vec![];
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Stored watchlist is corrupt, treating as empty: {}", e);
        vec![]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, title: &str) -> WatchlistEntry {
        WatchlistEntry {
            id,
            title: title.to_string(),
            poster_path: format!("https://static.tvmaze.com/{id}.jpg"),
            rating: 7.0,
        }
    }

    #[test]
    fn toggle_into_empty_watchlist_adds_then_removes() {
        let mut watchlist = Watchlist::in_memory();

        assert!(watchlist.toggle(entry(1, "Under the Dome")).unwrap());
        assert_eq!(watchlist.entries(), vec![entry(1, "Under the Dome")]);
        assert!(watchlist.contains(1));

        assert!(!watchlist.toggle(entry(1, "Under the Dome")).unwrap());
        assert!(watchlist.entries().is_empty());
        assert!(!watchlist.contains(1));
    }

    #[test]
    fn double_toggle_restores_original_contents() {
        let mut watchlist = Watchlist::in_memory();
        for id in 1..=5 {
            watchlist.toggle(entry(id, "show")).unwrap();
        }
        let before = watchlist.entries();

        for id in [3, 9] {
            watchlist.toggle(entry(id, "show")).unwrap();
            watchlist.toggle(entry(id, "show")).unwrap();
        }

        let after = watchlist.entries();
        assert_eq!(after.len(), before.len());
        assert_eq!(
            after.iter().map(|e| e.id).collect::<HashSet<_>>(),
            before.iter().map(|e| e.id).collect::<HashSet<_>>()
        );
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut watchlist = Watchlist::in_memory();
        for id in [30, 10, 20] {
            watchlist.toggle(entry(id, "show")).unwrap();
        }

        let ids: Vec<i64> = watchlist.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn removal_matches_on_id_only() {
        let mut watchlist = Watchlist::in_memory();
        watchlist.toggle(entry(4, "Arrow")).unwrap();

        let bare = WatchlistEntry {
            id: 4,
            title: String::new(),
            poster_path: String::new(),
            rating: 0.0,
        };
        assert!(!watchlist.toggle(bare).unwrap());
        assert!(watchlist.entries().is_empty());
    }

    #[test]
    fn corrupt_value_reads_as_empty_and_is_replaced_on_toggle() {
        let mut watchlist = Watchlist::in_memory();
        set_item(&watchlist.conn, WATCHLIST_KEY, "{not json").unwrap();

        assert!(watchlist.entries().is_empty());
        assert!(watchlist.ids().is_empty());

        assert!(watchlist.toggle(entry(2, "Glee")).unwrap());
        assert_eq!(watchlist.entries(), vec![entry(2, "Glee")]);
    }

    #[test]
    fn value_written_in_storage_format() {
        let mut watchlist = Watchlist::in_memory();
        watchlist.toggle(entry(1, "Under the Dome")).unwrap();

        let raw = get_item(&watchlist.conn, WATCHLIST_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["title"], "Under the Dome");
        assert_eq!(json[0]["vote_average"], 7.0);
    }
}
