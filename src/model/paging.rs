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

//! Page arithmetic for the result grids.
//!
//! The watchlist is paginated locally. Remote listings report a fixed page
//! count, because the listing service does not expose one.

/// Number of watchlist entries shown per page.
pub(crate) const WATCHLIST_PAGE_SIZE: usize = 20;

/// Page count reported for the discover and search listings.
pub(crate) const REMOTE_TOTAL_PAGES: u32 = 10;

/// Number of pages needed to show `count` items, never less than one.
pub(crate) fn total_pages(count: usize, page_size: usize) -> u32 {
    count.div_ceil(page_size).max(1) as u32
}

/// Returns the items on the 1-based `page`, the half-open range
/// `[(page - 1) * page_size, page * page_size)` clipped to `items`.
pub(crate) fn page_slice<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let page = page.max(1) as usize;
    let start = ((page - 1) * page_size).min(items.len());
    let end = (page * page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(total_pages(0, WATCHLIST_PAGE_SIZE), 1);
        assert_eq!(total_pages(1, WATCHLIST_PAGE_SIZE), 1);
        assert_eq!(total_pages(20, WATCHLIST_PAGE_SIZE), 1);
        assert_eq!(total_pages(21, WATCHLIST_PAGE_SIZE), 2);
        assert_eq!(total_pages(25, WATCHLIST_PAGE_SIZE), 2);
        assert_eq!(total_pages(40, WATCHLIST_PAGE_SIZE), 2);
        assert_eq!(total_pages(41, WATCHLIST_PAGE_SIZE), 3);
    }

    #[test]
    fn twenty_five_entries_split_across_two_pages() {
        let entries: Vec<usize> = (0..25).collect();

        assert_eq!(page_slice(&entries, 1, WATCHLIST_PAGE_SIZE), &entries[0..20]);
        assert_eq!(page_slice(&entries, 2, WATCHLIST_PAGE_SIZE), &entries[20..25]);
    }

    #[test]
    fn every_page_is_the_expected_half_open_slice() {
        for count in [0usize, 1, 19, 20, 21, 39, 40, 41, 100] {
            let items: Vec<usize> = (0..count).collect();
            let pages = total_pages(count, WATCHLIST_PAGE_SIZE);
            let mut seen = vec![];
            for page in 1..=pages {
                let slice = page_slice(&items, page, WATCHLIST_PAGE_SIZE);
                let start = (page as usize - 1) * WATCHLIST_PAGE_SIZE;
                assert_eq!(slice.first().copied(), items.get(start).copied());
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items);
        }
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 3, WATCHLIST_PAGE_SIZE).is_empty());
    }
}
