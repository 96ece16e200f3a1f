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

//! TVmaze response types for deserialization.
//!
//! These structures mirror the parts of the TVmaze JSON show record that the
//! browser displays. Every field other than the id and name may be missing
//! or `null`.

use serde::Deserialize;

use crate::{
    model::{ShowDetails, ShowSummary},
    util::format::{premiere_year, strip_markup},
};

const NO_SUMMARY: &str = "No summary available.";

#[derive(Debug, Deserialize)]
pub(crate) struct TvMazeShow {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(rename = "type", default)]
    pub(crate) kind: Option<String>,
    #[serde(default)]
    pub(crate) genres: Vec<String>,
    #[serde(default)]
    pub(crate) premiered: Option<String>,
    #[serde(default)]
    pub(crate) rating: Option<TvMazeRating>,
    #[serde(default)]
    pub(crate) image: Option<TvMazeImage>,
    /// Long-form description in HTML.
    #[serde(default)]
    pub(crate) summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TvMazeRating {
    pub(crate) average: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TvMazeImage {
    pub(crate) medium: Option<String>,
}

/// One entry of the search endpoint's response, wrapping the matched show.
#[derive(Debug, Deserialize)]
pub(crate) struct TvMazeSearchHit {
    pub(crate) show: TvMazeShow,
}

impl TvMazeShow {
    fn average_rating(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|r| r.average)
    }

    /// The medium poster, used by the grid, the modal and the watchlist alike.
    fn poster_url(&self) -> String {
        self.image
            .as_ref()
            .and_then(|i| i.medium.clone())
            .unwrap_or_default()
    }

    pub(crate) fn into_summary(self) -> ShowSummary {
        let poster_url = self.poster_url();

        ShowSummary {
            id: self.id,
            average_rating: self.average_rating(),
            premiere_year: premiere_year(self.premiered.as_deref()),
            poster_url,
            title: self.name,
            genres: self.genres,
        }
    }

    pub(crate) fn into_details(self) -> ShowDetails {
        let poster_url = self.poster_url();

        let summary = self
            .summary
            .as_deref()
            .map(strip_markup)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());

        ShowDetails {
            id: self.id,
            average_rating: self.average_rating(),
            premiere_year: premiere_year(self.premiered.as_deref()),
            kind: self.kind.unwrap_or_default(),
            poster_url,
            summary,
            title: self.name,
            genres: self.genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::WatchlistEntry;

    const SHOW_JSON: &str = r#"{
        "id": 1,
        "url": "https://www.tvmaze.com/shows/1/under-the-dome",
        "name": "Under the Dome",
        "type": "Scripted",
        "language": "English",
        "genres": ["Drama", "Science-Fiction", "Thriller"],
        "status": "Ended",
        "premiered": "2013-06-24",
        "rating": {"average": 6.5},
        "image": {
            "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/81/202627.jpg",
            "original": "https://static.tvmaze.com/uploads/images/original_untouched/81/202627.jpg"
        },
        "summary": "<p><b>Under the Dome</b> is the story of a small town.</p>"
    }"#;

    #[test]
    fn show_record_converts_to_summary() {
        let show: TvMazeShow = serde_json::from_str(SHOW_JSON).unwrap();
        let summary = show.into_summary();

        assert_eq!(summary.id, 1);
        assert_eq!(summary.title, "Under the Dome");
        assert_eq!(summary.premiere_year, "2013");
        assert_eq!(summary.average_rating, Some(6.5));
        assert_eq!(summary.genres, vec!["Drama", "Science-Fiction", "Thriller"]);
        assert!(summary.poster_url.contains("medium_portrait"));
    }

    #[test]
    fn show_record_converts_to_details_with_plain_summary() {
        let show: TvMazeShow = serde_json::from_str(SHOW_JSON).unwrap();
        let details = show.into_details();

        assert_eq!(details.kind, "Scripted");
        assert_eq!(details.summary, "Under the Dome is the story of a small town.");
        assert!(details.poster_url.contains("medium_portrait"));
    }

    #[test]
    fn summary_markup_entities_are_decoded() {
        let json = r#"{
            "id": 5,
            "name": "Law & Order",
            "summary": "<p>Law &amp; Order&#39;s &quot;best&quot; season</p>"
        }"#;
        let show: TvMazeShow = serde_json::from_str(json).unwrap();

        assert_eq!(show.into_details().summary, "Law & Order's \"best\" season");
    }

    #[test]
    fn watchlist_poster_is_the_same_from_grid_and_modal() {
        let from_grid = serde_json::from_str::<TvMazeShow>(SHOW_JSON).unwrap().into_summary();
        let from_modal = serde_json::from_str::<TvMazeShow>(SHOW_JSON).unwrap().into_details();

        let grid_entry = WatchlistEntry::from(&from_grid);
        let modal_entry = WatchlistEntry::from(&from_modal);

        assert_eq!(grid_entry, modal_entry);
        assert!(grid_entry.poster_path.contains("medium_portrait"));
    }

    #[test]
    fn null_fields_degrade_to_empty_values() {
        let json = r#"{
            "id": 42,
            "name": "Untitled",
            "genres": [],
            "premiered": null,
            "rating": {"average": null},
            "image": null,
            "summary": null
        }"#;
        let show: TvMazeShow = serde_json::from_str(json).unwrap();
        let details = show.into_details();

        assert_eq!(details.premiere_year, "");
        assert_eq!(details.average_rating, None);
        assert_eq!(details.poster_url, "");
        assert_eq!(details.summary, NO_SUMMARY);
    }

    #[test]
    fn search_hits_unwrap_to_shows() {
        let json = format!(r#"[{{"score": 0.91, "show": {}}}]"#, SHOW_JSON);
        let hits: Vec<TvMazeSearchHit> = serde_json::from_str(&json).unwrap();

        let shows: Vec<ShowSummary> = hits.into_iter().map(|h| h.show.into_summary()).collect();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].title, "Under the Dome");
        assert_eq!(shows[0].id, 1);
    }
}
