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

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::{collect_genres, filter_by_genre},
    tasks::{ResultsRequest, TaskContext},
};

// The listing service has no genre endpoint, so genres are gathered from
// the first catalog page.
const GENRE_SAMPLE_PAGE: u32 = 0;

pub(super) fn fetch_genres(ctx: &TaskContext) -> Result<()> {
    let outcome = ctx
        .source
        .list_shows(GENRE_SAMPLE_PAGE)
        .map(|shows| collect_genres(&shows));

    ctx.event_tx.send(AppEvent::GenresLoaded(outcome))?;

    Ok(())
}

pub(super) fn load_results(ctx: &TaskContext, token: u64, request: ResultsRequest) -> Result<()> {
    let outcome = match request {
        ResultsRequest::Search { query } => ctx.source.search_shows(&query),
        ResultsRequest::Discover { page_index, genre } => {
            ctx.source.list_shows(page_index).map(|shows| match genre {
                Some(genre) => filter_by_genre(shows, &genre),
                None => shows,
            })
        }
    };

    ctx.event_tx.send(AppEvent::ResultsLoaded { token, outcome })?;

    Ok(())
}

pub(super) fn open_details(ctx: &TaskContext, id: i64) -> Result<()> {
    let outcome = ctx.source.show_details(id);
    ctx.event_tx.send(AppEvent::DetailsLoaded(outcome))?;

    Ok(())
}
