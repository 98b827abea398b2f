use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::entities::movie;
use crate::error::{AppError, AppResult};

/// Query parameters for the movie list endpoint, before bounds checking.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// Validated pagination parameters. `page` is 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageParams {
    pub page: u64,
    pub per_page: u64,
}

impl PageParams {
    pub const MIN_PER_PAGE: u64 = 1;
    pub const MAX_PER_PAGE: u64 = 50;

    pub fn total_pages(self, total_items: u64) -> u64 {
        total_items.div_ceil(self.per_page)
    }

    /// Page link reusing the request path, dropping any other query string.
    pub fn link(self, base_path: &str, page: u64) -> String {
        format!("{base_path}?page={page}&per_page={}", self.per_page)
    }
}

impl TryFrom<ListQuery> for PageParams {
    type Error = AppError;

    fn try_from(query: ListQuery) -> AppResult<Self> {
        if query.page < 1 {
            return Err(AppError::validation("page must be greater than or equal to 1"));
        }

        if !(Self::MIN_PER_PAGE..=Self::MAX_PER_PAGE).contains(&query.per_page) {
            return Err(AppError::validation(format!(
                "per_page must be between {} and {}",
                Self::MIN_PER_PAGE,
                Self::MAX_PER_PAGE
            )));
        }

        Ok(Self { page: query.page, per_page: query.per_page })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: i32,
    pub name: String,
    pub date: Date,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

impl TryFrom<movie::Model> for MovieDetail {
    type Error = AppError;

    fn try_from(model: movie::Model) -> AppResult<Self> {
        let date: Date = model.date.parse()?;

        Ok(Self {
            id: model.id,
            name: model.name,
            date,
            score: model.score,
            genre: model.genre,
            overview: model.overview,
            crew: model.crew,
            orig_title: model.orig_title,
            status: model.status,
            orig_lang: model.orig_lang,
            budget: model.budget,
            revenue: model.revenue,
            country: model.country,
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<MovieDetail>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}
