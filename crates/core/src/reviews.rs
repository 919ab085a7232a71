//! Review parsing and pagination (`/api/commentList`)
//!
//! The store serves reviews in pages of [`REVIEW_PAGE_SIZE`]. [`ReviewPages`]
//! turns a page fetcher into a lazy iterator that requests one page at a
//! time, only when its buffer runs dry.

use std::collections::VecDeque;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Review;
use crate::utils::{lenient_string, parse_review_flag, parse_vendor_datetime};

/// Reviews per comment list page.
pub const REVIEW_PAGE_SIZE: usize = 15;

/// Comment list response
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    #[serde(default)]
    pub comment_list: Option<Vec<Comment>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub login_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub create_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub update_date: Option<String>,
    /// 0 to 10
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating_value_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_comment_yn: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
}

impl Comment {
    fn into_review(self) -> Result<Review> {
        let rating = self.rating_value_number.unwrap_or_default();
        let stars = rating.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
            field: "ratingValueNumber",
            value: rating.clone(),
        })?;

        Ok(Review {
            text: self.comment_text.unwrap_or_default(),
            user: self.login_id.unwrap_or_default(),
            created_date: parse_vendor_datetime(
                "createDate",
                self.create_date.as_deref().unwrap_or_default(),
            )?,
            updated_date: parse_vendor_datetime(
                "updateDate",
                self.update_date.as_deref().unwrap_or_default(),
            )?,
            stars: stars / 2.0,
            developer_responded: parse_review_flag(
                self.seller_comment_yn.as_deref().unwrap_or_default(),
            ),
            user_id: self.user_id.unwrap_or_default(),
        })
    }
}

/// Parses one comment list page, in server order.
pub fn parse_review_page(json: &str) -> Result<Vec<Review>> {
    let response: CommentListResponse = serde_json::from_str(json)?;
    response
        .comment_list
        .unwrap_or_default()
        .into_iter()
        .map(Comment::into_review)
        .collect()
}

/// `startNum` of a 1-based page.
pub fn page_start_index(page: usize) -> usize {
    (page.saturating_sub(1)) * REVIEW_PAGE_SIZE + 1
}

/// Observable state of a [`ReviewPages`] iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// The buffer is empty; the next call fetches a page.
    FetchingPage,
    /// The next call yields a buffered review.
    YieldingBuffered,
    Done,
}

/// Lazy review sequence over a page fetcher
///
/// `fetch_page` receives the 1-based page index. A page shorter than
/// [`REVIEW_PAGE_SIZE`] is the last one. A fetch error is yielded once and
/// ends the sequence.
pub struct ReviewPages<F> {
    fetch_page: F,
    max_reviews: Option<usize>,
    buffer: VecDeque<Review>,
    next_page: usize,
    last_page_reached: bool,
    count: usize,
    done: bool,
}

impl<F> ReviewPages<F> {
    /// `max_reviews` of `None` or `<= 0` means every review.
    pub fn new(fetch_page: F, max_reviews: Option<i64>) -> Self {
        Self {
            fetch_page,
            max_reviews: max_reviews
                .filter(|max| *max > 0)
                .and_then(|max| usize::try_from(max).ok()),
            buffer: VecDeque::with_capacity(REVIEW_PAGE_SIZE),
            next_page: 1,
            last_page_reached: false,
            count: 0,
            done: false,
        }
    }

    /// Reviews yielded so far.
    pub fn yielded(&self) -> usize {
        self.count
    }

    /// Pages requested so far.
    pub fn pages_fetched(&self) -> usize {
        self.next_page - 1
    }

    pub fn state(&self) -> PagerState {
        if self.done || self.limit_reached() || (self.buffer.is_empty() && self.last_page_reached) {
            PagerState::Done
        } else if self.buffer.is_empty() {
            PagerState::FetchingPage
        } else {
            PagerState::YieldingBuffered
        }
    }

    fn limit_reached(&self) -> bool {
        self.max_reviews.is_some_and(|max| self.count >= max)
    }
}

impl<F, E> Iterator for ReviewPages<F>
where
    F: FnMut(usize) -> std::result::Result<Vec<Review>, E>,
{
    type Item = std::result::Result<Review, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state() {
                PagerState::Done => {
                    self.done = true;
                    return None;
                }
                PagerState::YieldingBuffered => {
                    let review = self.buffer.pop_front()?;
                    self.count += 1;
                    return Some(Ok(review));
                }
                PagerState::FetchingPage => {
                    let page = self.next_page;
                    self.next_page += 1;
                    match (self.fetch_page)(page) {
                        Ok(reviews) => {
                            if reviews.len() < REVIEW_PAGE_SIZE {
                                self.last_page_reached = true;
                            }
                            self.buffer.extend(reviews);
                        }
                        Err(err) => {
                            self.done = true;
                            return Some(Err(err));
                        }
                    }
                }
            }
        }
    }
}
