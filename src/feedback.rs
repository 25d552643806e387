// Guest feedback after a stay
use std::fmt;
use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::guest::Guest;
use crate::Shared;

pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

#[derive(Debug)]
pub struct Feedback {
    id: u32,
    guest: Shared<Guest>,
    rating: u8,
    comments: String,
}

impl Feedback {
    pub fn new(
        id: u32,
        guest: Shared<Guest>,
        rating: i64,
        comments: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            guest,
            rating: validate_rating(rating)?,
            comments: comments.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn guest(&self) -> &Shared<Guest> {
        &self.guest
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn set_rating(&mut self, rating: i64) -> Result<(), ValidationError> {
        self.rating = validate_rating(rating)?;
        debug!(feedback_id = self.id, rating = self.rating, "Rating updated");
        Ok(())
    }
}

pub fn validate_rating(rating: i64) -> Result<u8, ValidationError> {
    if !RATING_RANGE.contains(&rating) {
        let err = ValidationError::RatingOutOfRange(rating);
        warn!("{}", err);
        return Err(err);
    }
    Ok(rating as u8)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Feedback ID: {}, Guest: {}, Rating: {}, Comments: {}",
            self.id,
            self.guest.read().name(),
            self.rating,
            self.comments
        )
    }
}
