//! Poll types for the Stroomp platform.
//!
//! Provides viewer polls attached to streams, with vote tallying.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// One selectable poll option with its vote count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    /// Option id, unique within the poll.
    pub id: String,

    /// Display text.
    pub text: String,

    /// Current vote count.
    pub votes: u64,
}

/// A viewer poll attached to a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// Unique poll id.
    pub id: String,

    /// The question being asked.
    pub question: String,

    /// Selectable options.
    pub options: Vec<PollOption>,

    /// Whether the poll is accepting votes.
    pub is_active: bool,

    /// Stream group this poll belongs to.
    pub stream_id: String,

    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Records a vote for the given option.
    ///
    /// Returns false when the poll is inactive or the option is unknown;
    /// the tally is unchanged in that case.
    pub fn record_vote(&mut self, option_id: &str) -> bool {
        if !self.is_active {
            return false;
        }

        match self.options.iter_mut().find(|o| o.id == option_id) {
            Some(option) => {
                option.votes += 1;
                true
            }
            None => false,
        }
    }

    /// Returns the total number of votes across all options.
    #[must_use]
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }
}

/// Request to create a poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    /// Stream group the poll belongs to.
    pub stream_id: String,

    /// The question being asked.
    pub question: String,

    /// Option display texts (at least two).
    pub options: Vec<String>,
}

impl CreatePollRequest {
    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidPoll` if the question is blank or fewer
    /// than two options are given.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.question.trim().is_empty() {
            return Err(SdkError::InvalidPoll("question is required".to_string()));
        }
        if self.options.len() < 2 {
            return Err(SdkError::InvalidPoll(
                "a poll needs at least two options".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request to vote on a poll option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePollRequest {
    /// Option id to vote for.
    pub option_id: String,
}
