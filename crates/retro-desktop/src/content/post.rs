//! Blog post submission

use crate::clock::Timestamp;

/// Status line text while a post is in flight
pub const SUBMITTING: &str = "Submitting content";
/// Status line text once the endpoint answered
pub const SUBMITTED: &str = "Done!";
/// Status line text when no posting endpoint is configured
pub const POSTING_DISABLED: &str = "Posting is not available here.";
/// Status line text when the request could not be sent
pub const SUBMIT_FAILED: &str = "Could not submit. Try again later.";

/// A post written in the editor, stamped with the local time of submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub year: String,
    pub month: String,
    pub date: String,
    pub time: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, at: &Timestamp) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            year: at.year.to_string(),
            month: format!("{:02}", at.month),
            date: format!("{:02}", at.day),
            time: format!("{:02}:{:02}", at.hour, at.minute),
        }
    }

    /// Form fields in submission order, ready for url-encoding
    pub fn form_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("year", self.year.as_str()),
            ("month", self.month.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("body", self.body.as_str()),
        ]
    }
}
