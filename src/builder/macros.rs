//! Macros for declaring stories.

/// Build a [`Story`](crate::story::Story) from a title and step labels.
///
/// # Example
///
/// ```
/// use waypoint::story;
///
/// let story = story!("Eligibility Screening Process" => [
///     "Load applicant data",
///     "Review transcripts",
///     "Mark eligibility status",
/// ]);
///
/// assert_eq!(story.steps.len(), 3);
/// assert_eq!(story.completion_index(), 3);
/// ```
#[macro_export]
macro_rules! story {
    ($title:expr => [$($step:expr),* $(,)?]) => {
        $crate::story::Story {
            title: ::std::string::String::from($title),
            steps: ::std::vec![$(::std::string::String::from($step)),*],
        }
    };
}
