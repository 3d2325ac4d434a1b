//! Prompt construction for the review summary.

/// Build the summary prompt for a list of reviews.
///
/// Reviews are embedded as a JSON array so quoting and empty lists stay unambiguous.
pub fn build_prompt(reviews: &[String]) -> String {
    let review_list = serde_json::to_string(reviews).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You are a helpful e-commerce assistant. Analyze the following product reviews and return:\n\
         \n\
         - Pros (as a bullet list)\n\
         - Cons (as a bullet list)\n\
         - Verdict: One-line buying advice for shoppers\n\
         \n\
         Reviews: {}\n",
        review_list
    )
}
