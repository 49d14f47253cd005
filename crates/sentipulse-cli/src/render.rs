//! Terminal rendering for the user and admin surfaces.
//!
//! Pure formatting plus `println!`-level output; no state lives here.

use colored::Colorize;
use sentipulse_app::views::ActivityView;
use sentipulse_client::dto::{
    HistoryOverview, SearchesResponse, StatisticsResponse, UsersResponse, VerifyReport,
};
use sentipulse_core::model::{
    AnalysisResult, Classification, NewsItem, SentimentBreakdown, Topic,
};

/// Header line shown once a session exists.
pub fn signed_in_line(username: &str) -> String {
    format!("Signed in as {username}")
}

/// Formats a backend timestamp like `Feb  3, 2025 10:00`, falling back to
/// the raw string when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| {
            chrono::DateTime::parse_from_rfc3339(raw).map(|datetime| datetime.naive_local())
        });
    match parsed {
        Ok(datetime) => datetime.format("%b %e, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncates display text, appending an ellipsis past `max` characters.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}…")
    } else {
        text.to_string()
    }
}

/// A horizontal bar proportional to a percentage, `width` cells at 100%.
pub fn sentiment_bar(value: f64, width: usize) -> String {
    let cells = ((value / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    "█".repeat(cells)
}

fn classification_colored(classification: Classification) -> colored::ColoredString {
    match classification {
        Classification::Positive => classification.label().green(),
        Classification::Negative => classification.label().red(),
        Classification::Neutral => classification.label().normal(),
    }
}

pub fn print_topics(topics: &[Topic]) {
    if topics.is_empty() {
        println!("No trending topics available; use `keyword <text>` instead.");
        return;
    }
    println!("{}", "Trending Topics".bold());
    for (index, topic) in topics.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            index + 1,
            topic.title,
            format!("({})", topic.category).dimmed()
        );
    }
}

pub fn print_news(items: &[NewsItem], selected: Option<i64>) {
    if items.is_empty() {
        println!("No news items loaded; run `fetch` first.");
        return;
    }
    println!("{}", format!("News Items ({} found)", items.len()).bold());
    for (index, item) in items.iter().enumerate() {
        let marker = if selected == Some(item.id) { "✓" } else { " " };
        let mut line = format!("  {marker} {:>2}. {}", index + 1, truncate(&item.text, 100));
        if let Some(source) = &item.source {
            line.push_str(&format!(" {}", format!("[{source}]").dimmed()));
        }
        println!("{line}");
    }
}

pub fn print_sentiment(sentiment: &SentimentBreakdown) {
    // Values are backend-computed percentages, shown exactly as received.
    println!(
        "  {:<9} {:>5}%  {}",
        "Positive".green(),
        sentiment.positive,
        sentiment_bar(sentiment.positive, 30).green()
    );
    println!(
        "  {:<9} {:>5}%  {}",
        "Neutral",
        sentiment.neutral,
        sentiment_bar(sentiment.neutral, 30)
    );
    println!(
        "  {:<9} {:>5}%  {}",
        "Negative".red(),
        sentiment.negative,
        sentiment_bar(sentiment.negative, 30).red()
    );
}

pub fn print_result(result: &AnalysisResult) {
    println!("{}", "Sentiment Analysis".bold());
    if let Some(topic) = &result.topic {
        if !topic.is_empty() {
            println!("  Topic: {topic}");
        }
    }
    print_sentiment(&result.sentiment);
    match result.confidence {
        Some(confidence) => println!(
            "  Classification: {} ({confidence}% confidence)",
            classification_colored(result.classification)
        ),
        None => println!(
            "  Classification: {}",
            classification_colored(result.classification)
        ),
    }
    if let Some(explanation) = &result.explanation {
        println!("\n  {}", "Explanation".bold());
        for line in explanation.lines() {
            println!("  {line}");
        }
    }
    if let Some(key_words) = &result.key_words {
        if !key_words.is_empty() {
            if !key_words.positive.is_empty() {
                println!("  Positive words: {}", key_words.positive.join(", ").green());
            }
            if !key_words.negative.is_empty() {
                println!("  Negative words: {}", key_words.negative.join(", ").red());
            }
        }
    }
    if let Some(full_text) = &result.full_text {
        println!("\n  {}", "Analyzed News Item".bold());
        println!("  {}", truncate(full_text, 300));
    }
}

pub fn print_history(overview: &HistoryOverview) {
    let stats = &overview.statistics;
    println!("{}", "History".bold());
    println!(
        "  Total searches: {}   Tweets analyzed: {}   Avg positive: {:.1}%   Avg negative: {:.1}%",
        stats.total_searches,
        stats.total_tweets_analyzed,
        stats.average_sentiment.positive,
        stats.average_sentiment.negative
    );
    if overview.searches.is_empty() {
        println!("  No search history yet. Start analyzing news items!");
        return;
    }
    for search in &overview.searches {
        let dominant = search.sentiment().dominant();
        println!(
            "  {}  {}  {}  P {:.1}% / N {:.1}% / Neg {:.1}%  ({} analyzed)",
            format_timestamp(&search.created_at).dimmed(),
            search.keyword.bold(),
            classification_colored(dominant),
            search.positive,
            search.neutral,
            search.negative,
            search.tweet_count
        );
    }
}

pub fn print_statistics(stats: &StatisticsResponse) {
    println!("{}", "Statistics".bold());
    println!("  Total users:           {}", stats.total_users);
    println!("  Searches / analyses:   {}", stats.total_searches);
    println!("  Activity log entries:  {}", stats.total_activities);
}

pub fn print_users(users: &UsersResponse) {
    println!("{}", "Users".bold());
    println!("  {:>4}  {:<20} {:<6} {}", "ID", "Username", "Admin", "Created");
    for user in &users.users {
        println!(
            "  {:>4}  {:<20} {:<6} {}",
            user.id,
            user.username,
            if user.admin() { "Yes" } else { "No" },
            format_timestamp(&user.created_at).dimmed()
        );
    }
}

pub fn print_searches(searches: &SearchesResponse) {
    println!("{}", "Searches / Analyses (last 500)".bold());
    println!(
        "  {:>4}  {:>7}  {:<24} {:<22} {}",
        "ID", "User", "Keyword", "Pos / Neu / Neg", "Created"
    );
    for search in &searches.searches {
        println!(
            "  {:>4}  {:>7}  {:<24} {:<22} {}",
            search.id,
            search
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "—".to_string()),
            truncate(&search.keyword, 22),
            format!(
                "{:.2} / {:.2} / {:.2}",
                search.positive, search.neutral, search.negative
            ),
            format_timestamp(&search.created_at).dimmed()
        );
    }
}

pub fn print_activity(view: &ActivityView) {
    let Some(page) = view.page() else {
        println!("No activity page loaded.");
        return;
    };
    println!("{}", "Activity Log".bold());
    if let Some(range) = view.range_label() {
        println!("  {}", range.dimmed());
    }
    for record in &page.activities {
        let payload = record
            .payload_text()
            .map(|text| truncate(&text, 80))
            .unwrap_or_else(|| "—".to_string());
        println!(
            "  {}  {:<22} {:<6} {:>6}  {}  {}",
            format_timestamp(&record.created_at).dimmed(),
            record.action.bold(),
            record.actor_type,
            record
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "—".to_string()),
            payload,
            record.ip_address.as_deref().unwrap_or("—").dimmed()
        );
    }
    let mut nav = Vec::new();
    if view.can_prev() {
        nav.push("prev");
    }
    if view.can_next() {
        nav.push("next");
    }
    if !nav.is_empty() {
        println!("  {}", format!("(activity {})", nav.join(" | ")).dimmed());
    }
}

pub fn print_verify(report: &VerifyReport) {
    println!("{}", "Storage Verification".bold());
    println!("  ok: {}", report.ok);
    println!("  users: {}", report.tables.users);
    println!("  searches: {}", report.tables.searches);
    println!("  activity_log: {}", report.tables.activity_log);
    if let Some(latest) = &report.latest_activity {
        println!("  latest activity: {latest}");
    }
}

pub fn print_error(message: &str) {
    println!("{}", message.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_line() {
        assert_eq!(signed_in_line("nisar"), "Signed in as nisar");
    }

    #[test]
    fn test_format_timestamp_parses_backend_format() {
        assert_eq!(
            format_timestamp("2025-02-03 09:05:00"),
            "Feb  3, 2025 09:05"
        );
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 80), "short");
        let long = "x".repeat(90);
        let shown = truncate(&long, 80);
        assert_eq!(shown.chars().count(), 81);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_sentiment_bar_is_proportional() {
        assert_eq!(sentiment_bar(100.0, 30).chars().count(), 30);
        assert_eq!(sentiment_bar(50.0, 30).chars().count(), 15);
        assert_eq!(sentiment_bar(0.0, 30), "");
    }
}
