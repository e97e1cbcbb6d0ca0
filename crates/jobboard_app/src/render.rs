//! Plain-text rendering of the view model and of the sibling flows.

use std::fmt::Write;

use chrono::{DateTime, Local};
use jobboard_core::{AppViewModel, ChatMessage, ChatRole, JobListing, MatchBand, StatusTab};
use jobboard_engine::{ApplicationRecord, MatchResult, ResumeRecord};

const DESCRIPTION_PREVIEW_CHARS: usize = 160;

pub fn render_view(view: &AppViewModel) -> String {
    let mut out = String::new();
    let filters = &view.filters;
    let skills = if filters.skills.is_empty() {
        "none".to_string()
    } else {
        filters.skills.join(", ")
    };
    let _ = writeln!(
        out,
        "Filters: role={} | location={} | skills={} | date={} | type={} | mode={}",
        or_dash(&filters.what),
        or_dash(&filters.location),
        skills,
        filters.date_posted,
        filters.job_type,
        filters.work_mode,
    );
    if !view.draft.what.is_empty() || !view.draft.location.is_empty() {
        let _ = writeln!(
            out,
            "Search box: what={} | where={} (type `search` to run)",
            or_dash(&view.draft.what),
            or_dash(&view.draft.location),
        );
    }

    let prev = if view.can_go_prev { "prev" } else { "-" };
    let _ = writeln!(out, "Latest Jobs (Page {})  [{prev} | next]", view.page);

    if view.loading {
        let _ = writeln!(out, "Loading jobs...");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if view.shows_results() {
        if view.jobs.is_empty() {
            let _ = writeln!(out, "No jobs found. Try different filters.");
        }
        for job in &view.jobs {
            render_job(&mut out, job);
        }
    }
    if view.assistant_pending {
        let _ = writeln!(out, "Assistant is thinking...");
    }
    out
}

fn render_job(out: &mut String, job: &JobListing) {
    let _ = writeln!(out, "- [{}] {} @ {}", job.id, job.title, or_dash(&job.company));
    let _ = writeln!(
        out,
        "    {} | {} | {}",
        or_dash(&job.location),
        job.job_type_label(),
        job.posted_label()
    );
    if !job.description.is_empty() {
        let _ = writeln!(out, "    {}", preview(&job.description, DESCRIPTION_PREVIEW_CHARS));
    }
    if !job.apply_url.is_empty() {
        let _ = writeln!(out, "    Apply: {}", job.apply_url);
    }
}

/// Chat lines added since the caller last looked, as `(count, text)`.
pub fn render_new_chat(chat: &[ChatMessage], seen: usize) -> (usize, String) {
    let mut out = String::new();
    for message in chat.iter().skip(seen) {
        let speaker = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
        };
        let _ = writeln!(out, "[{speaker}] {}", message.text);
    }
    (chat.len(), out)
}

pub fn render_applications(records: &[ApplicationRecord], tab: StatusTab) -> String {
    let shown: Vec<&ApplicationRecord> = records
        .iter()
        .filter(|record| tab.matches(&record.status))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Total: {}", shown.len());
    if shown.is_empty() {
        let _ = writeln!(out, "No applications here yet.");
    }
    for record in shown {
        let _ = writeln!(
            out,
            "- [{}] {} @ {} ({})",
            record.id,
            record.title,
            or_dash(&record.company),
            or_dash(&record.location)
        );
        let _ = writeln!(
            out,
            "    Status: {} | Applied: {} | Last updated: {}",
            record.status,
            format_timestamp(record.applied_at.as_deref()),
            format_timestamp(record.updated_at.as_deref()),
        );
        if !record.apply_url.is_empty() {
            let _ = writeln!(out, "    {}", record.apply_url);
        }
    }
    out
}

pub fn render_resumes(records: &[ResumeRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        let _ = writeln!(out, "No resumes uploaded yet.");
    }
    for record in records {
        let _ = writeln!(
            out,
            "- [{}] {} (uploaded {})",
            record.id,
            record.original_name,
            format_timestamp(record.uploaded_at.as_deref())
        );
        if !record.file_url.is_empty() {
            let _ = writeln!(out, "    {}", record.file_url);
        }
    }
    out
}

pub fn render_match(result: &MatchResult) -> String {
    let band = match MatchBand::from_score(result.score) {
        MatchBand::Strong => "strong match",
        MatchBand::Fair => "fair match",
        MatchBand::Weak => "weak match",
    };
    let mut out = String::new();
    let _ = writeln!(out, "Match score: {}% ({band})", result.score);
    if !result.summary.is_empty() {
        let _ = writeln!(out, "{}", result.summary);
    }
    if result.missing_skills.is_empty() {
        let _ = writeln!(out, "No missing skills found");
    } else {
        let _ = writeln!(out, "Missing skills: {}", result.missing_skills.join(", "));
    }
    out
}

/// Server timestamps in local time. Missing is "Unknown"; anything that is
/// not RFC 3339 is shown as received.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return "Unknown".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{update, AppState, ApplicationStatus, Msg, RequestId};
    use pretty_assertions::assert_eq;

    fn loaded_view(jobs: Vec<JobListing>) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::Mounted);
        let (state, _) = update(
            state,
            Msg::SearchCompleted {
                request_id: RequestId(1),
                result: Ok(jobs),
            },
        );
        state.view()
    }

    fn application(id: &str, status: &str) -> ApplicationRecord {
        ApplicationRecord {
            id: id.to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            status: status.to_string(),
            applied_at: None,
            updated_at: None,
            apply_url: String::new(),
        }
    }

    #[test]
    fn empty_result_says_no_jobs_found() {
        let text = render_view(&loaded_view(Vec::new()));
        assert!(text.contains("No jobs found"));
        assert!(text.contains("Latest Jobs (Page 1)"));
    }

    #[test]
    fn loading_view_hides_the_list() {
        let (state, _) = update(AppState::new(), Msg::Mounted);
        let text = render_view(&state.view());
        assert!(text.contains("Loading jobs..."));
        assert!(!text.contains("No jobs found"));
    }

    #[test]
    fn job_card_uses_fallback_labels() {
        let job = JobListing {
            id: "1".to_string(),
            title: "Rust Developer".to_string(),
            company: "Acme".to_string(),
            location: "Pune".to_string(),
            ..JobListing::default()
        };
        let text = render_view(&loaded_view(vec![job]));
        assert!(text.contains("- [1] Rust Developer @ Acme"));
        assert!(text.contains("Pune | Full-time | Recently"));
    }

    #[test]
    fn new_chat_lines_are_rendered_once() {
        let chat = vec![
            ChatMessage::assistant("Hi"),
            ChatMessage::user("remote rust"),
            ChatMessage::assistant("Filters applied."),
        ];
        let (seen, text) = render_new_chat(&chat, 1);
        assert_eq!(seen, 3);
        assert_eq!(text, "[you] remote rust\n[assistant] Filters applied.\n");
        assert_eq!(render_new_chat(&chat, seen).1, "");
    }

    #[test]
    fn applications_are_filtered_by_tab() {
        let records = vec![
            application("1", "Applied"),
            application("2", "Interview"),
            application("3", "Ghosted"),
        ];

        let all = render_applications(&records, StatusTab::All);
        assert!(all.starts_with("Total: 3\n"));

        let interviews = render_applications(&records, StatusTab::Only(ApplicationStatus::Interview));
        assert!(interviews.starts_with("Total: 1\n"));
        assert!(interviews.contains("[2]"));
        assert!(!interviews.contains("[3]"));
    }

    #[test]
    fn missing_timestamps_are_unknown() {
        assert_eq!(format_timestamp(None), "Unknown");
        assert_eq!(format_timestamp(Some("")), "Unknown");
        assert_eq!(format_timestamp(Some("last tuesday")), "last tuesday");
        assert!(format_timestamp(Some("2024-03-01T12:00:00Z")).starts_with("2024-0"));
    }

    #[test]
    fn match_result_reports_band_and_missing_skills() {
        let text = render_match(&MatchResult {
            score: 72,
            summary: "Good overlap".to_string(),
            missing_skills: vec!["Kubernetes".to_string()],
        });
        assert_eq!(
            text,
            "Match score: 72% (strong match)\nGood overlap\nMissing skills: Kubernetes\n"
        );

        let none_missing = render_match(&MatchResult {
            score: 10,
            summary: String::new(),
            missing_skills: Vec::new(),
        });
        assert!(none_missing.contains("(weak match)"));
        assert!(none_missing.contains("No missing skills found"));
    }

    #[test]
    fn long_descriptions_are_cut_on_char_boundaries() {
        let text = "é".repeat(200);
        let cut = preview(&text, 10);
        assert_eq!(cut, format!("{}...", "é".repeat(10)));
    }
}
