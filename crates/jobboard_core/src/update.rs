use crate::{AppState, Effect, FilterState, Msg, PageStep};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every message that searches returns exactly one `FetchJobs`, built from
/// the state after the message was applied.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.reset_page();
            vec![state.begin_search()]
        }
        Msg::DraftWhatChanged(text) => {
            state.draft_mut().what = text;
            Vec::new()
        }
        Msg::DraftWhereChanged(text) => {
            state.draft_mut().location = text;
            Vec::new()
        }
        Msg::CommitSearch => {
            state.commit_draft();
            state.reset_page();
            vec![state.begin_search()]
        }
        Msg::SetWhat(text) => {
            state.filters_mut().what = text;
            Vec::new()
        }
        Msg::SetWhere(text) => {
            state.filters_mut().location = text;
            Vec::new()
        }
        Msg::SetDatePosted(value) => {
            state.filters_mut().date_posted = value;
            Vec::new()
        }
        Msg::SetJobType(value) => {
            state.filters_mut().job_type = value;
            Vec::new()
        }
        Msg::SetWorkMode(value) => {
            state.filters_mut().work_mode = value;
            Vec::new()
        }
        Msg::ToggleSkill(skill) => {
            state.filters_mut().toggle_skill(&skill);
            Vec::new()
        }
        Msg::ApplyFilters => {
            state.reset_page();
            vec![state.begin_search()]
        }
        Msg::ClearFilters => {
            // Sidebar clear uses explicit terms; the assistant's clear (via
            // ExternalMerge) goes back to the empty mount defaults.
            state.reset_filters(FilterState::sidebar_baseline());
            state.reset_page();
            vec![state.begin_search()]
        }
        Msg::ExternalMerge(patch) => {
            state.merge_filters(patch);
            state.reset_page();
            vec![state.begin_search()]
        }
        Msg::PageDelta(PageStep::Next) => {
            state.next_page();
            vec![state.begin_search()]
        }
        Msg::PageDelta(PageStep::Prev) => {
            if state.prev_page() {
                vec![state.begin_search()]
            } else {
                Vec::new()
            }
        }
        Msg::SearchCompleted { request_id, result } => {
            state.complete_search(request_id, result);
            Vec::new()
        }
        Msg::AssistantSubmitted(text) => match state.submit_to_assistant(&text) {
            Some(message) => vec![Effect::AskAssistant { message }],
            None => Vec::new(),
        },
        Msg::AssistantReplied(result) => match state.receive_assistant_reply(result) {
            Some(patch) => {
                state.merge_filters(patch);
                state.reset_page();
                vec![state.begin_search()]
            }
            None => Vec::new(),
        },
    };

    (state, effects)
}
