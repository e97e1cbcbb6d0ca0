use std::sync::{mpsc, Arc};

use jobboard_core::{Effect, Msg, RequestId};
use jobboard_engine::{ApiError, ClientSettings, EngineEvent, EngineHandle, EventSink};
use jobboard_logging::{board_debug, board_info, board_warn};

use crate::convert;
use crate::session::Input;

/// Executes reducer effects on the engine. Results come back as `Msg`s on
/// the session's input channel.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, input_tx: mpsc::Sender<Input>) -> Result<Self, ApiError> {
        let sink = Arc::new(MsgSink { input_tx });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs { request_id, query } => {
                    let query = query.to_query_string();
                    board_info!("FetchJobs {} {}", request_id, query);
                    self.engine.search_jobs(request_id.0, query);
                }
                Effect::AskAssistant { message } => {
                    board_info!("AskAssistant message_len={}", message.len());
                    self.engine.ask_assistant(message);
                }
            }
        }
    }
}

struct MsgSink {
    input_tx: mpsc::Sender<Input>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if let Some(msg) = event_to_msg(event) {
            let _ = self.input_tx.send(Input::Msg(msg));
        }
    }
}

fn event_to_msg(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            if let Err(err) = &result {
                board_warn!("Search #{} failed: {}", request_id, err);
            }
            Some(Msg::SearchCompleted {
                request_id: RequestId(request_id),
                result: convert::jobs_result(result),
            })
        }
        EngineEvent::AssistantAnswered(result) => {
            if let Err(err) = &result {
                board_warn!("Assistant failed: {}", err);
            }
            Some(Msg::AssistantReplied(
                result
                    .map(convert::assistant_reply)
                    .map_err(|err| convert::fetch_failure(&err)),
            ))
        }
        other => {
            board_debug!("Ignoring event outside the browse session: {:?}", other);
            None
        }
    }
}
