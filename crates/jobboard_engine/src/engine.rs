use std::sync::{mpsc, Arc};
use std::thread;

use jobboard_logging::{board_debug, board_error};
use tokio_util::sync::CancellationToken;

use crate::{
    ApiError, ApplicationRecord, ApplicationStore, Assistant, AssistantAnswer, BackendClient,
    ClientSettings, JobRecord, JobSearch, MatchResult, MatchScorer, NewApplication, ResumeFile,
    ResumeRecord, ResumeStore,
};

/// Completion of one engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: u64,
        result: Result<Vec<JobRecord>, ApiError>,
    },
    AssistantAnswered(Result<AssistantAnswer, ApiError>),
    ApplicationsListed(Result<Vec<ApplicationRecord>, ApiError>),
    ApplicationSaved(Result<(), ApiError>),
    StatusUpdated {
        id: String,
        result: Result<(), ApiError>,
    },
    ApplicationRemoved {
        id: String,
        result: Result<(), ApiError>,
    },
    ResumesListed(Result<Vec<ResumeRecord>, ApiError>),
    ResumeUploaded(Result<(), ApiError>),
    MatchScored(Result<MatchResult, ApiError>),
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Search { request_id: u64, query: String },
    Ask { message: String },
    ListApplications,
    SaveApplication(NewApplication),
    UpdateStatus { id: String, status: String },
    RemoveApplication { id: String },
    ListResumes,
    UploadResume(Option<ResumeFile>),
    ScoreMatch { job_title: String, job_description: String },
}

/// Runs backend calls on a background tokio runtime and reports results to
/// an [`EventSink`]. Dropping the handle stops the runtime and abandons any
/// call still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, ApiError> {
        let client = Arc::new(BackendClient::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            // Only the newest search may report back.
            let mut current_search: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                let token = match &command {
                    EngineCommand::Search { request_id, .. } => {
                        if let Some(previous) = current_search.take() {
                            board_debug!("Search #{} supersedes the one in flight", request_id);
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        current_search = Some(token.clone());
                        token
                    }
                    _ => CancellationToken::new(),
                };
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let outcome = token
                        .run_until_cancelled(handle_command(&client, command))
                        .await;
                    if let Some(event) = outcome {
                        sink.emit(event);
                    }
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn search_jobs(&self, request_id: u64, query: impl Into<String>) {
        self.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        });
    }

    pub fn ask_assistant(&self, message: impl Into<String>) {
        self.send(EngineCommand::Ask {
            message: message.into(),
        });
    }

    pub fn list_applications(&self) {
        self.send(EngineCommand::ListApplications);
    }

    pub fn save_application(&self, application: NewApplication) {
        self.send(EngineCommand::SaveApplication(application));
    }

    pub fn update_status(&self, id: impl Into<String>, status: impl Into<String>) {
        self.send(EngineCommand::UpdateStatus {
            id: id.into(),
            status: status.into(),
        });
    }

    pub fn remove_application(&self, id: impl Into<String>) {
        self.send(EngineCommand::RemoveApplication { id: id.into() });
    }

    pub fn list_resumes(&self) {
        self.send(EngineCommand::ListResumes);
    }

    pub fn upload_resume(&self, file: Option<ResumeFile>) {
        self.send(EngineCommand::UploadResume(file));
    }

    pub fn score_match(&self, job_title: impl Into<String>, job_description: impl Into<String>) {
        self.send(EngineCommand::ScoreMatch {
            job_title: job_title.into(),
            job_description: job_description.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            board_error!("Engine runtime is gone; command dropped");
        }
    }
}

async fn handle_command(client: &BackendClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search { request_id, query } => EngineEvent::SearchCompleted {
            request_id,
            result: client.search(&query).await,
        },
        EngineCommand::Ask { message } => {
            EngineEvent::AssistantAnswered(client.ask(&message).await)
        }
        EngineCommand::ListApplications => {
            EngineEvent::ApplicationsListed(ApplicationStore::list(client).await)
        }
        EngineCommand::SaveApplication(application) => {
            EngineEvent::ApplicationSaved(client.save(&application).await)
        }
        EngineCommand::UpdateStatus { id, status } => {
            let result = client.update_status(&id, &status).await;
            EngineEvent::StatusUpdated { id, result }
        }
        EngineCommand::RemoveApplication { id } => {
            let result = client.remove(&id).await;
            EngineEvent::ApplicationRemoved { id, result }
        }
        EngineCommand::ListResumes => EngineEvent::ResumesListed(ResumeStore::list(client).await),
        EngineCommand::UploadResume(file) => {
            EngineEvent::ResumeUploaded(client.upload(file.as_ref()).await)
        }
        EngineCommand::ScoreMatch {
            job_title,
            job_description,
        } => EngineEvent::MatchScored(client.score(&job_title, &job_description).await),
    }
}
