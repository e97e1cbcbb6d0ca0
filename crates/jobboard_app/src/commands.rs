//! One-shot subcommands for applications, resumes and match scoring.
//!
//! Each sends a single engine command and blocks for its event. Failures
//! come back as the same user-facing text the browse session shows.

use std::path::Path;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::{bail, Context};
use jobboard_core::{ApplicationStatus, FailureContext, StatusTab};
use jobboard_engine::{
    ApiError, ChannelEventSink, ClientSettings, EngineEvent, EngineHandle, NewApplication,
    ResumeFile,
};
use jobboard_logging::board_info;

use crate::convert::failure_text;
use crate::render;

/// Slack on top of the request timeout before giving up on the engine.
const EVENT_GRACE: Duration = Duration::from_secs(2);

pub struct Backend {
    engine: EngineHandle,
    events: mpsc::Receiver<EngineEvent>,
    wait: Duration,
}

impl Backend {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let wait = settings.request_timeout + EVENT_GRACE;
        let (tx, events) = mpsc::channel();
        let engine = EngineHandle::new(settings, Arc::new(ChannelEventSink::new(tx)))?;
        Ok(Self {
            engine,
            events,
            wait,
        })
    }

    fn next_event(&self) -> anyhow::Result<EngineEvent> {
        self.events
            .recv_timeout(self.wait)
            .context("backend did not answer in time")
    }

    pub fn list_applications(&self, tab: StatusTab) -> anyhow::Result<()> {
        self.engine.list_applications();
        match self.next_event()? {
            EngineEvent::ApplicationsListed(Ok(records)) => {
                print!("{}", render::render_applications(&records, tab));
                Ok(())
            }
            EngineEvent::ApplicationsListed(Err(err)) => {
                bail!("{}", failure_text(&err, FailureContext::Applications))
            }
            other => unexpected(other),
        }
    }

    pub fn save_application(&self, application: NewApplication) -> anyhow::Result<()> {
        let title = application.title.clone();
        let apply_url = application.apply_url.clone();
        self.engine.save_application(application);
        match self.next_event()? {
            EngineEvent::ApplicationSaved(Ok(())) => {
                println!("Saved \"{title}\" to your applications.");
                if !apply_url.is_empty() {
                    println!("Apply at: {apply_url}");
                }
                Ok(())
            }
            EngineEvent::ApplicationSaved(Err(err)) => {
                bail!("{}", failure_text(&err, FailureContext::SaveApplication))
            }
            other => unexpected(other),
        }
    }

    pub fn update_status(&self, id: &str, status: ApplicationStatus) -> anyhow::Result<()> {
        self.engine.update_status(id, status.as_str());
        match self.next_event()? {
            EngineEvent::StatusUpdated { result: Ok(()), .. } => {
                board_info!("Application {} moved to {}", id, status);
                println!("Status updated to {status}.");
                self.list_applications(StatusTab::All)
            }
            EngineEvent::StatusUpdated { result: Err(err), .. } => {
                bail!("{}", failure_text(&err, FailureContext::UpdateStatus))
            }
            other => unexpected(other),
        }
    }

    pub fn remove_application(&self, id: &str) -> anyhow::Result<()> {
        self.engine.remove_application(id);
        match self.next_event()? {
            EngineEvent::ApplicationRemoved { result: Ok(()), .. } => {
                println!("Application removed.");
                self.list_applications(StatusTab::All)
            }
            EngineEvent::ApplicationRemoved { result: Err(err), .. } => {
                bail!("{}", failure_text(&err, FailureContext::DeleteApplication))
            }
            other => unexpected(other),
        }
    }

    pub fn list_resumes(&self) -> anyhow::Result<()> {
        self.engine.list_resumes();
        match self.next_event()? {
            EngineEvent::ResumesListed(Ok(records)) => {
                print!("{}", render::render_resumes(&records));
                Ok(())
            }
            // The resume list has no dedicated fallback text of its own.
            EngineEvent::ResumesListed(Err(err)) => {
                bail!("{}", failure_text(&err, FailureContext::ResumeUpload))
            }
            other => unexpected(other),
        }
    }

    /// A path that does not exist counts as "no file selected".
    pub fn upload_resume(&self, path: Option<&Path>) -> anyhow::Result<()> {
        let file = match path {
            Some(path) if path.exists() => Some(
                ResumeFile::from_path(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
            ),
            _ => None,
        };
        self.engine.upload_resume(file);
        match self.next_event()? {
            EngineEvent::ResumeUploaded(Ok(())) => {
                println!("Resume uploaded successfully!");
                self.list_resumes()
            }
            EngineEvent::ResumeUploaded(Err(err)) => {
                bail!("{}", failure_text(&err, FailureContext::ResumeUpload))
            }
            other => unexpected(other),
        }
    }

    pub fn score_match(&self, job_title: &str, job_description: &str) -> anyhow::Result<()> {
        self.engine.score_match(job_title, job_description);
        match self.next_event()? {
            EngineEvent::MatchScored(Ok(result)) => {
                print!("{}", render::render_match(&result));
                Ok(())
            }
            EngineEvent::MatchScored(Err(err)) => {
                bail!("{}", failure_text(&err, FailureContext::MatchScore))
            }
            other => unexpected(other),
        }
    }
}

fn unexpected(event: EngineEvent) -> anyhow::Result<()> {
    bail!("unexpected engine event: {event:?}")
}
