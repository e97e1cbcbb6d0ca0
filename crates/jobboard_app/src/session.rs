//! Interactive browse session.
//!
//! A stdin reader thread and the engine both feed one input channel; a
//! single loop owns the state and applies every message through `update`.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use jobboard_core::{update, AppState, DatePosted, JobType, Msg, PageStep, WorkMode};
use jobboard_engine::ClientSettings;
use jobboard_logging::{board_debug, board_info};

use crate::effects::EffectRunner;
use crate::render;

/// One thing for the dispatch loop to handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Msg(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  what <text>       edit the search box role (not applied until `search`)
  where <text>      edit the search box location
  search            apply the search box and fetch page 1
  role <text>       set the sidebar role filter
  location <text>   set the sidebar location filter
  skill <name>      toggle a skill
  date <value>      anytime | 24h | week | month
  type <value>      all | full-time | part-time | contract | internship
  mode <value>      all | remote | hybrid | onsite
  apply             apply the sidebar filters
  clear             reset the sidebar filters and search again
  next / prev       change page
  ask <message>     ask the AI assistant, e.g. `ask remote react jobs in Kolkata`
  help              show this text
  quit              leave";

/// Parses one stdin line. Blank lines produce nothing.
pub fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command.to_ascii_lowercase().as_str() {
        "what" => Msg::DraftWhatChanged(rest.to_string()),
        "where" => Msg::DraftWhereChanged(rest.to_string()),
        "search" | "find" => Msg::CommitSearch,
        "role" => Msg::SetWhat(rest.to_string()),
        "location" => Msg::SetWhere(rest.to_string()),
        "skill" if !rest.is_empty() => Msg::ToggleSkill(rest.to_string()),
        "date" if !rest.is_empty() => Msg::SetDatePosted(DatePosted::from(rest)),
        "type" if !rest.is_empty() => Msg::SetJobType(JobType::from(rest)),
        "mode" if !rest.is_empty() => Msg::SetWorkMode(WorkMode::from(rest)),
        "apply" => Msg::ApplyFilters,
        "clear" => Msg::ClearFilters,
        "next" | "n" => Msg::PageDelta(PageStep::Next),
        "prev" | "p" => Msg::PageDelta(PageStep::Prev),
        "ask" => Msg::AssistantSubmitted(rest.to_string()),
        "help" | "?" => return Some(Input::Help),
        "quit" | "exit" | "q" => return Some(Input::Quit),
        _ => return Some(Input::Unknown(line.to_string())),
    };
    Some(Input::Msg(msg))
}

pub fn run(settings: ClientSettings) -> anyhow::Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(settings, input_tx.clone())?;
    spawn_stdin_reader(input_tx);

    let mut session = Session {
        state: AppState::new(),
        runner,
        chat_seen: 0,
    };
    println!("{HELP}\n");
    session.dispatch(Msg::Mounted);

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Msg(msg) => session.dispatch(msg),
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
            Input::Unknown(line) => println!("Unknown command: {line} (try `help`)"),
        }
    }
    board_info!("Browse session finished");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    chat_seen: usize,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        board_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);

        if state.consume_dirty() {
            let view = state.view();
            let (seen, chat) = render::render_new_chat(&view.chat, self.chat_seen);
            self.chat_seen = seen;
            print!("{chat}");
            println!("{}", render::render_view(&view));
        }
        self.state = state;
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(input) = parse_line(&line) {
                let quit = input == Input::Quit;
                if input_tx.send(input).is_err() || quit {
                    return;
                }
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}
