//! REPL (Read-Eval-Print Loop) for taking quizzes interactively

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::QuizFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use learnpal_application::{FetchProgressNotifier, QuizOrchestrator, SubmitOutcome};
use learnpal_domain::{QuizStatus, SelectionOutcome, SessionSnapshot};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Restart,
    Submit,
    Results,
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// One interpreted input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    /// Request a quiz for this topic
    Topic(String),
    /// Answer question `question` (0-based) with option `key`
    Answer { question: usize, key: String },
    Command(ReplCommand),
}

/// Interpret a line against the current session.
///
/// `<n> <key>` is an answer only while a quiz is ready and `n` names one of
/// its questions; the key is matched case-insensitively against that
/// question's options. Anything else that is not a slash command is a topic.
pub fn parse_input(line: &str, snapshot: &SessionSnapshot) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }

    if let Some(rest) = line.strip_prefix('/') {
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let command = match name {
            "topic" | "t" => return ReplInput::Topic(arg.trim().to_string()),
            "restart" | "r" => ReplCommand::Restart,
            "submit" => ReplCommand::Submit,
            "results" => ReplCommand::Results,
            "status" | "s" => ReplCommand::Status,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        };
        return ReplInput::Command(command);
    }

    if let Some(answer) = parse_answer(line, snapshot) {
        return answer;
    }

    ReplInput::Topic(line.to_string())
}

fn parse_answer(line: &str, snapshot: &SessionSnapshot) -> Option<ReplInput> {
    if snapshot.status != QuizStatus::Ready {
        return None;
    }
    let quiz_set = snapshot.quiz_set.as_ref()?;

    let mut parts = line.split_whitespace();
    let (number, key) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let number: usize = number.trim_end_matches(['.', ')']).parse().ok()?;
    let index = number.checked_sub(1)?;
    let question = quiz_set.get(index)?;

    let key = question
        .options()
        .iter()
        .find(|option| option.key.eq_ignore_ascii_case(key))
        .map(|option| option.key.clone())
        .unwrap_or_else(|| key.to_string());

    Some(ReplInput::Answer {
        question: index,
        key,
    })
}

/// Interactive quiz REPL
pub struct QuizRepl {
    orchestrator: QuizOrchestrator,
    output: OutputConfig,
    repl: ReplConfig,
}

impl QuizRepl {
    pub fn new(orchestrator: QuizOrchestrator) -> Self {
        Self {
            orchestrator,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL, optionally starting with `initial_topic`
    pub async fn run(&self, initial_topic: Option<&str>) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.repl.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("learnpal".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        if let Some(topic) = initial_topic {
            self.submit_topic(topic).await;
        }

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                Ok(_) => continue,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one input line. Returns true if the REPL should exit.
    pub async fn handle_line(&self, line: &str) -> bool {
        match parse_input(line, &self.orchestrator.snapshot()) {
            ReplInput::Empty => false,
            ReplInput::Topic(topic) => {
                self.submit_topic(&topic).await;
                false
            }
            ReplInput::Answer { question, key } => {
                self.answer(question, &key);
                false
            }
            ReplInput::Command(command) => self.handle_command(command),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              learnpal - Quiz Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a topic to generate a quiz, then answer with <n> <key>.");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <topic>           - Generate a quiz (replaces the current one)");
        println!("  <n> <key>         - Answer question n, e.g. \"2 B\"");
        println!("  /topic <text>     - Generate a quiz for text that looks like an answer");
        println!("  /submit           - Finish early once every question is answered");
        println!("  /results          - Show the results breakdown");
        println!("  /restart          - Clear answers and take the same quiz again");
        println!("  /status           - Show the current session");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Status => self.print_session(),
            ReplCommand::Results => match self.orchestrator.results() {
                Some(results) => println!("{}", QuizFormatter::format_results(&results)),
                None => println!("Results appear once every question is answered."),
            },
            ReplCommand::Submit => match self.orchestrator.submit() {
                Ok(()) => self.print_session(),
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            ReplCommand::Restart => match self.orchestrator.restart() {
                Ok(()) => {
                    println!("Answers cleared.");
                    self.print_session();
                }
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn submit_topic(&self, topic: &str) {
        println!();
        let progress: Box<dyn FetchProgressNotifier> = if self.repl.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        match self
            .orchestrator
            .submit_topic_with_progress(topic, progress.as_ref())
            .await
        {
            SubmitOutcome::Ignored => println!("Please enter a topic."),
            SubmitOutcome::Resolved(_) => self.print_session(),
        }
    }

    fn answer(&self, question: usize, key: &str) {
        match self.orchestrator.select_answer(question, key) {
            Ok(outcome) => {
                println!("{}", QuizFormatter::format_selection(&outcome));
                if let SelectionOutcome::Recorded {
                    completed: true, ..
                } = outcome
                {
                    self.print_session();
                }
            }
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    }

    fn print_session(&self) {
        let snapshot = self.orchestrator.snapshot();
        let results = if snapshot.show_results {
            self.orchestrator.results()
        } else {
            None
        };
        println!(
            "{}",
            QuizFormatter::render(self.output.format, &snapshot, results.as_ref())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use learnpal_application::{GenerationError, QuizGenerator};
    use learnpal_domain::{QuizRequest, QuizSession};
    use serde_json::json;
    use std::sync::Arc;

    struct FixedGenerator;

    #[async_trait]
    impl QuizGenerator for FixedGenerator {
        async fn generate(
            &self,
            _request: &QuizRequest,
        ) -> Result<serde_json::Value, GenerationError> {
            Ok(json!({
                "status": "success",
                "mcqs": [
                    { "question": "2 + 2?", "options": { "A": "3", "B": "4" }, "answer": "B" },
                    { "question": "3 + 3?", "options": { "A": "6", "B": "7" }, "answer": "A" }
                ]
            }))
        }
    }

    fn ready_snapshot() -> SessionSnapshot {
        let mut session = QuizSession::new();
        let ticket = session.begin_fetch("arithmetic").unwrap();
        let quiz = learnpal_domain::parse_quiz_payload(json!({
            "status": "success",
            "mcqs": [
                { "question": "2 + 2?", "options": { "a": "3", "b": "4" }, "answer": "b" }
            ]
        }))
        .unwrap();
        session.complete_fetch(&ticket, Ok(quiz));
        session.snapshot()
    }

    fn repl() -> QuizRepl {
        let orchestrator = QuizOrchestrator::new(Arc::new(FixedGenerator));
        QuizRepl::new(orchestrator).with_repl_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    #[test]
    fn test_parse_commands() {
        let idle = QuizSession::new().snapshot();
        assert_eq!(parse_input("   ", &idle), ReplInput::Empty);
        assert_eq!(
            parse_input("/quit", &idle),
            ReplInput::Command(ReplCommand::Quit)
        );
        assert_eq!(
            parse_input("/results", &idle),
            ReplInput::Command(ReplCommand::Results)
        );
        assert_eq!(
            parse_input("/bogus", &idle),
            ReplInput::Command(ReplCommand::Unknown("/bogus".to_string()))
        );
        assert_eq!(
            parse_input("/topic 1984 novel", &idle),
            ReplInput::Topic("1984 novel".to_string())
        );
    }

    #[test]
    fn test_numbered_line_is_a_topic_until_quiz_is_ready() {
        let idle = QuizSession::new().snapshot();
        assert_eq!(
            parse_input("1 B", &idle),
            ReplInput::Topic("1 B".to_string())
        );
    }

    #[test]
    fn test_parse_answer_matches_key_case_insensitively() {
        let snapshot = ready_snapshot();
        assert_eq!(
            parse_input("1 B", &snapshot),
            ReplInput::Answer {
                question: 0,
                key: "b".to_string()
            }
        );
        assert_eq!(
            parse_input("1. a", &snapshot),
            ReplInput::Answer {
                question: 0,
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_number_is_a_topic() {
        let snapshot = ready_snapshot();
        assert_eq!(
            parse_input("7 a", &snapshot),
            ReplInput::Topic("7 a".to_string())
        );
        assert_eq!(
            parse_input("0 a", &snapshot),
            ReplInput::Topic("0 a".to_string())
        );
    }

    #[tokio::test]
    async fn test_topic_then_answers_complete_the_quiz() {
        let repl = repl();

        assert!(!repl.handle_line("arithmetic").await);
        assert_eq!(repl.orchestrator.status(), QuizStatus::Ready);

        repl.handle_line("1 b").await;
        repl.handle_line("2 B").await;

        let snapshot = repl.orchestrator.snapshot();
        assert_eq!(snapshot.score, 1);
        assert!(snapshot.show_results);
    }

    #[tokio::test]
    async fn test_restart_command_clears_answers() {
        let repl = repl();
        repl.handle_line("arithmetic").await;
        repl.handle_line("1 B").await;

        repl.handle_line("/restart").await;

        let snapshot = repl.orchestrator.snapshot();
        assert_eq!(snapshot.answered_count(), 0);
        assert_eq!(snapshot.score, 0);
    }

    #[tokio::test]
    async fn test_quit_exits() {
        assert!(repl().handle_line("/quit").await);
    }
}
