//! Console output formatter for quiz sessions

use colored::{ColoredString, Colorize};
use learnpal_domain::{
    AnswerState, OptionPresentation, OutputFormat, QuizQuestion, QuizResults, QuizStatus,
    SessionSnapshot, SelectionOutcome,
};
use serde::Serialize;

/// Formats quiz sessions for console display
pub struct QuizFormatter;

/// JSON view: the snapshot plus the results once they are shown
#[derive(Serialize)]
struct JsonView<'a> {
    #[serde(flatten)]
    session: &'a SessionSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<&'a QuizResults>,
}

impl QuizFormatter {
    /// Render `snapshot` in the requested format
    pub fn render(
        format: OutputFormat,
        snapshot: &SessionSnapshot,
        results: Option<&QuizResults>,
    ) -> String {
        match format {
            OutputFormat::Full => Self::format(snapshot, results),
            OutputFormat::Summary => Self::format_summary(snapshot, results),
            OutputFormat::Json => Self::format_json(snapshot, results),
        }
    }

    /// Format the whole session: every question, then the results if shown
    pub fn format(snapshot: &SessionSnapshot, results: Option<&QuizResults>) -> String {
        let mut output = String::new();

        let title = match &snapshot.topic {
            Some(topic) => format!("Quiz: {}", topic),
            None => "Quiz".to_string(),
        };
        output.push_str(&Self::header(&title));
        output.push('\n');

        match snapshot.status {
            QuizStatus::Idle => {
                output.push_str("\nEnter a topic to generate a quiz.\n");
            }
            QuizStatus::Loading => {
                output.push_str(&format!("\n{}\n", "Generating quiz...".dimmed()));
            }
            QuizStatus::Error => {
                let message = snapshot.error.as_deref().unwrap_or_default();
                output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), message));
            }
            QuizStatus::Ready => {
                let Some(quiz_set) = &snapshot.quiz_set else {
                    return output;
                };
                if quiz_set.is_empty() {
                    output.push_str("\nThe service returned no questions for this topic.\n");
                }
                for (index, question) in quiz_set.iter().enumerate() {
                    let answer = snapshot.answers.get(index).cloned().unwrap_or_default();
                    output.push('\n');
                    output.push_str(&Self::format_question(index, question, &answer));
                }
                output.push_str(&format!(
                    "\n{} {}/{} answered, score {}\n",
                    "Progress:".cyan().bold(),
                    snapshot.answered_count(),
                    quiz_set.len(),
                    snapshot.score
                ));
            }
        }

        if let Some(results) = results {
            output.push_str(&Self::format_results(results));
        }

        output.push_str(&Self::footer());
        output
    }

    /// One question with its options styled by presentation class
    pub fn format_question(index: usize, question: &QuizQuestion, answer: &AnswerState) -> String {
        let mut output = format!("{} {}", format!("Q{}.", index + 1).yellow().bold(), question.text());
        if let Some(difficulty) = question.difficulty() {
            output.push_str(&format!(" {}", format!("(difficulty {})", difficulty).dimmed()));
        }
        output.push('\n');

        for option in question.options() {
            let presentation = OptionPresentation::for_option(question, answer, &option.key);
            let line = format!("{}) {}", option.key, option.label);
            output.push_str(&format!(
                "  {} {}\n",
                Self::marker(presentation),
                Self::style_option(&line, presentation)
            ));
        }
        output
    }

    /// Score line plus every question with the chosen and correct answers
    pub fn format_results(results: &QuizResults) -> String {
        let mut output = Self::section_header("Results");
        output.push_str(&format!(
            "\n{} {} / {}\n",
            "Score:".cyan().bold(),
            results.score.to_string().bold(),
            results.total
        ));

        for item in &results.items {
            let verdict = if item.is_correct {
                "correct".green()
            } else {
                "wrong".red()
            };
            output.push_str(&format!(
                "\n{} {} [{}]\n  Your answer: {}) {}\n",
                format!("Q{}.", item.index + 1).yellow().bold(),
                item.question,
                verdict,
                item.selected.key,
                item.selected.label
            ));
            if let Some(correct) = &item.correct_answer {
                output.push_str(&format!(
                    "  {} {}) {}\n",
                    "Correct answer:".green(),
                    correct.key,
                    correct.label
                ));
            }
        }
        output
    }

    /// Concise view: status and score, plus the mistakes once finished
    pub fn format_summary(snapshot: &SessionSnapshot, results: Option<&QuizResults>) -> String {
        let topic = snapshot
            .topic
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut output = match snapshot.status {
            QuizStatus::Error => format!(
                "{} {}: {}\n",
                "[error]".red().bold(),
                topic,
                snapshot.error.as_deref().unwrap_or_default()
            ),
            status => {
                let total = snapshot.quiz_set.as_ref().map(|q| q.len()).unwrap_or(0);
                format!(
                    "{} {}: {}/{} answered, score {}\n",
                    format!("[{}]", status).cyan().bold(),
                    topic,
                    snapshot.answered_count(),
                    total,
                    snapshot.score
                )
            }
        };

        if let Some(results) = results {
            output.push_str(&format!(
                "{} {} / {}\n",
                "Final score:".green().bold(),
                results.score,
                results.total
            ));
            for item in results.mistakes() {
                if let Some(correct) = &item.correct_answer {
                    output.push_str(&format!(
                        "  Q{}: answered {}, correct {}\n",
                        item.index + 1,
                        item.selected.key,
                        correct.key
                    ));
                }
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(snapshot: &SessionSnapshot, results: Option<&QuizResults>) -> String {
        let view = JsonView {
            session: snapshot,
            results,
        };
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    /// Feedback line for an answer the user just gave
    pub fn format_selection(outcome: &SelectionOutcome) -> String {
        match outcome {
            SelectionOutcome::Recorded { correct: true, .. } => "Correct!".green().bold().to_string(),
            SelectionOutcome::Recorded { correct: false, .. } => {
                "Not quite.".red().bold().to_string()
            }
            SelectionOutcome::AlreadyAnswered => {
                "That question is already answered.".dimmed().to_string()
            }
        }
    }

    fn marker(presentation: OptionPresentation) -> &'static str {
        match presentation {
            OptionPresentation::Neutral => "[ ]",
            OptionPresentation::Correct => "[v]",
            OptionPresentation::IncorrectSelected => "[x]",
            OptionPresentation::Dimmed => "   ",
        }
    }

    fn style_option(line: &str, presentation: OptionPresentation) -> ColoredString {
        match presentation {
            OptionPresentation::Neutral => line.normal(),
            OptionPresentation::Correct => line.green().bold(),
            OptionPresentation::IncorrectSelected => line.red().bold(),
            OptionPresentation::Dimmed => line.dimmed(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
