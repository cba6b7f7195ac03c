/// Dispatcher integration tests
///
/// These tests route full input lines through the dispatcher with a mocked
/// assistant and shell, checking which handler ran and what it produced
mod common;

use ai_shell::ai::{AiError, Assistant, UNAVAILABLE_MESSAGE};
use ai_shell::dispatch::Dispatcher;
use common::{MockGenerator, MockShell, TestHome, replying_assistant};

#[test]
fn test_question_suffix_explains_without_question_mark() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("Lists all files in long format.");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("ls -la?");

    assert_eq!(output, "Lists all files in long format.");
    assert_eq!(prompts.borrow().as_slice(), &["Explain what this shell command does:\n\nls -la"]);
    assert!(shell.calls.borrow().is_empty());
}

#[test]
fn test_suffix_rule_wins_over_nl_prefix() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("explanation");
    let shell = MockShell::new();
    let history = home.history();

    Dispatcher::new(&ai, &shell, &history).dispatch("nl list files?");

    let prompts = prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Explain what this shell command does:"));
    assert!(prompts[0].ends_with("nl list files"));
}

#[test]
fn test_nl_translates_instruction() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("ls");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("nl list files");

    assert_eq!(output, "ls");
    assert!(prompts.borrow()[0].starts_with("Translate this natural language instruction"));
    assert!(prompts.borrow()[0].ends_with("\n\nlist files"));
}

#[test]
fn test_history_search_returns_matches_in_append_order() {
    let home = TestHome::new().with_history(&["git status", "ls", "git log", "pwd", "git push"]);
    let (ai, prompts) = replying_assistant("unused");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("history search git");

    assert_eq!(output, "git status\ngit log\ngit push");
    assert!(prompts.borrow().is_empty());
}

#[test]
fn test_history_search_messages() {
    let home = TestHome::new();
    let (ai, _) = replying_assistant("unused");
    let shell = MockShell::new();
    let history = home.history();
    let dispatcher = Dispatcher::new(&ai, &shell, &history);

    assert_eq!(dispatcher.dispatch("history search ls"), "No history yet.\n");

    history.append("pwd").unwrap();
    assert_eq!(dispatcher.dispatch("history search ls"), "No matches found.\n");
}

#[test]
fn test_fallback_success_returns_stdout_exactly() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("unused");
    let shell = MockShell::new().succeeds("echo hello", "hello\n");
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("echo hello");

    assert_eq!(output, "hello\n");
    assert!(prompts.borrow().is_empty());
}

#[test]
fn test_fallback_failure_contains_stderr_and_fix() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("git status");
    let shell = MockShell::new().fails("gti status", "sh: 1: gti: not found\n", 127);
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("gti status");

    assert!(output.contains("sh: 1: gti: not found"));
    assert!(output.contains("Did you mean:\ngit status"));
    let prompts = prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("I tried to run:\ngti status\n"));
}

#[test]
fn test_fallback_spawn_failure_is_described() {
    let home = TestHome::new();
    let (ai, _) = replying_assistant("unused");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("anything");
    assert_eq!(output, "mock spawn failure");
}

#[test]
fn test_debug_runs_then_asks_on_failure() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("The file does not exist.");
    let shell = MockShell::new()
        .succeeds("ls", "a\nb\n")
        .fails("cat missing.txt", "cat: missing.txt: No such file or directory", 1);
    let history = home.history();
    let dispatcher = Dispatcher::new(&ai, &shell, &history);

    assert_eq!(dispatcher.dispatch("debug ls"), "a\nb\n");
    assert!(prompts.borrow().is_empty());

    assert_eq!(dispatcher.dispatch("debug cat missing.txt"), "The file does not exist.");
    assert!(prompts.borrow()[0].contains("No such file or directory"));
}

#[test]
fn test_doc_missing_and_present_file() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("# README");
    let shell = MockShell::new();
    let history = home.history();
    let dispatcher = Dispatcher::new(&ai, &shell, &history);

    let missing = home.path().join("missing.py");
    assert_eq!(
        dispatcher.dispatch(&format!("doc {}", missing.display())),
        format!("File {} not found.", missing.display())
    );
    assert!(prompts.borrow().is_empty());

    let source = home.path().join("tool.py");
    std::fs::write(&source, "print('hi')\n").unwrap();
    assert_eq!(dispatcher.dispatch(&format!("doc {}", source.display())), "# README");
    assert!(prompts.borrow()[0].ends_with("print('hi')\n"));
}

#[test]
fn test_doc_on_directory_reports_error_text() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("unused");
    let shell = MockShell::new();
    let history = home.history();

    let output =
        Dispatcher::new(&ai, &shell, &history).dispatch(&format!("doc {}", home.path().display()));

    assert!(!output.is_empty());
    assert!(prompts.borrow().is_empty());
}

#[test]
fn test_hybrid_suggests_without_running() {
    let home = TestHome::new();
    let (ai, _) = replying_assistant("du -sh *");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("ai show folder sizes");

    assert_eq!(output, "$ du -sh *");
    assert!(shell.calls.borrow().is_empty());
}

#[test]
fn test_summarize_runs_command_before_marker() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("Two files.");
    let shell = MockShell::new().succeeds("ls ", "a.txt\nb.txt\n");
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("ls | ai summarize");

    assert_eq!(output, "Two files.");
    assert_eq!(shell.calls.borrow().as_slice(), &["ls "]);
    assert_eq!(
        prompts.borrow().as_slice(),
        &["Summarize the following shell output:\n\na.txt\nb.txt\n"]
    );
}

#[test]
fn test_plan_generates_steps() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("1. apt install nginx");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("plan install nginx");

    assert_eq!(output, "1. apt install nginx");
    assert!(prompts.borrow()[0].ends_with("sequence of Linux shell commands:\n\ninstall nginx"));
}

#[test]
fn test_gemini_alone_returns_usage_without_ai_call() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("unused");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("gemini");

    assert_eq!(output, "Enter something after 'gemini' to chat with Gemini.");
    assert!(prompts.borrow().is_empty());
}

#[test]
fn test_gemini_sends_remainder_verbatim() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("Hi there!");
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("gemini hello");

    assert_eq!(output, "Hi there!");
    assert_eq!(prompts.borrow().as_slice(), &["hello"]);
}

#[test]
fn test_ai_call_failure_is_rendered() {
    let home = TestHome::new();
    let (generator, _) = MockGenerator::failing(AiError::Request("connection reset".to_string()));
    let ai = Assistant::new(generator, common::MODEL);
    let shell = MockShell::new();
    let history = home.history();

    let output = Dispatcher::new(&ai, &shell, &history).dispatch("gemini hello");
    assert_eq!(output, "AI error: request failed: connection reset");
}

#[test]
fn test_unavailable_client_degrades_every_ai_handler() {
    let home = TestHome::new();
    let ai = Assistant::unavailable(common::MODEL);
    let shell = MockShell::new()
        .fails("false", "boom", 1)
        .succeeds("ls ", "a\n")
        .fails("make", "no rule", 2);
    let history = home.history();
    let dispatcher = Dispatcher::new(&ai, &shell, &history);

    let source = home.path().join("main.rs");
    std::fs::write(&source, "fn main() {}").unwrap();

    let inputs = [
        "ls -la?".to_string(),
        "nl list files".to_string(),
        "debug make".to_string(),
        format!("doc {}", source.display()),
        "ai list files".to_string(),
        "ls | ai summarize".to_string(),
        "plan deploy app".to_string(),
        "gemini hello".to_string(),
        "false".to_string(),
    ];

    for input in &inputs {
        let output = dispatcher.dispatch(input);
        assert!(
            output.contains(UNAVAILABLE_MESSAGE),
            "expected diagnostic for {:?}, got {:?}",
            input,
            output
        );
    }
}

#[test]
fn test_dispatch_trims_input() {
    let home = TestHome::new();
    let (ai, prompts) = replying_assistant("ok");
    let shell = MockShell::new();
    let history = home.history();

    Dispatcher::new(&ai, &shell, &history).dispatch("   pwd?   ");
    assert!(prompts.borrow()[0].ends_with("\n\npwd"));
}
