//! Prompt templates sent to the text-generation service.

pub fn explain(command: &str) -> String {
    format!("Explain what this shell command does:\n\n{}", command)
}

pub fn natural_language(instruction: &str) -> String {
    format!(
        "Translate this natural language instruction into a Linux shell command and make it \
         brief (no explanations, just the command):\n\n{}",
        instruction
    )
}

pub fn debug(command: &str, stderr: &str) -> String {
    format!(
        "I ran the command:\n{}\nIt failed with error:\n{}\nExplain the error and suggest a fix.",
        command, stderr
    )
}

pub fn doc(code: &str) -> String {
    format!("Generate documentation/README for this code:\n\n{}", code)
}

pub fn hybrid(instruction: &str) -> String {
    format!("Translate into a single Linux shell command only, no explanation:\n{}", instruction)
}

pub fn summarize(output: &str) -> String {
    format!("Summarize the following shell output:\n\n{}", output)
}

pub fn plan(task: &str) -> String {
    format!(
        "Translate this natural language task into a sequence of Linux shell commands:\n\n{}",
        task
    )
}

pub fn fix(command: &str, stderr: &str) -> String {
    format!(
        "I tried to run:\n{}\nIt failed with error:\n{}\nSuggest the correct fixed command.",
        command, stderr
    )
}
