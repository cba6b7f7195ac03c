use anyhow::Result;

fn main() -> Result<()> {
    ai_shell::cli::run()
}
