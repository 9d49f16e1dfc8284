fn main() -> anyhow::Result<()> {
    flashcards_cli::run()
}
