fn main() -> anyhow::Result<()> {
    igigraph::cli::run_cli()
}
