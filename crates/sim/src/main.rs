use std::io::Write;

fn main() -> anyhow::Result<()> {
    libris_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (library, summary) = libris_sim::run(&mut out)?;
    out.flush()?;

    tracing::info!(
        books = library.len(),
        open_loans = library.ledger().len(),
        succeeded = summary.succeeded,
        failed = summary.failed,
        "session finished"
    );
    Ok(())
}
