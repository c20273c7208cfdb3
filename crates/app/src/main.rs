//! Terminal front end for the menu.

use app::{App, AppError, Config, Outcome};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    app::telemetry::init(&config);

    // 2. Create the store and screens
    let mut menu = App::new(&config);
    tracing::info!(title = %config.title, "menu ready");

    // 3. Dispatch commands until quit, EOF, SIGINT or SIGTERM
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout
        .write_all(format!("{}\n{}\n", config.title, app::command::help()).as_bytes())
        .await?;
    stdout.flush().await?;

    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    #[cfg(unix)]
    let terminated = async move {
        sigterm.recv().await;
    };
    #[cfg(not(unix))]
    let terminated = std::future::pending::<()>();
    tokio::pin!(terminated);

    loop {
        let line = tokio::select! {
            interrupted = signal::ctrl_c() => {
                interrupted?;
                tracing::info!("interrupted");
                break;
            }
            () = &mut terminated => {
                tracing::info!("terminated");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let output = match menu.handle_line(&line) {
            Ok(Outcome::Continue(output)) => output,
            Ok(Outcome::Quit) => break,
            Err(err) if err.is_recoverable() => format!("error: {err}\n"),
            Err(err) => return Err(err),
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("menu shut down");
    Ok(())
}
