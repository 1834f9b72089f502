use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kyc_simulator_client::clipboard::Osc52Clipboard;
use kyc_simulator_client::config::Config;
use kyc_simulator_client::form_client::FormClient;
use kyc_simulator_client::models::KycRequest;
use kyc_simulator_client::terminal::TerminalView;
use kyc_simulator_client::view::{DismissReason, Key, KeyEvent, Section};

type Client = FormClient<TerminalView<std::io::Stdout>, Osc52Clipboard<std::io::Stdout>>;

/// Form inputs in page order: (label, field).
const FIELDS: [(&str, &str); 6] = [
    ("Full name", "name"),
    ("Email", "email"),
    ("Age", "age"),
    ("Country", "country"),
    ("CPF", "cpf"),
    ("Passport", "passport"),
];

/// Writes `label: ` with no newline so input follows on the same line.
fn write_prompt<W: Write>(out: &mut W, label: &str) -> std::io::Result<()> {
    write!(out, "{}: ", label)?;
    out.flush()
}

/// Prompts for one line; `None` on end of input.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<Option<String>> {
    write_prompt(&mut std::io::stdout(), label)?;
    Ok(lines.next_line().await?)
}

/// Reads every required field, asking again while a field is left empty.
async fn read_form(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<KycRequest>> {
    let mut request = KycRequest::default();
    for (label, field) in FIELDS {
        let value = loop {
            let Some(line) = prompt(lines, label).await? else {
                return Ok(None);
            };
            if !line.is_empty() {
                break line;
            }
            println!("Please fill out this field.");
        };
        match field {
            "name" => request.name = value,
            "email" => request.email = value,
            "age" => request.age = value,
            "country" => request.country = value,
            "cpf" => request.cpf = value,
            _ => request.passport = value,
        }
    }
    Ok(Some(request))
}

/// Result-screen commands. Returns `false` when the user quits.
fn handle_command(client: &Client, command: &str) -> bool {
    match command {
        "d" => {
            client.open_reasoning_detail();
        }
        "c" => {
            client.copy_ipfs_cid();
        }
        "x" => {
            client.close_reasoning_detail(DismissReason::CloseButton);
        }
        "esc" => {
            client.handle_key(KeyEvent::plain(Key::Escape));
        }
        "r" => {
            client.handle_key(KeyEvent::ctrl('r'));
        }
        "q" => return false,
        other => println!("Unknown command '{}'", other),
    }
    true
}

/// Main entry point for the command-line KYC simulator.
///
/// Initializes logging and configuration, then loops: collect the form,
/// submit it, and accept result-screen commands until reset or quit.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so the UI owns stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kyc_simulator_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    let view = Arc::new(TerminalView::new(std::io::stdout()));
    let clipboard = Arc::new(Osc52Clipboard::new(std::io::stdout()));
    let client = FormClient::from_config(&config, view.clone(), clipboard)?;
    tracing::info!("🚀 KYC Simulator initialized against {}", config.api_url);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match client.section() {
            Section::Form | Section::Loading => {
                let Some(request) = read_form(&mut lines).await? else {
                    break;
                };
                view.fill_form(request);
                // Failures are already alerted by the controller.
                let _ = client.submit().await;
            }
            Section::Result => {
                let Some(line) =
                    prompt(&mut lines, "[d]etails  [c]opy CID  [x] close  [r]eset  [q]uit").await?
                else {
                    break;
                };
                if !handle_command(&client, line.trim()) {
                    break;
                }
            }
        }
    }

    Ok(())
}
