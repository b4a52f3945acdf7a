/*!
# Still Point - One question. One shift.

Still Point asks a language model for a single reflective question, shaped by an
optional mood and an optional inspiring voice, and lets you journal against it in
an interactive terminal session.

This file contains the main application flow, coordinating the various components.

## Usage

```text
stillpoint [OPTIONS]

Options:
  -m, --mood <MOOD>              Your current state
  -p, --persona <PERSONA>        Inspiring voice for the question
  -o, --export-dir <EXPORT_DIR>  Directory the `export` command writes into
      --once                     Ask a single question, print it, and exit
      --list-personas            List the available voices and exit
      --log-format <LOG_FORMAT>  Log output format [text, json]
      --log-level <LOG_LEVEL>    Log level used when RUST_LOG is not set
  -v, --verbose                  Print verbose output
```

## Configuration

- `OPENAI_API_KEY`: API credential (required)
- `STILLPOINT_API_BASE`, `STILLPOINT_MODEL`, `STILLPOINT_TIMEOUT_SECS`,
  `STILLPOINT_EXPORT_DIR`: optional overrides
*/

use std::io;
use std::process::ExitCode;
use stillpoint::ai::QuestionService;
use stillpoint::cli::CliArgs;
use stillpoint::config::Config;
use stillpoint::constants::{LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use stillpoint::errors::AppResult;
use stillpoint::journal::SessionState;
use stillpoint::ops::interactive::{render_personas, run_session, SessionOptions};
use stillpoint::ops::ask_question;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Initializes the global tracing subscriber, writing to stderr.
fn init_tracing(args: &CliArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.effective_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if args.log_format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).init();
    } else {
        builder.with_target(false).init();
    }
}

/// The main entry point for the stillpoint application.
///
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads and validates configuration (a missing credential aborts here)
/// 3. Builds the question service
/// 4. Runs a single question (`--once`) or an interactive session
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Application error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting stillpoint");
    debug!("CLI arguments: {:?}", args);

    if args.list_personas {
        render_personas(&mut io::stdout())?;
        return Ok(());
    }

    info!("Loading configuration");
    let config = Config::load()?;
    debug!("Configuration: {:?}", config);

    let service = QuestionService::from_config(&config)?;
    debug!("Using model {}", service.model());

    let mut session = SessionState::new();
    let persona = args.persona_or_none();

    if args.once {
        let question = ask_question(&mut session, &service, args.mood, persona)?;
        println!("{}", question);
        session.end();
        return Ok(());
    }

    let options = SessionOptions {
        mood: args.mood,
        persona,
        export_dir: args.export_dir.unwrap_or_else(|| config.export_dir.clone()),
    };

    let stdin = io::stdin();
    let result = run_session(
        stdin.lock(),
        &mut io::stdout(),
        &mut session,
        &service,
        options,
    );
    session.end();
    result
}
