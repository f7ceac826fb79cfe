//! contactbook - a small contact registry
//!
//! Desktop application for registering people (name, CPF, phone) in a
//! local list, with optional forwarding of each new entry to a
//! spreadsheet web-app endpoint.
//!
//! # Architecture
//!
//! - `core`: input masks, search, the registry session state machine,
//!   JSON persistence and the remote submitter
//! - `config`: the persisted endpoint setting
//! - `app`: iced state, message routing and views
//! - `theme`: the brand palette
//!
//! # Usage
//!
//! ```bash
//! contactbook                          # Run with the default data directory
//! contactbook --data-dir ./registry    # Keep contacts.json and config.json elsewhere
//! ```

mod app;
mod theme;

use clap::Parser;
use contactbook::{config, core::store, utils};
use iced::Size;
use std::path::PathBuf;
use std::process::ExitCode;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Contact registry with optional spreadsheet sync", long_about = None)]
#[command(version, long_version = build::CLAP_LONG_VERSION)]
struct Cli {
    /// Directory holding contacts.json and config.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(data_dir) = cli.data_dir.or_else(utils::get_data_dir) else {
        eprintln!("Error: could not determine a data directory, pass --data-dir");
        return ExitCode::FAILURE;
    };
    if let Err(e) = utils::ensure_dirs(&data_dir) {
        eprintln!("Error: failed to create {}: {e}", data_dir.display());
        return ExitCode::FAILURE;
    }

    init_logging();

    let boot = match load_boot(data_dir) {
        Ok(boot) => boot,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    launch_gui(boot)
}

fn init_logging() {
    // Set up logging to file
    if let Some(mut log_path) = utils::get_state_dir() {
        log_path.push("contactbook.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }
}

/// Reads both blobs before the window opens so the first frame is complete
fn load_boot(data_dir: PathBuf) -> std::io::Result<app::Boot> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (contacts, config) = runtime.block_on(async {
        let contacts = store::load_contacts(&store::contacts_blob(&data_dir)).await;
        let config = config::load_config(&config::config_blob(&data_dir)).await;
        (contacts, config)
    });

    Ok(app::Boot {
        data_dir,
        contacts,
        config,
    })
}

fn launch_gui(boot: app::Boot) -> ExitCode {
    let result = iced::application(
        move || app::State::new(boot.clone()),
        app::State::update,
        app::State::view,
    )
    .subscription(app::State::subscription)
    .window(iced::window::Settings {
        size: Size::new(1100.0, 760.0),
        ..Default::default()
    })
    .title("Contact Registry")
    .theme(|state: &app::State| {
        if state.theme.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    })
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
