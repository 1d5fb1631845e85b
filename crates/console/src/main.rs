use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flowdose_client::{
    CommandFeedback, DeviceConfig, DeviceGateway, DeviceSession, LiveEvent, LiveStateClient,
    SaveOutcome,
};
use flowdose_core::{Command, DeviceStatus};
use flowdose_ui::reflect;
use flowdose_ui::view::{Controls, Screen, Section, ViewModel};

mod input;

use input::ConsoleInput;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = DeviceConfig::from_env();
    info!(host = %config.host, port = config.port, "connecting to dispenser");

    let gateway = DeviceGateway::new(&config);
    let mut session = DeviceSession::new(gateway);
    session.hydrate().await;
    info!(unit = session.unit().tag(), "session hydrated");

    let live = LiveStateClient::spawn(config);
    let mut events = live.events();

    let mut screen = Screen::default();
    let mut latest: Option<DeviceStatus> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(LiveEvent::Status(status)) => {
                    let view = reflect(&status, session.unit(), &session.presets());
                    screen.apply(&view);
                    render(&screen, &view);
                    latest = Some(status);
                }
                Ok(LiveEvent::Connected) => info!("live channel up"),
                Ok(LiveEvent::Disconnected) => warn!("live channel down, reconnecting"),
                Err(RecvError::Lagged(missed)) => warn!(missed, "dropped stale status frames"),
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                if !handle_line(&line, &mut session, &mut screen, &latest).await {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("console shutting down");
}

async fn handle_line(
    line: &str,
    session: &mut DeviceSession,
    screen: &mut Screen,
    latest: &Option<DeviceStatus>,
) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    match ConsoleInput::parse(line) {
        Ok(ConsoleInput::Dispense(amount)) => report(session.dispense(amount).await),
        Ok(ConsoleInput::DispensePreset(index)) => report(session.dispense_preset(index).await),
        Ok(ConsoleInput::Pause) => report(session.run(Command::Pause).await),
        Ok(ConsoleInput::Resume) => report(session.run(Command::Resume).await),
        Ok(ConsoleInput::Stop) => report(session.run(Command::Stop).await),
        Ok(ConsoleInput::Unit(unit)) => {
            session.select_unit(unit).await;
            println!("display unit is now {}", unit.full_name());
            rerender(session, screen, latest);
        }
        Ok(ConsoleInput::Presets(values)) => match session.save_presets(values).await {
            SaveOutcome::Saved => {
                println!("Presets saved successfully!");
                rerender(session, screen, latest);
            }
            SaveOutcome::Invalid => println!("All preset values must be greater than 0"),
            SaveOutcome::Failed(error) => println!("Failed to save presets: {}", error),
        },
        Ok(ConsoleInput::Wifi { ssid, password }) => {
            match session.configure_wifi(&ssid, &password).await {
                CommandFeedback::Accepted => {
                    println!("WiFi configuration saved. Device is connecting...")
                }
                other => report(other),
            }
        }
        Ok(ConsoleInput::Calibration(factor)) => match session.save_calibration(factor).await {
            CommandFeedback::Accepted => println!("Calibration saved!"),
            other => report(other),
        },
        Ok(ConsoleInput::Status) => rerender(session, screen, latest),
        Ok(ConsoleInput::Help) => print_help(),
        Ok(ConsoleInput::Quit) => return false,
        Err(error) => println!("{}", error),
    }
    true
}

fn report(feedback: CommandFeedback) {
    match feedback {
        CommandFeedback::Accepted => println!("ok"),
        CommandFeedback::Rejected(reason) => println!("rejected: {}", reason),
        CommandFeedback::Failed(error) => println!("failed: {}", error),
    }
}

fn rerender(session: &DeviceSession, screen: &mut Screen, latest: &Option<DeviceStatus>) {
    match latest {
        Some(status) => {
            let view = reflect(status, session.unit(), &session.presets());
            screen.apply(&view);
            render(screen, &view);
        }
        None => println!("no status from the device yet"),
    }
}

fn render(screen: &Screen, view: &ViewModel) {
    let badge = screen
        .badge
        .as_ref()
        .map(|b| b.label.as_str())
        .unwrap_or("-");
    println!();
    println!("[{}]  {}", badge, view.wifi.summary);
    match screen.section {
        Section::Main => {
            let labels: Vec<&str> = view
                .preset_buttons
                .iter()
                .map(|b| b.label.as_str())
                .collect();
            println!("presets: {}", labels.join(" | "));
            println!("{}  (calibration {})", view.unit_hint, view.calibration);
        }
        Section::Progress => {
            println!(
                "dispensed {} of {} ({} remaining)  {}%{}",
                view.dispensed,
                view.target,
                view.remaining,
                view.progress_percent,
                if view.valve_open { "  valve open" } else { "" }
            );
            match screen.controls {
                Controls::Dispensing => println!("controls: pause | stop"),
                Controls::Paused => println!("controls: resume | stop"),
                Controls::None => {}
            }
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  start <amount>            dispense an amount in the active unit");
    println!("  preset <1-4>              dispense a preset");
    println!("  pause | resume | stop");
    println!("  unit ml|l                 switch the display unit");
    println!("  presets <a> <b> <c> <d>   save presets (active unit)");
    println!("  wifi <ssid> [password]    configure device WiFi");
    println!("  cal <pulses-per-liter>    save the calibration factor");
    println!("  status | help | quit");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,tungstenite=warn,reqwest=warn"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
