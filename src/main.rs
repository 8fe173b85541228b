#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use x11rb::protocol::xproto::Window;

use xlibwrapper::common::logging;
use xlibwrapper::handle::parse_window_id;
use xlibwrapper::{Bridge, BridgeConfig};

#[derive(Parser)]
#[command(name = "x11-desktop-bridge")]
#[command(version)]
#[command(about = "Lower windows and put them into EWMH desktop mode", long_about = None)]
struct Cli {
    /// X display to connect to (overrides the config file and $DISPLAY)
    #[arg(long, global = true)]
    display: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mark a window override-redirect and lower it below its siblings
    Lower {
        #[arg(value_parser = parse_window_id)]
        window: Window,
    },
    /// Apply desktop hints plus the extra steps enabled in the config
    DesktopMode {
        #[arg(value_parser = parse_window_id)]
        window: Window,
    },
    /// Apply only the BELOW/STICKY/SKIP_PAGER/SKIP_TASKBAR hints
    Hints {
        #[arg(value_parser = parse_window_id)]
        window: Window,
    },
    /// Request fullscreen (or leave it with --off)
    Fullscreen {
        #[arg(value_parser = parse_window_id)]
        window: Window,
        #[arg(long)]
        off: bool,
    },
    /// Print a window's title and _NET_WM_STATE entries
    State {
        #[arg(value_parser = parse_window_id)]
        window: Window,
    },
    /// Write the default config file (fails if one already exists)
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose)?;

    let mut config = BridgeConfig::load().context("Failed to load config")?;
    if let Some(display) = cli.display {
        config.display = Some(display);
    }
    let bridge = Bridge::new(config);

    match cli.command {
        Command::Lower { window } => bridge
            .lower_and_detach(window)
            .with_context(|| format!("Failed to lower window {:#x}", window))?,
        Command::DesktopMode { window } => bridge
            .enter_desktop_mode(window)
            .with_context(|| format!("Failed to enter desktop mode for window {:#x}", window))?,
        Command::Hints { window } => bridge
            .apply_desktop_hints(window)
            .with_context(|| format!("Failed to apply desktop hints to window {:#x}", window))?,
        Command::Fullscreen { window, off } => bridge
            .set_fullscreen(window, !off)
            .with_context(|| format!("Failed to change fullscreen state of window {:#x}", window))?,
        Command::State { window } => {
            let report = bridge
                .report(window)
                .with_context(|| format!("Failed to query window {:#x}", window))?;
            println!("window:  {:#x}", report.window);
            println!("title:   {}", report.title.as_deref().unwrap_or("<none>"));
            println!("focused: {}", report.focused);
            if report.states.is_empty() {
                println!("state:   <none>");
            } else {
                println!("state:   {}", report.states.join(", "));
            }
        }
        Command::InitConfig => {
            let path = BridgeConfig::create_default()?;
            info!(path = %path.display(), "Wrote config");
        }
    }

    Ok(())
}
