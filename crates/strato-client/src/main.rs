//! stratoctl binary entry point.
//!
//! Thin consumer of the session client: resolves configuration, dispatches
//! one subcommand, and renders the typed results.

use clap::Parser;
use tracing::{error, info};

use strato_client::cli::{Cli, Command, PowerTarget};
use strato_client::StratoClient;
use strato_core::constants::{POWER_OFF_COMMAND, POWER_ON_COMMAND};
use strato_core::PlaybackState;

fn main() {
    let cli = Cli::parse();

    let log_format = cli.log_format.into();
    if let Err(e) = strato_core::init_logging(cli.verbose, cli.log_file.as_deref(), log_format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "stratoctl starting");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let exit_code = rt.block_on(run(cli));
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    let client = StratoClient::new(cli.client_config());

    match cli.command {
        Command::Probe => {
            if client.probe().await {
                println!("reachable");
                0
            } else {
                println!("unreachable");
                1
            }
        }

        Command::Send {
            commands,
            repeat,
            delay_ms,
        } => {
            let delay = std::time::Duration::from_millis(delay_ms);
            match client.send_command_sequence(&commands, repeat, delay).await {
                Ok(()) => 0,
                Err(e) => {
                    error!(error = %e, "command dispatch failed");
                    eprintln!("stratoctl: {}", e);
                    1
                }
            }
        }

        Command::Power { target } => {
            let command = match target {
                PowerTarget::On => POWER_ON_COMMAND,
                PowerTarget::Off => POWER_OFF_COMMAND,
            };
            let _ = client.send_request(command).await;
            0
        }

        Command::Status { json } => {
            let profile = client.device_profile().await;
            let include_player_metrics = profile.as_ref().map_or(true, |p| p.is_movie_player);
            let state = client.query_playback_state(include_player_metrics).await;
            print_state(&state, json);
            0
        }

        Command::Watch {
            interval_secs,
            json,
        } => {
            let interval = std::time::Duration::from_secs(interval_secs.max(1));
            loop {
                let state = client.query_playback_state(true).await;
                print_state(&state, json);
                tokio::time::sleep(interval).await;
            }
        }
    }
}

fn print_state(state: &PlaybackState, json: bool) {
    if json {
        match serde_json::to_string_pretty(state) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => error!(error = %e, "failed to render snapshot"),
        }
        return;
    }

    println!("power_state:                    {}", state.power_state);
    println!("system_readiness_state:         {}", state.system_readiness_state);
    println!("play_status:                    {}", state.play_status);
    println!("play_speed:                     {}", state.play_speed);
    println!("media_location:                 {}", state.media_location);
    println!("title_location:                 {}", state.title_location);
    println!("title_length:                   {}", state.title_length);
    println!("chapter_location:               {}", state.chapter_location);
    println!("chapter_length:                 {}", state.chapter_length);
    println!("video_mode:                     {}", state.video_mode);
    println!("video_color_eotf:               {}", state.video_color_eotf);
    println!("video_color_space:              {}", state.video_color_space);
    println!("video_color_depth:              {}", state.video_color_depth);
    println!("video_color_sampling:           {}", state.video_color_sampling);
    println!("screen_mask_ratio:              {}", state.screen_mask_ratio);
    println!("screen_mask_top_trim_rel:       {}", state.screen_mask_top_trim_rel);
    println!("screen_mask_bottom_trim_rel:    {}", state.screen_mask_bottom_trim_rel);
    println!("screen_mask_conservative_ratio: {}", state.screen_mask_conservative_ratio);
    println!("screen_mask_top_mask_abs:       {}", state.screen_mask_top_mask_abs);
    println!("screen_mask_bottom_mask_abs:    {}", state.screen_mask_bottom_mask_abs);
    println!("cinemascape_mode:               {}", state.cinemascape_mode);
    println!("cinemascape_mask:               {}", state.cinemascape_mask);
    println!("ui_screen:                      {}", state.ui_screen);
    println!("ui_popup:                       {}", state.ui_popup);
    println!("ui_dialog:                      {}", state.ui_dialog);
}
