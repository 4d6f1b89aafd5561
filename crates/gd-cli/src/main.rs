//! GateDesk CLI
//!
//! CLI tool for previewing rewrites and turning route-editor form data into
//! route definitions.

mod preview;
mod route_io;

use clap::{Parser, Subcommand};

use gd_core::{build_simple_route, decode_route_form, parse_urlencoded, SimpleRouteForm};

use preview::{preview_config, render_preview};
use route_io::{read_input, to_json};

#[derive(Parser)]
#[command(name = "gd-cli")]
#[command(about = "GateDesk route form tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where a sample request is forwarded
    Preview {
        /// Incoming path matched by the gateway
        #[arg(long, default_value = "")]
        incoming: String,

        /// Upstream service URI
        #[arg(long, default_value = "")]
        uri: String,

        /// Rewrite mode: strip, rewrite or anything else for pass-through
        #[arg(long, default_value = "none")]
        mode: String,

        /// Upstream path prefix used in rewrite mode
        #[arg(long, default_value = "")]
        target: String,

        /// Gateway origin the sample request is sent to
        #[arg(long)]
        gateway: Option<String>,

        /// Path appended to both sides of the example
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Build a route from simple editor fields
    Simple {
        /// Route id
        #[arg(long)]
        id: String,

        /// Upstream service URI
        #[arg(long)]
        uri: String,

        /// Incoming path matched by the gateway
        #[arg(long)]
        incoming: String,

        /// Rewrite mode: strip, rewrite or anything else for pass-through
        #[arg(long, default_value = "none")]
        mode: String,

        /// Upstream path prefix used in rewrite mode
        #[arg(long, default_value = "")]
        target: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Decode a submitted advanced editor form body
    Decode {
        /// File holding the urlencoded body, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Preview {
            incoming,
            uri,
            mode,
            target,
            gateway,
            suffix,
        } => cmd_preview(&incoming, &uri, &mode, &target, gateway, suffix),
        Commands::Simple {
            id,
            uri,
            incoming,
            mode,
            target,
            description,
            pretty,
        } => cmd_simple(
            SimpleRouteForm {
                route_id: id,
                target_uri: uri,
                incoming_path: incoming,
                rewrite_type: mode,
                target_path: target,
                description,
            },
            pretty,
        ),
        Commands::Decode { input, pretty } => cmd_decode(&input, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_preview(
    incoming: &str,
    uri: &str,
    mode: &str,
    target: &str,
    gateway: Option<String>,
    suffix: Option<String>,
) -> Result<(), String> {
    let config = preview_config(gateway, suffix);
    println!("{}", render_preview(&config, incoming, uri, mode, target));
    Ok(())
}

fn cmd_simple(form: SimpleRouteForm, pretty: bool) -> Result<(), String> {
    let route = build_simple_route(&form).map_err(|e| format!("Invalid route: {}", e))?;
    println!("{}", to_json(&route, pretty)?);
    Ok(())
}

fn cmd_decode(input: &str, pretty: bool) -> Result<(), String> {
    let body = read_input(input)?;
    let pairs = parse_urlencoded(&body).map_err(|e| format!("Invalid form body: {}", e))?;
    log::debug!("Decoded {} form fields", pairs.len());

    let route = decode_route_form(&pairs).map_err(|e| format!("Invalid route: {}", e))?;
    println!("{}", to_json(&route, pretty)?);
    Ok(())
}
