//! `ahk-scan`: probe the AutoHotkey external scanner from the command line.

use std::sync::Once;

use ahk_scan::{parse_args, run};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set; a no-op otherwise.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let result = run(&config, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: ahk-scan <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  probe <file> --at=<offset>   Run the external scanner at a byte offset");
    eprintln!("  sweep <file>                 Run it at every character boundary");
    eprintln!("  kinds                        List the external token kinds");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --valid=<kinds>   Comma-separated kinds the grammar accepts (default: all)");
    eprintln!();
    eprintln!("Set RUST_LOG=trace to log every recognizer attempt.");
}
