//! `sniff`: check and fix PHP source against the BigBite coding standard.

use sniffc::commands::{
    check_files, explain_sniff, fix_files, lex_file, CliOptions, ExitStatus,
};

fn main() {
    sniffc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(ExitStatus::Failure.code());
    }

    let command = &args[1];
    let status = match command.as_str() {
        "check" | "fix" => {
            let fixing = command == "fix";
            match CliOptions::parse(&args[2..], fixing) {
                Ok(options) if fixing => fix_files(&options),
                Ok(options) => check_files(&options),
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    if fixing {
                        eprintln!("Usage: sniff fix <paths...> [--config=<path>] [--report=full|json]");
                        eprintln!("                 [--tab-width=N] [--max-passes=N] [--dry-run]");
                    } else {
                        eprintln!("Usage: sniff check <paths...> [--config=<path>] [--report=full|json]");
                        eprintln!("                   [--tab-width=N]");
                    }
                    ExitStatus::Failure
                }
            }
        }
        "lex" => {
            let mut path = None;
            let mut tab_width = 4;
            let mut bad = false;
            for arg in args.iter().skip(2) {
                if let Some(width) = arg.strip_prefix("--tab-width=") {
                    match width.parse() {
                        Ok(width) => tab_width = width,
                        Err(_) => bad = true,
                    }
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    bad = true;
                }
            }
            match path {
                Some(path) if !bad => lex_file(path, tab_width),
                _ => {
                    eprintln!("Usage: sniff lex <file> [--tab-width=N]");
                    ExitStatus::Failure
                }
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sniff explain <code>");
                eprintln!("Example: sniff explain BigBite.Files.DeclareStatement");
                ExitStatus::Failure
            } else {
                explain_sniff(&args[2])
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitStatus::Clean
        }
        "version" | "--version" | "-V" => {
            println!("sniff {}", env!("CARGO_PKG_VERSION"));
            ExitStatus::Clean
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitStatus::Failure
        }
    };
    std::process::exit(status.code());
}

fn print_usage() {
    println!("sniff: PHP coding standard checker and fixer");
    println!();
    println!("Usage: sniff <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <paths...>     Report problems");
    println!("  fix <paths...>       Fix what can be fixed, then report the rest");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  explain <code>       Describe a sniff");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --config=<path>      Ruleset file (default: ./sniff.json if present)");
    println!("  --report=full|json   Output format (default: full)");
    println!("  --tab-width=N        Columns per tab stop (default: 4)");
    println!("  --max-passes=N       fix: ceiling on fixing passes (default: 10)");
    println!("  --dry-run            fix: report what would change without writing");
    println!();
    println!("Exit status: 0 clean or warnings only, 1 errors remain, 2 usage or I/O failure.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Tracing filter, e.g. RUST_LOG=sniffc=debug");
    println!("  SNIFF_LOG_TREE       Show tracing as an indented span tree");
    println!();
    println!("Examples:");
    println!("  sniff check src/");
    println!("  sniff check src/ --report=json");
    println!("  sniff fix src/class-my-widget.php --dry-run");
    println!("  sniff explain BigBite.Files.FileName");
}
