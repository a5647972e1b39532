//! Eastbound CLI
//!
//! Moves type-qualifying `const` from the west side of a type to the east
//! side, byte for byte otherwise.

use eastbound_cli::commands::{parse_args, run};

fn main() {
    eastbound_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        if args.is_empty() {
            std::process::exit(2);
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("eastbound {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'eastbound --help' for usage");
            std::process::exit(2);
        }
    };

    std::process::exit(run(&options));
}

fn print_usage() {
    eprintln!("eastbound: rewrite C++ sources from west const to east const");
    eprintln!();
    eprintln!("Usage: eastbound [options] <file.cc>...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --stdout         Print rewritten text instead of writing files");
    eprintln!("  --check          Write nothing; exit 1 if any file would change");
    eprintln!("  -h, --help       Show this help message");
    eprintln!("  -V, --version    Show version information");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  eastbound src/main.cc            # rewrite in place");
    eprintln!("  eastbound --stdout src/main.cc   # print the result");
    eprintln!("  eastbound --check src/*.cc       # CI formatting gate");
}
