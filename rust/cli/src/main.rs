use std::io;

fn main() {
    slotline_cli::logging::init_logging();
    let code = slotline_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
