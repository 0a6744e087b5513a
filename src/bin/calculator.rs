use rustycalc::console;

fn main() {
    env_logger::init();

    if let Err(err) = console::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
