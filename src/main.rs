pub mod seq;
pub mod algo;
pub mod ext;
pub mod stats;
pub mod command;

mod err;
pub use err::Error;

fn init_logger() {
    use fern::{
        Dispatch,
        colors::{Color, ColoredLevelConfig},
    };
    let colors = ColoredLevelConfig::default()
        .info(Color::Green)
        .debug(Color::Cyan);
    // Report goes to stdout, therefore all messages are written to stderr.
    let res = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {:>5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(std::io::stderr())
        .apply();
    if let Err(e) = res {
        eprintln!("Could not initialize logger: {}", e);
    }
}

fn main() {
    init_logger();
    let args: Vec<_> = std::env::args().skip(1).collect();
    if let Err(e) = command::run(&args) {
        log::error!("{}", e.display());
        std::process::exit(1);
    }
}
