use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Wire up env_logger from the `-v` count. Module targets only show up
/// from `-vv` on, where they start being useful.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,  // default: warnings and errors
        1 => LevelFilter::Info,  // -v: info and up
        2 => LevelFilter::Debug, // -vv: debug and up
        _ => LevelFilter::Trace, // -vvv: trace and up
    };
    let show_target = verbosity >= 2;

    let mut builder = Builder::new();
    builder.filter_level(level);

    builder.format(move |buf, record| {
        let label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        if show_target {
            writeln!(
                buf,
                "{} {} {}",
                label,
                record.target().bright_black(),
                record.args()
            )
        } else {
            writeln!(buf, "{} {}", label, record.args())
        }
    });

    builder.init();
}
