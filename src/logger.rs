use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the stderr logger. Later calls only change the level.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| Logger {
        stderr: BufferWriter::stderr(ColorChoice::Auto),
    });

    // Fails only if another logger is already installed.
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

/// Writes one coloured line per record to stderr.
struct Logger {
    stderr: BufferWriter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (tag, color) = match record.level() {
            Level::Error => ('E', Color::Red),
            Level::Warn => ('W', Color::Yellow),
            Level::Info => ('I', Color::Cyan),
            Level::Debug => ('D', Color::Green),
            Level::Trace => ('T', Color::White),
        };

        let mut buf = self.stderr.buffer();
        let _ = buf.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buf, "[{tag}]");
        let _ = buf.reset();
        let _ = writeln!(buf, " {}: {}", record.target(), record.args());
        let _ = self.stderr.print(&buf);
    }

    fn flush(&self) {}
}
