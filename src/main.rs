use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use num_bigint::BigUint;

use crockford32::{decode_strict, encode, Options};

/// Encode decimal integers as Crockford base32, or decode them back.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Values to convert. Read one per line from stdin when omitted.
    #[arg()]
    values: Vec<String>,

    #[arg(short, long)]
    decode: bool,

    /// Append (or, with --decode, verify) a check symbol.
    #[arg(short, long)]
    checksum: bool,

    /// Split the output into this many hyphen-separated groups.
    #[arg(short, long, default_value_t = 1)]
    partitions: usize,

    /// Log more to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> Options {
        Options::new()
            .with_checksum(self.checksum)
            .with_partitions(self.partitions)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let res = run(&args);
    if let Err(why) = &res {
        log::error!("Exiting due to error: {why:?}");
    }

    log::logger().flush();
    res
}

fn run(args: &Args) -> anyhow::Result<()> {
    let opts = args.options();
    log::debug!("{opts:?}, decode = {}", args.decode);

    let mut writer = BufWriter::new(io::stdout());
    let mut convert = |value: &str| -> anyhow::Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        let line = if args.decode {
            decode_strict::<BigUint>(value, opts)
                .with_context(|| format!("failed to decode {value:?}"))?
                .to_string()
        } else {
            let parsed = value
                .parse::<BigUint>()
                .with_context(|| format!("not a non-negative integer: {value:?}"))?;
            encode(parsed, opts)
        };

        log::trace!("{value} -> {line}");
        writeln!(writer, "{line}").context("write error")
    };

    if args.values.is_empty() {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let line = line.context("read error")?;
            convert(&line)?;
        }
    } else {
        for value in &args.values {
            convert(value)?;
        }
    }

    writer.flush().context("write error")
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
