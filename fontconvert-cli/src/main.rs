//! `fontconvert` CLI: turn a TrueType/OpenType font into an Adafruit GFX
//! font header.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info};

use fontconvert_core::range::DEFAULT_FIRST;
use fontconvert_core::{CodeRange, ConvertError, ConvertedFont, FontConverter};
use fontconvert_fonts::{DEFAULT_DPI, FontData, FontError, MonoRasterizer};
use fontconvert_header::{HeaderOptions, symbol_name, write_header};

const USAGE: &str = "Usage:  fontfile size [first] [last]";

#[derive(Parser)]
#[command(
    version,
    about = "Convert a TrueType/OpenType font into an Adafruit GFX font header"
)]
struct Cli {
    /// Font file to convert (.ttf, .otf)
    font: PathBuf,

    /// Point size
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Character codes: `LAST`, or `FIRST LAST` (decimal, 0x hex, or 'c')
    #[arg(value_name = "CODE", num_args = 0..=2, value_parser = parse_code)]
    codes: Vec<u32>,

    /// Write the header to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display resolution in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// C symbol name (default: derived from the font file name)
    #[arg(long, value_name = "SYMBOL")]
    name: Option<String>,

    /// Bitmap bytes per line in the header
    #[arg(long, default_value_t = HeaderOptions::default().bytes_per_line)]
    bytes_per_line: usize,

    /// Omit the PROGMEM qualifier
    #[arg(long)]
    no_progmem: bool,

    /// Omit the size estimate comments
    #[arg(long)]
    no_summary: bool,

    /// Log more (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log less (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    /// A single code is the last one, as in the classic tool.
    fn range(&self) -> CodeRange {
        match *self.codes.as_slice() {
            [] => CodeRange::default(),
            [last] => CodeRange::new(DEFAULT_FIRST, last),
            [first, last, ..] => CodeRange::new(first, last),
        }
    }

    fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            bytes_per_line: self.bytes_per_line,
            progmem: !self.no_progmem,
            size_summary: !self.no_summary,
        }
    }

    fn log_level(&self) -> LevelFilter {
        const LEVELS: [LevelFilter; 6] = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let index = (3 + usize::from(self.verbose))
            .saturating_sub(usize::from(self.quiet))
            .min(LEVELS.len() - 1);
        LEVELS[index]
    }
}

/// Parse a character code: decimal, `0x` hex, or a quoted character.
fn parse_code(s: &str) -> Result<u32, String> {
    let code = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(inner) = s.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        let mut chars = inner.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(u32::from(c)),
            _ => None,
        }
    } else {
        s.parse().ok()
    };
    code.ok_or_else(|| {
        format!("invalid character code \"{s}\": expected decimal, 0x hex or a quoted character")
    })
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures that abort a run.
#[derive(Debug)]
enum CliError {
    Font(FontError),
    Convert(ConvertError),
    Create(PathBuf, io::Error),
    Write(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(e) => write!(f, "{e}"),
            Self::Convert(e) => write!(f, "conversion failed: {e}"),
            Self::Create(path, e) => write!(f, "cannot create {}: {e}", path.display()),
            Self::Write(e) => write!(f, "cannot write header: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FontError> for CliError {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

impl From<ConvertError> for CliError {
    fn from(e: ConvertError) -> Self {
        Self::Convert(e)
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    env_logger::builder()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let range = cli.range();
    let font_path = cli.font.to_string_lossy();
    let symbol = cli
        .name
        .clone()
        .unwrap_or_else(|| symbol_name(&font_path, cli.size, range));

    info!("Processing font {font_path}");
    info!("Generating symbol {symbol}");

    let mut sink = Sink::open(cli.output.as_deref())?;
    let converted = convert(cli, range)?;
    write_header(&mut sink, &converted, &symbol, &cli.header_options())
        .map_err(CliError::Write)?;
    sink.commit()?;

    if let Some(path) = &cli.output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn convert(cli: &Cli, range: CodeRange) -> Result<ConvertedFont, CliError> {
    let font = FontData::from_file(&cli.font)?;
    let rasterizer = MonoRasterizer::new(font, cli.size, cli.dpi)?;
    let mut converter = FontConverter::new(rasterizer, range);
    converter.convert();
    converter.finish().map_err(CliError::from)
}

// ---------------------------------------------------------------------------
// Output sinks
// ---------------------------------------------------------------------------

/// Where the header goes.
enum Sink {
    Stdout(io::StdoutLock<'static>),
    File(PendingFile),
}

impl Sink {
    fn open(output: Option<&Path>) -> Result<Self, CliError> {
        match output {
            Some(path) => Ok(Self::File(PendingFile::create(path)?)),
            None => Ok(Self::Stdout(io::stdout().lock())),
        }
    }

    /// Flush, and move a file into place.
    fn commit(self) -> Result<(), CliError> {
        match self {
            Self::Stdout(mut out) => out.flush().map_err(CliError::Write),
            Self::File(file) => file.commit(),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(file) => file.flush(),
        }
    }
}

/// A header written to `<target>.tmp` and renamed over `target` on
/// commit. The destination is untouched until then; dropping without a
/// commit removes the temporary file.
struct PendingFile {
    tmp: PathBuf,
    target: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl PendingFile {
    fn create(target: &Path) -> Result<Self, CliError> {
        let mut tmp = OsString::from(target.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let file = File::create(&tmp).map_err(|e| CliError::Create(target.to_path_buf(), e))?;
        Ok(Self {
            tmp,
            target: target.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        })
    }

    fn commit(mut self) -> Result<(), CliError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(CliError::Write)?;
        }
        fs::rename(&self.tmp, &self.target)
            .map_err(|e| CliError::Create(self.target.clone(), e))
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.as_mut().map_or(Ok(0), |w| w.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.as_mut().map_or(Ok(()), BufWriter::flush)
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        // Nothing left to clean up after a successful rename.
        if !self.tmp.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.tmp) {
            debug!("cannot remove {}: {e}", self.tmp.display());
        }
    }
}
