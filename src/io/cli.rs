//! Command-line interface for generating identicon PNG files in batches

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use image::Rgba;
use log::info;

use crate::generation::Digest;
use crate::identicon::Identicon;
use crate::io::configuration::{DEFAULT_IMAGE_SIZE, DEFAULT_RESOLUTION};
use crate::io::error::{Result, invalid_configuration};
use crate::io::export::{output_path, save_banner, save_png};
use crate::io::progress::BatchProgress;
use crate::options::Options;

#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Generate deterministic identicon avatars from identifier strings"
)]
/// Command-line arguments for the identicon generator
pub struct Cli {
    /// Identifiers to generate identicons for
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Directory receiving one PNG per identifier
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Tiles per side
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Image edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub size: u32,

    /// Background color as #rrggbb or #rrggbbaa
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Fixed foreground color as #rrggbb or #rrggbbaa (derived from the digest otherwise)
    #[arg(long, value_name = "HEX")]
    pub foreground: Option<String>,

    /// Digest function used as entropy source
    #[arg(short, long, value_enum, default_value_t = DigestKind::Fnv128)]
    pub digest: DigestKind,

    /// Write all identicons into a single banner image instead of separate files
    #[arg(short, long, value_name = "FILE")]
    pub banner: Option<PathBuf>,

    /// Print each tile matrix to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Built-in digest functions selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DigestKind {
    /// 128-bit FNV-1
    Fnv128,
    /// MD5
    Md5,
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
}

impl From<DigestKind> for Digest {
    fn from(kind: DigestKind) -> Self {
        match kind {
            DigestKind::Fnv128 => Self::FNV128,
            DigestKind::Md5 => Self::MD5,
            DigestKind::Sha256 => Self::SHA256,
            DigestKind::Sha512 => Self::SHA512,
        }
    }
}

impl Cli {
    /// Options described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a color argument is not a valid hex color
    pub fn options(&self) -> Result<Options> {
        let mut options = Options::default()
            .with_resolution(self.resolution)
            .with_image_size(self.size)
            .with_digest(self.digest.into());

        if let Some(background) = &self.background {
            options = options.with_background(parse_color("background", background)?);
        }
        if let Some(foreground) = &self.foreground {
            options = options.with_foreground(parse_color("foreground", foreground)?);
        }

        Ok(options)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
///
/// Six-digit colors are fully opaque.
///
/// # Errors
///
/// Returns an invalid configuration error naming `parameter` if the value is
/// not six or eight hexadecimal digits
pub fn parse_color(parameter: &'static str, value: &str) -> Result<Rgba<u8>> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let bytes = hex::decode(digits)
        .map_err(|e| invalid_configuration(parameter, &value, &e))?;

    match bytes.as_slice() {
        &[red, green, blue] => Ok(Rgba([red, green, blue, u8::MAX])),
        &[red, green, blue, alpha] => Ok(Rgba([red, green, blue, alpha])),
        _ => Err(invalid_configuration(
            parameter,
            &value,
            &"expected 6 or 8 hexadecimal digits",
        )),
    }
}

/// Generates and writes the identicons requested on the command line
pub struct BatchRunner {
    cli: Cli,
    progress: BatchProgress,
}

impl BatchRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.quiet {
            BatchProgress::hidden(cli.ids.len())
        } else {
            BatchProgress::new(cli.ids.len())
        };

        Self { cli, progress }
    }

    /// Generate every identicon and write the output files
    ///
    /// Returns the paths written, one per identifier or a single banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, an identifier is empty, or
    /// an output file cannot be written
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let options = self.cli.options()?;
        let mut identicons = Vec::with_capacity(self.cli.ids.len());

        for id in &self.cli.ids {
            let identicon = Identicon::new(id.as_str(), options)?;
            if self.cli.print {
                Self::print_matrix(&identicon);
            }
            self.progress.advance(id);
            identicons.push(identicon);
        }

        let written = if let Some(banner) = &self.cli.banner {
            save_banner(&identicons, banner)?;
            info!("Wrote banner of {} identicons to {}", identicons.len(), banner.display());
            vec![banner.clone()]
        } else {
            let mut paths = Vec::with_capacity(identicons.len());
            for identicon in &identicons {
                let path = output_path(&self.cli.output, identicon.id());
                save_png(identicon, &path)?;
                info!("Wrote {}", path.display());
                paths.push(path);
            }
            paths
        };

        self.progress.finish();
        Ok(written)
    }

    // Matrix printing is the requested output of --print
    #[allow(clippy::print_stdout)]
    fn print_matrix(identicon: &Identicon) {
        println!("{} ({})", identicon.id(), identicon.hex_digest());
        println!("{}", identicon.matrix());
    }
}
