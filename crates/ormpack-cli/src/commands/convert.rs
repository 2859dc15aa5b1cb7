use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use ormpack_core::channel::Channel;
use ormpack_core::io::image_io::{OutputFormat, SaveOptions};
use ormpack_core::job::{run_job_reported, ChannelMap, JobConfig, JobStage, ProgressReporter};

use crate::summary::print_job_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ChannelArg {
    R,
    G,
    B,
    A,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::R => Channel::R,
            ChannelArg::G => Channel::G,
            ChannelArg::B => Channel::B,
            ChannelArg::A => Channel::A,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Png,
    Tga,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Tga => OutputFormat::Tga,
        }
    }
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input folder containing *_CS / *_NAM files
    pub input: PathBuf,

    /// Job config file (TOML); overrides the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output folder
    #[arg(short, long, default_value = "converted")]
    pub output: PathBuf,

    /// Smoothness channel in *_CS
    #[arg(long, value_enum, default_value = "a")]
    pub smooth_channel: ChannelArg,

    /// AO channel in *_NAM
    #[arg(long, value_enum, default_value = "a")]
    pub ao_channel: ChannelArg,

    /// Metallic channel in *_NAM
    #[arg(long, value_enum, default_value = "b")]
    pub metallic_channel: ChannelArg,

    /// Keep smoothness as-is instead of inverting it to roughness
    #[arg(long)]
    pub no_invert: bool,

    /// Write the ORM map as RGBA with an opaque alpha channel
    #[arg(long)]
    pub keep_alpha: bool,

    /// Output image format
    #[arg(long, value_enum, default_value = "png")]
    pub format: FormatArg,

    /// Disable RLE compression for TGA output
    #[arg(long)]
    pub no_tga_rle: bool,
}

/// Bridges core progress callbacks onto an indicatif bar.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: JobStage, total_items: Option<usize>) {
        if let Some(total) = total_items {
            self.bar.set_length(total as u64);
        }
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn status(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid job config")?
    } else {
        build_config_from_args(args)
    };

    print_job_summary(&config);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reporter = BarReporter { bar: pb.clone() };
    let summary = run_job_reported(&config, &reporter)?;
    pb.finish_and_clear();

    if summary.pairs == 0 {
        bail!(
            "No complete CS/NAM pairs found in {}",
            config.input.display()
        );
    }

    for out in &summary.outputs {
        println!(
            "{}: wrote {}, {}, {}",
            out.prefix,
            out.color.display(),
            out.normal.display(),
            out.orm.display()
        );
    }
    println!(
        "\nConverted {} pair(s) into {}",
        summary.pairs,
        config.output.display()
    );

    Ok(())
}

fn build_config_from_args(args: &ConvertArgs) -> JobConfig {
    JobConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        channels: ChannelMap {
            smoothness: args.smooth_channel.into(),
            ao: args.ao_channel.into(),
            metallic: args.metallic_channel.into(),
        },
        invert_smoothness: !args.no_invert,
        drop_orm_alpha: !args.keep_alpha,
        save: SaveOptions {
            format: args.format.into(),
            tga_rle: !args.no_tga_rle,
        },
    }
}
