use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::info;

use crate::channel::{extract_channel, invert, merge_rgb, resize_to, strip_alpha, with_opaque_alpha};
use crate::discover::{find_pairs, TexturePair};
use crate::error::Result;
use crate::io::image_io::{open_rgba, save_rgb, save_rgba};

use super::config::JobConfig;
use super::types::{JobStage, JobSummary, NoOpReporter, PairOutput, ProgressReporter};

/// Convert one CS/NAM pair into the C/N/ORM triplet.
///
/// The color and normal outputs are straight RGB copies of the sources. The
/// ORM pack is assembled on the NAM map's canvas: the smoothness plane is
/// resampled when the two sources differ in size.
pub fn process_pair(pair: &TexturePair, config: &JobConfig) -> Result<PairOutput> {
    let cs = open_rgba(&pair.color_smooth)?;
    let nam = open_rgba(&pair.normal_ao_metal)?;
    let (nam_w, nam_h) = nam.dimensions();

    let ext = config.save.format.extension();
    let color = config.output.join(format!("{}_C.{ext}", pair.prefix));
    let normal = config.output.join(format!("{}_N.{ext}", pair.prefix));
    let orm = config.output.join(format!("{}_ORM.{ext}", pair.prefix));

    save_rgb(&strip_alpha(&cs), &color, &config.save)?;
    save_rgb(&strip_alpha(&nam), &normal, &config.save)?;

    let ao = extract_channel(&nam, config.channels.ao);
    let metallic = extract_channel(&nam, config.channels.metallic);
    let smoothness = resize_to(
        &extract_channel(&cs, config.channels.smoothness),
        nam_w,
        nam_h,
    );
    let roughness = if config.invert_smoothness {
        invert(&smoothness)
    } else {
        smoothness
    };

    let packed = merge_rgb(&ao, &roughness, &metallic)?;
    if config.drop_orm_alpha {
        save_rgb(&packed, &orm, &config.save)?;
    } else {
        save_rgba(&with_opaque_alpha(&packed), &orm, &config.save)?;
    }

    Ok(PairOutput {
        prefix: pair.prefix.clone(),
        color,
        normal,
        orm,
    })
}

/// Run a full conversion job with a thread-safe progress reporter.
///
/// Pairs are converted in parallel; the summary keeps discovery order.
/// An input folder with no complete pairs yields an empty summary, not an
/// error -- the caller decides how to surface that.
pub fn run_job_reported(
    config: &JobConfig,
    reporter: &dyn ProgressReporter,
) -> Result<JobSummary> {
    reporter.begin_stage(JobStage::Scanning, None);
    let pairs = find_pairs(&config.input)?;
    reporter.finish_stage();
    info!(
        pairs = pairs.len(),
        input = %config.input.display(),
        "Discovered input pairs"
    );

    reporter.begin_stage(JobStage::Converting, Some(pairs.len()));
    let done = AtomicUsize::new(0);
    let outputs: Vec<PairOutput> = pairs
        .par_iter()
        .map(|pair| {
            reporter.status(&pair.prefix);
            let output = process_pair(pair, config)?;
            reporter.advance(done.fetch_add(1, Ordering::SeqCst) + 1);
            Ok(output)
        })
        .collect::<Result<_>>()?;
    reporter.finish_stage();

    info!(converted = outputs.len(), output = %config.output.display(), "Conversion complete");
    Ok(JobSummary {
        pairs: pairs.len(),
        outputs,
    })
}

/// Run a full conversion job without progress reporting.
pub fn run_job(config: &JobConfig) -> Result<JobSummary> {
    run_job_reported(config, &NoOpReporter)
}
