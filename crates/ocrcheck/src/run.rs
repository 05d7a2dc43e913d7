use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ocrcheck_bundle::{DEV_RESOURCE_ROOT, ResourceSource, Session, extract};
use ocrcheck_engine::Engine;
use ocrcheck_platform::env::publish_library_path;
use ocrcheck_platform::tag::{self, PlatformTag};
use tracing::{info, warn};

use crate::cli::App;
use crate::verdict::{MatchPolicy, Verdict};

pub fn run(app: &App) -> Result<Verdict> {
    validate_image(&app.image)?;

    let tag = tag::detect().context("identifying host platform")?;
    let source = ResourceSource::detect(Path::new(DEV_RESOURCE_ROOT))
        .context("locating resource bundle")?;
    let policy = MatchPolicy::from_query(&app.query);

    let (mut session, datapath) = prepare_resources(&source, &tag)?;

    // Hold the verdict until cleanup ran: errors out of recognition
    // must not skip the removal, and Drop only covers the panic path.
    let outcome = recognize_and_match(&datapath, &app.languages, &app.image, &policy);
    if let Some(session) = session.as_mut() {
        session.cleanup();
    }
    outcome
}

/// Extract the packaged bundle or point at the development tree, and
/// publish the native directory on the loader search path. Must happen
/// before the first engine call.
fn prepare_resources(
    source: &ResourceSource,
    tag: &PlatformTag,
) -> Result<(Option<Session>, PathBuf)> {
    match source {
        ResourceSource::Packaged { archive } => {
            info!(archive = %archive.display(), %tag, "extracting resource bundle");
            let (session, report) =
                extract(archive, tag).context("extracting resource bundle")?;
            info!(
                native = report.native_count,
                data = report.data_count,
                bytes = report.total_bytes,
                root = %session.root().display(),
                "bundle extracted"
            );
            publish_library_path(session.root())
                .context("publishing native library path")?;
            let datapath = session.tessdata_dir();
            Ok((Some(session), datapath))
        }
        ResourceSource::Development { root } => {
            let native = root.join("native").join(tag.as_str());
            info!(root = %root.display(), %tag, "running unpackaged, using development resources");
            publish_library_path(&native)
                .context("publishing native library path")?;
            Ok((None, root.join("tessdata")))
        }
    }
}

fn recognize_and_match(
    datapath: &Path,
    languages: &str,
    image: &Path,
    policy: &MatchPolicy,
) -> Result<Verdict> {
    let mut engine =
        Engine::new(Some(datapath), languages).context("initializing OCR engine")?;

    info!(image = %image.display(), "running OCR");
    let recognized = engine.recognize(image).context("running OCR")?;
    let trimmed = recognized.trim();
    info!("recognized text:\n{trimmed}");

    let verdict = policy.evaluate(&recognized);
    match verdict {
        Verdict::Success => {
            info!("SUCCESS: {policy}");
            println!("SUCCESS: {policy}");
        }
        Verdict::Failure => {
            warn!("FAILURE: {policy}");
            println!("FAILURE: {policy}");
        }
    }
    Ok(verdict)
}

/// Input validation runs before any extraction work: a bad image path
/// must not leave a temp directory behind or touch the bundle at all.
fn validate_image(image: &Path) -> Result<()> {
    if !image.is_file() {
        bail!("image file does not exist: {}", image.display());
    }
    File::open(image).with_context(|| format!("image file is not readable: {}", image.display()))?;
    Ok(())
}
