use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::crawl::target::{CrawlStep, CrawlTarget};
use crate::driver::driver::Driver;
use crate::driver::element::{Element, Timeouts};
use crate::error::{DriverResult, ScenarioError};

pub const CRAWLS_DIR: &str = "crawls";
pub const DEFAULT_PAGE_NAME: &str = "unknown";

/// What a crawl did and where the dump went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub target: CrawlTarget,
    /// Navigation steps that failed and were skipped
    pub failed_steps: usize,
    pub output_path: PathBuf,
    pub bytes: usize,
}

/// `<base_dir>/crawls/<page_name>.xml`, with `unknown` for a missing or
/// empty name. The name is otherwise used verbatim.
pub fn crawl_output_path(base_dir: &Path, page_name: Option<&str>) -> PathBuf {
    let name = page_name
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_PAGE_NAME);
    base_dir.join(CRAWLS_DIR).join(format!("{}.xml", name))
}

/// Navigate best-effort to `page_name`, then dump the UI tree to disk.
///
/// Navigation failures are logged and skipped, so the dump may show a
/// different screen than the one asked for. Page-source and filesystem
/// errors are returned.
pub fn run_crawl(
    driver: &dyn Driver,
    page_name: Option<&str>,
    base_dir: &Path,
    timeouts: &Timeouts,
) -> Result<CrawlReport, ScenarioError> {
    let target = CrawlTarget::parse(page_name.unwrap_or(DEFAULT_PAGE_NAME));
    info!(page = page_name.unwrap_or(DEFAULT_PAGE_NAME), %target, "crawling");

    let failed_steps = navigate(driver, target, timeouts);
    if failed_steps > 0 {
        warn!(%target, failed_steps, "could not confirm navigation, using current screen");
    }

    let xml = driver.page_source()?;
    let output_path = crawl_output_path(base_dir, page_name);
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&output_path, xml.as_bytes())?;
    info!("crawl saved to: {}", output_path.display());

    Ok(CrawlReport {
        target,
        failed_steps,
        output_path,
        bytes: xml.len(),
    })
}

/// Run the target's plan, returning how many steps failed.
pub fn navigate(driver: &dyn Driver, target: CrawlTarget, timeouts: &Timeouts) -> usize {
    target
        .plan(timeouts)
        .iter()
        .filter(|step| match run_step(driver, step, timeouts) {
            Ok(()) => false,
            Err(e) => {
                warn!("navigation step {:?} failed, continuing: {}", step, e);
                true
            }
        })
        .count()
}

fn run_step(driver: &dyn Driver, step: &CrawlStep, timeouts: &Timeouts) -> DriverResult<()> {
    match step {
        CrawlStep::Pause(duration) => {
            driver.pause(*duration);
            Ok(())
        }
        CrawlStep::Tap { selector, timeout } => {
            let element = Element::new(driver, *selector);
            element.wait_for_displayed(*timeout, timeouts.poll_interval)?;
            info!("found {}, clicking", selector);
            element.click()
        }
        CrawlStep::Verify { selector, timeout } => {
            Element::new(driver, *selector).wait_for_displayed(*timeout, timeouts.poll_interval)
        }
    }
}
