//! Process- and browser-launch collaborators
//!
//! Both launches are fire-and-forget by contract: the core supplies a path
//! and never waits on, monitors, or receives results from what it started.

use std::io;
use std::path::Path;
use std::process::Command;

/// Seam between the renderer and the operating system.
///
/// The renderer only ever supplies a path; how viewers and browsers get
/// started is this trait's business. Tests substitute a recording
/// implementation.
pub trait Launcher {
    /// Start a new, independent viewer instance against a record file.
    fn launch_viewer(&self, target: &Path) -> io::Result<()>;

    /// Open a local file in the user's default browser.
    fn open_browser(&self, target: &Path) -> io::Result<()>;
}

/// Launcher backed by the operating system.
///
/// Viewer instances are new invocations of this same program.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch_viewer(&self, target: &Path) -> io::Result<()> {
        let program = std::env::current_exe()?;
        // Spawn and drop the child: fire-and-forget.
        Command::new(program).arg(target).spawn()?;
        Ok(())
    }

    fn open_browser(&self, target: &Path) -> io::Result<()> {
        webbrowser::open(&target.to_string_lossy())
    }
}
