//! Callback handling for activated result rows.
//!
//! When the user activates a row, the host re-invokes this binary with the
//! action method and parameters the formatter attached to it. The
//! [`ActionDispatcher`] routes those callbacks to the system: browser,
//! clipboard, or speech. Each effect sits behind a trait so tests can
//! observe dispatches without touching the desktop.

use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::record::RecordStore;

/// Opens a URL in the default browser.
pub const METHOD_OPEN_URL: &str = "open_url";
/// Records the translation, then copies it to the clipboard.
pub const METHOD_COPY: &str = "copy2clipboard";
/// Speaks the source text aloud.
pub const METHOD_SPEAK: &str = "speak";

pub trait UrlOpener: Send {
    fn open(&self, url: &str) -> Result<()>;
}

pub trait ClipboardWriter: Send {
    fn write(&self, text: &str) -> Result<()>;
}

pub trait Speaker: Send {
    fn speak(&self, text: &str) -> Result<()>;
}

/// Opens URLs with the desktop's default handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        opener::open(url).with_context(|| format!("Failed to open {url}"))
    }
}

/// Writes to the system clipboard.
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to access the system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to write to the system clipboard")?;
        Ok(())
    }
}

/// Speaks text through the platform speech command.
pub struct SystemSpeaker;

impl Speaker for SystemSpeaker {
    /// Spawns the speech command and returns without waiting; the child
    /// process owns the playback.
    fn speak(&self, text: &str) -> Result<()> {
        spawn_speech(text).context("Failed to start a speech command")?;
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn spawn_speech(text: &str) -> std::io::Result<std::process::Child> {
    Command::new("say")
        .arg(text)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

#[cfg(target_os = "windows")]
fn spawn_speech(text: &str) -> std::io::Result<std::process::Child> {
    let escaped = text.replace('\'', "''");
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{escaped}')"
    );
    Command::new("PowerShell")
        .args(["-NoProfile", "-WindowStyle", "Hidden", "-Command", &script])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn spawn_speech(text: &str) -> std::io::Result<std::process::Child> {
    let mut last = std::io::Error::from(std::io::ErrorKind::NotFound);
    for program in ["spd-say", "espeak"] {
        match Command::new(program)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => return Ok(child),
            Err(e) => last = e,
        }
    }
    Err(last)
}

/// Routes host callbacks to the configured system effects.
pub struct ActionDispatcher {
    records: RecordStore,
    opener: Box<dyn UrlOpener>,
    clipboard: Box<dyn ClipboardWriter>,
    speaker: Box<dyn Speaker>,
}

impl ActionDispatcher {
    pub fn new(records: RecordStore) -> Self {
        Self {
            records,
            opener: Box::new(SystemOpener),
            clipboard: Box::new(SystemClipboard),
            speaker: Box::new(SystemSpeaker),
        }
    }

    #[cfg(test)]
    fn with_parts(
        records: RecordStore,
        opener: Box<dyn UrlOpener>,
        clipboard: Box<dyn ClipboardWriter>,
        speaker: Box<dyn Speaker>,
    ) -> Self {
        Self {
            records,
            opener,
            clipboard,
            speaker,
        }
    }

    /// Executes one callback from the host.
    ///
    /// Unknown methods are logged and ignored so a newer host cannot crash
    /// an older plugin; wrong parameter counts are an error.
    pub fn dispatch(&self, method: &str, parameters: &[String]) -> Result<()> {
        match method {
            METHOD_OPEN_URL => self.open_url(parameters),
            METHOD_COPY => self.copy_to_clipboard(parameters),
            METHOD_SPEAK => self.speak(parameters),
            other => {
                crate::warn!("ignoring unknown action method: {other}");
                Ok(())
            }
        }
    }

    /// With one parameter the URL opens verbatim; with two, the first is a
    /// query that gets percent-encoded and appended to the second.
    fn open_url(&self, parameters: &[String]) -> Result<()> {
        match parameters {
            [url] => self.opener.open(url),
            [query, url] => {
                let url = format!("{url}{}", urlencoding::encode(query));
                self.opener.open(&url)
            }
            _ => bail!(
                "open_url expects 1 or 2 parameters, got {}",
                parameters.len()
            ),
        }
    }

    fn copy_to_clipboard(&self, parameters: &[String]) -> Result<()> {
        let [query, translation] = parameters else {
            bail!(
                "copy2clipboard expects 2 parameters, got {}",
                parameters.len()
            );
        };
        // A failed record must not block the copy.
        if let Err(e) = self.records.record(query, translation) {
            crate::warn!("failed to record translation: {e:#}");
        }
        self.clipboard.write(translation.trim())
    }

    fn speak(&self, parameters: &[String]) -> Result<()> {
        let [text] = parameters else {
            bail!("speak expects 1 parameter, got {}", parameters.len());
        };
        self.speaker.speak(text)
    }
}
