//! Diagnostic capture of outgoing voice payloads.

use std::fs;
use std::io;
use std::path::PathBuf;

use uuid::Uuid;

/// Sink receiving a copy of each outgoing multipart voice body.
///
/// Injected at transport construction; a sink failure is logged and never
/// fails the request.
pub trait SoundLogSink: Send + Sync {
    /// Persist one outgoing payload.
    fn record(&self, payload: &[u8]) -> io::Result<()>;
}

/// Default sink: one file per upload under a fixed directory.
#[derive(Debug, Clone)]
pub struct FileSoundLog {
    dir: PathBuf,
}

impl FileSoundLog {
    /// Sink writing into `dir`, created on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink writing into a `nlquery-sound-log` directory under the
    /// system temp dir.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("nlquery-sound-log"))
    }

    /// Directory the sink writes into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl SoundLogSink for FileSoundLog {
    fn record(&self, payload: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("voice-{}.bin", Uuid::new_v4().simple()));
        fs::write(path, payload)
    }
}
