use crate::error::{Result as ServerErrorResult, ServerError};

use postbox_auth::fingerprint_from_authorized_key;
use postbox_core::Identity;

use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "postbox-server")]
#[command(about = "Terminal inbox addressed by SSH public key fingerprints")]
#[command(version)]
pub struct Cli {
    /// OpenSSH public key identifying the console user (e.g. ~/.ssh/id_ed25519.pub)
    #[arg(long)]
    pub public_key: Option<PathBuf>,

    /// Terminal width reported to the session
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Terminal height reported to the session
    #[arg(long, default_value_t = 24)]
    pub height: u16,
}

impl Cli {
    /// Fingerprint of the key passed with `--public-key`, if any.
    pub fn identity(&self) -> ServerErrorResult<Option<Identity>> {
        self.public_key.as_deref().map(identity_from_file).transpose()
    }
}

pub fn identity_from_file(path: &Path) -> ServerErrorResult<Identity> {
    let line = std::fs::read_to_string(path).map_err(|source| ServerError::PublicKeyFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok(fingerprint_from_authorized_key(&line)?)
}
