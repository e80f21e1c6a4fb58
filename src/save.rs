//! Plain-text export of both hands.
//!
//! The file is meant for people to read. There is no loader.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::SaveError;
use crate::hand::Hand;

/// Writes the export text for both hands to `out`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_hands<W: Write>(out: &mut W, player: &Hand, dealer: &Hand) -> io::Result<()> {
    writeln!(out, "Player's Hand:")?;
    for card in player.cards() {
        writeln!(out, "{card}")?;
    }
    writeln!(out)?;
    writeln!(out, "Dealer's Hand:")?;
    for card in dealer.cards() {
        writeln!(out, "{card}")?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes both hands to it.
///
/// # Errors
///
/// Returns [`SaveError::Io`] if the file cannot be created or written.
pub fn save_game(path: &Path, player: &Hand, dealer: &Hand) -> Result<(), SaveError> {
    let to_error = |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write_hands(&mut out, player, dealer).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    log::info!("saved hands to {}", path.display());
    Ok(())
}
