// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Registration of the chart's font files with the plotting backend.
//! The backend resolves text through its own font registry, so the
//! configured files are read and registered under one family name
//! before any text is drawn.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use plotters::style::{register_font, FontStyle};

use super::DrawError;

/// The family name all chart text is drawn with.
pub(super) const FAMILY: &str = "Arvo";

lazy_static::lazy_static! {
    // Registration leaks the font bytes (the registry wants 'static
    // data), so remember which pair is registered and only leak once.
    static ref REGISTERED: Mutex<Option<(PathBuf, PathBuf)>> = Mutex::new(None);
}

/// Register the regular and bold font files under [`FAMILY`]. A repeat
/// call with the same pair is a no-op.
pub(super) fn register(regular: &Path, bold: &Path) -> Result<(), DrawError> {
    let mut registered = REGISTERED
        .lock()
        .expect("font registration never panics while holding the lock");
    if let Some((r, b)) = registered.as_ref() {
        if r == regular && b == bold {
            return Ok(());
        }
    }

    let read = |file: &Path| -> Result<&'static [u8], DrawError> {
        let bytes = fs::read(file).map_err(|e| DrawError::Font {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Box::leak(bytes.into_boxed_slice()))
    };

    register_font(FAMILY, FontStyle::Normal, read(regular)?).map_err(|_| DrawError::Font {
        file: regular.to_path_buf(),
        message: "not a usable TTF/OTF font".to_string(),
    })?;
    register_font(FAMILY, FontStyle::Bold, read(bold)?).map_err(|_| DrawError::Font {
        file: bold.to_path_buf(),
        message: "not a usable TTF/OTF font".to_string(),
    })?;

    *registered = Some((regular.to_path_buf(), bold.to_path_buf()));
    Ok(())
}
