// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from drawing or exporting the chart.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Couldn't use font file '{file}': {message}")]
    Font { file: PathBuf, message: String },

    #[error("While drawing the {layer} layer: {message}")]
    Layer {
        layer: &'static str,
        message: String,
    },

    #[error("Meteor shower '{name}': {message}")]
    Meteors { name: String, message: String },

    #[error("Couldn't write '{file}': {message}")]
    Write { file: PathBuf, message: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
