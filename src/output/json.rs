use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::error::SpritecutError;
use crate::split::ExtractedSprite;
use crate::sprite::RowBand;

#[derive(Serialize)]
struct Manifest {
    meta: Meta,
    source: Source,
    sprites: Vec<ManifestSprite>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Source {
    image: String,
    size: Size,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct ManifestSprite {
    index: usize,
    image: String,
    rows: RowBand,
    size: Size,
}

/// Write the JSON manifest for a split sprite sheet, returning its path
pub fn write_manifest(
    sheet_path: &Path,
    sheet_size: (u32, u32),
    sprites: &[ExtractedSprite],
    output_dir: &Path,
    base_name: &str,
) -> Result<PathBuf> {
    let (width, height) = sheet_size;
    let manifest = Manifest {
        meta: Meta {
            app: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
        source: Source {
            image: file_name(sheet_path),
            size: Size {
                w: width,
                h: height,
            },
        },
        sprites: sprites
            .iter()
            .map(|sprite| ManifestSprite {
                index: sprite.index,
                image: file_name(&sprite.path),
                rows: sprite.band,
                size: Size {
                    w: width,
                    h: sprite.band.height(),
                },
            })
            .collect(),
    };

    let path = output_dir.join(format!("{}.json", base_name));
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, json).map_err(|e| SpritecutError::OutputWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
