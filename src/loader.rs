//! Reading world maps and alien names from disk.
//!
//! World file format, one city per line:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! The first token names a city, every following token is a
//! `direction=target` road. Blank lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::world::{Direction, LayoutLine, RoadDecl, WorldLayout};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed road '{token}', expected direction=city")]
    MalformedRoad { line: usize, token: String },
}

/// Parses world-file text into a layout, preserving line and token order
///
/// # Examples
/// ```
/// use invasim::loader::parse_world;
///
/// let layout = parse_world("Foo north=Bar\nBar south=Foo\n").unwrap();
/// assert_eq!(layout.lines.len(), 2);
/// assert_eq!(layout.build().city_count(), 2);
/// ```
pub fn parse_world(text: &str) -> Result<WorldLayout, LoadError> {
    let mut layout = WorldLayout::new();

    for (index, raw) in text.lines().enumerate() {
        let mut tokens = raw.split_whitespace();
        let Some(city) = tokens.next() else {
            continue;
        };

        let roads = tokens
            .map(|token| parse_road(token, index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        layout.lines.push(LayoutLine {
            city: city.to_string(),
            roads,
        });
    }

    Ok(layout)
}

fn parse_road(token: &str, line: usize) -> Result<RoadDecl, LoadError> {
    let malformed = || LoadError::MalformedRoad {
        line,
        token: token.to_string(),
    };

    let (direction, target) = token.split_once('=').ok_or_else(malformed)?;
    if target.is_empty() || target.contains('=') {
        return Err(malformed());
    }

    let direction = Direction::parse(direction);
    if !direction.is_compass() {
        warn!("Line {}: unrecognized direction in '{}', reverse road will be unlabeled", line, token);
    }

    Ok(RoadDecl {
        direction,
        to: target.to_string(),
    })
}

/// Loads a world layout from a file
pub fn load_world(path: &Path) -> Result<WorldLayout, LoadError> {
    info!("Loading world map from: {:?}", path);

    let text = read(path)?;
    let layout = parse_world(&text)?;

    debug!(
        "World file declares {} cities and {} roads",
        layout.lines.len(),
        layout.declared_roads()
    );
    Ok(layout)
}

/// Reads at most `count` alien names, one per line, in file order
pub fn load_alien_names(path: &Path, count: usize) -> Result<Vec<String>, LoadError> {
    info!("Loading up to {} alien names from: {:?}", count, path);

    let text = read(path)?;
    let names: Vec<String> = text
        .lines()
        .take(count)
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    if names.len() < count {
        warn!("Requested {} aliens but only {} names are available", count, names.len());
    }
    Ok(names)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
