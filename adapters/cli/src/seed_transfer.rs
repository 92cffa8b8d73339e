use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use conway_core::{CellCoord, GridSize};
use conway_world::Grid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SEED_DOMAIN: &str = "life";
const SEED_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded seed payload.
pub(crate) const SEED_HEADER: &str = "life:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';
/// Largest grid, in cells, that a seed or the command line may request.
pub(crate) const MAX_CELLS: u64 = 1 << 24;

/// Grid dimensions plus the cells that start alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SeedSnapshot {
    /// Number of rows in the grid.
    pub(crate) rows: u32,
    /// Number of columns in the grid.
    pub(crate) columns: u32,
    /// Live cells in row-major order.
    pub(crate) alive: Vec<CellCoord>,
}

impl SeedSnapshot {
    /// Captures the live cells of the provided grid.
    #[must_use]
    pub(crate) fn capture(grid: &Grid) -> Self {
        let size = grid.size();
        Self {
            rows: size.rows(),
            columns: size.columns(),
            alive: grid.alive_cells(),
        }
    }

    /// Dimensions of the seeded grid.
    #[must_use]
    pub(crate) const fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.columns)
    }

    /// Row-major liveness sequence suitable for seeding a simulation.
    #[must_use]
    pub(crate) fn initializer(&self) -> Vec<bool> {
        let size = self.size();
        let mut initializer = vec![false; size.cell_count()];
        for index in self.alive.iter().filter_map(|cell| size.index(*cell)) {
            initializer[index] = true;
        }
        initializer
    }

    /// Encodes the snapshot into a single-line string.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SerializableSeed {
            alive: self.alive.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("seed serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{SEED_HEADER}:{}x{}:{encoded}", self.rows, self.columns)
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, SeedError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SeedError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().unwrap_or_default();
        let version = parts.next().ok_or(SeedError::MissingVersion)?;
        let dimensions = parts.next().ok_or(SeedError::MissingDimensions)?;
        let payload = parts.next().ok_or(SeedError::MissingPayload)?;
        if parts.next().is_some() {
            return Err(SeedError::TrailingSegments);
        }

        if domain != SEED_DOMAIN {
            return Err(SeedError::InvalidPrefix(domain.to_owned()));
        }
        if version != SEED_VERSION {
            return Err(SeedError::UnsupportedVersion(version.to_owned()));
        }

        let (rows, columns) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(SeedError::InvalidEncoding)?;
        let decoded: SerializableSeed =
            serde_json::from_slice(&bytes).map_err(SeedError::InvalidPayload)?;

        let size = GridSize::new(rows, columns);
        if let Some(cell) = decoded.alive.iter().find(|cell| !size.contains(**cell)) {
            return Err(SeedError::CellOutOfBounds {
                row: cell.row(),
                column: cell.column(),
            });
        }

        Ok(Self {
            rows,
            columns,
            alive: decoded.alive,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializableSeed {
    alive: Vec<CellCoord>,
}

/// Errors that can occur while decoding seed strings.
#[derive(Debug, Error)]
pub(crate) enum SeedError {
    /// The provided string was empty or contained only whitespace.
    #[error("seed string was empty")]
    EmptyPayload,
    /// The encoded seed did not contain a version segment.
    #[error("seed string is missing the version")]
    MissingVersion,
    /// The encoded seed did not include grid dimensions.
    #[error("seed string is missing the grid dimensions")]
    MissingDimensions,
    /// The encoded seed did not include the payload segment.
    #[error("seed string is missing the payload")]
    MissingPayload,
    /// The encoded seed carried segments after the payload.
    #[error("seed string has unexpected segments after the payload")]
    TrailingSegments,
    /// The encoded seed used an unexpected prefix segment.
    #[error("seed prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The encoded seed used an unsupported version identifier.
    #[error("seed version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded seed.
    #[error("could not parse grid dimensions '{0}'")]
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode seed payload")]
    InvalidEncoding(#[source] base64::DecodeError),
    /// The decoded payload could not be deserialised.
    #[error("could not parse seed payload")]
    InvalidPayload(#[source] serde_json::Error),
    /// A live cell lies outside the declared grid dimensions.
    #[error("live cell ({row}, {column}) lies outside the seeded grid")]
    CellOutOfBounds {
        /// Row of the offending cell.
        row: u32,
        /// Column of the offending cell.
        column: u32,
    },
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), SeedError> {
    let (rows, columns) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| SeedError::InvalidDimensions(dimensions.to_owned()))?;

    let rows = rows
        .trim()
        .parse::<u32>()
        .map_err(|_| SeedError::InvalidDimensions(dimensions.to_owned()))?;
    let columns = columns
        .trim()
        .parse::<u32>()
        .map_err(|_| SeedError::InvalidDimensions(dimensions.to_owned()))?;

    if rows == 0 || columns == 0 || !within_cell_limit(rows, columns) {
        return Err(SeedError::InvalidDimensions(dimensions.to_owned()));
    }

    Ok((rows, columns))
}

/// Reports whether a grid of the provided dimensions stays within [`MAX_CELLS`].
pub(crate) fn within_cell_limit(rows: u32, columns: u32) -> bool {
    u64::from(rows) * u64::from(columns) <= MAX_CELLS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider_seed() -> SeedSnapshot {
        SeedSnapshot {
            rows: 6,
            columns: 8,
            alive: vec![
                CellCoord::new(0, 1),
                CellCoord::new(1, 2),
                CellCoord::new(2, 0),
                CellCoord::new(2, 1),
                CellCoord::new(2, 2),
            ],
        }
    }

    #[test]
    fn round_trip_populated_seed() {
        let snapshot = glider_seed();

        let encoded = snapshot.encode();
        assert!(encoded.starts_with(&format!("{SEED_HEADER}:6x8:")));

        let decoded = SeedSnapshot::decode(&encoded).expect("seed decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn capture_lists_live_cells_of_grid() {
        let grid = Grid::from_initializer(GridSize::new(2, 2), &[false, true, true, false]);
        let snapshot = SeedSnapshot::capture(&grid);

        assert_eq!(snapshot.size(), GridSize::new(2, 2));
        assert_eq!(snapshot.alive, vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]);
        assert_eq!(snapshot.initializer(), vec![false, true, true, false]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            SeedSnapshot::decode("   "),
            Err(SeedError::EmptyPayload)
        ));
    }

    #[test]
    fn rejects_missing_payload() {
        assert!(matches!(
            SeedSnapshot::decode("life:v1:4x4"),
            Err(SeedError::MissingPayload)
        ));
    }

    #[test]
    fn rejects_foreign_prefix_and_version() {
        assert!(matches!(
            SeedSnapshot::decode("grid:v1:4x4:e30"),
            Err(SeedError::InvalidPrefix(prefix)) if prefix == "grid"
        ));
        assert!(matches!(
            SeedSnapshot::decode("life:v2:4x4:e30"),
            Err(SeedError::UnsupportedVersion(version)) if version == "v2"
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            SeedSnapshot::decode("life:v1:0x4:e30"),
            Err(SeedError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn rejects_dimensions_beyond_cell_limit() {
        assert!(matches!(
            SeedSnapshot::decode("life:v1:4294967295x4294967295:eyJhbGl2ZSI6W119"),
            Err(SeedError::InvalidDimensions(_))
        ));
        assert!(matches!(
            SeedSnapshot::decode("life:v1:4097x4096:eyJhbGl2ZSI6W119"),
            Err(SeedError::InvalidDimensions(_))
        ));

        let largest = SeedSnapshot::decode("life:v1:4096x4096:eyJhbGl2ZSI6W119")
            .expect("grid at the cell limit decodes");
        assert_eq!(largest.initializer().len() as u64, MAX_CELLS);
    }

    #[test]
    fn rejects_segments_after_payload() {
        assert!(matches!(
            SeedSnapshot::decode("life:v1:2x4:eyJhbGl2ZSI6W119:extra"),
            Err(SeedError::TrailingSegments)
        ));
    }

    #[test]
    fn rejects_missing_prefix_as_foreign() {
        assert!(matches!(
            SeedSnapshot::decode(":v1:4x4:e30"),
            Err(SeedError::InvalidPrefix(prefix)) if prefix.is_empty()
        ));
    }

    #[test]
    fn rejects_base64_that_wraps_malformed_json() {
        // "not json"
        assert!(matches!(
            SeedSnapshot::decode("life:v1:4x4:bm90IGpzb24"),
            Err(SeedError::InvalidPayload(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            SeedSnapshot::decode("life:v1:4x4:!!!"),
            Err(SeedError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn rejects_cells_outside_declared_grid() {
        let mut snapshot = glider_seed();
        snapshot.rows = 2;
        let encoded = snapshot.encode();

        assert!(matches!(
            SeedSnapshot::decode(&encoded),
            Err(SeedError::CellOutOfBounds { row: 2, column: 0 })
        ));
    }
}
