//! The `/api/solve` and `/api/check` endpoints.
//!
//! Every outcome, including rejections, is an HTTP 200 response with a JSON
//! body; errors are reported in-band through an `error` field. The handlers
//! are thin wrappers around pure request-to-response functions so the mapping
//! logic is testable without a running server.

use axum::{Json, Router, routing::post};
use gridpost_core::{Digit, ParsePuzzleError, Position, Puzzle};
use gridpost_solver::{Conflicts, check_placement, solve};
use log::debug;
use serde::{Deserialize, Serialize};

const MISSING_FIELD: &str = "Required field missing";
const MISSING_FIELDS: &str = "Required field(s) missing";
const INVALID_LENGTH: &str = "Expected puzzle to be 81 characters long";
const INVALID_CHARACTERS: &str = "Invalid characters in puzzle";
const UNSOLVABLE: &str = "Puzzle cannot be solved";
const INVALID_COORDINATE: &str = "Invalid coordinate";
const INVALID_VALUE: &str = "Invalid value";

/// Body of a `POST /api/solve` request.
///
/// The field is optional so a missing `puzzle` key can be reported through the
/// in-band error payload instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    /// The 81-character puzzle string.
    #[serde(default)]
    pub puzzle: Option<String>,
}

/// Body of a `POST /api/check` request.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    /// The 81-character puzzle string.
    #[serde(default)]
    pub puzzle: Option<String>,
    /// Cell coordinate: row letter `A`-`I` followed by column digit `1`-`9`.
    #[serde(default)]
    pub coordinate: Option<String>,
    /// The digit to place, as a JSON string or number.
    #[serde(default)]
    pub value: Option<CheckValue>,
}

/// The `value` field of a check request, accepted as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CheckValue {
    /// A JSON integer, e.g. `7`.
    Integer(i64),
    /// A JSON non-integer number; never a valid digit.
    Float(f64),
    /// A JSON string, e.g. `"7"`.
    Text(String),
}

impl CheckValue {
    /// Interprets the value as a sudoku digit, if it denotes one.
    fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Integer(n) => u8::try_from(*n)
                .ok()
                .filter(|v| (1..=9).contains(v))
                .map(Digit::from_value),
            Self::Float(_) => None,
            Self::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Body of a `POST /api/solve` response.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solution {
        /// The solved 81-character grid.
        solution: String,
    },
    /// The request was rejected or the puzzle is unsolvable.
    Error {
        /// One of the fixed error strings of the API.
        error: &'static str,
    },
}

/// Body of a `POST /api/check` response.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement is legal.
    Valid {
        /// Always `true`.
        valid: bool,
    },
    /// The placement violates at least one constraint.
    Conflict {
        /// Always `false`.
        valid: bool,
        /// The failing axes, in row/column/region order.
        conflict: Vec<&'static str>,
    },
    /// The request was rejected.
    Error {
        /// One of the fixed error strings of the API.
        error: &'static str,
    },
}

impl From<Conflicts> for CheckResponse {
    fn from(conflicts: Conflicts) -> Self {
        if conflicts.is_valid() {
            return Self::Valid { valid: true };
        }
        let mut conflict = Vec::new();
        if conflicts.row {
            conflict.push("row");
        }
        if conflicts.column {
            conflict.push("column");
        }
        if conflicts.region {
            conflict.push("region");
        }
        Self::Conflict {
            valid: false,
            conflict,
        }
    }
}

/// Maps a puzzle parse failure to its API error string.
fn parse_puzzle(input: &str) -> Result<Puzzle, &'static str> {
    input.parse().map_err(|err| match err {
        ParsePuzzleError::InvalidLength { .. } => INVALID_LENGTH,
        ParsePuzzleError::InvalidCharacter { .. } => INVALID_CHARACTERS,
    })
}

/// Decodes a coordinate such as `"A1"` or `"I9"`.
///
/// The row letter must be uppercase `A`-`I`; the column is a digit `1`-`9`.
fn parse_coordinate(input: &str) -> Option<Position> {
    let mut chars = input.chars();
    let row = chars.next()?;
    let column = chars.next()?;
    if chars.next().is_some() || !row.is_ascii_uppercase() {
        return None;
    }
    let y = u8::try_from(row).ok()? - b'A';
    if y >= 9 {
        return None;
    }
    let x = Digit::from_char(column)?.value() - 1;
    Some(Position::new(x, y))
}

/// Computes the response for a solve request.
#[must_use]
pub fn solve_puzzle(req: &SolveRequest) -> SolveResponse {
    let Some(input) = &req.puzzle else {
        return SolveResponse::Error {
            error: MISSING_FIELD,
        };
    };
    let puzzle = match parse_puzzle(input) {
        Ok(puzzle) => puzzle,
        Err(error) => return SolveResponse::Error { error },
    };
    match solve(&puzzle) {
        Some(solved) => SolveResponse::Solution {
            solution: solved.to_string(),
        },
        None => SolveResponse::Error { error: UNSOLVABLE },
    }
}

/// Computes the response for a check request.
#[must_use]
pub fn check_puzzle(req: &CheckRequest) -> CheckResponse {
    let (Some(input), Some(coordinate), Some(value)) = (&req.puzzle, &req.coordinate, &req.value)
    else {
        return CheckResponse::Error {
            error: MISSING_FIELDS,
        };
    };
    let puzzle = match parse_puzzle(input) {
        Ok(puzzle) => puzzle,
        Err(error) => return CheckResponse::Error { error },
    };
    let Some(pos) = parse_coordinate(coordinate) else {
        return CheckResponse::Error {
            error: INVALID_COORDINATE,
        };
    };
    let Some(digit) = value.as_digit() else {
        return CheckResponse::Error {
            error: INVALID_VALUE,
        };
    };
    check_placement(&puzzle, pos, digit).into()
}

async fn solve_handler(Json(req): Json<SolveRequest>) -> Json<SolveResponse> {
    let resp = solve_puzzle(&req);
    debug!("POST /api/solve -> {resp:?}");
    Json(resp)
}

async fn check_handler(Json(req): Json<CheckRequest>) -> Json<CheckResponse> {
    let resp = check_puzzle(&req);
    debug!("POST /api/check -> {resp:?}");
    Json(resp)
}

/// Builds the service router.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve_handler))
        .route("/api/check", post(check_handler))
}
